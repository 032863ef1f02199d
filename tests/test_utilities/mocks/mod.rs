/// Mock implementations for testing
mod mock_package_metadata_provider;
mod recording_transport;

pub use mock_package_metadata_provider::MockPackageMetadataProvider;
pub use recording_transport::RecordingTransport;
