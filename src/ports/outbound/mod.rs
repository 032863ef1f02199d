/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the resolution core uses
/// to interact with external systems (network, hosting platforms,
/// package metadata sources).
pub mod http_transport;
pub mod package_metadata_provider;
pub mod repository_host;

pub use http_transport::{HttpRequest, HttpResponse, HttpTransport};
pub use package_metadata_provider::{PackageMetadata, PackageMetadataProvider};
pub use repository_host::{HostLookup, RepositoryHost};
