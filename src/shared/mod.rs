pub mod error;
#[cfg(test)]
pub(crate) mod log_capture;
pub mod result;
#[cfg(test)]
pub(crate) mod stub_transport;

pub use error::ResolverError;
pub use result::Result;
