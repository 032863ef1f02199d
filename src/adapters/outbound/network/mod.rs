/// Network adapters for external API calls
mod caching_repository_host;
mod github_repository_host;
mod reqwest_transport;

pub use caching_repository_host::CachingRepositoryHost;
pub use github_repository_host::{GitHubCredentials, GitHubRepositoryHost};
pub use reqwest_transport::ReqwestTransport;
