mod redirect_resolver;
mod text_fetcher;

pub use redirect_resolver::{RedirectResolver, DEFAULT_REDIRECT_HOSTS};
pub use text_fetcher::TextFetcher;
