/// Package metadata sources
mod json_package_list;
mod url_list;

pub use json_package_list::JsonPackageListReader;
pub use url_list::UrlListProvider;
