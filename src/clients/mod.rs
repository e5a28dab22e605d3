pub mod http;
pub mod registry;
pub mod search;

pub use http::HttpClient;
pub use registry::RegistryClient;
pub use search::SearchClient;
