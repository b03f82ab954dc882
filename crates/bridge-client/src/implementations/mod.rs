pub mod http;

pub use http::HttpBridge;
