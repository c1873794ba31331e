pub mod api;
pub mod cache;
pub mod common;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod request;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use request::HttpClient;
pub use store::SessionStore;
