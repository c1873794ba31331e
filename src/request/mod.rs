// HTTP 请求管道

mod client;
mod descriptor;
mod types;

pub use client::{HttpClient, HttpClientBuilder};
pub use descriptor::RequestDescriptor;
pub use reqwest::Method;
pub use types::{InboundResponse, OutgoingRequest};
