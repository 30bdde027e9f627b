pub mod error;
pub mod event;
pub mod response;

pub use error::ProxyError;
pub use event::{HttpVerb, ProxyEvent, RequestConfig};
pub use response::{ProxyResponse, UpstreamResponse};
