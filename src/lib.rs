pub mod dispatch;
pub mod handler;
pub mod http;
pub mod models;
pub mod schema;
pub mod secrets;
