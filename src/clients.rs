pub mod base;
pub mod http;

pub use base::Transport;
pub use http::HttpTransport;
