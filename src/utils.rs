pub mod logger;
pub mod redact;

pub use logger::init_tracing;
pub use redact::redact_url;
