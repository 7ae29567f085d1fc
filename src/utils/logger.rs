use std::io::IsTerminal;

use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

pub(crate) const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber once. Filtered by `RUST_LOG`, default `warn`,
/// so a successful run is silent on stderr.
pub fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // stdout carries the response body only
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
        assert!(TRACING_INIT.get().is_some());
    }

    #[test]
    fn default_filter_hides_info() {
        let level: tracing::level_filters::LevelFilter = DEFAULT_FILTER.parse().unwrap();
        assert_eq!(level, tracing::level_filters::LevelFilter::WARN);
    }
}
