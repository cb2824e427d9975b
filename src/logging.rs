use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber: human readable lines on stderr, filtered
/// by `RUST_LOG` when set and by `default_filter` otherwise.
///
/// Returns `false` when a subscriber was already installed.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn second_init_is_a_no_op() {
        init("warn");
        assert!(!init("debug"));
    }
}
