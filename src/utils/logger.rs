use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins over the verbosity default.
fn default_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "small_kit=debug,info"
    } else {
        "small_kit=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global subscriber: compact lines for a terminal, JSON lines when `json` is set.
pub fn init_logger(verbose: bool, json: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(default_filter(verbose));
    if json {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer.compact()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_follows_verbosity() {
        std::env::remove_var("RUST_LOG");
        assert!(default_filter(true).to_string().contains("small_kit=debug"));
        assert!(default_filter(false).to_string().contains("small_kit=info"));
    }
}
