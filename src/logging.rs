use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. Filtering follows `RUST_LOG` and defaults to
/// `info`. Output goes to stderr so the report on stdout stays parseable.
pub fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    if json {
        builder.json().flatten_event(true).init();
    } else {
        builder.with_target(false).init();
    }
}
