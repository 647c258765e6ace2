use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Filter comes from `TRIVIA_LOG`, then
/// `RUST_LOG`, then defaults to `warn`. Output goes to stderr so it stays out
/// of the quiz frames.
pub fn init() {
    let filter = EnvFilter::try_from_env("TRIVIA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        eprintln!("logging already initialised");
    }
}
