/// Installs the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG` (`TRACE`, `DEBUG`, `INFO`, `WARN` or `ERROR`). Everything goes to
/// standard error, since standard output carries the listing itself.
pub fn init() {
    use std::io::IsTerminal;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_level(true)
        // The target is always this crate.
        .with_target(false)
        .without_time()
        .init();
}
