//! compiletest launcher entry point

fn main() {
    // Structured logging on stderr, quiet by default so the runner's own output stays readable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    compiletest_launcher::cli::run();
}
