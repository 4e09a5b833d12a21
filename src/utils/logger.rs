use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "poetry_scaffold=debug,warn"
    } else {
        "poetry_scaffold=info,warn"
    }
}

/// `RUST_LOG` wins over `--verbose` when it parses.
fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Installs a compact stderr subscriber. Stdout stays reserved for progress
/// lines and the JSON report.
pub fn init_cli_logger(verbose: bool) {
    let stderr_is_tty = std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(stderr_is_tty)
                .without_time()
                .with_target(verbose)
                .compact(),
        )
        .init();
}
