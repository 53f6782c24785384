//! Logging setup for the modviz CLI.
//!
//! Verbosity is chosen by flag first, then `RUST_LOG`, then an info default.
//!
//! ```rust,no_run
//! use modviz_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("loading snapshot");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "modviz_cli=debug,modviz_graph=debug,modviz_config=debug";
const QUIET_FILTER: &str = "modviz_cli=error,modviz_graph=error,modviz_config=error";
const DEFAULT_FILTER: &str = "modviz_cli=info,modviz_graph=info,modviz_config=info";

/// Directives forced by the flags, or `None` to defer to `RUST_LOG`.
/// `verbose` wins over `quiet`.
pub fn flag_directives(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some(VERBOSE_FILTER)
    } else if quiet {
        Some(QUIET_FILTER)
    } else {
        None
    }
}

/// Build the filter for the given flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    match flag_directives(verbose, quiet) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Install the global tracing subscriber. Call once, before any logging.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Whether colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them even off a TTY,
/// otherwise stderr terminal capabilities decide.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}
