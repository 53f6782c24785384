//! Status message functions for terminal output.

use console::style;

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold().for_stderr(), message);
}

pub fn info(message: &str) {
    eprintln!("{} {}", style("ℹ").blue().bold().for_stderr(), message);
}

pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        style("⚠").yellow().bold().for_stderr(),
        style(message).yellow().for_stderr()
    );
}
