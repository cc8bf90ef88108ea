use console::style;

/// Print an error diagnostic to stderr.
///
/// Stdout is reserved for the descriptor line, so everything else lands on
/// the error channel.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a verbose trace line to stderr
pub fn display_verbose(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}
