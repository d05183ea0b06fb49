pub mod create;

use colored::Colorize;

/// Prints a final success line with a green check mark.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints a failure line with a red cross.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}
