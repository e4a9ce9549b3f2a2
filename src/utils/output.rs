// Terminal output utilities

use console::style;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✨").green(), style(msg).green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("❌").red().bold(), style(msg).red());
}

/// Print a progress message
pub fn info(msg: &str) {
    println!("{}", style(msg).blue());
}

/// Print a section header
pub fn header(msg: &str) {
    println!("{}", style(msg).cyan());
}

/// Print an indented command the user should run
pub fn command(cmd: &str) {
    println!("  {}", style(cmd).yellow());
}
