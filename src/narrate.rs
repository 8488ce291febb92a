// Console headings shared by the demo binaries.

use colored::Colorize;

pub fn title(text: &str) {
    println!("{}", text.bold().cyan());
    println!("{}\n", "=".repeat(text.chars().count()));
}

pub fn section(text: &str) {
    println!("\n{}", format!("=== {text} ===").bold());
}

pub fn step(text: &str) {
    println!("\n{}", format!(">>> {text}").yellow());
}

pub fn success(text: &str) {
    println!("{}", format!("✓ {text}").green());
}

pub fn failure(text: &str) {
    println!("{}", format!("✗ {text}").red());
}
