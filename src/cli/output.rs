//! Output formatting and progress spinners for the CLI

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for loading and analysis tasks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(80));
    println!("{title}");
    println!("{}", "=".repeat(80));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format a fraction as a percentage with one decimal
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Shorten a long state key for display
pub fn abbreviate(key: &str, max: usize) -> String {
    if key.chars().count() <= max {
        key.to_string()
    } else {
        let head: String = key.chars().take(max).collect();
        format!("{head}...")
    }
}

/// Format a 1-indexed chain set, `-` when empty
pub fn format_chains<'a>(chains: impl IntoIterator<Item = &'a usize>) -> String {
    let parts: Vec<String> = chains.into_iter().map(usize::to_string).collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        format!("[{}]", parts.join(", "))
    }
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:28} {}", format!("{key}:"), value);
}
