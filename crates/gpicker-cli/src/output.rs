use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Table header, bold when stdout is a terminal
pub fn print_header(header: &str) {
    if std::io::stdout().is_terminal() {
        println!("{}", header.bold());
    } else {
        println!("{}", header);
    }
    println!("{}", "-".repeat(header.len().max(40)));
}

/// Dim text for secondary columns when stdout is a terminal
pub fn dim(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
