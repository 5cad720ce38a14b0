//! Terminal output for the CLI: the usage hint, the success summary and
//! the failure banner. Nothing in the pipeline prints.

use colored::Colorize;

use crate::card::Card;

pub const USAGE_HINT: &str = "[!] Please provide a path to CSV file";
pub const FAILURE_BANNER: &str =
    "[!] There was an error while generating the PDF file... What happened was:";

pub fn summary_banner(file_name: &str, stories: usize) -> String {
    format!(">>> Generated PDF file in '{file_name}' with {stories} stories:")
}

/// Summary line followed by one `* title` line per card.
pub fn summary_lines(file_name: &str, cards: &[Card]) -> Vec<String> {
    let mut lines = Vec::with_capacity(cards.len() + 1);
    lines.push(summary_banner(file_name, cards.len()));
    lines.extend(cards.iter().map(|card| format!("* {}", card.title)));
    lines
}

pub fn print_usage() {
    println!("{USAGE_HINT}");
}

pub fn print_summary(file_name: &str, cards: &[Card]) {
    let lines = summary_lines(file_name, cards);
    if let Some((banner, titles)) = lines.split_first() {
        println!("{}", banner.black().on_green());
        for line in titles {
            println!("{line}");
        }
    }
}

/// Failure banner, then the error and each of its sources.
pub fn print_failure(err: &dyn std::error::Error) {
    println!("{}", FAILURE_BANNER.white().on_red());
    println!("{err}");
    let mut source = err.source();
    while let Some(cause) = source {
        println!("  caused by: {cause}");
        source = cause.source();
    }
}
