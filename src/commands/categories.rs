//! Categories command - show the keyword rules behind category guessing

use colored::Colorize;

use crate::generate::{CATEGORY_RULES, FALLBACK_CATEGORY};

/// Run the categories command
pub fn run() {
    println!("{}", "Category keyword rules".bold());
    println!();
    println!("Rules are checked against the lower-cased file name, in order;");
    println!("the first match wins.");
    println!();

    for (label, keywords) in CATEGORY_RULES {
        println!("  {} - {}", label.cyan(), keywords.join(", "));
    }

    println!();
    println!(
        "  {} - no keyword matched",
        FALLBACK_CATEGORY.cyan()
    );
    println!();
    println!("PDFs inside a first-level subdirectory take their category from");
    println!("the directory name instead (e.g. 01_anarsizm -> Anarsizm).");
}
