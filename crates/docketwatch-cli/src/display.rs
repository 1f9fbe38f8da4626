//! Terminal rendering for classification and deadline lookups.

use chrono::NaiveDate;
use docketwatch_core::{
    ClassifiedEntry, DeadlineInfo, DocketEntry, classify_entry,
};

const TEXT_WIDTH: usize = 56;

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

fn entry_row(entry: &ClassifiedEntry) -> String {
    let motion = entry.motion_type.map(|m| m.label()).unwrap_or("");
    let related = entry
        .related_docket_number
        .map(|n| format!("#{n}"))
        .unwrap_or_default();
    let flag = if entry.is_emergency { "!" } else { "" };
    format!(
        "{:>5}  {}  {:<9} {:<1} {:<30} {:<6} {}",
        entry.docket_number(),
        entry.entry.date.format("%Y-%m-%d"),
        entry.entry_type,
        flag,
        motion,
        related,
        truncate(&entry.entry.text, TEXT_WIDTH),
    )
}

/// Print one row per classified entry.
pub fn print_entries(entries: &[ClassifiedEntry]) {
    println!(
        "{:>5}  {:<10}  {:<9} {:<1} {:<30} {:<6} {}",
        "#", "date", "type", "", "motion", "re", "text"
    );
    for entry in entries {
        println!("{}", entry_row(entry));
    }
    println!();
}

/// Print how a single piece of entry text classifies.
pub fn print_classification(text: &str) {
    // Date and number are placeholders; classification reads only the text.
    let placeholder = DocketEntry::new(1, NaiveDate::MIN, text);
    let classified = classify_entry(&placeholder);

    println!("  {:<14} {}", "entry_type", classified.entry_type);
    if let Some(motion) = classified.motion_type {
        println!("  {:<14} {}", "motion_type", motion);
    }
    println!("  {:<14} {}", "emergency", classified.is_emergency);
    match classified.related_docket_number {
        Some(n) => println!("  {:<14} #{n}", "related"),
        None => println!("  {:<14} -", "related"),
    }
}

/// Print a computed deadline with its day breakdown.
pub fn print_deadline(from: NaiveDate, info: &DeadlineInfo) {
    println!("=== {} ===", info.description);
    println!("  {:<14} {}", "from", from.format("%Y-%m-%d"));
    println!(
        "  {:<14} {} ({}+{} days)",
        "due",
        info.deadline_date.format("%Y-%m-%d (%a)"),
        info.base_days,
        info.pro_se_adjustment
    );
    println!("  {:<14} {}", "jurisdictional", if info.is_jurisdictional { "yes" } else { "no" });
}
