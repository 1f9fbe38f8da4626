//! Plain-text deadline reports.
//!
//! Section headers and line layouts are read by downstream tooling; keep
//! them stable.

use crate::alert::{Alert, AlertKind, Priority};
use crate::analyzer::Analysis;
use crate::chain::MotionChain;
use crate::deadline::DeadlineInfo;

const RULE_WIDTH: usize = 60;

fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "[!!]",
        Priority::Medium => "[!]",
        _ => "[-]",
    }
}

fn docket_list(dockets: &[u32]) -> String {
    dockets
        .iter()
        .map(|n| format!("#{n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn due_line(label: &str, deadline: &DeadlineInfo) -> String {
    format!(
        "   {label} Due: {} ({}+{} days)",
        deadline.deadline_date.format("%Y-%m-%d"),
        deadline.base_days,
        deadline.pro_se_adjustment
    )
}

fn push_alerts(lines: &mut Vec<String>, alerts: &[Alert]) {
    if alerts.is_empty() {
        lines.push("\nNo pending deadlines.".to_string());
        return;
    }

    let overdue: Vec<&Alert> = alerts.iter().filter(|a| a.kind == AlertKind::Overdue).collect();
    if !overdue.is_empty() {
        lines.push("\n### OVERDUE DEADLINES ###".to_string());
        for alert in overdue {
            lines.push(format!("  [!] {}", alert.message));
        }
    }

    let upcoming: Vec<&Alert> = alerts.iter().filter(|a| a.kind == AlertKind::Upcoming).collect();
    if !upcoming.is_empty() {
        lines.push("\n### UPCOMING DEADLINES ###".to_string());
        for alert in upcoming {
            lines.push(format!("  {} {}", priority_marker(alert.priority), alert.message));
        }
    }
}

fn push_chain(lines: &mut Vec<String>, chain: &MotionChain) {
    lines.push(format!("\n#{} - {}", chain.motion_docket_num, chain.motion_type));
    lines.push(format!(
        "   Filed: {} by {}",
        chain.motion_date.format("%Y-%m-%d"),
        chain.filed_by
    ));
    lines.push(format!("   Status: {}", chain.status));

    for (label, dockets) in [
        ("Responses", &chain.responses),
        ("Replies", &chain.replies),
        ("Orders", &chain.orders),
    ] {
        if !dockets.is_empty() {
            lines.push(format!("   {label}: {}", docket_list(dockets)));
        }
    }

    if let Some(deadline) = chain.open_response_deadline() {
        lines.push(due_line("Response", deadline));
    }
    if let Some(deadline) = chain.open_reply_deadline() {
        lines.push(due_line("Reply", deadline));
    }
}

/// Deadline report: alerts grouped by urgency, then every motion's status.
pub fn format_deadline_report(analysis: &Analysis) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut lines = vec![
        heavy.clone(),
        "FEDERAL LITIGATION DEADLINE REPORT".to_string(),
        format!(
            "Pro Se Status: {}",
            if analysis.pro_se { "YES (+3 days Rule 6(d))" } else { "NO" }
        ),
        heavy.clone(),
    ];

    push_alerts(&mut lines, &analysis.alerts);

    lines.push(format!("\n{light}"));
    lines.push("MOTION STATUS SUMMARY".to_string());
    lines.push(light);
    for chain in analysis.motion_chains.values() {
        push_chain(&mut lines, chain);
    }

    lines.push(format!("\n{heavy}"));
    lines.join("\n")
}

/// Full case report: case header, deadline report, and summary counts.
pub fn analyze_case_docket(case_number: &str, analysis: &Analysis) -> String {
    let summary = &analysis.summary;
    let lines = [
        format!("DOCKET ANALYSIS: Case {case_number}"),
        format_deadline_report(analysis),
        "\nSUMMARY:".to_string(),
        format!("  Total Entries: {}", summary.total_entries),
        format!("  Total Motions: {}", summary.total_motions),
        format!("  Pending: {}", summary.pending_motions),
        format!("  Resolved: {}", summary.resolved_motions),
        format!("  Emergency Motions: {}", summary.emergency_motions),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::DocketAnalyzer;
    use crate::entry::DocketEntry;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn docket() -> Vec<DocketEntry> {
        vec![
            DocketEntry::new(5, date(2024, 1, 29), "MOTION to Dismiss").filed_by("Acme Corp"),
            DocketEntry::new(6, date(2024, 1, 30), "EMERGENCY MOTION for TRO").filed_by("Smith"),
            DocketEntry::new(7, date(2024, 2, 1), "ORDER denying 6 re 6"),
            DocketEntry::new(8, date(2024, 1, 2), "MOTION to Compel Discovery").filed_by("Smith"),
            DocketEntry::new(9, date(2024, 2, 8), "RESPONSE in Opposition re 8").filed_by("Acme Corp"),
            DocketEntry::new(12, date(2024, 1, 3), "MOTION for Summary Judgment"),
        ]
    }

    fn report(as_of: NaiveDate) -> String {
        let analysis = DocketAnalyzer::new(true)
            .analyze_entries_as_of(&docket(), as_of)
            .unwrap();
        format_deadline_report(&analysis)
    }

    #[test]
    fn report_layout() {
        // #5 response due 2024-02-15 (HIGH), #8 reply due 2024-02-19 (MEDIUM),
        // #12 response due 2024-01-22 (overdue).
        let text = report(date(2024, 2, 14));
        let expected = "\
============================================================
FEDERAL LITIGATION DEADLINE REPORT
Pro Se Status: YES (+3 days Rule 6(d))
============================================================

### OVERDUE DEADLINES ###
  [!] OVERDUE: Response to Motion for Summary Judgment (#12) was due 23 days ago!

### UPCOMING DEADLINES ###
  [!!] Response to Motion to Dismiss (#5) due in 1 days
  [!] Reply for Motion to Compel (#8) due in 5 days

------------------------------------------------------------
MOTION STATUS SUMMARY
------------------------------------------------------------

#5 - Motion to Dismiss
   Filed: 2024-01-29 by Acme Corp
   Status: PENDING
   Response Due: 2024-02-15 (14+3 days)

#6 - Motion for TRO
   Filed: 2024-01-30 by Smith
   Status: DENIED
   Orders: #7

#8 - Motion to Compel
   Filed: 2024-01-02 by Smith
   Status: PENDING
   Responses: #9
   Reply Due: 2024-02-19 (7+3 days)

#12 - Motion for Summary Judgment
   Filed: 2024-01-03 by Unknown
   Status: PENDING
   Response Due: 2024-01-22 (14+3 days)

============================================================";
        assert_eq!(text, expected);
    }

    #[test]
    fn no_alerts_message() {
        let text = report(date(2023, 12, 1));
        assert!(text.contains("\nNo pending deadlines.\n"));
        assert!(!text.contains("### OVERDUE DEADLINES ###"));
        assert!(!text.contains("### UPCOMING DEADLINES ###"));
    }

    #[test]
    fn represented_header() {
        let analysis = DocketAnalyzer::new(false)
            .analyze_entries_as_of(&docket(), date(2024, 2, 14))
            .unwrap();
        let text = format_deadline_report(&analysis);
        assert!(text.contains("Pro Se Status: NO\n"));
        assert!(text.contains("Response Due: 2024-02-12 (14+0 days)"));
    }

    #[test]
    fn case_report_wraps_summary() {
        let analysis = DocketAnalyzer::new(true)
            .analyze_entries_as_of(&docket(), date(2024, 2, 14))
            .unwrap();
        let text = analyze_case_docket("1:24-cv-00042", &analysis);

        assert!(text.starts_with("DOCKET ANALYSIS: Case 1:24-cv-00042\n====="));
        assert!(text.ends_with(
            "\n\nSUMMARY:\n  Total Entries: 6\n  Total Motions: 4\n  Pending: 3\n  Resolved: 1\n  Emergency Motions: 1"
        ));
    }

    #[test]
    fn markers_by_priority() {
        assert_eq!(priority_marker(Priority::High), "[!!]");
        assert_eq!(priority_marker(Priority::Medium), "[!]");
        assert_eq!(priority_marker(Priority::Low), "[-]");
        assert_eq!(priority_marker(Priority::Critical), "[-]");
    }
}
