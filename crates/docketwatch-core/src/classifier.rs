//! Pattern-based classification of docket entry text.
//!
//! Every table here is an ordered slice: the first matching pattern wins,
//! so the order of rows is part of the behaviour. A caption such as
//! "MOTION to Alter or Amend" must reach the reconsideration row only
//! because the amend row above it fails to match.
//!
//! # Precedence
//!
//! 1. Motion subtypes (`MOTION to Dismiss`, `MOTION for TRO`, ...)
//! 2. Any other text containing `MOTION`
//! 3. Responses, replies, joinders, supplements
//! 4. Order outcomes (`ORDER granting 10`, `... moot ...`)
//! 5. Bare keywords: ORDER, COMPLAINT, ANSWER, NOTICE, SUMMONS

use std::sync::LazyLock;

use regex::Regex;

use crate::entry::{ClassifiedEntry, DocketEntry, EntryType, MotionType, OrderStatus};

fn compile(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("static docket pattern must compile")
}

static MOTION_PATTERNS: LazyLock<Vec<(MotionType, Regex)>> = LazyLock::new(|| {
    [
        (MotionType::Dismiss, r"MOTION\s+to\s+Dismiss(?:\s+(?:for\s+)?(.+?))?"),
        (MotionType::Tro, r"MOTION\s+for\s+(?:Temporary\s+Restraining\s+Order|TRO)"),
        (MotionType::Injunction, r"MOTION\s+for\s+(?:Preliminary\s+)?Injunction"),
        (MotionType::Sanctions, r"MOTION\s+for\s+(?:Rule\s+11\s+)?Sanctions"),
        (MotionType::Disqualify, r"MOTION\s+to\s+Disqualify\s+Counsel"),
        (MotionType::Consolidate, r"MOTION\s+to\s+Consolidate"),
        (MotionType::Strike, r"MOTION\s+to\s+Strike"),
        (MotionType::Extension, r"MOTION\s+for\s+Extension\s+of\s+Time"),
        (MotionType::Substitute, r"MOTION\s+to\s+Substitute\s+Party"),
        (MotionType::Amend, r"MOTION\s+(?:for\s+leave\s+to\s+file\s+)?(?:to\s+)?amend"),
        (MotionType::Reconsideration, r"MOTION\s+to\s+(?:Alter\s+or\s+Amend|Reconsider)"),
        (MotionType::SummaryJudgment, r"MOTION\s+for\s+Summary\s+Judgment"),
        (MotionType::ProtectiveOrder, r"MOTION\s+for\s+Protective\s+Order"),
        (MotionType::Compel, r"MOTION\s+to\s+Compel"),
    ]
    .into_iter()
    .map(|(motion_type, pattern)| (motion_type, compile(pattern)))
    .collect()
});

// Only the reply row yields REPLY; joinders and supplements count as responses.
static RESPONSE_PATTERNS: LazyLock<Vec<(EntryType, Regex)>> = LazyLock::new(|| {
    [
        (EntryType::Response, r"RESPONSE\s+(?:in\s+)?Opposition\s+(?:re\s+|to\s+)?(\d+)"),
        (EntryType::Reply, r"REPL?Y\s+(?:in\s+Support\s+)?(?:re\s+|to\s+)?(\d+)"),
        (EntryType::Response, r"(?:JOINDER|joining)\s+(?:in\s+)?(?:re\s+|to\s+)?(\d+)"),
        (EntryType::Response, r"SUPPLEMENT(?:AL)?\s+(?:re\s+|to\s+)?(\d+)"),
    ]
    .into_iter()
    .map(|(entry_type, pattern)| (entry_type, compile(pattern)))
    .collect()
});

static ORDER_PATTERNS: LazyLock<Vec<(OrderStatus, Regex)>> = LazyLock::new(|| {
    [
        (OrderStatus::Granted, r"(?:TEXT\s+)?(?:ONL?Y\s+)?ORDER\s+granting\s+(\d+)"),
        (OrderStatus::Denied, r"(?:TEXT\s+)?(?:ONL?Y\s+)?ORDER\s+denying\s+(\d+)"),
        (OrderStatus::Withdrawn, r"(?:ORDER\s+)?(?:withdrawing|WITHDRAWN)\s+(\d+)"),
        (OrderStatus::Stricken, r"(?:ORDER\s+)?(?:striking|STRICKEN)\s+(\d+)"),
        (OrderStatus::Moot, r"(?:ORDER\s+)?.*moot.*(\d+)"),
    ]
    .into_iter()
    .map(|(status, pattern)| (status, compile(pattern)))
    .collect()
});

static EMERGENCY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"EMERGENCY", r"EX\s+PARTE", r"URGENT", r"NECESSITOUS", r"IMMEDIATE"]
        .into_iter()
        .map(compile)
        .collect()
});

static REFERENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    // ASCII digits only; a non-ASCII digit run falls through to the next row.
    [r"re\s+([0-9]+)", r"to\s+([0-9]+)\s+MOTION", r"#\s*([0-9]+)"]
        .into_iter()
        .map(compile)
        .collect()
});

/// Keyword fallbacks checked after every pattern table has missed.
const KEYWORD_LADDER: &[(&str, EntryType)] = &[
    ("ORDER", EntryType::Order),
    ("COMPLAINT", EntryType::Complaint),
    ("ANSWER", EntryType::Answer),
    ("NOTICE", EntryType::Notice),
    ("SUMMONS", EntryType::Summons),
];

/// Classify entry text into an entry type and, for motions, a motion subtype.
///
/// Never fails: text matching nothing is `(EntryType::Other, None)`.
pub fn classify(text: &str) -> (EntryType, Option<MotionType>) {
    if let Some((motion_type, _)) = MOTION_PATTERNS.iter().find(|(_, re)| re.is_match(text)) {
        return (EntryType::Motion, Some(*motion_type));
    }

    let upper = text.to_uppercase();
    if upper.contains("MOTION") {
        return (EntryType::Motion, Some(MotionType::Other));
    }

    if let Some((entry_type, _)) = RESPONSE_PATTERNS.iter().find(|(_, re)| re.is_match(text)) {
        return (*entry_type, None);
    }

    if order_outcome(text).is_some() {
        return (EntryType::Order, None);
    }

    let entry_type = KEYWORD_LADDER
        .iter()
        .find(|(keyword, _)| upper.contains(keyword))
        .map(|&(_, entry_type)| entry_type)
        .unwrap_or(EntryType::Other);
    (entry_type, None)
}

/// Whether the text flags the filing as an emergency (EMERGENCY, EX PARTE, ...).
pub fn is_emergency(text: &str) -> bool {
    EMERGENCY_PATTERNS.iter().any(|re| re.is_match(text))
}

/// Extract the docket number an entry refers to.
///
/// Tries `re <n>`, then `to <n> MOTION`, then `#<n>`; the first pattern that
/// matches decides. A digit run too large for a docket number counts as no
/// reference.
pub fn extract_related_docket_num(text: &str) -> Option<u32> {
    REFERENCE_PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps[1].parse().ok())
}

/// The first order outcome whose pattern matches the text.
pub fn order_outcome(text: &str) -> Option<OrderStatus> {
    ORDER_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(status, _)| *status)
}

/// Run every classifier over one docket entry.
///
/// The related docket number comes only from [`extract_related_docket_num`];
/// the number in a caption such as "ORDER granting 10" does not link.
pub fn classify_entry(entry: &DocketEntry) -> ClassifiedEntry {
    let text = entry.text.as_str();
    let (entry_type, motion_type) = classify(text);
    ClassifiedEntry {
        entry: entry.clone(),
        entry_type,
        motion_type,
        is_emergency: is_emergency(text),
        related_docket_number: extract_related_docket_num(text),
    }
}
