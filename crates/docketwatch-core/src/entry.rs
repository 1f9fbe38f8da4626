//! Docket entry records and their classification labels.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single filing as it appears on the court docket.
///
/// Supplied by the caller; never modified by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocketEntry {
    pub docket_number: u32,
    /// ISO 8601 date (`YYYY-MM-DD`) on the wire.
    pub date: NaiveDate,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filed_by: Option<String>,
}

impl DocketEntry {
    pub fn new(docket_number: u32, date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            docket_number,
            date,
            text: text.into(),
            filed_by: None,
        }
    }

    pub fn filed_by(mut self, filer: impl Into<String>) -> Self {
        self.filed_by = Some(filer.into());
        self
    }
}

/// Legal type of a docket entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Motion,
    Response,
    Reply,
    Order,
    Complaint,
    Answer,
    Notice,
    Summons,
    Other,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Motion => "MOTION",
            Self::Response => "RESPONSE",
            Self::Reply => "REPLY",
            Self::Order => "ORDER",
            Self::Complaint => "COMPLAINT",
            Self::Answer => "ANSWER",
            Self::Notice => "NOTICE",
            Self::Summons => "SUMMONS",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Motion subtype, recognised from the motion's caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MotionType {
    Dismiss,
    Tro,
    Injunction,
    Sanctions,
    Disqualify,
    Consolidate,
    Strike,
    Extension,
    Substitute,
    Amend,
    Reconsideration,
    SummaryJudgment,
    ProtectiveOrder,
    Compel,
    Other,
}

impl MotionType {
    /// Human-readable label used in alert messages and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dismiss => "Motion to Dismiss",
            Self::Tro => "Motion for TRO",
            Self::Injunction => "Motion for Injunction",
            Self::Sanctions => "Motion for Sanctions",
            Self::Disqualify => "Motion to Disqualify Counsel",
            Self::Consolidate => "Motion to Consolidate",
            Self::Strike => "Motion to Strike",
            Self::Extension => "Motion for Extension of Time",
            Self::Substitute => "Motion to Substitute Party",
            Self::Amend => "Motion to Amend",
            Self::Reconsideration => "Motion to Reconsider",
            Self::SummaryJudgment => "Motion for Summary Judgment",
            Self::ProtectiveOrder => "Motion for Protective Order",
            Self::Compel => "Motion to Compel",
            Self::Other => "Other Motion",
        }
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Disposition of a motion, driven by the orders linked to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Granted,
    Denied,
    Withdrawn,
    Stricken,
    Moot,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Granted => "GRANTED",
            Self::Denied => "DENIED",
            Self::Withdrawn => "WITHDRAWN",
            Self::Stricken => "STRICKEN",
            Self::Moot => "MOOT",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A docket entry together with everything the classifier derived from its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    #[serde(flatten)]
    pub entry: DocketEntry,
    pub entry_type: EntryType,
    /// Only set when `entry_type` is [`EntryType::Motion`].
    pub motion_type: Option<MotionType>,
    pub is_emergency: bool,
    /// Docket number this entry refers to ("re 10", "#10"), if any.
    pub related_docket_number: Option<u32>,
}

impl ClassifiedEntry {
    pub fn docket_number(&self) -> u32 {
        self.entry.docket_number
    }

    pub fn is_motion(&self) -> bool {
        self.entry_type == EntryType::Motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docket_entry_reads_iso_dates() {
        let json = r#"{
            "docket_number": 10,
            "date": "2024-01-01",
            "text": "MOTION for TRO",
            "filed_by": "Smith"
        }"#;
        let entry: DocketEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.docket_number, 10);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(entry.filed_by.as_deref(), Some("Smith"));
    }

    #[test]
    fn docket_entry_filer_is_optional() {
        let json = r#"{"docket_number": 3, "date": "2024-02-05", "text": "SUMMONS Issued"}"#;
        let entry: DocketEntry = serde_json::from_str(json).unwrap();
        assert!(entry.filed_by.is_none());
    }

    #[test]
    fn enums_serialize_as_upper_case_names() {
        assert_eq!(serde_json::to_string(&EntryType::Motion).unwrap(), "\"MOTION\"");
        assert_eq!(
            serde_json::to_string(&MotionType::SummaryJudgment).unwrap(),
            "\"SUMMARY_JUDGMENT\""
        );
        assert_eq!(serde_json::to_string(&OrderStatus::Moot).unwrap(), "\"MOOT\"");
    }

    #[test]
    fn classified_entry_flattens_source_fields() {
        let classified = ClassifiedEntry {
            entry: DocketEntry::new(15, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(), "RESPONSE re 10"),
            entry_type: EntryType::Response,
            motion_type: None,
            is_emergency: false,
            related_docket_number: Some(10),
        };
        let value = serde_json::to_value(&classified).unwrap();
        assert_eq!(value["docket_number"], 15);
        assert_eq!(value["entry_type"], "RESPONSE");
        assert_eq!(value["related_docket_number"], 10);
    }

    #[test]
    fn motion_labels() {
        assert_eq!(MotionType::Tro.to_string(), "Motion for TRO");
        assert_eq!(MotionType::Reconsideration.label(), "Motion to Reconsider");
        assert_eq!(MotionType::Other.label(), "Other Motion");
    }

    #[test]
    fn default_status_is_pending() {
        assert!(OrderStatus::default().is_pending());
        assert!(!OrderStatus::Granted.is_pending());
    }
}
