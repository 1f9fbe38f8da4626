//! Federal deadline rules with Rule 6(d) pro se adjustments.
//!
//! Deadlines are counted in calendar days from the triggering filing. A
//! deadline that lands on a weekend rolls forward to the following Monday
//! (Saturday +2, Sunday +1). The roll happens once; holidays are not known.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::DocketError;

/// The fixed table of deadline rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineKind {
    MotionResponse,
    MotionReply,
    Appeal,
    ObjectionMagistrate,
    #[serde(rename = "rule_59_motion")]
    Rule59Motion,
    #[serde(rename = "rule_60_motion")]
    Rule60Motion,
    DiscoveryResponse,
    ServiceComplaint,
    Answer,
}

/// Day counts for one deadline rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineRule {
    pub base_days: u32,
    /// Extra days for pro se litigants served by mail or electronically.
    pub pro_se_adjustment: u32,
    pub is_jurisdictional: bool,
}

impl DeadlineKind {
    pub const ALL: [DeadlineKind; 9] = [
        Self::MotionResponse,
        Self::MotionReply,
        Self::Appeal,
        Self::ObjectionMagistrate,
        Self::Rule59Motion,
        Self::Rule60Motion,
        Self::DiscoveryResponse,
        Self::ServiceComplaint,
        Self::Answer,
    ];

    /// Rule name as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::MotionResponse => "motion_response",
            Self::MotionReply => "motion_reply",
            Self::Appeal => "appeal",
            Self::ObjectionMagistrate => "objection_magistrate",
            Self::Rule59Motion => "rule_59_motion",
            Self::Rule60Motion => "rule_60_motion",
            Self::DiscoveryResponse => "discovery_response",
            Self::ServiceComplaint => "service_complaint",
            Self::Answer => "answer",
        }
    }

    /// Title-cased rule name, e.g. "Rule 59 Motion".
    pub fn description(&self) -> &'static str {
        match self {
            Self::MotionResponse => "Motion Response",
            Self::MotionReply => "Motion Reply",
            Self::Appeal => "Appeal",
            Self::ObjectionMagistrate => "Objection Magistrate",
            Self::Rule59Motion => "Rule 59 Motion",
            Self::Rule60Motion => "Rule 60 Motion",
            Self::DiscoveryResponse => "Discovery Response",
            Self::ServiceComplaint => "Service Complaint",
            Self::Answer => "Answer",
        }
    }

    pub fn rule(&self) -> DeadlineRule {
        let (base_days, pro_se_adjustment, is_jurisdictional) = match self {
            Self::MotionResponse => (14, 3, false),
            Self::MotionReply => (7, 3, false),
            // 60 days when the United States is a party; not modelled.
            Self::Appeal => (30, 3, true),
            Self::ObjectionMagistrate => (14, 3, false),
            Self::Rule59Motion => (28, 0, true),
            Self::Rule60Motion => (365, 0, true),
            Self::DiscoveryResponse => (30, 3, false),
            Self::ServiceComplaint => (90, 0, true),
            Self::Answer => (21, 3, false),
        };
        DeadlineRule {
            base_days,
            pro_se_adjustment,
            is_jurisdictional,
        }
    }
}

impl fmt::Display for DeadlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DeadlineKind {
    type Err = DocketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DocketError::UnknownDeadlineType(s.to_string()))
    }
}

/// A computed deadline and how it was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineInfo {
    pub deadline_date: NaiveDate,
    pub base_days: u32,
    /// Days actually added for pro se status (zero when represented).
    pub pro_se_adjustment: u32,
    pub total_days: u32,
    pub description: String,
    pub is_jurisdictional: bool,
    /// Docket number of the filing that started the clock.
    pub source_entry: Option<u32>,
}

/// Computes deadlines for one litigant's representation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineCalculator {
    pro_se: bool,
}

impl DeadlineCalculator {
    pub fn new(pro_se: bool) -> Self {
        Self { pro_se }
    }

    pub fn is_pro_se(&self) -> bool {
        self.pro_se
    }

    /// Deadline for `kind` counted from `from_date`.
    pub fn calculate(&self, from_date: NaiveDate, kind: DeadlineKind) -> DeadlineInfo {
        let rule = kind.rule();
        let pro_se_adjustment = if self.pro_se { rule.pro_se_adjustment } else { 0 };
        let total_days = rule.base_days + pro_se_adjustment;

        DeadlineInfo {
            deadline_date: roll_past_weekend(add_days(from_date, total_days)),
            base_days: rule.base_days,
            pro_se_adjustment,
            total_days,
            description: kind.description().to_string(),
            is_jurisdictional: rule.is_jurisdictional,
            source_entry: None,
        }
    }

    /// Like [`calculate`](Self::calculate), taking the rule by name.
    ///
    /// Fails with [`DocketError::UnknownDeadlineType`] for names outside the rule table.
    pub fn calculate_named(
        &self,
        from_date: NaiveDate,
        deadline_type: &str,
    ) -> Result<DeadlineInfo, DocketError> {
        let kind = deadline_type.parse()?;
        Ok(self.calculate(from_date, kind))
    }
}

fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    // Out of range only near the end of chrono's calendar (year 262143).
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Move a Saturday or Sunday to the following Monday. Applied once.
fn roll_past_weekend(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };
    add_days(date, shift)
}
