//! Alerts for response and reply deadlines on pending motions.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::chain::MotionChain;
use crate::deadline::DeadlineInfo;
use crate::entry::MotionType;

/// Response alerts fire this many days out (HIGH at or under `RESPONSE_HIGH_DAYS`).
const RESPONSE_WINDOW_DAYS: i64 = 7;
const RESPONSE_HIGH_DAYS: i64 = 3;
const REPLY_WINDOW_DAYS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Overdue,
    Upcoming,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "OVERDUE",
            Self::Upcoming => "UPCOMING",
        }
    }
}

/// Alert urgency. Declaration order is sort order: `Critical` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: CRITICAL=0, HIGH=1, MEDIUM=2, LOW=3.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Which filing the deadline is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeadlineRole {
    Response,
    Reply,
}

impl DeadlineRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Response => "Response",
            Self::Reply => "Reply",
        }
    }
}

/// An upcoming or missed deadline on a pending motion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub priority: Priority,
    pub motion_docket: u32,
    pub motion_type: MotionType,
    pub deadline_type: DeadlineRole,
    pub deadline_date: NaiveDate,
    /// Days overdue for [`AlertKind::Overdue`], days remaining for [`AlertKind::Upcoming`].
    pub days: i64,
    pub message: String,
}

impl Alert {
    fn new(
        chain: &MotionChain,
        role: DeadlineRole,
        deadline: &DeadlineInfo,
        days_until: i64,
        priority: Priority,
    ) -> Self {
        let kind = if days_until < 0 {
            AlertKind::Overdue
        } else {
            AlertKind::Upcoming
        };
        let days = days_until.abs();
        let motion = chain.motion_type.label();
        let docket = chain.motion_docket_num;
        let message = match (kind, role) {
            (AlertKind::Overdue, DeadlineRole::Response) => {
                format!("OVERDUE: Response to {motion} (#{docket}) was due {days} days ago!")
            }
            (AlertKind::Upcoming, DeadlineRole::Response) => {
                format!("Response to {motion} (#{docket}) due in {days} days")
            }
            (AlertKind::Overdue, DeadlineRole::Reply) => {
                format!("OVERDUE: Reply for {motion} (#{docket}) was due {days} days ago")
            }
            (AlertKind::Upcoming, DeadlineRole::Reply) => {
                format!("Reply for {motion} (#{docket}) due in {days} days")
            }
        };

        Self {
            kind,
            priority,
            motion_docket: docket,
            motion_type: chain.motion_type,
            deadline_type: role,
            deadline_date: deadline.deadline_date,
            days,
            message,
        }
    }
}

fn response_priority(days_until: i64) -> Option<Priority> {
    match days_until {
        d if d < 0 => Some(Priority::Critical),
        d if d <= RESPONSE_HIGH_DAYS => Some(Priority::High),
        d if d <= RESPONSE_WINDOW_DAYS => Some(Priority::Medium),
        _ => None,
    }
}

fn reply_priority(days_until: i64) -> Option<Priority> {
    match days_until {
        d if d < 0 => Some(Priority::High),
        d if d <= REPLY_WINDOW_DAYS => Some(Priority::Medium),
        _ => None,
    }
}

/// Alerts for every pending chain, most urgent first.
///
/// Sorted by priority rank, then by day count; ties keep chain order.
pub fn generate_alerts(chains: &BTreeMap<u32, MotionChain>, as_of: NaiveDate) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for chain in chains.values() {
        if let Some(deadline) = chain.open_response_deadline() {
            let days_until = (deadline.deadline_date - as_of).num_days();
            if let Some(priority) = response_priority(days_until) {
                alerts.push(Alert::new(chain, DeadlineRole::Response, deadline, days_until, priority));
            }
        }

        if let Some(deadline) = chain.open_reply_deadline() {
            let days_until = (deadline.deadline_date - as_of).num_days();
            if let Some(priority) = reply_priority(days_until) {
                alerts.push(Alert::new(chain, DeadlineRole::Reply, deadline, days_until, priority));
            }
        }
    }

    alerts.sort_by_key(|alert| (alert.priority.rank(), alert.days));
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deadline::{DeadlineCalculator, DeadlineKind};
    use crate::entry::OrderStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A pending chain whose response deadline is 2024-01-18 (filed 2024-01-01, pro se).
    fn chain(docket: u32, motion_type: MotionType) -> MotionChain {
        let calc = DeadlineCalculator::new(true);
        MotionChain {
            motion_docket_num: docket,
            motion_type,
            motion_date: date(2024, 1, 1),
            motion_text: motion_type.label().to_string(),
            filed_by: "Smith".into(),
            responses: Vec::new(),
            replies: Vec::new(),
            orders: Vec::new(),
            status: OrderStatus::Pending,
            response_deadline: Some(calc.calculate(date(2024, 1, 1), DeadlineKind::MotionResponse)),
            reply_deadline: None,
        }
    }

    /// Chain with a response filed 2024-01-10; reply deadline 2024-01-22.
    fn responded(docket: u32) -> MotionChain {
        let mut c = chain(docket, MotionType::Dismiss);
        c.responses.push(docket + 5);
        c.reply_deadline =
            Some(DeadlineCalculator::new(true).calculate(date(2024, 1, 10), DeadlineKind::MotionReply));
        c
    }

    fn chains(list: Vec<MotionChain>) -> BTreeMap<u32, MotionChain> {
        list.into_iter().map(|c| (c.motion_docket_num, c)).collect()
    }

    #[test]
    fn overdue_response_is_critical() {
        let alerts = generate_alerts(&chains(vec![chain(10, MotionType::Tro)]), date(2024, 1, 21));
        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.kind, AlertKind::Overdue);
        assert_eq!(alert.priority, Priority::Critical);
        assert_eq!(alert.deadline_type, DeadlineRole::Response);
        assert_eq!(alert.days, 3);
        assert_eq!(
            alert.message,
            "OVERDUE: Response to Motion for TRO (#10) was due 3 days ago!"
        );
    }

    #[test]
    fn response_windows() {
        let map = chains(vec![chain(10, MotionType::Tro)]);
        let at = |as_of| generate_alerts(&map, as_of);

        // Due today: HIGH, zero days remaining.
        let today = at(date(2024, 1, 18));
        assert_eq!(today[0].priority, Priority::High);
        assert_eq!(today[0].days, 0);
        assert_eq!(today[0].message, "Response to Motion for TRO (#10) due in 0 days");

        assert_eq!(at(date(2024, 1, 15))[0].priority, Priority::High);
        assert_eq!(at(date(2024, 1, 14))[0].priority, Priority::Medium);
        assert_eq!(at(date(2024, 1, 11))[0].priority, Priority::Medium);
        assert!(at(date(2024, 1, 10)).is_empty());
    }

    #[test]
    fn reply_windows() {
        let map = chains(vec![responded(10)]);
        let at = |as_of| generate_alerts(&map, as_of);

        let overdue = at(date(2024, 1, 24));
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].kind, AlertKind::Overdue);
        assert_eq!(overdue[0].priority, Priority::High);
        assert_eq!(overdue[0].deadline_type, DeadlineRole::Reply);
        assert_eq!(
            overdue[0].message,
            "OVERDUE: Reply for Motion to Dismiss (#10) was due 2 days ago"
        );

        let upcoming = at(date(2024, 1, 17));
        assert_eq!(upcoming[0].priority, Priority::Medium);
        assert_eq!(upcoming[0].message, "Reply for Motion to Dismiss (#10) due in 5 days");

        assert!(at(date(2024, 1, 16)).is_empty());
    }

    #[test]
    fn response_alert_suppressed_once_responded() {
        // Response deadline long past, but a response is on file.
        let alerts = generate_alerts(&chains(vec![responded(10)]), date(2024, 1, 19));
        assert!(alerts.iter().all(|a| a.deadline_type == DeadlineRole::Reply));
    }

    #[test]
    fn reply_alert_needs_no_reply_on_file() {
        let mut c = responded(10);
        c.replies.push(18);
        assert!(generate_alerts(&chains(vec![c]), date(2024, 1, 24)).is_empty());
    }

    #[test]
    fn resolved_chains_raise_nothing() {
        let mut granted = chain(10, MotionType::Tro);
        granted.status = OrderStatus::Granted;
        let mut moot = responded(20);
        moot.status = OrderStatus::Moot;
        assert!(generate_alerts(&chains(vec![granted, moot]), date(2024, 1, 30)).is_empty());
    }

    #[test]
    fn critical_sorts_before_medium() {
        // #50 response was due 2024-01-12 (CRITICAL, 5 days); #30 reply due in 5 days (MEDIUM).
        // Chains are visited in docket order, so #30 is generated first.
        let mut early = chain(50, MotionType::Compel);
        early.response_deadline =
            Some(DeadlineCalculator::new(true).calculate(date(2023, 12, 26), DeadlineKind::MotionResponse));
        let map = chains(vec![responded(30), early]);

        let alerts = generate_alerts(&map, date(2024, 1, 17));
        let order: Vec<_> = alerts.iter().map(|a| (a.priority, a.motion_docket, a.days)).collect();
        assert_eq!(order, [(Priority::Critical, 50, 5), (Priority::Medium, 30, 5)]);
    }

    #[test]
    fn same_priority_sorts_by_days() {
        // Both HIGH: #40 due 2024-01-19 (3 days), #41 due 2024-01-18 (2 days).
        let mut later = chain(40, MotionType::Strike);
        later.response_deadline =
            Some(DeadlineCalculator::new(true).calculate(date(2024, 1, 2), DeadlineKind::MotionResponse));
        let map = chains(vec![later, chain(41, MotionType::Amend)]);

        let alerts = generate_alerts(&map, date(2024, 1, 16));
        let order: Vec<_> = alerts.iter().map(|a| (a.motion_docket, a.days)).collect();
        assert_eq!(order, [(41, 2), (40, 3)]);
    }

    #[test]
    fn priority_ordering_matches_rank() {
        assert!(Priority::Critical < Priority::High);
        assert!(Priority::Medium < Priority::Low);
        assert_eq!(Priority::Low.rank(), 3);
    }
}
