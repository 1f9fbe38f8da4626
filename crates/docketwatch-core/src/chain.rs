//! Motion chains: a motion plus the responses, replies, and orders that refer to it.
//!
//! Linking is two-pass. Filings may cite a motion that appears later in the
//! batch, so every chain is created before any reference is resolved.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::order_outcome;
use crate::deadline::{DeadlineCalculator, DeadlineInfo, DeadlineKind};
use crate::entry::{ClassifiedEntry, EntryType, MotionType, OrderStatus};

const UNKNOWN_FILER: &str = "Unknown";

/// A motion and the filings linked to it, keyed by the motion's docket number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionChain {
    pub motion_docket_num: u32,
    pub motion_type: MotionType,
    pub motion_date: NaiveDate,
    pub motion_text: String,
    pub filed_by: String,
    pub responses: Vec<u32>,
    pub replies: Vec<u32>,
    pub orders: Vec<u32>,
    pub status: OrderStatus,
    pub response_deadline: Option<DeadlineInfo>,
    /// Set once a response links; counted from the most recent response.
    pub reply_deadline: Option<DeadlineInfo>,
}

impl MotionChain {
    fn open(motion: &ClassifiedEntry, calculator: &DeadlineCalculator) -> Self {
        let entry = &motion.entry;
        let mut response_deadline = calculator.calculate(entry.date, DeadlineKind::MotionResponse);
        response_deadline.source_entry = Some(entry.docket_number);

        Self {
            motion_docket_num: entry.docket_number,
            motion_type: motion.motion_type.unwrap_or(MotionType::Other),
            motion_date: entry.date,
            motion_text: entry.text.clone(),
            filed_by: entry
                .filed_by
                .clone()
                .unwrap_or_else(|| UNKNOWN_FILER.to_string()),
            responses: Vec::new(),
            replies: Vec::new(),
            orders: Vec::new(),
            status: OrderStatus::Pending,
            response_deadline: Some(response_deadline),
            reply_deadline: None,
        }
    }

    /// Attach a filing that refers to this motion.
    ///
    /// Returns `false` when the entry type never links (complaints, notices, ...).
    fn link(&mut self, entry: &ClassifiedEntry, calculator: &DeadlineCalculator) -> bool {
        let docket_number = entry.docket_number();
        match entry.entry_type {
            EntryType::Response => {
                self.responses.push(docket_number);
                let mut reply_deadline =
                    calculator.calculate(entry.entry.date, DeadlineKind::MotionReply);
                reply_deadline.source_entry = Some(docket_number);
                self.reply_deadline = Some(reply_deadline);
            }
            EntryType::Reply => self.replies.push(docket_number),
            EntryType::Order => {
                self.orders.push(docket_number);
                if let Some(status) = order_outcome(&entry.entry.text) {
                    self.status = status;
                }
            }
            _ => return false,
        }
        true
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Response deadline still open: motion pending and nothing filed in response.
    pub fn open_response_deadline(&self) -> Option<&DeadlineInfo> {
        if !self.is_pending() || !self.responses.is_empty() {
            return None;
        }
        self.response_deadline.as_ref()
    }

    /// Reply deadline still open: motion pending, a response filed, no reply yet.
    pub fn open_reply_deadline(&self) -> Option<&DeadlineInfo> {
        if !self.is_pending() || self.responses.is_empty() || !self.replies.is_empty() {
            return None;
        }
        self.reply_deadline.as_ref()
    }
}

/// Build motion chains from classified entries.
///
/// Pass 1 opens a chain for every motion. Pass 2 links each entry whose
/// reference names an existing chain. References to unknown docket numbers
/// are dropped.
pub fn build_chains(
    entries: &[ClassifiedEntry],
    calculator: &DeadlineCalculator,
) -> BTreeMap<u32, MotionChain> {
    let mut chains: BTreeMap<u32, MotionChain> = entries
        .iter()
        .filter(|entry| entry.is_motion())
        .map(|motion| (motion.docket_number(), MotionChain::open(motion, calculator)))
        .collect();
    debug!(motions = chains.len(), "opened motion chains");

    let mut linked = 0usize;
    for entry in entries {
        let Some(cited) = entry.related_docket_number else {
            continue;
        };
        match chains.get_mut(&cited) {
            Some(chain) => {
                if chain.link(entry, calculator) {
                    linked += 1;
                }
            }
            None => debug!(
                docket_number = entry.docket_number(),
                cited, "reference does not name a motion; not linked"
            ),
        }
    }
    debug!(linked, "linked filings to motion chains");

    chains
}
