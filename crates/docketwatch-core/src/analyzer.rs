//! Whole-docket analysis: classify, link, alert, summarise.

use std::collections::{BTreeMap, HashSet};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::alert::{Alert, generate_alerts};
use crate::chain::{MotionChain, build_chains};
use crate::classifier::classify_entry;
use crate::deadline::{DeadlineCalculator, DeadlineInfo, DeadlineKind};
use crate::entry::{ClassifiedEntry, DocketEntry, EntryType};
use crate::DocketError;

/// Counts over one analysed docket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_entries: usize,
    /// Only entry types that occur are present.
    pub entry_types: BTreeMap<EntryType, usize>,
    pub total_motions: usize,
    pub pending_motions: usize,
    pub resolved_motions: usize,
    /// Every entry flagged emergency, whatever its type.
    pub emergency_motions: usize,
}

impl Summary {
    fn collect(entries: &[ClassifiedEntry], chains: &BTreeMap<u32, MotionChain>) -> Self {
        let mut entry_types = BTreeMap::new();
        for entry in entries {
            *entry_types.entry(entry.entry_type).or_insert(0) += 1;
        }
        let pending_motions = chains.values().filter(|c| c.is_pending()).count();

        Self {
            total_entries: entries.len(),
            entry_types,
            total_motions: chains.len(),
            pending_motions,
            resolved_motions: chains.len() - pending_motions,
            emergency_motions: entries.iter().filter(|e| e.is_emergency).count(),
        }
    }

    pub fn count(&self, entry_type: EntryType) -> usize {
        self.entry_types.get(&entry_type).copied().unwrap_or(0)
    }
}

/// Result of [`DocketAnalyzer::analyze_entries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub pro_se: bool,
    /// Reference date the alerts were computed against.
    pub as_of: NaiveDate,
    pub classified_entries: Vec<ClassifiedEntry>,
    /// Keyed by the motion's docket number.
    pub motion_chains: BTreeMap<u32, MotionChain>,
    pub alerts: Vec<Alert>,
    pub summary: Summary,
}

/// Federal docket analyzer with pro se deadline calculations.
///
/// Holds only configuration; every call builds its chains from scratch, so
/// one analyzer can serve any number of dockets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocketAnalyzer {
    calculator: DeadlineCalculator,
}

impl Default for DocketAnalyzer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DocketAnalyzer {
    pub fn new(pro_se: bool) -> Self {
        Self {
            calculator: DeadlineCalculator::new(pro_se),
        }
    }

    pub fn is_pro_se(&self) -> bool {
        self.calculator.is_pro_se()
    }

    pub fn calculator(&self) -> &DeadlineCalculator {
        &self.calculator
    }

    pub fn calculate_deadline(&self, from_date: NaiveDate, kind: DeadlineKind) -> DeadlineInfo {
        self.calculator.calculate(from_date, kind)
    }

    /// Analyse a docket, computing alerts against today's local date.
    pub fn analyze_entries(&self, entries: &[DocketEntry]) -> Result<Analysis, DocketError> {
        self.analyze_entries_as_of(entries, Local::now().date_naive())
    }

    /// Analyse a docket with alerts computed against `as_of`.
    ///
    /// Deterministic: the same entries and date always give the same result.
    pub fn analyze_entries_as_of(
        &self,
        entries: &[DocketEntry],
        as_of: NaiveDate,
    ) -> Result<Analysis, DocketError> {
        validate(entries)?;

        let classified_entries: Vec<ClassifiedEntry> = entries.iter().map(classify_entry).collect();
        debug!(entries = classified_entries.len(), "classified docket entries");

        let motion_chains = build_chains(&classified_entries, &self.calculator);
        let alerts = generate_alerts(&motion_chains, as_of);
        let summary = Summary::collect(&classified_entries, &motion_chains);

        info!(
            entries = summary.total_entries,
            motions = summary.total_motions,
            pending = summary.pending_motions,
            alerts = alerts.len(),
            %as_of,
            "docket analysis complete"
        );

        Ok(Analysis {
            pro_se: self.is_pro_se(),
            as_of,
            classified_entries,
            motion_chains,
            alerts,
            summary,
        })
    }
}

/// Docket numbers must be positive and unique within one batch.
fn validate(entries: &[DocketEntry]) -> Result<(), DocketError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if entry.docket_number == 0 {
            return Err(DocketError::InvalidDocketNumber { date: entry.date });
        }
        if !seen.insert(entry.docket_number) {
            return Err(DocketError::DuplicateDocketNumber(entry.docket_number));
        }
    }
    Ok(())
}
