//! Federal docket analysis: entry classification, motion chain linking,
//! Rule 6(d) deadline calculation, and deadline alerts.

pub mod alert;
pub mod analyzer;
pub mod chain;
pub mod classifier;
pub mod deadline;
pub mod entry;
mod error;
pub mod report;

pub use alert::{Alert, AlertKind, DeadlineRole, Priority, generate_alerts};
pub use analyzer::{Analysis, DocketAnalyzer, Summary};
pub use chain::{MotionChain, build_chains};
pub use classifier::{classify, classify_entry, extract_related_docket_num, is_emergency, order_outcome};
pub use deadline::{DeadlineCalculator, DeadlineInfo, DeadlineKind};
pub use entry::{ClassifiedEntry, DocketEntry, EntryType, MotionType, OrderStatus};
pub use error::DocketError;
pub use report::{analyze_case_docket, format_deadline_report};
