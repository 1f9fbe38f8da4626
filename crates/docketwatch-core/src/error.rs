use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocketError {
    #[error("unknown deadline type: {0}")]
    UnknownDeadlineType(String),

    #[error("docket number must be positive (entry dated {date})")]
    InvalidDocketNumber { date: chrono::NaiveDate },

    #[error("docket number {0} appears more than once")]
    DuplicateDocketNumber(u32),
}
