//! Workflow error type.

use thiserror::Error;

use labsim_types::{Page, RangeError};

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A value outside its declared range reached a workflow.
    #[error(transparent)]
    OutOfRange(#[from] RangeError),
    /// A page was reached without the state its predecessor should have stored.
    #[error("{page}: missing {what}; the previous step was never completed")]
    MissingState { page: Page, what: &'static str },
    /// An event arrived at a page that does not offer it.
    #[error("{page} does not accept {event}")]
    UnexpectedEvent { page: Page, event: &'static str },
    /// A plot was requested before any row was recorded.
    #[error("{page}: nothing recorded yet")]
    EmptyTable { page: Page },
}

impl WorkflowError {
    /// Fatal errors mean the page flow itself is broken; only bad input is recoverable.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, WorkflowError::OutOfRange(_))
    }
}
