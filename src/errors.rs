//! Provides the error types raised while visiting a tree.
//!
//! Visitors report two very different things through the same channel: the
//! expected "this visitor does not apply here" signal ([VisitFailure]) that
//! drives backtracking in [Choice](crate::Choice), and genuine faults that must
//! reach the caller untouched. Both are variants of [VisitError] so that they
//! can be told apart by matching instead of by a runtime type check.

use std::error::Error as StdError;
use thiserror::Error;

/// The failure signal. Carries a diagnostic message and nothing else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("visit failure: {message}")]
pub struct VisitFailure {
    message: String,
}

impl VisitFailure {
    pub fn new(message: impl Into<String>) -> Self {
        VisitFailure {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The error type returned by every visitor operation
#[derive(Error, Debug)]
pub enum VisitError {
    /// The visitor does not apply to the node. Recovered by `Choice` only.
    #[error(transparent)]
    Failure(#[from] VisitFailure),
    /// Anything else that went wrong in a visitor body. Never recovered.
    #[error(transparent)]
    Fault(Box<dyn StdError + Send + Sync + 'static>),
}

impl VisitError {
    /// Shorthand for raising the failure signal
    pub fn failure(message: impl Into<String>) -> Self {
        VisitError::Failure(VisitFailure::new(message))
    }

    /// Wraps an arbitrary error as a fault
    pub fn fault<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        VisitError::Fault(error.into())
    }

    /// A fault that only consists of a message
    pub fn fault_message(message: impl Into<String>) -> Self {
        let message: String = message.into();
        VisitError::Fault(message.into())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, VisitError::Failure(_))
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, VisitError::Fault(_))
    }

    pub fn into_failure(self) -> Option<VisitFailure> {
        match self {
            VisitError::Failure(failure) => Some(failure),
            VisitError::Fault(_) => None,
        }
    }
}

/// Classifies a raised condition as the failure signal (`true`) or as a genuine fault (`false`).
pub fn is_visit_failure(error: &VisitError) -> bool {
    error.is_failure()
}

/// Outcome of visiting a single node
pub type VisitResult = Result<(), VisitError>;
