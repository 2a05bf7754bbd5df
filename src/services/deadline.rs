// src/services/deadline.rs
use std::{future::Future, time::Duration};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeadlineError {
    #[error("deadline of {0:?} elapsed")]
    Elapsed(Duration),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Runs an operation as its own task and waits for it no longer than `limit`.
///
/// Whichever settles first decides the outcome. On timeout the task is left
/// running detached and its output is dropped when it eventually finishes;
/// nothing is aborted.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    limit: Duration,
}

impl Deadline {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub async fn run<F, T>(&self, operation: F) -> Result<T, DeadlineError>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let handle = tokio::spawn(operation);
        match tokio::time::timeout(self.limit, handle).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(join_err)) => Err(DeadlineError::Failed(join_err.to_string())),
            // dropping the JoinHandle detaches the task
            Err(_) => Err(DeadlineError::Elapsed(self.limit)),
        }
    }
}
