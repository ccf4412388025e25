use std::future::Future;

use exedra_models::contact::{ContactSubmission, ContactSubmissionAuthor, ContactSubmissionMessage};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Persist a new contact submission and return the stored record.
    ///
    /// The input has already been validated; this operation only assigns the
    /// id and creation timestamp and stores the submission.
    fn submit(
        &self,
        create: ContactSubmissionCreate,
    ) -> impl Future<Output = Result<ContactSubmission, ContactSubmitError>> + Send;
}

/// A validated contact submission that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmissionCreate {
    pub author: ContactSubmissionAuthor,
    pub message: ContactSubmissionMessage,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    /// The persistence backend was unreachable or rejected the write.
    #[error("Failed to store the contact submission.")]
    Storage(#[source] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        create: ContactSubmissionCreate,
        result: ContactSubmission,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(create))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_submit_storage_error(mut self, create: ContactSubmissionCreate) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(create))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(ContactSubmitError::Storage(
                    anyhow::anyhow!("database unavailable"),
                ))))
            });
        self
    }
}
