use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use nutype::nutype;

use crate::macros::id;

id!(ContactSubmissionId);

/// One accepted contact form submission.
///
/// Submissions are append-only: they are created exactly once by the contact
/// feature service and never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub author: ContactSubmissionAuthor,
    pub message: ContactSubmissionMessage,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmissionAuthor {
    pub name: ContactSubmissionName,
    pub email: EmailAddress,
}

#[nutype(
    sanitize(trim),
    validate(len_char_min = 2, len_char_max = 128),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactSubmissionName(String);

#[nutype(
    validate(len_char_min = 10, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactSubmissionMessage(String);
