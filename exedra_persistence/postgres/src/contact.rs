use exedra_models::contact::ContactSubmission;
use exedra_persistence_contracts::contact::ContactRepository;

use crate::{arg_indices, columns, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresContactRepository;

columns!(contact_submission as "cs": "id", "name", "email", "message", "created_at");

impl ContactRepository<PostgresTransaction> for PostgresContactRepository {
    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        submission: &ContactSubmission,
    ) -> anyhow::Result<()> {
        txn.txn()
            .execute(
                &format!(
                    "insert into contact_submissions ({CONTACT_SUBMISSION_COL_NAMES}) values ({})",
                    arg_indices(1..=CONTACT_SUBMISSION_CNT)
                ),
                &[
                    &*submission.id,
                    &&**submission.author.name,
                    &submission.author.email.as_str(),
                    &&**submission.message,
                    &submission.created_at,
                ],
            )
            .await
            .map(|_| ())
            .map_err(Into::into)
    }
}
