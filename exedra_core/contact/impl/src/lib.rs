use anyhow::Context;
use exedra_core_contact_contracts::{
    ContactFeatureService, ContactSubmissionCreate, ContactSubmitError,
};
use exedra_models::contact::ContactSubmission;
use exedra_persistence_contracts::{contact::ContactRepository, Database, Transaction};
use exedra_shared_contracts::{id::IdService, time::TimeService};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Db, Id, Time, ContactRepo> {
    pub db: Db,
    pub id: Id,
    pub time: Time,
    pub contact_repo: ContactRepo,
}

impl<Db, Id, Time, ContactRepo> ContactFeatureService
    for ContactFeatureServiceImpl<Db, Id, Time, ContactRepo>
where
    Db: Database,
    Id: IdService,
    Time: TimeService,
    ContactRepo: ContactRepository<Db::Transaction>,
{
    #[tracing::instrument(skip(self))]
    async fn submit(
        &self,
        create: ContactSubmissionCreate,
    ) -> Result<ContactSubmission, ContactSubmitError> {
        let submission = ContactSubmission {
            id: self.id.generate(),
            author: create.author,
            message: create.message,
            created_at: self.time.now(),
        };

        let mut txn = self
            .db
            .begin_transaction()
            .await
            .context("Failed to begin transaction")
            .map_err(ContactSubmitError::Storage)?;

        self.contact_repo
            .create(&mut txn, &submission)
            .await
            .context("Failed to create contact submission in database")
            .map_err(ContactSubmitError::Storage)?;

        txn.commit()
            .await
            .context("Failed to commit transaction")
            .map_err(ContactSubmitError::Storage)?;

        Ok(submission)
    }
}
