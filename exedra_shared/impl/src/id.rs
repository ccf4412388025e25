use exedra_shared_contracts::id::IdService;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    fn generate<I: From<Uuid> + 'static>(&self) -> I {
        Uuid::new_v4().into()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generate() {
        // Arrange
        let sut = IdServiceImpl;

        // Act
        let id1 = sut.generate::<Uuid>();
        let id2 = sut.generate::<Uuid>();

        // Assert
        assert_ne!(id1, id2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn generate_concurrent_ids_are_unique() {
        // Arrange
        const TASKS: usize = 64;
        const IDS_PER_TASK: usize = 32;

        // Act
        let handles = (0..TASKS).map(|_| {
            tokio::spawn(async {
                (0..IDS_PER_TASK)
                    .map(|_| IdServiceImpl.generate::<Uuid>())
                    .collect::<Vec<_>>()
            })
        });
        let ids = futures::future::try_join_all(handles)
            .await
            .unwrap()
            .into_iter()
            .flatten()
            .collect::<HashSet<_>>();

        // Assert
        assert_eq!(ids.len(), TASKS * IDS_PER_TASK);
    }
}
