use std::sync::Arc;

use tracing::debug;
use wm_core::ports::MenuRepositoryPort;
use wm_core::Menu;

use super::UseCaseError;

/// Use case for listing generated menus, newest first.
pub struct FetchMenus {
    repo: Arc<dyn MenuRepositoryPort>,
}

impl FetchMenus {
    pub fn from_port(repo: Arc<dyn MenuRepositoryPort>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(name = "usecase.fetch_menus.execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<Menu>, UseCaseError> {
        let menus = self.repo.fetch_all().await?;
        debug!(count = menus.len(), "Fetched menus");
        Ok(menus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::InMemoryMenuRepo;
    use wm_core::TimestampMs;

    #[tokio::test]
    async fn test_menus_come_back_newest_first() {
        let repo = Arc::new(InMemoryMenuRepo::default());
        for ms in [10, 30, 20] {
            repo.add(&Menu::new(vec![], vec![], TimestampMs::from_epoch_millis(ms)))
                .await
                .unwrap();
        }

        let menus = FetchMenus::from_port(repo).execute().await.unwrap();
        let stamps: Vec<i64> = menus.iter().map(|m| m.generated_at.as_millis()).collect();
        assert_eq!(stamps, vec![30, 20, 10]);
    }
}
