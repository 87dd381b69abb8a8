use std::sync::Arc;

use tracing::info;
use wm_core::ports::MenuRepositoryPort;
use wm_core::Menu;

use super::UseCaseError;

/// Use case removing a generated menu from history.
///
/// Recipe usage counts are not rolled back.
pub struct DeleteMenu {
    repo: Arc<dyn MenuRepositoryPort>,
}

impl DeleteMenu {
    pub fn from_port(repo: Arc<dyn MenuRepositoryPort>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(
        name = "usecase.delete_menu.execute",
        skip(self, menu),
        fields(menu_id = %menu.id)
    )]
    pub async fn execute(&self, menu: &Menu) -> Result<(), UseCaseError> {
        self.repo.delete(menu).await?;
        info!(menu_id = %menu.id, "Menu deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::InMemoryMenuRepo;
    use wm_core::TimestampMs;

    #[tokio::test]
    async fn test_only_the_given_menu_is_removed() {
        let repo = Arc::new(InMemoryMenuRepo::default());
        let keep = Menu::new(vec!["Mon".into()], vec![], TimestampMs::from_epoch_millis(1));
        let drop = Menu::new(vec!["Tue".into()], vec![], TimestampMs::from_epoch_millis(2));
        repo.add(&keep).await.unwrap();
        repo.add(&drop).await.unwrap();

        DeleteMenu::from_port(repo.clone()).execute(&drop).await.unwrap();

        let remaining = repo.snapshot();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);
    }
}
