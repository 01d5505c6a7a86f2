use super::ArticleCommandService;
use crate::application::error::ApplicationResult;

/// Removes the row for good. Logical deletion goes through [`super::SoftDeleteArticleCommand`].
pub struct DeleteArticleCommand {
    pub id: u64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let article = self.load(command.id).await?;
        self.repo.delete(article.id()).await?;
        tracing::info!(article_id = %article.id(), "article deleted");
        Ok(())
    }
}
