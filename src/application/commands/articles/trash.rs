use super::ArticleCommandService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct SoftDeleteArticleCommand {
    pub id: u64,
}

pub struct RestoreArticleCommand {
    pub id: u64,
}

impl ArticleCommandService {
    pub async fn soft_delete_article(
        &self,
        command: SoftDeleteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load(command.id).await?;
        article.soft_delete(self.clock.now())?;
        self.repo.update(&article).await?;
        tracing::info!(article_id = %article.id(), "article moved to trash");
        Ok(article.into())
    }

    pub async fn restore_article(
        &self,
        command: RestoreArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load(command.id).await?;
        article.restore(self.clock.now())?;
        self.repo.update(&article).await?;
        tracing::info!(article_id = %article.id(), "article restored");
        Ok(article.into())
    }
}
