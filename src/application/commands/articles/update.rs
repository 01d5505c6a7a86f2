// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleChanges,
};

/// Replaces the editable attributes of an article. Omitted body, provider and
/// link are cleared; omitted title and status are kept.
pub struct UpdateArticleCommand {
    pub id: u64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
    pub provider_type: Option<String>,
    pub link: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            title,
            body,
            status,
            provider_type,
            link,
        } = command;
        let mut article = self.load(id).await?;

        article.update(
            ArticleChanges {
                title,
                body,
                status,
                provider_type,
                link,
            },
            self.clock.now(),
        )?;

        self.repo.update(&article).await?;
        tracing::info!(article_id = %article.id(), "article updated");
        Ok(article.into())
    }
}
