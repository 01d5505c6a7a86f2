use super::ArticleCommandService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct SetPublishStateCommand {
    pub id: u64,
    pub publish: bool,
}

impl ArticleCommandService {
    /// Publishes or drafts the article. Repeating the current state is an error.
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load(command.id).await?;
        let now = self.clock.now();
        if command.publish {
            article.publish(now)?;
        } else {
            article.draft(now)?;
        }

        self.repo.update(&article).await?;
        tracing::info!(article_id = %article.id(), status = %article.status(), "publish state changed");
        Ok(article.into())
    }
}
