use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ProviderType,
};

pub struct ChangeProviderCommand {
    pub id: u64,
    /// `None` detaches the article from any provider.
    pub provider_type: Option<String>,
}

impl ArticleCommandService {
    pub async fn change_provider(
        &self,
        command: ChangeProviderCommand,
    ) -> ApplicationResult<ArticleDto> {
        let provider_type = ProviderType::parse_optional(command.provider_type.as_deref())?;
        let mut article = self.load(command.id).await?;
        article.change_provider(provider_type, self.clock.now())?;
        self.repo.update(&article).await?;
        tracing::info!(
            article_id = %article.id(),
            provider = provider_type.map(|p| p.as_str()).unwrap_or("none"),
            "article provider changed"
        );
        Ok(article.into())
    }
}
