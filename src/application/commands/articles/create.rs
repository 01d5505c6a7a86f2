// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{Article, ArticleStatus},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: Option<String>,
    /// Defaults to draft when omitted.
    pub status: Option<String>,
    pub provider_type: Option<String>,
    pub link: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    status: Option<String>,
    provider_type: Option<String>,
    link: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn provider_type(mut self, provider_type: impl Into<String>) -> Self {
        self.provider_type = Some(provider_type.into());
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body,
            status: self.status,
            provider_type: self.provider_type,
            link: self.link,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let CreateArticleCommand {
            title,
            body,
            status,
            provider_type,
            link,
        } = command;
        let status = status
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| ArticleStatus::Draft.as_str().to_string());

        let article = Article::builder(title, status)
            .body(body)
            .provider_type(provider_type)
            .link(link)
            .build(self.clock.now())?;

        let created = self.repo.create(&article).await?;
        tracing::info!(article_id = %created.id(), status = %created.status(), "article created");
        Ok(created.into())
    }
}
