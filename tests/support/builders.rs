// tests/support/builders.rs
use chrono::{DateTime, Utc};

use article_hub::domain::article::{Article, ArticleRecord};

use super::mocks::fixed_now;

/// Produces persisted articles as the storage layer would materialise them.
pub struct StoredArticleBuilder {
    record: ArticleRecord,
}

impl StoredArticleBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            record: ArticleRecord {
                id,
                title: format!("Article {id}"),
                body: None,
                status: "draft".into(),
                provider_type: None,
                link: None,
                created_at: fixed_now(),
                updated_at: fixed_now(),
                deleted_at: None,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.record.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.record.body = Some(body.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.record.status = "published".into();
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.record.provider_type = Some(provider.into());
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.record.link = Some(link.into());
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.record.created_at = at;
        self.record.updated_at = at;
        self
    }

    pub fn deleted_at(mut self, at: DateTime<Utc>) -> Self {
        self.record.deleted_at = Some(at);
        self
    }

    pub fn build(self) -> Article {
        Article::reconstruct(self.record).expect("valid stored article")
    }
}
