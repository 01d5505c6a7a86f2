// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleLink, ArticleStatus, ArticleTitle, ProviderType,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

const ALREADY_PUBLISHED: &str = "already published";
const ALREADY_DRAFT: &str = "already draft";
const ALREADY_DELETED: &str = "already deleted";
const NOT_DELETED: &str = "not deleted";
const PROVIDER_IMMUTABLE: &str = "published article provider immutable";

/// Article aggregate. Fields are only reachable through its operations so every
/// instance keeps its invariants; each mutation takes the caller's `now`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    title: ArticleTitle,
    body: Option<ArticleBody>,
    status: ArticleStatus,
    provider_type: Option<ProviderType>,
    link: Option<ArticleLink>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Persisted column values used to rebuild an [`Article`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub status: String,
    pub provider_type: Option<String>,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Bulk update input. Omitted title/status are kept; omitted body, provider and
/// link are cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
    pub provider_type: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ArticleBuilder {
    title: String,
    status: String,
    body: Option<String>,
    provider_type: Option<String>,
    link: Option<String>,
}

impl ArticleBuilder {
    pub fn body(mut self, body: impl Into<Option<String>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn provider_type(mut self, provider_type: impl Into<Option<String>>) -> Self {
        self.provider_type = provider_type.into();
        self
    }

    pub fn link(mut self, link: impl Into<Option<String>>) -> Self {
        self.link = link.into();
        self
    }

    /// Validates every attribute and reports the first failure.
    pub fn build(self, now: DateTime<Utc>) -> DomainResult<Article> {
        let title = ArticleTitle::new(self.title)?;
        let body = ArticleBody::new(self.body)?;
        let status = self.status.parse::<ArticleStatus>()?;
        let provider_type = ProviderType::parse_optional(self.provider_type.as_deref())?;
        let link = ArticleLink::new(self.link)?;

        Ok(Article {
            id: ArticleId::UNASSIGNED,
            title,
            body,
            status,
            provider_type,
            link,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }
}

impl Article {
    pub fn builder(title: impl Into<String>, status: impl Into<String>) -> ArticleBuilder {
        ArticleBuilder {
            title: title.into(),
            status: status.into(),
            body: None,
            provider_type: None,
            link: None,
        }
    }

    /// Rebuilds an article from storage. Identity and timestamps are taken verbatim.
    pub fn reconstruct(record: ArticleRecord) -> DomainResult<Self> {
        Ok(Self {
            id: if record.id == 0 {
                ArticleId::UNASSIGNED
            } else {
                ArticleId::new(record.id)?
            },
            title: ArticleTitle::new(record.title)?,
            body: ArticleBody::new(record.body)?,
            status: record.status.parse()?,
            provider_type: ProviderType::parse_optional(record.provider_type.as_deref())?,
            link: ArticleLink::new(record.link)?,
            created_at: record.created_at,
            updated_at: record.updated_at,
            deleted_at: record.deleted_at,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn body(&self) -> Option<&ArticleBody> {
        self.body.as_ref()
    }

    pub fn status(&self) -> ArticleStatus {
        self.status
    }

    pub fn provider_type(&self) -> Option<ProviderType> {
        self.provider_type
    }

    pub fn link(&self) -> Option<&ArticleLink> {
        self.link.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn publish(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        match self.status {
            ArticleStatus::Published => Err(DomainError::invalid_state(ALREADY_PUBLISHED)),
            ArticleStatus::Draft => {
                self.status = ArticleStatus::Published;
                self.touch(now);
                Ok(())
            }
        }
    }

    pub fn draft(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        match self.status {
            ArticleStatus::Draft => Err(DomainError::invalid_state(ALREADY_DRAFT)),
            ArticleStatus::Published => {
                self.status = ArticleStatus::Draft;
                self.touch(now);
                Ok(())
            }
        }
    }

    pub fn soft_delete(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.deleted_at.is_some() {
            return Err(DomainError::invalid_state(ALREADY_DELETED));
        }
        self.deleted_at = Some(now);
        self.touch(now);
        Ok(())
    }

    pub fn restore(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.deleted_at.is_none() {
            return Err(DomainError::invalid_state(NOT_DELETED));
        }
        self.deleted_at = None;
        self.touch(now);
        Ok(())
    }

    /// `None` removes the provider assignment.
    pub fn change_provider(
        &mut self,
        provider_type: Option<ProviderType>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        ensure_provider_mutable(self.status)?;
        self.provider_type = provider_type;
        self.touch(now);
        Ok(())
    }

    /// Applies title, body, status, provider and link in that order. Nothing is
    /// written unless every step succeeds.
    pub fn update(&mut self, changes: ArticleChanges, now: DateTime<Utc>) -> DomainResult<()> {
        let ArticleChanges {
            title,
            body,
            status,
            provider_type,
            link,
        } = changes;

        let title = match title {
            Some(value) => ArticleTitle::new(value)?,
            None => self.title.clone(),
        };
        let body = ArticleBody::new(body)?;
        let status = match status {
            Some(value) => value.parse::<ArticleStatus>()?,
            None => self.status,
        };
        let provider_type = match provider_type {
            Some(value) => {
                let provider = value.parse::<ProviderType>()?;
                ensure_provider_mutable(status)?;
                Some(provider)
            }
            None => None,
        };
        let link = ArticleLink::new(link)?;

        self.title = title;
        self.body = body;
        self.status = status;
        self.provider_type = provider_type;
        self.link = link;
        self.touch(now);
        Ok(())
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

fn ensure_provider_mutable(status: ArticleStatus) -> DomainResult<()> {
    match status {
        ArticleStatus::Published => Err(DomainError::invalid_state(PROVIDER_IMMUTABLE)),
        ArticleStatus::Draft => Ok(()),
    }
}

impl From<&Article> for ArticleRecord {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.value(),
            title: article.title.as_str().to_string(),
            body: article.body.as_ref().map(|body| body.as_str().to_string()),
            status: article.status.as_str().to_string(),
            provider_type: article.provider_type.map(|p| p.as_str().to_string()),
            link: article.link.as_ref().map(|link| link.as_str().to_string()),
            created_at: article.created_at,
            updated_at: article.updated_at,
            deleted_at: article.deleted_at,
        }
    }
}
