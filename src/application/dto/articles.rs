use crate::domain::article::{Article, ProviderType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flattened article. Absent optional values are rendered as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub status: String,
    pub provider_type: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self::from(&article)
    }
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id().value(),
            title: article.title().as_str().to_string(),
            body: article
                .body()
                .map(|body| body.as_str().to_string())
                .unwrap_or_default(),
            status: article.status().as_str().to_string(),
            provider_type: article
                .provider_type()
                .map(|provider| provider.as_str().to_string())
                .unwrap_or_default(),
            link: article
                .link()
                .map(|link| link.as_str().to_string())
                .unwrap_or_default(),
            created_at: article.created_at(),
            updated_at: article.updated_at(),
            deleted_at: article.deleted_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProviderDto {
    pub value: String,
    pub display_name: String,
    pub has_api: bool,
    pub is_manual: bool,
}

impl From<ProviderType> for ProviderDto {
    fn from(provider: ProviderType) -> Self {
        Self {
            value: provider.as_str().to_string(),
            display_name: provider.display_name().to_string(),
            has_api: provider.has_api(),
            is_manual: provider.is_manual(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn absent_optionals_render_as_empty_strings() {
        let article = Article::builder("Hello", "draft").build(Utc::now()).unwrap();
        let dto = ArticleDto::from(&article);
        assert_eq!(dto.id, 0);
        assert_eq!(dto.title, "Hello");
        assert_eq!(dto.body, "");
        assert_eq!(dto.status, "draft");
        assert_eq!(dto.provider_type, "");
        assert_eq!(dto.link, "");
        assert!(dto.deleted_at.is_none());
    }

    #[test]
    fn provider_dto_carries_label() {
        let dto = ProviderDto::from(ProviderType::PersonalBlog);
        assert_eq!(dto.value, "personal_blog");
        assert_eq!(dto.display_name, "個人ブログ");
        assert!(dto.is_manual);
        assert!(!dto.has_api);
    }
}
