use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::ApplicationResult,
    },
    domain::article::{
        ArticleQueryCriteria, ArticleSortField, ArticleStatus, ProviderType, SortOrder,
        criteria::parse_optional,
    },
};

/// Raw listing parameters as received from transport code.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub status: Option<String>,
    pub provider_type: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub include_deleted: bool,
}

impl ListArticlesQuery {
    fn into_criteria(self) -> ApplicationResult<ArticleQueryCriteria> {
        let mut criteria = ArticleQueryCriteria::default()
            .paged(self.page.unwrap_or(1), self.limit.unwrap_or(0))
            .including_deleted(self.include_deleted);

        if let Some(status) = parse_optional::<ArticleStatus>(self.status.as_deref())? {
            criteria = criteria.with_status(status);
        }
        if let Some(provider) = parse_optional::<ProviderType>(self.provider_type.as_deref())? {
            criteria = criteria.with_provider_type(provider);
        }
        let sort_by = parse_optional::<ArticleSortField>(self.sort_by.as_deref())?
            .unwrap_or_default();
        let sort_order =
            parse_optional::<SortOrder>(self.sort_order.as_deref())?.unwrap_or_default();

        Ok(criteria.sorted_by(sort_by, sort_order).normalized())
    }
}

impl ArticleQueryService {
    /// Every live article, newest first as stored.
    pub async fn list_all_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.repo.find_all().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let criteria = query.into_criteria()?;
        let (articles, total) = self.repo.find_by_criteria(&criteria).await?;
        tracing::debug!(
            total,
            page = criteria.page,
            limit = criteria.limit,
            "articles listed"
        );

        let items = articles.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, criteria.page, criteria.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_from_raw_parameters() {
        let criteria = ListArticlesQuery {
            status: Some("published".into()),
            provider_type: Some("zenn".into()),
            sort_by: Some("title".into()),
            sort_order: Some("asc".into()),
            page: Some(2),
            limit: Some(500),
            include_deleted: true,
        }
        .into_criteria()
        .unwrap();

        assert_eq!(criteria.status, Some(ArticleStatus::Published));
        assert_eq!(criteria.provider_type, Some(ProviderType::Zenn));
        assert_eq!(criteria.sort_by, ArticleSortField::Title);
        assert_eq!(criteria.sort_order, SortOrder::Asc);
        assert_eq!(criteria.page, 2);
        assert_eq!(criteria.limit, 100);
        assert!(criteria.include_deleted);
    }

    #[test]
    fn criteria_defaults() {
        let criteria = ListArticlesQuery::default().into_criteria().unwrap();
        assert_eq!(criteria, ArticleQueryCriteria::default());
    }

    #[test]
    fn criteria_rejects_unknown_filters() {
        let query = ListArticlesQuery {
            provider_type: Some("medium".into()),
            ..ListArticlesQuery::default()
        };
        assert!(query.into_criteria().is_err());
    }
}
