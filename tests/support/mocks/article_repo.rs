// tests/support/mocks/article_repo.rs
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use article_hub::domain::article::{
    Article, ArticleId, ArticleQueryCriteria, ArticleRecord, ArticleRepository, ArticleSortField,
    SortOrder,
};
use article_hub::domain::errors::{DomainError, DomainResult};

/* -------------------------------- InMemoryArticleRepository -------------------------------- */

/// Map-backed repository that assigns sequential ids like a serial column.
pub struct InMemoryArticleRepository {
    inner: Mutex<State>,
}

struct State {
    next_id: u64,
    rows: BTreeMap<u64, Article>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(State {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Stores already-persisted articles verbatim.
    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.inner.lock().unwrap();
            for article in articles {
                let id = article.id().value();
                state.next_id = state.next_id.max(id + 1);
                state.rows.insert(id, article);
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn get(&self, id: u64) -> Option<Article> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }
}

fn compare(a: &Article, b: &Article, field: ArticleSortField) -> Ordering {
    let primary = match field {
        ArticleSortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        ArticleSortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
        ArticleSortField::Title => a.title().as_str().cmp(b.title().as_str()),
        ArticleSortField::Id => Ordering::Equal,
    };
    primary.then_with(|| a.id().cmp(&b.id()))
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let state = self.inner.lock().unwrap();
        let mut articles: Vec<Article> = state
            .rows
            .values()
            .filter(|a| !a.is_deleted())
            .cloned()
            .collect();
        articles.sort_by(|a, b| compare(b, a, ArticleSortField::CreatedAt));
        Ok(articles)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().rows.get(&id.value()).cloned())
    }

    async fn find_by_criteria(
        &self,
        criteria: &ArticleQueryCriteria,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let state = self.inner.lock().unwrap();
        let mut matching: Vec<Article> = state
            .rows
            .values()
            .filter(|a| criteria.include_deleted || !a.is_deleted())
            .filter(|a| criteria.status.is_none_or(|s| a.status() == s))
            .filter(|a| {
                criteria
                    .provider_type
                    .is_none_or(|p| a.provider_type() == Some(p))
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| match criteria.sort_order {
            SortOrder::Asc => compare(a, b, criteria.sort_by),
            SortOrder::Desc => compare(b, a, criteria.sort_by),
        });

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(criteria.offset() as usize)
            .take(criteria.limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn create(&self, article: &Article) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;

        let mut record = ArticleRecord::from(article);
        record.id = id;
        let stored = Article::reconstruct(record)?;
        state.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, article: &Article) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        let id = article.id().value();
        match state.rows.get_mut(&id) {
            Some(row) => {
                *row = article.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound("article not found".into())),
        }
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .rows
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

/* -------------------------------- FailingArticleRepository -------------------------------- */

/// Every call fails as if the database were unreachable.
pub struct FailingArticleRepository;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ArticleRepository for FailingArticleRepository {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        unavailable()
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        unavailable()
    }

    async fn find_by_criteria(
        &self,
        _criteria: &ArticleQueryCriteria,
    ) -> DomainResult<(Vec<Article>, u64)> {
        unavailable()
    }

    async fn create(&self, _article: &Article) -> DomainResult<Article> {
        unavailable()
    }

    async fn update(&self, _article: &Article) -> DomainResult<()> {
        unavailable()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        unavailable()
    }
}
