use crate::domain::article::criteria::ArticleQueryCriteria;
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Every article that has not been soft-deleted.
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Returns the requested page and the total number of matching articles.
    async fn find_by_criteria(
        &self,
        criteria: &ArticleQueryCriteria,
    ) -> DomainResult<(Vec<Article>, u64)>;
    /// Persists a new article and returns it with its assigned identity.
    async fn create(&self, article: &Article) -> DomainResult<Article>;
    async fn update(&self, article: &Article) -> DomainResult<()>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
