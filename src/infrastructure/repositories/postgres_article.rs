// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleQueryCriteria, ArticleRecord, ArticleRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str =
    "id, title, body, status, provider_type, link, created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: Option<String>,
    status: String,
    provider_type: Option<String>,
    link: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let id = u64::try_from(row.id)
            .map_err(|_| DomainError::Persistence(format!("invalid article id {}", row.id)))?;
        Article::reconstruct(ArticleRecord {
            id,
            title: row.title,
            body: row.body,
            status: row.status,
            provider_type: row.provider_type,
            link: row.link,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

fn db_id(id: ArticleId) -> DomainResult<i64> {
    i64::try_from(id.value())
        .map_err(|_| DomainError::validation(format!("article id {id} is out of range")))
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, criteria: &ArticleQueryCriteria) {
    builder.push(" WHERE 1 = 1");
    if !criteria.include_deleted {
        builder.push(" AND deleted_at IS NULL");
    }
    if let Some(status) = criteria.status {
        builder.push(" AND status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(provider) = criteria.provider_type {
        builder.push(" AND provider_type = ");
        builder.push_bind(provider.as_str());
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(db_id(id)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_criteria(
        &self,
        criteria: &ArticleQueryCriteria,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM articles");
        push_filters(&mut count, criteria);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        push_filters(&mut select, criteria);
        // Column and direction come from closed enums, never from raw input.
        select.push(format!(
            " ORDER BY {column} {order}, id {order}",
            column = criteria.sort_by.column(),
            order = criteria.sort_order.as_sql(),
        ));
        select.push(" LIMIT ");
        select.push_bind(i64::from(criteria.limit));
        select.push(" OFFSET ");
        select.push_bind(i64::try_from(criteria.offset()).unwrap_or(i64::MAX));

        let rows = select
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, u64::try_from(total).unwrap_or_default()))
    }

    async fn create(&self, article: &Article) -> DomainResult<Article> {
        let record = ArticleRecord::from(article);

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, body, status, provider_type, link, created_at, updated_at, deleted_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(record.title)
        .bind(record.body)
        .bind(record.status)
        .bind(record.provider_type)
        .bind(record.link)
        .bind(record.created_at)
        .bind(record.updated_at)
        .bind(record.deleted_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let created = Article::try_from(row)?;
        tracing::debug!(article_id = %created.id(), "article row inserted");
        Ok(created)
    }

    async fn update(&self, article: &Article) -> DomainResult<()> {
        if !article.id().is_assigned() {
            return Err(DomainError::validation(
                "cannot update an article that has not been persisted",
            ));
        }
        let id = db_id(article.id())?;
        let record = ArticleRecord::from(article);

        let result = sqlx::query(
            "UPDATE articles
             SET title = $1, body = $2, status = $3, provider_type = $4, link = $5,
                 updated_at = $6, deleted_at = $7
             WHERE id = $8",
        )
        .bind(record.title)
        .bind(record.body)
        .bind(record.status)
        .bind(record.provider_type)
        .bind(record.link)
        .bind(record.updated_at)
        .bind(record.deleted_at)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(db_id(id)?)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}
