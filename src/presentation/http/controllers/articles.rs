// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        ChangeProviderCommand, CreateArticleCommand, DeleteArticleCommand, RestoreArticleCommand,
        SetPublishStateCommand, SoftDeleteArticleCommand, UpdateArticleCommand,
    },
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::presentation::http::openapi::{ArticleListResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// `draft` or `published`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub provider_type: Option<String>,
    /// `created_at`, `updated_at`, `title` or `id`.
    #[serde(default)]
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub include_deleted: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub provider_type: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Body, provider and link missing from the payload are cleared.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub provider_type: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeProviderRequest {
    #[serde(default)]
    pub provider_type: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Paged article listing.", body = ArticleListResponse),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let query = ListArticlesQuery {
        status: params.status,
        provider_type: params.provider_type,
        sort_by: params.sort_by,
        sort_order: params.sort_order,
        page: params.page,
        limit: params.limit,
        include_deleted: params.include_deleted,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = u64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article found.", body = ArticleDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<u64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        body: payload.body,
        status: payload.status,
        provider_type: payload.provider_type,
        link: payload.link,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = u64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "Invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Provider of a published article cannot change.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(payload): ApiJson<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        body: payload.body,
        status: payload.status,
        provider_type: payload.provider_type,
        link: payload.link,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = u64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article removed permanently.", body = StatusResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<u64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/publish",
    params(("id" = u64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article published.", body = ArticleDto),
        (status = 409, description = "Article already published.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<u64>,
) -> HttpResult<Json<ArticleDto>> {
    set_publish_state(state, id, true).await
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/draft",
    params(("id" = u64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article moved back to draft.", body = ArticleDto),
        (status = 409, description = "Article already a draft.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn draft_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<u64>,
) -> HttpResult<Json<ArticleDto>> {
    set_publish_state(state, id, false).await
}

async fn set_publish_state(
    state: HttpState,
    id: u64,
    publish: bool,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .set_publish_state(SetPublishStateCommand { id, publish })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/trash",
    params(("id" = u64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article soft-deleted.", body = ArticleDto),
        (status = 409, description = "Article already deleted.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn soft_delete_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<u64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .soft_delete_article(SoftDeleteArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/restore",
    params(("id" = u64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article restored.", body = ArticleDto),
        (status = 409, description = "Article is not deleted.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn restore_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<u64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .restore_article(RestoreArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}/provider",
    params(("id" = u64, Path, description = "Article id")),
    request_body = ChangeProviderRequest,
    responses(
        (status = 200, description = "Provider changed.", body = ArticleDto),
        (status = 409, description = "Article is published.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn change_provider(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(payload): ApiJson<ChangeProviderRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .change_provider(ChangeProviderCommand {
            id,
            provider_type: payload.provider_type,
        })
        .await
        .into_http()
        .map(Json)
}
