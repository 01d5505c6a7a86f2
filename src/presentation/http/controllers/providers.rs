use crate::application::dto::ProviderDto;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/providers",
    responses(
        (status = 200, description = "Known external providers.", body = [ProviderDto])
    ),
    tag = "Providers"
)]
pub async fn list_providers(Extension(state): Extension<HttpState>) -> Json<Vec<ProviderDto>> {
    Json(state.services.article_queries.list_providers())
}
