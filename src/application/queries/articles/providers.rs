use super::ArticleQueryService;
use crate::{application::dto::ProviderDto, domain::article::ProviderType};

impl ArticleQueryService {
    pub fn list_providers(&self) -> Vec<ProviderDto> {
        ProviderType::ALL.into_iter().map(ProviderDto::from).collect()
    }
}
