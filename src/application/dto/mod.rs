pub mod articles;
pub mod pagination;

pub use articles::{ArticleDto, ProviderDto};
pub use pagination::Page;
