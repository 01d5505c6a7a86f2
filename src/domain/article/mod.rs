pub mod criteria;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use criteria::{ArticleQueryCriteria, ArticleSortField, SortOrder};
pub use entity::{Article, ArticleBuilder, ArticleChanges, ArticleRecord};
pub use repository::ArticleRepository;
pub use value_objects::{
    ArticleBody, ArticleId, ArticleLink, ArticleStatus, ArticleTitle, MAX_TITLE_LENGTH,
    ProviderType,
};
