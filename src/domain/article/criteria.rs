use crate::domain::article::value_objects::{ArticleStatus, ProviderType};
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    Id,
}

impl ArticleSortField {
    pub fn column(&self) -> &'static str {
        match self {
            ArticleSortField::CreatedAt => "created_at",
            ArticleSortField::UpdatedAt => "updated_at",
            ArticleSortField::Title => "title",
            ArticleSortField::Id => "id",
        }
    }
}

impl FromStr for ArticleSortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(ArticleSortField::CreatedAt),
            "updated_at" => Ok(ArticleSortField::UpdatedAt),
            "title" => Ok(ArticleSortField::Title),
            "id" => Ok(ArticleSortField::Id),
            other => Err(DomainError::Validation(format!(
                "unsupported sort field '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(DomainError::Validation(format!(
                "unsupported sort order '{s}'"
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Filter, ordering and paging for article listings. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQueryCriteria {
    pub status: Option<ArticleStatus>,
    pub provider_type: Option<ProviderType>,
    pub sort_by: ArticleSortField,
    pub sort_order: SortOrder,
    pub page: u32,
    pub limit: u32,
    pub include_deleted: bool,
}

impl Default for ArticleQueryCriteria {
    fn default() -> Self {
        Self {
            status: None,
            provider_type: None,
            sort_by: ArticleSortField::default(),
            sort_order: SortOrder::default(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            include_deleted: false,
        }
    }
}

impl ArticleQueryCriteria {
    /// Clamps paging to `page >= 1` and `1..=MAX_PAGE_SIZE`; a zero limit means the default.
    pub fn normalized(mut self) -> Self {
        self.page = self.page.max(1);
        self.limit = match self.limit {
            0 => DEFAULT_PAGE_SIZE,
            limit => limit.min(MAX_PAGE_SIZE),
        };
        self
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_provider_type(mut self, provider_type: ProviderType) -> Self {
        self.provider_type = Some(provider_type);
        self
    }

    pub fn sorted_by(mut self, field: ArticleSortField, order: SortOrder) -> Self {
        self.sort_by = field;
        self.sort_order = order;
        self
    }

    pub fn paged(mut self, page: u32, limit: u32) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    pub fn including_deleted(mut self, include_deleted: bool) -> Self {
        self.include_deleted = include_deleted;
        self
    }
}

pub fn parse_optional<T>(value: Option<&str>) -> DomainResult<Option<T>>
where
    T: FromStr<Err = DomainError>,
{
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::parse)
        .transpose()
}
