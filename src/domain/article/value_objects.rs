use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};
use url::Url;

pub const MAX_TITLE_LENGTH: usize = 100;

/// Storage-assigned identity. `0` marks an article that has not been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ArticleId(u64);

impl ArticleId {
    pub const UNASSIGNED: Self = Self(0);

    /// Identity supplied by a caller, which must refer to a persisted article.
    pub fn new(id: u64) -> DomainResult<Self> {
        if id == 0 {
            Err(DomainError::validation("article id must be positive"))
        } else {
            Ok(Self(id))
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<ArticleId> for u64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// Length is measured in `char`s, not encoded bytes.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("article title cannot be empty"));
        }
        if value.chars().count() > MAX_TITLE_LENGTH {
            return Err(DomainError::Validation(format!(
                "article title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleBody(String);

impl ArticleBody {
    /// `None` means the article has no body. An explicit empty string is rejected.
    pub fn new(value: Option<String>) -> DomainResult<Option<Self>> {
        match value {
            None => Ok(None),
            Some(value) if value.is_empty() => {
                Err(DomainError::validation("article body cannot be empty"))
            }
            Some(value) => Ok(Some(Self(value))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, ArticleStatus::Draft)
    }

    pub fn is_published(&self) -> bool {
        matches!(self, ArticleStatus::Published)
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            other => Err(DomainError::Validation(format!(
                "invalid article status '{other}'"
            ))),
        }
    }
}

/// External platform an article is (or will be) posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderType {
    Qiita,
    Zenn,
    Note,
    PersonalBlog,
    OtherManualPlatform,
}

impl ProviderType {
    pub const ALL: [ProviderType; 5] = [
        ProviderType::Qiita,
        ProviderType::Zenn,
        ProviderType::Note,
        ProviderType::PersonalBlog,
        ProviderType::OtherManualPlatform,
    ];

    /// Parses an optional provider name. `None` means no provider is assigned.
    pub fn parse_optional(value: Option<&str>) -> DomainResult<Option<Self>> {
        value.map(str::parse).transpose()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Qiita => "qiita",
            ProviderType::Zenn => "zenn",
            ProviderType::Note => "note",
            ProviderType::PersonalBlog => "personal_blog",
            ProviderType::OtherManualPlatform => "other_manual_platform",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderType::Qiita => "Qiita",
            ProviderType::Zenn => "Zenn",
            ProviderType::Note => "Note",
            ProviderType::PersonalBlog => "個人ブログ",
            ProviderType::OtherManualPlatform => "その他手動投稿",
        }
    }

    /// Label for a raw provider name; unknown names are reported for diagnostics.
    pub fn display_name_of(raw: &str) -> String {
        match raw.parse::<ProviderType>() {
            Ok(provider) => provider.display_name().to_string(),
            Err(_) => format!("Unknown Provider ({raw})"),
        }
    }

    /// Whether articles can be synchronised through the platform's API.
    pub fn has_api(&self) -> bool {
        match self {
            ProviderType::Qiita | ProviderType::Zenn => true,
            ProviderType::Note | ProviderType::PersonalBlog | ProviderType::OtherManualPlatform => {
                false
            }
        }
    }

    pub fn is_manual(&self) -> bool {
        match self {
            ProviderType::PersonalBlog | ProviderType::OtherManualPlatform => true,
            ProviderType::Qiita | ProviderType::Zenn | ProviderType::Note => false,
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderType::ALL
            .into_iter()
            .find(|provider| provider.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("invalid provider type '{s}'")))
    }
}

/// External URL of the published copy. Keeps the caller's spelling verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleLink(String);

impl ArticleLink {
    pub fn new(value: Option<String>) -> DomainResult<Option<Self>> {
        match value {
            None => Ok(None),
            Some(value) => {
                Self::validate(&value)?;
                Ok(Some(Self(value)))
            }
        }
    }

    fn validate(value: &str) -> DomainResult<()> {
        if value.is_empty() {
            return Err(DomainError::validation("link cannot be empty"));
        }
        let parsed = Url::parse(value)
            .map_err(|err| DomainError::Validation(format!("invalid link format: {err}")))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(DomainError::Validation(format!(
                    "link scheme must be http or https, got '{other}'"
                )));
            }
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(DomainError::validation("link must include a host"));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
