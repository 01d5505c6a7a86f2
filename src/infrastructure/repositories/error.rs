use crate::domain::errors::DomainError;

const CNT_ARTICLE_STATUS: &str = "articles_status_chk";
const CNT_ARTICLE_PROVIDER: &str = "articles_provider_type_chk";
const CNT_ARTICLE_TITLE: &str = "articles_title_not_empty_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_STATUS => DomainError::validation("invalid article status"),
                    CNT_ARTICLE_PROVIDER => DomainError::validation("invalid provider type"),
                    CNT_ARTICLE_TITLE => {
                        DomainError::validation("article title cannot be empty")
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23514" => {
                        return DomainError::validation("check constraint violated");
                    }
                    "22001" => {
                        return DomainError::validation("value too long for column");
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("article not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
