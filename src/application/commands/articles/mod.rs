// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod provider;
mod publish;
mod service;
mod trash;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use provider::ChangeProviderCommand;
pub use publish::SetPublishStateCommand;
pub use service::ArticleCommandService;
pub use trash::{RestoreArticleCommand, SoftDeleteArticleCommand};
pub use update::UpdateArticleCommand;
