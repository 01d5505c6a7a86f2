// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repo;
pub mod time;

pub use article_repo::{FailingArticleRepository, InMemoryArticleRepository};
pub use time::{FixedClock, SteppingClock, fixed_now};
