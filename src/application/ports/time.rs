// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the instant handed to every aggregate mutation.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
