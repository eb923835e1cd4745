//! Внешний API ядра для фронтов.
//!
//! - DTO (dto.rs) - сериализуемые снимки матчей;
//! - запросы (queries.rs) - сборка DTO из состояния движка, только чтение.

pub mod dto;
pub mod queries;

pub use dto::*;
pub use queries::*;
