//! Внешний API движка понтуна.
//!
//! Здесь описываются:
//! - команды (commands.rs): всё, что меняет состояние (создать стол, сесть, сходить);
//! - запросы (queries.rs): только чтение, плюс проекция стола в снапшот;
//! - DTO (dto.rs): то, что уходит клиенту (без колоды);
//! - ошибки (errors.rs): то, что видит клиент;
//! - сервис (service.rs): фасад над `TableManager` для любого транспорта;
//! - http (http.rs): axum-роутер поверх сервиса.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod http;
pub mod queries;
pub mod service;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
pub use service::GameService;
