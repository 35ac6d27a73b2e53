//! Инфраструктурный слой вокруг движка:
//! - генерация ID столов;
//! - RNG-реализации для перемешивания;
//! - конфигурация менеджера и сервера.

pub mod config;
pub mod ids;
pub mod rng;

pub use config::*;
pub use ids::*;
pub use rng::*;
