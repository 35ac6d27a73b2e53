//! Доменная модель понтуна: карты, колода, подсчёт очков, рука игрока, стол.

pub mod card;
pub mod deck;
pub mod hand;
pub mod scoring;
pub mod table;

// Идентификаторы. Стол получает id от менеджера, игрок приходит снаружи.
pub type PlayerId = String;
pub type TableId = String;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use scoring::*;
pub use table::*;
