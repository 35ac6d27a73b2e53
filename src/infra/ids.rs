use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::TableId;

/// Источник идентификаторов столов. Каждый вызов: новый уникальный id.
pub trait IdSource: Send + Sync {
    fn next_table_id(&self) -> TableId;
}

/// UUID v4: по умолчанию для сервера.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_table_id(&self) -> TableId {
        Uuid::new_v4().to_string()
    }
}

/// Монотонный счётчик: `table-1`, `table-2`, ...
/// Удобно для тестов и dev-CLI, где id хочется читать глазами.
#[derive(Debug)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_table_id(&self) -> TableId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("table-{n}")
    }
}
