// src/engine/table_manager.rs

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use log::info;
use parking_lot::RwLock;

use crate::domain::table::Table;
use crate::domain::{PlayerId, TableId};
use crate::engine::game_loop::{self, RoundStatus};
use crate::engine::hand_history::{TableEventKind, TableHistory};
use crate::engine::{EngineError, Move, RandomSource};
use crate::infra::config::ManagerConfig;
use crate::infra::ids::{IdSource, UuidIds};
use crate::infra::rng::{DeterministicRng, SystemRng};

/// Внутренний объект: стол + его история событий.
struct ManagedTable {
    table: Table,
    history: TableHistory,
}

impl ManagedTable {
    fn new(table: Table) -> Self {
        let mut history = TableHistory::new();
        history.push(TableEventKind::TableCreated);
        Self { table, history }
    }
}

/// Менеджер столов:
/// - единственный владелец реестра TableId -> Table;
/// - каждая операция целиком выполняется под одним guard'ом RwLock
///   (запись для create/join/action, чтение для get/snapshot/list);
/// - никаких глобальных синглтонов: создаётся явно и шарится через `Arc`.
pub struct TableManager {
    tables: RwLock<HashMap<TableId, ManagedTable>>,
    ids: Box<dyn IdSource>,
    config: ManagerConfig,
    /// Номер следующей раздачи (для `shuffle_seed`).
    deals: AtomicU64,
}

impl TableManager {
    /// Менеджер с настройками по умолчанию и UUID-идентификаторами.
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    pub fn with_config(config: ManagerConfig) -> Self {
        Self::with_id_source(config, UuidIds)
    }

    pub fn with_id_source(config: ManagerConfig, ids: impl IdSource + 'static) -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            ids: Box::new(ids),
            config,
            deals: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Создать пустой стол в статусе `Waiting`.
    pub fn create(&self) -> Table {
        let table = Table::new(self.ids.next_table_id(), Utc::now());

        let mut tables = self.tables.write();
        tables.insert(table.id.clone(), ManagedTable::new(table.clone()));
        drop(tables);

        info!("стол {} создан", table.id);
        table
    }

    /// Посадить игрока и раздать карты.
    ///
    /// Колода перемешивается системным RNG, либо детерминированно,
    /// если в конфиге задан `shuffle_seed`.
    pub fn join(&self, table_id: &str, player_id: impl Into<PlayerId>) -> Result<Table, EngineError> {
        let player_id = player_id.into();
        let mut tables = self.tables.write();
        let mt = tables
            .get_mut(table_id)
            .ok_or_else(|| EngineError::NotFound(table_id.to_string()))?;

        if mt.table.has_player() {
            return Err(EngineError::AlreadyJoined(mt.table.id.clone()));
        }

        let status = match self.config.shuffle_seed {
            Some(seed) => {
                let n = self.deals.fetch_add(1, Ordering::Relaxed);
                let mut rng = DeterministicRng::from_seed(seed.wrapping_add(n));
                game_loop::deal_initial(&mut mt.table, &mut mt.history, player_id, &mut rng)?
            }
            None => {
                game_loop::deal_initial(&mut mt.table, &mut mt.history, player_id, &mut SystemRng)?
            }
        };

        log_joined(&mt.table, status);
        Ok(mt.table.clone())
    }

    /// То же, что `join`, но с явным источником случайности.
    pub fn join_with_rng<R: RandomSource>(
        &self,
        table_id: &str,
        player_id: impl Into<PlayerId>,
        rng: &mut R,
    ) -> Result<Table, EngineError> {
        let mut tables = self.tables.write();
        let mt = tables
            .get_mut(table_id)
            .ok_or_else(|| EngineError::NotFound(table_id.to_string()))?;

        let status = game_loop::deal_initial(&mut mt.table, &mut mt.history, player_id.into(), rng)?;

        log_joined(&mt.table, status);
        Ok(mt.table.clone())
    }

    /// Ход игрока строкой ("hit" | "stick").
    ///
    /// Порядок ошибок: NotFound, NotPlaying, WrongPlayer,
    /// HandNotInitialized, InvalidMove, DeckEmpty.
    pub fn action(&self, table_id: &str, player_id: &str, mv: &str) -> Result<Table, EngineError> {
        let mut tables = self.tables.write();
        let mt = tables
            .get_mut(table_id)
            .ok_or_else(|| EngineError::NotFound(table_id.to_string()))?;

        game_loop::ensure_can_act(&mt.table, player_id)?;
        let mv: Move = mv.parse()?;

        let status = game_loop::apply_move(&mut mt.table, &mut mt.history, player_id, mv)?;
        log_finished(&mt.table, status);
        Ok(mt.table.clone())
    }

    /// Типизированный вариант `action`.
    pub fn apply_move(&self, table_id: &str, player_id: &str, mv: Move) -> Result<Table, EngineError> {
        let mut tables = self.tables.write();
        let mt = tables
            .get_mut(table_id)
            .ok_or_else(|| EngineError::NotFound(table_id.to_string()))?;

        let status = game_loop::apply_move(&mut mt.table, &mut mt.history, player_id, mv)?;
        log_finished(&mt.table, status);
        Ok(mt.table.clone())
    }

    /// Текущее состояние стола (копия).
    pub fn get(&self, table_id: &str) -> Result<Table, EngineError> {
        self.read(table_id, Table::clone)
    }

    /// Прочитать стол под read-guard'ом без копирования.
    pub fn read<T>(&self, table_id: &str, f: impl FnOnce(&Table) -> T) -> Result<T, EngineError> {
        let tables = self.tables.read();
        tables
            .get(table_id)
            .map(|mt| f(&mt.table))
            .ok_or_else(|| EngineError::NotFound(table_id.to_string()))
    }

    /// История событий стола.
    pub fn history(&self, table_id: &str) -> Result<TableHistory, EngineError> {
        let tables = self.tables.read();
        tables
            .get(table_id)
            .map(|mt| mt.history.clone())
            .ok_or_else(|| EngineError::NotFound(table_id.to_string()))
    }

    /// Пройтись по всем столам (от старых к новым).
    pub fn list<T>(&self, f: impl Fn(&Table) -> T) -> Vec<T> {
        let tables = self.tables.read();
        let mut all: Vec<&Table> = tables.values().map(|mt| &mt.table).collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        all.into_iter().map(f).collect()
    }

    pub fn has_table(&self, table_id: &str) -> bool {
        self.tables.read().contains_key(table_id)
    }

    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }
}

impl Default for TableManager {
    fn default() -> Self {
        Self::new()
    }
}

fn log_joined(table: &Table, status: RoundStatus) {
    info!(
        "игрок {} сел за стол {}: {} очков",
        table.player_id.as_deref().unwrap_or("-"),
        table.id,
        table.player_score()
    );
    log_finished(table, status);
}

fn log_finished(table: &Table, status: RoundStatus) {
    if let RoundStatus::Finished(outcome) = status {
        info!(
            "стол {} завершён: игрок {} / дилер {} -> {:?}",
            table.id,
            table.player_score(),
            table.dealer_score(),
            outcome
        );
    }
}
