use std::sync::Arc;

use crate::engine::TableManager;

use super::commands::{ActCommand, Command, JoinTableCommand};
use super::dto::{CommandResponse, HistoryDto, TableSnapshot, TableSummaryDto};
use super::errors::ApiError;
use super::queries::{build_snapshot, build_summary, Query, QueryResponse};

/// Фасад над `TableManager`: create / join / act / get в виде снапшотов.
///
/// Дешёво клонируется, транспорт держит по копии на обработчик.
#[derive(Clone)]
pub struct GameService {
    manager: Arc<TableManager>,
}

impl GameService {
    pub fn new(manager: Arc<TableManager>) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &Arc<TableManager> {
        &self.manager
    }

    /// Новый стол, статус `waiting`.
    pub fn create(&self) -> TableSnapshot {
        build_snapshot(&self.manager.create())
    }

    pub fn join(&self, table_id: &str, player_id: &str) -> Result<TableSnapshot, ApiError> {
        require("id", table_id)?;
        require("player", player_id)?;
        let table = self.manager.join(table_id, player_id)?;
        Ok(build_snapshot(&table))
    }

    pub fn act(&self, table_id: &str, player_id: &str, mv: &str) -> Result<TableSnapshot, ApiError> {
        require("id", table_id)?;
        require("player", player_id)?;
        require("move", mv)?;
        let table = self.manager.action(table_id, player_id, mv)?;
        Ok(build_snapshot(&table))
    }

    pub fn get(&self, table_id: &str) -> Result<TableSnapshot, ApiError> {
        Ok(self.manager.read(table_id, build_snapshot)?)
    }

    pub fn list(&self) -> Vec<TableSummaryDto> {
        self.manager.list(build_summary)
    }

    pub fn history(&self, table_id: &str) -> Result<HistoryDto, ApiError> {
        let history = self.manager.history(table_id)?;
        Ok(HistoryDto {
            table_id: table_id.to_string(),
            events: history.events,
        })
    }

    /// Выполнить команду.
    pub fn execute(&self, command: Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::CreateTable => Ok(CommandResponse::TableCreated(self.create())),
            Command::JoinTable(JoinTableCommand {
                table_id,
                player_id,
            }) => self
                .join(&table_id, &player_id)
                .map(CommandResponse::TableState),
            Command::Act(ActCommand {
                table_id,
                player_id,
                mv,
            }) => self
                .act(&table_id, &player_id, &mv)
                .map(CommandResponse::TableState),
        }
    }

    /// Выполнить запрос на чтение.
    pub fn query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        match query {
            Query::GetTable { table_id } => self.get(&table_id).map(QueryResponse::Table),
            Query::ListTables => Ok(QueryResponse::Tables(self.list())),
            Query::GetHistory { table_id } => self.history(&table_id).map(QueryResponse::History),
        }
    }
}

fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("missing {field}")));
    }
    Ok(())
}
