use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, TableId};

/// Команда верхнего уровня.
///
/// Любой транспорт (HTTP, RPC, in-process) превращает запрос в одну из них
/// и отдаёт в `GameService::execute`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать новый пустой стол.
    CreateTable,

    /// Посадить игрока и раздать карты.
    JoinTable(JoinTableCommand),

    /// Ход игрока.
    Act(ActCommand),
}

/// Посадить игрока за стол.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinTableCommand {
    pub table_id: TableId,
    pub player_id: PlayerId,
}

/// Ход игрока. `mv` оставлен строкой: разбор и ошибка InvalidMove живут в движке.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActCommand {
    pub table_id: TableId,
    pub player_id: PlayerId,
    #[serde(rename = "move")]
    pub mv: String,
}
