// src/bin/pontoon_dev_cli.rs

use anyhow::Error;
use pico_args::Arguments;
use pontoon_engine::api::{build_snapshot, TableSnapshot};
use pontoon_engine::domain::{TableId, TableStatus};
use pontoon_engine::engine::{Move, TableManager, DEALER_STANDS_ON};
use pontoon_engine::infra::{ManagerConfig, SequentialIds};

const HELP: &str = "\
Play a few pontoon tables end-to-end in one process

USAGE:
  pontoon_dev_cli [OPTIONS]

OPTIONS:
  --tables     N           Number of tables to play    [default: 3]
  --seed       N           Deterministic shuffle seed  [default: none]

FLAGS:
  -h, --help               Print help information
";

fn main() -> Result<(), Error> {
    let mut pargs = Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    let num_tables: usize = pargs.opt_value_from_str("--tables")?.unwrap_or(3);
    let shuffle_seed: Option<u64> = pargs.opt_value_from_str("--seed")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    println!("pontoon_dev_cli: стартуем {num_tables} стол(а/ов)…");

    // 1. Менеджер с читаемыми id.
    let manager = TableManager::with_id_source(ManagerConfig { shuffle_seed }, SequentialIds::new());

    // 2. Создаём столы и сажаем по игроку.
    let mut table_ids: Vec<TableId> = Vec::new();
    for n in 0..num_tables {
        let table = manager.create();
        let player = format!("player-{}", n + 1);
        manager.join(&table.id, player.as_str())?;
        table_ids.push(table.id);
    }

    // 3. Играем каждый стол простой политикой.
    for table_id in &table_ids {
        println!();
        println!("================ TABLE {table_id} =================");
        play_table(&manager, table_id)?;
    }

    println!();
    println!("[CLI] Завершение работы dev-CLI.");
    Ok(())
}

/// Берём карту, пока меньше 17 (и на мягких 17), иначе останавливаемся.
fn play_table(manager: &TableManager, table_id: &str) -> Result<(), Error> {
    let mut table = manager.get(table_id)?;
    print_snapshot(&build_snapshot(&table));

    while table.status == TableStatus::Playing {
        let player = table.player_id.clone().unwrap_or_default();
        let soft = table.player_hand.as_ref().is_some_and(|h| h.is_soft());
        let mv = if table.player_score() < DEALER_STANDS_ON
            || (soft && table.player_score() == DEALER_STANDS_ON)
        {
            Move::Hit
        } else {
            Move::Stick
        };
        println!("[CLI] {player}: {mv}");

        table = manager.apply_move(table_id, &player, mv)?;
        print_snapshot(&build_snapshot(&table));
    }

    Ok(())
}

fn print_snapshot(s: &TableSnapshot) {
    let cards = |cards: &[pontoon_engine::domain::Card]| {
        cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    println!(
        "  status={:?} | игрок [{}] = {} ({:?}) | дилер [{}] = {}",
        s.status,
        cards(&s.player_cards),
        s.player_score,
        s.player_hand_status,
        cards(&s.dealer_cards),
        s.dealer_score,
    );
}
