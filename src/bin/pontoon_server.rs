//! HTTP-сервер понтуна: один процесс, столы живут в памяти.

use std::sync::Arc;

use anyhow::Error;
use log::info;
use pico_args::Arguments;
use pontoon_engine::api::http::create_router;
use pontoon_engine::api::GameService;
use pontoon_engine::engine::TableManager;
use pontoon_engine::infra::{parse_bind, parse_seed, ServerConfig};

const HELP: &str = "\
Run the pontoon game server

USAGE:
  pontoon_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env PONTOON_BIND or 127.0.0.1:9000]
  --seed       N           Deterministic shuffle seed  [default: env PONTOON_SHUFFLE_SEED or none]

FLAGS:
  -h, --help               Print help information
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // .env не обязателен.
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(raw) = pargs.opt_value_from_str::<_, String>("--bind")? {
        config.bind = parse_bind("--bind", &raw)?;
    }
    if let Some(raw) = pargs.opt_value_from_str::<_, String>("--seed")? {
        config.manager.shuffle_seed = Some(parse_seed("--seed", &raw)?);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let manager = Arc::new(TableManager::with_config(config.manager.clone()));
    if let Some(seed) = manager.config().shuffle_seed {
        info!("детерминированное перемешивание, seed = {seed}");
    }

    let app = create_router(GameService::new(manager));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("game service listening on {}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
