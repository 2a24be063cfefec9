use golf_league::args;
use golf_league::controller;
use golf_league::league::LeagueEngine;
use golf_league::logging::init_tracing;
use golf_league::storage::{MemoryStorage, Storage};

use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = args::args_checks()?;

    let memory = match &args.db_populate_json {
        Some(json) => MemoryStorage::from_json(json)?,
        None => MemoryStorage::default(),
    };
    let golfers = memory.fetch_all_records().await?.len();
    info!(golfers, "golfer collection ready");

    let storage: Arc<dyn Storage> = Arc::new(memory);
    let engine = Data::new(LeagueEngine::new(args.handicap));

    let address = (args.bind.clone(), args.port);
    info!(bind = %args.bind, port = args.port, "starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(engine.clone())
            .app_data(Data::from(storage.clone()))
            .configure(controller::configure)
    })
    .bind(address)?
    .run()
    .await?;
    Ok(())
}
