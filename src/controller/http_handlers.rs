use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder, http::StatusCode};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use tracing::error;

use crate::error::CoreError;
use crate::league::LeagueEngine;
use crate::model::GolferRecord;
use crate::service::{
    self, RemoveWeek, ScoreUpdate, parse_report_request, parse_score_input, parse_stats_request,
};
use crate::storage::Storage;

/// Register every route on an actix app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/gets/allData", web::get().to(all_data))
        .route("/gets/metadata", web::get().to(metadata))
        .route("/gets/stats", web::get().to(golfer_stats))
        .route("/gets/report", web::get().to(league_report))
        .route("/posts/newWeek", web::post().to(new_week))
        .route("/posts/removeWeek", web::post().to(remove_week))
        .route("/posts/newGolfer", web::post().to(new_golfer))
        .route("/posts/update", web::post().to(update_score))
        .route("/health", web::get().to(HttpResponse::Ok));
}

fn error_response(e: &CoreError) -> HttpResponse {
    let status = match e {
        CoreError::NotFound(_) => StatusCode::NOT_FOUND,
        CoreError::Parse(_) => StatusCode::BAD_REQUEST,
        CoreError::Conflict(_) => StatusCode::CONFLICT,
        CoreError::Storage(_) => {
            error!(error = %e, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    HttpResponse::build(status).json(json!({"error": e.to_string()}))
}

fn respond<T: serde::Serialize>(result: Result<T, CoreError>) -> HttpResponse {
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => error_response(&e),
    }
}

pub async fn all_data(storage: Data<dyn Storage>) -> impl Responder {
    respond(service::load_all_records(storage.get_ref()).await)
}

pub async fn metadata(engine: Data<LeagueEngine>, storage: Data<dyn Storage>) -> impl Responder {
    respond(service::load_metadata(engine.get_ref(), storage.get_ref()).await)
}

pub async fn golfer_stats(
    query: web::Query<HashMap<String, String>>,
    engine: Data<LeagueEngine>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let request = match parse_stats_request(&*query) {
        Ok(request) => request,
        Err(e) => return error_response(&e),
    };
    respond(
        service::load_golfer_stats(
            engine.get_ref(),
            storage.get_ref(),
            &request.name,
            request.filter.as_ref(),
        )
        .await,
    )
}

pub async fn league_report(
    query: web::Query<HashMap<String, String>>,
    engine: Data<LeagueEngine>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let request = match parse_report_request(&*query) {
        Ok(request) => request,
        Err(e) => return error_response(&e),
    };
    respond(
        service::load_league_report(
            engine.get_ref(),
            storage.get_ref(),
            request.year,
            request.week,
        )
        .await,
    )
}

pub async fn new_week(
    body: web::Json<Map<String, Value>>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    respond(service::add_week(storage.get_ref(), &body).await)
}

pub async fn remove_week(body: web::Json<RemoveWeek>, storage: Data<dyn Storage>) -> impl Responder {
    let keys = body.into_inner().key.into_vec();
    respond(service::remove_week(storage.get_ref(), &keys).await)
}

pub async fn new_golfer(
    body: web::Json<GolferRecord>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    respond(service::add_golfer(storage.get_ref(), body.into_inner()).await)
}

pub async fn update_score(
    body: web::Json<ScoreUpdate>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let score = match parse_score_input(&body.score) {
        Ok(score) => score,
        Err(e) => return error_response(&e),
    };
    respond(service::record_score(storage.get_ref(), &body.name, &body.date, score).await)
}
