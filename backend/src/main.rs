use std::convert::Infallible;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use warp::{Filter, Rejection, Reply, reply};
use warp::http::StatusCode;
use warp::reject::MethodNotAllowed;

use shared::types::DeleteResult;

use crate::config::{CONFIG, CONFIG_LOAD};
use crate::routes::{not_found_page, routes, store_status};
use crate::store::StoreError;
use crate::types::Site;

mod config;
mod constants;
mod filters;
mod page;
mod retrieval;
mod routes;
mod store;
mod types;

#[tokio::main(worker_threads = 2)]
async fn main() {
    let with_ansi = cfg!(target_os = "macos");

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_ansi(with_ansi)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level)))
        .with_thread_ids(true)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("tracing init: {err}");
    }

    if let Err(err) = CONFIG_LOAD.as_ref() {
        tracing::warn!("[Startup]: {err}, using defaults");
    }

    let site = Site::from_config(&CONFIG);
    let static_dir = CONFIG.static_path();
    if !site.home.is_dir() {
        tracing::warn!("[Startup]: cache directory {} does not exist yet", site.home.display());
    }
    tracing::info!("[Startup]: serving {} on {:?}:{}", static_dir.display(), CONFIG.host, CONFIG.port);

    warp::serve(
        routes(site, static_dir)
            .recover(handle_rejection)
            .with(warp::trace::request()),
    )
        .run((CONFIG.host, CONFIG.port))
        .await;
}

#[tracing::instrument]
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    if let Some(store_err) = err.find::<StoreError>() {
        let body = reply::json(&DeleteResult { message: store_err.to_string() });
        return Ok(reply::with_status(body, store_status(store_err)).into_response());
    }

    if err.is_not_found() || err.find::<MethodNotAllowed>().is_some() {
        let page = not_found_page(&Site::from_config(&CONFIG));
        return Ok(reply::with_status(reply::html(page), StatusCode::NOT_FOUND).into_response());
    }

    tracing::error!("[Rejection]: {err:?}");
    Ok(reply::with_status("internal error", StatusCode::INTERNAL_SERVER_ERROR).into_response())
}
