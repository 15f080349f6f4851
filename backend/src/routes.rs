use std::path::PathBuf;

use headers::{ContentLength, HeaderMapExt};
use serde_json::json;
use tokio::fs;
use warp::{Filter, reject, Rejection, Reply, reply};
use warp::http::{header, HeaderValue, StatusCode, Uri};
use warp::hyper::Body;
use warp::reply::Response;

use shared::constants::{
    MSG_DELETE_SUCCESS, PATH_APP, PATH_DELETE, PATH_NOT_FOUND, PATH_REPORT, PATH_SAFE_RETRIEVAL, PATH_STATIC, ROOT_PATH,
};
use shared::routes::Route;
use shared::types::DeleteResult;

use crate::constants::{PDF_CONTENT_TYPE, report_file_name};
use crate::filters::{with_app_name, with_site};
use crate::page::render_page;
use crate::store::{app_details_data, AppDetails, dashboard_data, delete_app, report_path, StoreError};
use crate::types::Site;

pub async fn dashboard_handler(site: Site) -> Result<impl Reply, Rejection> {
    let data = dashboard_data(&site.home, &site.server_version).await;
    Ok(reply::html(render_page(&data, &site.static_url, &site.proxy)))
}

fn redirect_to(route: Route, app_name: Option<&str>) -> Response {
    let location = match app_name {
        Some(app_name) => route.app_link(app_name),
        None => route.path(),
    };
    match location.parse::<Uri>() {
        Ok(uri) => warp::redirect::temporary(uri).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Detail page; a retrieval app opened under the loader route (or the reverse)
/// is redirected to the page for its own type.
pub async fn app_handler(route: Route, app_name: String, site: Site) -> Result<Response, Rejection> {
    let details = match app_details_data(&site.home, &app_name).await {
        Ok(details) => details,
        Err(err) => {
            tracing::warn!("[App Details]: {err}");
            return Ok(redirect_to(Route::NotFound, None));
        }
    };

    let page = match (route, details) {
        (Route::AppDetails, AppDetails::Loader(report)) => render_page(&report, &site.static_url, &site.proxy),
        (Route::SafeRetrievalApp, AppDetails::Retrieval(details)) => {
            render_page(&details, &site.static_url, &site.proxy)
        }
        (_, AppDetails::Loader(_)) => return Ok(redirect_to(Route::AppDetails, Some(&app_name))),
        (_, AppDetails::Retrieval(_)) => return Ok(redirect_to(Route::SafeRetrievalApp, Some(&app_name))),
    };
    Ok(reply::html(page).into_response())
}

pub fn not_found_page(site: &Site) -> String {
    render_page(&json!({}), &site.static_url, &site.proxy)
}

pub async fn not_found_handler(site: Site) -> Result<impl Reply, Rejection> {
    Ok(reply::html(not_found_page(&site)))
}

pub async fn report_handler(app_name: String, site: Site) -> Result<Response, Rejection> {
    let filename = report_path(&site.home, &app_name).await.map_err(reject::custom)?;
    let body = fs::read(&filename).await.map_err(|err| reject::custom(StoreError::from(err)))?;

    let len = body.len() as u64;
    let mut resp = Response::new(Body::from(body));
    resp.headers_mut().typed_insert(ContentLength(len));
    resp.headers_mut().insert(header::CONTENT_TYPE, HeaderValue::from_static(PDF_CONTENT_TYPE));
    let disposition = format!("attachment; filename=\"{}\"", report_file_name(&app_name).replace('"', ""));
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        resp.headers_mut().insert(header::CONTENT_DISPOSITION, value);
    }
    Ok(resp)
}

pub async fn delete_handler(app_name: String, site: Site) -> Result<impl Reply, Rejection> {
    let (status, message) = match delete_app(&site.home, &app_name).await {
        Ok(()) => (StatusCode::OK, MSG_DELETE_SUCCESS.to_string()),
        Err(err) => {
            tracing::error!("[Delete App]: {app_name}: {err}");
            (store_status(&err), err.to_string())
        }
    };
    Ok(reply::with_status(reply::json(&DeleteResult { message }), status))
}

pub fn store_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) | StoreError::NoReport(_) => StatusCode::NOT_FOUND,
        StoreError::InvalidName(_) => StatusCode::BAD_REQUEST,
        StoreError::Io(_) | StoreError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn routes(site: Site, static_dir: PathBuf) -> impl Filter<Extract=(impl Reply, ), Error=Rejection> + Clone {
    let root = || warp::path(ROOT_PATH);

    let dashboard = root()
        .and(warp::path::end())
        .and(with_site(site.clone()))
        .and_then(dashboard_handler);

    let safe_retrieval = root()
        .and(warp::path(PATH_SAFE_RETRIEVAL))
        .and(warp::path::end())
        .and(with_site(site.clone()))
        .and_then(dashboard_handler);

    let app_details = root()
        .and(warp::path(PATH_APP))
        .and(warp::path::end())
        .map(|| Route::AppDetails)
        .and(with_app_name())
        .and(with_site(site.clone()))
        .and_then(app_handler);

    let retrieval_app_details = root()
        .and(warp::path(PATH_SAFE_RETRIEVAL))
        .and(warp::path(PATH_APP))
        .and(warp::path::end())
        .map(|| Route::SafeRetrievalApp)
        .and(with_app_name())
        .and(with_site(site.clone()))
        .and_then(app_handler);

    let not_found = root()
        .and(warp::path(PATH_NOT_FOUND))
        .and(warp::path::end())
        .and(with_site(site.clone()))
        .and_then(not_found_handler);

    let report = root()
        .and(warp::path(PATH_REPORT))
        .and(warp::path::end())
        .and(with_app_name())
        .and(with_site(site.clone()))
        .and_then(report_handler);

    let delete = root()
        .and(warp::path(PATH_APP))
        .and(warp::path(PATH_DELETE))
        .and(warp::path::end())
        .and(with_app_name())
        .and(with_site(site))
        .and_then(delete_handler);

    let static_files = warp::path(PATH_STATIC).and(warp::fs::dir(static_dir));

    warp::get()
        .and(
            dashboard
                .or(safe_retrieval)
                .or(app_details)
                .or(retrieval_app_details)
                .or(not_found)
                .or(report)
                .or(static_files)
        )
        .or(warp::delete().and(delete))
}

#[cfg(test)]
mod tests {
    use std::fs as std_fs;

    use crate::constants::path_to_report_pdf;
    use crate::handle_rejection;
    use crate::store::tests::{loader_fixture, retrieval_fixture};

    use super::*;

    fn site(home: &std::path::Path) -> Site {
        Site {
            home: home.to_path_buf(),
            static_url: "/static".to_string(),
            proxy: "".to_string(),
            server_version: "0.1.0".to_string(),
        }
    }

    #[tokio::test]
    async fn dashboard_embeds_app_data() {
        let home = tempfile::tempdir().unwrap();
        loader_fixture(home.path(), "acme", 3);
        let filter = routes(site(home.path()), home.path().join("static")).recover(handle_rejection);

        let res = warp::test::request().path("/pebblo/").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = String::from_utf8_lossy(res.body()).to_string();
        assert!(body.contains("id=\"main_script\""));
        assert!(body.contains("&quot;applicationsAtRiskCount&quot;:1"));

        let res = warp::test::request().path("/pebblo/safe_retrieval/").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn app_pages_follow_app_type() {
        let home = tempfile::tempdir().unwrap();
        loader_fixture(home.path(), "acme", 3);
        retrieval_fixture(home.path(), "rag");
        let filter = routes(site(home.path()), home.path().join("static")).recover(handle_rejection);

        let res = warp::test::request().path("/pebblo/app/?app_name=acme").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(String::from_utf8_lossy(res.body()).contains("&quot;reportSummary&quot;"));

        let res = warp::test::request().path("/pebblo/app/?app_name=rag").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(res.headers()[header::LOCATION], "/pebblo/safe_retrieval/app/?app_name=rag");

        let res = warp::test::request().path("/pebblo/app/?app_name=missing").reply(&filter).await;
        assert_eq!(res.headers()[header::LOCATION], "/pebblo/not-found/");
    }

    #[tokio::test]
    async fn report_download() {
        let home = tempfile::tempdir().unwrap();
        loader_fixture(home.path(), "acme", 3);
        let filter = routes(site(home.path()), home.path().join("static")).recover(handle_rejection);

        let res = warp::test::request().path("/pebblo/report/?app_name=acme").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        std_fs::write(path_to_report_pdf(home.path(), "acme", "l2"), b"%PDF-1.4").unwrap();
        let res = warp::test::request().path("/pebblo/report/?app_name=acme").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_TYPE], PDF_CONTENT_TYPE);
        assert_eq!(res.headers()[header::CONTENT_LENGTH], "8");
        assert_eq!(res.body().as_ref(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn delete_app_statuses() {
        let home = tempfile::tempdir().unwrap();
        loader_fixture(home.path(), "acme", 3);
        let filter = routes(site(home.path()), home.path().join("static")).recover(handle_rejection);

        let res = warp::test::request()
            .method("DELETE")
            .path("/pebblo/app/delete/?app_name=acme")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let result = serde_json::from_slice::<DeleteResult>(res.body()).unwrap();
        assert_eq!(result.message, MSG_DELETE_SUCCESS);
        assert!(!home.path().join("acme").exists());

        let res = warp::test::request()
            .method("DELETE")
            .path("/pebblo/app/delete/?app_name=acme")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = warp::test::request()
            .method("DELETE")
            .path("/pebblo/app/delete/?app_name=..%2Fetc")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_paths_render_not_found() {
        let home = tempfile::tempdir().unwrap();
        let filter = routes(site(home.path()), home.path().join("static")).recover(handle_rejection);

        let res = warp::test::request().path("/pebblo/not-found/").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = warp::test::request().path("/pebblo/nothing/here").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(String::from_utf8_lossy(res.body()).contains("id=\"main_script\""));
    }
}
