use std::collections::HashMap;
use std::convert::Infallible;

use warp::Filter;

use shared::constants::QUERY_APP_NAME;

use crate::types::Site;

/// `?app_name=` value, empty when the query lacks it.
pub fn with_app_name() -> impl Filter<Extract=(String, ), Error=Infallible> + Clone {
    warp::query::<HashMap<String, String>>()
        .or(warp::any().map(HashMap::new))
        .unify()
        .map(|mut query: HashMap<String, String>| {
            query.remove(QUERY_APP_NAME).map(|name| name.trim().to_string()).unwrap_or_default()
        })
}

pub fn with_site(site: Site) -> impl Filter<Extract=(Site, ), Error=Infallible> + Clone {
    warp::any().map(move || site.clone())
}
