use crate::constants::{PATH_APP, PATH_DELETE, PATH_NOT_FOUND, PATH_REPORT, PATH_SAFE_RETRIEVAL, QUERY_APP_NAME, ROOT_PATH};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    AppDetails,
    SafeRetrieval,
    SafeRetrievalApp,
    NotFound,
}

impl Route {
    pub fn from_path(pathname: &str) -> Self {
        let segments = pathname.split('/').filter(|s| !s.is_empty()).collect::<Vec<_>>();
        match segments.as_slice() {
            [root] if *root == ROOT_PATH => Route::Dashboard,
            [root, app] if *root == ROOT_PATH && *app == PATH_APP => Route::AppDetails,
            [root, sr] if *root == ROOT_PATH && *sr == PATH_SAFE_RETRIEVAL => Route::SafeRetrieval,
            [root, sr, app] if *root == ROOT_PATH && *sr == PATH_SAFE_RETRIEVAL && *app == PATH_APP => {
                Route::SafeRetrievalApp
            }
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => format!("/{ROOT_PATH}/"),
            Route::AppDetails => format!("/{ROOT_PATH}/{PATH_APP}/"),
            Route::SafeRetrieval => format!("/{ROOT_PATH}/{PATH_SAFE_RETRIEVAL}/"),
            Route::SafeRetrievalApp => format!("/{ROOT_PATH}/{PATH_SAFE_RETRIEVAL}/{PATH_APP}/"),
            Route::NotFound => format!("/{ROOT_PATH}/{PATH_NOT_FOUND}/"),
        }
    }

    /// Link to a single app page, `app_name` percent-encoded.
    pub fn app_link(&self, app_name: &str) -> String {
        format!("{}?{QUERY_APP_NAME}={}", self.path(), urlencoding::encode(app_name))
    }

    /// Where the "Back" button leads, if the page has one.
    pub fn back(&self) -> Option<Route> {
        match self {
            Route::AppDetails => Some(Route::Dashboard),
            Route::SafeRetrievalApp => Some(Route::SafeRetrieval),
            _ => None,
        }
    }

    /// Detail page reached from a row of this route's tables.
    pub fn detail(&self) -> Option<Route> {
        match self {
            Route::Dashboard => Some(Route::AppDetails),
            Route::SafeRetrieval => Some(Route::SafeRetrievalApp),
            _ => None,
        }
    }
}

pub fn report_url(proxy: &str, app_name: &str) -> String {
    format!("{proxy}/{ROOT_PATH}/{PATH_REPORT}/?{QUERY_APP_NAME}={}", urlencoding::encode(app_name))
}

pub fn delete_app_url(app_name: &str) -> String {
    format!("/{ROOT_PATH}/{PATH_APP}/{PATH_DELETE}/?{QUERY_APP_NAME}={}", urlencoding::encode(app_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_paths() {
        assert_eq!(Route::from_path("/pebblo/"), Route::Dashboard);
        assert_eq!(Route::from_path("/pebblo"), Route::Dashboard);
        assert_eq!(Route::from_path("/pebblo/app/"), Route::AppDetails);
        assert_eq!(Route::from_path("/pebblo/safe_retrieval/"), Route::SafeRetrieval);
        assert_eq!(Route::from_path("/pebblo/safe_retrieval/app"), Route::SafeRetrievalApp);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/"), Route::NotFound);
        assert_eq!(Route::from_path("/pebblo/not-found/"), Route::NotFound);
        assert_eq!(Route::from_path("/pebblo/app/extra/"), Route::NotFound);
        assert_eq!(Route::from_path("/other/app/"), Route::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in [Route::Dashboard, Route::AppDetails, Route::SafeRetrieval, Route::SafeRetrievalApp] {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn back_and_detail_links() {
        assert_eq!(Route::AppDetails.back(), Some(Route::Dashboard));
        assert_eq!(Route::SafeRetrievalApp.back(), Some(Route::SafeRetrieval));
        assert_eq!(Route::Dashboard.back(), None);
        assert_eq!(Route::SafeRetrieval.detail(), Some(Route::SafeRetrievalApp));
        assert_eq!(Route::AppDetails.app_link("my app"), "/pebblo/app/?app_name=my%20app");
    }

    #[test]
    fn api_urls() {
        assert_eq!(report_url("", "acme"), "/pebblo/report/?app_name=acme");
        assert_eq!(report_url("http://proxy", "a/b"), "http://proxy/pebblo/report/?app_name=a%2Fb");
        assert_eq!(delete_app_url("acme"), "/pebblo/app/delete/?app_name=acme");
        assert_eq!(delete_app_url("rag_v1.2~x"), "/pebblo/app/delete/?app_name=rag_v1.2~x");
        assert_eq!(Route::SafeRetrievalApp.app_link("a&b=é"), "/pebblo/safe_retrieval/app/?app_name=a%26b%3D%C3%A9");
    }
}
