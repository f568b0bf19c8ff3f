//! Full-page navigation between the login page and the dashboard.
//!
//! Both transitions reload the document rather than going through the in-app
//! router, so every page arrives with fresh state.

use crate::services::config::RouteConfig;
use crate::services::errors::{UiError, UiResult};
use crate::utils::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    Dashboard,
}

impl Destination {
    pub fn path<'a>(&self, routes: &'a RouteConfig) -> &'a str {
        match self {
            Destination::Login => &routes.login_path,
            Destination::Dashboard => &routes.dashboard_path,
        }
    }
}

pub fn redirect(destination: Destination, routes: &RouteConfig) -> UiResult<()> {
    let target = destination.path(routes);
    dom::window()?
        .location()
        .set_href(target)
        .map_err(|e| UiError::navigation(target, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_paths() {
        let routes = RouteConfig::default();
        assert_eq!(Destination::Login.path(&routes), "/");
        assert_eq!(Destination::Dashboard.path(&routes), "/dashboard");
    }

    #[test]
    fn test_destination_paths_follow_config() {
        let routes = RouteConfig {
            login_path: "/index.html".to_string(),
            dashboard_path: "/dashboard.html".to_string(),
        };
        assert_eq!(Destination::Login.path(&routes), "/index.html");
        assert_eq!(Destination::Dashboard.path(&routes), "/dashboard.html");
    }
}
