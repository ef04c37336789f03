use crate::routing::handler::Handler;
use actix_web::{HttpRequest, HttpResponse};
use std::future::Future;

/// A single `pattern -> handler` association inside a namespace.
#[derive(Clone, Debug)]
pub struct Route {
    pattern: String,
    handler: Handler,
    name: Option<String>,
}

impl Route {
    pub fn new(pattern: impl Into<String>, handler: Handler, name: Option<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handler,
            name,
        }
    }

    /// Path relative to the namespace mount point. `""` is the mount point itself.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Patterns hold no converters, so a route matches exactly its own path.
    pub fn matches(&self, relative_path: &str) -> bool {
        self.pattern == relative_path
    }
}

/// Declares a named route.
pub fn path<F, Fut>(pattern: &str, view: F, name: &str) -> Route
where
    F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HttpResponse> + 'static,
{
    Route::new(pattern, Handler::new(view), Some(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn view(_: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[test]
    fn empty_pattern_matches_only_root() {
        let route = path("", view, "index");

        assert!(route.matches(""));
        assert!(!route.matches("foo"));
        assert!(!route.matches("/"));
        assert_eq!(route.name(), Some("index"));
    }

    #[test]
    fn literal_pattern_is_exact() {
        let route = Route::new("week/", Handler::new(view), None);

        assert!(route.matches("week/"));
        assert!(!route.matches("week"));
        assert!(!route.matches("week/1/"));
        assert_eq!(route.name(), None);
    }
}
