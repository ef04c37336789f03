use crate::routing::error::ConfigError;
use crate::routing::route::Route;
use std::collections::HashMap;

/// Named, ordered group of routes. Names are unique inside one namespace.
#[derive(Debug)]
pub struct Namespace {
    app_name: String,
    routes: Vec<Route>,
    names: HashMap<String, usize>,
}

impl Namespace {
    pub fn new(app_name: impl Into<String>, routes: Vec<Route>) -> Result<Self, ConfigError> {
        let app_name = app_name.into();

        if app_name.is_empty() {
            return Err(ConfigError::EmptyAppName);
        }

        let mut names = HashMap::with_capacity(routes.len());

        for (index, route) in routes.iter().enumerate() {
            if route.pattern().starts_with('/') {
                return Err(ConfigError::LeadingSlash {
                    app_name,
                    pattern: route.pattern().to_string(),
                });
            }

            if let Some(name) = route.name()
                && names.insert(name.to_string(), index).is_some()
            {
                return Err(ConfigError::DuplicateName {
                    app_name,
                    name: name.to_string(),
                });
            }
        }

        Ok(Self {
            app_name,
            routes,
            names,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// First route, in declaration order, whose pattern matches the path.
    pub fn resolve(&self, relative_path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(relative_path))
    }

    /// Relative path of the route with the given name.
    pub fn reverse(&self, name: &str) -> Option<&str> {
        self.names
            .get(name)
            .map(|&index| self.routes[index].pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::handler::Handler;
    use crate::routing::route::path;
    use actix_web::{HttpRequest, HttpResponse};

    async fn view(_: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let error = Namespace::new(
            "timetable",
            vec![path("", view, "index"), path("other/", view, "index")],
        )
        .unwrap_err();

        assert_eq!(
            error,
            ConfigError::DuplicateName {
                app_name: "timetable".to_string(),
                name: "index".to_string(),
            }
        );
    }

    #[test]
    fn unnamed_routes_do_not_collide() {
        let namespace = Namespace::new(
            "timetable",
            vec![
                Route::new("a/", Handler::new(view), None),
                Route::new("b/", Handler::new(view), None),
            ],
        )
        .unwrap();

        assert_eq!(namespace.routes().len(), 2);
        assert!(namespace.reverse("a/").is_none());
    }

    #[test]
    fn leading_slash_is_rejected() {
        let error = Namespace::new("timetable", vec![path("/week/", view, "week")]).unwrap_err();

        assert!(matches!(error, ConfigError::LeadingSlash { .. }));
    }

    #[test]
    fn empty_app_name_is_rejected() {
        let error = Namespace::new("", vec![path("", view, "index")]).unwrap_err();

        assert_eq!(error, ConfigError::EmptyAppName);
    }

    #[test]
    fn first_declared_route_wins() {
        let first = path("", view, "first");
        let handler = first.handler().clone();
        let namespace = Namespace::new("timetable", vec![first, path("", view, "second")]).unwrap();

        let route = namespace.resolve("").unwrap();

        assert!(route.handler().same_as(&handler));
        assert_eq!(route.name(), Some("first"));
        assert_eq!(namespace.reverse("second"), Some(""));
    }
}
