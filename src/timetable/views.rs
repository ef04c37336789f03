use crate::routing::{ResolverMatch, RouteTable};
use crate::timetable::urls::APP_NAME;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use serde::Serialize;

#[derive(Serialize)]
struct IndexResponse {
    app_name: String,
    url_name: Option<String>,
    path: String,
    /// Reversed `timetable:index`, when the route table is available.
    root: Option<String>,
}

/// Root view of the timetable namespace.
pub async fn index(req: HttpRequest) -> HttpResponse {
    let root = req
        .app_data::<web::Data<RouteTable>>()
        .and_then(|table| table.reverse(&format!("{}:index", APP_NAME)).ok());

    let response = match req.extensions().get::<ResolverMatch>() {
        Some(resolved) => IndexResponse {
            app_name: resolved.app_name.clone(),
            url_name: resolved.url_name.clone(),
            path: resolved.path.clone(),
            root,
        },
        None => IndexResponse {
            app_name: APP_NAME.to_string(),
            url_name: None,
            path: req.path().to_string(),
            root,
        },
    };

    HttpResponse::Ok().json(response)
}
