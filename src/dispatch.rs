use crate::routing::RouteTable;
use actix_macros::ResponseErrorMessage;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use derive_more::{Display, Error};
use serde::Serialize;

#[derive(Clone, Debug, Display, Error, Serialize, ResponseErrorMessage)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[status_code = "INTERNAL_SERVER_ERROR"]
pub enum DispatchError {
    /// No mounted namespace has a route for the requested path.
    #[display("The requested resource was not found on this server.")]
    #[status_code = "NOT_FOUND"]
    NotFound,

    /// The route table was not registered as application data.
    #[display("Routing is not configured.")]
    NoRouteTable,
}

/// Default service of the application: resolves the path against the route
/// table and runs the matched handler.
pub async fn dispatch(req: HttpRequest) -> Result<HttpResponse, DispatchError> {
    let Some(table) = req.app_data::<web::Data<RouteTable>>() else {
        log::error!("Route table is missing from application data");
        return Err(DispatchError::NoRouteTable);
    };

    let Some(resolved) = table.resolve(req.path()) else {
        log::debug!("No route for {} {}", req.method(), req.path());
        return Err(DispatchError::NotFound);
    };

    log::debug!(
        "{} {} -> {}",
        req.method(),
        req.path(),
        resolved.view_name().as_deref().unwrap_or(&resolved.pattern)
    );

    let handler = resolved.handler.clone();
    req.extensions_mut().insert(resolved);

    Ok(handler.call(req).await)
}

/// Registers the dispatcher as the default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::to(dispatch));
}
