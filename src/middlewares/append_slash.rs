use crate::routing::RouteTable;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header;
use actix_web::{Error, HttpResponse, web};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};

/// Middleware that redirects `/path` to `/path/` when only the latter resolves.
pub struct AppendSlash;

impl<S, B> Transform<S, ServiceRequest> for AppendSlash
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = Error;
    type Transform = AppendSlashMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AppendSlashMiddleware { service }))
    }
}

pub struct AppendSlashMiddleware<S> {
    service: S,
}

impl<S> AppendSlashMiddleware<S> {
    fn redirect_target(req: &ServiceRequest) -> Option<String> {
        let path = req.path();

        if path.ends_with('/') {
            return None;
        }

        let table = req.app_data::<web::Data<RouteTable>>()?;

        if table.resolve(path).is_some() {
            return None;
        }

        let with_slash = format!("{}/", path);
        table.resolve(&with_slash)?;

        Some(match req.query_string() {
            "" => with_slash,
            query => format!("{}?{}", with_slash, query),
        })
    }
}

impl<S, B> Service<ServiceRequest> for AppendSlashMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(location) = Self::redirect_target(&req) {
            log::debug!("Appending slash: {} -> {}", req.path(), location);

            let response = HttpResponse::MovedPermanently()
                .insert_header((header::LOCATION, location))
                .finish();

            return Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) });
        }

        let fut = self.service.call(req);

        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::configure;
    use crate::test_env::tests::static_route_table;
    use actix_web::http::StatusCode;
    use actix_web::middleware::Condition;
    use actix_web::{App, test};

    async fn call(enabled: bool, uri: &str) -> ServiceResponse<impl actix_web::body::MessageBody> {
        let app = test::init_service(
            App::new()
                .wrap(Condition::new(enabled, AppendSlash))
                .app_data(static_route_table())
                .configure(configure),
        )
        .await;

        test::call_service(&app, test::TestRequest::with_uri(uri).to_request()).await
    }

    fn location<B>(resp: &ServiceResponse<B>) -> Option<&str> {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    #[actix_web::test]
    async fn missing_slash_redirects() {
        let resp = call(true, "/timetable").await;

        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(location(&resp), Some("/timetable/"));
    }

    #[actix_web::test]
    async fn encoded_path_redirects() {
        let resp = call(true, "/%74imetable").await;

        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(location(&resp), Some("/%74imetable/"));
    }

    #[actix_web::test]
    async fn query_string_is_kept() {
        let resp = call(true, "/timetable?group=1").await;

        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(location(&resp), Some("/timetable/?group=1"));
    }

    #[actix_web::test]
    async fn matching_path_passes_through() {
        let resp = call(true, "/timetable/").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(location(&resp), None);
    }

    #[actix_web::test]
    async fn unresolvable_path_is_not_redirected() {
        let resp = call(true, "/timetable/foo").await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(location(&resp), None);
    }

    #[actix_web::test]
    async fn disabled_middleware_returns_not_found() {
        let resp = call(false, "/timetable").await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
