use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};

/// Builds a test service with the given shared data and route configuration.
pub async fn test_app<F, A: 'static>(
    app_data: web::Data<A>,
    configure: F,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
where
    F: FnOnce(&mut web::ServiceConfig),
{
    test::init_service(App::new().app_data(app_data).configure(configure)).await
}
