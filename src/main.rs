use crate::middlewares::append_slash::AppendSlash;
use crate::state::{AppEnv, new_route_table};
use actix_web::middleware::Condition;
use actix_web::{App, HttpServer};
use dotenvy::dotenv;
use std::process::ExitCode;

mod dispatch;
mod middlewares;
mod routing;
mod state;
mod timetable;
mod urls;

mod utility;

mod test_env;

fn init_sentry(env: &AppEnv) -> Option<sentry::ClientInitGuard> {
    let dsn = env.sentry.dsn.as_deref()?;

    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[actix_web::main]
async fn main() -> ExitCode {
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let env = AppEnv::default();
    let _sentry = init_sentry(&env);

    let route_table = match new_route_table(&env) {
        Ok(table) => table,
        Err(error) => {
            log::error!("Invalid route configuration: {}", error);
            sentry::capture_error(&error);
            return ExitCode::FAILURE;
        }
    };

    let append_slash = env.routing.append_slash;
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(append_slash, AppendSlash))
            .wrap(sentry_actix::Sentry::new())
            .app_data(route_table.clone())
            .configure(dispatch::configure)
    })
    .workers(env.server.workers);

    let server = match server.bind((env.server.host.as_str(), env.server.port)) {
        Ok(server) => server,
        Err(error) => {
            log::error!(
                "Failed to bind {}:{}: {}",
                env.server.host,
                env.server.port,
                error
            );
            return ExitCode::FAILURE;
        }
    };

    log::info!("Listening on {}:{}", env.server.host, env.server.port);

    match server.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("Server stopped with an error: {}", error);
            ExitCode::FAILURE
        }
    }
}
