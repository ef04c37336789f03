pub mod env;

pub use crate::state::env::AppEnv;
use crate::routing::{ConfigError, RouteTable};
use actix_web::web;

/// Builds the route table once, before any worker starts.
pub fn new_route_table(env: &AppEnv) -> Result<web::Data<RouteTable>, ConfigError> {
    let table = crate::urls::route_table(&env.routing)?;

    for mount in table.mounts() {
        log::info!(
            "Mounted namespace '{}' at {} ({} routes)",
            mount.namespace().app_name(),
            mount.prefix(),
            mount.namespace().routes().len()
        );
    }

    Ok(web::Data::new(table))
}
