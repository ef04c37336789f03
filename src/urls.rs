use crate::routing::{ConfigError, RouteTable};
use crate::state::env::RoutingEnvData;
use crate::timetable;

/// Root URL configuration.
pub fn route_table(env: &RoutingEnvData) -> Result<RouteTable, ConfigError> {
    RouteTable::builder()
        .mount(&env.timetable_mount, timetable::urls::urlpatterns()?)
        .build()
}
