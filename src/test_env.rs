#[cfg(test)]
pub(crate) mod tests {
    use crate::routing::RouteTable;
    use crate::state::env::RoutingEnvData;
    use crate::urls::route_table;
    use actix_web::web;
    use std::sync::LazyLock;

    pub fn test_route_table() -> web::Data<RouteTable> {
        let env = RoutingEnvData {
            timetable_mount: "timetable/".to_string(),
            append_slash: true,
        };

        web::Data::new(route_table(&env).expect("Test route table must be valid"))
    }

    pub fn static_route_table() -> web::Data<RouteTable> {
        static TABLE: LazyLock<web::Data<RouteTable>> = LazyLock::new(test_route_table);

        TABLE.clone()
    }
}
