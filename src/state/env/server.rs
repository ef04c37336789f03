use super::{Lookup, parse_value, process_env};

const DEFAULT_WORKERS: usize = 4;

#[derive(Clone, Debug)]
pub struct ServerEnvData {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerEnvData {
    pub(crate) fn from_lookup(lookup: Lookup) -> Self {
        let mut workers = parse_value(
            "HTTP_WORKERS",
            lookup("HTTP_WORKERS").as_deref(),
            DEFAULT_WORKERS,
        );

        if workers == 0 {
            log::warn!("HTTP_WORKERS must be positive, using {}", DEFAULT_WORKERS);
            workers = DEFAULT_WORKERS;
        }

        Self {
            host: lookup("BIND_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_value("BIND_PORT", lookup("BIND_PORT").as_deref(), 5050),
            workers,
        }
    }
}

impl Default for ServerEnvData {
    fn default() -> Self {
        Self::from_lookup(&process_env)
    }
}
