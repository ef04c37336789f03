pub mod routing;
pub mod sentry;
pub mod server;

pub use self::routing::RoutingEnvData;
pub use self::sentry::SentryEnvData;
pub use self::server::ServerEnvData;

use std::fmt::Display;
use std::str::FromStr;

#[derive(Clone, Debug, Default)]
pub struct AppEnv {
    pub server: ServerEnvData,
    pub routing: RoutingEnvData,
    pub sentry: SentryEnvData,
}

/// Reads one variable. Sections take this as a parameter so tests can supply
/// values without touching the process environment.
pub(crate) type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub(crate) fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// `1`/`true` and `0`/`false`; anything else keeps the default.
pub(crate) fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(str::trim) {
        Some(v) if v.eq("1") || v.eq_ignore_ascii_case("true") => true,
        Some(v) if v.eq("0") || v.eq_ignore_ascii_case("false") => false,
        _ => default,
    }
}

/// Parses `value`, falling back to `default` with a warning when it is invalid.
pub(crate) fn parse_value<T: FromStr + Display>(key: &str, value: Option<&str>, default: T) -> T {
    let Some(value) = value else {
        return default;
    };

    value.trim().parse().unwrap_or_else(|_| {
        log::warn!("{} has invalid value '{}', using {}", key, value, default);
        default
    })
}
