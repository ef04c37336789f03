use super::{Lookup, parse_flag, process_env};

#[derive(Clone, Debug)]
pub struct RoutingEnvData {
    /// Prefix at which the timetable namespace is mounted.
    pub timetable_mount: String,
    pub append_slash: bool,
}

impl RoutingEnvData {
    pub(crate) fn from_lookup(lookup: Lookup) -> Self {
        Self {
            timetable_mount: lookup("TIMETABLE_MOUNT")
                .unwrap_or_else(|| "timetable/".to_string()),
            append_slash: parse_flag(lookup("APPEND_SLASH").as_deref(), true),
        }
    }
}

impl Default for RoutingEnvData {
    fn default() -> Self {
        Self::from_lookup(&process_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let env = RoutingEnvData::from_lookup(&|_| None);

        assert_eq!(env.timetable_mount, "timetable/");
        assert!(env.append_slash);
    }

    #[test]
    fn explicit_values() {
        let env = RoutingEnvData::from_lookup(&|key| match key {
            "TIMETABLE_MOUNT" => Some("/api/timetable".to_string()),
            "APPEND_SLASH" => Some("0".to_string()),
            _ => None,
        });

        assert_eq!(env.timetable_mount, "/api/timetable");
        assert!(!env.append_slash);
    }
}
