use super::{Lookup, process_env};

#[derive(Clone, Debug)]
pub struct SentryEnvData {
    pub dsn: Option<String>,
}

impl SentryEnvData {
    pub(crate) fn from_lookup(lookup: Lookup) -> Self {
        Self {
            dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
        }
    }
}

impl Default for SentryEnvData {
    fn default() -> Self {
        Self::from_lookup(&process_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dsn_disables_reporting() {
        assert_eq!(SentryEnvData::from_lookup(&|_| Some(String::new())).dsn, None);
        assert_eq!(SentryEnvData::from_lookup(&|_| None).dsn, None);
    }
}
