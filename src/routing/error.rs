use derive_more::{Display, Error};

/// Route table misconfiguration. Detected while the table is built at start-up.
#[derive(Clone, Debug, Display, Error, PartialEq)]
pub enum ConfigError {
    /// Two routes of one namespace share a name.
    #[display("Route name '{name}' is declared more than once in namespace '{app_name}'.")]
    DuplicateName { app_name: String, name: String },

    /// Two mounted namespaces share an app name.
    #[display("Namespace '{app_name}' is mounted more than once.")]
    DuplicateNamespace { app_name: String },

    /// The mount prefix already ends with a slash, so patterns must not start with one.
    #[display("Pattern '{pattern}' in namespace '{app_name}' must not start with '/'.")]
    LeadingSlash { app_name: String, pattern: String },

    #[display("Namespace app name must not be empty.")]
    EmptyAppName,
}

/// Failure to turn a qualified route name back into a path.
#[derive(Clone, Debug, Display, Error, PartialEq)]
pub enum ReverseError {
    #[display("'{name}' is not qualified with a namespace.")]
    NotQualified { name: String },

    #[display("'{app_name}' is not a registered namespace.")]
    UnknownNamespace { app_name: String },

    #[display("Reverse for '{name}' not found in namespace '{app_name}'.")]
    NoReverseMatch { app_name: String, name: String },
}
