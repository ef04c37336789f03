use crate::routing::error::{ConfigError, ReverseError};
use crate::routing::handler::Handler;
use crate::routing::namespace::Namespace;
use percent_encoding::percent_decode_str;
use std::collections::HashSet;

/// Namespace attached to the URL space at a path prefix.
#[derive(Debug)]
pub struct Mount {
    prefix: String,
    namespace: Namespace,
}

impl Mount {
    /// Always starts and ends with `/`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }
}

/// Outcome of a successful resolution, attached to the request before the
/// handler runs.
#[derive(Clone, Debug)]
pub struct ResolverMatch {
    pub app_name: String,
    pub url_name: Option<String>,
    pub pattern: String,
    pub path: String,
    pub handler: Handler,
}

impl ResolverMatch {
    /// `app_name:url_name`, when the route is named.
    pub fn view_name(&self) -> Option<String> {
        self.url_name
            .as_ref()
            .map(|name| format!("{}:{}", self.app_name, name))
    }
}

/// Process-wide URL configuration. Built once and never mutated afterwards.
#[derive(Debug)]
pub struct RouteTable {
    mounts: Vec<Mount>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder { mounts: Vec::new() }
    }

    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    /// Tries mounts in registration order; the first one that resolves the
    /// remainder of the path wins. `path` may be percent-encoded.
    pub fn resolve(&self, path: &str) -> Option<ResolverMatch> {
        let path = percent_decode_str(path).decode_utf8_lossy();

        self.mounts.iter().find_map(|mount| {
            let relative = path.strip_prefix(mount.prefix.as_str())?;
            let route = mount.namespace.resolve(relative)?;

            Some(ResolverMatch {
                app_name: mount.namespace.app_name().to_string(),
                url_name: route.name().map(str::to_string),
                pattern: route.pattern().to_string(),
                path: path.to_string(),
                handler: route.handler().clone(),
            })
        })
    }

    /// Rebuilds the absolute path for a qualified name such as `timetable:index`.
    pub fn reverse(&self, view_name: &str) -> Result<String, ReverseError> {
        let Some((app_name, name)) = view_name.split_once(':') else {
            return Err(ReverseError::NotQualified {
                name: view_name.to_string(),
            });
        };

        let mount = self
            .mounts
            .iter()
            .find(|mount| mount.namespace.app_name() == app_name)
            .ok_or_else(|| ReverseError::UnknownNamespace {
                app_name: app_name.to_string(),
            })?;

        let pattern =
            mount
                .namespace
                .reverse(name)
                .ok_or_else(|| ReverseError::NoReverseMatch {
                    app_name: app_name.to_string(),
                    name: name.to_string(),
                })?;

        Ok(format!("{}{}", mount.prefix, pattern))
    }
}

pub struct RouteTableBuilder {
    mounts: Vec<(String, Namespace)>,
}

impl RouteTableBuilder {
    /// Attaches a namespace at `prefix`; `"timetable"`, `"/timetable"` and
    /// `"timetable/"` are all mounted at `/timetable/`.
    pub fn mount(mut self, prefix: &str, namespace: Namespace) -> Self {
        self.mounts.push((normalize_prefix(prefix), namespace));
        self
    }

    pub fn build(self) -> Result<RouteTable, ConfigError> {
        let mut app_names = HashSet::with_capacity(self.mounts.len());

        for (_, namespace) in &self.mounts {
            if !app_names.insert(namespace.app_name()) {
                return Err(ConfigError::DuplicateNamespace {
                    app_name: namespace.app_name().to_string(),
                });
            }
        }

        Ok(RouteTable {
            mounts: self
                .mounts
                .into_iter()
                .map(|(prefix, namespace)| Mount { prefix, namespace })
                .collect(),
        })
    }
}

pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
