//! Namespace resolution
//!
//! Resolves the set of namespaces to evaluate: either a single explicitly
//! requested namespace, or all cluster namespaces minus a fixed exclusion
//! set of system namespaces.

/// Namespaces removed from "all namespaces" resolution by default
pub const SYSTEM_NAMESPACES: [&str; 3] = ["kube-system", "kube-node-lease", "kube-public"];

/// Filters the "all namespaces" resolution
///
/// The exclusion set is an explicit value on the filter rather than
/// process-wide state, so callers can widen or narrow it.
#[derive(Debug, Clone)]
pub struct NamespaceFilter {
    excluded: Vec<String>,
}

impl NamespaceFilter {
    /// Create a filter with a custom exclusion set
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve the namespaces to evaluate
    ///
    /// An explicitly requested namespace is returned as-is with no
    /// exclusion filtering, even if it names a system namespace.
    /// Otherwise `all` is returned minus the exclusion set, preserving
    /// the cluster-reported order.
    pub fn resolve(&self, requested: Option<&str>, all: Vec<String>) -> Vec<String> {
        match requested {
            Some(ns) if !ns.is_empty() => vec![ns.to_string()],
            _ => all
                .into_iter()
                .filter(|ns| !self.excluded.iter().any(|excluded| excluded == ns))
                .collect(),
        }
    }
}

impl Default for NamespaceFilter {
    fn default() -> Self {
        Self::new(SYSTEM_NAMESPACES)
    }
}
