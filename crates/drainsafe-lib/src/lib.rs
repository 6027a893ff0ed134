//! Resiliency evaluation engine for Kubernetes workloads
//!
//! This crate provides the core functionality for:
//! - Namespace resolution with system-namespace exclusion
//! - Deployment discovery and profiling
//! - HPA/PDB correlation via label selectors
//! - Risk classification into ordered advisory findings
//!
//! The engine is read-only and degrades on query failures: a resource
//! listing that fails yields an empty result and the run continues.

pub mod classify;
pub mod cluster;
pub mod correlate;
pub mod evaluate;
pub mod models;
pub mod namespaces;

pub use classify::classify;
pub use cluster::{ClusterAccessor, KubeAccessor};
pub use correlate::{correlate, selector_string, CorrelatedResources};
pub use evaluate::Evaluator;
pub use models::*;
pub use namespaces::{NamespaceFilter, SYSTEM_NAMESPACES};
