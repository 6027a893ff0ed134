//! Core data models for resiliency evaluation
//!
//! All types are read-only snapshots constructed per evaluation run;
//! nothing is cached or mutated across runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot of a Deployment's resiliency-relevant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentProfile {
    pub name: String,
    pub namespace: String,
    /// `None` when `spec.replicas` is unset on the live object.
    /// Zero is stored distinctly but classified the same as unknown.
    pub replicas: Option<i32>,
    /// The Deployment's own `spec.selector.matchLabels`
    pub selector_labels: BTreeMap<String, String>,
    /// Comma-joined `key=value` selector derived from `selector_labels`,
    /// keys in lexicographic order
    pub label_selector: String,
}

/// A HorizontalPodAutoscaler correlated to a Deployment
///
/// `present: false` is the canonical "no HPA found" sentinel, so absence
/// stays distinguishable from a zero-valued HPA.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoscalerProfile {
    pub name: String,
    pub namespace: String,
    pub min_replicas: i32,
    pub max_replicas: i32,
    pub present: bool,
}

impl AutoscalerProfile {
    /// The "no HPA found" sentinel
    pub fn absent() -> Self {
        Self {
            name: String::new(),
            namespace: String::new(),
            min_replicas: 0,
            max_replicas: 0,
            present: false,
        }
    }
}

/// A PodDisruptionBudget correlated to a Deployment
///
/// `availability` carries the integer `minAvailable` / `maxUnavailable`
/// values that are set on the budget. A present budget with neither field
/// set yields an empty map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisruptionBudgetProfile {
    pub name: String,
    pub namespace: String,
    pub availability: BTreeMap<String, i32>,
    pub present: bool,
}

impl DisruptionBudgetProfile {
    /// The "no PDB found" sentinel
    pub fn absent() -> Self {
        Self {
            name: String::new(),
            namespace: String::new(),
            availability: BTreeMap::new(),
            present: false,
        }
    }
}

/// Severity of an advisory finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Ok,
    Suggestion,
}

/// A single advisory emitted by the risk classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            message: message.into(),
        }
    }

    pub fn suggestion(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Suggestion,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }
}

/// Evaluation outcome for a single Deployment, handed to the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentReport {
    pub name: String,
    pub namespace: String,
    pub replicas: Option<i32>,
    pub label_selector: String,
    pub findings: Vec<Finding>,
}
