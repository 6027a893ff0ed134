//! Resource correlation
//!
//! Correlates a Deployment with its governing HorizontalPodAutoscaler and
//! PodDisruptionBudget in the same namespace, matching on the Deployment's
//! own selector labels. First-match-wins is the adopted semantic, but the
//! full matched sets are kept so a caller can inspect ambiguity.

use std::collections::BTreeMap;

use tracing::debug;

use crate::cluster::ClusterAccessor;
use crate::models::{AutoscalerProfile, DeploymentProfile, DisruptionBudgetProfile};

/// Build a label-selector string from selector labels
///
/// Keys come out in lexicographic order, so the selector is stable across
/// runs.
pub fn selector_string(labels: &BTreeMap<String, String>) -> String {
    labels
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// The guardian resources matched to one Deployment
///
/// Multiple HPAs or PDBs can share a selector; the vectors hold every
/// match in the order the cluster returned them.
#[derive(Debug, Clone)]
pub struct CorrelatedResources {
    pub autoscalers: Vec<AutoscalerProfile>,
    pub budgets: Vec<DisruptionBudgetProfile>,
}

impl CorrelatedResources {
    /// The adopted HPA: first match, or the absent sentinel
    pub fn autoscaler(&self) -> AutoscalerProfile {
        self.autoscalers
            .first()
            .cloned()
            .unwrap_or_else(AutoscalerProfile::absent)
    }

    /// The adopted PDB: first match, or the absent sentinel
    pub fn budget(&self) -> DisruptionBudgetProfile {
        self.budgets
            .first()
            .cloned()
            .unwrap_or_else(DisruptionBudgetProfile::absent)
    }

    /// More than one HPA or PDB matched the selector
    pub fn is_ambiguous(&self) -> bool {
        self.autoscalers.len() > 1 || self.budgets.len() > 1
    }
}

/// Query the cluster for the HPAs and PDBs matching a Deployment's selector
pub async fn correlate<A>(accessor: &A, profile: &DeploymentProfile) -> CorrelatedResources
where
    A: ClusterAccessor + ?Sized,
{
    let autoscalers = accessor
        .list_autoscalers(&profile.namespace, &profile.label_selector)
        .await;
    let budgets = accessor
        .list_disruption_budgets(&profile.namespace, &profile.label_selector)
        .await;

    if autoscalers.len() > 1 {
        debug!(
            deployment = %profile.name,
            namespace = %profile.namespace,
            matches = autoscalers.len(),
            "multiple HorizontalPodAutoscalers matched; adopting the first"
        );
    }
    if budgets.len() > 1 {
        debug!(
            deployment = %profile.name,
            namespace = %profile.namespace,
            matches = budgets.len(),
            "multiple PodDisruptionBudgets matched; adopting the first"
        );
    }

    CorrelatedResources {
        autoscalers,
        budgets,
    }
}
