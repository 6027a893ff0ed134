//! Risk classification
//!
//! A pure decision procedure mapping a Deployment's replica configuration
//! and its correlated HPA/PDB onto ordered advisory findings. Every
//! Deployment receives one HPA-axis outcome followed by one PDB-axis
//! outcome. The classifier returns data and never prints.

use crate::models::{AutoscalerProfile, DeploymentProfile, DisruptionBudgetProfile, Finding};

/// Classify a Deployment's risk posture under voluntary disruption
pub fn classify(
    profile: &DeploymentProfile,
    hpa: &AutoscalerProfile,
    pdb: &DisruptionBudgetProfile,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    // HPA axis. Presence supersedes static-replica analysis entirely.
    if hpa.present {
        findings.push(Finding::ok(format!(
            "this app has a HorizontalPodAutoscaler with {} min replicas and {} max replicas",
            hpa.min_replicas, hpa.max_replicas
        )));
    } else {
        findings.push(Finding::warning(format!(
            "could not find a HorizontalPodAutoscaler using labels {}; double check the labels - \
             the Deployment replica count is likely static \
             (https://kubernetes.io/docs/tasks/run-application/horizontal-pod-autoscale/)",
            profile.label_selector
        )));
        match profile.replicas {
            // Unset and zero both mean the count could not be determined;
            // terminal for this branch.
            None | Some(0) => {
                findings.push(Finding::warning("could not determine spec.replicas"));
            }
            Some(replicas) if replicas >= 2 => {
                findings.push(Finding::ok(
                    "current replica count is at least 2; this helps keep the application up \
                     during events like rollouts and upgrades",
                ));
            }
            Some(_) => {
                findings.push(Finding::suggestion(
                    "verify that the minimum replica count is not set for a single replica, \
                     enable a HorizontalPodAutoscaler, and set minReplicas to at least 2",
                ));
                findings.push(Finding::suggestion(
                    "add and enable a PodDisruptionBudget with at least a maxUnavailable less \
                     than the configured min replicas",
                ));
            }
        }
    }

    // PDB axis.
    if pdb.present {
        findings.push(Finding::ok(format!(
            "this app has a PodDisruptionBudget configured with: {}",
            format_availability(pdb)
        )));
    } else {
        findings.push(Finding::warning(
            "this app does not have a PodDisruptionBudget; it could experience interruptions \
             during rollouts, upgrades, and node drains \
             (https://kubernetes.io/docs/concepts/workloads/pods/disruptions/)",
        ));
        findings.push(Finding::suggestion("enable a PodDisruptionBudget"));
    }

    findings
}

/// Render a present budget's availability map for the ok finding
fn format_availability(pdb: &DisruptionBudgetProfile) -> String {
    if pdb.availability.is_empty() {
        return "no availability values set".to_string();
    }
    pdb.availability
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}
