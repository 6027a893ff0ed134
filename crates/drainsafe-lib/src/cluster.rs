//! Cluster access
//!
//! The engine consumes the cluster through the [`ClusterAccessor`] trait;
//! [`KubeAccessor`] implements it over an authenticated `kube::Client`.
//! Every query that fails at the transport level is logged and degrades to
//! an empty result, so evaluation proceeds with whatever data is left.

use std::collections::BTreeMap;

use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::autoscaling::v1::HorizontalPodAutoscaler;
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::api::policy::v1::PodDisruptionBudget;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::{Api, ListParams};
use kube::Client;
use tracing::warn;

use crate::correlate::selector_string;
use crate::models::{AutoscalerProfile, DeploymentProfile, DisruptionBudgetProfile};

/// Read operations the evaluation engine needs from a cluster
///
/// Implementations must be non-fatal: a failed query yields an empty
/// sequence, never an error.
#[async_trait]
pub trait ClusterAccessor {
    async fn list_namespaces(&self) -> Vec<String>;
    async fn list_deployments(&self, namespace: &str) -> Vec<DeploymentProfile>;
    async fn list_autoscalers(&self, namespace: &str, label_selector: &str)
        -> Vec<AutoscalerProfile>;
    async fn list_disruption_budgets(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> Vec<DisruptionBudgetProfile>;
}

/// [`ClusterAccessor`] backed by the Kubernetes API
pub struct KubeAccessor {
    client: Client,
}

impl KubeAccessor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterAccessor for KubeAccessor {
    async fn list_namespaces(&self) -> Vec<String> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        match api.list(&ListParams::default()).await {
            Ok(list) => list
                .items
                .into_iter()
                .filter_map(|ns| ns.metadata.name)
                .collect(),
            Err(err) => {
                warn!(error = %err, "failed to list namespaces");
                Vec::new()
            }
        }
    }

    async fn list_deployments(&self, namespace: &str) -> Vec<DeploymentProfile> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        match api.list(&ListParams::default()).await {
            Ok(list) => list.items.into_iter().filter_map(deployment_profile).collect(),
            Err(err) => {
                warn!(namespace, error = %err, "failed to list Deployments");
                Vec::new()
            }
        }
    }

    async fn list_autoscalers(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> Vec<AutoscalerProfile> {
        let api: Api<HorizontalPodAutoscaler> = Api::namespaced(self.client.clone(), namespace);
        let params = ListParams::default().labels(label_selector);
        match api.list(&params).await {
            Ok(list) => list.items.into_iter().filter_map(autoscaler_profile).collect(),
            Err(err) => {
                warn!(namespace, label_selector, error = %err, "failed to list HorizontalPodAutoscalers");
                Vec::new()
            }
        }
    }

    async fn list_disruption_budgets(
        &self,
        namespace: &str,
        label_selector: &str,
    ) -> Vec<DisruptionBudgetProfile> {
        let api: Api<PodDisruptionBudget> = Api::namespaced(self.client.clone(), namespace);
        let params = ListParams::default().labels(label_selector);
        match api.list(&params).await {
            Ok(list) => list.items.into_iter().filter_map(budget_profile).collect(),
            Err(err) => {
                warn!(namespace, label_selector, error = %err, "failed to list PodDisruptionBudgets");
                Vec::new()
            }
        }
    }
}

/// Build a profile from a live Deployment; objects without a name or spec
/// are skipped
fn deployment_profile(deployment: Deployment) -> Option<DeploymentProfile> {
    let name = deployment.metadata.name?;
    let namespace = deployment.metadata.namespace.unwrap_or_default();
    let spec = deployment.spec?;
    let selector_labels: BTreeMap<String, String> = spec.selector.match_labels.unwrap_or_default();
    let label_selector = selector_string(&selector_labels);
    Some(DeploymentProfile {
        name,
        namespace,
        replicas: spec.replicas,
        selector_labels,
        label_selector,
    })
}

fn autoscaler_profile(hpa: HorizontalPodAutoscaler) -> Option<AutoscalerProfile> {
    let name = hpa.metadata.name?;
    let namespace = hpa.metadata.namespace.unwrap_or_default();
    let spec = hpa.spec?;
    Some(AutoscalerProfile {
        name,
        namespace,
        // minReplicas defaults to 1 when unset upstream
        min_replicas: spec.min_replicas.unwrap_or(1),
        max_replicas: spec.max_replicas,
        present: true,
    })
}

/// Build a profile from a live PodDisruptionBudget
///
/// Only integer-valued availability fields are recorded; percentage values
/// and a budget with neither field set both leave the map (partially)
/// empty rather than faulting.
fn budget_profile(pdb: PodDisruptionBudget) -> Option<DisruptionBudgetProfile> {
    let name = pdb.metadata.name?;
    let namespace = pdb.metadata.namespace.unwrap_or_default();
    let mut availability = BTreeMap::new();
    if let Some(spec) = pdb.spec {
        if let Some(IntOrString::Int(value)) = spec.max_unavailable {
            availability.insert("maxUnavailable".to_string(), value);
        }
        if let Some(IntOrString::Int(value)) = spec.min_available {
            availability.insert("minAvailable".to_string(), value);
        }
    }
    Some(DisruptionBudgetProfile {
        name,
        namespace,
        availability,
        present: true,
    })
}

#[cfg(test)]
mod tests {
    use k8s_openapi::api::apps::v1::DeploymentSpec;
    use k8s_openapi::api::autoscaling::v1::HorizontalPodAutoscalerSpec;
    use k8s_openapi::api::policy::v1::PodDisruptionBudgetSpec;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};

    use super::*;

    fn metadata(name: &str) -> ObjectMeta {
        ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("default".to_string()),
            ..Default::default()
        }
    }

    fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_deployment_profile_fields() {
        let deployment = Deployment {
            metadata: metadata("web"),
            spec: Some(DeploymentSpec {
                replicas: Some(3),
                selector: LabelSelector {
                    match_labels: Some(labels(&[("app", "web"), ("tier", "frontend")])),
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..Default::default()
        };

        let profile = deployment_profile(deployment).unwrap();
        assert_eq!(profile.name, "web");
        assert_eq!(profile.namespace, "default");
        assert_eq!(profile.replicas, Some(3));
        assert_eq!(profile.label_selector, "app=web,tier=frontend");
    }

    #[test]
    fn test_deployment_profile_nil_replicas_stays_unknown() {
        let deployment = Deployment {
            metadata: metadata("web"),
            spec: Some(DeploymentSpec {
                replicas: None,
                selector: LabelSelector {
                    match_labels: Some(labels(&[("app", "web")])),
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..Default::default()
        };

        let profile = deployment_profile(deployment).unwrap();
        assert_eq!(profile.replicas, None);
    }

    #[test]
    fn test_deployment_without_name_is_skipped() {
        let deployment = Deployment {
            spec: Some(DeploymentSpec::default()),
            ..Default::default()
        };
        assert!(deployment_profile(deployment).is_none());
    }

    #[test]
    fn test_autoscaler_min_replicas_defaults_to_one() {
        let hpa = HorizontalPodAutoscaler {
            metadata: metadata("web-hpa"),
            spec: Some(HorizontalPodAutoscalerSpec {
                min_replicas: None,
                max_replicas: 5,
                ..Default::default()
            }),
            ..Default::default()
        };

        let profile = autoscaler_profile(hpa).unwrap();
        assert!(profile.present);
        assert_eq!(profile.min_replicas, 1);
        assert_eq!(profile.max_replicas, 5);
    }

    #[test]
    fn test_budget_max_unavailable_only() {
        let pdb = PodDisruptionBudget {
            metadata: metadata("web-pdb"),
            spec: Some(PodDisruptionBudgetSpec {
                max_unavailable: Some(IntOrString::Int(1)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let profile = budget_profile(pdb).unwrap();
        assert_eq!(profile.availability.get("maxUnavailable"), Some(&1));
        assert!(!profile.availability.contains_key("minAvailable"));
    }

    #[test]
    fn test_budget_min_available_only() {
        let pdb = PodDisruptionBudget {
            metadata: metadata("web-pdb"),
            spec: Some(PodDisruptionBudgetSpec {
                min_available: Some(IntOrString::Int(1)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let profile = budget_profile(pdb).unwrap();
        assert_eq!(profile.availability.get("minAvailable"), Some(&1));
        assert!(!profile.availability.contains_key("maxUnavailable"));
    }

    #[test]
    fn test_budget_both_fields() {
        let pdb = PodDisruptionBudget {
            metadata: metadata("web-pdb"),
            spec: Some(PodDisruptionBudgetSpec {
                max_unavailable: Some(IntOrString::Int(1)),
                min_available: Some(IntOrString::Int(1)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let profile = budget_profile(pdb).unwrap();
        assert_eq!(profile.availability.get("maxUnavailable"), Some(&1));
        assert_eq!(profile.availability.get("minAvailable"), Some(&1));
    }

    #[test]
    fn test_budget_with_no_fields_is_present_and_empty() {
        let pdb = PodDisruptionBudget {
            metadata: metadata("web-pdb"),
            spec: Some(PodDisruptionBudgetSpec::default()),
            ..Default::default()
        };

        let profile = budget_profile(pdb).unwrap();
        assert!(profile.present);
        assert!(profile.availability.is_empty());
    }

    #[test]
    fn test_budget_percentage_value_left_out() {
        let pdb = PodDisruptionBudget {
            metadata: metadata("web-pdb"),
            spec: Some(PodDisruptionBudgetSpec {
                min_available: Some(IntOrString::String("50%".to_string())),
                ..Default::default()
            }),
            ..Default::default()
        };

        let profile = budget_profile(pdb).unwrap();
        assert!(profile.present);
        assert!(profile.availability.is_empty());
    }
}
