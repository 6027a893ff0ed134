//! Evaluation orchestration
//!
//! Resolves the target namespaces, walks every Deployment in them
//! sequentially, correlates guardian resources, and classifies each one
//! into a report. Query failures have already been degraded to empty
//! results at the accessor boundary, so the loop never aborts mid-run.

use tracing::{debug, info};

use crate::classify::classify;
use crate::cluster::ClusterAccessor;
use crate::correlate::correlate;
use crate::models::DeploymentReport;
use crate::namespaces::NamespaceFilter;

/// Runs the resiliency evaluation against a cluster accessor
pub struct Evaluator<A> {
    accessor: A,
    filter: NamespaceFilter,
}

impl<A: ClusterAccessor> Evaluator<A> {
    /// Create an evaluator with the default system-namespace exclusions
    pub fn new(accessor: A) -> Self {
        Self {
            accessor,
            filter: NamespaceFilter::default(),
        }
    }

    /// Use a custom namespace filter
    pub fn with_filter(mut self, filter: NamespaceFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Evaluate every Deployment in the resolved namespaces
    ///
    /// With an explicit namespace the all-namespace listing is skipped
    /// entirely; otherwise every non-excluded namespace is walked in the
    /// order the cluster reported it.
    pub async fn run(&self, requested_namespace: Option<&str>) -> Vec<DeploymentReport> {
        let explicit = requested_namespace.is_some_and(|ns| !ns.is_empty());
        let all = if explicit {
            Vec::new()
        } else {
            self.accessor.list_namespaces().await
        };
        let namespaces = self.filter.resolve(requested_namespace, all);

        let mut profiles = Vec::new();
        for namespace in &namespaces {
            profiles.extend(self.accessor.list_deployments(namespace).await);
        }
        if profiles.is_empty() {
            info!(?namespaces, "did not find any Deployments in these namespaces");
        }

        let mut reports = Vec::with_capacity(profiles.len());
        for profile in profiles {
            debug!(deployment = %profile.name, namespace = %profile.namespace, "evaluating");
            let correlated = correlate(&self.accessor, &profile).await;
            let findings = classify(&profile, &correlated.autoscaler(), &correlated.budget());
            reports.push(DeploymentReport {
                name: profile.name,
                namespace: profile.namespace,
                replicas: profile.replicas,
                label_selector: profile.label_selector,
                findings,
            });
        }
        reports
    }
}
