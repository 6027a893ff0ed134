//! The eval command
//!
//! Wires the cluster connection into the evaluation engine and renders
//! the resulting reports. Exit status is unaffected by per-resource
//! query failures; those were already degraded and logged.

use anyhow::Result;
use drainsafe_lib::{Evaluator, KubeAccessor};
use tracing::info;

use crate::config::Connection;
use crate::output;

/// Run the resiliency evaluation and print the report
pub async fn run(connection: Connection, namespace: Option<&str>) -> Result<()> {
    match &connection.cluster {
        Some(cluster) => info!(cluster = %cluster, "checking cluster"),
        None => info!(source = %connection.source, "checking cluster"),
    }

    let evaluator = Evaluator::new(KubeAccessor::new(connection.client));
    let reports = evaluator.run(namespace).await;

    println!();
    for report in &reports {
        output::print_report(report);
    }

    Ok(())
}
