//! Report rendering
//!
//! Line-oriented advisory output: one block per Deployment on stdout,
//! blocks separated by a blank line. This is presentation only; all
//! decisions were made by the classifier.

use colored::{ColoredString, Colorize};
use drainsafe_lib::{DeploymentReport, Severity};

const RULE_WIDTH: usize = 70;

/// Severity marker for a finding line
fn marker(severity: Severity) -> ColoredString {
    match severity {
        Severity::Ok => "✓".green().bold(),
        Severity::Warning => "⚠".yellow().bold(),
        Severity::Suggestion => "→".cyan().bold(),
        Severity::Info => "ℹ".blue().bold(),
    }
}

/// Print one Deployment's evaluation block
pub fn print_report(report: &DeploymentReport) {
    println!("{} {}", report.name.bold(), format!("({})", report.namespace).dimmed());
    println!("{}", "-".repeat(RULE_WIDTH));

    let replicas = report
        .replicas
        .map_or_else(|| "unknown".to_string(), |r| r.to_string());
    println!("{} Current replicas: {}", marker(Severity::Info), replicas);
    println!(
        "{} Matching resources using labels: {}",
        marker(Severity::Info),
        report.label_selector
    );

    for finding in &report.findings {
        println!("{} {}", marker(finding.severity), finding.message);
    }
    println!();
}
