//! Cluster connection bootstrap
//!
//! Two connection strategies: a kubeconfig on the local machine (explicit
//! path, `KUBECONFIG`, or `~/.kube/config`), or in-cluster ServiceAccount
//! credentials when running inside a Pod. Everything here is fatal on
//! failure; once a client exists, all later query failures degrade.

use std::path::PathBuf;

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use thiserror::Error;
use tracing::info;

/// Fatal connection/bootstrap failures
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("could not determine home directory for kubeconfig lookup")]
    NoHomeDir,

    #[error("kubeconfig doesn't exist, we looked here: {0}")]
    KubeconfigMissing(PathBuf),

    #[error("failed to read kubeconfig at {path}")]
    KubeconfigUnreadable {
        path: PathBuf,
        #[source]
        source: kube::config::KubeconfigError,
    },

    #[error("invalid client configuration")]
    InvalidConfig(#[from] kube::config::KubeconfigError),

    #[error("in-cluster configuration unavailable")]
    InCluster(#[from] kube::config::InClusterError),

    #[error("failed to construct Kubernetes client")]
    Client(#[from] kube::Error),
}

/// An established connection to a cluster
pub struct Connection {
    pub client: Client,
    /// Cluster name from the current kubeconfig context, when known
    pub cluster: Option<String>,
    /// Where credentials came from: a kubeconfig path or "in-cluster"
    pub source: String,
}

/// Resolve the kubeconfig path: explicit override, then `KUBECONFIG`,
/// then `~/.kube/config`
pub fn kubeconfig_path(override_path: Option<&str>) -> Result<PathBuf, ConnectError> {
    if let Some(path) = override_path {
        return Ok(PathBuf::from(path));
    }

    if let Ok(path) = std::env::var("KUBECONFIG") {
        return Ok(PathBuf::from(path));
    }

    let home = dirs_next::home_dir().ok_or(ConnectError::NoHomeDir)?;
    Ok(home.join(".kube").join("config"))
}

/// Establish a client using either in-cluster credentials or a kubeconfig
pub async fn connect(
    in_cluster: bool,
    kubeconfig_override: Option<&str>,
) -> Result<Connection, ConnectError> {
    if in_cluster {
        let config = Config::incluster()?;
        let client = Client::try_from(config)?;
        return Ok(Connection {
            client,
            cluster: None,
            source: "in-cluster".to_string(),
        });
    }

    let path = kubeconfig_path(kubeconfig_override)?;
    if !path.exists() {
        return Err(ConnectError::KubeconfigMissing(path));
    }
    info!(path = %path.display(), "setting kubeconfig");

    let kubeconfig = Kubeconfig::read_from(&path).map_err(|source| {
        ConnectError::KubeconfigUnreadable {
            path: path.clone(),
            source,
        }
    })?;
    let cluster = current_cluster_name(&kubeconfig);

    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?;
    let client = Client::try_from(config)?;

    Ok(Connection {
        client,
        cluster,
        source: path.display().to_string(),
    })
}

/// Cluster name of the kubeconfig's current context
fn current_cluster_name(kubeconfig: &Kubeconfig) -> Option<String> {
    let current = kubeconfig.current_context.as_deref()?;
    kubeconfig
        .contexts
        .iter()
        .find(|named| named.name == current)
        .and_then(|named| named.context.as_ref())
        .map(|context| context.cluster.clone())
}
