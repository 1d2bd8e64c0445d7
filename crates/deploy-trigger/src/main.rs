//! Deployment-configuration stub.
//!
//! Logs the static descriptor of the production deployment and tells the
//! operator where to trigger it. Performs no network call: the actual
//! deploy happens from the hosting dashboard.

use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Where a deployment would go, and from which source.
#[derive(Debug, Serialize)]
struct DeploymentTarget {
    name: &'static str,
    git_source: GitSource,
    target: &'static str,
}

#[derive(Debug, Serialize)]
struct GitSource {
    #[serde(rename = "type")]
    kind: &'static str,
    repo: &'static str,
    #[serde(rename = "ref")]
    git_ref: &'static str,
}

fn deployment_target() -> DeploymentTarget {
    DeploymentTarget {
        name: "fctc-tool",
        git_source: GitSource {
            kind: "github",
            repo: "PranavYehale/FCTC-TOOL",
            git_ref: "master",
        },
        target: "production",
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let target = deployment_target();
    let descriptor =
        serde_json::to_string_pretty(&target).unwrap_or_else(|e| format!("<unserializable: {e}>"));

    tracing::info!("Deployment configuration ready for: {descriptor}");
    tracing::info!("Please deploy via the Vercel dashboard at: https://vercel.com/dashboard");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_shape() {
        let value = serde_json::to_value(deployment_target()).unwrap();
        assert_eq!(value["name"], "fctc-tool");
        assert_eq!(value["git_source"]["type"], "github");
        assert_eq!(value["git_source"]["repo"], "PranavYehale/FCTC-TOOL");
        assert_eq!(value["git_source"]["ref"], "master");
        assert_eq!(value["target"], "production");
    }
}
