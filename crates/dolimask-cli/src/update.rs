//! Best-effort check for a newer published release.

use std::time::Duration;

use semver::Version;
use serde::Deserialize;
use tracing::debug;

const CRATE_NAME: &str = "dolimask";
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct CratesIoResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    #[serde(default)]
    max_stable_version: Option<String>,
    max_version: String,
}

/// Latest published version when it is newer than `current`. Network or
/// parse failures never block the run; they are logged and swallowed.
pub async fn newer_release(current: &str) -> Option<String> {
    match fetch_latest().await {
        Ok(latest) => newer_than(current, &latest).then_some(latest),
        Err(err) => {
            debug!(error = %err, "release check failed");
            None
        }
    }
}

async fn fetch_latest() -> Result<String, String> {
    let client = reqwest::Client::builder()
        .timeout(CHECK_TIMEOUT)
        .user_agent(concat!("dolimask/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|err| err.to_string())?;
    let response = client
        .get(format!("https://crates.io/api/v1/crates/{CRATE_NAME}"))
        .send()
        .await
        .map_err(|err| err.to_string())?
        .error_for_status()
        .map_err(|err| err.to_string())?;
    let body: CratesIoResponse = response.json().await.map_err(|err| err.to_string())?;
    Ok(body
        .krate
        .max_stable_version
        .unwrap_or(body.krate.max_version))
}

fn newer_than(current: &str, latest: &str) -> bool {
    match (Version::parse(current), Version::parse(latest)) {
        (Ok(current), Ok(latest)) => latest > current,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_semantic_versions() {
        assert!(newer_than("0.1.0", "0.2.0"));
        assert!(newer_than("0.1.0", "1.0.0"));
        assert!(!newer_than("1.2.3", "1.2.3"));
        assert!(!newer_than("1.2.3", "1.0.0"));
    }

    #[test]
    fn unparsable_versions_never_report_newer() {
        assert!(!newer_than("not-a-version", "1.0.0"));
        assert!(!newer_than("1.0.0", "latest"));
    }

    #[test]
    fn reads_the_crates_io_payload() {
        let raw = r#"{"crate": {"max_stable_version": "0.3.1", "max_version": "0.4.0-beta.1"}}"#;
        let body: CratesIoResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.krate.max_stable_version.as_deref(), Some("0.3.1"));
    }

    #[test]
    fn falls_back_to_max_version_without_a_stable_one() {
        let raw = r#"{"crate": {"max_version": "0.2.0"}}"#;
        let body: CratesIoResponse = serde_json::from_str(raw).unwrap();
        assert!(body.krate.max_stable_version.is_none());
        assert_eq!(body.krate.max_version, "0.2.0");
    }
}
