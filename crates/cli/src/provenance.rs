use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub params: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params }
    }
}

/// Provenance block shared by sidecars and the `report` command.
pub fn document(params: Value, outputs: Vec<String>) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "brauer_version": brauer::VERSION,
        "params": params,
        "outputs": outputs
    })
}

/// Write `<artifact>.provenance.json` containing the git commit, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = document(
        payload.params,
        vec![artifact.to_string_lossy().into_owned()],
    );
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `runs/summary.json` -> `runs/summary.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Revision recorded in provenance blocks: `GIT_COMMIT` (build time, then
/// run time), else `git rev-parse HEAD`, else `"unknown"`.
fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .into_iter()
        .chain(std::env::var("GIT_COMMIT").ok())
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/sample.json");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/sample.provenance.json"));
        assert_eq!(
            provenance_path(Path::new("runs/summary")),
            Path::new("runs/summary.provenance.json")
        );
    }

    #[test]
    fn document_carries_a_revision() {
        let doc = document(json!({}), Vec::new());
        assert!(doc["code_rev"].as_str().is_some_and(|rev| !rev.is_empty()));
        assert_eq!(doc["outputs"], json!([]));
    }

    #[test]
    fn write_sidecar_records_params_and_version() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("summary.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(json!({"n": 5, "seed": 1}));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["n"], 5);
        assert_eq!(parsed["brauer_version"], brauer::VERSION);
        assert!(parsed["callsite"]["line"].is_u64());
    }
}
