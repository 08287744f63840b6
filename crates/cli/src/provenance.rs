use anyhow::{Context, Result};
use geohull::sample::ReplayToken;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an output file, recorded in its `.provenance.json` sidecar.
#[derive(Clone, Debug, PartialEq)]
pub enum Run {
    Hull {
        input: String,
        keep_collinear: bool,
        /// Coordinate tuples read from the input.
        points: usize,
        /// Distinct hull vertices; `None` when the input was degenerate.
        vertices: Option<usize>,
        area: Option<f64>,
    },
    Sample {
        tok: ReplayToken,
        vertices: usize,
        interior: usize,
    },
}

impl Run {
    fn params(&self) -> Value {
        match self {
            Run::Hull {
                input,
                keep_collinear,
                points,
                vertices,
                area,
            } => json!({
                "cmd": "hull",
                "input": input,
                "keep_collinear": keep_collinear,
                "points": points,
                "vertices": vertices,
                "area": area,
            }),
            Run::Sample {
                tok,
                vertices,
                interior,
            } => json!({
                "cmd": "sample",
                "seed": tok.seed,
                "index": tok.index,
                "vertices": vertices,
                "interior": interior,
            }),
        }
    }

    /// Write the sidecar for `out` and return its path.
    pub fn record(&self, out: &Path) -> Result<PathBuf> {
        let path = sidecar_path(out);
        let doc = json!({
            "code_rev": code_rev(),
            "version": geohull::VERSION,
            "params": self.params(),
            "outputs": [out.to_string_lossy()],
        });
        std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "provenance");
        Ok(path)
    }
}

/// `dir/hull.geojson` -> `dir/hull.provenance.json`.
fn sidecar_path(out: &Path) -> PathBuf {
    out.with_extension("provenance.json")
}

/// Commit of the running build: `GIT_COMMIT` if set, else `git rev-parse`, else "unknown".
pub fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .or_else(|| option_env!("GIT_COMMIT").map(str::to_owned))
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_owned())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_output() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/hull.geojson")),
            Path::new("/tmp/output/hull.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("pts")),
            Path::new("pts.provenance.json")
        );
    }

    #[test]
    fn hull_run_records_counts() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("hull.geojson");
        std::fs::write(&out, "null").unwrap();
        let run = Run::Hull {
            input: "in.geojson".into(),
            keep_collinear: false,
            points: 6,
            vertices: Some(5),
            area: Some(2.5),
        };
        let path = run.record(&out).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], out.to_string_lossy().as_ref());
        assert_eq!(parsed["version"], geohull::VERSION);
        assert_eq!(parsed["params"]["cmd"], "hull");
        assert_eq!(parsed["params"]["points"], 6);
        assert_eq!(parsed["params"]["vertices"], 5);
        assert_eq!(parsed["params"]["area"], 2.5);
    }

    #[test]
    fn degenerate_hull_records_null_vertices() {
        let run = Run::Hull {
            input: "-".into(),
            keep_collinear: true,
            points: 2,
            vertices: None,
            area: None,
        };
        let params = run.params();
        assert!(params["vertices"].is_null());
        assert!(params["area"].is_null());
        assert_eq!(params["keep_collinear"], true);
    }

    #[test]
    fn sample_run_records_token() {
        let run = Run::Sample {
            tok: ReplayToken { seed: 7, index: 3 },
            vertices: 12,
            interior: 40,
        };
        let params = run.params();
        assert_eq!(params["cmd"], "sample");
        assert_eq!(params["seed"], 7);
        assert_eq!(params["index"], 3);
    }
}
