//! `<result>.provenance.json` sidecars: which subcommand, flags, and catalog
//! produced a written result, and from which build.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::ProjectionArg;

/// Catalog file and the columns read from it.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogSource {
    pub path: PathBuf,
    pub ra_col: String,
    pub dec_col: String,
}

/// One CLI invocation, tagged by subcommand.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Run {
    Center {
        catalog: CatalogSource,
    },
    Midpoint {
        a: String,
        b: String,
    },
    Disk {
        catalog: CatalogSource,
        projection: ProjectionArg,
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct Sidecar<'a> {
    #[serde(flatten)]
    run: &'a Run,
    result: &'a Path,
    asterisms_version: &'static str,
    git_rev: Option<String>,
}

/// Sidecar location for `result`: the extension becomes `provenance.json`.
pub fn sidecar_path(result: &Path) -> PathBuf {
    result.with_extension("provenance.json")
}

/// Record `run` next to `result`; the directory must already exist.
pub fn record(result: &Path, run: &Run) -> Result<PathBuf> {
    let path = sidecar_path(result);
    let sidecar = Sidecar {
        run,
        result,
        asterisms_version: asterisms::VERSION,
        git_rev: git_rev(),
    };
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Commit of the build: `GIT_COMMIT` at compile time, then at run time, then
/// `git rev-parse` in the working directory.
pub fn git_rev() -> Option<String> {
    [
        option_env!("GIT_COMMIT").map(str::to_owned),
        std::env::var("GIT_COMMIT").ok(),
    ]
    .into_iter()
    .flatten()
    .find(|rev| !rev.is_empty())
    .or_else(|| {
        let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
        out.status
            .success()
            .then(|| String::from_utf8_lossy(&out.stdout).trim().to_owned())
    })
}
