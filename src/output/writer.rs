use crate::error::{Result, ScoutError};
use std::fs;
use std::path::{Path, PathBuf};

pub const REPORT_FILE: &str = "weekly-shortlist.md";
pub const SHORTLIST_FILE: &str = "shortlist.json";
pub const MANIFEST_FILE: &str = "run-manifest.json";

#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: String,
    pub content: String,
}

impl Artifact {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Writes every artifact to a temporary sibling first and renames them into
/// place only once all temporaries are on disk. A failure before the rename
/// phase leaves previously published files untouched.
pub fn publish(out_dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(ScoutError::Io)?;

    let mut staged = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let target = out_dir.join(&artifact.name);
        let temp = temp_path(&target);
        if let Err(err) = fs::write(&temp, &artifact.content) {
            discard(&staged);
            let _ = fs::remove_file(&temp);
            return Err(ScoutError::Io(err));
        }
        staged.push((temp, target));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (temp, target) in &staged {
        fs::rename(temp, target).map_err(ScoutError::Io)?;
        tracing::debug!(path = %target.display(), "published artifact");
        written.push(target.clone());
    }
    Ok(written)
}

pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(ScoutError::Io)?;
    }
    let temp = temp_path(path);
    fs::write(&temp, content).map_err(ScoutError::Io)?;
    fs::rename(&temp, path).map_err(ScoutError::Io)
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (temp, _) in staged {
        let _ = fs::remove_file(temp);
    }
}
