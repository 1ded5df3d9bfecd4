//! Artifact writer.
//!
//! Writes generated documents into the wiki directory atomically and records
//! a checksum for each.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use llmsgen_shared::{LlmsGenError, Result};

/// Metadata for a single written artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactMeta {
    pub filename: String,
    /// `dir` joined with `filename`, as passed to [`write_artifact`].
    pub path: PathBuf,
    pub sha256: String,
    pub size_bytes: usize,
}

/// Write `content` to `dir/filename`, replacing any existing file.
///
/// The content goes to `.{filename}.tmp` first and is then renamed over the
/// target, so readers never see a half-written file.
pub fn write_artifact(dir: &Path, filename: &str, content: &str) -> Result<ArtifactMeta> {
    let target = dir.join(filename);
    let temp = dir.join(format!(".{filename}.tmp"));

    std::fs::write(&temp, content).map_err(|e| LlmsGenError::io(&temp, e))?;

    // Atomic rename
    if let Err(e) = std::fs::rename(&temp, &target) {
        let _ = std::fs::remove_file(&temp);
        return Err(LlmsGenError::io(&target, e));
    }

    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let hash = format!("{:x}", hasher.finalize());

    debug!(file = %filename, size = content.len(), sha256 = %hash, "wrote artifact");

    Ok(ArtifactMeta {
        filename: filename.to_string(),
        path: target,
        sha256: hash,
        size_bytes: content.len(),
    })
}
