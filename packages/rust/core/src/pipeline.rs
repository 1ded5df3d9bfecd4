//! End-to-end `generate` pipeline: wiki dir → collect → resolve name → render → write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, instrument};

use llmsgen_shared::{GeneratorConfig, LlmsGenError, OutputConfig, Result, SkippedFile};

use crate::assembler::{ArtifactMeta, write_artifact};
use crate::collector::collect_pages;
use crate::full::render_full;
use crate::index::render_index;
use crate::repo_name::resolve_repo_name;

/// Configuration for the `generate` pipeline.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory to scan; outputs are written here too.
    pub wiki_dir: PathBuf,
    /// Display name override (skips resolution when set).
    pub name: Option<String>,
    /// Output file names and link prefix.
    pub output: OutputConfig,
}

impl GenerateConfig {
    /// Build a run config for `wiki_dir` from the loaded generator config.
    pub fn new(wiki_dir: impl Into<PathBuf>, config: &GeneratorConfig) -> Self {
        Self {
            wiki_dir: wiki_dir.into(),
            name: config.name.clone(),
            output: config.output.clone(),
        }
    }
}

/// Result of the `generate` pipeline.
#[derive(Debug)]
pub struct GenerateResult {
    /// Number of pages written to the artifacts.
    pub page_count: usize,
    /// Name used in the document headers.
    pub repo_name: String,
    /// Index document first, then the full dump.
    pub artifacts: Vec<ArtifactMeta>,
    /// Markdown files that could not be read.
    pub skipped: Vec<SkippedFile>,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Callback for reporting pipeline status.
pub trait StatusReporter {
    /// Called before the wiki directory is walked.
    fn scanning(&self, wiki_dir: &Path);
    /// Called once pages have been collected (only when there is at least one).
    fn pages_found(&self, count: usize);
    /// Called with the resolved display name.
    fn repo_name(&self, name: &str);
    /// Called after each artifact is written.
    fn generated(&self, artifact: &ArtifactMeta);
    /// Called when the pipeline completes.
    fn done(&self, result: &GenerateResult);
}

/// No-op status reporter for headless/test usage.
pub struct SilentStatus;

impl StatusReporter for SilentStatus {
    fn scanning(&self, _wiki_dir: &Path) {}
    fn pages_found(&self, _count: usize) {}
    fn repo_name(&self, _name: &str) {}
    fn generated(&self, _artifact: &ArtifactMeta) {}
    fn done(&self, _result: &GenerateResult) {}
}

/// Run the full `generate` pipeline.
///
/// 1. Check the wiki directory exists
/// 2. Collect pages (fails with [`LlmsGenError::NoPages`] when none are found)
/// 3. Resolve the repository name
/// 4. Render and write the index document
/// 5. Render and write the full dump
#[instrument(skip_all, fields(wiki_dir = %config.wiki_dir.display()))]
pub fn generate(config: &GenerateConfig, status: &dyn StatusReporter) -> Result<GenerateResult> {
    let start = Instant::now();
    let wiki_dir = &config.wiki_dir;

    if !wiki_dir.is_dir() {
        return Err(LlmsGenError::WikiDirMissing {
            path: wiki_dir.clone(),
        });
    }

    status.scanning(wiki_dir);
    let collected = collect_pages(wiki_dir);

    if collected.pages.is_empty() {
        return Err(LlmsGenError::NoPages {
            path: wiki_dir.clone(),
        });
    }
    let pages = collected.pages;
    status.pages_found(pages.len());

    let repo_name = match &config.name {
        Some(name) => name.clone(),
        None => resolve_repo_name(wiki_dir),
    };
    status.repo_name(&repo_name);

    let prefix = &config.output.link_prefix;
    let mut artifacts = Vec::with_capacity(2);

    let index = render_index(&pages, &repo_name, prefix);
    let meta = write_artifact(wiki_dir, &config.output.index_file, &index)?;
    status.generated(&meta);
    artifacts.push(meta);

    let full = render_full(&pages, &repo_name, prefix);
    let meta = write_artifact(wiki_dir, &config.output.full_file, &full)?;
    status.generated(&meta);
    artifacts.push(meta);

    let result = GenerateResult {
        page_count: pages.len(),
        repo_name,
        artifacts,
        skipped: collected.skipped,
        elapsed: start.elapsed(),
    };

    info!(
        pages = result.page_count,
        skipped = result.skipped.len(),
        repo = %result.repo_name,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "generation complete"
    );
    status.done(&result);

    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;

    /// Records every status callback as a line of text.
    #[derive(Default)]
    struct RecordingStatus {
        events: RefCell<Vec<String>>,
    }

    impl StatusReporter for RecordingStatus {
        fn scanning(&self, wiki_dir: &Path) {
            self.events.borrow_mut().push(format!("scan {}", wiki_dir.display()));
        }
        fn pages_found(&self, count: usize) {
            self.events.borrow_mut().push(format!("found {count}"));
        }
        fn repo_name(&self, name: &str) {
            self.events.borrow_mut().push(format!("name {name}"));
        }
        fn generated(&self, artifact: &ArtifactMeta) {
            self.events.borrow_mut().push(format!("wrote {}", artifact.filename));
        }
        fn done(&self, result: &GenerateResult) {
            self.events.borrow_mut().push(format!("done {}", result.page_count));
        }
    }

    fn project_with_wiki() -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let wiki = tmp.path().join("demo-project").join("wiki");
        fs::create_dir_all(&wiki).unwrap();
        (tmp, wiki)
    }

    #[test]
    fn generates_both_artifacts() {
        let (_tmp, wiki) = project_with_wiki();
        fs::write(
            wiki.join("intro.md"),
            "---\ntype: overview\ntitle: \"Intro\"\n---\n# Intro\n\nWelcome.\n",
        )
        .unwrap();
        fs::write(wiki.join("queue.md"), "# Queue\n\nJobs wait here.\n").unwrap();

        let config = GenerateConfig::new(&wiki, &GeneratorConfig::default());
        let status = RecordingStatus::default();
        let started = Instant::now();
        let result = generate(&config, &status).unwrap();
        assert!(result.elapsed <= started.elapsed());

        assert_eq!(result.page_count, 2);
        assert_eq!(result.repo_name, "demo-project");
        assert_eq!(result.artifacts.len(), 2);

        let index = fs::read_to_string(wiki.join("llms.txt")).unwrap();
        assert!(index.starts_with("# demo-project Wiki\n"));
        assert!(index.contains("## Overview\n\n- [Intro](wiki/intro.md): Welcome.\n"));
        assert!(index.contains("## Concepts\n\n- [Queue](wiki/queue.md): Jobs wait here.\n"));

        let full = fs::read_to_string(wiki.join("llms-full.txt")).unwrap();
        let intro_at = full.find("FILE: wiki/intro.md").unwrap();
        let queue_at = full.find("FILE: wiki/queue.md").unwrap();
        assert!(intro_at < queue_at);

        assert_eq!(
            *status.events.borrow(),
            vec![
                format!("scan {}", wiki.display()),
                "found 2".to_string(),
                "name demo-project".to_string(),
                "wrote llms.txt".to_string(),
                "wrote llms-full.txt".to_string(),
                "done 2".to_string(),
            ]
        );
    }

    #[test]
    fn missing_directory_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let config = GenerateConfig::new(tmp.path().join("nope"), &GeneratorConfig::default());

        let err = generate(&config, &SilentStatus).unwrap_err();
        assert!(matches!(err, LlmsGenError::WikiDirMissing { .. }));
    }

    #[test]
    fn empty_wiki_writes_nothing() {
        let (_tmp, wiki) = project_with_wiki();
        fs::write(wiki.join("notes.txt"), "not markdown").unwrap();

        let config = GenerateConfig::new(&wiki, &GeneratorConfig::default());
        let err = generate(&config, &SilentStatus).unwrap_err();

        assert!(matches!(err, LlmsGenError::NoPages { .. }));
        assert!(!wiki.join("llms.txt").exists());
        assert!(!wiki.join("llms-full.txt").exists());
    }

    #[test]
    fn unreadable_file_does_not_abort() {
        let (_tmp, wiki) = project_with_wiki();
        fs::write(wiki.join("broken.md"), [0xc3, 0x28, 0xa0, 0xa1]).unwrap();
        fs::write(wiki.join("fine.md"), "Fine page.\n").unwrap();

        let config = GenerateConfig::new(&wiki, &GeneratorConfig::default());
        let result = generate(&config, &SilentStatus).unwrap();

        assert_eq!(result.page_count, 1);
        assert_eq!(result.skipped.len(), 1);
        let index = fs::read_to_string(wiki.join("llms.txt")).unwrap();
        assert!(index.contains("- [Fine](wiki/fine.md): Fine page."));
        assert!(!index.contains("broken"));
    }

    #[test]
    fn only_unreadable_files_counts_as_empty() {
        let (_tmp, wiki) = project_with_wiki();
        fs::write(wiki.join("broken.md"), [0xff, 0xff]).unwrap();

        let config = GenerateConfig::new(&wiki, &GeneratorConfig::default());
        let err = generate(&config, &SilentStatus).unwrap_err();
        assert!(matches!(err, LlmsGenError::NoPages { .. }));
    }

    #[test]
    fn config_overrides_name_and_outputs() {
        let (_tmp, wiki) = project_with_wiki();
        fs::write(wiki.join("page.md"), "Body.\n").unwrap();

        let mut app = GeneratorConfig::default();
        app.name = Some("Acme".into());
        app.output.index_file = "index.txt".into();
        app.output.full_file = "all.txt".into();
        app.output.link_prefix = "docs/".into();

        let result = generate(&GenerateConfig::new(&wiki, &app), &SilentStatus).unwrap();

        assert_eq!(result.repo_name, "Acme");
        let index = fs::read_to_string(wiki.join("index.txt")).unwrap();
        assert!(index.starts_with("# Acme Wiki\n"));
        assert!(index.contains("- [Page](docs/page.md): Body."));
        assert!(wiki.join("all.txt").exists());
        assert!(!wiki.join("llms.txt").exists());
    }

    #[test]
    fn rerun_is_byte_identical() {
        let (_tmp, wiki) = project_with_wiki();
        fs::write(wiki.join("a.md"), "---\ntype: guide\n---\nA.\n").unwrap();
        fs::write(wiki.join("b.md"), "B.\n").unwrap();

        let config = GenerateConfig::new(&wiki, &GeneratorConfig::default());
        let first = generate(&config, &SilentStatus).unwrap();
        let index_1 = fs::read(wiki.join("llms.txt")).unwrap();
        let second = generate(&config, &SilentStatus).unwrap();
        let index_2 = fs::read(wiki.join("llms.txt")).unwrap();

        assert_eq!(index_1, index_2);
        assert_eq!(first.artifacts, second.artifacts);
    }
}
