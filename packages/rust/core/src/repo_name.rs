//! Repository display-name resolution.
//!
//! Looks at the manifests next to the wiki directory: `package.json` first,
//! then `pyproject.toml` and `Cargo.toml` by text search. Falls back to the
//! project directory's name.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use llmsgen_shared::{LlmsGenError, Result};

/// Build-config files searched for a `name = "..."` line, in order.
const BUILD_CONFIG_FILES: [&str; 2] = ["pyproject.toml", "Cargo.toml"];

/// Used when the project directory has no file name (e.g. `/`).
const FALLBACK_NAME: &str = "unknown";

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"name\s*=\s*["']([^"']+)["']"#).expect("name regex")
});

/// Resolve the display name for the project that owns `wiki_dir`.
#[instrument(skip_all, fields(wiki_dir = %wiki_dir.display()))]
pub fn resolve_repo_name(wiki_dir: &Path) -> String {
    let project_dir = project_dir(wiki_dir);

    match name_from_package_json(&project_dir.join("package.json")) {
        Ok(Some(name)) => return name,
        Ok(None) => debug!("package.json has no string name field"),
        Err(e) => debug!(error = %e, "package.json not usable"),
    }

    for file in BUILD_CONFIG_FILES {
        match name_from_build_config(&project_dir.join(file)) {
            Ok(Some(name)) => return name,
            Ok(None) => debug!(file, "no name assignment found"),
            Err(e) => debug!(file, error = %e, "build config not usable"),
        }
    }

    project_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/// The lexical parent of the wiki directory, made absolute.
///
/// A symlinked wiki directory is not followed, so the manifests next to the
/// link are the ones consulted. Only the parent itself is canonicalized.
fn project_dir(wiki_dir: &Path) -> PathBuf {
    let mut absolute = std::path::absolute(wiki_dir).unwrap_or_else(|_| wiki_dir.to_path_buf());
    // `..` has no lexical parent worth using; resolve it first.
    if absolute.file_name().is_none() {
        if let Ok(resolved) = std::fs::canonicalize(&absolute) {
            absolute = resolved;
        }
    }

    let parent = match absolute.parent() {
        Some(parent) => parent.to_path_buf(),
        None => return absolute,
    };
    std::fs::canonicalize(&parent).unwrap_or(parent)
}

fn name_from_package_json(path: &Path) -> Result<Option<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| LlmsGenError::io(path, e))?;
    let manifest: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| LlmsGenError::parse(format!("invalid {}: {e}", path.display())))?;

    Ok(manifest
        .get("name")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string))
}

fn name_from_build_config(path: &Path) -> Result<Option<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| LlmsGenError::io(path, e))?;
    Ok(NAME_RE.captures(&content).map(|caps| caps[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Creates `<tmp>/<project>/wiki` and returns (guard, project dir, wiki dir).
    fn project(name: &str) -> (tempfile::TempDir, PathBuf, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let project = tmp.path().join(name);
        let wiki = project.join("wiki");
        fs::create_dir_all(&wiki).unwrap();
        (tmp, project, wiki)
    }

    #[test]
    fn package_json_wins() {
        let (_tmp, project, wiki) = project("checkout");
        fs::write(project.join("package.json"), r#"{"name": "from-npm", "version": "1.0.0"}"#)
            .unwrap();
        fs::write(project.join("pyproject.toml"), "[project]\nname = \"from-py\"\n").unwrap();

        assert_eq!(resolve_repo_name(&wiki), "from-npm");
    }

    #[test]
    fn invalid_package_json_falls_through() {
        let (_tmp, project, wiki) = project("checkout");
        fs::write(project.join("package.json"), "{ not json").unwrap();
        fs::write(project.join("pyproject.toml"), "[project]\nname = 'from-py'\n").unwrap();

        assert_eq!(resolve_repo_name(&wiki), "from-py");
    }

    #[test]
    fn non_string_package_name_falls_through() {
        let (_tmp, project, wiki) = project("checkout");
        fs::write(project.join("package.json"), r#"{"name": 42}"#).unwrap();
        fs::write(project.join("Cargo.toml"), "[package]\nname = \"from-cargo\"\n").unwrap();

        assert_eq!(resolve_repo_name(&wiki), "from-cargo");
    }

    #[test]
    fn pyproject_before_cargo() {
        let (_tmp, project, wiki) = project("checkout");
        fs::write(project.join("pyproject.toml"), "[tool.poetry]\nname=\"poetry-app\"\n").unwrap();
        fs::write(project.join("Cargo.toml"), "[package]\nname = \"from-cargo\"\n").unwrap();

        assert_eq!(resolve_repo_name(&wiki), "poetry-app");
    }

    #[test]
    fn falls_back_to_directory_name() {
        let (_tmp, project, wiki) = project("my-project");
        fs::write(project.join("pyproject.toml"), "[build-system]\nrequires = []\n").unwrap();

        assert_eq!(resolve_repo_name(&wiki), "my-project");
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_wiki_uses_link_parent() {
        use std::os::unix::fs::symlink;

        let tmp = tempfile::tempdir().unwrap();
        let store_wiki = tmp.path().join("store").join("wiki");
        fs::create_dir_all(&store_wiki).unwrap();
        let project = tmp.path().join("my-app");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("package.json"), r#"{"name":"my-app-pkg"}"#).unwrap();
        symlink(&store_wiki, project.join("wiki")).unwrap();

        assert_eq!(resolve_repo_name(&project.join("wiki")), "my-app-pkg");
    }

    #[test]
    fn dot_dot_wiki_resolves_real_parent() {
        let (_tmp, project, wiki) = project("outer");
        let nested = wiki.join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(project.join("Cargo.toml"), "[package]\nname = \"outer-crate\"\n").unwrap();

        assert_eq!(resolve_repo_name(&nested.join("..")), "outer-crate");
    }

    #[test]
    fn build_config_regex_takes_first_match() {
        let caps = NAME_RE
            .captures("[project]\nname = \"first\"\n[tool.x]\nname = \"second\"\n")
            .unwrap();
        assert_eq!(&caps[1], "first");
        assert!(NAME_RE.captures("name = \"\"").is_none());
    }
}
