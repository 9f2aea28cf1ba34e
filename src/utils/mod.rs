use std::path::Path;

use crate::core::{GitError, Result};

/// Render a repository-relative path with forward-slash separators
pub fn rel_path_string(path: &Path) -> String {
    let s = path.to_string_lossy();
    if s.contains('\\') {
        s.replace('\\', "/")
    } else {
        s.into_owned()
    }
}

/// Extract the `owner/repo` pair from a hosting URL
pub fn repo_name_from_url(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| GitError::Remote(format!("invalid URL '{}': {}", raw, e)))?;

    let path = parsed.path().trim_start_matches('/').trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < 2 {
        return Err(GitError::Remote(format!(
            "URL '{}' does not name an owner/repository pair",
            raw
        )));
    }

    Ok(format!(
        "{}/{}",
        segments[segments.len() - 2],
        segments[segments.len() - 1]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn rel_path_uses_forward_slashes() {
        let path = PathBuf::from("sub").join("file.txt");
        assert_eq!(rel_path_string(&path), "sub/file.txt");
    }

    #[test]
    fn repo_name_from_https_url() {
        assert_eq!(
            repo_name_from_url("https://github.com/demo/project.git").unwrap(),
            "demo/project"
        );
        assert_eq!(
            repo_name_from_url("https://github.com/demo/project").unwrap(),
            "demo/project"
        );
    }

    #[test]
    fn repo_name_rejects_bare_hosts() {
        assert!(repo_name_from_url("https://github.com/").is_err());
        assert!(repo_name_from_url("not a url").is_err());
    }
}
