//! Directory-backed resource namespace
//!
//! Logical names map to files under a root directory, e.g.
//! `environments/local` → `<root>/environments/local.properties`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::{ResourceNamespace, LoadError, LoadResult};

/// Resource namespace that reads property files from disk
///
/// # Example
///
/// ```no_run
/// use layerconf_core::resources::DirNamespace;
///
/// // Resources shipped next to the binary
/// let bundled = DirNamespace::new("./resources");
///
/// // User-level overrides (~/.config/myapp on Linux)
/// let user = DirNamespace::user_config("myapp");
/// ```
#[derive(Debug, Clone)]
pub struct DirNamespace {
    root: PathBuf,
    extension: String,
}

impl DirNamespace {
    /// Create a namespace rooted at `root` using the `properties` extension
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "properties".to_string(),
        }
    }

    /// Namespace under the platform config directory for `app`
    pub fn user_config(app: &str) -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join(app))
    }

    /// Use a different file extension (without the leading dot; empty for none)
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path a logical name maps to
    ///
    /// Returns `None` for names that would escape the root (`..`, absolute,
    /// or empty segments).
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        let mut path = self.root.clone();
        for segment in name.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
                return None;
            }
            path.push(segment);
        }

        if !self.extension.is_empty() {
            let file_name = format!(
                "{}.{}",
                path.file_name()?.to_string_lossy(),
                self.extension
            );
            path.set_file_name(file_name);
        }
        Some(path)
    }
}

impl ResourceNamespace for DirNamespace {
    fn name(&self) -> &str {
        "dir"
    }

    fn read(&self, name: &str) -> LoadResult<String> {
        let path = self.path_for(name).ok_or_else(|| LoadError::not_found(name))?;

        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(LoadError::not_found(name)),
            Err(e) => Err(LoadError::io(name, e)),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_some_and(|p| p.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_path_mapping() {
        let ns = DirNamespace::new("/srv/app");
        assert_eq!(
            ns.path_for("environments/local").unwrap(),
            PathBuf::from("/srv/app/environments/local.properties")
        );
        assert!(ns.path_for("../etc/passwd").is_none());
        assert!(ns.path_for("environments//local").is_none());
        assert!(ns.path_for("").is_none());

        let bare = DirNamespace::new("/srv/app").with_extension("");
        assert_eq!(bare.path_for("application").unwrap(), PathBuf::from("/srv/app/application"));
    }

    #[test]
    fn test_read_from_disk() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("environments")).unwrap();
        fs::write(dir.path().join("environments/production.properties"), "log.level=WARN\n").unwrap();

        let ns = DirNamespace::new(dir.path());
        assert!(ns.exists("environments/production"));
        assert_eq!(ns.read("environments/production").unwrap(), "log.level=WARN\n");

        assert!(!ns.exists("environments/staging"));
        assert!(ns.read("environments/staging").unwrap_err().is_not_found());
    }

    #[test]
    fn test_user_config_root() {
        let ns = DirNamespace::user_config("layerconf-test");
        assert!(ns.root().ends_with("layerconf-test"));
    }
}
