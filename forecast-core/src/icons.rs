use std::path::PathBuf;

/// Prefix applied to an icon code to select its night-time variant.
pub const NIGHT_PREFIX: &str = "nt_";

/// Maps provider icon codes to local image files.
pub trait IconResolver: Send + Sync {
    /// `None` means the item is shown without an icon.
    fn resolve(&self, code: &str) -> Option<PathBuf>;
}

/// Icons stored as `<dir>/<code>.png`.
#[derive(Debug, Clone)]
pub struct IconDir {
    dir: PathBuf,
}

impl IconDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl IconResolver for IconDir {
    fn resolve(&self, code: &str) -> Option<PathBuf> {
        if code.is_empty() {
            return None;
        }

        let path = self.dir.join(format!("{code}.png"));
        if path.is_file() {
            Some(path)
        } else {
            tracing::debug!(code, path = %path.display(), "missing icon asset");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl IconResolver for NoIcons {
    fn resolve(&self, _code: &str) -> Option<PathBuf> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn resolves_existing_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("rain.png"), b"png").unwrap();
        let icons = IconDir::new(dir.path());

        assert_eq!(icons.resolve("rain"), Some(dir.path().join("rain.png")));
        assert_eq!(icons.resolve("snow"), None);
        assert_eq!(icons.resolve(""), None);
    }

    #[test]
    fn no_icons_never_resolves() {
        assert_eq!(NoIcons.resolve("rain"), None);
    }
}
