use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How configuration directories are turned into zip archives before upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagingOptions {
    /// Top-level directory names left out of the archive.
    pub excluded_dirs: Vec<String>,
    pub compression: Compression,
    /// Package the targets of symlinks (shared schemas are often linked in).
    pub follow_symlinks: bool,
}

impl Default for PackagingOptions {
    fn default() -> Self {
        PackagingOptions {
            // Config files on the XSLT path are never uploaded.
            excluded_dirs: vec!["xslt".to_string()],
            compression: Compression::default(),
            follow_symlinks: true,
        }
    }
}

impl PackagingOptions {
    pub fn trace_loaded(&self) {
        info!(
            excluded_dirs = ?self.excluded_dirs,
            compression = ?self.compression,
            follow_symlinks = self.follow_symlinks,
            "Loaded PackagingOptions"
        );
        debug!(?self, "PackagingOptions loaded (full debug)");
    }

    /// Whether a path relative to the configuration root falls under an excluded directory.
    pub fn is_excluded(&self, relative: &std::path::Path) -> bool {
        match relative.components().next() {
            Some(std::path::Component::Normal(first)) => self
                .excluded_dirs
                .iter()
                .any(|dir| first == std::ffi::OsStr::new(dir)),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compression {
    #[default]
    Deflated,
    Stored,
}

impl From<Compression> for zip::CompressionMethod {
    fn from(c: Compression) -> Self {
        match c {
            Compression::Deflated => zip::CompressionMethod::Deflated,
            Compression::Stored => zip::CompressionMethod::Stored,
        }
    }
}
