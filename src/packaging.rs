//! Packaging of Solr configuration directories into zip archives.
//!
//! A configuration directory (schema.xml, solrconfig.xml, stopwords, ...) is
//! uploaded as a single zip whose entries are `/`-separated paths relative
//! to the directory root. Entries are written in sorted order so the same
//! directory always yields the same entry list.

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};
use walkdir::{DirEntry, WalkDir};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::config::PackagingOptions;
use crate::error::SolrConfigError;

/// Fails with [`SolrConfigError::NotADirectory`] unless `dir` is a directory.
pub fn ensure_directory(dir: &Path) -> Result<(), SolrConfigError> {
    if dir.is_dir() {
        Ok(())
    } else {
        error!(path = %dir.display(), "Configuration path is not a directory");
        Err(SolrConfigError::NotADirectory {
            path: dir.to_path_buf(),
        })
    }
}

/// Zips `dir` into memory.
pub fn zip_directory(dir: &Path, options: &PackagingOptions) -> Result<Vec<u8>, SolrConfigError> {
    let cursor = write_zip_directory(dir, options, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Zips `dir` into a temporary `.zip` file, removed when the handle is dropped.
pub fn zip_directory_to_file(
    dir: &Path,
    options: &PackagingOptions,
) -> Result<NamedTempFile, SolrConfigError> {
    ensure_directory(dir)?;
    let mut tmp = tempfile::Builder::new()
        .prefix("solr-config-")
        .suffix(".zip")
        .tempfile()?;
    write_zip_directory(dir, options, tmp.as_file_mut())?;
    debug!(
        dir = %dir.display(),
        zip = %tmp.path().display(),
        "Packaged configuration directory to temporary file"
    );
    Ok(tmp)
}

/// Writes every regular file under `dir` into a zip on `writer` and returns the writer.
pub fn write_zip_directory<W: Write + Seek>(
    dir: &Path,
    options: &PackagingOptions,
    writer: W,
) -> Result<W, SolrConfigError> {
    ensure_directory(dir)?;
    options.trace_loaded();

    let file_options =
        SimpleFileOptions::default().compression_method(options.compression.into());
    let mut zip = ZipWriter::new(writer);
    let mut entries = 0usize;

    for entry in walk_files(dir, options) {
        let entry = entry?;
        let relative = match entry.path().strip_prefix(dir) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => {
                warn!(path = %entry.path().display(), "Walked outside configuration root; skipping");
                continue;
            }
        };
        let name = entry_name(&relative);
        debug!(entry = %name, "Adding file to configuration archive");

        zip.start_file(name, file_options)?;
        let mut source = File::open(entry.path())?;
        std::io::copy(&mut source, &mut zip)?;
        entries += 1;
    }

    let writer = zip.finish()?;
    info!(dir = %dir.display(), entries, "Packaged configuration directory");
    Ok(writer)
}

/// Archive entry name for a path relative to the configuration root.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Relative paths of the files that packaging `dir` would include, in archive order.
pub fn list_packaged_files(
    dir: &Path,
    options: &PackagingOptions,
) -> Result<Vec<PathBuf>, SolrConfigError> {
    ensure_directory(dir)?;
    let mut files = Vec::new();
    for entry in walk_files(dir, options) {
        let entry = entry?;
        if let Ok(rel) = entry.path().strip_prefix(dir) {
            files.push(rel.to_path_buf());
        }
    }
    Ok(files)
}

/// Regular files under `dir` in sorted order, pruning excluded top-level directories.
fn walk_files<'a>(
    dir: &'a Path,
    options: &'a PackagingOptions,
) -> impl Iterator<Item = Result<DirEntry, walkdir::Error>> + 'a {
    WalkDir::new(dir)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| {
            let keep = e.depth() != 1
                || !e.file_type().is_dir()
                || !options.is_excluded(Path::new(e.file_name()));
            if !keep {
                debug!(path = %e.path().display(), "Skipping excluded configuration directory");
            }
            keep
        })
        .filter(|entry| match entry {
            Ok(e) if e.file_type().is_file() => true,
            Ok(e) if e.file_type().is_dir() => false,
            Ok(e) => {
                warn!(
                    path = %e.path().display(),
                    file_type = ?e.file_type(),
                    "Skipping non-regular entry in configuration directory"
                );
                false
            }
            Err(_) => true,
        })
}
