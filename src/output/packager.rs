// ==========================================
// Asin Batcher - zip packager
// ==========================================
// Bundles the written batch files into one deflate archive, then
// removes the working folder best-effort.
// ==========================================

use crate::output::error::{OutputError, OutputResult};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Zip `files` into `target`, each entry named by its file name only.
pub fn zip_outputs(files: &[PathBuf], target: &Path) -> OutputResult<PathBuf> {
    let zip_err = |e: &dyn std::fmt::Display| OutputError::ZipWriteError {
        path: target.display().to_string(),
        message: e.to_string(),
    };

    let file = fs::File::create(target).map_err(|e| zip_err(&e))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| zip_err(&format!("bad entry path: {}", path.display())))?;
        writer.start_file(name, options).map_err(|e| zip_err(&e))?;

        let mut source = fs::File::open(path).map_err(|e| zip_err(&e))?;
        let mut buf = Vec::new();
        source.read_to_end(&mut buf).map_err(|e| zip_err(&e))?;
        writer.write_all(&buf).map_err(|e| zip_err(&e))?;
    }

    writer.finish().map_err(|e| zip_err(&e))?;
    tracing::info!(target = %target.display(), entries = files.len(), "zip archive written");
    Ok(target.to_path_buf())
}

/// Remove the working folder after zipping. Failure is non-fatal: the
/// archive already holds the data, so it is only logged.
pub fn cleanup_work_dir(work_dir: &Path) {
    if let Err(err) = fs::remove_dir_all(work_dir) {
        tracing::warn!(
            work_dir = %work_dir.display(),
            error = %err,
            "could not remove working folder after zipping"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use zip::ZipArchive;

    #[test]
    fn test_zip_contains_exactly_the_inputs() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("lote_1.txt");
        let b = dir.path().join("lote_2.txt");
        fs::write(&a, "start_url\n").unwrap();
        fs::write(&b, "start_url\n").unwrap();

        let target = dir.path().join("lote.zip");
        zip_outputs(&[a, b], &target).unwrap();

        let mut archive = ZipArchive::new(fs::File::open(&target).unwrap()).unwrap();
        let mut names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["lote_1.txt", "lote_2.txt"]);
    }

    #[test]
    fn test_cleanup_removes_folder() {
        let dir = TempDir::new().unwrap();
        let work = dir.path().join("trabajo");
        fs::create_dir_all(&work).unwrap();
        fs::write(work.join("x.txt"), "data").unwrap();

        cleanup_work_dir(&work);
        assert!(!work.exists());
    }

    #[test]
    fn test_cleanup_missing_folder_is_swallowed() {
        // Must not panic or error.
        cleanup_work_dir(Path::new("no/such/folder"));
    }
}
