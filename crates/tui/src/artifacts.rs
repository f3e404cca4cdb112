//! Local file work around the batch and browse views.
//!
//! Responsibilities:
//! - Count CSV data rows before an upload (header excluded).
//! - Count entries in a downloaded split archive.
//! - Save downloaded bytes into the download directory.
//!
//! Does NOT handle:
//! - Network transfer (see `opsdash_client`).
//! - Choosing the download directory (see `opsdash_config::BatchConfig`).
//!
//! Invariants:
//! - Saved files never escape the target directory: names are reduced to
//!   their basename first.
//! - An existing file is never overwritten; a numeric suffix is added instead.

use std::io::{Cursor, ErrorKind};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use opsdash_client::safe_file_name;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Count data rows of a CSV file, excluding the header row.
///
/// Blocking; call from `spawn_blocking`.
pub fn count_csv_rows(path: &Path) -> anyhow::Result<u64> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut record = csv::ByteRecord::new();
    let mut rows = 0u64;
    while reader
        .read_byte_record(&mut record)
        .with_context(|| format!("Failed to read CSV row {} of {}", rows + 1, path.display()))?
    {
        rows += 1;
    }
    Ok(rows)
}

/// Number of chunk files a split of `rows` rows into `per_chunk` rows yields.
pub fn expected_chunks(rows: u64, per_chunk: u64) -> u64 {
    if per_chunk == 0 {
        return 0;
    }
    rows.div_ceil(per_chunk)
}

/// Number of entries in a zip archive held in memory.
pub fn count_zip_entries(bytes: &[u8]) -> anyhow::Result<usize> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).context("Not a valid zip archive")?;
    Ok(archive.len())
}

/// Write `bytes` as `file_name` inside `dir`, creating `dir` if needed.
///
/// Returns the path actually written.
pub async fn save_bytes(dir: &Path, file_name: &str, bytes: &[u8]) -> anyhow::Result<PathBuf> {
    let Some(name) = safe_file_name(file_name) else {
        bail!("Refusing to save a file without a usable name: '{file_name}'");
    };

    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create download directory: {}", dir.display()))?;

    let (mut file, path) = create_unused(dir, &name).await?;
    file.write_all(bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.flush()
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "Saved download");
    Ok(path)
}

/// Create `name` in `dir`, or `stem-N.ext` for the first free `N`.
///
/// Each candidate is claimed with `create_new`; an existing file is never
/// opened.
async fn create_unused(dir: &Path, name: &str) -> anyhow::Result<(File, PathBuf)> {
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };

    let mut n = 0u32;
    loop {
        let candidate = match (n, ext) {
            (0, _) => dir.join(name),
            (_, Some(ext)) => dir.join(format!("{stem}-{n}.{ext}")),
            (_, None) => dir.join(format!("{stem}-{n}")),
        };
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
            .await
        {
            Ok(file) => return Ok((file, candidate)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                n = n
                    .checked_add(1)
                    .context("No free file name left in the download directory")?;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to create {}", candidate.display()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_count_csv_rows_excludes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        std::fs::write(&path, "id,name\n1,a\n2,b\n3,\"c, d\"\n").unwrap();
        assert_eq!(count_csv_rows(&path).unwrap(), 3);
    }

    #[test]
    fn test_count_csv_rows_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "id,name\n").unwrap();
        assert_eq!(count_csv_rows(&path).unwrap(), 0);
    }

    #[test]
    fn test_count_csv_rows_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(count_csv_rows(&dir.path().join("nope.csv")).is_err());
    }

    #[test]
    fn test_expected_chunks_rounds_up() {
        assert_eq!(expected_chunks(0, 10), 0);
        assert_eq!(expected_chunks(10, 10), 1);
        assert_eq!(expected_chunks(11, 10), 2);
        assert_eq!(expected_chunks(250_001, 100_000), 3);
        assert_eq!(expected_chunks(5, 0), 0);
    }

    #[test]
    fn test_count_zip_entries() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            let options = zip::write::SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored);
            for i in 1..=3 {
                writer.start_file(format!("orders_part{i}.zip"), options).unwrap();
                writer.write_all(b"chunk").unwrap();
            }
            writer.finish().unwrap();
        }
        assert_eq!(count_zip_entries(buf.get_ref()).unwrap(), 3);
        assert!(count_zip_entries(b"not a zip").is_err());
    }

    #[tokio::test]
    async fn test_save_bytes_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let first = save_bytes(dir.path(), "out.zip", b"one").await.unwrap();
        let second = save_bytes(dir.path(), "out.zip", b"two").await.unwrap();

        assert_eq!(first, dir.path().join("out.zip"));
        assert_eq!(second, dir.path().join("out-1.zip"));
        assert_eq!(std::fs::read(&first).unwrap(), b"one");
        assert_eq!(std::fs::read(&second).unwrap(), b"two");
    }

    #[tokio::test]
    async fn test_concurrent_saves_get_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let (a, b, c) = tokio::join!(
            save_bytes(dir.path(), "labels.zip", b"a"),
            save_bytes(dir.path(), "labels.zip", b"b"),
            save_bytes(dir.path(), "labels.zip", b"c"),
        );
        let mut paths = vec![a.unwrap(), b.unwrap(), c.unwrap()];
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 3);

        let mut contents: Vec<Vec<u8>> = paths.iter().map(|p| std::fs::read(p).unwrap()).collect();
        contents.sort();
        assert_eq!(contents, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[tokio::test]
    async fn test_save_bytes_rejects_unusable_name() {
        let dir = tempfile::tempdir().unwrap();
        assert!(save_bytes(dir.path(), "../..", b"x").await.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_save_bytes_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("downloads/opsdash");
        let path = save_bytes(&nested, "sub/dir/label.png", b"png").await.unwrap();
        assert_eq!(path, nested.join("label.png"));
    }
}
