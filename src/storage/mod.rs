//! One JSON file per listing under a data directory.

use crate::error::{CrawlError, Result};
use crate::models::Listing;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::DirBuilder;
use tracing::{debug, warn};

/// Create `dir` (and parents) if missing. Existing directories are fine.
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o777);

    match builder.create(dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(source) => Err(CrawlError::Write {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Serialize `listing` to `<dir>/<item_id>.json`, overwriting any existing file.
///
/// Returns the path written.
pub async fn write_listing(listing: &Listing, dir: &Path) -> Result<PathBuf> {
    ensure_dir(dir).await?;

    if listing.item_id().is_empty() {
        warn!(url = %listing.url, "Listing URL yields an empty item id");
    }
    let path = dir.join(listing.file_name());

    let mut bytes = serde_json::to_vec(listing).map_err(|e| CrawlError::Write {
        path: path.clone(),
        source: io::Error::from(e),
    })?;
    bytes.push(b'\n');

    match tokio::fs::write(&path, bytes).await {
        Ok(()) => {
            debug!("File {} created successfully", path.display());
            Ok(path)
        }
        Err(source) => Err(CrawlError::Write { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str) -> Listing {
        Listing::new(
            format!("Item {}", id),
            "$10.00",
            format!("https://www.ebay.com/itm/{}?hash=x", id),
            "New",
        )
    }

    #[tokio::test]
    async fn test_write_then_read_back() {
        let tmp = tempfile::tempdir().unwrap();
        let original = listing("123456789");

        let path = write_listing(&original, tmp.path()).await.unwrap();
        assert_eq!(path, tmp.path().join("123456789.json"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("}\n"));
        let read_back: Listing = serde_json::from_str(&contents).unwrap();
        assert_eq!(read_back, original);
    }

    #[tokio::test]
    async fn test_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");

        write_listing(&listing("1"), &dir).await.unwrap();
        assert!(dir.join("1.json").is_file());
    }

    #[tokio::test]
    async fn test_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let first = listing("7");
        let mut second = listing("7");
        second.price = "$12.00".to_string();

        write_listing(&first, tmp.path()).await.unwrap();
        let path = write_listing(&second, tmp.path()).await.unwrap();

        let read_back: Listing =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(read_back.price, "$12.00");
    }

    #[tokio::test]
    async fn test_concurrent_writes_into_new_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("data");

        let writes = (0..25).map(|i| {
            let dir = dir.clone();
            tokio::spawn(async move { write_listing(&listing(&i.to_string()), &dir).await })
        });
        for result in futures::future::join_all(writes).await {
            result.unwrap().unwrap();
        }

        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 25);
    }

    #[tokio::test]
    async fn test_empty_url_writes_bare_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_listing(&Listing::new("t", "p", "", "c"), tmp.path())
            .await
            .unwrap();
        assert_eq!(path.file_name().unwrap(), ".json");
    }

    #[tokio::test]
    async fn test_directory_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("data");
        std::fs::write(&blocker, "not a dir").unwrap();

        let err = write_listing(&listing("1"), &blocker).await.unwrap_err();
        assert!(matches!(err, CrawlError::Write { .. }));
        assert!(!err.is_fatal());
    }
}
