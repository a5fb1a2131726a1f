//! Object store backed by a bucket directory on the local filesystem.
//!
//! Object keys map to relative paths below the bucket directory. All access
//! goes through a capability handle to that directory, so keys cannot reach
//! outside it.

use crate::catalogue::ports::{ObjectStore, ObjectStoreError, ObjectStoreResult};
use crate::config::CatalogueConfig;
use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;
use tracing::debug;

/// Read-only object store over `<store_root>/<bucket>`.
#[derive(Debug, Clone)]
pub struct DirectoryObjectStore {
    bucket: Arc<Dir>,
}

impl DirectoryObjectStore {
    /// Opens the bucket directory named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStoreError::Unavailable`] when the bucket directory
    /// cannot be opened.
    pub fn open(config: &CatalogueConfig) -> ObjectStoreResult<Self> {
        let bucket_path = config.bucket_path();
        let bucket = Dir::open_ambient_dir(bucket_path.as_str(), ambient_authority())
            .map_err(ObjectStoreError::unavailable)?;
        debug!(bucket = %bucket_path, "opened bucket directory");
        Ok(Self {
            bucket: Arc::new(bucket),
        })
    }

    async fn blocking<T, F>(&self, operation: F) -> ObjectStoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Dir) -> ObjectStoreResult<T> + Send + 'static,
    {
        let bucket = Arc::clone(&self.bucket);
        tokio::task::spawn_blocking(move || operation(bucket.as_ref()))
            .await
            .map_err(ObjectStoreError::internal)?
    }
}

fn access_error(key: &str, err: io::Error) -> ObjectStoreError {
    if err.kind() == io::ErrorKind::NotFound {
        ObjectStoreError::NotFound(key.to_owned())
    } else {
        ObjectStoreError::unavailable(err)
    }
}

fn collect_keys(bucket: &Dir, directory: &str, keys: &mut Vec<String>) -> io::Result<()> {
    let entries = if directory.is_empty() {
        bucket.entries()?
    } else {
        bucket.read_dir(directory)?
    };

    for entry_result in entries {
        let entry = entry_result?;
        let name = entry.file_name()?;
        let key = if directory.is_empty() {
            name
        } else {
            format!("{directory}/{name}")
        };

        if entry.file_type()?.is_dir() {
            collect_keys(bucket, &key, keys)?;
        } else {
            keys.push(key);
        }
    }
    Ok(())
}

fn list_keys(bucket: &Dir, prefix: &str) -> ObjectStoreResult<Vec<String>> {
    let directory = prefix
        .rsplit_once('/')
        .map_or("", |(directory, _)| directory);

    let mut keys = Vec::new();
    match collect_keys(bucket, directory, &mut keys) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(ObjectStoreError::unavailable(err)),
    }

    keys.retain(|key| key.starts_with(prefix));
    Ok(keys)
}

#[async_trait]
impl ObjectStore for DirectoryObjectStore {
    async fn exists(&self, key: &str) -> ObjectStoreResult<bool> {
        let owned_key = key.to_owned();
        self.blocking(move |bucket| match bucket.metadata(owned_key.as_str()) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(err) => match access_error(&owned_key, err) {
                ObjectStoreError::NotFound(_) => Ok(false),
                other => Err(other),
            },
        })
        .await
    }

    async fn get(&self, key: &str) -> ObjectStoreResult<Vec<u8>> {
        let owned_key = key.to_owned();
        self.blocking(move |bucket| {
            bucket
                .read(owned_key.as_str())
                .map_err(|err| access_error(&owned_key, err))
        })
        .await
    }

    async fn list(&self, prefix: &str) -> ObjectStoreResult<Vec<String>> {
        let owned_prefix = prefix.to_owned();
        self.blocking(move |bucket| list_keys(bucket, &owned_prefix))
            .await
    }
}
