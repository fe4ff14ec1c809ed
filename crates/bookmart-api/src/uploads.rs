use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::info;
use uuid::Uuid;

/// Where uploaded cover images go. Returns the path clients use to fetch the
/// file back.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn save(&self, original_name: &str, data: Bytes) -> Result<String>;
}

/// Writes images into a local directory that the server also exposes as
/// static files under `public_prefix`.
pub struct DiskImageStore {
    dir: PathBuf,
    public_prefix: String,
}

impl DiskImageStore {
    pub async fn new(dir: PathBuf, public_prefix: impl Into<String>) -> Result<Self> {
        fs::create_dir_all(&dir).await?;
        info!("Upload directory: {}", dir.display());
        Ok(Self {
            dir,
            public_prefix: public_prefix.into(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ImageStore for DiskImageStore {
    async fn save(&self, original_name: &str, data: Bytes) -> Result<String> {
        let token = Uuid::new_v4().simple().to_string();
        let name = stored_file_name(
            chrono::Utc::now().timestamp_millis(),
            &token[..12],
            original_name,
        );
        let path = self.dir.join(&name);

        // create_new: never replace an image another listing points at
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(&data).await?;
        file.flush().await?;
        info!("Stored upload {} ({} bytes)", path.display(), data.len());

        Ok(format!("{}/{}", self.public_prefix.trim_end_matches('/'), name))
    }
}

/// `<millis>-<token>-<name>` with every whitespace run collapsed to `_`. Any
/// directory part of the client-supplied name is dropped.
pub fn stored_file_name(millis: i64, token: &str, original_name: &str) -> String {
    let base = original_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .filter(|b| !b.is_empty() && *b != "." && *b != "..")
        .unwrap_or("upload");

    let mut name = format!("{millis}-{token}-");
    let mut in_space = false;
    for ch in base.chars() {
        if ch.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(ch);
            in_space = false;
        }
    }
    name
}
