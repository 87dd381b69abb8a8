use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};
use wm_core::ports::{ImageError, ImageStorePort};
use wm_core::ImageRef;

const FILE_PREFIX: &str = "img_";
const FILE_EXTENSION: &str = "jpg";
const NAME_ATTEMPTS: usize = 8;

/// Full-resolution recipe images as individual files in one directory.
pub struct FsImageStore {
    dir: PathBuf,
}

impl FsImageStore {
    /// Images are written directly under `dir`, which is created on first save.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, image_ref: &ImageRef) -> Result<PathBuf, ImageError> {
        validate_image_ref(image_ref.as_str())?;
        Ok(self.dir.join(image_ref.as_str()))
    }

    async fn write_new(&self, encoded: &[u8]) -> Result<ImageRef> {
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create image dir {}", self.dir.display()))?;

        for _ in 0..NAME_ATTEMPTS {
            let name = generate_file_name();
            let path = self.dir.join(&name);
            let file = match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(e).with_context(|| format!("create {}", path.display()));
                }
            };
            write_or_discard(file, &path, encoded).await?;
            return Ok(ImageRef::new(name));
        }

        anyhow::bail!("no free image file name after {NAME_ATTEMPTS} attempts")
    }
}

/// Write `encoded` through `writer`; on failure the file at `path` is removed
/// so no partial image is left behind.
async fn write_or_discard<W>(mut writer: W, path: &Path, encoded: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        writer.write_all(encoded).await?;
        writer.flush().await
    }
    .await;

    if let Err(e) = written {
        drop(writer);
        if let Err(rm) = fs::remove_file(path).await {
            warn!(path = %path.display(), error = %rm, "Failed to remove partial image");
        }
        return Err(e).with_context(|| format!("write {}", path.display()));
    }
    Ok(())
}

/// `img_` followed by eight hex characters taken from a random UUID.
fn generate_file_name() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{FILE_PREFIX}{}.{FILE_EXTENSION}", &id[..8])
}

/// A reference must name a single file inside the store directory.
fn validate_image_ref(name: &str) -> Result<(), ImageError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(ImageError::InvalidRef(name.to_string())),
    }
}

#[async_trait]
impl ImageStorePort for FsImageStore {
    async fn save_original(&self, encoded: &[u8]) -> Result<ImageRef, ImageError> {
        let image_ref = self
            .write_new(encoded)
            .await
            .map_err(|e| ImageError::Store(format!("{e:#}")))?;
        debug!(image_ref = %image_ref, bytes = encoded.len(), "Saved original image");
        Ok(image_ref)
    }

    async fn load_original(&self, image_ref: &ImageRef) -> Result<Option<Vec<u8>>, ImageError> {
        let path = self.path_for(image_ref)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ImageError::Store(format!("read {}: {e}", path.display()))),
        }
    }

    async fn delete_original(&self, image_ref: &ImageRef) -> Result<(), ImageError> {
        let path = self.path_for(image_ref)?;
        fs::remove_file(&path)
            .await
            .map_err(|e| ImageError::Store(format!("remove {}: {e}", path.display())))?;
        debug!(image_ref = %image_ref, "Deleted original image");
        Ok(())
    }
}
