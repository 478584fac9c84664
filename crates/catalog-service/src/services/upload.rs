//! Upload service
//!
//! Persists uploaded images into the upload directory and reports the path
//! under which they are served.

use std::path::{Path, PathBuf};

use catalog_common::{StorageConfig, UploadNaming};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::ImageUploadResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Longest client extension kept on generated keys
const MAX_EXTENSION_LEN: usize = 10;

/// Local directory receiving uploaded files
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
    public_prefix: String,
    naming: UploadNaming,
}

impl UploadStore {
    /// Create a store writing into `root`, reporting paths as `<public_prefix>/<key>`
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>, naming: UploadNaming) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
            naming,
        }
    }

    /// Create a store from the storage configuration
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.upload_dir.clone(), config.public_prefix(), config.naming)
    }

    /// Directory files are written to
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn naming(&self) -> UploadNaming {
        self.naming
    }

    /// Create the upload directory if missing
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Choose the storage key for a file the client named `file_name`
    pub fn storage_key(&self, file_name: Option<&str>) -> ServiceResult<String> {
        match self.naming {
            UploadNaming::Generated => Ok(generated_key(file_name)),
            UploadNaming::Original => {
                let name = file_name
                    .ok_or_else(|| ServiceError::invalid_upload("Upload has no filename"))?;
                original_key(name)
            }
        }
    }

    /// Path returned to clients for a stored key
    pub fn public_path(&self, key: &str) -> String {
        format!("{}/{}", self.public_prefix, key)
    }

    /// Write `data` under `key`, replacing any file with the same key
    pub async fn write(&self, key: &str, data: &[u8]) -> ServiceResult<PathBuf> {
        let path = self.root.join(key);
        tokio::fs::write(&path, data)
            .await
            .map_err(ServiceError::Upload)?;
        Ok(path)
    }
}

fn final_component(name: &str) -> &str {
    name.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(name)
}

fn extension_of(name: &str) -> Option<&str> {
    let ext = Path::new(final_component(name)).extension()?.to_str()?;
    let acceptable = ext.len() <= MAX_EXTENSION_LEN && ext.bytes().all(|b| b.is_ascii_alphanumeric());
    (!ext.is_empty() && acceptable).then_some(ext)
}

fn generated_key(file_name: Option<&str>) -> String {
    let id = Uuid::new_v4();
    match file_name.and_then(extension_of) {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

fn original_key(name: &str) -> ServiceResult<String> {
    let base = final_component(name);
    if base.is_empty() || base == "." || base == ".." || base.contains('\0') {
        return Err(ServiceError::invalid_upload(format!(
            "Unusable filename: {name:?}"
        )));
    }
    Ok(base.to_string())
}

/// Upload service
pub struct UploadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UploadService<'a> {
    /// Create a new UploadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store an uploaded image and return its public path
    #[instrument(skip(self, data), fields(size = data.len()))]
    pub async fn store_image(
        &self,
        file_name: Option<&str>,
        data: &[u8],
    ) -> ServiceResult<ImageUploadResponse> {
        let store = self.ctx.upload_store();
        let key = store.storage_key(file_name)?;
        let path = store.write(&key, data).await?;

        info!(path = %path.display(), "Image stored");

        Ok(ImageUploadResponse {
            image_url: store.public_path(&key),
        })
    }
}
