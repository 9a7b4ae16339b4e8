use crate::ProviderError;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// One binary picked in a file dialog, plus what the browser knew about it.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub type ProgressFn = dyn Fn(u8) + Send + Sync;

/// External upload services turning a binary into a hosted URL. Image and
/// video uploads are separate endpoints with separate ceilings; only video
/// reports progress.
#[async_trait]
pub trait MediaUpload: Send + Sync {
    async fn upload_image(&self, file: &MediaFile) -> Result<String, ProviderError>;
    async fn upload_video(
        &self,
        file: &MediaFile,
        progress: &ProgressFn,
    ) -> Result<String, ProviderError>;
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("{filename} is {size} bytes, over the {limit} byte limit")]
    TooLarge {
        filename: String,
        size: usize,
        limit: usize,
    },
    #[error("unsupported content type: {0}")]
    UnsupportedType(String),
    #[error("{0}")]
    Provider(String),
    #[error("upload cancelled")]
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_image_bytes: usize,
    pub max_video_bytes: usize,
    /// Total tries per file, not extra retries.
    pub attempts: u32,
    /// Linear backoff: attempt n sleeps n * base before the next try.
    pub backoff_base: Duration,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: 25 * 1024 * 1024,
            max_video_bytes: 200 * 1024 * 1024,
            attempts: 3,
            backoff_base: Duration::from_millis(500),
        }
    }
}

/// Outcome of a gallery fan-out: every URL that made it, in input order,
/// plus the first failure if any. Successes are never discarded because a
/// sibling failed.
#[derive(Debug)]
pub struct GalleryOutcome {
    pub urls: Vec<String>,
    pub first_error: Option<UploadError>,
}

/// Upload front-end: preflight checks, bounded retry with linear backoff,
/// and a cancellation token per operation so an abandoned screen cannot
/// mutate state later.
pub struct Uploader {
    client: Arc<dyn MediaUpload>,
    config: UploadConfig,
}

impl Uploader {
    pub fn new(client: Arc<dyn MediaUpload>) -> Self {
        Self::with_config(client, UploadConfig::default())
    }

    pub fn with_config(client: Arc<dyn MediaUpload>, config: UploadConfig) -> Self {
        Self { client, config }
    }

    pub async fn upload_image(
        &self,
        file: &MediaFile,
        cancel: &CancellationToken,
    ) -> Result<String, UploadError> {
        preflight(file, "image/", self.config.max_image_bytes)?;
        self.with_retry(cancel, || self.client.upload_image(file))
            .await
    }

    pub async fn upload_video(
        &self,
        file: &MediaFile,
        progress: &ProgressFn,
        cancel: &CancellationToken,
    ) -> Result<String, UploadError> {
        preflight(file, "video/", self.config.max_video_bytes)?;
        self.with_retry(cancel, || self.client.upload_video(file, progress))
            .await
    }

    /// Fan out one upload per file concurrently and join. Order of `urls`
    /// follows the input order of the files that succeeded.
    pub async fn upload_gallery(
        &self,
        files: &[MediaFile],
        cancel: &CancellationToken,
    ) -> GalleryOutcome {
        let uploads = files.iter().map(|file| self.upload_image(file, cancel));
        let results = futures::future::join_all(uploads).await;
        let mut urls = Vec::new();
        let mut first_error = None;
        for result in results {
            match result {
                Ok(url) => urls.push(url),
                Err(err) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }
        GalleryOutcome { urls, first_error }
    }

    async fn with_retry<F, Fut>(
        &self,
        cancel: &CancellationToken,
        mut try_once: F,
    ) -> Result<String, UploadError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<String, ProviderError>>,
    {
        let mut last_error = String::new();
        for attempt in 1..=self.config.attempts {
            let result = tokio::select! {
                _ = cancel.cancelled() => return Err(UploadError::Cancelled),
                result = try_once() => result,
            };
            match result {
                Ok(url) => {
                    debug!(attempt, %url, "upload succeeded");
                    return Ok(url);
                }
                Err(err) => {
                    warn!(attempt, %err, "upload attempt failed");
                    last_error = err.0;
                }
            }
            if attempt < self.config.attempts {
                let backoff = self.config.backoff_base * attempt;
                tokio::select! {
                    _ = cancel.cancelled() => return Err(UploadError::Cancelled),
                    _ = tokio::time::sleep(backoff) => {}
                }
            }
        }
        Err(UploadError::Provider(last_error))
    }
}

fn preflight(file: &MediaFile, prefix: &str, limit: usize) -> Result<(), UploadError> {
    if !file.content_type.starts_with(prefix) {
        return Err(UploadError::UnsupportedType(file.content_type.clone()));
    }
    if file.bytes.len() > limit {
        return Err(UploadError::TooLarge {
            filename: file.filename.clone(),
            size: file.bytes.len(),
            limit,
        });
    }
    Ok(())
}
