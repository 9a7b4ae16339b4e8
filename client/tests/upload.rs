use async_trait::async_trait;
use be_client::{
    GalleryOutcome, MediaFile, MediaUpload, ProgressFn, ProviderError, UploadConfig, UploadError,
    Uploader,
};
use be_core::{BlockBody, BlockKind, Session, Theme};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn image_file(name: &str) -> MediaFile {
    MediaFile {
        filename: name.into(),
        content_type: "image/jpeg".into(),
        bytes: vec![0u8; 128],
    }
}

fn fast_config() -> UploadConfig {
    UploadConfig {
        backoff_base: Duration::from_millis(10),
        ..UploadConfig::default()
    }
}

/// Fails a configurable number of times before succeeding; counts calls.
struct FlakyUpload {
    failures: u32,
    calls: AtomicU32,
}

impl FlakyUpload {
    fn new(failures: u32) -> Self {
        Self {
            failures,
            calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl MediaUpload for FlakyUpload {
    async fn upload_image(&self, file: &MediaFile) -> Result<String, ProviderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.failures {
            return Err(ProviderError::new(format!("quota exceeded (attempt {call})")));
        }
        Ok(format!("https://cdn.example/{}", file.filename))
    }

    async fn upload_video(
        &self,
        file: &MediaFile,
        progress: &ProgressFn,
    ) -> Result<String, ProviderError> {
        progress(50);
        progress(100);
        self.upload_image(file).await
    }
}

#[tokio::test(start_paused = true)]
async fn terminal_failure_surfaces_last_provider_message() {
    let client = Arc::new(FlakyUpload::new(u32::MAX));
    let uploader = Uploader::with_config(client.clone(), fast_config());

    let mut session = Session::new();
    let index = session.insert_block(BlockKind::Image);

    let result = uploader
        .upload_image(&image_file("reef.jpg"), &CancellationToken::new())
        .await;
    match result {
        Err(UploadError::Provider(message)) => {
            assert_eq!(message, "quota exceeded (attempt 3)");
            session.record_error(message);
        }
        other => panic!("expected provider error, got {other:?}"),
    }

    assert_eq!(client.calls.load(Ordering::SeqCst), 3);
    // The block being edited keeps its previous (empty) url.
    let BlockBody::Image { url, .. } = &session.blocks[index].body else {
        panic!("expected image block");
    };
    assert!(url.is_empty());
    assert_eq!(session.last_error(), Some("quota exceeded (attempt 3)"));
}

#[tokio::test(start_paused = true)]
async fn transient_failures_are_retried_to_success() {
    let client = Arc::new(FlakyUpload::new(2));
    let uploader = Uploader::with_config(client.clone(), fast_config());
    let url = uploader
        .upload_image(&image_file("beach.jpg"), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(url, "https://cdn.example/beach.jpg");
    assert_eq!(client.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn preflight_rejects_before_any_network_call() {
    let client = Arc::new(FlakyUpload::new(0));
    let uploader = Uploader::with_config(client.clone(), fast_config());
    let cancel = CancellationToken::new();

    let pdf = MediaFile {
        filename: "itinerary.pdf".into(),
        content_type: "application/pdf".into(),
        bytes: vec![0u8; 16],
    };
    assert!(matches!(
        uploader.upload_image(&pdf, &cancel).await,
        Err(UploadError::UnsupportedType(_))
    ));

    let huge = MediaFile {
        bytes: vec![0u8; 26 * 1024 * 1024],
        ..image_file("huge.jpg")
    };
    assert!(matches!(
        uploader.upload_image(&huge, &cancel).await,
        Err(UploadError::TooLarge { .. })
    ));

    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

/// Cancels the shared token during its first call, then fails.
struct CancellingUpload {
    token: CancellationToken,
    calls: AtomicU32,
}

#[async_trait]
impl MediaUpload for CancellingUpload {
    async fn upload_image(&self, _file: &MediaFile) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.token.cancel();
        Err(ProviderError::new("connection reset"))
    }

    async fn upload_video(
        &self,
        file: &MediaFile,
        _progress: &ProgressFn,
    ) -> Result<String, ProviderError> {
        self.upload_image(file).await
    }
}

#[tokio::test(start_paused = true)]
async fn cancellation_stops_the_retry_loop() {
    let token = CancellationToken::new();
    let client = Arc::new(CancellingUpload {
        token: token.clone(),
        calls: AtomicU32::new(0),
    });
    let uploader = Uploader::with_config(client.clone(), fast_config());
    let result = uploader.upload_image(&image_file("reef.jpg"), &token).await;
    assert_eq!(result, Err(UploadError::Cancelled));
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

/// Fails exactly the file named `bad.jpg`.
struct SelectiveUpload;

#[async_trait]
impl MediaUpload for SelectiveUpload {
    async fn upload_image(&self, file: &MediaFile) -> Result<String, ProviderError> {
        if file.filename == "bad.jpg" {
            return Err(ProviderError::new("corrupt file"));
        }
        Ok(format!("https://cdn.example/{}", file.filename))
    }

    async fn upload_video(
        &self,
        file: &MediaFile,
        _progress: &ProgressFn,
    ) -> Result<String, ProviderError> {
        self.upload_image(file).await
    }
}

#[tokio::test(start_paused = true)]
async fn gallery_fan_out_keeps_successes_in_order() {
    let uploader = Uploader::with_config(Arc::new(SelectiveUpload), fast_config());
    let files = vec![
        image_file("a.jpg"),
        image_file("bad.jpg"),
        image_file("c.jpg"),
    ];
    let GalleryOutcome { urls, first_error } = uploader
        .upload_gallery(&files, &CancellationToken::new())
        .await;
    assert_eq!(
        urls,
        vec![
            "https://cdn.example/a.jpg".to_string(),
            "https://cdn.example/c.jpg".to_string(),
        ]
    );
    assert!(matches!(first_error, Some(UploadError::Provider(_))));
}

#[tokio::test]
async fn video_upload_reports_progress() {
    let uploader = Uploader::with_config(Arc::new(FlakyUpload::new(0)), fast_config());
    let seen: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let progress = move |pct: u8| sink.lock().unwrap().push(pct);
    let file = MediaFile {
        filename: "tour.mp4".into(),
        content_type: "video/mp4".into(),
        bytes: vec![0u8; 1024],
    };
    let url = uploader
        .upload_video(&file, &progress, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(url, "https://cdn.example/tour.mp4");
    assert_eq!(*seen.lock().unwrap(), vec![50, 100]);

    // The returned url merges into the block through the session setter.
    let mut session =
        Session::from_parts(vec![be_core::Block::new(BlockKind::Video)], Theme::default());
    session.set_media_url(0, url).unwrap();
    let BlockBody::Video { url, .. } = &session.blocks[0].body else {
        panic!("expected video block");
    };
    assert_eq!(url, "https://cdn.example/tour.mp4");
}
