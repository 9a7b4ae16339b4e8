use crate::ProviderError;
use async_trait::async_trait;
use be_core::{PostDocument, Session, ValidationError};
use tracing::{info, warn};

/// The backend content API, injected so tests run against an in-memory
/// fake. Implementations own transport, auth and endpoints.
#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn fetch(&self, id: &str) -> Result<PostDocument, ProviderError>;
    async fn create(&self, doc: &PostDocument) -> Result<PostDocument, ProviderError>;
    async fn update(&self, id: &str, doc: &PostDocument) -> Result<PostDocument, ProviderError>;
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("save failed: {0}")]
    Api(#[from] ProviderError),
}

/// Validate and persist one document: create when it has no id yet, update
/// otherwise. No retry; a failed save is resubmitted explicitly by the user.
pub async fn save_post(api: &dyn ContentApi, doc: &PostDocument) -> Result<PostDocument, SaveError> {
    doc.validate()?;
    let stored = match &doc.id {
        Some(id) => api.update(id, doc).await?,
        None => api.create(doc).await?,
    };
    info!(id = ?stored.id, title = %stored.title, "post saved");
    Ok(stored)
}

/// Serialize the session body into `doc` and save it. On failure the error
/// message lands in the session's error slot and the in-memory block list is
/// left untouched for a retry.
pub async fn save_session(
    api: &dyn ContentApi,
    session: &mut Session,
    mut doc: PostDocument,
) -> Option<PostDocument> {
    doc.set_body(&session.blocks);
    doc.theme = session.theme.clone();
    match save_post(api, &doc).await {
        Ok(stored) => Some(stored),
        Err(err) => {
            warn!(%err, "save failed, keeping session state");
            session.record_error(err.to_string());
            None
        }
    }
}

/// Fetch a document and open an editing session over its decoded blocks.
pub async fn load_session(
    api: &dyn ContentApi,
    id: &str,
) -> Result<(PostDocument, Session), ProviderError> {
    let doc = api.fetch(id).await?;
    let session = Session::from_parts(doc.body_blocks(), doc.theme.clone());
    Ok((doc, session))
}
