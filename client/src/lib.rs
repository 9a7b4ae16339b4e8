mod api;
mod upload;

pub use api::*;
pub use upload::*;

/// Terminal error text from an external collaborator. Providers speak in
/// human-readable strings; the typed layers wrap this.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
