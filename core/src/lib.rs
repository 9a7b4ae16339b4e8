mod block;
mod commands;
mod document;
mod error;
pub mod legacy;
mod richtext;
mod session;
mod theme;
mod wire;

pub use block::*;
pub use commands::*;
pub use document::*;
pub use error::*;
pub use richtext::*;
pub use session::*;
pub use theme::*;
pub use wire::*;
