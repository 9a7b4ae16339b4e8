mod css;
mod embed;
mod html;

pub use css::*;
pub use embed::*;
pub use html::*;
