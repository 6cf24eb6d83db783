//! Model execution interface: prompts, conversations and the [`Model`] trait.

mod error;
mod model;
mod types;

pub use error::GenerationError;
pub use model::{FragmentStream, Model};
pub use types::{Conversation, Exchange, Prompt};
