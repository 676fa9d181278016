//! Prelude re-exporting the most commonly used types.

pub use crate::api::{ApiClient, ApiError};
pub use crate::app::messages::{AppMessage, Effect, ViewEvent};
pub use crate::app::App;
pub use crate::models::{
    Achievement, ChatMessage, Lesson, Progress, Quality, Quiz, ReviewCard, Skill,
};
pub use crate::router::{History, Route};
pub use crate::storage::Storage;
pub use crate::ui::render;
pub use crate::views::{View, ViewContext};
