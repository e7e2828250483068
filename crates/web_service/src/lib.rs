pub mod controllers;
pub mod error;
pub mod server;
pub mod services;
pub mod validate;

pub use error::ApiError;
pub use server::{app_config, AppState};
pub use services::comment_service::CommentService;
