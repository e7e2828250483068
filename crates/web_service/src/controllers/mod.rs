pub mod comment_controller;
pub mod voice_profile_controller;
