//! Shape checks for inbound request bodies.
//!
//! Validation happens before any LLM call, so malformed requests fail with a
//! field-level message and never cost a provider round trip.

use comment_core::types::{CommentRequest, UserStyle, VoiceProfileRequest};

use crate::error::ApiError;

const MIN_CONTENT_CHARS: usize = 10;
const MIN_DESCRIPTION_CHARS: usize = 5;
const MAX_USER_STYLE_CHARS: usize = 1000;
const MAX_SAMPLES: usize = 10;

/// A comment request that passed shape checks, reduced to the one flow that
/// will run.
#[derive(Debug, Clone)]
pub enum CommentTask {
    /// Summarize `content`, then generate a comment from the summary.
    Generate {
        content: String,
        voice_profile: Option<String>,
        regenerate: bool,
    },
    /// Enhance an existing human-written draft. No summary is produced.
    Enhance {
        draft: String,
        voice_profile: Option<String>,
        regenerate: bool,
    },
}

/// Validate a [`CommentRequest`] and pick the flow. Draft presence selects
/// enhancement; otherwise content-based generation with its minimum length.
pub fn parse_comment_request(req: CommentRequest) -> Result<CommentTask, ApiError> {
    if let Some(style) = &req.user_style {
        if let UserStyle::Profile(text) = style {
            if text.chars().count() > MAX_USER_STYLE_CHARS {
                return Err(ApiError::Validation(format!(
                    "userStyle must be at most {MAX_USER_STYLE_CHARS} characters"
                )));
            }
        }
    }

    if let Some(samples) = &req.samples {
        if samples.len() > MAX_SAMPLES {
            return Err(ApiError::Validation(format!(
                "samples must contain at most {MAX_SAMPLES} entries"
            )));
        }
    }

    let voice_profile = req.user_style.as_ref().map(|s| s.profile().to_string());

    if let Some(draft) = req.draft {
        return Ok(CommentTask::Enhance {
            draft,
            voice_profile,
            regenerate: req.regenerate,
        });
    }

    let content = req.content.unwrap_or_default();
    if content.chars().count() < MIN_CONTENT_CHARS {
        return Err(ApiError::Validation(format!(
            "content must be at least {MIN_CONTENT_CHARS} characters"
        )));
    }

    Ok(CommentTask::Generate {
        content,
        voice_profile,
        regenerate: req.regenerate,
    })
}

/// Input to the voice-profile flow after validation.
#[derive(Debug, Clone)]
pub enum ProfileInput {
    Description(String),
    Samples(Vec<String>),
}

/// Validate a [`VoiceProfileRequest`]: exactly one of description/samples,
/// each within its bounds.
pub fn parse_voice_profile_request(req: VoiceProfileRequest) -> Result<ProfileInput, ApiError> {
    match (req.description, req.samples) {
        (Some(_), Some(_)) => Err(ApiError::Validation(
            "provide either description or samples, not both".to_string(),
        )),
        (None, None) => Err(ApiError::Validation(
            "either description or samples must be provided".to_string(),
        )),
        (Some(description), None) => {
            if description.chars().count() < MIN_DESCRIPTION_CHARS {
                return Err(ApiError::Validation(format!(
                    "description must be at least {MIN_DESCRIPTION_CHARS} characters"
                )));
            }
            Ok(ProfileInput::Description(description))
        }
        (None, Some(samples)) => {
            if samples.is_empty() || samples.len() > MAX_SAMPLES {
                return Err(ApiError::Validation(format!(
                    "samples must contain between 1 and {MAX_SAMPLES} entries"
                )));
            }
            Ok(ProfileInput::Samples(samples))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_request(content: &str) -> CommentRequest {
        CommentRequest {
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn content_shorter_than_minimum_is_rejected() {
        let err = parse_comment_request(content_request("too short")).unwrap_err();
        assert!(err.to_string().contains("at least 10 characters"));
    }

    #[test]
    fn content_at_minimum_is_accepted() {
        // Exactly 10 characters.
        let task = parse_comment_request(content_request("0123456789")).unwrap();
        assert!(matches!(task, CommentTask::Generate { .. }));
    }

    #[test]
    fn missing_content_without_draft_is_rejected() {
        let err = parse_comment_request(CommentRequest::default()).unwrap_err();
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn draft_presence_selects_enhancement_even_with_short_content() {
        let req = CommentRequest {
            content: Some("x".to_string()),
            draft: Some("my draft".to_string()),
            ..Default::default()
        };
        let task = parse_comment_request(req).unwrap();
        match task {
            CommentTask::Enhance { draft, .. } => assert_eq!(draft, "my draft"),
            other => panic!("expected enhance, got {other:?}"),
        }
    }

    #[test]
    fn user_style_profile_is_carried_through() {
        let req = CommentRequest {
            content: Some("long enough content".to_string()),
            user_style: Some(UserStyle::Named {
                name: "Dry".to_string(),
                profile: "short and skeptical".to_string(),
            }),
            regenerate: true,
            ..Default::default()
        };
        match parse_comment_request(req).unwrap() {
            CommentTask::Generate {
                voice_profile,
                regenerate,
                ..
            } => {
                assert_eq!(voice_profile.as_deref(), Some("short and skeptical"));
                assert!(regenerate);
            }
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn oversized_user_style_is_rejected() {
        let req = CommentRequest {
            content: Some("long enough content".to_string()),
            user_style: Some(UserStyle::Profile("x".repeat(1001))),
            ..Default::default()
        };
        assert!(parse_comment_request(req).is_err());
    }

    #[test]
    fn too_many_samples_are_rejected() {
        let req = CommentRequest {
            content: Some("long enough content".to_string()),
            samples: Some(vec![String::new(); 11]),
            ..Default::default()
        };
        assert!(parse_comment_request(req).is_err());
    }

    #[test]
    fn profile_request_requires_exactly_one_source() {
        let both = VoiceProfileRequest {
            description: Some("a voice".to_string()),
            samples: Some(vec!["s".to_string()]),
        };
        assert!(parse_voice_profile_request(both).is_err());

        let neither = VoiceProfileRequest::default();
        let err = parse_voice_profile_request(neither).unwrap_err();
        assert!(err.to_string().contains("must be provided"));
    }

    #[test]
    fn short_description_is_rejected_before_any_network_call() {
        let req = VoiceProfileRequest {
            description: Some("abcd".to_string()),
            samples: None,
        };
        let err = parse_voice_profile_request(req).unwrap_err();
        assert!(err.to_string().contains("at least 5 characters"));
    }

    #[test]
    fn sample_bounds_are_one_to_ten() {
        let empty = VoiceProfileRequest {
            description: None,
            samples: Some(vec![]),
        };
        assert!(parse_voice_profile_request(empty).is_err());

        let ten = VoiceProfileRequest {
            description: None,
            samples: Some(vec!["s".to_string(); 10]),
        };
        assert!(matches!(
            parse_voice_profile_request(ten).unwrap(),
            ProfileInput::Samples(s) if s.len() == 10
        ));
    }
}
