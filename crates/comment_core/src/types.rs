//! Request/response DTOs for the HTTP API.
//!
//! Field names stay camelCase on the wire (`userStyle`, `voiceProfile`) so the
//! JSON contract matches what the browser extension already sends.

use serde::{Deserialize, Serialize};

/// A user-supplied style, either a bare profile string or a full
/// `{name, profile}` pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum UserStyle {
    Named { name: String, profile: String },
    Profile(String),
}

impl UserStyle {
    /// The profile text the generator should follow.
    pub fn profile(&self) -> &str {
        match self {
            UserStyle::Named { profile, .. } => profile,
            UserStyle::Profile(profile) => profile,
        }
    }
}

/// Body of `POST /api/comment`.
///
/// Exactly one of two flows runs per request: draft enhancement when `draft`
/// is present, otherwise summarize-then-comment over `content`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_style: Option<UserStyle>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub regenerate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<String>>,
}

/// Body of a successful `POST /api/comment` response.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    /// Empty string in draft mode.
    pub summary: String,
    pub comment: String,
    /// Always `None` today: the endpoint never echoes the caller's style back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_profile: Option<String>,
}

/// Body of `POST /api/voice-profile`. Exactly one of the two fields must be
/// present.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VoiceProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<String>>,
}

/// A derived voice: short display name plus the behavioral profile text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VoiceProfileResult {
    pub name: String,
    pub profile: String,
}

/// Wrapper for the voice-profile endpoint's success payload.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VoiceProfileResponse {
    pub voice_profile: VoiceProfileResult,
}

/// Error payload shared by both endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_style_accepts_bare_string() {
        let style: UserStyle = serde_json::from_str("\"dry and skeptical\"").unwrap();
        assert_eq!(style.profile(), "dry and skeptical");
    }

    #[test]
    fn user_style_accepts_named_profile() {
        let style: UserStyle =
            serde_json::from_str(r#"{"name":"Dry","profile":"short, skeptical"}"#).unwrap();
        assert_eq!(style.profile(), "short, skeptical");
    }

    #[test]
    fn comment_request_uses_camel_case() {
        let req: CommentRequest = serde_json::from_str(
            r#"{"content":"hello world!","userStyle":"warm","regenerate":true}"#,
        )
        .unwrap();
        assert_eq!(req.content.as_deref(), Some("hello world!"));
        assert!(req.regenerate);
        assert!(req.draft.is_none());
    }

    #[test]
    fn voice_profile_is_omitted_when_absent() {
        let res = CommentResponse {
            summary: "s".into(),
            comment: "c".into(),
            voice_profile: None,
        };
        let json = serde_json::to_value(&res).unwrap();
        assert!(json.get("voiceProfile").is_none());
    }
}
