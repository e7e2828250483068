//! Prompt templates.
//!
//! Pure functions from inputs to role-tagged turns. Nothing here touches the
//! network; the orchestrator feeds the result to a [`crate::CompletionClient`].

use crate::types::Turn;

/// Sampling temperatures per task. Summaries and profiles want determinism;
/// comments want variety (and "regenerate" leans on that variance).
pub const SUMMARIZE_TEMPERATURE: f32 = 0.2;
pub const PROFILE_TEMPERATURE: f32 = 0.2;
pub const COMMENT_TEMPERATURE: f32 = 0.45;
pub const ENHANCE_TEMPERATURE: f32 = 0.4;

const DEFAULT_VOICE_PROFILE: &str = "Neutral, clear, concise, professional tone";

const REGENERATE_CLAUSE: &str = "\nThis is a regeneration request: vary the wording and sentence \
                                 structure from any previous attempt while preserving the meaning \
                                 and the voice.";

/// Input to [`derive_voice_profile`]: either a free-text description of the
/// desired voice, or writing samples to infer it from.
pub enum ProfileSource<'a> {
    Description(&'a str),
    Samples(&'a [String]),
}

/// Joined samples are capped so a handful of long pastes cannot blow up the
/// prompt.
const SAMPLES_CAP_CHARS: usize = 12000;

/// Neutral 2-4 sentence summary of long-form content.
pub fn summarize(content: &str) -> Vec<Turn> {
    let user = format!(
        "Summarize the content below in 2\u{2013}4 sentences (30\u{2013}70 words).\n\
         \n\
         Rules:\n\
         - Do not hallucinate\n\
         - Do not add opinions\n\
         - Plain text only\n\
         \n\
         Content:\n{content}"
    );

    vec![
        Turn::system("You are a precise and neutral summarization assistant."),
        Turn::user(user),
    ]
}

/// Derive a named voice profile from a description or writing samples.
///
/// The output framing is load-bearing: the caller parses `NAME:` and
/// `PROFILE:` lines out of the raw completion (see
/// [`crate::parse_derived_profile`]).
pub fn derive_voice_profile(source: &ProfileSource<'_>) -> Vec<Turn> {
    let task = match source {
        ProfileSource::Description(description) => format!(
            "A user describes their desired writing voice as:\n\
             \n\
             \"{description}\"\n\
             \n\
             Convert this into a concise, concrete voice profile an AI can strictly follow when \
             writing comments."
        ),
        ProfileSource::Samples(samples) => {
            let combined: String = {
                let joined = samples.join("\n\n---\n\n");
                joined.chars().take(SAMPLES_CAP_CHARS).collect()
            };
            format!(
                "Analyze the following writing samples and infer a concise voice profile: tone, \
                 sentence length and structure, typical patterns (questions, reactions, \
                 directness).\n\
                 \n\
                 Do NOT quote the samples and do NOT mention them explicitly.\n\
                 \n\
                 Samples:\n{combined}"
            )
        }
    };

    let user = format!(
        "{task}\n\
         \n\
         The profile must be behavioral: mental stance, phrasing tendency, rhythm, and tone \
         toward the reader. 1\u{2013}2 sentences. Also invent a short display name of 3\u{2013}5 \
         words.\n\
         \n\
         Rules:\n\
         - Be specific\n\
         - Avoid vague adjectives\n\
         - Plain text only\n\
         \n\
         Answer in exactly this format, on separate lines:\n\
         NAME: <3-5 word name>\n\
         PROFILE: <1-2 sentence behavioral profile>"
    );

    vec![
        Turn::system("You generate concise, enforceable writing voice profiles."),
        Turn::user(user),
    ]
}

/// Short in-voice reaction to a summarized post.
pub fn generate_comment(summary: &str, voice_profile: Option<&str>, regenerate: bool) -> Vec<Turn> {
    let mut user = format!(
        "You are writing a short comment on a post.\n\
         \n\
         POST SUMMARY:\n{summary}\n\
         \n\
         VOICE PROFILE (STRICTLY FOLLOW):\n{profile}\n\
         \n\
         STYLE RULES:\n\
         - Actively express the voice profile in wording, tone, and sentence structure\n\
         - Avoid generic or corporate phrasing unless explicitly required\n\
         - Do NOT restate the summary\n\
         - Do NOT hedge or average the tone\n\
         \n\
         COMMENT REQUIREMENTS:\n\
         - 1\u{2013}4 sentences\n\
         - One clear reaction, insight, or reflection\n\
         - Optional question ONLY if it fits the voice\n\
         - Max 60 words\n\
         - Plain text only\n\
         - No emojis\n\
         - No hashtags\n\
         \n\
         TASK:\nWrite the comment now.",
        profile = voice_profile.unwrap_or(DEFAULT_VOICE_PROFILE),
    );
    if regenerate {
        user.push_str(REGENERATE_CLAUSE);
    }

    vec![
        Turn::system("You write concise, voice-accurate comments."),
        Turn::user(user),
    ]
}

/// Revise an existing human-written comment without adding content.
pub fn enhance_draft(draft: &str, voice_profile: Option<&str>, regenerate: bool) -> Vec<Turn> {
    let mut user = format!(
        "Revise the draft comment below for clarity and flow.\n\
         \n\
         DRAFT:\n{draft}\n\
         \n\
         VOICE PROFILE (STRICTLY FOLLOW):\n{profile}\n\
         \n\
         RULES:\n\
         - Keep the author's meaning; do NOT introduce new content or claims\n\
         - 1\u{2013}4 sentences, max 60 words\n\
         - Plain text only\n\
         - No emojis\n\
         - No hashtags\n\
         \n\
         TASK:\nWrite the revised comment now.",
        profile = voice_profile.unwrap_or(DEFAULT_VOICE_PROFILE),
    );
    if regenerate {
        user.push_str(REGENERATE_CLAUSE);
    }

    vec![
        Turn::system("You polish short comments without changing what they say."),
        Turn::user(user),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn assert_system_then_user(turns: &[Turn]) {
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::System);
        assert_eq!(turns[1].role, Role::User);
    }

    #[test]
    fn summarize_embeds_the_content() {
        let turns = summarize("the article text");
        assert_system_then_user(&turns);
        assert!(turns[1].text.contains("the article text"));
        assert!(turns[1].text.contains("Do not hallucinate"));
    }

    #[test]
    fn derive_requires_name_and_profile_framing() {
        let turns = derive_voice_profile(&ProfileSource::Description("dry and terse"));
        assert_system_then_user(&turns);
        assert!(turns[1].text.contains("dry and terse"));
        assert!(turns[1].text.contains("NAME:"));
        assert!(turns[1].text.contains("PROFILE:"));
    }

    #[test]
    fn derive_from_samples_joins_with_separator_and_caps() {
        let samples = vec!["first sample".to_string(), "second sample".to_string()];
        let turns = derive_voice_profile(&ProfileSource::Samples(&samples));
        assert!(turns[1].text.contains("first sample\n\n---\n\nsecond sample"));

        let huge = vec!["x".repeat(20000)];
        let turns = derive_voice_profile(&ProfileSource::Samples(&huge));
        assert!(turns[1].text.chars().count() < 13000);
    }

    #[test]
    fn comment_defaults_to_the_neutral_profile() {
        let turns = generate_comment("a summary", None, false);
        assert!(turns[1].text.contains("Neutral, clear, concise"));
        assert!(turns[1].text.contains("Do NOT restate the summary"));
        assert!(!turns[1].text.contains("regeneration request"));
    }

    #[test]
    fn regenerate_appends_the_variation_clause() {
        let base = generate_comment("s", Some("p"), false);
        let regen = generate_comment("s", Some("p"), true);
        assert!(regen[1].text.starts_with(&base[1].text));
        assert!(regen[1].text.contains("vary the wording"));

        let enhanced = enhance_draft("d", None, true);
        assert!(enhanced[1].text.contains("vary the wording"));
    }

    #[test]
    fn enhance_embeds_draft_and_forbids_new_content() {
        let turns = enhance_draft("my rough draft", Some("pirate tone"), false);
        assert_system_then_user(&turns);
        assert!(turns[1].text.contains("my rough draft"));
        assert!(turns[1].text.contains("pirate tone"));
        assert!(turns[1].text.contains("do NOT introduce new content"));
    }
}
