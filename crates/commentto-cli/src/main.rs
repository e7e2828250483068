use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use comment_core::types::{
    CommentRequest, CommentResponse, ErrorResponse, UserStyle, VoiceProfileRequest,
    VoiceProfileResponse,
};
use comment_core::{VoiceRegistry, VoiceStore};
use extractor::{extract_page_text, ExtractorConfig, PageSnapshot};

/// Bounded wait for the backend; there is no retry, a timed-out call is
/// reported as a connectivity problem.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const BACKEND_DOWN_MESSAGE: &str = "Failed to generate comment. Is the backend running?";

#[derive(Parser)]
#[command(name = "commentto")]
#[command(about = "Generate voice-styled comments for page content")]
#[command(version)]
struct Cli {
    #[arg(long, default_value = "http://localhost:3000")]
    server_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize content and generate a comment in a voice
    Generate {
        /// Read content from a file instead of stdin
        #[arg(long, conflicts_with = "snapshot")]
        file: Option<PathBuf>,
        /// Run the extraction heuristic over a saved page snapshot (JSON)
        #[arg(long)]
        snapshot: Option<PathBuf>,
        /// Voice id or name (preset or custom)
        #[arg(long)]
        voice: Option<String>,
        /// Ask for a differently-phrased result for the same input
        #[arg(long, default_value = "false")]
        regenerate: bool,
    },
    /// Revise an existing draft comment for clarity and flow
    Enhance {
        /// The draft text
        draft: String,
        #[arg(long)]
        voice: Option<String>,
        #[arg(long, default_value = "false")]
        regenerate: bool,
    },
    /// Manage voices
    Voices {
        #[command(subcommand)]
        command: VoiceCommands,
    },
}

#[derive(Subcommand)]
enum VoiceCommands {
    /// List presets and custom voices
    List,
    /// Derive a new voice from a description and save it
    Create {
        /// Free-text description of the desired voice
        description: String,
    },
    /// Remove a custom voice (presets cannot be removed)
    Remove {
        /// Voice id
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            file,
            snapshot,
            voice,
            regenerate,
        } => generate(&cli.server_url, file, snapshot, voice, regenerate).await,
        Commands::Enhance {
            draft,
            voice,
            regenerate,
        } => enhance(&cli.server_url, &draft, voice, regenerate).await,
        Commands::Voices { command } => match command {
            VoiceCommands::List => list_voices(),
            VoiceCommands::Create { description } => {
                create_voice(&cli.server_url, &description).await
            }
            VoiceCommands::Remove { id } => remove_voice(&id),
        },
    }
}

fn open_registry() -> anyhow::Result<VoiceRegistry> {
    let store = VoiceStore::default_location()?;
    Ok(VoiceRegistry::open(store)?)
}

fn http_client() -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

/// Look up the user style for `--voice`, erroring on unknown names so a typo
/// does not silently fall back to the neutral default.
fn resolve_style(voice: Option<&str>) -> anyhow::Result<Option<UserStyle>> {
    let Some(voice) = voice else {
        return Ok(None);
    };
    let registry = open_registry()?;
    let found = registry
        .resolve(voice)
        .ok_or_else(|| anyhow::anyhow!("unknown voice: {voice}"))?;
    Ok(Some(UserStyle::Named {
        name: found.name.clone(),
        profile: found.profile.clone(),
    }))
}

fn read_content(file: Option<PathBuf>, snapshot: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = snapshot {
        let raw = std::fs::read_to_string(&path)?;
        let page: PageSnapshot = serde_json::from_str(&raw)?;
        return Ok(extract_page_text(&page, &ExtractorConfig::default()));
    }
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(&path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

async fn post_comment(server_url: &str, request: &CommentRequest) -> anyhow::Result<()> {
    let url = format!("{server_url}/api/comment");
    let response = match http_client()?.post(&url).json(request).send().await {
        Ok(response) => response,
        Err(_) => {
            println!("{}", BACKEND_DOWN_MESSAGE.red());
            return Ok(());
        }
    };

    if !response.status().is_success() {
        let error: ErrorResponse = response.json().await.unwrap_or(ErrorResponse {
            error: BACKEND_DOWN_MESSAGE.to_string(),
        });
        println!("{}", format!("Error: {}", error.error).red());
        return Ok(());
    }

    let result: CommentResponse = response.json().await?;
    if !result.summary.is_empty() {
        println!("{}", "Summary".cyan().bold());
        println!("{}\n", result.summary);
    }
    println!("{}", "Comment".cyan().bold());
    println!("{}", result.comment);
    Ok(())
}

async fn generate(
    server_url: &str,
    file: Option<PathBuf>,
    snapshot: Option<PathBuf>,
    voice: Option<String>,
    regenerate: bool,
) -> anyhow::Result<()> {
    let content = read_content(file, snapshot)?;
    if content.trim().is_empty() {
        println!("{}", "No page content found".red());
        return Ok(());
    }

    let request = CommentRequest {
        content: Some(content),
        user_style: resolve_style(voice.as_deref())?,
        regenerate,
        ..Default::default()
    };
    post_comment(server_url, &request).await
}

async fn enhance(
    server_url: &str,
    draft: &str,
    voice: Option<String>,
    regenerate: bool,
) -> anyhow::Result<()> {
    let request = CommentRequest {
        draft: Some(draft.to_string()),
        user_style: resolve_style(voice.as_deref())?,
        regenerate,
        ..Default::default()
    };
    post_comment(server_url, &request).await
}

fn list_voices() -> anyhow::Result<()> {
    let registry = open_registry()?;
    for voice in registry.list() {
        let tag = if voice.is_preset() {
            "preset".dimmed()
        } else {
            "custom".yellow()
        };
        println!("{} [{}] {}", voice.name.bold(), tag, voice.id.dimmed());
        println!("    {}", voice.profile);
    }
    Ok(())
}

async fn create_voice(server_url: &str, description: &str) -> anyhow::Result<()> {
    let url = format!("{server_url}/api/voice-profile");
    let request = VoiceProfileRequest {
        description: Some(description.to_string()),
        samples: None,
    };

    let response = match http_client()?.post(&url).json(&request).send().await {
        Ok(response) => response,
        Err(_) => {
            println!("{}", BACKEND_DOWN_MESSAGE.red());
            return Ok(());
        }
    };

    if !response.status().is_success() {
        let error: ErrorResponse = response.json().await?;
        println!("{}", format!("Error: {}", error.error).red());
        return Ok(());
    }

    let derived: VoiceProfileResponse = response.json().await?;
    let mut registry = open_registry()?;
    let voice = registry.add_custom(
        derived.voice_profile.name.clone(),
        derived.voice_profile.profile.clone(),
    )?;
    println!(
        "{} {} ({})",
        "Created voice".green(),
        voice.name.bold(),
        voice.id.dimmed()
    );
    println!("    {}", voice.profile);
    Ok(())
}

fn remove_voice(id: &str) -> anyhow::Result<()> {
    let mut registry = open_registry()?;
    if registry.remove(id)? {
        println!("{}", format!("Removed voice {id}").green());
    } else {
        println!(
            "{}",
            format!("Voice {id} was not removed (unknown or preset)").yellow()
        );
    }
    Ok(())
}
