use std::path::Path;

use tracing::{error, info};

/// Required environment variables with a hint of what each is for.
const REQUIRED_ENV_VARS: [(&str, &str); 8] = [
    ("OPENAI_API_KEY", "OpenAI API key for metadata and clustering"),
    ("YOUTUBE_API_KEY", "YouTube Data API v3 key for scoring"),
    ("ELEVENLABS_API_KEY", "ElevenLabs API key for voiceovers"),
    ("VOICE_ID", "ElevenLabs voice ID"),
    ("CANVA_API_KEY", "Canva API key for thumbnails"),
    ("CANVA_TEMPLATE_ID", "Canva template ID"),
    (
        "GOOGLE_SERVICE_ACCOUNT_FILE",
        "Path to Google service account JSON",
    ),
    ("SPREADSHEET_ID", "Target spreadsheet id"),
];

/// Check every external precondition and return the full list of problems.
/// Empty means the pipeline may start.
pub fn validate_environment(topics_file: &Path, data_dir: &Path) -> Vec<String> {
    let mut issues = Vec::new();

    for (var, description) in REQUIRED_ENV_VARS {
        match std::env::var(var) {
            Err(_) => issues.push(format!("Missing env var: {var} ({description})")),
            Ok(value) if var == "GOOGLE_SERVICE_ACCOUNT_FILE" => {
                if !Path::new(&value).exists() {
                    issues.push(format!("File not found: {value} (specified in {var})"));
                }
            }
            Ok(_) => {}
        }
    }

    if !topics_file.exists() {
        issues.push(format!(
            "Missing required file: {}",
            topics_file.display()
        ));
    }

    for dir in [
        data_dir.join("output/voiceovers"),
        data_dir.join("output/thumbnails"),
        data_dir.join("backups"),
    ] {
        if let Err(e) = std::fs::create_dir_all(&dir) {
            issues.push(format!("Cannot create directory {}: {e}", dir.display()));
        }
    }

    issues
}

/// Log the validation outcome; on failure print remediation hints and
/// return false so the caller can exit non-zero before any pipeline work.
pub fn report_validation(issues: &[String]) -> bool {
    if issues.is_empty() {
        info!("environment validation passed");
        return true;
    }

    error!("environment validation failed:");
    for issue in issues {
        error!("  {issue}");
    }
    error!("To fix:");
    error!("  1. Create a .env file with all required API keys");
    error!("  2. Create topics.json with trending_topics and search_prefixes");
    error!("  3. Obtain a Google service account JSON file");
    false
}
