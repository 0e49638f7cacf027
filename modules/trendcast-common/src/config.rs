use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// `from_env` assumes startup validation already confirmed the required
/// vars exist; it panics with a clear message otherwise.
#[derive(Debug, Clone)]
pub struct Config {
    // Language model
    pub openai_api_key: String,

    // Keyword scoring
    pub youtube_api_key: String,

    // Voiceover
    pub elevenlabs_api_key: String,
    pub voice_id: String,

    // Thumbnails
    pub canva_api_key: String,
    pub canva_template_id: String,

    // Result sink
    pub service_account_file: PathBuf,
    pub spreadsheet_id: String,

    // Pipeline tunables
    pub keyword_limit: usize,
    pub schedule_time: String,
    pub topics_file: PathBuf,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: required_env("OPENAI_API_KEY"),
            youtube_api_key: required_env("YOUTUBE_API_KEY"),
            elevenlabs_api_key: required_env("ELEVENLABS_API_KEY"),
            voice_id: required_env("VOICE_ID"),
            canva_api_key: required_env("CANVA_API_KEY"),
            canva_template_id: required_env("CANVA_TEMPLATE_ID"),
            service_account_file: required_env("GOOGLE_SERVICE_ACCOUNT_FILE").into(),
            spreadsheet_id: required_env("SPREADSHEET_ID"),
            keyword_limit: env::var("KEYWORD_LIMIT")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .expect("KEYWORD_LIMIT must be a number"),
            schedule_time: env::var("SCHEDULE_TIME").unwrap_or_else(|_| "06:00".to_string()),
            topics_file: env::var("TOPICS_FILE")
                .unwrap_or_else(|_| "topics.json".to_string())
                .into(),
            data_dir: env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.data_dir.join("output")
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.data_dir.join("backups")
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
