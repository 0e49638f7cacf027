use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trendcast_common::Config;
use trendcast_pipeline::analyzer::{Analyzer, LlmClusterer, YouTubeCompetition};
use trendcast_pipeline::content::{CanvaThumbnails, ElevenLabsVoiceover, LlmMetadata};
use trendcast_pipeline::explorer::KeywordExplorer;
use trendcast_pipeline::pipeline::Pipeline;
use trendcast_pipeline::scheduler::DailyTrigger;
use trendcast_pipeline::sink::{ResultSink, SheetSink};
use trendcast_pipeline::startup;

const CHAT_MODEL: &str = "gpt-3.5-turbo";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("trendcast=info".parse()?))
        .init();

    info!("Trendcast starting...");

    // Validate every external precondition before any pipeline work.
    let topics_file = std::env::var("TOPICS_FILE").unwrap_or_else(|_| "topics.json".to_string());
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let issues =
        startup::validate_environment(std::path::Path::new(&topics_file), std::path::Path::new(&data_dir));
    if !startup::report_validation(&issues) {
        std::process::exit(1);
    }

    let config = Config::from_env();

    let ai = ai_client::OpenAi::new(&config.openai_api_key, CHAT_MODEL);

    let analyzer = Analyzer::new(
        Arc::new(LlmClusterer::new(ai.clone())),
        Arc::new(YouTubeCompetition::new(&config.youtube_api_key)),
    );

    let voiceover = ElevenLabsVoiceover::new(
        elevenlabs_client::ElevenLabsClient::new(&config.elevenlabs_api_key),
        &config.voice_id,
        &config.output_dir(),
    );

    let thumbnails = CanvaThumbnails::new(
        canva_client::CanvaClient::new(&config.canva_api_key),
        &config.canva_template_id,
        &config.output_dir(),
    );

    let sink = ResultSink::new(
        Arc::new(SheetSink::new(
            &config.service_account_file,
            &config.spreadsheet_id,
        )),
        &config.backup_dir(),
    );

    let pipeline = Pipeline::new(
        Arc::new(suggest_client::SuggestClient::new()),
        KeywordExplorer::with_defaults(),
        analyzer,
        Arc::new(LlmMetadata::new(ai)),
        Arc::new(voiceover),
        Arc::new(thumbnails),
        sink,
        config.topics_file.clone(),
        config.keyword_limit,
    );

    // Immediate first run, then the daily trigger loop.
    info!("running initial job");
    let report = pipeline.run().await;
    info!(?report, "initial run complete");

    let trigger = DailyTrigger::new(&config.schedule_time)?;
    trigger.run_forever(&pipeline).await;

    Ok(())
}
