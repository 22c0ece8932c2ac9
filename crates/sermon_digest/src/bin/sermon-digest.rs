use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use sermon_digest::{
    server::router, tracing::init_tracing_subscriber, yt::client::YtTranscriptClient,
    GeminiClient, SermonProcessor, SermonProcessorBuilder,
};

#[derive(Parser)]
#[command(name = "sermon-digest", about = "Sermon transcript topic and scripture extractor")]
struct Cli {
    /// Google AI Studio API key used for Gemini
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    google_api_key: Option<String>,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", default_value = GeminiClient::DEFAULT_MODEL)]
    model: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the analysis endpoint over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
        bind: SocketAddr,
    },
    /// Analyze a single video and print the JSON result
    Analyze {
        /// YouTube video URL
        url: String,
    },
}

#[derive(Clone)]
struct Config {
    google_api_key: Option<String>,
    model: String,
}

fn build_processor(config: &Config) -> SermonProcessor<YtTranscriptClient, GeminiClient> {
    if config.google_api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY not found in environment; analysis requests will fail");
    }

    let model = GeminiClient::init(config.google_api_key.clone(), &config.model)
        .inspect(|_| tracing::info!(model = %config.model, "Initialized Gemini model"))
        .inspect_err(|e| tracing::error!(error = %e, "Failed to initialize Gemini model"))
        .ok();

    SermonProcessorBuilder::new()
        .transcript_provider(YtTranscriptClient::default())
        .language_model(model)
        .build()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = Config {
        google_api_key: cli.google_api_key,
        model: cli.model,
    };
    let processor = build_processor(&config);

    match cli.command {
        Command::Serve { bind } => {
            let listener = tokio::net::TcpListener::bind(bind)
                .await
                .with_context(|| format!("Failed to bind {bind}"))?;
            tracing::info!(%bind, "Serving sermon analysis");

            axum::serve(listener, router(Arc::new(processor))).await?;
        }
        Command::Analyze { url } => {
            let result = processor.analyze(&url).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
