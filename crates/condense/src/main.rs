use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use condense_common::{logger, AppConfig};
use condense_llm::{
    ContentBlock, ConverseClient, ConverseRequest, InferenceClient, InferenceConfig, Message,
    SummaryStyle, Summarizer,
};
use std::io::Read;
use std::path::PathBuf;

mod input;
use input::{resolve_input, InputSource};

#[derive(Parser)]
#[command(name = "condense")]
#[command(about = "Content summarizer backed by a Converse-style inference endpoint", long_about = None)]
struct Cli {
    /// Summary style
    #[arg(long, value_enum, default_value = "bullet_points")]
    style: StyleArg,

    /// Path to input file (PDF or text file)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Read input from stdin (e.g., cat notes.txt | condense --stdin)
    #[arg(long)]
    stdin: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "snake_case")]
enum StyleArg {
    Brief,
    Detailed,
    BulletPoints,
    Executive,
}

impl From<StyleArg> for SummaryStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Brief => Self::Brief,
            StyleArg::Detailed => Self::Detailed,
            StyleArg::BulletPoints => Self::BulletPoints,
            StyleArg::Executive => Self::Executive,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive web UI
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8080")]
        port: u16,
    },

    /// Verify endpoint connectivity with a tiny test call
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            // CLI arguments override environment configuration
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());

            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("Condense starting...");
            tracing::info!("  Model: {}", config.model_id);
            tracing::info!("  Endpoint: {}", config.endpoint_url());

            println!("Server listening on http://{}", config.server_bind_address());
            condense_server::start_server(config).await?;
        }
        Some(Commands::Check) => {
            let config = AppConfig::from_env()?;
            logger::setup_console_logging(&config.log_level)?;
            run_check(&config).await;
        }
        None => {
            let config = AppConfig::from_env()?;
            logger::setup_console_logging(&config.log_level)?;
            run_summarize(&cli, &config).await?;
        }
    }

    Ok(())
}

/// One-shot summarization from stdin or a file
async fn run_summarize(cli: &Cli, config: &AppConfig) -> Result<()> {
    let source = match resolve_input(cli.stdin, cli.file.as_deref()) {
        Some(source) => source,
        None => {
            eprintln!("Please provide either --stdin or --file");
            std::process::exit(1);
        }
    };

    // Resolve input fully before touching the endpoint
    enum Resolved {
        Text(String),
        Pdf(Vec<u8>),
    }

    let resolved = match source {
        InputSource::Stdin => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            if text.trim().is_empty() {
                eprintln!("No input received from stdin.");
                std::process::exit(1);
            }
            Resolved::Text(text)
        }
        InputSource::TextFile(path) => Resolved::Text(std::fs::read_to_string(path)?),
        InputSource::Pdf(path) => Resolved::Pdf(std::fs::read(path)?),
    };

    let client = ConverseClient::from_config(config)?;
    let summarizer = Summarizer::new(client, config.model_id.clone());
    let style = cli.style.into();

    let summary = match resolved {
        Resolved::Text(text) => summarizer.summarize_text(&text, style).await?,
        Resolved::Pdf(bytes) => summarizer.summarize_pdf(&bytes, style, None).await?,
    };

    println!("\n--- SUMMARY ---\n");
    println!("{}", summary);

    Ok(())
}

/// Print the configuration and issue one tiny converse call
async fn run_check(config: &AppConfig) {
    println!("Checking endpoint configuration...\n");
    println!("Region: {}", config.region);
    println!("Model ID: {}", config.model_id);
    println!("Endpoint: {}\n", config.endpoint_url());

    let client = match ConverseClient::from_config(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            std::process::exit(1);
        }
    };

    let request = ConverseRequest {
        messages: vec![Message::user(vec![ContentBlock::Text(
            "Say 'OK' if you can read this.".to_string(),
        )])],
        inference_config: InferenceConfig {
            max_tokens: 10,
            temperature: 0.0,
        },
    };

    match client.converse(&config.model_id, request).await {
        Ok(reply) => {
            println!("Converse call successful!");
            println!("Model replied: {}", reply);
        }
        Err(e) => {
            eprintln!("Converse call failed: {}", e);
            std::process::exit(1);
        }
    }
}
