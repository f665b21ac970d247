mod config;
mod converters;
mod describer;
mod error;
mod image;
mod llm_client;
mod logging;
mod message;
mod models;
mod request_id;
#[cfg(test)]
mod test_fixtures;

use clap::Parser;
use config::{ApiType, Config};
use describer::Describer;
use error::DescribeError;
use models::Description;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "vision-describer")]
#[command(about = "Ask a local Ollama vision model to describe an image")]
struct Args {
    /// Image path or http(s) URL to describe, overrides the configured one
    image: Option<String>,

    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    model: Option<String>,

    /// Base address of the inference server, example: http://localhost:11434
    #[arg(long)]
    api_base: Option<String>,

    #[arg(long, value_enum)]
    api_type: Option<ApiType>,

    #[arg(long)]
    api_key: Option<String>,

    #[arg(short, long)]
    prompt: Option<String>,

    /// socks and http proxy, example: socks5://192.168.0.2:10080
    #[arg(long)]
    proxy: Option<String>,

    /// trace, debug, info, warn, error
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the whole response record as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    /// defaults < config file < environment < flags
    fn load_config(&self, env: impl Fn(&str) -> Option<String>) -> Result<Config, DescribeError> {
        let config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        let mut config = config.apply_env(env)?;

        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(api_base) = &self.api_base {
            config.api_base = api_base.clone();
        }
        if let Some(api_type) = self.api_type {
            config.api_type = api_type;
        }
        if let Some(api_key) = &self.api_key {
            config.api_key = Some(api_key.clone());
        }
        if let Some(prompt) = &self.prompt {
            config.prompt = prompt.clone();
        }
        if let Some(proxy) = &self.proxy {
            config.proxy = Some(proxy.clone());
        }
        if let Some(image) = &self.image {
            config.image = image.clone();
        }
        Ok(config)
    }
}

async fn run(args: &Args) -> Result<Description, DescribeError> {
    let config = args.load_config(|key| std::env::var(key).ok())?;
    let describer = Describer::new(config)?;
    info!(
        "Describing {} with {} via {} ({})",
        describer.config().image,
        describer.config().model,
        describer.config().api_base,
        describer.config().api_type
    );

    describer.describe().await
}

fn render(description: Description, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&description)?)
    } else {
        Ok(description.text)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = logging::parse_level(&args.log_level);
    if let Err(e) = logging::init_logging(log_level, args.log_file.as_deref()) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&args).await {
        Ok(description) => match render(description, args.json) {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error (output): {:#}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("{} failed: {}", e.stage(), e);
            eprintln!("error ({}): {}", e.stage(), e);
            ExitCode::from(e.exit_code())
        }
    }
}
