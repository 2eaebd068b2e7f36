//! CLI entry point: fetch a parameter path and print it.

use clap::{Parser, ValueEnum};
use ssm_params::{Config, Parameter, SsmClient};
use std::collections::{BTreeMap, HashMap};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ssm-params")]
#[command(about = "Fetch every SSM parameter under a path", long_about = None)]
struct Cli {
    /// Path prefix to fetch (e.g. /myapp/db)
    #[arg(value_name = "PATH")]
    path: String,

    /// AWS region
    #[arg(short, long, env = "AWS_REGION", default_value = "us-east-1")]
    region: String,

    /// Credential profile (default chain when omitted)
    #[arg(short, long, default_value = "")]
    profile: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Only fetch parameters directly under PATH
    #[arg(long, default_value_t = false)]
    no_recursive: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Pretty JSON object
    Json,
    /// KEY=value lines
    Env,
    /// Name, type and version per parameter
    List,
}

fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // reads RUST_LOG
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ssm_params::Result<String> {
    let config = Config::from_env(cli.region, cli.profile).with_recursive(!cli.no_recursive);
    let client = SsmClient::new(config).await?;

    match cli.format {
        Format::Json => {
            let params = client.get_parameters_by_path(&cli.path).await?;
            render_json(&params)
        }
        Format::Env => {
            let params = client.get_parameters_by_path(&cli.path).await?;
            Ok(render_env(&params))
        }
        Format::List => {
            let params = client.get_parameter_list(&cli.path).await?;
            Ok(render_list(params))
        }
    }
}

fn render_json(params: &HashMap<String, String>) -> ssm_params::Result<String> {
    let sorted: BTreeMap<&String, &String> = params.iter().collect();
    Ok(format!("{}\n", serde_json::to_string_pretty(&sorted)?))
}

fn render_env(params: &HashMap<String, String>) -> String {
    let sorted: BTreeMap<String, &String> = params
        .iter()
        .map(|(key, value)| (env_key(key), value))
        .collect();

    sorted
        .into_iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect()
}

fn render_list(mut params: Vec<Parameter>) -> String {
    params.sort_by(|a, b| a.name.cmp(&b.name));
    params
        .iter()
        .map(|p| format!("{}\t{}\t{}\n", p.name, p.param_type, p.version))
        .collect()
}

/// `db/pool-size` -> `DB_POOL_SIZE`
fn env_key(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '/' | '-' | '.' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}
