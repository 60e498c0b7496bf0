use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rift_rewind_cli::output::{render_lookup_text, render_regions, OutputFormat};
use rift_rewind_lib::{
    LookupConfig, LookupRequest, RiotClient, SecretStore, SsmSecretStore, StaticSecretStore,
    SummonerLookup, DEFAULT_REGION, DEFAULT_TAG_LINE,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Riot summoner lookup utilities")]
struct Cli {
    /// Override the Riot API base URL template (must contain `{host}`).
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a summoner's level, icon, and top champion masteries.
    Lookup {
        /// Riot ID game name.
        #[arg(long)]
        name: String,
        /// Riot ID tag line.
        #[arg(long, default_value = DEFAULT_TAG_LINE)]
        tag: String,
        /// Platform region code (see `regions`).
        #[arg(long, default_value = DEFAULT_REGION)]
        region: String,
        /// Riot API key. Read from SSM when omitted.
        #[arg(long, env = "RIOT_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List supported platform regions and their routing clusters.
    Regions {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Lookup {
            name,
            tag,
            region,
            api_key,
            format,
        } => {
            handle_lookup(
                cli.api_base,
                &name,
                &tag,
                &region,
                api_key,
                format,
            )
            .await
        }
        Command::Regions { format } => handle_regions(format),
    }
}

async fn handle_lookup(
    api_base: Option<String>,
    name: &str,
    tag: &str,
    region: &str,
    api_key: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let request = LookupRequest::new(name, Some(tag), Some(region))?;

    let mut config = LookupConfig::from_env();
    if let Some(api_base) = api_base {
        config = config.with_api_base(api_base);
    }
    let riot = RiotClient::new(&config).context("failed to build HTTP client")?;

    let secrets: Box<dyn SecretStore> = match api_key {
        Some(key) => Box::new(StaticSecretStore::new(key)),
        None => Box::new(SsmSecretStore::from_env().await),
    };

    let result = SummonerLookup::new(&riot, secrets.as_ref())
        .run(&request)
        .await
        .with_context(|| {
            format!(
                "lookup failed for {}#{} in {}",
                request.game_name(),
                request.tag_line(),
                request.region()
            )
        })?;

    match format {
        OutputFormat::Text => print!("{}", render_lookup_text(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

fn handle_regions(format: OutputFormat) -> Result<()> {
    let rendered = render_regions(format).context("failed to render region table")?;
    match format {
        OutputFormat::Text => print!("{}", rendered),
        OutputFormat::Json => println!("{}", rendered),
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
