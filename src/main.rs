use aalekhan::{BuildArgs, Command, Config, ReplayArgs};
use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    match config.command {
        Command::Build(args) => build(args),
        Command::Replay(args) => replay(args),
    }
}

fn build(args: BuildArgs) -> Result<()> {
    let year = args.resolved_year();
    info!(output = %args.output.display(), url = %args.url, year, "Building site");

    let site = aalekhan::generate_site(&args.output, &args.url, year)
        .context("Failed to generate site")?;

    println!("Generated: {}", site.index.display());
    println!("Assets: {}", site.assets.display());

    if args.open
        && let Err(e) = open::that(&site.index)
    {
        warn!("Failed to open browser: {:#}", e);
    }

    Ok(())
}

fn replay(args: ReplayArgs) -> Result<()> {
    let script = aalekhan::load_script(&args.script)?;
    info!(events = script.events.len(), scope = ?args.scope, "Replaying event script");

    for step in aalekhan::replay(&script, args.scope.into()) {
        let line = serde_json::to_string(&step).context("Failed to serialize replay step")?;
        println!("{}", line);
    }

    Ok(())
}
