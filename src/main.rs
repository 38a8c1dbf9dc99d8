mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use qtc_wrap::{build_args, find_template_files, validate, Qtc};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let qtc = Qtc::with_program(&cli.qtc);
    if cli.tool_version {
        let version = qtc.version().context("Could not query the qtc version")?;
        println!("{version}");
        return Ok(());
    }

    let config = cli.to_config();
    if !cli.no_validate {
        validate(&config).context("Invalid options")?;
    }

    if cli.list {
        let files = find_template_files(&config.dir, config.effective_ext())
            .with_context(|| format!("Could not list templates in {:?}", config.dir))?;
        for file in &files {
            println!("{}", file.display());
        }
        info!(count = files.len(), dir = %config.dir, "templates found");
        return Ok(());
    }

    info!(args = ?build_args(&config), "compiling templates");
    qtc.compile(&config).context("qtc run failed")?;
    Ok(())
}

fn init_tracing(quiet: bool) {
    let fallback = if quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
