mod cli;

use reelpress::{config, encode, queue};
use reelpress_av::{Encoder, HandBrakeRunner};
use reelpress_common::paths::{is_video_file, video_extensions};
use reelpress_common::Movie;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            // Verbose mode: everything HandBrakeCLI prints shows up
            "reelpress=debug,reelpress_av=debug,handbrake=debug".to_string()
        } else {
            "reelpress=info,reelpress_av=info,handbrake=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compress { input, name } => {
            compress_file(&input, name.as_deref(), cli.config.as_deref())
        }
        Commands::Queue { file } => run_queue(&file, cli.config.as_deref()),
        Commands::CheckTools => check_tools(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("reelpress {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn build_encoder(config: &config::Config) -> Result<Encoder> {
    let runner = HandBrakeRunner::discover(
        config.tools.handbrake_path.as_deref(),
        config.tools.nice_path.as_deref(),
    )?;
    tracing::debug!(
        "Using {:?} (nice: {:?})",
        runner.handbrake(),
        runner.nice()
    );
    Ok(Encoder::new(runner))
}

fn compress_file(input: &Path, name: Option<&str>, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let movie = Movie::from_input(input, name)
        .with_context(|| format!("Not a file path: {:?}", input))?;

    if !reelpress_av::check_exists(&movie.path, &movie.filename) {
        anyhow::bail!("Input file does not exist: {:?}", input);
    }

    if movie.output_path() == movie.input_path() {
        anyhow::bail!(
            "Output {:?} would overwrite the input; pass --name to choose another name",
            movie.output_path()
        );
    }

    if !is_video_file(input) {
        tracing::warn!(
            "{:?} does not look like a rip (expected one of: {})",
            input,
            video_extensions().join(", ")
        );
    }

    let encoder = build_encoder(&config)?;

    if !encode::encode_movie(&encoder, &config.handbrake, &movie) {
        anyhow::bail!("Encoding {} failed", movie.moviename);
    }

    println!("Encoded: {}", movie.output_path().display());
    Ok(())
}

fn run_queue(file: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let movies = queue::load_queue(file)?;

    if movies.is_empty() {
        println!("Queue is empty, nothing to do.");
        return Ok(());
    }

    let encoder = build_encoder(&config)?;
    let summary = queue::run_queue(&encoder, &config.handbrake, &movies);

    println!("Encoded: {}", summary.succeeded.len());
    for name in &summary.succeeded {
        println!("  ✓ {}", name);
    }
    println!("Failed: {}", summary.failed.len());
    for name in &summary.failed {
        println!("  ✗ {}", name);
    }

    if !summary.all_succeeded() {
        anyhow::bail!("{} of {} movies failed", summary.failed.len(), movies.len());
    }

    Ok(())
}

fn check_tools(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    println!("Checking external tools...\n");

    let tools = reelpress_av::check_tools(
        config.tools.handbrake_path.as_deref(),
        config.tools.nice_path.as_deref(),
    );
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install them before encoding.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Nice: {}", config.handbrake.nice);
            println!("  HandBrake args: {}", config.handbrake.args.join(" "));
            if let Some(ref hb) = config.tools.handbrake_path {
                println!("  HandBrakeCLI: {}", hb.display());
            }
            if let Some(ref nice) = config.tools.nice_path {
                println!("  nice: {}", nice.display());
            }
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Nice: {}", config.handbrake.nice);
        }
    }

    Ok(())
}
