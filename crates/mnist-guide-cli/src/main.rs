use anyhow::Context;
use clap::ArgMatches;
use mnist_guide_core::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode {
    let matches = cli::command().get_matches();
    let Some((name, args)) = matches.subcommand() else {
        return ExitCode::FAILURE;
    };

    init_tracing(args.get_flag("verbose"));

    let result = match name {
        "render" => render(args),
        "check" => check(args),
        _ => unreachable!("subcommand_required"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("mnist_guide=debug,mnist_guide_core=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("mnist_guide=info,mnist_guide_core=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &ArgMatches) -> anyhow::Result<GuideConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => GuideConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GuideConfig::new(),
    };
    if let Some(dir) = args.get_one::<PathBuf>("output-dir") {
        config = config.with_output_dir(dir);
    }
    config.validate()?;
    Ok(config)
}

fn render(args: &ArgMatches) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let format = args
        .get_one::<RenderFormat>("format")
        .copied()
        .unwrap_or_default();

    let page = build_guide(&config).context("building guide page")?;
    let output = format.renderer().render(&page);

    match args.get_one::<PathBuf>("out") {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), %format, "guide written");
        }
        None => print!("{output}"),
    }
    Ok(())
}

fn check(args: &ArgMatches) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let report = ArtifactReport::scan(&config.output_dir);

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.generate_text());
    }
    Ok(())
}
