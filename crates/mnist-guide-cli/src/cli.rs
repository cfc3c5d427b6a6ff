//! Command line definition

use clap::{value_parser, Arg, ArgAction, Command};
use mnist_guide_core::RenderFormat;
use std::path::PathBuf;

/// Build the `mnist-guide` command
pub(crate) fn command() -> Command {
    Command::new("mnist-guide")
        .version(mnist_guide_core::VERSION)
        .about("Guided walkthrough of precomputed MNIST PCA / t-SNE artifacts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Artifact directory (overrides the config file)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("render")
                .about("Render the guide page")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("Write to file instead of stdout"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("html")
                        .value_parser(value_parser!(RenderFormat))
                        .help("Output format: html or text"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report which artifacts are present")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}
