// Wed Oct 14 2026 - Alex

use anyhow::Context;
use clap::{ArgAction, Parser};
use colored::Colorize;
use object_layout_examples::{config::Config, dispatch, runtime::ProcessRuntime, utils::LoggingUtils};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Prints memory layouts of sample values", long_about = None)]
struct Args {
    #[arg(help = "One of: builtin, arrays, strings, custom, collections, misc")]
    operation: Option<String>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[arg(long, help = "Config file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Exit with status 2 when an operation fails")]
    fail_on_error: bool,

    #[arg(long, help = "Skip the memory compaction hint before graph reports")]
    no_compaction: bool,

    #[arg(long, help = "Disable colored output")]
    no_color: bool,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn main() {
    let args = Args::parse();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            std::process::exit(dispatch::EXIT_FAILED);
        }
    };
    if args.fail_on_error {
        config = config.with_fail_on_error(true);
    }
    if args.no_compaction {
        config = config.with_compaction_hint(false);
    }
    if args.no_color {
        config = config.with_color(false);
    }

    if !config.use_color {
        colored::control::set_override(false);
    }
    if args.verbose > 0 {
        config = config.with_log_level(LoggingUtils::level_from_verbosity(args.verbose).as_str());
    }
    let level = LoggingUtils::level_from_str(&config.log_level);
    LoggingUtils::init(level, config.use_color);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = dispatch::run(
        args.operation.as_deref(),
        &config,
        &ProcessRuntime,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );
    std::process::exit(code);
}
