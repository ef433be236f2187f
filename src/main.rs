/*!
 * Command-line interface for flatcode
 */

use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use flatcode::config::{Args, Config};
use flatcode::llm::LLM_INSTRUCTIONS;
use flatcode::report::Reporter;
use flatcode::runner::Runner;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let args = Args::parse();

    if args.llm {
        println!("{}", LLM_INSTRUCTIONS);
        return ExitCode::SUCCESS;
    }

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "flatcode", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(Config::from_args(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> flatcode::Result<()> {
    config.validate()?;

    let progress = if config.quiet {
        ProgressBar::hidden()
    } else {
        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos} files ⏱️  {elapsed_precise}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        progress.enable_steady_tick(Duration::from_millis(100));
        progress
    };

    let runner = Runner::new(config.clone(), Arc::new(progress.clone()));
    let result = runner.run();
    progress.finish_and_clear();
    let summary = result?;

    if !config.quiet {
        Reporter::new().print_report(&summary);
    }

    Ok(())
}
