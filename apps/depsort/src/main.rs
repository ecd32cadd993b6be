use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use depsort_batch::Config;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "depsort")]
#[command(about = "Sort the dependency lines at the top of JavaScript files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Reorder import and require lines: imports first, absolute before relative, then by path
    Sort(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Sort(cfg) => {
            let json = cfg.json;
            info!(
                "Running dependency sort on {} (check: {}, threads: {:?})",
                cfg.root.display(),
                cfg.check,
                cfg.threads
            );

            let result = depsort_batch::run_sort(cfg)?;
            let elapsed_ms = start.elapsed().as_millis();

            if json {
                depsort_batch::print_json_report(&mut stdout, &result)?;
            } else {
                depsort_batch::print_report(&mut stdout, &result)?;
                writeln!(
                    stdout,
                    "\n{} Finished in {}ms on {} files (using {} threads).",
                    "●".bright_blue(),
                    elapsed_ms.to_string().cyan(),
                    result.files.len().to_string().cyan(),
                    result.threads.to_string().cyan()
                )?;
            }
            stdout.flush()?;

            if result.should_fail() {
                // Non-zero exit to fail CI
                std::process::exit(1);
            }

            Ok(())
        }
    }
}
