use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{error, info};

use hostsift::report::{self, ComparisonMode};
use hostsift::utils::{setup_logging, validate_args};
use hostsift::{Args, Comparison, Config, HostList, Source};

fn run(args: &Args) -> Result<Vec<u8>> {
    let total_start_time = Instant::now();
    let config = Config::from(args);

    let source = Source::parse(&args.input);
    let list = HostList::load(&source, &config)
        .with_context(|| format!("Failed to load {}", source.location()))?;

    let output = if let Some(compare) = &args.compare {
        let other_source = Source::parse(compare);
        let other = HostList::load(&other_source, &config)
            .with_context(|| format!("Failed to load {}", other_source.location()))?;

        let comparison = Comparison::new(&list.domains, &other.domains);
        let mode = ComparisonMode {
            intersection: args.intersection,
            unique: args.unique,
        };
        report::render_comparison(&list, &other, &comparison, mode).into_bytes()
    } else if args.stats {
        report::render_summary(&list, &config).into_bytes()
    } else if args.dupes {
        report::render_duplicates(&list).into_bytes()
    } else {
        report::render_hosts(&list, &config)
    };

    info!(
        action = "complete",
        component = "run",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Run completed"
    );
    Ok(output)
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);
    validate_args(&args)?;

    match run(&args) {
        Ok(output) => {
            if let Some(path) = &args.output {
                fs::write(path, output)
                    .with_context(|| format!("Failed to write output to {:?}", path))?;
                info!(action = "write", component = "output", file_path = ?path, "Output written");
            } else {
                io::stdout()
                    .write_all(&output)
                    .context("Failed to write output to stdout")?;
            }
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
