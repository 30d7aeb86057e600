use clap::Parser;
use std::io::Read;
use trendpulse::application::render::{render, write_report, OutputFormat};
use trendpulse::cli::collect_topics;
use trendpulse::cli::commands::{Cli, Commands};
use trendpulse::config::ReporterConfig;
use trendpulse::domain::error::DomainError;
use trendpulse::domain::values::time_frame::TimeFrame;
use trendpulse::TrendPulse;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match ReporterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    let tp = TrendPulse::new(config);

    if let Err(e) = run_command(tp, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(tp: TrendPulse, cmd: Commands) -> Result<(), DomainError> {
    match cmd {
        Commands::Report {
            topics,
            time_frame,
            tab,
            format,
            verify_links,
            output,
        } => {
            let tf: TimeFrame = time_frame.parse().map_err(DomainError::InvalidInput)?;
            let fmt: OutputFormat = format.parse().map_err(DomainError::InvalidInput)?;
            let topics = collect_topics(&topics, tab.as_deref())?;
            if topics.is_empty() {
                return Err("Add at least one research topic".into());
            }

            let mut report = tp.generate_trend_report(topics.as_slice(), tf).await?;
            if verify_links {
                let dropped = tp.verify_links(&mut report).await;
                tracing::info!(dropped, remaining = report.items.len(), "link verification done");
            }

            match output {
                Some(path) => {
                    write_report(&report, fmt, &path)?;
                    eprintln!("{fmt} report written to {}", path.display());
                }
                None => println!("{}", render(&report, fmt)?),
            }
        }
        Commands::Prompt {
            topics,
            time_frame,
            tab,
        } => {
            let tf: TimeFrame = time_frame.parse().map_err(DomainError::InvalidInput)?;
            let topics = collect_topics(&topics, tab.as_deref())?;
            println!("{}", tp.prompt(topics.as_slice(), tf));
        }
        Commands::Normalize { path } => {
            let raw = match path {
                Some(path) => std::fs::read_to_string(&path)
                    .map_err(|e| DomainError::Io(format!("reading {}: {e}", path.display())))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let items = TrendPulse::normalize(&raw);
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Commands::Strategies => {
            for (tab, strategy) in TrendPulse::strategies() {
                let topic = tab.preset_topic().unwrap_or("-");
                println!("{tab}: {} ({topic})", strategy.description);
                println!("    {}", strategy.filter_criteria);
                for keyword in strategy.keywords {
                    println!("    - {keyword}");
                }
            }
        }
    }
    Ok(())
}
