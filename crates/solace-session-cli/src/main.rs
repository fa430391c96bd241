//! # solace-session
//!
//! Inspect, encode and exercise a session service factory stored on disk.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use solace_session_core::config::{self, ConfigError};
use solace_session_core::paths::default_config_path;
use solace_session_core::{FactoryRecord, Queue, SessionService, SubmissionMode};

#[derive(Parser, Debug)]
#[command(name = "solace-session", about = "Solace session factory tool")]
struct Cli {
    /// Path to the factory record (defaults to ~/.config/solace-session/factory.json).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Bind the factory to this queue before running the command.
    #[arg(long, global = true)]
    queue: Option<String>,

    /// Submission mode for the write path (HIGHER_THROUGHPUT, LOWER_LATENCY, CUSTOM, TESTING).
    #[arg(long, global = true)]
    submission_mode: Option<SubmissionMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the effective factory configuration.
    Show,
    /// Print the record as it is shipped to workers.
    Encode,
    /// Create sessions concurrently, connect them and close them again.
    Create {
        #[arg(long, default_value = "1")]
        count: usize,
    },
}

fn load(cli: &Cli) -> Result<FactoryRecord> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path().context("Failed to resolve default config path")?,
    };

    let mut record = match config::load_record(&path) {
        Ok(record) => record,
        Err(ConfigError::NotFound(path)) => {
            bail!("No factory config at {}", path.display())
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to load {}", path.display())),
    };
    config::apply_env_overrides(&mut record);

    if let Some(name) = &cli.queue {
        let queue = Queue::new(name.as_str())?;
        record.settings_mut().bind_queue(queue)?;
    }
    if let Some(mode) = cli.submission_mode {
        record.settings_mut().set_submission_mode(mode);
    }

    Ok(record)
}

fn show(record: &FactoryRecord) {
    let settings = record.settings();
    println!("{:#?}", record);
    println!(
        "state: {}",
        if settings.is_bound() { "bound" } else { "unbound" }
    );
    println!(
        "queue: {}",
        settings.queue().map(Queue::name).unwrap_or("<none>")
    );
    println!(
        "submission mode: {}",
        settings
            .submission_mode()
            .map(SubmissionMode::as_str)
            .unwrap_or("<none>")
    );
}

/// Returns one `<session id> <client name> <state>` line per session.
async fn create_sessions(record: FactoryRecord, count: usize) -> Result<Vec<String>> {
    let encoded = record.encode()?;

    let mut handles = Vec::with_capacity(count);
    for _ in 0..count {
        // Each worker gets its own copy, decoded the way a remote worker would.
        let encoded = encoded.clone();
        handles.push(tokio::task::spawn_blocking(move || -> Result<String> {
            let record = FactoryRecord::decode(&encoded)?;
            let mut session = record.create()?;
            session.connect()?;
            let line = format!(
                "{} {} {}",
                session.id(),
                session.properties().client_name,
                session.state()
            );
            session.close();
            Ok(line)
        }));
    }

    let mut lines = Vec::with_capacity(count);
    for handle in handles {
        lines.push(handle.await.context("Session worker panicked")??);
    }
    Ok(lines)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let record = load(&cli)?;

    match cli.command {
        Command::Show => show(&record),
        Command::Encode => println!("{}", record.encode_pretty()?),
        Command::Create { count } => {
            log::info!("Creating {} session(s) from {} factory", count, record.kind());
            for line in create_sessions(record, count).await? {
                println!("{line}");
            }
        }
    }

    Ok(())
}
