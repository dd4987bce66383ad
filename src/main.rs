use anyhow::Context;
use clap::{Parser, Subcommand};
use ediff::domain::areas::difftool::Difftool;
use ediff::domain::areas::launcher::Launcher;
use ediff::host::bridge::HostBridge;
use ediff::host::payload::HostPayload;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ediff",
    version = "0.1.0",
    about = "Open the configured external diff tool on an editor diff view",
    long_about = "Given a snapshot of the host editor's state, ediff resolves the two sides \
    of the active comparison view, stages them as scratch files, and launches the \
    version-control tool-chain's configured diff tool on them.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "open",
        about = "Open the external diff tool on the active comparison view",
        long_about = "This command reads the host state snapshot (JSON) from stdin or from the \
        file given with --payload, and opens the configured external diff tool on the two \
        compared contents."
    )]
    Open {
        #[arg(long, help = "Read the host state snapshot from this file instead of stdin")]
        payload: Option<PathBuf>,
        #[arg(long, help = "Program used to launch the diff tool (defaults to git)")]
        tool: Option<String>,
        #[arg(
            long = "tool-arg",
            help = "Argument passed to the tool before the two paths (repeatable)"
        )]
        tool_args: Vec<String>,
        #[arg(
            long,
            help = "Grace period in milliseconds between tool exit and scratch cleanup"
        )]
        cleanup_delay_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Open {
            payload,
            tool,
            tool_args,
            cleanup_delay_ms,
        } => {
            let raw = match payload {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read host payload {}", path.display()))?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("failed to read host payload from stdin")?;
                    buffer
                }
            };
            let payload: HostPayload =
                serde_json::from_str(&raw).context("malformed host payload")?;

            let mut difftool = match tool {
                Some(program) => Difftool::with_command(program, tool_args),
                None => Difftool::new(),
            };
            if let Some(delay) = cleanup_delay_ms {
                difftool.set_cleanup_delay(Duration::from_millis(delay));
            }

            let bridge = HostBridge::new(payload);
            let launcher = Launcher::new(
                Box::new(bridge.clone()),
                Box::new(bridge),
                Default::default(),
                difftool,
                Box::new(std::io::stdout()),
            );

            launcher.open_difftool().await?
        }
    }

    Ok(())
}
