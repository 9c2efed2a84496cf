#![forbid(unsafe_code)]

//! Command-line interface for the harness binary.

use std::io;

use clap::{Args, Parser, Subcommand, ValueEnum};
use wavelock_core::{LockConfig, LockType, layout, overlay};

use crate::driver::Driver;
use crate::error::Result;
use crate::script::ScriptBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LockTypeArg {
    Number,
    Pattern,
}

impl From<LockTypeArg> for LockType {
    fn from(arg: LockTypeArg) -> Self {
        match arg {
            LockTypeArg::Number => LockType::Number,
            LockTypeArg::Pattern => LockType::Pattern,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wavelock-harness",
    about = "Scripted fingertip runs against the wavelock session core",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a scripted entry sequence against a lock configuration.
    Run(RunArgs),

    /// Print the target layout (and overlay boxes) for a lock type.
    Layout(LayoutArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Lock type for the session.
    #[arg(long, value_enum, default_value = "number")]
    pub lock_type: LockTypeArg,

    /// The secret the session must match.
    #[arg(long)]
    pub secret: String,

    /// Keys the scripted fingertip visits, in order (e.g. 1243).
    #[arg(long)]
    pub keys: String,

    /// Ticks the fingertip rests on each key.
    #[arg(long, default_value_t = 5)]
    pub dwell_ticks: usize,

    /// Ticks spent gliding between consecutive keys.
    #[arg(long, default_value_t = 3)]
    pub travel_ticks: usize,

    /// Emit the full per-tick transcript as JSONL instead of a summary.
    #[arg(long)]
    pub jsonl: bool,
}

#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// Lock type to lay out.
    #[arg(long, value_enum, default_value = "number")]
    pub lock_type: LockTypeArg,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run_scripted(args),
        Commands::Layout(args) => print_layout(args),
    }
}

fn run_scripted(args: RunArgs) -> Result<()> {
    let config = LockConfig::new(args.lock_type.into(), &args.secret)?;
    let script = ScriptBuilder::new(config.lock_type())
        .entry_path(&args.keys, args.dwell_ticks, args.travel_ticks)?
        .build();
    let transcript = Driver::new(config).run(&script);

    if args.jsonl {
        transcript.write_jsonl(io::stdout().lock())?;
    } else if let Some(tick) = transcript.unlock_tick() {
        println!("unlocked at tick {tick} ({} ticks total)", transcript.ticks().len());
    } else {
        println!(
            "not unlocked after {} ticks ({} denied attempts)",
            transcript.ticks().len(),
            transcript.denied_attempts()
        );
    }
    Ok(())
}

fn print_layout(args: LayoutArgs) -> Result<()> {
    let targets = layout::generate(args.lock_type.into());
    if targets.is_empty() {
        println!("no targets for the {} lock", LockType::from(args.lock_type).name());
        return Ok(());
    }
    for shape in overlay::shapes(&targets, None) {
        if let overlay::OverlayShape::TargetBox { rect, label } = shape {
            println!(
                "{label}: box ({}, {}) {}x{}",
                rect.x, rect.y, rect.width, rect.height
            );
        }
    }
    Ok(())
}
