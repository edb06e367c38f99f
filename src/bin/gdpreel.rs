use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};
use sha2::Digest as _;

use gdpreel::{CueAction, Evaluator, FrameIndex, ReelConfig, record_reel, storyboard};

#[derive(Parser, Debug)]
#[command(name = "gdpreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the chart and pie layout as JSON.
    Layout(ConfigArgs),
    /// Print every cue of the presentation in order.
    Plan(ConfigArgs),
    /// Write the reel document as JSON.
    Export(ExportArgs),
    /// Print what is on screen at one frame as JSON.
    Frame(FrameArgs),
    /// Validate a config and report flagged data.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Config JSON (defaults to the built-in dataset).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    cfg: ConfigArgs,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    cfg: ConfigArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Args, Debug)]
struct CheckArgs {
    #[command(flatten)]
    cfg: ConfigArgs,

    /// Treat flagged data (pie total, out-of-range points) as errors.
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Export(args) => cmd_export(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads and validates the config; also returns the flagged-but-tolerated issues.
fn load(args: &ConfigArgs, strict: bool) -> anyhow::Result<(ReelConfig, Vec<String>)> {
    let cfg = match &args.config {
        Some(path) => ReelConfig::from_path(path)?,
        None => ReelConfig::builtin()?,
    };
    let flagged = cfg.validate(strict).context("config validation failed")?;
    Ok((cfg, flagged))
}

fn cmd_layout(args: ConfigArgs) -> anyhow::Result<()> {
    let (cfg, _) = load(&args, false)?;
    let lay = storyboard::layout(&cfg)?;
    println!("{}", serde_json::to_string_pretty(&lay)?);
    Ok(())
}

fn cmd_plan(args: ConfigArgs) -> anyhow::Result<()> {
    let (cfg, _) = load(&args, false)?;
    let timeline = storyboard::build_timeline(&cfg)?;
    for cue in timeline.cues()? {
        let action = match cue.action {
            CueAction::Enter(e) => format!("enter/{e:?}"),
            CueAction::Emphasize => "emphasize".to_string(),
            CueAction::Exit(e) => format!("exit/{e:?}"),
        };
        let what = timeline
            .catalog()
            .get(&cue.visual)
            .map(|v| v.describe())
            .unwrap_or_default();
        println!(
            "{:>8.2}s {:>5.2}s  {:<16} {:<22} {}",
            cue.at,
            cue.run_time,
            action,
            cue.visual.as_str(),
            what
        );
    }
    println!("total {:.2}s", timeline.duration());
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let (cfg, _) = load(&args.cfg, false)?;
    let timeline = storyboard::build_timeline(&cfg)?;
    let r = &cfg.render;
    let reel = record_reel(&timeline, r.fps, r.canvas, r.background)?;
    let json = reel.to_json_pretty()?;

    match &args.out {
        Some(out) => {
            write_output(out, &json)?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    eprintln!("frames:  {}", reel.duration.0);
    eprintln!("clips:   {}", reel.clips.len());
    eprintln!("sha256:  {}", sha256_hex(json.as_bytes()));
    Ok(())
}

fn write_output(out: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, contents).with_context(|| format!("write reel '{}'", out.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (cfg, _) = load(&args.cfg, false)?;
    let timeline = storyboard::build_timeline(&cfg)?;
    let r = &cfg.render;
    let reel = record_reel(&timeline, r.fps, r.canvas, r.background)?;
    let frame = Evaluator::eval_frame(&reel, FrameIndex(args.frame))?;
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let (cfg, flagged) = load(&args.cfg, args.strict)?;
    let timeline = storyboard::build_timeline(&cfg)?;
    for msg in &flagged {
        println!("warning: {msg}");
    }
    println!(
        "ok: {} visuals, {} beats, {:.2}s",
        timeline.catalog().len(),
        timeline.beats().len(),
        timeline.duration()
    );
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
