use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jumprig", version)]
struct Cli {
    /// Log pipeline stages to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the rig and write the scene as JSON.
    Build(BuildArgs),
    /// Build the rig and print the evaluated pose at one frame.
    Pose(PoseArgs),
    /// Build the rig and print its content fingerprint.
    Fingerprint(ConfigArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Rig settings JSON; defaults to the stock rig.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    #[command(flatten)]
    settings: ConfigArgs,

    /// Output scene JSON path.
    #[arg(long, default_value = "scene.json")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PoseArgs {
    #[command(flatten)]
    settings: ConfigArgs,

    /// Frame to evaluate (inside the playback range).
    #[arg(long)]
    frame: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Pose(args) => cmd_pose(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn load_settings(args: &ConfigArgs) -> anyhow::Result<jumprig::RigSettings> {
    match &args.config {
        Some(path) => Ok(jumprig::RigSettings::from_path(path)?),
        None => Ok(jumprig::RigSettings::default()),
    }
}

fn build_scene(args: &ConfigArgs) -> anyhow::Result<jumprig::JumpRigScene> {
    let settings = load_settings(args)?;
    let mut host = jumprig::MemoryHost::new();
    let scene = jumprig::build_jump_rig(&mut host, &settings).context("build jump rig")?;
    Ok(scene)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let scene = build_scene(&args.settings)?;
    let json = scene.to_json_pretty()?;

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("write scene '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_pose(args: PoseArgs) -> anyhow::Result<()> {
    let scene = build_scene(&args.settings)?;
    let pose = jumprig::PoseEvaluator::eval_frame(&scene, jumprig::FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&pose).context("serialize pose")?;
    println!("{json}");
    Ok(())
}

fn cmd_fingerprint(args: ConfigArgs) -> anyhow::Result<()> {
    let scene = build_scene(&args)?;
    println!("{}", jumprig::fingerprint_scene(&scene));
    Ok(())
}
