use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "yearbook", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the ordered story built from a yearbook data file.
    Story(StoryArgs),
    /// Print every desktop sheet with its faces and placement.
    Sheets(SheetsArgs),
    /// Replay scripted navigation events and print the final state.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct StoryArgs {
    /// Input yearbook JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional viewer config JSON (image base path).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Probe local page images relative to the input file and report on stderr.
    #[arg(long)]
    preload: bool,
}

#[derive(Parser, Debug)]
struct SheetsArgs {
    /// Input yearbook JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Sheet the book is opened to.
    #[arg(long, default_value_t = 0)]
    at: usize,

    /// Optional viewer config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input yearbook JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Which book to drive.
    #[arg(long, value_enum, default_value_t = ModeChoice::Mobile)]
    mode: ModeChoice,

    /// Event to replay, in order: next, prev, click:<i>, key:<left|right|escape>,
    /// swipe:<dx>:<ms>, wait:<ms>.
    #[arg(long = "event", value_parser = parse_event)]
    events: Vec<ReplayEvent>,

    /// Optional viewer config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Desktop,
    Mobile,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ReplayEvent {
    Next,
    Prev,
    Click { sheet: usize },
    Key { key: yearbook::Key },
    Swipe { dx: f64, ms: u64 },
    Wait { ms: u64 },
}

fn parse_event(s: &str) -> Result<ReplayEvent, String> {
    let mut parts = s.split(':');
    let head = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();
    let num = |v: &str| {
        v.parse::<u64>()
            .map_err(|e| format!("event '{s}': bad number '{v}': {e}"))
    };

    match (head, rest.as_slice()) {
        ("next", []) => Ok(ReplayEvent::Next),
        ("prev", []) => Ok(ReplayEvent::Prev),
        ("click", [i]) => Ok(ReplayEvent::Click {
            sheet: num(i)? as usize,
        }),
        ("key", [k]) => k
            .parse()
            .map(|key| ReplayEvent::Key { key })
            .map_err(|e| format!("event '{s}': {e}")),
        ("swipe", [dx, ms]) => Ok(ReplayEvent::Swipe {
            dx: dx
                .parse()
                .map_err(|e| format!("event '{s}': bad distance '{dx}': {e}"))?,
            ms: num(ms)?,
        }),
        ("wait", [ms]) => Ok(ReplayEvent::Wait { ms: num(ms)? }),
        _ => Err(format!(
            "unknown event '{s}' (expected next, prev, click:<i>, key:<k>, swipe:<dx>:<ms>, wait:<ms>)"
        )),
    }
}

#[derive(Debug, serde::Serialize)]
struct ReplayStep {
    at_ms: u64,
    #[serde(flatten)]
    event: ReplayEvent,
    outcome: String,
}

#[derive(Debug, serde::Serialize)]
struct ReplayReport {
    mode: yearbook::ViewportMode,
    view: yearbook::AppView,
    /// Sheet index on desktop, page index on mobile.
    position: Option<usize>,
    label: Option<String>,
    steps: Vec<ReplayStep>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Story(args) => cmd_story(args),
        Command::Sheets(args) => cmd_sheets(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<yearbook::ViewerConfig> {
    match path {
        Some(p) => yearbook::ViewerConfig::load(p)
            .with_context(|| format!("load viewer config '{}'", p.display())),
        None => Ok(yearbook::ViewerConfig::default()),
    }
}

fn read_story(path: &Path) -> anyhow::Result<yearbook::Story> {
    yearbook::load_story(path).with_context(|| format!("build story from '{}'", path.display()))
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output JSON")?;
    println!("{text}");
    Ok(())
}

fn cmd_story(args: StoryArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let story = read_story(&args.in_path)?;

    if args.preload {
        let resolver = yearbook::ImageResolver::from_config(&cfg.images);
        let assets_root = args.in_path.parent().unwrap_or_else(|| Path::new("."));
        let report = yearbook::preload_images(&story, &resolver, assets_root);
        eprintln!(
            "preload: {} ready, {} remote, {} failed, {} without image",
            report.ready.len(),
            report.remote,
            report.failed,
            report.without_image
        );
    }

    print_json(&story)
}

fn cmd_sheets(args: SheetsArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let story = read_story(&args.in_path)?;

    let mut book = yearbook::FlipController::new(story.page_count(), &cfg.desktop);
    if args.at >= book.total_sheets() {
        anyhow::bail!(
            "--at {} is past the last sheet ({})",
            args.at,
            book.total_sheets() - 1
        );
    }
    while book.current_sheet() < args.at {
        book.next();
    }

    let sheets: Vec<serde_json::Value> = book
        .sheets(&story.pages)
        .map(|(sheet, visual)| {
            serde_json::json!({
                "index": sheet.index,
                "front": sheet.front,
                "back": sheet.back,
                "visual": visual,
            })
        })
        .collect();

    print_json(&serde_json::json!({
        "label": book.page_label(),
        "current_sheet": book.current_sheet(),
        "sheets": sheets,
    }))
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let story = Arc::new(read_story(&args.in_path)?);

    let viewport = match args.mode {
        ModeChoice::Desktop => yearbook::ViewportSize::new(1280, 800),
        ModeChoice::Mobile => yearbook::ViewportSize::new(390, 844),
    };
    let intro_ms = cfg.intro.opening_after_ms + cfg.intro.open_after_ms;
    let mut holder = yearbook::ViewHolder::new(cfg, viewport);

    // Events start once the intro has played out.
    let mut now = yearbook::Millis(0);
    holder.open_book(story, now);
    holder.advance(now);
    now = now.after(intro_ms);
    holder.advance(now);

    let mut steps = Vec::with_capacity(args.events.len());
    for event in args.events {
        let at_ms = now.0;
        let outcome = match event {
            ReplayEvent::Next => accepted(holder.next(now)),
            ReplayEvent::Prev => accepted(holder.previous(now)),
            ReplayEvent::Click { sheet } => accepted(holder.click_sheet(sheet)),
            ReplayEvent::Key { key } => match holder.key(key, now) {
                yearbook::KeyOutcome::Ignored => "ignored".to_owned(),
                yearbook::KeyOutcome::Turn(start) => format!("turn to {}", start.incoming),
                yearbook::KeyOutcome::Rejected { reason } => format!("rejected: {reason}"),
                yearbook::KeyOutcome::Close => "closed".to_owned(),
            },
            ReplayEvent::Swipe { dx, ms } => {
                let start_x = f64::from(viewport.width) / 2.0;
                if holder.drag_start(start_x, now) {
                    now = now.after(ms);
                    holder.drag_move(start_x + dx, now);
                    match holder.drag_end(now) {
                        Some((_, yearbook::TurnEvent::TurnStarted(start))) => {
                            format!("turn to {}", start.incoming)
                        }
                        Some(_) => "snapped back".to_owned(),
                        None => "ignored".to_owned(),
                    }
                } else {
                    "ignored".to_owned()
                }
            }
            ReplayEvent::Wait { ms } => {
                now = now.after(ms);
                let fired = holder.advance(now);
                format!("{} step(s) fired", fired.len())
            }
        };
        tracing::debug!(at_ms, ?event, %outcome, "replayed event");
        steps.push(ReplayStep {
            at_ms,
            event,
            outcome,
        });
    }

    let (position, label) = match holder.book() {
        Some(yearbook::BookController::Desktop(c)) => (Some(c.current_sheet()), Some(c.page_label())),
        Some(yearbook::BookController::Mobile(c)) => (Some(c.current_page()), Some(c.page_label())),
        None => (None, None),
    };

    print_json(&ReplayReport {
        mode: holder.mode(),
        view: holder.view(),
        position,
        label,
        steps,
    })
}

fn accepted(moved: bool) -> String {
    let outcome = if moved { "accepted" } else { "ignored" };
    outcome.to_owned()
}
