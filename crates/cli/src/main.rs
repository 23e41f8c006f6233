use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use trigon::tri::rand::{draw_many, SampleCfg};
use trigon::tri::{Report, TriCfg, MAX_DECIMALS};

mod provenance;
mod session;

use session::{Render, SessionError};

#[derive(Parser)]
#[command(name = "trigon")]
#[command(about = "Validate three side lengths and report triangle properties")]
struct Cmd {
    /// Decimals kept in the report (0 to 15)
    #[arg(
        long,
        default_value_t = TriCfg::default().precision,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_DECIMALS))
    )]
    precision: u32,

    /// Relative tolerance for side equality when classifying
    #[arg(long, default_value_t = TriCfg::default().eps_equal)]
    eps_equal: f64,

    /// Print reports as pretty JSON
    #[arg(long)]
    json: bool,

    /// Also write the JSON report here (plus a provenance sidecar)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Ask for the three sides on stdin (default)
    Prompt,
    /// Evaluate the given sides without prompting
    Eval {
        #[arg(allow_hyphen_values = true)]
        side1: String,
        #[arg(allow_hyphen_values = true)]
        side2: String,
        #[arg(allow_hyphen_values = true)]
        side3: String,
    },
    /// Report random valid triangles
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long, default_value_t = SampleCfg::default().side_min)]
        min: f64,
        #[arg(long, default_value_t = SampleCfg::default().side_max)]
        max: f64,
    },
}

#[derive(Serialize)]
struct Sampled {
    index: usize,
    report: Report,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose);
    let render = Render {
        cfg: TriCfg {
            eps_equal: cmd.eps_equal,
            precision: cmd.precision,
        },
        json: cmd.json,
    };
    match cmd.action.unwrap_or(Action::Prompt) {
        Action::Prompt => prompt(&render, cmd.out),
        Action::Eval {
            side1,
            side2,
            side3,
        } => eval([side1, side2, side3], &render, cmd.out),
        Action::Sample {
            seed,
            count,
            min,
            max,
        } => sample(
            seed,
            count,
            SampleCfg {
                side_min: min,
                side_max: max,
            },
            &render,
            cmd.out,
        ),
    }
}

fn prompt(render: &Render, out_path: Option<PathBuf>) -> Result<()> {
    tracing::info!(precision = render.cfg.precision, "prompt");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let sides = session::prompt_sides(&mut input, &mut out)?;
    finish(&mut out, sides, render, out_path, "prompt")
}

fn eval(raw: [String; 3], render: &Render, out_path: Option<PathBuf>) -> Result<()> {
    tracing::info!(?raw, "eval");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    finish(&mut out, session::parse_sides(&raw), render, out_path, "eval")
}

/// Emit, persist on success, then always print the trailer.
fn finish<W: Write>(
    out: &mut W,
    sides: Result<[f64; 3], SessionError>,
    render: &Render,
    out_path: Option<PathBuf>,
    command: &'static str,
) -> Result<()> {
    let report = session::emit(out, sides, render)?;
    let persisted = match (report, out_path) {
        (Some(report), Some(path)) => {
            let params = serde_json::json!({
                "sides": report.sides,
                "precision": render.cfg.precision,
                "eps_equal": render.cfg.eps_equal,
            });
            provenance::write_report(&path, &report, provenance::Payload::new(command, params))
                .map(|_| ())
        }
        _ => Ok(()),
    };
    session::done(out)?;
    persisted
}

fn sample(
    seed: u64,
    count: usize,
    cfg: SampleCfg,
    render: &Render,
    out_path: Option<PathBuf>,
) -> Result<()> {
    tracing::info!(seed, count, min = cfg.side_min, max = cfg.side_max, "sample");
    let entries: Vec<Sampled> = draw_many(cfg, seed, count)
        .into_iter()
        .enumerate()
        .map(|(index, t)| Sampled {
            index,
            report: t.report(&render.cfg),
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if render.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        for e in &entries {
            let [a, b, c] = e.report.sides;
            writeln!(out, "#{} sides: [{}, {}, {}]", e.index, a, b, c)?;
            writeln!(out, "{}", e.report)?;
            writeln!(out)?;
        }
    }

    if let Some(path) = out_path {
        let params = serde_json::json!({
            "seed": seed,
            "count": count,
            "side_min": cfg.side_min,
            "side_max": cfg.side_max,
            "precision": render.cfg.precision,
        });
        provenance::write_report(&path, &entries, provenance::Payload::new("sample", params))?;
    }
    Ok(())
}
