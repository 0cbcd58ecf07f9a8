//! kanji-drill - Entry Point

use clap::Parser;
use kanji_drill::config::{self, CliOverrides, ResolvedConfig, SettingsOverrides};
use kanji_drill::dataset::KanjiDataset;
use kanji_drill::generator::XorShiftRng;
use kanji_drill::layout::LayoutPlan;
use kanji_drill::model::{AppError, Grade, GridStyle, InvalidGrade, PrintMode, RelationFilter};
use kanji_drill::settings::{parse_excluded, store};
use kanji_drill::worksheet::{render, render_layout, OutputFormat, Worksheet};
use std::path::PathBuf;
use tracing::info;

/// kanji-drill - A4 kanji practice worksheet generator
#[derive(Parser, Debug)]
#[command(name = "kanji-drill")]
#[command(version)]
#[command(about = "Generate A4 kanji practice worksheets for elementary school grades")]
pub struct Args {
    /// School grade (1-6)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=6))]
    pub grade: Option<u8>,

    /// Print mode (reading, writing, stroke-count, stroke-order, sentence,
    /// homophone, radical, okurigana, antonym)
    #[arg(short, long)]
    pub mode: Option<PrintMode>,

    /// Cell size in millimetres (12-25)
    #[arg(short, long)]
    pub cell_size: Option<f64>,

    /// Number of pages (1-20)
    #[arg(short, long)]
    pub pages: Option<u32>,

    /// Practice cells per row; clamped to what fits at the cell size
    #[arg(long)]
    pub practice_columns: Option<u32>,

    /// Guide lines inside practice cells
    #[arg(long)]
    pub grid: Option<GridStyle>,

    /// Follow table order instead of shuffling
    #[arg(long)]
    pub ordered: bool,

    /// Seed for reproducible worksheets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show hints (faint first cell, okurigana readings)
    #[arg(long)]
    pub hint: bool,

    /// Worksheet title
    #[arg(long)]
    pub title: Option<String>,

    /// Kanji to leave out, e.g. "上下" or "上,下"
    #[arg(long)]
    pub exclude: Option<String>,

    /// Relations asked in antonym mode (antonym, synonym, mixed)
    #[arg(long)]
    pub relation: Option<RelationFilter>,

    /// Output format (text, json, layout)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// External JSON kanji table
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Settings document to load (and save with --save-settings)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Save the resolved settings for next time
    #[arg(long)]
    pub save_settings: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Debug-level logging for this crate
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Flags the user actually set, as overrides.
    pub fn overrides(&self) -> Result<CliOverrides, InvalidGrade> {
        Ok(CliOverrides {
            settings: SettingsOverrides {
                grade: self.grade.map(Grade::new).transpose()?,
                mode: self.mode,
                page_count: self.pages,
                cell_size_mm: self.cell_size,
                practice_columns: self.practice_columns,
                grid_style: self.grid,
                random: self.ordered.then_some(false),
                show_hint: self.hint.then_some(true),
                title: self.title.clone(),
                excluded_kanji: self.exclude.as_deref().map(parse_excluded),
                antonym_filter: self.relation,
            },
            seed: self.seed,
            format: self.format,
            dataset_path: self.dataset.clone(),
            settings_path: self.settings.clone(),
        })
    }
}

/// Stored Settings → Env Vars → CLI Args, on top of the merged config file.
///
/// Runs after logging is up so migration and env warnings reach the log.
fn resolve_config(
    args: &Args,
    merged: ResolvedConfig,
) -> Result<ResolvedConfig, Box<dyn std::error::Error>> {
    let settings_path = args
        .settings
        .clone()
        .unwrap_or_else(|| merged.settings_path.clone());
    let stored = store::load_settings(&settings_path).map_err(AppError::from)?;

    let with_stored = config::apply_stored_settings(merged, stored);
    let with_env = config::apply_env_overrides(with_stored);
    Ok(config::apply_cli_overrides(with_env, args.overrides()?))
}

/// Renders the worksheet (or just its layout plan) for a resolved config.
fn produce_output(config: &ResolvedConfig) -> Result<String, AppError> {
    let settings = &config.settings;
    settings.validate()?;

    if config.format == OutputFormat::Layout {
        return Ok(render_layout(&LayoutPlan::for_settings(settings))?);
    }

    let dataset = match &config.dataset_path {
        Some(path) => KanjiDataset::from_path(path)?,
        None => KanjiDataset::builtin()?,
    };
    let mut rng = match config.seed {
        Some(seed) => XorShiftRng::new(seed),
        None => XorShiftRng::from_entropy(),
    };
    let today = chrono::Local::now().date_naive();

    let worksheet = Worksheet::build(settings, &dataset, &mut rng, today)?;
    Ok(render(&worksheet, config.format)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File; the log path is final at this point
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);

    kanji_drill::logging::init(&merged.log_file_path, args.verbose)?;

    let config = resolve_config(&args, merged)?;

    info!(
        mode = %config.settings.mode,
        grade = %config.settings.grade,
        format = %config.format,
        seed = ?config.seed,
        "Configuration loaded and resolved"
    );

    let output = produce_output(&config)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output).map_err(AppError::from)?;
            info!(path = %path.display(), "Wrote worksheet");
        }
        None => print!("{output}"),
    }

    if args.save_settings {
        store::save_settings(&config.settings_path, &config.settings).map_err(AppError::from)?;
    }

    Ok(())
}
