use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use ndarray::ArrayD;

use kira_scorefuse::input::{load_score_array, write_score_array};
use kira_scorefuse::report::json::render_summary_json;
use kira_scorefuse::report::text::render_summary_text;
use kira_scorefuse::report::{RunDetails, RunSummary, summarize_array};
use kira_scorefuse::tracing::init_tracing;
use kira_scorefuse::{
    EnsembleStatistic, InputError, OverflowPolicy, QuantileSpec, RunError, ScoreError,
    ScorerConfig, compute_ensemble, get_quantile_scores_with_outcome,
};

#[derive(Debug, Parser)]
#[command(name = "kira-scorefuse", version, about)]
struct Cli {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Map raw scores to quantile levels.
    Score(ScoreArgs),
    /// Fuse 2 to 4 score arrays of one shape.
    Combine(CombineArgs),
}

#[derive(Debug, Args)]
struct ScoreArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Number of evenly spaced levels from 0 to 1.
    #[arg(long, conflicts_with = "quantiles")]
    levels: Option<usize>,
    /// Explicit comma-separated levels, e.g. 0,0.5,0.9,1.
    #[arg(long, value_delimiter = ',')]
    quantiles: Option<Vec<f64>>,
    #[arg(long, value_enum, default_value_t = OverflowPolicy::ZeroDefault)]
    overflow: OverflowPolicy,
    #[command(flatten)]
    summary: SummaryArgs,
}

#[derive(Debug, Args)]
struct CombineArgs {
    #[arg(long = "input", required = true, num_args = 1)]
    inputs: Vec<PathBuf>,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = EnsembleStatistic::Mean)]
    statistic: EnsembleStatistic,
    #[command(flatten)]
    summary: SummaryArgs,
}

#[derive(Debug, Args)]
struct SummaryArgs {
    /// Write a run summary to this path.
    #[arg(long)]
    summary: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = SummaryFormat::Json)]
    summary_format: SummaryFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Json,
    Text,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), RunError> {
    match command {
        Command::Score(args) => run_score(&args),
        Command::Combine(args) => run_combine(&args),
    }
}

fn scorer_config(args: &ScoreArgs) -> Result<ScorerConfig, ScoreError> {
    let quantiles = match (&args.quantiles, args.levels) {
        (Some(levels), _) => QuantileSpec::new(levels.clone())?,
        (None, Some(n)) => QuantileSpec::evenly_spaced(n)?,
        (None, None) => QuantileSpec::default(),
    };
    Ok(ScorerConfig::with_quantiles(quantiles).overflow(args.overflow))
}

fn run_score(args: &ScoreArgs) -> Result<(), RunError> {
    let config = scorer_config(args)?;
    let raw = load_score_array(&args.input)?;
    tracing::info!(
        input = %args.input.display(),
        shape = ?raw.shape(),
        n_levels = config.quantiles.len(),
        overflow = config.overflow.as_str(),
        "scoring"
    );

    let (scored, outcome) = get_quantile_scores_with_outcome(&raw, &config)?;
    write_score_array(&args.out, &scored)?;
    tracing::info!(out = %args.out.display(), n_overflow = outcome.n_overflow, "wrote quantile scores");

    let details = RunDetails::Score {
        n_levels: config.quantiles.len(),
        overflow_policy: config.overflow.as_str().to_string(),
        n_overflow: outcome.n_overflow,
        thresholds_min: outcome.thresholds.first().copied().unwrap_or(0.0),
        thresholds_max: outcome.thresholds.last().copied().unwrap_or(0.0),
    };
    let summary = RunSummary::new(
        details,
        vec![summarize_array(&label_for(&args.input), &raw)],
        summarize_array("quantile_scores", &scored),
    );
    write_summary(&args.summary, &summary)
}

fn run_combine(args: &CombineArgs) -> Result<(), RunError> {
    let arrays = args
        .inputs
        .iter()
        .map(|p| load_score_array(p))
        .collect::<Result<Vec<ArrayD<f64>>, _>>()?;
    tracing::info!(
        n_inputs = arrays.len(),
        statistic = args.statistic.as_str(),
        "combining"
    );

    let views = arrays.iter().map(|a| a.view()).collect::<Vec<_>>();
    let fused = compute_ensemble(&views, args.statistic)?;
    write_score_array(&args.out, &fused)?;
    tracing::info!(out = %args.out.display(), shape = ?fused.shape(), "wrote ensemble scores");

    let inputs = args
        .inputs
        .iter()
        .zip(&arrays)
        .map(|(p, a)| summarize_array(&label_for(p), a))
        .collect();
    let summary = RunSummary::new(
        RunDetails::Combine {
            statistic: args.statistic.as_str().to_string(),
            n_inputs: arrays.len(),
        },
        inputs,
        summarize_array("ensemble", &fused),
    );
    write_summary(&args.summary, &summary)
}

fn write_summary(args: &SummaryArgs, summary: &RunSummary) -> Result<(), RunError> {
    let Some(path) = &args.summary else {
        return Ok(());
    };
    let rendered = match args.summary_format {
        SummaryFormat::Json => render_summary_json(summary)
            .map_err(|e| InputError::json("rendering summary", e))?,
        SummaryFormat::Text => render_summary_text(summary),
    };
    fs::write(path, rendered)
        .map_err(|e| InputError::io(format!("writing {}", path.display()), e))?;
    Ok(())
}

fn label_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
