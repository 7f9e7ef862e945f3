use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use simplex::prelude::*;

mod dataset;
mod provenance;
mod render;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Composition sampling and simplex diagram renderer")]
struct Cmd {
    /// Optional experiment tag; propagated to sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Render a 3-component (ternary) diagram
    Ternary(PlotArgs),
    /// Render a 4-component (quaternary) diagram
    Quaternary(PlotArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Serialize)]
struct PlotArgs {
    /// Number of compositions to draw
    #[arg(long, default_value_t = 500)]
    points: usize,
    /// RNG seed; identical seeds reproduce the batch exactly
    #[arg(long, default_value_t = 2025)]
    seed: u64,
    /// Sampling method
    #[arg(long, value_enum, default_value = "ratio")]
    sampler: SamplerKind,
    /// Dirichlet concentration (only with --sampler dirichlet)
    #[arg(long, default_value_t = 1.0)]
    alpha: f64,
    /// Output image (.png or .svg)
    #[arg(long)]
    out: String,
    /// Optional dataset export (.csv or .parquet)
    #[arg(long)]
    export: Option<String>,
    /// Diagram title
    #[arg(long)]
    title: Option<String>,
    /// Comma-separated vertex labels (defaults A,B,C[,D])
    #[arg(long)]
    labels: Option<String>,
    /// Component index for the color scale (defaults to the last component)
    #[arg(long)]
    color_by: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum SamplerKind {
    /// Uniform raw parts followed by L1 normalization
    Ratio,
    /// Symmetric Dirichlet(alpha)
    Dirichlet,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Ternary(args) => ternary(&args, cmd.tag.as_deref()),
        Action::Quaternary(args) => quaternary(&args, cmd.tag.as_deref()),
        Action::Report => report(cmd.tag.as_deref()),
    }
}

fn ternary(args: &PlotArgs, tag: Option<&str>) -> Result<()> {
    let compositions = sample::<3>(args)?;
    let color_by = args.color_by.unwrap_or(2);
    let mut scene = TriScene::from_compositions(Tri::regular(), &compositions, color_by)?;
    if let Some(labels) = parse_labels(args.labels.as_deref()) {
        scene = scene.with_labels(labels)?;
    }
    let title = args.title.as_deref().unwrap_or("Ternary Composition Plot");
    render::ternary(&scene, Path::new(&args.out), title)
        .map_err(|err| anyhow!("rendering {}: {err}", args.out))?;
    finish(args, tag, "ternary", color_by, &compositions, scene.points(), scene.labels())
}

fn quaternary(args: &PlotArgs, tag: Option<&str>) -> Result<()> {
    let compositions = sample::<4>(args)?;
    let color_by = args.color_by.unwrap_or(3);
    let mut scene = TetScene::from_compositions(Tet::regular(), &compositions, color_by)?;
    if let Some(labels) = parse_labels(args.labels.as_deref()) {
        scene = scene.with_labels(labels)?;
    }
    let title = args
        .title
        .as_deref()
        .unwrap_or("Quaternary Composition Plot");
    render::quaternary(&scene, Path::new(&args.out), title)
        .map_err(|err| anyhow!("rendering {}: {err}", args.out))?;
    finish(args, tag, "quaternary", color_by, &compositions, scene.points(), scene.labels())
}

/// Export, provenance, and the closing log line shared by both diagram modes.
fn finish<const N: usize, const D: usize>(
    args: &PlotArgs,
    tag: Option<&str>,
    mode: &str,
    color_by: usize,
    compositions: &[Composition<N>],
    points: &[nalgebra::SVector<f64, D>],
    labels: &[String],
) -> Result<()> {
    let params = serde_json::json!({
        "mode": mode,
        "color_by": color_by,
        "labels": labels,
        "args": args,
    });
    if let Some(export) = &args.export {
        let mut df = dataset::frame(compositions, points, labels)?;
        dataset::write(&mut df, Path::new(export))?;
        provenance::write_sidecar(
            export,
            provenance::Payload::new(params.clone()).with_tag(tag),
        )?;
        tracing::info!(export = %export, rows = df.height(), "dataset");
    }
    provenance::write_sidecar(
        &args.out,
        provenance::Payload::new(params).with_tag(tag),
    )?;
    tracing::info!(
        mode,
        out = %args.out,
        points = args.points,
        seed = args.seed,
        "figure"
    );
    Ok(())
}

fn sample<const N: usize>(args: &PlotArgs) -> Result<Vec<Composition<N>>> {
    let samples = match args.sampler {
        SamplerKind::Ratio => {
            let mut gen = UniformRatioSampler::<N>::new(RatioParams::default(), args.seed)?;
            sample_batch(&mut gen, args.points)?
        }
        SamplerKind::Dirichlet => {
            let params = DirichletParams { alpha: args.alpha };
            let mut gen = DirichletSampler::<N>::new(params, args.seed)?;
            sample_batch(&mut gen, args.points)?
        }
    };
    Ok(samples.into_iter().map(|s| s.composition).collect())
}

fn parse_labels(raw: Option<&str>) -> Option<Vec<String>> {
    raw.map(|s| s.split(',').map(|part| part.trim().to_string()).collect())
}

fn report(tag: Option<&str>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": simplex::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
