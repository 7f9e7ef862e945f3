//! Dataset export: one row per sample, component parts plus coordinates.

use std::path::Path;

use anyhow::{bail, Context, Result};
use nalgebra::SVector;
use polars::prelude::*;

use simplex::prelude::Composition;

const COORD_NAMES: [&str; 3] = ["x", "y", "z"];

/// Assemble a frame with one column per component part (named after the
/// vertex labels, lowercased) followed by the projected coordinates.
pub fn frame<const N: usize, const D: usize>(
    compositions: &[Composition<N>],
    points: &[SVector<f64, D>],
    labels: &[String],
) -> Result<DataFrame> {
    debug_assert_eq!(compositions.len(), points.len());
    let mut columns = Vec::with_capacity(N + D);
    for (i, label) in labels.iter().enumerate() {
        let values: Vec<f64> = compositions.iter().map(|c| c.part(i)).collect();
        columns.push(Series::new(label.to_lowercase().into(), values));
    }
    for (d, name) in COORD_NAMES[..D].iter().enumerate() {
        let values: Vec<f64> = points.iter().map(|p| p[d]).collect();
        columns.push(Series::new((*name).into(), values));
    }
    DataFrame::new(columns).context("assembling composition dataset")
}

/// Write CSV or Parquet depending on the output extension.
pub fn write(df: &mut DataFrame, out: &Path) -> Result<()> {
    match out.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => {
            let mut file = std::fs::File::create(out)
                .with_context(|| format!("creating {}", out.display()))?;
            CsvWriter::new(&mut file).finish(df)?;
        }
        Some("parquet") => {
            let file = std::fs::File::create(out)
                .with_context(|| format!("creating {}", out.display()))?;
            ParquetWriter::new(file).finish(df)?;
        }
        other => bail!("unsupported dataset format {other:?} (use .csv or .parquet)"),
    }
    Ok(())
}
