//! Catalog input: CSV or Parquet tables of star positions read with Polars.
//!
//! Expected columns (names overridable): `ra_hours`, `dec_degrees`, and an
//! optional `name`. Rows without a name are labelled `row<i>`.

use anyhow::{bail, Context, Result};
use asterisms::sky::{Position, Star};
use clap::Args;
use polars::prelude::*;
use std::path::Path;

#[derive(Args, Clone, Debug)]
pub struct ColumnArgs {
    /// Right ascension column, in hours
    #[arg(long, default_value = "ra_hours")]
    pub ra_col: String,
    /// Declination column, in degrees
    #[arg(long, default_value = "dec_degrees")]
    pub dec_col: String,
    /// Optional name column
    #[arg(long)]
    pub name_col: Option<String>,
}

impl Default for ColumnArgs {
    fn default() -> Self {
        Self {
            ra_col: "ra_hours".into(),
            dec_col: "dec_degrees".into(),
            name_col: None,
        }
    }
}

fn scan(path: &Path) -> Result<LazyFrame> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => Ok(LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?),
        Some("parquet") => Ok(LazyFrame::scan_parquet(path, ScanArgsParquet::default())?),
        _ => bail!(
            "unsupported catalog format {} (expected .csv or .parquet)",
            path.display()
        ),
    }
}

/// Load every row of the catalog as a `Star`.
pub fn load_stars(path: &Path, cols: &ColumnArgs) -> Result<Vec<Star>> {
    let mut exprs = vec![
        col(cols.ra_col.as_str()).cast(DataType::Float64),
        col(cols.dec_col.as_str()).cast(DataType::Float64),
    ];
    if let Some(name) = &cols.name_col {
        exprs.push(col(name.as_str()).cast(DataType::String));
    }
    let df = scan(path)?
        .select(exprs)
        .collect()
        .with_context(|| format!("reading catalog {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "catalog_loaded");

    let ra = df.column(cols.ra_col.as_str())?.f64()?;
    let dec = df.column(cols.dec_col.as_str())?.f64()?;
    let names: Vec<Option<String>> = match &cols.name_col {
        Some(name) => df
            .column(name.as_str())?
            .str()?
            .into_iter()
            .map(|s| s.map(str::to_string))
            .collect(),
        None => vec![None; df.height()],
    };

    let mut stars = Vec::with_capacity(df.height());
    for (i, ((ra, dec), name)) in ra.into_iter().zip(dec.into_iter()).zip(names).enumerate() {
        let (Some(ra), Some(dec)) = (ra, dec) else {
            bail!("row {i}: missing {} or {}", cols.ra_col, cols.dec_col);
        };
        let p = Position::from_hours_degrees(ra, dec).with_context(|| format!("row {i}"))?;
        let name = name.unwrap_or_else(|| format!("row{i}"));
        stars.push(Star::new(name, p.ra, p.dec));
    }
    Ok(stars)
}

/// Parse `ra_hours,dec_degrees[,dist_au]`.
pub fn parse_position(s: &str) -> Result<Position> {
    let parts = s
        .split(',')
        .map(|t| t.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("parsing coordinate {s:?}"))?;
    match parts.as_slice() {
        [ra, dec] => Ok(Position::from_hours_degrees(*ra, *dec)?),
        [ra, dec, au] => Ok(Position::from_hours_degrees(*ra, *dec)?
            .with_distance(asterisms::sky::Distance::from_au(*au))),
        _ => bail!("coordinate {s:?} must have 2 or 3 comma-separated components"),
    }
}
