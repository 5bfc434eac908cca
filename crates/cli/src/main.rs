use anyhow::{Context, Result};
use asterisms::sky::{
    circumcenter_with, mean_center, midpoint, CircumcenterCfg, Gnomonic, PlateCarree, Position,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod catalog;
mod provenance;

use catalog::{load_stars, parse_position, ColumnArgs};
use provenance::{CatalogSource, Run};

#[derive(Parser)]
#[command(name = "asterisms")]
#[command(about = "Centers and enclosing disks of groups of sky positions")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Unweighted RA/Dec mean of a catalog
    Center {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        cols: ColumnArgs,
        /// Also write the result (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Midpoint of two positions given as `ra_hours,dec_degrees[,dist_au]`
    Midpoint {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        /// Also write the result (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Smallest disk enclosing every catalog position
    Disk {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        cols: ColumnArgs,
        #[arg(long, value_enum, default_value_t = ProjectionArg::Gnomonic)]
        projection: ProjectionArg,
        /// Shuffle seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ProjectionArg {
    /// RA/Dec radians as plane coordinates
    PlateCarree,
    /// Tangent plane about the mean direction of the input
    Gnomonic,
}

#[derive(Serialize)]
struct PositionReport {
    ra_hours: f64,
    dec_degrees: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    dist_au: Option<f64>,
    ra: String,
    dec: String,
}

impl From<&Position> for PositionReport {
    fn from(p: &Position) -> Self {
        Self {
            ra_hours: p.ra.hours(),
            dec_degrees: p.dec.degrees(),
            dist_au: p.dist.map(|d| d.au()),
            ra: p.ra.to_string(),
            dec: p.dec.to_string(),
        }
    }
}

#[derive(Serialize)]
struct DiskReport {
    n: usize,
    projection: ProjectionArg,
    center: PositionReport,
    radius_degrees: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Center { input, cols, out } => center(&input, &cols, out.as_deref()),
        Action::Midpoint { a, b, out } => mid(&a, &b, out.as_deref()),
        Action::Disk {
            input,
            cols,
            projection,
            seed,
            out,
        } => disk(&input, &cols, projection, seed, out.as_deref()),
        Action::Report => report(),
    }
}

fn emit<T: Serialize>(value: &T, out: Option<&Path>, run: Run) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{text}");
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(out, &text).with_context(|| format!("writing {}", out.display()))?;
        let prov = provenance::record(out, &run)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    }
    Ok(())
}

fn source(input: &Path, cols: &ColumnArgs) -> CatalogSource {
    CatalogSource {
        path: input.to_path_buf(),
        ra_col: cols.ra_col.clone(),
        dec_col: cols.dec_col.clone(),
    }
}

fn center(input: &Path, cols: &ColumnArgs, out: Option<&Path>) -> Result<()> {
    tracing::info!(input = %input.display(), "center");
    let stars = load_stars(input, cols)?;
    let c = mean_center(&stars)?;
    let run = Run::Center {
        catalog: source(input, cols),
    };
    emit(&PositionReport::from(&c), out, run)
}

fn mid(a: &str, b: &str, out: Option<&Path>) -> Result<()> {
    tracing::info!(a, b, "midpoint");
    let p1 = parse_position(a)?;
    let p2 = parse_position(b)?;
    let m = midpoint(&p1, &p2)?;
    let run = Run::Midpoint {
        a: a.to_owned(),
        b: b.to_owned(),
    };
    emit(&PositionReport::from(&m), out, run)
}

fn disk(
    input: &Path,
    cols: &ColumnArgs,
    projection: ProjectionArg,
    seed: Option<u64>,
    out: Option<&Path>,
) -> Result<()> {
    tracing::info!(input = %input.display(), ?projection, ?seed, "disk");
    let stars = load_stars(input, cols)?;
    let cfg = CircumcenterCfg {
        seed,
        ..Default::default()
    };
    let sky = match projection {
        ProjectionArg::PlateCarree => circumcenter_with(&stars, &PlateCarree, cfg)?,
        ProjectionArg::Gnomonic => {
            let tan = Gnomonic::about(&stars)?;
            circumcenter_with(&stars, &tan, cfg)?
        }
    };
    let report = DiskReport {
        n: stars.len(),
        projection,
        center: PositionReport::from(&sky.center),
        radius_degrees: sky.radius.degrees(),
    };
    let run = Run::Disk {
        catalog: source(input, cols),
        projection,
        seed,
    };
    emit(&report, out, run)
}

fn report() -> Result<()> {
    let obj = json!({
        "git_rev": provenance::git_rev(),
        "asterisms_version": asterisms::VERSION,
        "projections": ["plate-carree", "gnomonic"],
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
