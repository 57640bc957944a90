use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::fmt::SubscriberBuilder;

use sightline::query::{Query, World};
use sightline::sweep::{SortAlgo, SweepOpts};

mod geo;
mod qry;
mod report;
mod svg;

use report::Reporter;
use svg::SvgDoc;

/// viewBox margin for the scene-only and composite renders.
const SCENE_MARGIN: f64 = 10.0;
/// viewBox margin for per-query renders.
const QUERY_MARGIN: f64 = 40.0;

#[derive(Parser)]
#[command(name = "sightline")]
#[command(about = "Visibility-region scene and query processor")]
struct Cmd {
    /// Base directory for input files
    #[arg(short = 'e', long = "input-dir", default_value = ".")]
    input_dir: PathBuf,

    /// Scene file (.geo), resolved under the input directory unless absolute
    #[arg(short = 'f', long = "geo")]
    geo: PathBuf,

    /// Output directory for .svg, .txt and .json artifacts
    #[arg(short = 'o', long = "out-dir")]
    out_dir: PathBuf,

    /// Query file (.qry), resolved under the input directory unless absolute
    #[arg(short = 'q', long = "qry")]
    qry: Option<PathBuf>,

    /// Slice sort used for sweep events
    #[arg(long = "sort", value_enum, default_value = "quick")]
    sort: SortArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    Quick,
    Merge,
}

impl From<SortArg> for SortAlgo {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Quick => SortAlgo::Quick,
            SortArg::Merge => SortAlgo::Merge,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    fs::create_dir_all(&cmd.out_dir)
        .with_context(|| format!("creating output dir {}", cmd.out_dir.display()))?;

    let geo_path = resolve(&cmd.input_dir, &cmd.geo);
    let shapes = geo::read_geo(&geo_path)?;
    let bbox = geo::scene_bounds(&shapes);
    let geo_base = stem(&geo_path);
    tracing::info!(
        file = %geo_path.display(),
        shapes = shapes.len(),
        "scene loaded"
    );

    // Scene-only render.
    let mut doc = SvgDoc::new(&bbox, SCENE_MARGIN);
    doc.comment("scene");
    doc.shapes(&shapes);
    let scene_svg = cmd.out_dir.join(format!("{geo_base}.svg"));
    doc.write_to(&scene_svg)?;
    tracing::info!(file = %scene_svg.display(), "scene svg written");

    let Some(qry) = &cmd.qry else {
        return Ok(());
    };
    let qry_path = resolve(&cmd.input_dir, qry);
    let text = fs::read_to_string(&qry_path)
        .with_context(|| format!("reading query file {}", qry_path.display()))?;
    let queries = qry::parse_qry(&text);
    tracing::info!(file = %qry_path.display(), queries = queries.len(), "queries loaded");

    let base = format!("{geo_base}-{}", stem(&qry_path));
    let opts = SweepOpts {
        sort: cmd.sort.into(),
        ..SweepOpts::default()
    };

    let mut world = World::new(shapes, bbox);
    let mut reporter = Reporter::new();

    for query in &queries {
        let outcome = world.run(query, &opts);
        log_outcome(query, outcome.affected);
        reporter.record(query, &outcome);

        // A query with its own tag gets its own render pass.
        if let (Some(polygon), Some(origin)) = (&outcome.polygon, outcome.origin) {
            let tag = match query {
                Query::Destroy { tag, .. }
                | Query::Paint { tag, .. }
                | Query::Clone { tag, .. } => tag.as_str(),
                Query::Shield { .. } => unreachable!("shield carries no region"),
            };
            let mut doc = SvgDoc::new(&bbox, QUERY_MARGIN);
            doc.comment("scene state");
            doc.shapes(&world.shapes);
            doc.blockers(&world.blockers);
            doc.comment("visibility region");
            doc.region(polygon);
            doc.bomb(origin.x, origin.y);
            let path = cmd.out_dir.join(format!("{base}-{tag}.svg"));
            doc.write_to(&path)?;
            tracing::info!(file = %path.display(), "query svg written");
        }
    }

    // Composite render: final state plus every accumulated region.
    let mut doc = SvgDoc::new(&bbox, SCENE_MARGIN);
    doc.comment("final scene state");
    doc.shapes(&world.shapes);
    doc.blockers(&world.blockers);
    doc.comment("accumulated visibility regions");
    for (origin, polygon) in &world.overlays {
        doc.region(polygon);
        doc.bomb(origin.x, origin.y);
    }
    let composite = cmd.out_dir.join(format!("{base}.svg"));
    doc.write_to(&composite)?;
    tracing::info!(file = %composite.display(), "composite svg written");

    let (txt, json) = reporter.write(&cmd.out_dir, &base)?;
    tracing::info!(txt = %txt.display(), json = %json.display(), "reports written");

    Ok(())
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string())
}

fn log_outcome(query: &Query, affected: usize) {
    match query {
        Query::Shield { first, last, .. } => {
            tracing::info!(first, last, converted = affected, "shield");
        }
        Query::Destroy { at, .. } => {
            tracing::info!(x = at.x, y = at.y, destroyed = affected, "destroy");
        }
        Query::Paint { at, color, .. } => {
            tracing::info!(x = at.x, y = at.y, color = %color, painted = affected, "paint");
        }
        Query::Clone { at, offset, .. } => {
            tracing::info!(
                x = at.x,
                y = at.y,
                dx = offset.x,
                dy = offset.y,
                cloned = affected,
                "clone"
            );
        }
    }
}
