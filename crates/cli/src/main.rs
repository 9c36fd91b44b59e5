use anyhow::{bail, Result};
use clap::Parser;
use tonearm::geometry::compute;
use tonearm::schemes::{self, SCHEMES};
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

#[derive(Parser)]
#[command(name = "tonearm")]
#[command(about = "Calculate offset angle and overhang from pivot-to-spindle distance and null points")]
struct Cmd {
    /// Pivot-to-spindle distance in millimetres
    pivot_to_spindle: Option<f64>,

    /// Alignment scheme to pull null points from
    #[arg(long, conflicts_with = "nulls")]
    scheme: Option<String>,

    /// Custom inner and outer null points in millimetres
    #[arg(long, num_args = 2, value_names = ["INNER", "OUTER"])]
    nulls: Option<Vec<f64>>,

    /// Show the built-in schemes and exit
    #[arg(long)]
    list_schemes: bool,

    /// Print the geometry as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    if let Err(err) = run(cmd) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cmd: Cmd) -> Result<()> {
    if cmd.list_schemes {
        print!("{}", report::scheme_listing(&SCHEMES));
        return Ok(());
    }

    let Some(pivot_to_spindle) = cmd.pivot_to_spindle else {
        bail!("pivot-to-spindle distance is required unless --list-schemes is used");
    };

    let (inner, outer) = resolve_nulls(&cmd)?;
    tracing::debug!(pivot_to_spindle, inner, outer, "inputs resolved");

    let geometry = compute(pivot_to_spindle, inner, outer)?;
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&geometry)?);
    } else {
        println!("{}", report::format_geometry(&geometry));
    }
    Ok(())
}

fn resolve_nulls(cmd: &Cmd) -> Result<(f64, f64)> {
    if let Some(nulls) = &cmd.nulls {
        // clap enforces exactly two values
        return Ok((nulls[0], nulls[1]));
    }
    if let Some(name) = &cmd.scheme {
        let Some(scheme) = schemes::find(name) else {
            bail!("unknown scheme {name:?}; see --list-schemes");
        };
        return Ok((scheme.inner_null, scheme.outer_null));
    }
    bail!("choose --scheme or provide --nulls")
}
