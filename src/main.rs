//! Command-line front end for `foam-bc`
//!
//! Run from an OpenFOAM case directory (or pass `--case`) to regenerate
//! `0/T` from `constant/triSurface/*.stl`.

use clap::Parser;
use foam_bc::{BoundaryConfig, BoundaryGenerator, PatchAreaSource};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Case root holding `constant/triSurface` and `0/`
    #[clap(long, default_value = ".")]
    case: PathBuf,

    /// JSON configuration file; its paths are used as given
    #[clap(long, conflicts_with = "case")]
    config: Option<PathBuf>,

    /// Total design heating power (W)
    #[clap(long)]
    power: Option<f64>,

    /// Heated patch area (m²) applied to every flux surface
    #[clap(long, conflicts_with = "per_surface_area")]
    patch_area: Option<f64>,

    /// Use each flux surface's own STL area
    #[clap(long)]
    per_surface_area: bool,

    /// Weather temperature applied at the inlet
    #[clap(long)]
    weather_temperature: Option<f64>,

    /// Output file, defaults to `<case>/0/T`
    #[clap(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> foam_bc::BoundaryResult<BoundaryConfig> {
        let mut config = match &self.config {
            Some(path) => BoundaryConfig::from_json_file(path)?,
            None => BoundaryConfig::for_case(&self.case),
        };

        if let Some(power) = self.power {
            config = config.with_power(power);
        }
        if let Some(area) = self.patch_area {
            config = config.with_patch_area(PatchAreaSource::Fixed(area));
        }
        if self.per_surface_area {
            config = config.with_patch_area(PatchAreaSource::PerSurface);
        }
        if let Some(temperature) = self.weather_temperature {
            config = config.with_weather_temperature(temperature);
        }
        if let Some(output) = self.output {
            config = config.with_output_path(output);
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let generator = BoundaryGenerator::new(Args::parse().into_config()?);
    log::debug!("Using configuration {:?}", generator.config());

    let output = generator.generate()?;
    println!(
        "T boundary condition file has been generated successfully at {}.",
        output.display()
    );
    Ok(())
}
