//! `foam-bc` - Temperature boundary conditions for OpenFOAM cases
//!
//! Builds the `0/T` file of a case from the STL surfaces in
//! `constant/triSurface`. Every surface gets a boundary patch: surfaces whose
//! name contains the flux marker receive a `fixedGradient` heat flux derived
//! from the design power, all others are held at the ambient temperature.
//!
//! # Architecture
//!
//! - **import**: surface discovery and STL loading
//! - **mesh**: triangle and surface-area calculation
//! - **boundary**: surface classification, heat flux, boundary conditions
//! - **export**: OpenFOAM `volScalarField` rendering and file output
//! - **config**: generator configuration
//!
//! # Examples
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use foam_bc::{BoundaryConfig, BoundaryGenerator};
//!
//! let config = BoundaryConfig::for_case("my_case")
//!     .with_power(3069.0)
//!     .with_weather_temperature(300.0);
//!
//! let output = BoundaryGenerator::new(config).generate()?;
//! println!("wrote {}", output.display());
//! # Ok(())
//! # }
//! ```

pub mod boundary;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod mesh;

// Re-export commonly used types
pub use boundary::{BoundaryCondition, BoundaryField, BoundaryPatch, Surface, SurfaceKind};
pub use config::{BoundaryConfig, BoundaryConstants, PatchAreaSource};
pub use error::{BoundaryError, BoundaryResult};
pub use export::TemperatureFile;
pub use import::{StlImporter, SurfaceFile};
pub use mesh::{SurfaceMesh, Triangle};

use std::path::PathBuf;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default generator parameters
pub mod defaults {
    /// STL directory relative to the case root
    pub const DEFAULT_STL_DIRECTORY: &str = "constant/triSurface";

    /// Temperature file relative to the case root
    pub const DEFAULT_OUTPUT_PATH: &str = "0/T";

    /// Geometry file extension, matched case-insensitively
    pub const STL_EXTENSION: &str = "stl";

    /// Total design heating power (W)
    pub const DEFAULT_POWER_W: f64 = 3069.0;

    /// Heated zone area (m²)
    pub const DEFAULT_PATCH_AREA: f64 = 25.0;

    /// Weather temperature at the inlet (K)
    pub const DEFAULT_WEATHER_TEMPERATURE: f64 = 300.0;

    /// Internal field temperature (K)
    pub const DEFAULT_INTERNAL_FIELD: f64 = 290.0;

    /// Fixed temperature of non-flux surfaces (K)
    pub const DEFAULT_AMBIENT_TEMPERATURE: f64 = 292.15;

    /// Floor temperature (K)
    pub const DEFAULT_FLOOR_TEMPERATURE: f64 = 290.0;

    /// Reference value of `fixedGradient` surfaces (K)
    pub const DEFAULT_GRADIENT_REFERENCE: f64 = 300.0;

    /// Heat flux lower bound (W/m²)
    pub const DEFAULT_MIN_HEAT_FLUX: f64 = 0.01;

    /// Relative difference between supplied and computed area that gets reported
    pub const AREA_MISMATCH_TOLERANCE: f64 = 0.01;

    pub const DEFAULT_ZERO_GRADIENT_PATTERN: &str = "(outlet|front|back|top)";
    pub const DEFAULT_FLUX_MARKER: &str = "Ar_Condicionado";
    pub const DEFAULT_INCLUDE_DIRECTIVE: &str = "#includeEtc \"caseDicts/setConstraintTypes\"";
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BoundaryCondition, BoundaryConfig, BoundaryConstants, BoundaryError, BoundaryField,
        BoundaryGenerator, BoundaryPatch, BoundaryResult, PatchAreaSource, StlImporter, Surface,
        SurfaceKind, SurfaceMesh, TemperatureFile, Triangle,
    };

    pub use crate::defaults::*;
}

/// Temperature boundary file generator
pub struct BoundaryGenerator {
    config: BoundaryConfig,
    importer: StlImporter,
}

impl BoundaryGenerator {
    /// Create generator with configuration
    #[must_use]
    pub fn new(config: BoundaryConfig) -> Self {
        Self {
            config,
            importer: StlImporter::new(),
        }
    }

    /// Generator configuration
    #[must_use]
    pub const fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    /// Discover and classify the surfaces of the STL directory
    pub fn surfaces(&self) -> BoundaryResult<Vec<Surface>> {
        let marker = &self.config.constants.flux_marker;
        let surfaces: Vec<Surface> = self
            .importer
            .discover_surfaces(&self.config.stl_directory)?
            .into_iter()
            .map(|file| Surface::from_file(file, marker))
            .collect();

        if surfaces.is_empty() {
            log::warn!(
                "No STL files found in {}, boundaryField will only hold domain patches",
                self.config.stl_directory.display()
            );
        }
        Ok(surfaces)
    }

    /// Build the boundary field without touching the output file
    pub fn build_field(&self) -> BoundaryResult<BoundaryField> {
        self.config.validate()?;

        let constants = &self.config.constants;
        let mut field = BoundaryField::with_domain_patches(constants, self.config.weather_temperature);

        for surface in self.surfaces()? {
            let flux_area = match surface.kind {
                SurfaceKind::HeatFlux => self.flux_area(&surface)?,
                SurfaceKind::FixedValue => None,
            };
            let condition = boundary::surface_condition(&surface, constants, self.config.power_w, flux_area)?;
            field.push_surface(BoundaryPatch::new(surface.name, condition));
        }

        log::info!(
            "Built boundary field with {} surface patches",
            field.surface_patches.len()
        );
        Ok(field)
    }

    /// Render the temperature file
    pub fn render(&self) -> BoundaryResult<String> {
        let field = self.build_field()?;
        Ok(TemperatureFile::new(&field).render())
    }

    /// Build the boundary field and overwrite the output file
    pub fn generate(&self) -> BoundaryResult<PathBuf> {
        let field = self.build_field()?;
        TemperatureFile::new(&field).write_to(&self.config.output_path)?;
        Ok(self.config.output_path.clone())
    }

    /// Divisor area of a heat-flux surface.
    ///
    /// The surface's own STL area is always computed. A fixed area is used as
    /// given even when the STL cannot be read; in per-surface mode an
    /// unreadable STL leaves the area unknown. Errors that are not
    /// recoverable per surface are propagated.
    fn flux_area(&self, surface: &Surface) -> BoundaryResult<Option<f64>> {
        let computed = match self.importer.surface_area(&surface.path) {
            Ok(area) => {
                log::debug!("Calculated area for {}: {:.2} m²", surface.name, area);
                Some(area)
            }
            Err(e) if e.is_recoverable() => {
                log::warn!("{e}");
                None
            }
            Err(e) => return Err(e),
        };

        match self.config.patch_area {
            PatchAreaSource::Fixed(area) => {
                if let Some(computed) = computed {
                    let mismatch = (computed - area).abs() / area.abs().max(f64::EPSILON);
                    if mismatch > defaults::AREA_MISMATCH_TOLERANCE {
                        log::warn!(
                            "{}: supplied patch area {:.2} m² differs from STL area {:.2} m²",
                            surface.name,
                            area,
                            computed
                        );
                    }
                }
                Ok(Some(area))
            }
            PatchAreaSource::PerSurface => Ok(computed),
        }
    }
}
