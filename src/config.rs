//! Generator configuration
//!
//! Every constant of the boundary file is carried by [`BoundaryConfig`]
//! rather than global state. Values can be read from a JSON file; missing
//! fields fall back to [`crate::defaults`].

use crate::defaults;
use crate::error::{BoundaryError, BoundaryResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Area used as the heat-flux divisor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchAreaSource {
    /// One externally supplied area (m²) applied to every flux surface
    Fixed(f64),
    /// Each flux surface's own STL area
    PerSurface,
}

impl Default for PatchAreaSource {
    fn default() -> Self {
        Self::Fixed(defaults::DEFAULT_PATCH_AREA)
    }
}

/// Fixed values written into the temperature file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConstants {
    /// Uniform internal field temperature
    pub internal_field: f64,
    /// `fixedValue` temperature of non-flux surfaces
    pub ambient_temperature: f64,
    /// `fixedValue` temperature of the floor patch
    pub floor_temperature: f64,
    /// `value` entry of `fixedGradient` surfaces
    pub gradient_reference: f64,
    /// Lower bound of the computed heat flux
    pub min_heat_flux: f64,
    /// Patch name pattern with a zero-gradient condition
    pub zero_gradient_pattern: String,
    /// Substring marking heat-flux surfaces
    pub flux_marker: String,
    /// Trailing include directive, copied verbatim
    pub include_directive: String,
}

impl Default for BoundaryConstants {
    fn default() -> Self {
        Self {
            internal_field: defaults::DEFAULT_INTERNAL_FIELD,
            ambient_temperature: defaults::DEFAULT_AMBIENT_TEMPERATURE,
            floor_temperature: defaults::DEFAULT_FLOOR_TEMPERATURE,
            gradient_reference: defaults::DEFAULT_GRADIENT_REFERENCE,
            min_heat_flux: defaults::DEFAULT_MIN_HEAT_FLUX,
            zero_gradient_pattern: defaults::DEFAULT_ZERO_GRADIENT_PATTERN.to_string(),
            flux_marker: defaults::DEFAULT_FLUX_MARKER.to_string(),
            include_directive: defaults::DEFAULT_INCLUDE_DIRECTIVE.to_string(),
        }
    }
}

/// Configuration for one generator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    /// Directory holding the surface STL files
    pub stl_directory: PathBuf,
    /// Output temperature file
    pub output_path: PathBuf,
    /// Total design heating power (W)
    pub power_w: f64,
    /// Heat-flux divisor area
    pub patch_area: PatchAreaSource,
    /// Weather temperature applied at the inlet
    pub weather_temperature: f64,
    /// Fixed values of the file
    pub constants: BoundaryConstants,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            stl_directory: PathBuf::from(defaults::DEFAULT_STL_DIRECTORY),
            output_path: PathBuf::from(defaults::DEFAULT_OUTPUT_PATH),
            power_w: defaults::DEFAULT_POWER_W,
            patch_area: PatchAreaSource::default(),
            weather_temperature: defaults::DEFAULT_WEATHER_TEMPERATURE,
            constants: BoundaryConstants::default(),
        }
    }
}

impl BoundaryConfig {
    /// Create configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for an OpenFOAM case directory
    #[must_use]
    pub fn for_case<P: AsRef<Path>>(case_dir: P) -> Self {
        let case_dir = case_dir.as_ref();
        Self {
            stl_directory: case_dir.join(defaults::DEFAULT_STL_DIRECTORY),
            output_path: case_dir.join(defaults::DEFAULT_OUTPUT_PATH),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> BoundaryResult<Self> {
        let path = path.as_ref();
        let json_str = fs::read_to_string(path).map_err(|e| BoundaryError::filesystem(path, e))?;
        Self::from_json_str(&json_str)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json_str: &str) -> BoundaryResult<Self> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Set STL directory
    #[must_use]
    pub fn with_stl_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.stl_directory = directory.into();
        self
    }

    /// Set output file path
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set total design power
    #[must_use]
    pub const fn with_power(mut self, power_w: f64) -> Self {
        self.power_w = power_w;
        self
    }

    /// Set heat-flux divisor area source
    #[must_use]
    pub const fn with_patch_area(mut self, patch_area: PatchAreaSource) -> Self {
        self.patch_area = patch_area;
        self
    }

    /// Set inlet weather temperature
    #[must_use]
    pub const fn with_weather_temperature(mut self, temperature: f64) -> Self {
        self.weather_temperature = temperature;
        self
    }

    /// Reject values that would make the document unreadable.
    ///
    /// Physical bounds of temperatures and power are not checked; the patch
    /// area is checked when a flux is actually derived from it.
    pub fn validate(&self) -> BoundaryResult<()> {
        if self.constants.flux_marker.is_empty() {
            return Err(BoundaryError::invalid_config("flux marker must not be empty"));
        }
        if self.constants.zero_gradient_pattern.is_empty() {
            return Err(BoundaryError::invalid_config("zero-gradient pattern must not be empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(BoundaryError::invalid_config("output path must not be empty"));
        }
        Ok(())
    }
}
