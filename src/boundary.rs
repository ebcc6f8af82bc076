//! Boundary-condition model
//!
//! Surfaces are classified once, by name, into [`SurfaceKind`]. Each kind maps
//! to one [`BoundaryCondition`]; the fixed domain patches and the surface
//! patches together form the [`BoundaryField`] that the exporter renders.

use crate::config::BoundaryConstants;
use crate::error::{BoundaryError, BoundaryResult};
use crate::import::SurfaceFile;
use std::path::PathBuf;

/// Surface classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Heated surface carrying a specified gradient
    HeatFlux,
    /// Surface held at the ambient temperature
    FixedValue,
}

impl SurfaceKind {
    /// Classify a surface name by marker substring
    #[must_use]
    pub fn classify(name: &str, flux_marker: &str) -> Self {
        if name.contains(flux_marker) {
            Self::HeatFlux
        } else {
            Self::FixedValue
        }
    }
}

/// Classified geometry surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub name: String,
    pub path: PathBuf,
    pub kind: SurfaceKind,
}

impl Surface {
    /// Classify a discovered surface file
    #[must_use]
    pub fn from_file(file: SurfaceFile, flux_marker: &str) -> Self {
        let kind = SurfaceKind::classify(&file.name, flux_marker);
        Self {
            name: file.name,
            path: file.path,
            kind,
        }
    }
}

/// Condition applied to one patch
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCondition {
    /// `fixedValue` with a uniform value
    FixedValue { value: f64 },
    /// `zeroGradient`
    ZeroGradient,
    /// `fixedGradient` with a uniform gradient and reference value
    FixedGradient { gradient: f64, value: f64 },
}

impl BoundaryCondition {
    /// OpenFOAM type keyword
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::FixedValue { .. } => "fixedValue",
            Self::ZeroGradient => "zeroGradient",
            Self::FixedGradient { .. } => "fixedGradient",
        }
    }
}

/// Named patch with its condition
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPatch {
    /// Patch name, or a quoted regular expression over patch names
    pub name: String,
    pub condition: BoundaryCondition,
}

impl BoundaryPatch {
    pub fn new(name: impl Into<String>, condition: BoundaryCondition) -> Self {
        Self {
            name: name.into(),
            condition,
        }
    }
}

/// Complete boundary field of the temperature file
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryField {
    /// Uniform internal field value
    pub internal_field: f64,
    /// Domain patches (inlet, zero-gradient pattern, floor)
    pub domain_patches: Vec<BoundaryPatch>,
    /// One patch per surface, in discovery order
    pub surface_patches: Vec<BoundaryPatch>,
    /// Verbatim trailing directive
    pub include_directive: String,
}

impl BoundaryField {
    /// Field with the fixed domain patches and no surfaces
    #[must_use]
    pub fn with_domain_patches(constants: &BoundaryConstants, weather_temperature: f64) -> Self {
        let domain_patches = vec![
            BoundaryPatch::new(
                "inlet",
                BoundaryCondition::FixedValue {
                    value: weather_temperature,
                },
            ),
            BoundaryPatch::new(
                format!("\"{}\"", constants.zero_gradient_pattern),
                BoundaryCondition::ZeroGradient,
            ),
            BoundaryPatch::new(
                "floor",
                BoundaryCondition::FixedValue {
                    value: constants.floor_temperature,
                },
            ),
        ];

        Self {
            internal_field: constants.internal_field,
            domain_patches,
            surface_patches: Vec::new(),
            include_directive: constants.include_directive.clone(),
        }
    }

    /// Append a surface patch
    pub fn push_surface(&mut self, patch: BoundaryPatch) {
        self.surface_patches.push(patch);
    }

    /// All patches in output order
    pub fn patches(&self) -> impl Iterator<Item = &BoundaryPatch> {
        self.domain_patches.iter().chain(self.surface_patches.iter())
    }
}

/// Round to two decimal places on the exact binary value, ties to even.
///
/// Returns `None` for non-finite input.
#[must_use]
pub fn round2(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    format!("{value:.2}").parse().ok()
}

/// Heat flux (W/m²) of a surface: `max(round(power / area, 2), min_flux)`.
///
/// A missing, non-positive or non-finite area is rejected, as is an area
/// whose quotient overflows, so that no infinite or NaN gradient can reach
/// the output.
pub fn heat_flux(surface: &str, power_w: f64, area: Option<f64>, min_flux: f64) -> BoundaryResult<f64> {
    match area {
        Some(a) if a.is_finite() && a > 0.0 => round2(power_w / a)
            .filter(|flux| flux.is_finite())
            .map(|flux| flux.max(min_flux))
            .ok_or_else(|| BoundaryError::invalid_area(surface, area)),
        _ => Err(BoundaryError::invalid_area(surface, area)),
    }
}

/// Boundary condition for a classified surface.
///
/// `flux_area` is only consulted for heat-flux surfaces.
pub fn surface_condition(
    surface: &Surface,
    constants: &BoundaryConstants,
    power_w: f64,
    flux_area: Option<f64>,
) -> BoundaryResult<BoundaryCondition> {
    match surface.kind {
        SurfaceKind::HeatFlux => {
            let gradient = heat_flux(&surface.name, power_w, flux_area, constants.min_heat_flux)?;
            log::debug!("Calculated heat flux for {}: {} W/m²", surface.name, gradient);
            Ok(BoundaryCondition::FixedGradient {
                gradient,
                value: constants.gradient_reference,
            })
        }
        SurfaceKind::FixedValue => Ok(BoundaryCondition::FixedValue {
            value: constants.ambient_temperature,
        }),
    }
}
