//! OpenFOAM temperature file export
//!
//! The whole document is rendered in memory before the output file is
//! opened, so a failure while assembling it never leaves a partial file.

use crate::boundary::{BoundaryCondition, BoundaryField, BoundaryPatch};
use crate::error::{BoundaryError, BoundaryResult};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const BANNER: &str = r"/*--------------------------------*- C++ -*----------------------------------*\
  =========                 |
  \      /  F ield         | OpenFOAM: The Open Source CFD Toolbox
   \    /   O peration     | Website:  https://openfoam.org
    \  /    A nd           | Version:  12
     \/     M anipulation  |
\*---------------------------------------------------------------------------*/";

const SEPARATOR: &str =
    "// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * //";

const FOOTER: &str =
    "// ************************************************************************* //";

/// Temperature dimensions `[mass length time temperature moles current luminosity]`
const TEMPERATURE_DIMENSIONS: &str = "[0 0 0 1 0 0 0]";

/// Scalar rendered with at least one decimal digit (`290` as `290.0`)
#[derive(Debug, Clone, Copy)]
pub struct FoamScalar(pub f64);

impl fmt::Display for FoamScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// `volScalarField` file for the temperature field `T`
pub struct TemperatureFile<'a> {
    field: &'a BoundaryField,
}

impl<'a> TemperatureFile<'a> {
    #[must_use]
    pub const fn new(field: &'a BoundaryField) -> Self {
        Self { field }
    }

    /// Render the complete document
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Overwrite `path` with the rendered document, creating parent directories
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> BoundaryResult<()> {
        let path = path.as_ref();
        let content = self.render();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BoundaryError::filesystem(parent, e))?;
        }

        let file = File::create(path).map_err(|e| BoundaryError::filesystem(path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(content.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| BoundaryError::filesystem(path, e))?;

        log::info!(
            "Wrote {} boundary patches to {}",
            self.field.domain_patches.len() + self.field.surface_patches.len(),
            path.display()
        );
        Ok(())
    }

    fn write_patch(f: &mut fmt::Formatter<'_>, patch: &BoundaryPatch) -> fmt::Result {
        writeln!(f, "    {}", patch.name)?;
        writeln!(f, "    {{")?;
        writeln!(f, "        {:<16}{};", "type", patch.condition.type_name())?;
        match patch.condition {
            BoundaryCondition::FixedValue { value } => {
                writeln!(f, "        {:<16}uniform {};", "value", FoamScalar(value))?;
            }
            BoundaryCondition::ZeroGradient => {}
            BoundaryCondition::FixedGradient { gradient, value } => {
                writeln!(f, "        {:<16}uniform {};", "gradient", FoamScalar(gradient))?;
                writeln!(f, "        {:<16}uniform {};", "value", FoamScalar(value))?;
            }
        }
        writeln!(f, "    }}")?;
        writeln!(f)
    }
}

impl fmt::Display for TemperatureFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER}")?;
        writeln!(f, "FoamFile")?;
        writeln!(f, "{{")?;
        writeln!(f, "    format      ascii;")?;
        writeln!(f, "    class       volScalarField;")?;
        writeln!(f, "    object      T;")?;
        writeln!(f, "}}")?;
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f)?;
        writeln!(f, "{:<16}{};", "dimensions", TEMPERATURE_DIMENSIONS)?;
        writeln!(f)?;
        writeln!(f, "{:<16}uniform {};", "internalField", FoamScalar(self.field.internal_field))?;
        writeln!(f)?;
        writeln!(f, "boundaryField")?;
        writeln!(f, "{{")?;
        for patch in self.field.patches() {
            Self::write_patch(f, patch)?;
        }
        writeln!(f, "    {}", self.field.include_directive)?;
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, "{FOOTER}")
    }
}
