//! STL surface discovery and loading
//!
//! Surfaces are discovered as the `.stl` files (extension matched
//! case-insensitively) of one directory and loaded through `stl_io`, which
//! accepts both ASCII and binary STL.

use crate::error::{BoundaryError, BoundaryResult};
use crate::mesh::{SurfaceMesh, Triangle};
use nalgebra::Point3;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Geometry file found in the surface directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceFile {
    /// Surface name (file name without extension)
    pub name: String,
    /// Full path to the STL file
    pub path: PathBuf,
}

/// STL importer for surface directories
#[derive(Debug, Clone)]
pub struct StlImporter {
    /// File extension accepted as geometry, without the dot
    extension: String,
}

impl StlImporter {
    /// Create new importer accepting `.stl` files
    #[must_use]
    pub fn new() -> Self {
        Self {
            extension: crate::defaults::STL_EXTENSION.to_string(),
        }
    }

    /// List geometry files of a directory, sorted by file name
    pub fn discover_surfaces<P: AsRef<Path>>(&self, directory: P) -> BoundaryResult<Vec<SurfaceFile>> {
        let directory = directory.as_ref();
        let entries = fs::read_dir(directory).map_err(|e| BoundaryError::filesystem(directory, e))?;

        let mut surfaces = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| BoundaryError::filesystem(directory, e))?.path();
            if !path.is_file() || !self.accepts(&path) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                log::warn!("Skipping geometry file with non UTF-8 name: {}", path.display());
                continue;
            };
            surfaces.push(SurfaceFile {
                name: name.to_string(),
                path,
            });
        }

        surfaces.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        log::debug!("Discovered {} surfaces in {}", surfaces.len(), directory.display());
        Ok(surfaces)
    }

    /// Load an STL file into a named surface mesh
    pub fn load_surface<P: AsRef<Path>>(&self, path: P) -> BoundaryResult<SurfaceMesh> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| BoundaryError::geometry_load(path, e.to_string()))?;
        let mut reader = BufReader::new(file);

        let stl = stl_io::read_stl(&mut reader)
            .map_err(|e| BoundaryError::geometry_load(path, e.to_string()))?;

        let vertices: Vec<Point3<f64>> = stl
            .vertices
            .iter()
            .map(|v| Point3::new(f64::from(v[0]), f64::from(v[1]), f64::from(v[2])))
            .collect();

        let mut triangles = Vec::with_capacity(stl.faces.len());
        for face in &stl.faces {
            let corner = |i: usize| {
                vertices.get(face.vertices[i]).copied().ok_or_else(|| {
                    BoundaryError::geometry_load(path, format!("vertex index {} out of range", face.vertices[i]))
                })
            };
            triangles.push(Triangle::new(corner(0)?, corner(1)?, corner(2)?));
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mesh = SurfaceMesh::from_triangles(name, triangles);

        let (min_point, max_point) = mesh.bounds();
        log::debug!(
            "Loaded {} with {} triangles, bounds {:?} .. {:?}",
            path.display(),
            mesh.len(),
            min_point,
            max_point
        );
        Ok(mesh)
    }

    /// Total surface area of an STL file
    pub fn surface_area<P: AsRef<Path>>(&self, path: P) -> BoundaryResult<f64> {
        Ok(self.load_surface(path)?.surface_area())
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

impl Default for StlImporter {
    fn default() -> Self {
        Self::new()
    }
}
