//! Triangulated surface representation and area calculation
//!
//! A surface mesh is a flat, ordered list of triangles loaded from one STL
//! file. No connectivity is kept; the only derived quantity needed for
//! boundary generation is the total surface area.

use nalgebra::Point3;

/// Single triangle in 3-D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Corner positions in file order
    pub vertices: [Point3<f64>; 3],
}

impl Triangle {
    /// Create a triangle from its three corners
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Triangle area as half the cross-product magnitude of two edges.
    ///
    /// Collinear corners give zero.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [v0, v1, v2] = self.vertices;
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        edge1.cross(&edge2).norm() / 2.0
    }
}

/// Named triangulated surface
#[derive(Debug, Clone, Default)]
pub struct SurfaceMesh {
    /// Surface name (STL file stem)
    pub name: String,
    /// Triangles in file order
    pub triangles: Vec<Triangle>,
}

impl SurfaceMesh {
    /// Create a surface from already loaded triangles
    pub fn from_triangles(name: impl Into<String>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            triangles,
        }
    }

    /// Number of triangles
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the surface has no triangles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Calculate total surface area
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Get surface bounds
    #[must_use]
    pub fn bounds(&self) -> (Point3<f64>, Point3<f64>) {
        let mut corners = self.triangles.iter().flat_map(|t| t.vertices);
        let Some(first) = corners.next() else {
            return (Point3::origin(), Point3::origin());
        };

        corners.fold((first, first), |(mut min_point, mut max_point), vertex| {
            min_point.x = min_point.x.min(vertex.x);
            min_point.y = min_point.y.min(vertex.y);
            min_point.z = min_point.z.min(vertex.z);

            max_point.x = max_point.x.max(vertex.x);
            max_point.y = max_point.y.max(vertex.y);
            max_point.z = max_point.z.max(vertex.z);
            (min_point, max_point)
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit cube, two triangles per face
    pub(crate) fn unit_cube(side: f64) -> Vec<Triangle> {
        let p = |x: f64, y: f64, z: f64| Point3::new(x * side, y * side, z * side);
        let quads = [
            [p(0., 0., 0.), p(1., 0., 0.), p(1., 1., 0.), p(0., 1., 0.)],
            [p(0., 0., 1.), p(1., 0., 1.), p(1., 1., 1.), p(0., 1., 1.)],
            [p(0., 0., 0.), p(1., 0., 0.), p(1., 0., 1.), p(0., 0., 1.)],
            [p(0., 1., 0.), p(1., 1., 0.), p(1., 1., 1.), p(0., 1., 1.)],
            [p(0., 0., 0.), p(0., 1., 0.), p(0., 1., 1.), p(0., 0., 1.)],
            [p(1., 0., 0.), p(1., 1., 0.), p(1., 1., 1.), p(1., 0., 1.)],
        ];
        quads
            .iter()
            .flat_map(|[a, b, c, d]| [Triangle::new(*a, *b, *c), Triangle::new(*a, *c, *d)])
            .collect()
    }

    #[test]
    fn right_triangle_area() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        assert_relative_eq!(tri.area(), 0.5);
    }

    #[test]
    fn degenerate_triangle_has_zero_area() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(tri.area(), 0.0);
    }

    #[test]
    fn cube_area_is_order_independent() {
        let triangles = unit_cube(2.0);
        assert_eq!(triangles.len(), 12);

        let forward = SurfaceMesh::from_triangles("cube", triangles.clone());
        let mut reversed_triangles = triangles;
        reversed_triangles.reverse();
        let reversed = SurfaceMesh::from_triangles("cube", reversed_triangles);

        assert_relative_eq!(forward.surface_area(), 24.0, epsilon = 1e-12);
        assert_relative_eq!(forward.surface_area(), reversed.surface_area(), epsilon = 1e-12);
    }

    #[test]
    fn empty_surface() {
        let mesh = SurfaceMesh::default();
        assert!(mesh.is_empty());
        assert_eq!(mesh.surface_area(), 0.0);
        assert_eq!(mesh.bounds(), (Point3::origin(), Point3::origin()));
    }

    #[test]
    fn bounds_cover_all_corners() {
        let mesh = SurfaceMesh::from_triangles("cube", unit_cube(3.0));
        let (min_point, max_point) = mesh.bounds();
        assert_eq!(min_point, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max_point, Point3::new(3.0, 3.0, 3.0));
    }
}
