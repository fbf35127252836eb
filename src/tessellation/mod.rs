//! Nearest-neighbor tessellation used to enlarge hover hit regions.
//!
//! The render pipeline only depends on the [`Tessellator`] trait, so any
//! Voronoi implementation can be substituted. The built-in
//! [`HalfPlaneTessellator`] is the direct construction: each cell is the
//! bounds rectangle clipped against the perpendicular-bisector half-plane
//! toward every other site.

use smallvec::SmallVec;

use crate::core::{Color, Point};
use crate::error::{ChartError, ChartResult};
use crate::render::PathPrimitive;

/// Convex polygon of all points closer to `site` than to any other site,
/// clipped to the bounded plot rectangle. Vertices are empty when the site
/// duplicates an earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub site: usize,
    pub vertices: SmallVec<[Point; 8]>,
}

impl Cell {
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Point-in-convex-polygon test. Boundary points count as inside.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        if self.is_degenerate() {
            return false;
        }

        let mut sign = 0.0f64;
        for (index, vertex) in self.vertices.iter().enumerate() {
            let next = self.vertices[(index + 1) % self.vertices.len()];
            let cross = (next.x - vertex.x) * (point.y - vertex.y)
                - (next.y - vertex.y) * (point.x - vertex.x);
            if cross.abs() <= 1e-9 {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Faintly stroked closed path for the hover overlay, or `None` for a
    /// degenerate cell.
    #[must_use]
    pub fn to_path(&self, stroke_width: f64, stroke: Color) -> Option<PathPrimitive> {
        if self.is_degenerate() {
            return None;
        }
        Some(PathPrimitive::stroked(
            self.vertices.to_vec(),
            true,
            stroke_width,
            stroke,
        ))
    }
}

/// Pluggable Voronoi capability: pixel sites in, one cell per site out.
///
/// Implementations must emit cells in site order so cell `i` belongs to
/// record `i`, and must clip every cell to the bounds rectangle.
pub trait Tessellator: std::fmt::Debug {
    fn cells(&self, sites: &[Point], bounds_width: f64, bounds_height: f64)
    -> ChartResult<Vec<Cell>>;
}

/// Direct Voronoi construction by repeated half-plane clipping.
///
/// Quadratic in the number of sites, which is fine at tutorial dataset sizes;
/// swap in a sweep-line implementation behind [`Tessellator`] if that ever
/// changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfPlaneTessellator;

impl Tessellator for HalfPlaneTessellator {
    fn cells(
        &self,
        sites: &[Point],
        bounds_width: f64,
        bounds_height: f64,
    ) -> ChartResult<Vec<Cell>> {
        if !bounds_width.is_finite()
            || !bounds_height.is_finite()
            || bounds_width <= 0.0
            || bounds_height <= 0.0
        {
            return Err(ChartError::InvalidData(
                "tessellation bounds must be finite and > 0".to_owned(),
            ));
        }
        for site in sites {
            if !site.is_finite() {
                return Err(ChartError::InvalidData(
                    "tessellation sites must be finite".to_owned(),
                ));
            }
        }

        let rectangle = [
            Point::new(0.0, 0.0),
            Point::new(bounds_width, 0.0),
            Point::new(bounds_width, bounds_height),
            Point::new(0.0, bounds_height),
        ];

        let mut cells = Vec::with_capacity(sites.len());
        for (index, site) in sites.iter().enumerate() {
            // A site that duplicates an earlier one yields an empty cell;
            // the first occurrence owns the shared region.
            let duplicate = sites[..index].iter().any(|earlier| earlier == site);
            if duplicate {
                cells.push(Cell {
                    site: index,
                    vertices: SmallVec::new(),
                });
                continue;
            }

            let mut polygon: Vec<Point> = rectangle.to_vec();
            for (other_index, other) in sites.iter().enumerate() {
                if other_index == index || other == site {
                    continue;
                }
                polygon = clip_half_plane(&polygon, *site, *other);
                if polygon.is_empty() {
                    break;
                }
            }

            cells.push(Cell {
                site: index,
                vertices: polygon.into_iter().collect(),
            });
        }

        Ok(cells)
    }
}

/// Clips `polygon` to the half-plane of points at least as close to `keep`
/// as to `away` (Sutherland-Hodgman against the perpendicular bisector).
fn clip_half_plane(polygon: &[Point], keep: Point, away: Point) -> Vec<Point> {
    let mid = Point::new((keep.x + away.x) / 2.0, (keep.y + away.y) / 2.0);
    let normal = Point::new(away.x - keep.x, away.y - keep.y);
    let signed = |p: Point| (p.x - mid.x) * normal.x + (p.y - mid.y) * normal.y;

    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    for (index, vertex) in polygon.iter().enumerate() {
        let next = polygon[(index + 1) % polygon.len()];
        let side_vertex = signed(*vertex);
        let side_next = signed(next);

        if side_vertex <= 0.0 {
            clipped.push(*vertex);
        }
        if (side_vertex < 0.0 && side_next > 0.0) || (side_vertex > 0.0 && side_next < 0.0) {
            let t = side_vertex / (side_vertex - side_next);
            clipped.push(Point::new(
                vertex.x + t * (next.x - vertex.x),
                vertex.y + t * (next.y - vertex.y),
            ));
        }
    }
    clipped
}
