//! Contour extraction from a binary mask.
//!
//! Components are found with 8-connected labeling, then the outer boundary of
//! each component is walked with Moore-neighbor tracing (clockwise in image
//! coordinates, y pointing down) until Jacob's stopping criterion is met: the
//! walk is back at the start pixel and about to repeat its first move.

use ndarray::Array2;

use super::components::{connected_components, ComponentStats};
use super::config::{AreaMethod, ContourApproximation};

/// Integer pixel coordinate. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Raw image moments of a component's pixel set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelMoments {
    /// Number of pixels (m00).
    pub count: usize,
    /// Sum of column indices (m10).
    pub sum_x: f64,
    /// Sum of row indices (m01).
    pub sum_y: f64,
}

impl PixelMoments {
    /// Area-weighted center `(x, y)` in pixel-index coordinates.
    pub fn centroid(&self) -> (f64, f64) {
        if self.count == 0 {
            return (0.0, 0.0);
        }
        let n = self.count as f64;
        (self.sum_x / n, self.sum_y / n)
    }
}

/// The outer boundary of one connected foreground region.
#[derive(Clone, Debug)]
pub struct Contour {
    /// Boundary pixels in clockwise order, starting at the region's first
    /// pixel in raster order.
    pub points: Vec<Point>,
    /// Area as measured by the configured `AreaMethod`.
    pub area: f64,
    /// Moments of the enclosed pixels.
    pub moments: PixelMoments,
}

impl Contour {
    /// Bounding box of the boundary points: (min_x, min_y, max_x, max_y).
    pub fn bounding_box(&self) -> (u32, u32, u32, u32) {
        let mut min_x = u32::MAX;
        let mut min_y = u32::MAX;
        let mut max_x = 0;
        let mut max_y = 0;
        for p in &self.points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        (min_x, min_y, max_x, max_y)
    }
}

/// Clockwise neighbor offsets (dx, dy), starting east.
const DIRECTIONS: [(i64, i64); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const WEST: usize = 4;

/// Find the contours of all connected foreground regions in `mask`.
///
/// Contours come back in discovery order: top-to-bottom, left-to-right by
/// each region's first pixel. An empty mask yields an empty vector.
pub fn extract_contours(
    mask: &Array2<bool>,
    approximation: ContourApproximation,
    area_method: AreaMethod,
) -> Vec<Contour> {
    let labeled = connected_components(mask);

    labeled
        .components
        .iter()
        .map(|component| {
            let traced = trace_boundary(&labeled.labels, component);
            let points = match approximation {
                ContourApproximation::None => traced,
                ContourApproximation::Simple => approximate_simple(&traced),
            };
            let area = match area_method {
                AreaMethod::PixelCount => component.area as f64,
                AreaMethod::Polygon => polygon_area(&points),
            };
            Contour {
                points,
                area,
                moments: PixelMoments {
                    count: component.area,
                    sum_x: component.sum_col,
                    sum_y: component.sum_row,
                },
            }
        })
        .collect()
}

/// Walk the outer boundary of `component` in the label map.
pub fn trace_boundary(labels: &Array2<u32>, component: &ComponentStats) -> Vec<Point> {
    let (row, col) = component.first_pixel;
    let start = (col as i64, row as i64);
    let inside = |(x, y): (i64, i64)| {
        x >= 0
            && y >= 0
            && (y as usize) < labels.nrows()
            && (x as usize) < labels.ncols()
            && labels[[y as usize, x as usize]] == component.label
    };
    let to_point = |(x, y): (i64, i64)| Point::new(x as u32, y as u32);

    let mut points = vec![to_point(start)];

    // The first pixel in raster order has no foreground to its west, north-west,
    // north or north-east, so the sweep can begin as if we arrived from the west.
    let Some(first_dir) = next_direction(&inside, start, WEST) else {
        return points;
    };

    let mut current = step(start, first_dir);
    let mut dir = first_dir;

    // (pixel, arrival direction) pairs are bounded by 8 * area, so the walk
    // closes within that many steps.
    let max_steps = 8 * component.area + 8;
    for _ in 0..max_steps {
        // Always found: the pixel we came from is a neighbor.
        let Some(next_dir) = next_direction(&inside, current, (dir + 4) % 8) else {
            break;
        };
        if current == start && next_dir == first_dir {
            break;
        }
        points.push(to_point(current));
        current = step(current, next_dir);
        dir = next_dir;
    }

    points
}

/// Sweep clockwise around `at`, starting just after `back`, and return the
/// direction of the first foreground neighbor.
fn next_direction<F>(inside: &F, at: (i64, i64), back: usize) -> Option<usize>
where
    F: Fn((i64, i64)) -> bool,
{
    (1..=8)
        .map(|k| (back + k) % 8)
        .find(|&d| inside(step(at, d)))
}

fn step((x, y): (i64, i64), dir: usize) -> (i64, i64) {
    let (dx, dy) = DIRECTIONS[dir];
    (x + dx, y + dy)
}

/// Drop boundary points that lie in the middle of a straight run, keeping
/// only the points where the walking direction changes.
pub fn approximate_simple(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }

    let delta = |a: Point, b: Point| (b.x as i64 - a.x as i64, b.y as i64 - a.y as i64);

    (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            delta(prev, points[i]) != delta(points[i], next)
        })
        .map(|i| points[i])
        .collect()
}

/// Shoelace area of a closed polygon.
pub fn polygon_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut twice_area = 0.0f64;
    let mut j = n - 1;
    for i in 0..n {
        twice_area += points[j].x as f64 * points[i].y as f64
            - points[i].x as f64 * points[j].y as f64;
        j = i;
    }
    twice_area.abs() / 2.0
}
