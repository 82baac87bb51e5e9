use std::collections::BTreeMap;

use ndarray::Array2;

/// Statistics for a single connected component.
#[derive(Clone, Debug)]
pub struct ComponentStats {
    /// Resolved label for this component (the smallest provisional label).
    pub label: u32,
    /// Number of pixels in the component.
    pub area: usize,
    /// Bounding box: (min_row, max_row, min_col, max_col).
    pub bbox: (usize, usize, usize, usize),
    /// First pixel of the component in raster order: (row, col).
    pub first_pixel: (usize, usize),
    /// Sum of pixel row indices.
    pub sum_row: f64,
    /// Sum of pixel column indices.
    pub sum_col: f64,
}

/// Label map plus per-component statistics.
#[derive(Clone, Debug)]
pub struct LabeledComponents {
    /// Resolved label per pixel, 0 for background.
    pub labels: Array2<u32>,
    /// Components in discovery order (raster order of their first pixel).
    pub components: Vec<ComponentStats>,
}

/// Perform connected component analysis on a binary mask using two-pass
/// labeling with union-find. Uses 8-connectivity (left, upper-left, upper and
/// upper-right neighbors are already labeled when a pixel is visited).
pub fn connected_components(mask: &Array2<bool>) -> LabeledComponents {
    let (h, w) = mask.dim();
    let mut labels = Array2::<u32>::zeros((h, w));
    if h == 0 || w == 0 {
        return LabeledComponents {
            labels,
            components: Vec::new(),
        };
    }

    let mut next_label: u32 = 1;
    // parent[0] is the background and never read.
    let mut parent: Vec<u32> = vec![0];

    // Pass 1: assign provisional labels.
    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            let mut neighbors = [0u32; 4];
            if col > 0 {
                neighbors[0] = labels[[row, col - 1]];
            }
            if row > 0 {
                if col > 0 {
                    neighbors[1] = labels[[row - 1, col - 1]];
                }
                neighbors[2] = labels[[row - 1, col]];
                if col + 1 < w {
                    neighbors[3] = labels[[row - 1, col + 1]];
                }
            }

            let smallest = neighbors.iter().copied().filter(|&l| l > 0).min();
            match smallest {
                None => {
                    parent.push(next_label);
                    labels[[row, col]] = next_label;
                    next_label += 1;
                }
                Some(smallest) => {
                    labels[[row, col]] = smallest;
                    for &other in neighbors.iter().filter(|&&l| l > 0 && l != smallest) {
                        union(&mut parent, smallest, other);
                    }
                }
            }
        }
    }

    for label in 1..next_label {
        let root = find(&mut parent, label);
        parent[label as usize] = root;
    }

    // Pass 2: resolve labels and collect stats. Roots are the smallest label
    // of each set, and labels are handed out in raster order, so ordering by
    // root is ordering by first pixel.
    let mut stats_map = BTreeMap::<u32, ComponentStats>::new();

    for row in 0..h {
        for col in 0..w {
            let lbl = labels[[row, col]];
            if lbl == 0 {
                continue;
            }
            let root = parent[lbl as usize];
            labels[[row, col]] = root;

            let entry = stats_map.entry(root).or_insert(ComponentStats {
                label: root,
                area: 0,
                bbox: (row, row, col, col),
                first_pixel: (row, col),
                sum_row: 0.0,
                sum_col: 0.0,
            });

            entry.area += 1;
            entry.sum_row += row as f64;
            entry.sum_col += col as f64;
            entry.bbox.0 = entry.bbox.0.min(row);
            entry.bbox.1 = entry.bbox.1.max(row);
            entry.bbox.2 = entry.bbox.2.min(col);
            entry.bbox.3 = entry.bbox.3.max(col);
        }
    }

    LabeledComponents {
        labels,
        components: stats_map.into_values().collect(),
    }
}

/// Root of `x`, halving the path on the way up.
fn find(parent: &mut [u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        let grandparent = parent[parent[x as usize] as usize];
        parent[x as usize] = grandparent;
        x = grandparent;
    }
    x
}

/// Join the sets of `a` and `b`. The smaller root always wins, so a set's root
/// is its earliest label.
fn union(parent: &mut [u32], a: u32, b: u32) {
    let (ra, rb) = (find(parent, a), find(parent, b));
    match ra.cmp(&rb) {
        std::cmp::Ordering::Less => parent[rb as usize] = ra,
        std::cmp::Ordering::Greater => parent[ra as usize] = rb,
        std::cmp::Ordering::Equal => {}
    }
}
