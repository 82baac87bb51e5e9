use ndarray::Array2;

/// Binary dilation with a (2 * radius + 1) square kernel.
///
/// A pixel becomes true if ANY pixel in its square neighborhood is true.
/// Out-of-bounds neighbors are treated as false. Radius 0 returns a copy.
pub fn dilate(mask: &Array2<bool>, radius: usize) -> Array2<bool> {
    if radius == 0 {
        return mask.clone();
    }
    // A square structuring element separates into a row pass and a column pass.
    let rows = dilate_rows(mask, radius);
    dilate_cols(&rows, radius)
}

fn dilate_rows(mask: &Array2<bool>, radius: usize) -> Array2<bool> {
    let (h, w) = mask.dim();
    let mut result = Array2::from_elem((h, w), false);

    for row in 0..h {
        for col in 0..w {
            let lo = col.saturating_sub(radius);
            let hi = (col + radius).min(w - 1);
            result[[row, col]] = (lo..=hi).any(|c| mask[[row, c]]);
        }
    }

    result
}

fn dilate_cols(mask: &Array2<bool>, radius: usize) -> Array2<bool> {
    let (h, w) = mask.dim();
    let mut result = Array2::from_elem((h, w), false);

    for row in 0..h {
        let lo = row.saturating_sub(radius);
        let hi = (row + radius).min(h - 1);
        for col in 0..w {
            result[[row, col]] = (lo..=hi).any(|r| mask[[r, col]]);
        }
    }

    result
}
