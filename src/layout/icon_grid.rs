use serde::{Deserialize, Serialize};

use super::LayoutConfig;

/// Icons under one pixel are never useful; the minimum is floored here.
const SMALLEST_ICON: f64 = 1.0;
const EPS: f64 = 1e-9;

/// How a region's projects are laid out as a grid of square icons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IconGrid {
    pub columns: usize,
    pub rows: usize,
    /// Edge length of every icon in the region.
    pub icon_size: f64,
    /// Spacing between neighbouring icons.
    pub gap: f64,
    /// Number of projects drawn.
    pub displayed: usize,
    /// Number of projects left out (the "+N more" count).
    pub overflow: usize,
    /// Whether a grid cell after the last icon holds the "+N more" marker.
    pub overflow_cell: bool,
}

impl IconGrid {
    /// Cells in use: displayed icons plus the marker cell, if any.
    pub fn cells_used(&self) -> usize {
        self.displayed + usize::from(self.overflow_cell)
    }
}

/// Largest cell size such that `cells` cells with `gap` between them fit in
/// `extent`.
fn fit(extent: f64, cells: usize, gap: f64) -> f64 {
    (extent - (cells as f64 - 1.0) * gap) / cells as f64
}

/// Round down to a whole pixel without leaving `[min, max]`.
fn snap(size: f64, min: f64, max: f64) -> f64 {
    size.floor().max(min).min(max)
}

/// Pick columns, rows and icon size for `count` icons in a `width`×`height`
/// box.
///
/// Every column count is tried with just enough rows to hold all icons; the
/// winner has the largest icon (capped at `max_icon_size`), then the
/// column/row ratio closest to the box's aspect ratio, then the fewest cells.
/// When even the winner would be smaller than `min_icon_size`, the grid is
/// filled at the minimum size instead and the remainder is reported as
/// overflow, optionally giving up one cell for the "+N more" marker.
pub fn resolve_icon_grid(width: f64, height: f64, count: usize, cfg: &LayoutConfig) -> IconGrid {
    let min = cfg.min_icon_size.max(SMALLEST_ICON);
    let max = cfg.max_icon_size.max(min);
    let gap = cfg.icon_gap.max(0.0);

    let empty = |icon_size: f64, overflow: usize| IconGrid {
        columns: 0,
        rows: 0,
        icon_size,
        gap,
        displayed: 0,
        overflow,
        overflow_cell: false,
    };

    if count == 0 {
        return empty(max, 0);
    }
    if !(width >= min && height >= min) {
        return empty(min, count);
    }

    let aspect = width / height;
    // (size, aspect error, cells, columns, rows)
    let mut best: Option<(f64, f64, usize, usize, usize)> = None;
    for columns in 1..=count {
        let rows = count.div_ceil(columns);
        let size = fit(width, columns, gap).min(fit(height, rows, gap)).min(max);
        let err = ((columns as f64 / rows as f64) / aspect).ln().abs();
        let cells = columns * rows;
        let better = match best {
            None => true,
            Some((b_size, b_err, b_cells, _, _)) => {
                if (size - b_size).abs() > EPS {
                    size > b_size
                } else if (err - b_err).abs() > EPS {
                    err < b_err
                } else {
                    cells < b_cells
                }
            }
        };
        if better {
            best = Some((size, err, cells, columns, rows));
        }
    }

    if let Some((size, _, _, columns, rows)) = best {
        if size >= min - EPS {
            return IconGrid {
                columns,
                rows,
                icon_size: snap(size, min, max),
                gap,
                displayed: count,
                overflow: 0,
                overflow_cell: false,
            };
        }
    }

    // Not everything fits at the minimum size: fill the grid at that size.
    let columns = (((width + gap) / (min + gap)).floor() as usize).max(1);
    let capacity_rows = (((height + gap) / (min + gap)).floor() as usize).max(1);
    let capacity = columns * capacity_rows;

    let (displayed, overflow_cell) = if capacity >= count {
        (count, false)
    } else if cfg.reserve_overflow_cell {
        (capacity - 1, true)
    } else {
        (capacity, false)
    };
    let used = displayed + usize::from(overflow_cell);
    let rows = used.div_ceil(columns).clamp(1, capacity_rows);
    let icon_size = snap(fit(width, columns, gap).min(fit(height, rows, gap)), min, max);

    IconGrid {
        columns,
        rows,
        icon_size,
        gap,
        displayed,
        overflow: count - displayed,
        overflow_cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_accounts_for_gaps() {
        assert_eq!(fit(100.0, 1, 8.0), 100.0);
        assert_eq!(fit(108.0, 2, 8.0), 50.0);
    }

    #[test]
    fn snap_stays_in_range() {
        assert_eq!(snap(43.33, 40.0, 80.0), 43.0);
        assert_eq!(snap(40.2, 40.5, 80.0), 40.5);
        assert_eq!(snap(95.0, 40.0, 80.0), 80.0);
    }
}
