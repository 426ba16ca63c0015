//! Axis sharing
//!
//! Axes placed in the subplot grid share their axes with siblings aligned with them,
//! and panels share their axes with the main axes they are attached to.
//! Sharing is recorded as directed `child -> parent` assignments, per axis.
//!
//! Grid positions are given by a [`GridPositionProvider`]. The [`Figure`](crate::Figure)
//! implements it from the spans given to [`Figure::add_subplot`](crate::Figure::add_subplot).
use std::fmt;

use crate::Error;
use crate::axes::AxesId;
use crate::loc::Side;

/// A plotting axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// The horizontal axis
    X,
    /// The vertical axis
    Y,
}

impl Axis {
    /// The other axis
    pub const fn other(&self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    pub(crate) const fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Rows and columns covered by an axes in the subplot grid.
///
/// Ranges are half-open (`start..end`). Row 0 is the first row of the grid,
/// column 0 the first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpan {
    /// First row (inclusive) and last row (exclusive)
    pub rows: (u32, u32),
    /// First column (inclusive) and last column (exclusive)
    pub cols: (u32, u32),
}

impl GridSpan {
    /// Build a span from its row and column ranges
    pub const fn new(rows: (u32, u32), cols: (u32, u32)) -> Self {
        GridSpan { rows, cols }
    }

    /// A span covering a single cell
    pub const fn cell(row: u32, col: u32) -> Self {
        GridSpan {
            rows: (row, row + 1),
            cols: (col, col + 1),
        }
    }

    /// Whether both ranges are non-empty
    pub const fn is_valid(&self) -> bool {
        self.rows.0 < self.rows.1 && self.cols.0 < self.cols.1
    }

    /// Whether the span fits in a grid of the given shape
    pub const fn fits(&self, nrows: u32, ncols: u32) -> bool {
        self.is_valid() && self.rows.1 <= nrows && self.cols.1 <= ncols
    }

    /// The range that must coincide for two axes to share `axis`.
    /// Axes of a same row share X, axes of a same column share Y.
    pub const fn group_range(&self, axis: Axis) -> (u32, u32) {
        match axis {
            Axis::X => self.rows,
            Axis::Y => self.cols,
        }
    }

    /// The start index ordering the members of a sharing group on `axis`:
    /// the first column for X, the first row for Y.
    pub const fn order_start(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.cols.0,
            Axis::Y => self.rows.0,
        }
    }

    /// The grid index of the given edge: first row for top, last row for bottom,
    /// first column for left, last column for right.
    pub const fn edge(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.cols.0,
            Side::Right => self.cols.1,
            Side::Top => self.rows.0,
            Side::Bottom => self.rows.1,
        }
    }
}

/// Gives the position of axes in the subplot grid
pub trait GridPositionProvider {
    /// The grid span of the axes, or None if it is not in the grid
    fn grid_span(&self, axes: AxesId) -> Option<GridSpan>;
}

/// Compute the sharing group of `axes` on `axis`, among `candidates`.
///
/// The group is made of all candidates whose [`GridSpan::group_range`] coincides with
/// the one of `axes` (`axes` itself is always part of it).
/// The reference of the group is returned first, followed by the other members in
/// candidate order. The reference is the leftmost member for X (lowest column start)
/// and the bottommost member for Y (highest row start), see [`GridSpan::order_start`].
///
/// Errors:
///  - [`Error::NotASubplot`] if `axes` has no grid position
///  - [`Error::AmbiguousShare`] if several members start at the reference position
pub fn share_targets<G>(
    axes: AxesId,
    axis: Axis,
    candidates: &[AxesId],
    grid: &G,
) -> Result<Vec<AxesId>, Error>
where
    G: GridPositionProvider + ?Sized,
{
    let span = grid.grid_span(axes).ok_or(Error::NotASubplot(axes))?;
    let range = span.group_range(axis);

    let mut group: Vec<(AxesId, u32)> = vec![(axes, span.order_start(axis))];
    for &cand in candidates {
        if cand == axes {
            continue;
        }
        let Some(cspan) = grid.grid_span(cand) else {
            continue;
        };
        if cspan.group_range(axis) == range {
            group.push((cand, cspan.order_start(axis)));
        }
    }

    // row 0 is the top row: the bottommost axes has the highest row start
    let starts = group.iter().map(|(_, start)| *start);
    let extreme = match axis {
        Axis::X => starts.min(),
        Axis::Y => starts.max(),
    }
    .unwrap_or(0);
    if group.iter().filter(|(_, start)| *start == extreme).count() > 1 {
        return Err(Error::AmbiguousShare {
            axis,
            position: extreme,
        });
    }

    // restore candidate order, reference first
    let order = |id: AxesId| candidates.iter().position(|c| *c == id).unwrap_or(usize::MAX);
    group.sort_by_key(|(id, start)| (*start != extreme, order(*id)));
    Ok(group.into_iter().map(|(id, _)| id).collect())
}

/// Return the candidates whose `side` edge lies on the same grid row or column
/// as the `side` edge of `axes`. If none does, `axes` alone is returned.
pub fn span_axes<G>(
    axes: AxesId,
    side: Side,
    candidates: &[AxesId],
    grid: &G,
) -> Result<Vec<AxesId>, Error>
where
    G: GridPositionProvider + ?Sized,
{
    let span = grid.grid_span(axes).ok_or(Error::NotASubplot(axes))?;
    let edge = span.edge(side);
    let res: Vec<AxesId> = candidates
        .iter()
        .copied()
        .filter(|c| grid.grid_span(*c).is_some_and(|s| s.edge(side) == edge))
        .collect();
    if res.is_empty() {
        Ok(vec![axes])
    } else {
        Ok(res)
    }
}

/// A sharing assignment: `child` shares `axis` with `parent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShareEdge {
    /// The axes following the parent
    pub child: AxesId,
    /// The shared axis
    pub axis: Axis,
    /// The axes leading the share
    pub parent: AxesId,
}

/// Figure-wide sharing configuration.
/// Controls sharing between sibling subplots; panels always share with their main axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Share {
    /// Share X axes between subplots of a same row
    pub x: bool,
    /// Share Y axes between subplots of a same column
    pub y: bool,
}

impl Default for Share {
    fn default() -> Self {
        Share { x: true, y: true }
    }
}

impl Share {
    /// No sharing between subplots
    pub const fn none() -> Self {
        Share { x: false, y: false }
    }

    /// Whether the given axis is shared
    pub const fn get(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}
