//! Error type shared by all the bookkeeping operations
use std::fmt;

use crate::axes::AxesId;
use crate::geom::Rect;
use crate::share::{Axis, GridSpan};

/// Errors raised by axes bookkeeping operations.
///
/// All of them signal a mistake of the caller and are surfaced as-is:
/// no operation retries or falls back to a default.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A side name is not one of left, right, bottom or top
    InvalidSide(String),
    /// A panel was requested on an axes that is itself a panel
    NestedPanel(AxesId),
    /// Several axes sit at the reference position of a sharing group
    AmbiguousShare {
        /// The shared axis
        axis: Axis,
        /// The grid start index shared by the candidates
        position: u32,
    },
    /// The operation requires an axes placed in the subplot grid
    NotASubplot(AxesId),
    /// A title slot name is unknown
    UnknownSlot(String),
    /// A legend or colorbar location is unknown
    UnknownLoc(String),
    /// The axes handle does not belong to the figure (or was removed)
    UnknownAxes(AxesId),
    /// Axes numbers start at 1
    InvalidNumber(u32),
    /// An a-b-c style must contain the letter `a` or `A`
    InvalidAbcStyle(String),
    /// A grid span is empty or lies outside of the figure grid
    InvalidSpan(GridSpan),
    /// A panel width or space is negative or not finite, or places the panel out of range
    InvalidPanelSize(f32),
    /// Inset bounds place the inset out of range
    InvalidBounds(Rect),
    /// The ownership chain of an axes exceeded the configured depth
    CycleDetected(AxesId),
    /// The drawing collaborator failed
    Backend(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSide(side) => write!(f, "Invalid side: {:?}", side),
            Error::NestedPanel(id) => {
                write!(f, "Cannot create panels for existing panel axes {:?}", id)
            }
            Error::AmbiguousShare { axis, position } => write!(
                f,
                "Ambiguous {} axis sharing: several axes start at grid index {}",
                axis, position
            ),
            Error::NotASubplot(id) => write!(f, "Axes {:?} is not a subplot", id),
            Error::UnknownSlot(name) => write!(f, "Unknown title location: {:?}", name),
            Error::UnknownLoc(name) => write!(f, "Unknown guide location: {:?}", name),
            Error::UnknownAxes(id) => write!(f, "Unknown axes: {:?}", id),
            Error::InvalidNumber(num) => write!(f, "Invalid number {}. Must be integer >=1", num),
            Error::InvalidAbcStyle(style) => write!(
                f,
                "Invalid a-b-c style {:?}. Must include letter \"a\" or \"A\"",
                style
            ),
            Error::InvalidSpan(span) => write!(f, "Invalid grid span: {:?}", span),
            Error::InvalidPanelSize(size) => {
                write!(f, "Invalid panel size {}. Must be finite and >= 0", size)
            }
            Error::InvalidBounds(bounds) => write!(f, "Invalid inset bounds: {:?}", bounds),
            Error::CycleDetected(id) => {
                write!(f, "Ownership chain of axes {:?} is too deep or cyclic", id)
            }
            Error::Backend(reason) => write!(f, "Backend error: {}", reason),
        }
    }
}

impl std::error::Error for Error {}
