//! Panel stacks
//!
//! A main axes owns one stack of panels per side. Each stack is ordered from
//! the inside (closest to the main axes) to the outside.
use crate::Error;
use crate::axes::AxesId;
use crate::geom::{Rect, Size};
use crate::loc::Side;
use crate::style::defaults;

/// The four panel stacks of a main axes
#[derive(Debug, Clone, Default)]
pub struct PanelStacks {
    stacks: [Vec<AxesId>; 4],
}

impl PanelStacks {
    /// Empty stacks
    pub fn new() -> Self {
        Self::default()
    }

    /// The stack on `side`, inside to outside
    pub fn get(&self, side: Side) -> &[AxesId] {
        &self.stacks[side.index()]
    }

    /// The outermost panel on `side`
    pub fn outermost(&self, side: Side) -> Option<AxesId> {
        self.get(side).last().copied()
    }

    /// Whether no panel is stacked on any side
    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(Vec::is_empty)
    }

    /// Iterate over all stacks, in [`Side::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Side, &[AxesId])> {
        Side::ALL.into_iter().map(|side| (side, self.get(side)))
    }

    /// The side and stack index of `panel`
    pub fn position(&self, panel: AxesId) -> Option<(Side, usize)> {
        self.iter().find_map(|(side, stack)| {
            stack
                .iter()
                .position(|p| *p == panel)
                .map(|idx| (side, idx))
        })
    }

    pub(crate) fn push(&mut self, side: Side, panel: AxesId) {
        let stack = &mut self.stacks[side.index()];
        if !stack.contains(&panel) {
            stack.push(panel);
        }
    }

    /// Remove `panel` from its stack, keeping the order of the others
    pub(crate) fn remove(&mut self, panel: AxesId) -> Option<Side> {
        let (side, idx) = self.position(panel)?;
        self.stacks[side.index()].remove(idx);
        Some(side)
    }
}

/// Options of a new panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelOptions {
    /// Thickness of the panel in inches.
    /// Defaults depend on whether the panel is filled.
    pub width: Option<f32>,
    /// Space between the panel and the previous one (or the main axes), in inches
    pub space: Option<f32>,
    /// Whether the panel takes part in the sharing of its main axes
    pub share: bool,
    /// Whether the panel is created hidden, to be filled by a legend or a colorbar
    pub filled: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        PanelOptions {
            width: None,
            space: None,
            share: true,
            filled: false,
        }
    }
}

impl PanelOptions {
    /// Default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Options of a panel filled by a guide
    pub fn filled() -> Self {
        PanelOptions {
            share: false,
            filled: true,
            ..Self::default()
        }
    }

    /// Set the panel thickness (inches) and return self for chaining
    pub fn with_width(self, width: f32) -> Self {
        Self {
            width: Some(width),
            ..self
        }
    }

    /// Set the space before the panel (inches) and return self for chaining
    pub fn with_space(self, space: f32) -> Self {
        Self {
            space: Some(space),
            ..self
        }
    }

    /// Set whether the panel is shared and return self for chaining
    pub fn with_share(self, share: bool) -> Self {
        Self { share, ..self }
    }

    /// The panel thickness in inches
    pub fn width_or_default(&self) -> f32 {
        match (self.width, self.filled) {
            (Some(w), _) => w,
            (None, true) => defaults::PANEL_FILLED_WIDTH,
            (None, false) => defaults::PANEL_WIDTH,
        }
    }

    /// The space before the panel in inches
    pub fn space_or_default(&self) -> f32 {
        self.space.unwrap_or(defaults::PANEL_SPACE)
    }

    /// Check that width and space are finite and not negative
    pub fn validate(&self) -> Result<(), Error> {
        for size in [self.width_or_default(), self.space_or_default()] {
            if !size.is_finite() || size < 0.0 {
                return Err(Error::InvalidPanelSize(size));
            }
        }
        Ok(())
    }
}

/// Compute the default strip of a panel, in figure fraction coordinates.
///
/// `offset` is the distance in inches between the edge of `parent` and the inner
/// edge of the panel, `width` the thickness of the panel in inches.
/// Returns None if the strip cannot be represented (non-finite values).
pub fn panel_rect(
    parent: &Rect,
    side: Side,
    offset: f32,
    width: f32,
    fig_size: Size,
) -> Option<Rect> {
    let fw = fig_size.width().max(f32::EPSILON);
    let fh = fig_size.height().max(f32::EPSILON);
    match side {
        Side::Left => Rect::try_from_xywh(
            parent.left() - (offset + width) / fw,
            parent.y(),
            width / fw,
            parent.height(),
        ),
        Side::Right => Rect::try_from_xywh(
            parent.right() + offset / fw,
            parent.y(),
            width / fw,
            parent.height(),
        ),
        Side::Top => Rect::try_from_xywh(
            parent.x(),
            parent.top() - (offset + width) / fh,
            parent.width(),
            width / fh,
        ),
        Side::Bottom => Rect::try_from_xywh(
            parent.x(),
            parent.bottom() + offset / fh,
            parent.width(),
            width / fh,
        ),
    }
}
