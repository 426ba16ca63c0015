#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]
/*!
 * # plotive-axes
 * _axes bookkeeping_. Titles, panels, axis sharing and guide queues of a figure,
 * independent of any rendering library.
 *
 * The crate keeps the state that sits between a plotting front-end and a drawing
 * library: which axes are stacked as panels on the side of which subplot, which axes
 * share their X or Y axis with which other one, what text lives in which title slot,
 * and which legends and colorbars wait to be drawn.
 *
 * ## Get started
 *
 * ```
 * use plotive_axes::{Figure, GridSpan, Side, PanelOptions, TitleLoc, Axis};
 * use plotive_axes::style::TextStyle;
 *
 * # fn main() -> Result<(), plotive_axes::Error> {
 * let mut fig = Figure::new().with_grid(2, 2);
 *
 * // subplots of a same row share their X axis
 * let a = fig.add_subplot(GridSpan::cell(0, 0))?;
 * let b = fig.add_subplot(GridSpan::cell(0, 1))?;
 * assert_eq!(fig.get(b)?.shared(Axis::X), Some(a));
 *
 * // a panel stacked on top of `a`
 * let top = fig.add_panel(a, Side::Top, PanelOptions::new())?;
 * assert_eq!(fig.panels(a, Side::Top, false)?, vec![top]);
 *
 * fig.set_title(a, TitleLoc::Center, Some("Hello"), &TextStyle::new())?;
 * // the title goes above the visible top panel
 * fig.arbitrate_outer_slots(a)?;
 * assert_eq!(fig.get(top)?.titles().get(TitleLoc::Center).text(), "Hello");
 * # Ok(())
 * # }
 * ```
 *
 * ## Collaborators
 *
 * Nothing is rendered here. The drawing library is reached through three capabilities:
 *  - [`share::GridPositionProvider`]: the position of axes in the subplot grid.
 *    [`Figure`] implements it from the spans given to [`Figure::add_subplot`].
 *  - [`render::TextMetricsProvider`]: the rendered width of titles.
 *  - [`render::SceneMutator`]: draws texts, legends and colorbars, and detaches guides.
 *
 * [`Figure::draw`] drives a draw cycle: guides are flushed, outer titles are assigned
 * to the main axes or to its top panel, and every title is laid out and handed to the scene.
 *
 * ## Configuration
 *
 * Settings are held in an explicit [`rc::Rc`] snapshot owned by the figure.
 * There is no global state.
 */
// Plotive is released under the MIT License with the following copyright:
// Copyright (c) 2025-2026 RÃ©mi Thebault

pub mod axes;
mod error;
pub mod figure;
pub mod guide;
pub mod loc;
pub mod panel;
pub mod rc;
pub mod render;
pub mod share;
pub mod style;
pub mod title;

pub use axes::{Axes, AxesId, Kind};
pub use error::Error;
pub use figure::Figure;
pub use guide::{GuideKind, GuideObj, Handle, Payload};
pub use loc::{GuideLoc, Side, TitleLoc};
pub use panel::PanelOptions;
pub use rc::Rc;
pub use share::{Axis, GridSpan, Share};
pub use title::{Abc, Format, TitleAbove};

/// Rexports of [`plotive_axes_base::color`]` items
pub mod color {
    pub use plotive_axes_base::color::*;
}
pub use color::ColorU8;

/// Rexports of [`plotive_axes_base::geom`]` items
pub mod geom {
    pub use plotive_axes_base::geom::*;
}
