//! Render module: capabilities required from the drawing library.
//!
//! This crate does no rendering. Text measurement and scene mutations are delegated
//! to adapters implementing [`TextMetricsProvider`] and [`SceneMutator`].
//! The position of axes in the subplot grid is queried through
//! [`GridPositionProvider`](crate::share::GridPositionProvider).

use crate::Error;
use crate::axes::{AxesId, Decorations};
use crate::guide::colorbar::Orientation;
use crate::guide::{GuideKind, GuideObj, Handle};
use crate::loc::GuideLoc;
use crate::style::{Props, StyledText, TextCommand};

/// Measures rendered text
pub trait TextMetricsProvider {
    /// The width of `text` once rendered, in points
    fn text_width(&self, text: &StyledText) -> f32;
}

/// Mutates the scene of the drawing library
pub trait SceneMutator {
    /// Draw a text in the frame of `axes`
    fn draw_text(&mut self, axes: AxesId, text: &TextCommand) -> Result<(), Error>;

    /// Update the decorations (spines, ticks, background) of `axes`
    fn set_decorations(&mut self, axes: AxesId, decorations: &Decorations) -> Result<(), Error>;

    /// Draw a legend in `axes` and return a reference to it
    fn draw_legend(&mut self, axes: AxesId, legend: &LegendRequest) -> Result<GuideObj, Error>;

    /// Draw a colorbar in `axes` and return a reference to it
    fn draw_colorbar(
        &mut self,
        axes: AxesId,
        colorbar: &ColorbarRequest,
    ) -> Result<GuideObj, Error>;

    /// Detach a guide previously drawn from the scene
    fn remove_guide(&mut self, kind: GuideKind, obj: GuideObj) -> Result<(), Error>;
}

/// A legend entry
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// The artist represented
    pub handle: Handle,
    /// Its label. None lets the scene use the label of the artist.
    pub label: Option<String>,
}

/// A row of a legend with centered rows
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    /// Entries of the row
    pub entries: Vec<LegendEntry>,
    /// Vertical band of the row (bottom, top) in axes units
    pub band: (f32, f32),
}

/// How the legend entries are laid out
#[derive(Debug, Clone, PartialEq)]
pub enum LegendLayout {
    /// A regular legend, entries filling columns first
    Columns {
        /// Number of columns
        ncol: usize,
        /// Entries in column-major order
        entries: Vec<LegendEntry>,
    },
    /// One legend per row, each row being centered
    CenteredRows {
        /// Rows from top to bottom
        rows: Vec<LegendRow>,
    },
}

/// Everything needed to draw a legend
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRequest {
    /// Location inside the axes
    pub loc: GuideLoc,
    /// The entries
    pub layout: LegendLayout,
    /// Title of the legend
    pub title: Option<String>,
    /// Font size in points
    pub fontsize: f32,
    /// Other properties
    pub props: Props,
}

/// Everything needed to draw a colorbar
#[derive(Debug, Clone, PartialEq)]
pub struct ColorbarRequest {
    /// Location inside the axes
    pub loc: GuideLoc,
    /// Orientation of the colorbar
    pub orientation: Orientation,
    /// Mappable or artists the colors come from
    pub handles: Vec<Handle>,
    /// Tick labels or artist labels
    pub labels: Vec<String>,
    /// Levels to tick
    pub ticks: Vec<f64>,
    /// Length as a fraction of the axes
    pub length: f32,
    /// Colorbar label
    pub label: Option<String>,
    /// Other properties
    pub props: Props,
}
