//! Configuration settings
//!
//! [`Rc`] is an immutable snapshot of the settings read by the bookkeeping
//! operations. A [`Figure`](crate::Figure) owns one, and every operation reads it
//! explicitly: there is no global configuration state.
//! [`Overrides`] is an explicit override map from which a new snapshot is derived.
use crate::loc::{GuideLoc, Side, TitleLoc};
use crate::style::{TextStyle, defaults};
use crate::title::TitleAbove;

/// Settings snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Rc {
    /// Padding between the axes and the titles, in points
    pub title_pad: f32,
    /// Padding between an a-b-c label and a title sharing its location, in points
    pub abc_title_pad: f32,
    /// Whether outer titles go to the outermost top panel
    pub title_above: TitleAbove,
    /// Default location of the title
    pub title_loc: TitleLoc,
    /// Default location of the a-b-c label
    pub abc_loc: TitleLoc,
    /// The a-b-c style (e.g. `"a"`, `"(A)"`), or None to disable a-b-c labels
    pub abc: Option<String>,
    /// Style of titles
    pub title_style: TextStyle,
    /// Style of a-b-c labels
    pub abc_style: TextStyle,
    /// Border and box properties of titles at inner locations
    pub title_border: TextStyle,
    /// Border and box properties of a-b-c labels at inner locations
    pub abc_border: TextStyle,
    /// Default number of legend columns
    pub legend_ncol: usize,
    /// Legend font size in points
    pub legend_fontsize: f32,
    /// Vertical space between legend entries, in font size units
    pub legend_labelspacing: f32,
    /// Default legend location
    pub legend_loc: GuideLoc,
    /// Default colorbar location
    pub colorbar_loc: GuideLoc,
    /// Tick label size in points, used to space colorbar ticks
    pub tick_labelsize: f32,
    /// Maximum depth of the parent chain of an axes
    pub max_parent_depth: usize,
}

impl Default for Rc {
    fn default() -> Self {
        Rc {
            title_pad: defaults::TITLE_PAD,
            abc_title_pad: defaults::ABC_TITLE_PAD,
            title_above: TitleAbove::PanelIfVisible,
            title_loc: TitleLoc::Center,
            abc_loc: TitleLoc::Left,
            abc: None,
            title_style: TextStyle::new()
                .with_size(defaults::TITLE_FONT_SIZE)
                .with_weight(defaults::TITLE_FONT_WEIGHT)
                .with_family(defaults::FONT_FAMILY),
            abc_style: TextStyle::new()
                .with_size(defaults::ABC_FONT_SIZE)
                .with_weight(defaults::ABC_FONT_WEIGHT)
                .with_family(defaults::FONT_FAMILY),
            title_border: TextStyle::new().with_border(true),
            abc_border: TextStyle::new().with_border(true),
            legend_ncol: defaults::LEGEND_NCOL,
            legend_fontsize: defaults::LEGEND_FONT_SIZE,
            legend_labelspacing: defaults::LEGEND_LABEL_SPACING,
            legend_loc: GuideLoc::Best,
            colorbar_loc: GuideLoc::Outer(Side::Right),
            tick_labelsize: defaults::TICK_LABEL_SIZE,
            max_parent_depth: defaults::MAX_PARENT_DEPTH,
        }
    }
}

/// Explicit overrides of an [`Rc`] snapshot.
/// Fields left to `None` keep the value of the snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    /// See [`Rc::title_pad`]
    pub title_pad: Option<f32>,
    /// See [`Rc::abc_title_pad`]
    pub abc_title_pad: Option<f32>,
    /// See [`Rc::title_above`]
    pub title_above: Option<TitleAbove>,
    /// See [`Rc::title_loc`]
    pub title_loc: Option<TitleLoc>,
    /// See [`Rc::abc_loc`]
    pub abc_loc: Option<TitleLoc>,
    /// See [`Rc::abc`]
    pub abc: Option<Option<String>>,
    /// Merged on top of [`Rc::title_style`]
    pub title_style: Option<TextStyle>,
    /// Merged on top of [`Rc::abc_style`]
    pub abc_style: Option<TextStyle>,
    /// See [`Rc::legend_ncol`]
    pub legend_ncol: Option<usize>,
    /// See [`Rc::legend_loc`]
    pub legend_loc: Option<GuideLoc>,
    /// See [`Rc::colorbar_loc`]
    pub colorbar_loc: Option<GuideLoc>,
    /// See [`Rc::max_parent_depth`]
    pub max_parent_depth: Option<usize>,
}

impl Rc {
    /// Derive a new snapshot with the overrides applied
    pub fn with_overrides(&self, ov: &Overrides) -> Rc {
        let mut rc = self.clone();
        if let Some(pad) = ov.title_pad {
            rc.title_pad = pad;
        }
        if let Some(pad) = ov.abc_title_pad {
            rc.abc_title_pad = pad;
        }
        if let Some(above) = ov.title_above {
            rc.title_above = above;
        }
        if let Some(loc) = ov.title_loc {
            rc.title_loc = loc;
        }
        if let Some(loc) = ov.abc_loc {
            rc.abc_loc = loc;
        }
        if let Some(abc) = &ov.abc {
            rc.abc = abc.clone();
        }
        if let Some(style) = &ov.title_style {
            rc.title_style.merge(style);
        }
        if let Some(style) = &ov.abc_style {
            rc.abc_style.merge(style);
        }
        if let Some(ncol) = ov.legend_ncol {
            rc.legend_ncol = ncol;
        }
        if let Some(loc) = ov.legend_loc {
            rc.legend_loc = loc;
        }
        if let Some(loc) = ov.colorbar_loc {
            rc.colorbar_loc = loc;
        }
        if let Some(depth) = ov.max_parent_depth {
            rc.max_parent_depth = depth;
        }
        rc
    }
}
