//! Axes object graph
//!
//! Axes live in the [`Figure`](crate::Figure) arena and are referred to by [`AxesId`].
//! Relations between axes (panel parent, sharing) are stored as ids, never as references.
use crate::geom::Rect;
use crate::guide::{GuideKind, GuideQueue};
use crate::loc::Side;
use crate::panel::{PanelOptions, PanelStacks};
use crate::rc::Rc;
use crate::share::{Axis, GridSpan};
use crate::title::TitleSlots;

slotmap::new_key_type! {
    /// Handle to an axes of a figure
    pub struct AxesId;
}

/// What an axes is, and to which axes it is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A main axes, placed in the subplot grid or freestanding
    Main,
    /// A panel stacked on a side of its parent
    Panel {
        /// The main axes owning the panel
        parent: AxesId,
        /// The side of the parent the panel is stacked on
        side: Side,
    },
    /// An inset axes, drawn inside its parent
    Inset {
        /// The axes containing the inset
        parent: AxesId,
    },
    /// A twin axes, sharing the area of its parent
    Twin {
        /// The twinned axes
        parent: AxesId,
    },
}

impl Kind {
    /// The axes this one is attached to
    pub const fn parent(&self) -> Option<AxesId> {
        match self {
            Kind::Main => None,
            Kind::Panel { parent, .. } | Kind::Inset { parent } | Kind::Twin { parent } => {
                Some(*parent)
            }
        }
    }

    /// The side of a panel, None for other kinds
    pub const fn side(&self) -> Option<Side> {
        match self {
            Kind::Panel { side, .. } => Some(*side),
            _ => None,
        }
    }

    /// Whether this is a panel
    pub const fn is_panel(&self) -> bool {
        matches!(self, Kind::Panel { .. })
    }

    /// Whether this is a main axes
    pub const fn is_main(&self) -> bool {
        matches!(self, Kind::Main)
    }
}

/// Visibility of the axes decorations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decorations {
    /// Whether spines are drawn
    pub spines: bool,
    /// Whether ticks and tick labels are drawn
    pub ticks: bool,
    /// Opacity of the background patch
    pub background_alpha: f32,
}

impl Default for Decorations {
    fn default() -> Self {
        Decorations {
            spines: true,
            ticks: true,
            background_alpha: 1.0,
        }
    }
}

impl Decorations {
    /// Decorations of a hidden axes: nothing visible
    pub const fn hidden() -> Self {
        Decorations {
            spines: false,
            ticks: false,
            background_alpha: 0.0,
        }
    }
}

/// A plotting surface and its bookkeeping state
#[derive(Debug, Clone)]
pub struct Axes {
    pub(crate) kind: Kind,
    pub(crate) number: Option<u32>,
    pub(crate) span: Option<GridSpan>,
    pub(crate) position: Rect,
    pub(crate) hidden: bool,
    pub(crate) panel_opts: Option<PanelOptions>,
    pub(crate) decorations: Decorations,
    pub(crate) panels: PanelStacks,
    pub(crate) children: Vec<AxesId>,
    pub(crate) titles: TitleSlots,
    pub(crate) legends: GuideQueue,
    pub(crate) colorbars: GuideQueue,
    pub(crate) shared: [Option<AxesId>; 2],
    pub(crate) stale: bool,
}

impl Axes {
    pub(crate) fn new(kind: Kind, position: Rect, rc: &Rc) -> Self {
        Axes {
            kind,
            number: None,
            span: None,
            position,
            hidden: false,
            panel_opts: None,
            decorations: Decorations::default(),
            panels: PanelStacks::new(),
            children: Vec::new(),
            titles: TitleSlots::new(rc),
            legends: GuideQueue::new(GuideKind::Legend),
            colorbars: GuideQueue::new(GuideKind::Colorbar),
            shared: [None, None],
            stale: true,
        }
    }

    /// The kind of axes
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The panel side, None if this is not a panel
    pub fn side(&self) -> Option<Side> {
        self.kind.side()
    }

    /// The parent axes, if any
    pub fn parent(&self) -> Option<AxesId> {
        self.kind.parent()
    }

    /// The number of the axes, used for a-b-c labels
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    /// The position in the subplot grid
    pub fn grid_span(&self) -> Option<GridSpan> {
        self.span
    }

    /// The position in figure fraction coordinates
    pub fn position(&self) -> &Rect {
        &self.position
    }

    /// Whether the axes was hidden to be filled by a guide
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The options the panel was created with
    pub fn panel_options(&self) -> Option<&PanelOptions> {
        self.panel_opts.as_ref()
    }

    /// Whether the panel takes part in the sharing of its main axes.
    /// Always false for non-panels.
    pub fn is_share_eligible(&self) -> bool {
        self.panel_opts.is_some_and(|opts| opts.share)
    }

    /// The visibility of decorations
    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    /// The panel stacks
    pub fn panels(&self) -> &PanelStacks {
        &self.panels
    }

    /// Insets and twins attached to this axes
    pub fn children(&self) -> &[AxesId] {
        &self.children
    }

    /// The title slots
    pub fn titles(&self) -> &TitleSlots {
        &self.titles
    }

    /// The legend queue
    pub fn legends(&self) -> &GuideQueue {
        &self.legends
    }

    /// The colorbar queue
    pub fn colorbars(&self) -> &GuideQueue {
        &self.colorbars
    }

    /// The axes this one follows on `axis`
    pub fn shared(&self, axis: Axis) -> Option<AxesId> {
        self.shared[axis.index()]
    }

    /// For panels, the axes followed along the panel length
    pub fn shared_long_axis(&self) -> Option<AxesId> {
        self.side().and_then(|side| self.shared(side.long_axis()))
    }

    /// For panels, the axes followed across the panel thickness
    pub fn shared_short_axis(&self) -> Option<AxesId> {
        self.side().and_then(|side| self.shared(side.short_axis()))
    }

    /// Whether titles need a new layout before drawing
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub(crate) fn queue(&self, kind: GuideKind) -> &GuideQueue {
        match kind {
            GuideKind::Legend => &self.legends,
            GuideKind::Colorbar => &self.colorbars,
        }
    }

    pub(crate) fn queue_mut(&mut self, kind: GuideKind) -> &mut GuideQueue {
        match kind {
            GuideKind::Legend => &mut self.legends,
            GuideKind::Colorbar => &mut self.colorbars,
        }
    }
}
