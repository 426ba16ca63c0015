//! The figure: arena of axes and entry point of all bookkeeping operations
use slotmap::SlotMap;

use crate::Error;
use crate::axes::{Axes, AxesId, Decorations, Kind};
use crate::geom::{Rect, Size};
use crate::guide::{GuideKind, GuideObj, GuideQueue, Payload, colorbar, legend};
use crate::loc::{GuideLoc, Side, TitleLoc};
use crate::panel::{PanelOptions, panel_rect};
use crate::rc::{Overrides, Rc};
use crate::render::{SceneMutator, TextMetricsProvider};
use crate::share::{self, Axis, GridPositionProvider, GridSpan, Share, ShareEdge};
use crate::style::{TextStyle, defaults};
use crate::title::{Format, TitleAbove, abc_label};

/// A figure, owning all its axes.
///
/// Main axes are placed in a subplot grid of `nrows` x `ncols` cells,
/// or freestanding at an arbitrary position. Panels, insets and twins are attached
/// to another axes and are removed along with it.
#[derive(Debug, Clone)]
pub struct Figure {
    axes: SlotMap<AxesId, Axes>,
    order: Vec<AxesId>,
    size: Size,
    rc: Rc,
    nrows: u32,
    ncols: u32,
    share: Share,
    next_number: u32,
}

impl Default for Figure {
    fn default() -> Self {
        Figure::new()
    }
}

impl GridPositionProvider for Figure {
    fn grid_span(&self, axes: AxesId) -> Option<GridSpan> {
        self.axes.get(axes).and_then(|ax| ax.span)
    }
}

impl Figure {
    /// Build an empty figure with a 1x1 grid and default settings
    pub fn new() -> Self {
        Figure {
            axes: SlotMap::with_key(),
            order: Vec::new(),
            size: defaults::FIG_SIZE,
            rc: Rc::default(),
            nrows: 1,
            ncols: 1,
            share: Share::default(),
            next_number: 1,
        }
    }

    /// Set the settings snapshot and return self for chaining
    pub fn with_rc(self, rc: Rc) -> Self {
        Self { rc, ..self }
    }

    /// Apply overrides to the settings snapshot and return self for chaining
    pub fn with_overrides(self, ov: &Overrides) -> Self {
        let rc = self.rc.with_overrides(ov);
        Self { rc, ..self }
    }

    /// Replace the settings snapshot by one derived with `ov`.
    /// Existing axes keep their titles; the new settings apply to later
    /// operations.
    pub fn set_rc_overrides(&mut self, ov: &Overrides) {
        self.rc = self.rc.with_overrides(ov);
        log::debug!("settings overridden: {:?}", ov);
    }

    /// Set the subplot grid shape and return self for chaining
    pub fn with_grid(self, nrows: u32, ncols: u32) -> Self {
        Self {
            nrows: nrows.max(1),
            ncols: ncols.max(1),
            ..self
        }
    }

    /// Set the physical size (inches) and return self for chaining
    pub fn with_size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    /// Set the sharing configuration and return self for chaining.
    /// Must be called before axes are added; use [`Figure::set_share`] afterwards.
    pub fn with_share(self, share: Share) -> Self {
        Self { share, ..self }
    }

    /// The settings snapshot
    pub fn rc(&self) -> &Rc {
        &self.rc
    }

    /// The physical size in inches
    pub fn size(&self) -> Size {
        self.size
    }

    /// The subplot grid shape (rows, columns)
    pub fn grid(&self) -> (u32, u32) {
        (self.nrows, self.ncols)
    }

    /// The sharing configuration
    pub fn share(&self) -> Share {
        self.share
    }

    /// The main axes, in creation order
    pub fn main_axes(&self) -> &[AxesId] {
        &self.order
    }

    /// Number of axes of all kinds
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Whether the figure has no axes
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Whether `id` refers to an axes of this figure
    pub fn contains(&self, id: AxesId) -> bool {
        self.axes.contains_key(id)
    }

    /// Get an axes
    pub fn get(&self, id: AxesId) -> Result<&Axes, Error> {
        self.axes.get(id).ok_or(Error::UnknownAxes(id))
    }

    fn get_mut(&mut self, id: AxesId) -> Result<&mut Axes, Error> {
        self.axes.get_mut(id).ok_or(Error::UnknownAxes(id))
    }

    /// Physical size (inches) of an axes
    pub fn axes_size(&self, id: AxesId) -> Result<Size, Error> {
        let pos = self.get(id)?.position;
        Ok(Size::new(
            pos.width() * self.size.width(),
            pos.height() * self.size.height(),
        ))
    }

    fn new_axes(&self, kind: Kind, position: Rect) -> Axes {
        Axes::new(kind, position, &self.rc)
    }

    fn insert_main(&mut self, span: Option<GridSpan>, position: Rect) -> Result<AxesId, Error> {
        let number = self.next_number;
        let mut ax = self.new_axes(Kind::Main, position);
        ax.number = Some(number);
        ax.span = span;
        if let Some(style) = &self.rc.abc {
            let label = abc_label(style, number)?;
            ax.titles.set(TitleLoc::Abc, Some(&label), &TextStyle::new());
        }
        let id = self.axes.insert(ax);
        self.order.push(id);
        self.next_number += 1;
        Ok(id)
    }

    /// Add a main axes covering `span` of the subplot grid.
    ///
    /// Sharing is recomputed for the whole figure. If that fails
    /// (e.g. [`Error::AmbiguousShare`]), the axes is not added.
    pub fn add_subplot(&mut self, span: GridSpan) -> Result<AxesId, Error> {
        if !span.is_valid() || !span.fits(self.nrows, self.ncols) {
            return Err(Error::InvalidSpan(span));
        }
        let (nr, nc) = (self.nrows as f32, self.ncols as f32);
        let position = Rect::from_xywh(
            span.cols.0 as f32 / nc,
            span.rows.0 as f32 / nr,
            (span.cols.1 - span.cols.0) as f32 / nc,
            (span.rows.1 - span.rows.0) as f32 / nr,
        );
        let id = self.insert_main(Some(span), position)?;
        log::debug!("subplot {:?} added at {:?}", id, span);
        if let Err(err) = self.reshare() {
            self.axes.remove(id);
            self.order.retain(|a| *a != id);
            self.next_number -= 1;
            self.reshare()?;
            return Err(err);
        }
        Ok(id)
    }

    /// Add a main axes outside of the subplot grid, at `position` in figure fraction
    /// coordinates
    pub fn add_axes(&mut self, position: Rect) -> Result<AxesId, Error> {
        let id = self.insert_main(None, position)?;
        log::debug!("freestanding axes {:?} added", id);
        Ok(id)
    }

    /// Set the number of an axes, used for its a-b-c label.
    /// Numbers start at 1.
    pub fn set_number(&mut self, id: AxesId, number: u32) -> Result<(), Error> {
        if number == 0 {
            return Err(Error::InvalidNumber(number));
        }
        let label = match &self.rc.abc {
            Some(style) => Some(abc_label(style, number)?),
            None => None,
        };
        let ax = self.get_mut(id)?;
        ax.number = Some(number);
        if let Some(label) = label {
            ax.titles.set(TitleLoc::Abc, Some(&label), &TextStyle::new());
            ax.stale = true;
        }
        Ok(())
    }

    /// Add a panel on `side` of `main`, outside of the previous panels of that side.
    ///
    /// Panels requested on a twin go to the twinned axes.
    /// Sharing of `main` and its panels is recomputed.
    pub fn add_panel(
        &mut self,
        main: AxesId,
        side: Side,
        opts: PanelOptions,
    ) -> Result<AxesId, Error> {
        let main = match self.get(main)?.kind {
            Kind::Twin { parent } => parent,
            Kind::Panel { .. } => return Err(Error::NestedPanel(main)),
            _ => main,
        };
        let parent = self.get(main)?;
        if parent.kind.is_panel() {
            return Err(Error::NestedPanel(main));
        }
        opts.validate()?;

        let mut offset = opts.space_or_default();
        for pid in parent.panels.get(side) {
            if let Some(opts) = self.axes.get(*pid).and_then(|p| p.panel_opts) {
                offset += opts.width_or_default() + opts.space_or_default();
            }
        }
        let width = opts.width_or_default();
        let position = panel_rect(&parent.position, side, offset, width, self.size)
            .ok_or(Error::InvalidPanelSize(offset + width))?;

        let mut panel = self.new_axes(Kind::Panel { parent: main, side }, position);
        panel.panel_opts = Some(opts);
        if opts.filled {
            panel.hidden = true;
            panel.decorations = Decorations::hidden();
        }
        let id = self.axes.insert(panel);
        let parent = self.get_mut(main)?;
        parent.panels.push(side, id);
        parent.stale = true;
        log::debug!("panel {:?} added on {} of {:?}", id, side, main);

        if let Err(err) = self.reshare() {
            self.remove_axes(id)?;
            return Err(err);
        }
        Ok(id)
    }

    /// Add an inset axes in `parent`. `bounds` is expressed in the frame of `parent`,
    /// (0, 0) being its bottom-left corner and (1, 1) its top-right corner.
    pub fn add_inset(&mut self, parent: AxesId, bounds: Rect) -> Result<AxesId, Error> {
        let ppos = self.get(parent)?.position;
        let position = Rect::try_from_xywh(
            bounds.x(),
            1.0 - bounds.y() - bounds.height(),
            bounds.width(),
            bounds.height(),
        )
        .and_then(|rel| ppos.try_map_rel(&rel))
        .ok_or(Error::InvalidBounds(bounds))?;
        let ax = self.new_axes(Kind::Inset { parent }, position);
        let id = self.axes.insert(ax);
        self.get_mut(parent)?.children.push(id);
        log::debug!("inset {:?} added in {:?}", id, parent);
        Ok(id)
    }

    /// Add a twin of `parent`, following `parent` on `shared`
    pub fn add_twin(&mut self, parent: AxesId, shared: Axis) -> Result<AxesId, Error> {
        let ppos = self.get(parent)?.position;
        let mut ax = self.new_axes(Kind::Twin { parent }, ppos);
        ax.shared[shared.index()] = Some(parent);
        let id = self.axes.insert(ax);
        self.get_mut(parent)?.children.push(id);
        log::debug!("twin {:?} of {:?} sharing {}", id, parent, shared);
        Ok(id)
    }

    /// Remove an axes, along with its panels, insets and twins.
    /// Removing a panel keeps the order of the other panels of its stack.
    pub fn remove_axes(&mut self, id: AxesId) -> Result<(), Error> {
        let ax = self.get(id)?;
        let kind = ax.kind;
        let mut doomed = vec![id];
        let mut idx = 0;
        while idx < doomed.len() {
            if let Some(ax) = self.axes.get(doomed[idx]) {
                doomed.extend(ax.panels.iter().flat_map(|(_, stack)| stack.iter().copied()));
                doomed.extend(ax.children.iter().copied());
            }
            idx += 1;
        }

        match kind {
            Kind::Main => self.order.retain(|a| *a != id),
            Kind::Panel { parent, .. } => {
                if let Some(p) = self.axes.get_mut(parent) {
                    p.panels.remove(id);
                    p.stale = true;
                }
            }
            Kind::Inset { parent } | Kind::Twin { parent } => {
                if let Some(p) = self.axes.get_mut(parent) {
                    p.children.retain(|c| *c != id);
                }
            }
        }
        for d in &doomed {
            self.axes.remove(*d);
        }
        for (_, ax) in self.axes.iter_mut() {
            for shared in ax.shared.iter_mut() {
                if shared.is_some_and(|s| doomed.contains(&s)) {
                    *shared = None;
                }
            }
        }
        log::debug!("removed {} axes with {:?}", doomed.len(), id);
        self.reshare()
    }

    /// The panels stacked on `side` of `main`, inside to outside.
    /// Hidden panels are skipped unless `include_hidden` is set.
    pub fn panels(
        &self,
        main: AxesId,
        side: Side,
        include_hidden: bool,
    ) -> Result<Vec<AxesId>, Error> {
        let ax = self.get(main)?;
        Ok(ax
            .panels
            .get(side)
            .iter()
            .copied()
            .filter(|p| include_hidden || self.axes.get(*p).is_some_and(|p| !p.hidden))
            .collect())
    }

    /// Hide an axes without removing it: its decorations are not drawn anymore
    /// but it keeps its place and its titles.
    pub fn hide_panel(&mut self, id: AxesId) -> Result<(), Error> {
        let ax = self.get_mut(id)?;
        if ax.hidden {
            return Ok(());
        }
        ax.hidden = true;
        ax.decorations = Decorations::hidden();
        let parent = ax.kind.parent();
        log::debug!("axes {:?} hidden", id);
        if let Some(parent) = parent.and_then(|p| self.axes.get_mut(p)) {
            parent.stale = true;
        }
        self.reshare()
    }

    /// The main axes `id` is attached to, through any chain of panels, insets and twins.
    ///
    /// Fails with [`Error::CycleDetected`] if no main axes is reached within
    /// [`Rc::max_parent_depth`] steps.
    pub fn topmost(&self, id: AxesId) -> Result<AxesId, Error> {
        let mut cur = id;
        for _ in 0..=self.rc.max_parent_depth {
            match self.get(cur)?.kind.parent() {
                None => return Ok(cur),
                Some(parent) => cur = parent,
            }
        }
        Err(Error::CycleDetected(id))
    }

    /// List the axes of the figure: main axes in creation order, each followed by
    /// its insets and twins if `children` is set, then by its panels (inside to outside,
    /// side by side) if `panels` is set. Panels and children are visited the same way.
    /// Hidden axes are skipped unless `hidden` is set.
    pub fn iter_axes(&self, hidden: bool, children: bool, panels: bool) -> Vec<AxesId> {
        let mut res = Vec::new();
        for main in &self.order {
            self.visit(*main, hidden, children, panels, &mut res);
        }
        res
    }

    fn visit(
        &self,
        id: AxesId,
        hidden: bool,
        children: bool,
        panels: bool,
        res: &mut Vec<AxesId>,
    ) {
        let Some(ax) = self.axes.get(id) else {
            return;
        };
        if ax.hidden && !hidden {
            return;
        }
        res.push(id);
        if children {
            for child in &ax.children {
                self.visit(*child, hidden, children, panels, res);
            }
        }
        if panels {
            for (_, stack) in ax.panels.iter() {
                for pax in stack {
                    self.visit(*pax, hidden, children, panels, res);
                }
            }
        }
    }

    /// The sharing group of `id` on `axis` among the main axes, reference first.
    /// See [`share::share_targets`].
    pub fn share_targets(&self, id: AxesId, axis: Axis) -> Result<Vec<AxesId>, Error> {
        self.get(id)?;
        share::share_targets(id, axis, &self.order, self)
    }

    /// The main axes whose `side` edge lies on the same grid line as the one of `id`.
    /// Axes following a panel across `side` are replaced by that panel.
    pub fn span_axes(&self, id: AxesId, side: Side) -> Result<Vec<AxesId>, Error> {
        self.get(id)?;
        let axis = side.long_axis();
        let axs = share::span_axes(id, side, &self.order, self)?;
        Ok(axs
            .into_iter()
            .map(|a| {
                match self.axes.get(a).and_then(|ax| ax.shared(axis)) {
                    Some(other) if self.axes.get(other).is_some_and(|o| o.kind.is_panel()) => {
                        other
                    }
                    _ => a,
                }
            })
            .collect())
    }

    /// Change the sharing between subplots and recompute all sharing assignments
    pub fn set_share(&mut self, share: Share) -> Result<(), Error> {
        self.share = share;
        self.reshare()
    }

    /// All the sharing assignments of the figure
    pub fn share_edges(&self) -> Vec<ShareEdge> {
        let mut edges = Vec::new();
        for id in self.iter_axes(true, true, true) {
            let Some(ax) = self.axes.get(id) else {
                continue;
            };
            for axis in [Axis::X, Axis::Y] {
                if let Some(parent) = ax.shared(axis) {
                    edges.push(ShareEdge {
                        child: id,
                        axis,
                        parent,
                    });
                }
            }
        }
        edges
    }

    /// Recompute the sharing assignments of every axes but twins
    fn reshare(&mut self) -> Result<(), Error> {
        for (_, ax) in self.axes.iter_mut() {
            if !matches!(ax.kind, Kind::Twin { .. }) {
                ax.shared = [None, None];
            }
        }
        let roots: Vec<AxesId> = self
            .axes
            .iter()
            .filter(|(_, ax)| !ax.kind.is_panel() && !ax.panels.is_empty())
            .map(|(id, _)| id)
            .collect();
        for id in roots {
            self.share_panels(id);
        }
        for id in self.order.clone() {
            self.share_siblings(id)?;
        }
        Ok(())
    }

    /// The panels of `side` of `main` that take part in sharing
    fn shared_panels(&self, main: AxesId, side: Side) -> Vec<AxesId> {
        let Some(ax) = self.axes.get(main) else {
            return Vec::new();
        };
        ax.panels
            .get(side)
            .iter()
            .copied()
            .filter(|p| {
                self.axes
                    .get(*p)
                    .is_some_and(|p| !p.hidden && p.is_share_eligible())
            })
            .collect()
    }

    fn visible_panels(&self, main: AxesId, side: Side) -> Vec<AxesId> {
        self.panels(main, side, false).unwrap_or_default()
    }

    /// Share the long axis of the panel stacks of `main`.
    /// The outermost bottom panel leads X, the outermost left panel leads Y.
    fn share_panels(&mut self, main: AxesId) {
        for (axis, lead_side, other_side) in [
            (Axis::X, Side::Bottom, Side::Top),
            (Axis::Y, Side::Left, Side::Right),
        ] {
            let paxs = self.shared_panels(main, lead_side);
            let mut lead = main;
            if let Some((last, inner)) = paxs.split_last() {
                lead = *last;
                for iax in std::iter::once(main).chain(inner.iter().copied()) {
                    self.share_setup(iax, axis, lead);
                }
            }
            for iax in self.shared_panels(main, other_side) {
                self.share_setup(iax, axis, lead);
            }
        }
    }

    /// Share each axis of `id` with its sibling subplots, when enabled for the figure
    fn share_siblings(&mut self, id: AxesId) -> Result<(), Error> {
        if self.grid_span(id).is_none() {
            return Ok(());
        }
        for axis in [Axis::X, Axis::Y] {
            if !self.share.get(axis) {
                continue;
            }
            let targets = share::share_targets(id, axis, &self.order, self)?;
            if let Some((parent, children)) = targets.split_first() {
                for child in children {
                    self.share_setup(*child, axis, *parent);
                }
            }
        }
        Ok(())
    }

    /// Make `child` follow `parent` on `axis`, and propagate to the panels of `child`:
    /// shared panels along `axis` follow `parent`, visible panels across `axis` follow
    /// the matching panels of `parent`.
    fn share_setup(&mut self, child: AxesId, axis: Axis, parent: AxesId) {
        self.link(child, axis, parent);
        if self.axes.get(child).is_none_or(|c| c.kind.is_panel()) {
            return;
        }
        let (short_sides, long_sides) = match axis {
            Axis::X => ([Side::Left, Side::Right], [Side::Bottom, Side::Top]),
            Axis::Y => ([Side::Bottom, Side::Top], [Side::Left, Side::Right]),
        };
        for side in short_sides {
            self.share_short_axis(child, parent, side);
        }
        for side in long_sides {
            for pax in self.shared_panels(child, side) {
                self.link(pax, axis, parent);
            }
        }
    }

    /// Zip the panels of `side` of `child` and `parent`, sharing their short axis
    fn share_short_axis(&mut self, child: AxesId, parent: AxesId, side: Side) {
        if child == parent || self.axes.get(parent).is_none_or(|p| p.kind.is_panel()) {
            return;
        }
        let caxs = self.visible_panels(child, side);
        let paxs = self.visible_panels(parent, side);
        if caxs.len() != paxs.len() && !caxs.is_empty() && !paxs.is_empty() {
            log::warn!(
                "uneven {} panel stacks of {:?} and {:?}, extra panels stay unshared",
                side,
                child,
                parent
            );
        }
        let axis = side.short_axis();
        for (cax, pax) in caxs.into_iter().zip(paxs) {
            self.link(cax, axis, pax);
        }
    }

    fn link(&mut self, child: AxesId, axis: Axis, parent: AxesId) {
        if child == parent {
            return;
        }
        if let Some(ax) = self.axes.get_mut(child) {
            if ax.shared[axis.index()] != Some(parent) {
                log::debug!("{:?} shares {} with {:?}", child, axis, parent);
            }
            ax.shared[axis.index()] = Some(parent);
        }
    }

    /// Set the text and style of a title slot of `id`.
    /// The style is always merged, the text is only replaced when given.
    pub fn set_title(
        &mut self,
        id: AxesId,
        loc: TitleLoc,
        text: Option<&str>,
        style: &TextStyle,
    ) -> Result<(), Error> {
        let ax = self.get_mut(id)?;
        ax.titles.set(loc, text, style);
        ax.stale = true;
        Ok(())
    }

    /// Move the content of slot `loc` of `src` into the same slot of `dest`.
    ///
    /// The color, font and pass-through properties always move (see
    /// [`TextStyle::transfer_props`]). The text moves only if it is not blank.
    /// The text of `src` is empty afterwards.
    pub fn transfer_slot(
        &mut self,
        src: AxesId,
        dest: AxesId,
        loc: TitleLoc,
    ) -> Result<(), Error> {
        let (text, props) = {
            let slot = self.get(src)?.titles.get(loc);
            (slot.text().to_string(), slot.style().transfer_props())
        };
        self.get(dest)?;
        if src == dest {
            return Ok(());
        }
        let moved = !text.trim().is_empty();

        let dest_ax = self.get_mut(dest)?;
        let slot = dest_ax.titles.get_mut(loc);
        slot.update(moved.then_some(text.as_str()), &props);
        dest_ax.stale = true;

        let src_ax = self.get_mut(src)?;
        let slot = src_ax.titles.get_mut(loc);
        if !slot.text().is_empty() {
            slot.clear();
            src_ax.stale = true;
        }
        if moved {
            log::debug!("{} title moved from {:?} to {:?}", loc, src, dest);
        }
        Ok(())
    }

    /// Decide whether the outer titles of `main` live on `main` or on its outermost
    /// top panel, according to the title preference of `main`, and move them there.
    pub fn arbitrate_outer_slots(&mut self, main: AxesId) -> Result<(), Error> {
        let ax = self.get(main)?;
        let Some(pax) = ax.panels.outermost(Side::Top) else {
            return Ok(());
        };
        let mut names = TitleLoc::OUTER.to_vec();
        if ax.titles.abc_loc().is_outer() {
            names.push(TitleLoc::Abc);
        }
        let panel_hidden = self.get(pax)?.hidden;
        let (src, dest) = match ax.titles.title_above() {
            TitleAbove::AlwaysPanel => (main, pax),
            TitleAbove::PanelIfVisible if !panel_hidden => (main, pax),
            _ => (pax, main),
        };

        let main_titles = ax.titles.clone();
        self.get_mut(pax)?.titles.follow_locs(&main_titles);
        for name in names {
            self.transfer_slot(src, dest, name)?;
        }
        let (title_pad, abc_title_pad) = {
            let titles = &self.get(src)?.titles;
            (titles.title_pad(), titles.abc_title_pad())
        };
        self.get_mut(dest)?
            .titles
            .set_pads(Some(title_pad), Some(abc_title_pad));
        Ok(())
    }

    /// Apply a title format to `id`. Only the settings of `format` that are set change.
    pub fn format(&mut self, id: AxesId, format: &Format) -> Result<(), Error> {
        let ax = self.get_mut(id)?;
        let number = ax.number;
        format.apply(&mut ax.titles, number)?;
        ax.stale = true;
        Ok(())
    }

    /// Compute the placement of the titles of `id` for its current size
    pub fn layout_titles<M>(&mut self, id: AxesId, metrics: &M) -> Result<(), Error>
    where
        M: TextMetricsProvider + ?Sized,
    {
        let size = self.axes_size(id)?;
        let ax = self.get_mut(id)?;
        ax.titles.layout(size, metrics);
        ax.stale = false;
        Ok(())
    }

    /// Add a legend to `id`.
    ///
    /// `loc` defaults to [`Rc::legend_loc`]. With `queue`, the payload is merged into
    /// the pending legend at `loc` and drawn by [`Figure::flush_guides`]; otherwise
    /// the legend is drawn right away, replacing the one at `loc`, and returned.
    pub fn legend<S>(
        &mut self,
        id: AxesId,
        loc: Option<GuideLoc>,
        payload: Payload,
        queue: bool,
        scene: &mut S,
    ) -> Result<Option<GuideObj>, Error>
    where
        S: SceneMutator + ?Sized,
    {
        let loc = loc.unwrap_or(self.rc.legend_loc);
        self.add_guide(GuideKind::Legend, id, loc, payload, queue, scene)
    }

    /// Add a colorbar to `id`. See [`Figure::legend`].
    /// `loc` defaults to [`Rc::colorbar_loc`].
    pub fn colorbar<S>(
        &mut self,
        id: AxesId,
        loc: Option<GuideLoc>,
        payload: Payload,
        queue: bool,
        scene: &mut S,
    ) -> Result<Option<GuideObj>, Error>
    where
        S: SceneMutator + ?Sized,
    {
        let loc = loc.unwrap_or(self.rc.colorbar_loc);
        self.add_guide(GuideKind::Colorbar, id, loc, payload, queue, scene)
    }

    fn add_guide<S>(
        &mut self,
        kind: GuideKind,
        id: AxesId,
        loc: GuideLoc,
        payload: Payload,
        queue: bool,
        scene: &mut S,
    ) -> Result<Option<GuideObj>, Error>
    where
        S: SceneMutator + ?Sized,
    {
        let ax = self.get(id)?;
        match loc {
            GuideLoc::Fill if !ax.kind.is_panel() => {
                log::warn!("{} location fill ignored on non-panel axes {:?}", kind, id);
                return Ok(None);
            }
            GuideLoc::Outer(_) if ax.kind.is_panel() => return Err(Error::NestedPanel(id)),
            _ => {}
        }

        if queue {
            self.get_mut(id)?
                .queue_mut(kind)
                .register(loc, payload, true, |obj| scene.remove_guide(kind, obj))?;
            return Ok(None);
        }

        let (target, loc) = self.route_guide(kind, id, loc)?;
        let obj = self.draw_guide(kind, target, loc, &payload, scene)?;
        self.get_mut(target)?
            .queue_mut(kind)
            .install(loc, obj, |prev| scene.remove_guide(kind, prev))?;
        Ok(Some(obj))
    }

    /// The axes and location a guide registered at `loc` of `id` is drawn at.
    /// Outer locations are drawn filling a hidden panel, created when needed.
    fn route_guide(
        &mut self,
        kind: GuideKind,
        id: AxesId,
        loc: GuideLoc,
    ) -> Result<(AxesId, GuideLoc), Error> {
        let GuideLoc::Outer(side) = loc else {
            return Ok((id, loc));
        };
        let other = match kind {
            GuideKind::Legend => GuideKind::Colorbar,
            GuideKind::Colorbar => GuideKind::Legend,
        };
        let reusable = self.get(id)?.panels.outermost(side).filter(|p| {
            self.axes
                .get(*p)
                .is_some_and(|p| p.hidden && p.queue(other).is_empty())
        });
        let panel = match reusable {
            Some(panel) => panel,
            None => self.add_panel(id, side, PanelOptions::filled())?,
        };
        Ok((panel, GuideLoc::Fill))
    }

    fn draw_guide<S>(
        &mut self,
        kind: GuideKind,
        target: AxesId,
        loc: GuideLoc,
        payload: &Payload,
        scene: &mut S,
    ) -> Result<GuideObj, Error>
    where
        S: SceneMutator + ?Sized,
    {
        if loc == GuideLoc::Fill {
            self.hide_panel(target)?;
        }
        draw_one(self, kind, target, loc, payload, scene)
    }

    /// Draw all pending legends and colorbars.
    ///
    /// Guides queued at an outer location of an axes are first moved to a hidden
    /// panel on that side. Returns the number of guides drawn.
    pub fn flush_guides<S>(&mut self, scene: &mut S) -> Result<usize, Error>
    where
        S: SceneMutator + ?Sized,
    {
        for id in self.iter_axes(true, true, true) {
            for kind in [GuideKind::Colorbar, GuideKind::Legend] {
                let outer: Vec<GuideLoc> = self
                    .get(id)?
                    .queue(kind)
                    .iter()
                    .filter(|(loc, entry)| loc.is_outer() && entry.is_pending())
                    .map(|(loc, _)| loc)
                    .collect();
                for loc in outer {
                    let Some(payload) = self
                        .get_mut(id)?
                        .queue_mut(kind)
                        .remove(loc)
                        .and_then(|e| e.pending().cloned())
                    else {
                        continue;
                    };
                    let (panel, fill) = self.route_guide(kind, id, loc)?;
                    self.get_mut(panel)?
                        .queue_mut(kind)
                        .register(fill, payload, false, |obj| scene.remove_guide(kind, obj))?;
                }
            }
        }

        let mut count = 0;
        for id in self.iter_axes(true, true, true) {
            for kind in [GuideKind::Colorbar, GuideKind::Legend] {
                let ax = self.get(id)?;
                let queue = ax.queue(kind);
                if queue.pending_count() == 0 {
                    continue;
                }
                let fills = queue
                    .get(GuideLoc::Fill)
                    .is_some_and(|e| e.is_pending());
                if fills && ax.kind.is_panel() {
                    self.hide_panel(id)?;
                }

                let mut queue =
                    std::mem::replace(self.get_mut(id)?.queue_mut(kind), GuideQueue::new(kind));
                let res = queue.flush(|loc, payload| draw_one(self, kind, id, loc, payload, scene));
                *self.get_mut(id)?.queue_mut(kind) = queue;
                count += res?;
            }
        }
        Ok(count)
    }

    /// Draw the figure bookkeeping: flush the guides, assign the outer titles,
    /// lay out the titles of every axes and hand them to the scene.
    pub fn draw<S, M>(&mut self, scene: &mut S, metrics: &M) -> Result<(), Error>
    where
        S: SceneMutator + ?Sized,
        M: TextMetricsProvider + ?Sized,
    {
        self.flush_guides(scene)?;

        let owners: Vec<AxesId> = self
            .axes
            .iter()
            .filter(|(_, ax)| !ax.kind.is_panel() && !ax.panels.get(Side::Top).is_empty())
            .map(|(id, _)| id)
            .collect();
        for id in owners {
            self.arbitrate_outer_slots(id)?;
        }

        for id in self.iter_axes(true, true, true) {
            self.layout_titles(id, metrics)?;
            let ax = self.get(id)?;
            scene.set_decorations(id, &ax.decorations)?;
            for cmd in ax.titles.commands() {
                scene.draw_text(id, &cmd)?;
            }
        }
        Ok(())
    }
}

fn draw_one<S>(
    fig: &Figure,
    kind: GuideKind,
    target: AxesId,
    loc: GuideLoc,
    payload: &Payload,
    scene: &mut S,
) -> Result<GuideObj, Error>
where
    S: SceneMutator + ?Sized,
{
    let ax = fig.get(target)?;
    let fill_side = match loc {
        GuideLoc::Fill => ax.side(),
        _ => None,
    };
    let size = fig.axes_size(target)?;
    match kind {
        GuideKind::Legend => {
            let loc = fill_side.map(legend::fill_loc).unwrap_or(loc);
            let req = legend::request(loc, payload, &fig.rc, size);
            scene.draw_legend(target, &req)
        }
        GuideKind::Colorbar => {
            let req = colorbar::request(loc, fill_side, payload, &fig.rc, size);
            scene.draw_colorbar(target, &req)
        }
    }
}
