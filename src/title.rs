//! Titles and a-b-c labels
//!
//! Every axes owns one [`TitleSlot`] per [`TitleLoc`]. Slots are never created or
//! destroyed after the axes is built: setting a title fills a slot, moving a title
//! transfers the content of a slot into the same-named slot of another axes.
//!
//! Positions are computed at draw time in axes-relative coordinates
//! ((0, 0) bottom-left, (1, 1) top-right), from paddings given in points and the
//! physical size of the axes.
use crate::Error;
use crate::geom::{Point, Size};
use crate::loc::{HAlign, TitleLoc};
use crate::rc::Rc;
use crate::render::TextMetricsProvider;
use crate::style::{Placement, StyledText, TextCommand, TextStyle, apply_style};

const ABC_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Preference for the owner of the outer titles when the axes has top panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleAbove {
    /// Titles always stay on the main axes
    AlwaysMain,
    /// Titles always go to the outermost top panel
    AlwaysPanel,
    /// Titles go to the outermost top panel, unless it is hidden
    #[default]
    PanelIfVisible,
}

/// A-b-c label setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Abc {
    /// No a-b-c label
    Off,
    /// A-b-c label with the default `"a"` style
    On,
    /// A-b-c label with the given style, e.g. `"(a)"` or `"A."`
    Style(String),
}

/// Build the a-b-c label of the axes numbered `number`.
///
/// The first `a` or `A` of `style` is replaced by the letter of the axes:
/// `a` to `z`, then `aa` to `zz`, `aaa` etc.
/// The replacement is upper case if `A` was found.
pub fn abc_label(style: &str, number: u32) -> Result<String, Error> {
    if number == 0 {
        return Err(Error::InvalidNumber(number));
    }
    let Some(pos) = style.find(['a', 'A']) else {
        return Err(Error::InvalidAbcStyle(style.to_string()));
    };
    let (nabc, iabc) = ((number - 1) / 26, (number - 1) % 26);
    let letter = ABC_LETTERS[iabc as usize] as char;
    let mut rep: String = std::iter::repeat_n(letter, nabc as usize + 1).collect();
    if style[pos..].starts_with('A') {
        rep = rep.to_ascii_uppercase();
    }
    Ok(format!("{}{}{}", &style[..pos], rep, &style[pos + 1..]))
}

/// A named text slot of an axes
#[derive(Debug, Clone, PartialEq)]
pub struct TitleSlot {
    loc: TitleLoc,
    content: StyledText,
    placement: Placement,
}

impl TitleSlot {
    fn new(loc: TitleLoc, style: TextStyle) -> Self {
        TitleSlot {
            loc,
            content: StyledText::new("", style),
            placement: Placement {
                pos: Point { x: 0.0, y: 1.0 },
                offset: (0.0, 0.0),
                ha: loc.ha(),
                va: loc.va(),
            },
        }
    }

    /// The location of the slot
    pub fn loc(&self) -> TitleLoc {
        self.loc
    }

    /// The text of the slot
    pub fn text(&self) -> &str {
        &self.content.text
    }

    /// The style of the slot
    pub fn style(&self) -> &TextStyle {
        &self.content.style
    }

    /// The text and its style
    pub fn content(&self) -> &StyledText {
        &self.content
    }

    /// Whether the slot holds text to draw
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The placement computed at the last layout
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Update the slot. The style is always merged, the text is only replaced if given.
    pub(crate) fn update(&mut self, text: Option<&str>, style: &TextStyle) {
        self.content.style.merge(style);
        if let Some(text) = text {
            self.content.text = text.to_string();
        }
    }

    /// Clear the text, keeping the style
    pub(crate) fn clear(&mut self) {
        self.content.text.clear();
    }
}

/// The title slots of an axes, along with the title settings of that axes
#[derive(Debug, Clone)]
pub struct TitleSlots {
    slots: Vec<TitleSlot>,
    title_loc: TitleLoc,
    abc_loc: TitleLoc,
    title_pad: f32,
    abc_title_pad: f32,
    title_above: TitleAbove,
    title_border: TextStyle,
    abc_border: TextStyle,
}

impl TitleSlots {
    /// Build the slots with the styles and settings of `rc`
    pub fn new(rc: &Rc) -> Self {
        let slots = TitleLoc::ALL
            .iter()
            .map(|loc| {
                let style = match loc {
                    TitleLoc::Abc => {
                        let mut style = rc.abc_style.clone();
                        if rc.abc_loc.is_inner() {
                            style.merge(&rc.abc_border);
                        }
                        style
                    }
                    loc if loc.is_inner() => rc.title_style.merged(&rc.title_border),
                    _ => rc.title_style.clone(),
                };
                TitleSlot::new(*loc, style)
            })
            .collect();
        TitleSlots {
            slots,
            title_loc: text_loc(rc.title_loc),
            abc_loc: text_loc(rc.abc_loc),
            title_pad: rc.title_pad,
            abc_title_pad: rc.abc_title_pad,
            title_above: rc.title_above,
            title_border: rc.title_border.clone(),
            abc_border: rc.abc_border.clone(),
        }
    }

    /// The slot at the given location
    pub fn get(&self, loc: TitleLoc) -> &TitleSlot {
        &self.slots[loc.index()]
    }

    /// The mutable slot at the given location
    pub(crate) fn get_mut(&mut self, loc: TitleLoc) -> &mut TitleSlot {
        &mut self.slots[loc.index()]
    }

    /// Iterate over all slots
    pub fn iter(&self) -> impl Iterator<Item = &TitleSlot> {
        self.slots.iter()
    }

    /// The current location of the main title
    pub fn title_loc(&self) -> TitleLoc {
        self.title_loc
    }

    /// The current location of the a-b-c label
    pub fn abc_loc(&self) -> TitleLoc {
        self.abc_loc
    }

    /// Padding between axes and titles, in points
    pub fn title_pad(&self) -> f32 {
        self.title_pad
    }

    /// Padding between a-b-c label and title, in points
    pub fn abc_title_pad(&self) -> f32 {
        self.abc_title_pad
    }

    /// The outer title preference
    pub fn title_above(&self) -> TitleAbove {
        self.title_above
    }

    pub(crate) fn set_pads(&mut self, title_pad: Option<f32>, abc_title_pad: Option<f32>) {
        if let Some(pad) = title_pad {
            self.title_pad = pad;
        }
        if let Some(pad) = abc_title_pad {
            self.abc_title_pad = pad;
        }
    }

    pub(crate) fn set_title_above(&mut self, above: TitleAbove) {
        self.title_above = above;
    }

    /// Move the main title location. Text moves along to the new slot.
    pub(crate) fn move_title_loc(&mut self, loc: TitleLoc) {
        let loc = text_loc(loc);
        let old = self.title_loc;
        if loc == old {
            return;
        }
        let (text, font) = {
            let src = self.get(old);
            (src.text().to_string(), src.style().transfer_props())
        };
        let dest = self.get_mut(loc);
        dest.update(None, &font);
        if !text.trim().is_empty() {
            dest.content.text = text;
            self.get_mut(old).clear();
        }
        self.title_loc = loc;
        log::debug!("title moved from {} to {}", old, loc);
    }

    pub(crate) fn set_abc_loc(&mut self, loc: TitleLoc) {
        self.abc_loc = text_loc(loc);
    }

    /// Follow the title and a-b-c locations of `other`
    pub(crate) fn follow_locs(&mut self, other: &TitleSlots) {
        self.title_loc = other.title_loc;
        self.abc_loc = other.abc_loc;
    }

    /// Set the text and style of a slot.
    /// Inner slots also receive the border and box properties of the settings.
    pub(crate) fn set(&mut self, loc: TitleLoc, text: Option<&str>, style: &TextStyle) {
        let border = match loc {
            TitleLoc::Abc if self.abc_loc.is_inner() => Some(self.abc_border.clone()),
            loc if loc.is_inner() => Some(self.title_border.clone()),
            _ => None,
        };
        let slot = self.get_mut(loc);
        if let Some(border) = border {
            slot.update(None, &border);
        }
        slot.update(text, style);
    }

    /// Compute the placement of every slot for an axes of the given physical size
    /// (in inches). The a-b-c label and a title sharing its location are pushed apart
    /// according to their rendered widths.
    pub fn layout<M>(&mut self, size: Size, metrics: &M)
    where
        M: TextMetricsProvider + ?Sized,
    {
        let width = size.width().max(f32::EPSILON);
        let height = size.height().max(f32::EPSILON);
        let x_pad = self.title_pad / (72.0 * width);
        let y_pad = self.title_pad / (72.0 * height);

        for idx in 0..self.slots.len() {
            let loc = match self.slots[idx].loc {
                TitleLoc::Abc => self.abc_loc,
                loc => loc,
            };
            let x = match loc {
                TitleLoc::Left => 0.0,
                TitleLoc::Center | TitleLoc::UpperCenter | TitleLoc::LowerCenter => 0.5,
                TitleLoc::Right => 1.0,
                TitleLoc::UpperLeft | TitleLoc::LowerLeft => x_pad,
                TitleLoc::UpperRight | TitleLoc::LowerRight => 1.0 - x_pad,
                TitleLoc::Abc => 0.0,
            };
            let y = match loc {
                TitleLoc::UpperLeft | TitleLoc::UpperCenter | TitleLoc::UpperRight => 1.0 - y_pad,
                TitleLoc::LowerLeft | TitleLoc::LowerCenter | TitleLoc::LowerRight => y_pad,
                _ => 1.0,
            };
            let offset = if loc.is_outer() {
                (0.0, self.title_pad)
            } else {
                (0.0, 0.0)
            };
            self.slots[idx].placement = Placement {
                pos: Point { x, y },
                offset,
                ha: loc.ha(),
                va: loc.va(),
            };
        }

        // push the title away from the a-b-c label
        let abc = self.get(TitleLoc::Abc);
        let title = self.get(self.abc_loc);
        if abc.is_empty() || title.is_empty() {
            return;
        }
        let awidth = metrics.text_width(abc.content()) / (72.0 * width);
        let twidth = metrics.text_width(title.content()) / (72.0 * width);
        let pad = self.abc_title_pad / (72.0 * width);
        let (aoffset, toffset) = match abc.placement.ha {
            HAlign::Left => (0.0, awidth + pad),
            HAlign::Right => (-(twidth + pad), 0.0),
            HAlign::Center => (-0.5 * (twidth + pad), 0.5 * (awidth + pad)),
        };
        let abc_loc = self.abc_loc;
        self.get_mut(TitleLoc::Abc).placement.pos.x += aoffset;
        self.get_mut(abc_loc).placement.pos.x += toffset;
    }

    /// The rendering commands of all non-empty slots, as placed by the last layout
    pub fn commands(&self) -> Vec<TextCommand> {
        let bbox_pad = self.title_pad / 10.0;
        self.slots
            .iter()
            .filter(|slot| !slot.is_empty())
            .map(|slot| apply_style(&slot.content, &slot.placement, bbox_pad))
            .collect()
    }
}

// the a-b-c slot is not a location
fn text_loc(loc: TitleLoc) -> TitleLoc {
    match loc {
        TitleLoc::Abc => TitleLoc::Left,
        loc => loc,
    }
}

/// Formatting of titles and a-b-c labels of an axes.
///
/// Only the fields that are set are applied: formatting twice with different
/// fields accumulates.
#[derive(Debug, Clone, Default)]
pub struct Format {
    title: Option<String>,
    title_loc: Option<TitleLoc>,
    titles: Vec<(TitleLoc, String)>,
    title_style: TextStyle,
    title_pad: Option<f32>,
    title_above: Option<TitleAbove>,
    abc: Option<Abc>,
    abc_loc: Option<TitleLoc>,
    abc_style: TextStyle,
    abc_title_pad: Option<f32>,
}

impl Format {
    /// An empty format, changing nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the main title and return self for chaining
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    /// Move the main title and return self for chaining
    pub fn with_title_loc(self, loc: TitleLoc) -> Self {
        Self {
            title_loc: Some(loc),
            ..self
        }
    }

    /// Set the title at a given location and return self for chaining
    pub fn with_title_at(mut self, loc: TitleLoc, title: impl Into<String>) -> Self {
        self.titles.push((loc, title.into()));
        self
    }

    /// Set the style of titles and return self for chaining
    pub fn with_title_style(self, title_style: TextStyle) -> Self {
        Self {
            title_style,
            ..self
        }
    }

    /// Set the title padding (in points) and return self for chaining
    pub fn with_title_pad(self, pad: f32) -> Self {
        Self {
            title_pad: Some(pad),
            ..self
        }
    }

    /// Set the outer title preference and return self for chaining
    pub fn with_title_above(self, above: TitleAbove) -> Self {
        Self {
            title_above: Some(above),
            ..self
        }
    }

    /// Set the a-b-c label and return self for chaining
    pub fn with_abc(self, abc: Abc) -> Self {
        Self {
            abc: Some(abc),
            ..self
        }
    }

    /// Move the a-b-c label and return self for chaining
    pub fn with_abc_loc(self, loc: TitleLoc) -> Self {
        Self {
            abc_loc: Some(loc),
            ..self
        }
    }

    /// Set the style of the a-b-c label and return self for chaining
    pub fn with_abc_style(self, abc_style: TextStyle) -> Self {
        Self { abc_style, ..self }
    }

    /// Set the padding between a-b-c label and title (in points) and return self for chaining
    pub fn with_abc_title_pad(self, pad: f32) -> Self {
        Self {
            abc_title_pad: Some(pad),
            ..self
        }
    }

    pub(crate) fn apply(&self, slots: &mut TitleSlots, number: Option<u32>) -> Result<(), Error> {
        if matches!(self.title_loc, Some(TitleLoc::Abc)) {
            return Err(Error::UnknownSlot(TitleLoc::Abc.to_string()));
        }
        if matches!(self.abc_loc, Some(TitleLoc::Abc)) {
            return Err(Error::UnknownSlot(TitleLoc::Abc.to_string()));
        }
        // validate the a-b-c style before anything is mutated
        let abc_text = match (&self.abc, number) {
            (Some(Abc::Off), _) => Some(String::new()),
            (Some(Abc::On), Some(num)) => Some(abc_label("a", num)?),
            (Some(Abc::Style(style)), Some(num)) => Some(abc_label(style, num)?),
            (Some(Abc::Style(style)), None) if !style.contains(['a', 'A']) => {
                return Err(Error::InvalidAbcStyle(style.clone()));
            }
            _ => None,
        };

        slots.set_pads(self.title_pad, self.abc_title_pad);
        if let Some(above) = self.title_above {
            slots.set_title_above(above);
        }
        if let Some(loc) = self.title_loc {
            slots.move_title_loc(loc);
        }
        let loc = slots.title_loc();
        slots.set(loc, self.title.as_deref(), &self.title_style);
        for (loc, title) in &self.titles {
            slots.set(*loc, Some(title), &self.title_style);
        }

        if let Some(loc) = self.abc_loc {
            slots.set_abc_loc(loc);
        }
        slots.set(TitleLoc::Abc, abc_text.as_deref(), &self.abc_style);
        Ok(())
    }
}
