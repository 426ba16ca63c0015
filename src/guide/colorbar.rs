//! Colorbar ticks and orientation
use crate::geom::Size;
use crate::guide::Payload;
use crate::loc::{GuideLoc, Side};
use crate::rc::Rc;
use crate::render::ColorbarRequest;

/// Orientation of a colorbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Colors run from left to right
    Horizontal,
    /// Colors run from bottom to top
    Vertical,
}

impl Orientation {
    /// The orientation of a colorbar filling a panel on `side`
    pub const fn for_side(side: Side) -> Orientation {
        match side {
            Side::Left | Side::Right => Orientation::Vertical,
            Side::Bottom | Side::Top => Orientation::Horizontal,
        }
    }

    /// Room taken by a tick label along the colorbar, in font size units
    pub const fn tick_scale(&self) -> f32 {
        match self {
            Orientation::Vertical => 1.0,
            Orientation::Horizontal => 2.5,
        }
    }

    fn from_name(name: &str) -> Option<Orientation> {
        match name {
            "horizontal" | "h" => Some(Orientation::Horizontal),
            "vertical" | "v" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// Pick the levels to tick on a colorbar.
///
/// At most `maxn` ticks are kept, or as many as fit along `length` inches when
/// labels of `fontsize` points take `scale` font sizes each.
/// Levels at even multiples of the tick step from zero are preferred.
pub fn subsample_levels(
    levels: &[f64],
    maxn: Option<usize>,
    length: f32,
    scale: f32,
    fontsize: f32,
) -> Vec<f64> {
    if levels.len() < 2 {
        return levels.to_vec();
    }
    let maxn = maxn.unwrap_or_else(|| (length / (scale * fontsize / 72.0)) as usize);
    let diff = (levels[1] - levels[0]).abs();
    let step = 1 + levels.len() / maxn.max(1);
    let period = step as f64 * diff;
    let first = levels
        .iter()
        .position(|l| l.rem_euclid(period).abs() <= 1e-8);
    let start = first.map(|idx| idx % step).unwrap_or(0);
    levels[start..].iter().copied().step_by(step).collect()
}

/// Build the request to draw the colorbar of `payload` at `loc`.
///
/// `fill_side` is the side of the panel filled by the colorbar, if any.
/// `size` is the physical size (inches) of the axes the colorbar is drawn in.
///
/// Recognized properties: `orientation`, `length` (fraction of the axes),
/// `maxn`, `fontsize` and `label`. Other properties are passed through.
pub(crate) fn request(
    loc: GuideLoc,
    fill_side: Option<Side>,
    payload: &Payload,
    rc: &Rc,
    size: Size,
) -> ColorbarRequest {
    let mut props = payload.props.clone();
    let mut take = |key: &str| props.remove(key);

    let orientation = match fill_side {
        Some(side) => Orientation::for_side(side),
        None => take("orientation")
            .and_then(|v| v.as_str().and_then(Orientation::from_name))
            .unwrap_or(Orientation::Horizontal),
    };
    let mut length = take("length")
        .and_then(|v| v.as_f64())
        .map(|v| v as f32)
        .unwrap_or(1.0);
    if !(length > 0.0 && length <= 1.0) {
        log::warn!("colorbar length {} out of (0, 1], using 1", length);
        length = 1.0;
    }
    let maxn = take("maxn")
        .and_then(|v| v.as_f64())
        .map(|v| v.max(1.0) as usize);
    let fontsize = take("fontsize")
        .and_then(|v| v.as_f64())
        .map(|v| v as f32)
        .unwrap_or(rc.tick_labelsize);
    let label = take("label").and_then(|v| v.as_str().map(str::to_string));

    let extent = match orientation {
        Orientation::Vertical => size.height(),
        Orientation::Horizontal => size.width(),
    };
    let ticks = subsample_levels(
        &payload.values,
        maxn,
        extent * length,
        orientation.tick_scale(),
        fontsize,
    );

    ColorbarRequest {
        loc,
        orientation,
        handles: payload.handles.clone(),
        labels: payload.labels.clone(),
        ticks,
        length,
        label,
        props,
    }
}
