//! Legend entries arrangement
use crate::geom::Size;
use crate::guide::{Handle, Payload};
use crate::loc::{GuideLoc, Side};
use crate::rc::Rc;
use crate::render::{LegendEntry, LegendLayout, LegendRequest, LegendRow};

/// Order in which the entries of a legend are given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Row-major: entries fill rows first
    #[default]
    RowMajor,
    /// Column-major: entries fill columns first
    ColumnMajor,
}

impl Order {
    /// Parse the `"C"` (row-major) and `"F"` (column-major) names
    pub fn from_name(name: &str) -> Option<Order> {
        match name {
            "C" | "c" => Some(Order::RowMajor),
            "F" | "f" => Some(Order::ColumnMajor),
            _ => None,
        }
    }
}

/// The location of a legend filling a panel on `side`.
/// The legend is aligned towards the main axes.
pub const fn fill_loc(side: Side) -> GuideLoc {
    match side {
        Side::Left => GuideLoc::CenterRight,
        Side::Right => GuideLoc::CenterLeft,
        Side::Top => GuideLoc::LowerCenter,
        Side::Bottom => GuideLoc::UpperCenter,
    }
}

/// Reorder `entries` given in `order` so that a legend filling its columns
/// first shows them in that order.
pub fn arrange<T: Clone>(entries: &[T], ncol: usize, order: Order) -> Vec<T> {
    if order == Order::ColumnMajor {
        return entries.to_vec();
    }
    let ncol = ncol.max(1);
    let nrows_max = entries.len() / ncol + 1;
    let ncols_final = entries.len() % ncol;
    let mut res = Vec::with_capacity(entries.len());
    for col in 0..ncol {
        let nrows = if col < ncols_final {
            nrows_max
        } else {
            nrows_max - 1
        };
        res.extend((0..nrows).map(|row| entries[row * ncol + col].clone()));
    }
    res
}

/// Split `entries` into rows of at most `ncol` entries, for a legend with centered rows
pub fn center_rows<T: Clone>(entries: &[T], ncol: usize) -> Vec<Vec<T>> {
    entries.chunks(ncol.max(1)).map(|row| row.to_vec()).collect()
}

/// Vertical band of each row of a legend with centered rows, in axes units
/// ((0, 0) is the bottom-left corner). `fontsize` is in points, `spacing` in
/// font size units and `height` is the height of the axes in inches.
///
/// The first row is always on top. A title takes the room of an extra row.
pub fn row_bands(
    nrows: usize,
    fontsize: f32,
    spacing: f32,
    height: f32,
    loc: GuideLoc,
    has_title: bool,
) -> Vec<(f32, f32)> {
    let interval = ((1.0 + spacing * 0.85) * fontsize / 72.0) / height.max(f32::EPSILON);
    let total = nrows + usize::from(has_title && nrows > 1);
    (0..nrows)
        .map(|i| {
            let k = (if i > 0 && has_title { i + 1 } else { i }) as f32;
            if loc.is_upper() {
                (1.0 - (k + 1.0) * interval, 1.0 - k * interval)
            } else if loc.is_lower() {
                let n = total as f32;
                ((n - k - 1.0) * interval, (n - k) * interval)
            } else {
                let top = 0.5 + interval * total as f32 / 2.0;
                (top - (k + 1.0) * interval, top - k * interval)
            }
        })
        .collect()
}

/// Build the request to draw the legend of `payload` at `loc`, on an axes
/// of physical size `size` (inches).
///
/// Recognized properties: `ncol`, `order`, `center`, `title`, `fontsize` and
/// `labelspacing`. Other properties are passed through.
pub(crate) fn request(loc: GuideLoc, payload: &Payload, rc: &Rc, size: Size) -> LegendRequest {
    let mut props = payload.props.clone();
    let mut take = |key: &str| props.remove(key);

    let ncol = take("ncol")
        .and_then(|v| v.as_f64())
        .map(|n| n.max(1.0) as usize)
        .unwrap_or(rc.legend_ncol);
    let order = match take("order") {
        Some(v) => match v.as_str().and_then(Order::from_name) {
            Some(order) => order,
            None => {
                log::warn!("invalid legend order {:?}, using row-major", v);
                Order::RowMajor
            }
        },
        None => Order::RowMajor,
    };
    let center = take("center").and_then(|v| v.as_bool()).unwrap_or(false);
    let title = take("title").and_then(|v| v.as_str().map(str::to_string));
    let fontsize = take("fontsize")
        .and_then(|v| v.as_f64())
        .map(|v| v as f32)
        .unwrap_or(rc.legend_fontsize);
    let spacing = take("labelspacing")
        .and_then(|v| v.as_f64())
        .map(|v| v as f32)
        .unwrap_or(rc.legend_labelspacing);

    let entries = entries(&payload.handles, &payload.labels);
    let (loc, layout) = if center && !entries.is_empty() {
        let loc = if loc == GuideLoc::Best {
            log::warn!("centered-row legends cannot use the best location, using upper center");
            GuideLoc::UpperCenter
        } else {
            loc
        };
        let rows = center_rows(&entries, ncol);
        let bands = row_bands(
            rows.len(),
            fontsize,
            spacing,
            size.height(),
            loc,
            title.is_some(),
        );
        let rows = rows
            .into_iter()
            .zip(bands)
            .map(|(entries, band)| LegendRow { entries, band })
            .collect();
        (loc, LegendLayout::CenteredRows { rows })
    } else {
        let entries = arrange(&entries, ncol, order);
        (loc, LegendLayout::Columns { ncol, entries })
    };

    LegendRequest {
        loc,
        layout,
        title,
        fontsize,
        props,
    }
}

fn entries(handles: &[Handle], labels: &[String]) -> Vec<LegendEntry> {
    handles
        .iter()
        .enumerate()
        .map(|(i, handle)| LegendEntry {
            handle: *handle,
            label: labels.get(i).cloned(),
        })
        .collect()
}
