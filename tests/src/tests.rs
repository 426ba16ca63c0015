use plotive_axes::geom::Size;
use plotive_axes::{AxesId, Figure, GridSpan};

mod guides;
mod panels;
mod share;
mod titles;

/// A 2x2 grid of subplots, returned in row-major order
fn fig_2x2() -> (Figure, Vec<AxesId>) {
    let mut fig = Figure::new()
        .with_grid(2, 2)
        .with_size(Size::new(8.0, 6.0));
    let mut ids = Vec::new();
    for row in 0..2 {
        for col in 0..2 {
            ids.push(fig.add_subplot(GridSpan::cell(row, col)).unwrap());
        }
    }
    (fig, ids)
}

fn fig_single() -> (Figure, AxesId) {
    let mut fig = Figure::new().with_size(Size::new(4.0, 3.0));
    let id = fig.add_subplot(GridSpan::cell(0, 0)).unwrap();
    (fig, id)
}
