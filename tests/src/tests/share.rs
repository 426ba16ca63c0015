use plotive_axes::{Axis, Error, Figure, GridSpan, PanelOptions, Share, Side};

use super::{fig_2x2, fig_single};

#[test]
fn grid_2x2_references() {
    let (fig, ids) = fig_2x2();
    // row 0: axes at column 0 leads X
    assert_eq!(fig.share_targets(ids[1], Axis::X).unwrap(), vec![ids[0], ids[1]]);
    assert_eq!(fig.share_targets(ids[0], Axis::X).unwrap(), vec![ids[0], ids[1]]);
    assert_eq!(fig.share_targets(ids[3], Axis::X).unwrap(), vec![ids[2], ids[3]]);
    // columns: the bottom axes leads Y
    assert_eq!(fig.share_targets(ids[1], Axis::Y).unwrap(), vec![ids[3], ids[1]]);
    assert_eq!(fig.share_targets(ids[3], Axis::Y).unwrap(), vec![ids[3], ids[1]]);

    assert_eq!(fig.get(ids[1]).unwrap().shared(Axis::X), Some(ids[0]));
    assert_eq!(fig.get(ids[0]).unwrap().shared(Axis::X), None);
    assert_eq!(fig.get(ids[1]).unwrap().shared(Axis::Y), Some(ids[3]));
    assert_eq!(fig.get(ids[0]).unwrap().shared(Axis::Y), Some(ids[2]));
    assert_eq!(fig.get(ids[3]).unwrap().shared(Axis::Y), None);
}

#[test]
fn identical_extremes_raise() {
    let mut fig = Figure::new().with_grid(2, 2).with_share(Share::none());
    let a = fig.add_subplot(GridSpan::cell(0, 0)).unwrap();
    let b = fig.add_subplot(GridSpan::cell(0, 0)).unwrap();
    assert_eq!(
        fig.share_targets(a, Axis::X),
        Err(Error::AmbiguousShare {
            axis: Axis::X,
            position: 0
        })
    );
    assert!(matches!(
        fig.share_targets(b, Axis::Y),
        Err(Error::AmbiguousShare { axis: Axis::Y, .. })
    ));
    // and enabling sharing surfaces the error
    assert!(matches!(
        fig.set_share(Share::default()),
        Err(Error::AmbiguousShare { .. })
    ));
}

#[test]
fn freestanding_is_not_a_subplot() {
    let mut fig = Figure::new();
    let ax = fig
        .add_axes(plotive_axes::geom::Rect::from_xywh(0.1, 0.1, 0.5, 0.5))
        .unwrap();
    assert_eq!(fig.share_targets(ax, Axis::X), Err(Error::NotASubplot(ax)));
    assert_eq!(fig.span_axes(ax, Side::Left), Err(Error::NotASubplot(ax)));
    // panels of freestanding axes still share with it
    let pax = fig.add_panel(ax, Side::Top, PanelOptions::new()).unwrap();
    assert_eq!(fig.get(pax).unwrap().shared(Axis::X), Some(ax));
}

#[test]
fn outermost_bottom_panel_leads_x() {
    let (mut fig, main) = fig_single();
    let b1 = fig.add_panel(main, Side::Bottom, PanelOptions::new()).unwrap();
    let b2 = fig.add_panel(main, Side::Bottom, PanelOptions::new()).unwrap();
    let top = fig.add_panel(main, Side::Top, PanelOptions::new()).unwrap();

    assert_eq!(fig.get(main).unwrap().shared(Axis::X), Some(b2));
    assert_eq!(fig.get(b1).unwrap().shared(Axis::X), Some(b2));
    assert_eq!(fig.get(b2).unwrap().shared(Axis::X), None);
    assert_eq!(fig.get(top).unwrap().shared(Axis::X), Some(b2));
    assert_eq!(fig.get(top).unwrap().shared_long_axis(), Some(b2));
}

#[test]
fn outermost_left_panel_leads_y() {
    let (mut fig, main) = fig_single();
    let l1 = fig.add_panel(main, Side::Left, PanelOptions::new()).unwrap();
    let right = fig.add_panel(main, Side::Right, PanelOptions::new()).unwrap();
    assert_eq!(fig.get(main).unwrap().shared(Axis::Y), Some(l1));
    assert_eq!(fig.get(right).unwrap().shared(Axis::Y), Some(l1));
}

#[test]
fn unshared_panels_stay_out() {
    let (mut fig, main) = fig_single();
    let inner = fig.add_panel(main, Side::Bottom, PanelOptions::new()).unwrap();
    let outer = fig
        .add_panel(main, Side::Bottom, PanelOptions::new().with_share(false))
        .unwrap();
    assert_eq!(fig.get(main).unwrap().shared(Axis::X), Some(inner));
    assert_eq!(fig.get(outer).unwrap().shared(Axis::X), None);
}

#[test]
fn short_axis_zip_truncates() {
    let (mut fig, ids) = fig_2x2();
    let (a, b) = (ids[0], ids[1]);
    // a and b share X: their left panels pair up by position
    let a1 = fig.add_panel(a, Side::Left, PanelOptions::new()).unwrap();
    let a2 = fig.add_panel(a, Side::Left, PanelOptions::new()).unwrap();
    let b1 = fig.add_panel(b, Side::Left, PanelOptions::new()).unwrap();

    assert_eq!(fig.get(b1).unwrap().shared(Axis::X), Some(a1));
    assert_eq!(fig.get(b1).unwrap().shared_short_axis(), Some(a1));
    // a2 has no counterpart in b
    assert!(fig.share_edges().iter().all(|e| e.parent != a2 || e.axis != Axis::X));
}

#[test]
fn long_panels_follow_reference() {
    let (mut fig, ids) = fig_2x2();
    let (a, b) = (ids[0], ids[1]);
    let top = fig.add_panel(b, Side::Top, PanelOptions::new()).unwrap();
    // b follows a on X, so does its top panel
    assert_eq!(fig.get(b).unwrap().shared(Axis::X), Some(a));
    assert_eq!(fig.get(top).unwrap().shared(Axis::X), Some(a));
}

#[test]
fn set_share_recomputes() {
    let (mut fig, ids) = fig_2x2();
    fig.set_share(Share { x: false, y: true }).unwrap();
    assert_eq!(fig.get(ids[1]).unwrap().shared(Axis::X), None);
    assert_eq!(fig.get(ids[0]).unwrap().shared(Axis::Y), Some(ids[2]));
    assert_eq!(fig.get(ids[2]).unwrap().shared(Axis::Y), None);

    fig.set_share(Share::none()).unwrap();
    assert!(fig.share_edges().is_empty());

    fig.set_share(Share::default()).unwrap();
    assert_eq!(fig.get(ids[1]).unwrap().shared(Axis::X), Some(ids[0]));
}

#[test]
fn spanning_subplot_groups_alone() {
    let mut fig = Figure::new().with_grid(2, 2);
    let a = fig.add_subplot(GridSpan::cell(0, 0)).unwrap();
    let b = fig.add_subplot(GridSpan::cell(0, 1)).unwrap();
    let wide = fig.add_subplot(GridSpan::new((1, 2), (0, 2))).unwrap();

    assert_eq!(fig.share_targets(wide, Axis::Y).unwrap(), vec![wide]);
    assert_eq!(fig.share_targets(wide, Axis::X).unwrap(), vec![wide]);
    assert_eq!(fig.span_axes(a, Side::Top).unwrap(), vec![a, b]);
    assert_eq!(fig.span_axes(wide, Side::Left).unwrap(), vec![a, wide]);
}

#[test]
fn span_axes_deflect_to_shared_panel() {
    let (mut fig, ids) = fig_2x2();
    // the bottom-left axes leads Y of column 0, its left panel leads it
    let left = fig.add_panel(ids[2], Side::Left, PanelOptions::new()).unwrap();
    assert_eq!(fig.get(ids[2]).unwrap().shared(Axis::Y), Some(left));
    let spans = fig.span_axes(ids[0], Side::Left).unwrap();
    assert_eq!(spans, vec![ids[0], left]);
}

#[test]
fn sibling_sharing_overrides_panel_lead() {
    let (mut fig, ids) = fig_2x2();
    let left = fig.add_panel(ids[0], Side::Left, PanelOptions::new()).unwrap();
    // ids[0] follows the bottom axes of its column, and so does its panel
    assert_eq!(fig.get(ids[0]).unwrap().shared(Axis::Y), Some(ids[2]));
    assert_eq!(fig.get(left).unwrap().shared(Axis::Y), Some(ids[2]));
}
