use plotive_axes::geom::Rect;
use plotive_axes::{Axis, Error, Kind, PanelOptions, Side};

use super::{fig_2x2, fig_single};

#[test]
fn panels_in_call_order() {
    let (mut fig, main) = fig_single();
    let p1 = fig.add_panel(main, Side::Right, PanelOptions::new()).unwrap();
    let p2 = fig.add_panel(main, Side::Right, PanelOptions::new()).unwrap();
    let p3 = fig.add_panel(main, Side::Right, PanelOptions::new()).unwrap();
    assert_eq!(fig.panels(main, Side::Right, false).unwrap(), vec![p1, p2, p3]);
    assert!(fig.panels(main, Side::Left, true).unwrap().is_empty());

    fig.remove_axes(p2).unwrap();
    assert_eq!(fig.panels(main, Side::Right, false).unwrap(), vec![p1, p3]);
    assert!(!fig.contains(p2));
}

#[test]
fn panels_stack_outwards() {
    let (mut fig, main) = fig_single();
    let p1 = fig.add_panel(main, Side::Left, PanelOptions::new()).unwrap();
    let p2 = fig.add_panel(main, Side::Left, PanelOptions::new()).unwrap();
    let main_pos = *fig.get(main).unwrap().position();
    let r1 = *fig.get(p1).unwrap().position();
    let r2 = *fig.get(p2).unwrap().position();
    assert!(r1.right() <= main_pos.left());
    assert!(r2.right() <= r1.left());
    assert_eq!(fig.get(p1).unwrap().side(), Some(Side::Left));
    assert_eq!(
        fig.get(p2).unwrap().kind(),
        Kind::Panel {
            parent: main,
            side: Side::Left
        }
    );
}

#[test]
fn no_panel_of_panel() {
    let (mut fig, main) = fig_single();
    let pax = fig.add_panel(main, Side::Bottom, PanelOptions::new()).unwrap();
    assert_eq!(
        fig.add_panel(pax, Side::Bottom, PanelOptions::new()),
        Err(Error::NestedPanel(pax))
    );
}

#[test]
fn invalid_panel_sizes_are_rejected() {
    let (mut fig, main) = fig_single();
    let res = fig.add_panel(main, Side::Left, PanelOptions::new().with_width(f32::NAN));
    assert!(matches!(res, Err(Error::InvalidPanelSize(w)) if w.is_nan()));
    let res = fig.add_panel(main, Side::Top, PanelOptions::new().with_space(f32::INFINITY));
    assert_eq!(res, Err(Error::InvalidPanelSize(f32::INFINITY)));
    let res = fig.add_panel(main, Side::Right, PanelOptions::new().with_width(-0.5));
    assert_eq!(res, Err(Error::InvalidPanelSize(-0.5)));

    assert!(fig.panels(main, Side::Left, true).unwrap().is_empty());
    assert!(fig.panels(main, Side::Top, true).unwrap().is_empty());
    assert!(fig.panels(main, Side::Right, true).unwrap().is_empty());
    assert_eq!(fig.len(), 1);

    // the figure is still usable
    let pax = fig.add_panel(main, Side::Left, PanelOptions::new()).unwrap();
    assert_eq!(fig.panels(main, Side::Left, false).unwrap(), vec![pax]);
}

#[test]
fn inset_bounds_out_of_range() {
    let (mut fig, main) = fig_single();
    let bounds = Rect::from_xywh(0.0, f32::MAX, 0.5, f32::MAX);
    assert_eq!(fig.add_inset(main, bounds), Err(Error::InvalidBounds(bounds)));
    assert!(fig.get(main).unwrap().children().is_empty());
}

#[test]
fn invalid_side_name() {
    assert_eq!(
        "middle".parse::<Side>(),
        Err(Error::InvalidSide("middle".to_string()))
    );
    assert_eq!("left".parse::<Side>(), Ok(Side::Left));
}

#[test]
fn hidden_panels_stay_in_stack() {
    let (mut fig, main) = fig_single();
    let p1 = fig.add_panel(main, Side::Top, PanelOptions::new()).unwrap();
    let p2 = fig.add_panel(main, Side::Top, PanelOptions::new()).unwrap();
    let before = *fig.get(p1).unwrap().position();

    fig.hide_panel(p1).unwrap();
    assert_eq!(fig.panels(main, Side::Top, false).unwrap(), vec![p2]);
    assert_eq!(fig.panels(main, Side::Top, true).unwrap(), vec![p1, p2]);

    let hidden = fig.get(p1).unwrap();
    assert!(hidden.is_hidden());
    assert!(!hidden.decorations().spines);
    assert!(!hidden.decorations().ticks);
    assert_eq!(hidden.decorations().background_alpha, 0.0);
    assert_eq!(*hidden.position(), before);
}

#[test]
fn filled_panels_are_hidden() {
    let (mut fig, main) = fig_single();
    let pax = fig.add_panel(main, Side::Right, PanelOptions::filled()).unwrap();
    assert!(fig.get(pax).unwrap().is_hidden());
    assert!(fig.panels(main, Side::Right, false).unwrap().is_empty());
}

#[test]
fn removing_main_removes_attached() {
    let (mut fig, ids) = fig_2x2();
    let main = ids[0];
    let pax = fig.add_panel(main, Side::Bottom, PanelOptions::new()).unwrap();
    let inset = fig
        .add_inset(main, Rect::from_xywh(0.6, 0.6, 0.3, 0.3))
        .unwrap();
    let twin = fig.add_twin(main, Axis::X).unwrap();
    let count = fig.len();

    fig.remove_axes(main).unwrap();
    assert_eq!(fig.len(), count - 4);
    for id in [main, pax, inset, twin] {
        assert!(!fig.contains(id));
        assert_eq!(fig.get(id).err(), Some(Error::UnknownAxes(id)));
    }
    // nobody follows a removed axes
    assert!(fig.share_edges().iter().all(|e| e.parent != main));
    assert_eq!(fig.main_axes(), &ids[1..]);
}

#[test]
fn iteration_order() {
    let (mut fig, main) = fig_single();
    let left = fig.add_panel(main, Side::Left, PanelOptions::new()).unwrap();
    let right = fig.add_panel(main, Side::Right, PanelOptions::filled()).unwrap();
    let inset = fig
        .add_inset(main, Rect::from_xywh(0.1, 0.1, 0.2, 0.2))
        .unwrap();

    assert_eq!(fig.iter_axes(false, false, false), vec![main]);
    assert_eq!(fig.iter_axes(false, false, true), vec![main, left]);
    assert_eq!(fig.iter_axes(true, false, true), vec![main, left, right]);
    assert_eq!(fig.iter_axes(true, true, true), vec![main, inset, left, right]);
}
