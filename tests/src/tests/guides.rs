use plotive_axes::guide::colorbar::Orientation;
use plotive_axes::render::{LegendEntry, LegendLayout};
use plotive_axes::{Error, GuideKind, GuideLoc, GuideObj, Handle, PanelOptions, Payload, Side};

use super::fig_single;
use crate::RecordingScene;

fn entry(handle: u64, label: &str) -> LegendEntry {
    LegendEntry {
        handle: Handle(handle),
        label: Some(label.to_string()),
    }
}

#[test]
fn queued_legends_merge() {
    let (mut fig, main) = fig_single();
    let mut scene = RecordingScene::new();
    let loc = Some(GuideLoc::CenterLeft);

    let res = fig
        .legend(main, loc, Payload::new().with_entry(Handle(1), "l1"), true, &mut scene)
        .unwrap();
    assert_eq!(res, None);
    fig.legend(main, loc, Payload::new().with_entry(Handle(2), "l2"), true, &mut scene)
        .unwrap();
    assert!(scene.legends.is_empty());
    assert_eq!(fig.get(main).unwrap().legends().pending_count(), 1);

    assert_eq!(fig.flush_guides(&mut scene).unwrap(), 1);
    assert_eq!(scene.legends.len(), 1);
    let (axes, req, _) = &scene.legends[0];
    assert_eq!(*axes, main);
    assert_eq!(req.loc, GuideLoc::CenterLeft);
    match &req.layout {
        LegendLayout::Columns { entries, .. } => {
            assert_eq!(entries, &vec![entry(1, "l1"), entry(2, "l2")]);
        }
        layout => panic!("unexpected layout {:?}", layout),
    }

    // nothing left to draw
    assert_eq!(fig.flush_guides(&mut scene).unwrap(), 0);
    assert_eq!(scene.legends.len(), 1);
}

#[test]
fn immediate_legend_replaces_previous() {
    let (mut fig, main) = fig_single();
    let mut scene = RecordingScene::new();
    let loc = Some(GuideLoc::UpperRight);

    let first = fig
        .legend(main, loc, Payload::new().with_entry(Handle(1), "a"), false, &mut scene)
        .unwrap();
    let second = fig
        .legend(main, loc, Payload::new().with_entry(Handle(2), "b"), false, &mut scene)
        .unwrap();
    assert_eq!(first, Some(GuideObj(1)));
    assert_eq!(second, Some(GuideObj(2)));
    assert_eq!(scene.removed, vec![(GuideKind::Legend, GuideObj(1))]);

    let queue = fig.get(main).unwrap().legends();
    assert_eq!(queue.len(), 1);
    assert_eq!(
        queue.get(GuideLoc::UpperRight).and_then(|e| e.resolved()),
        Some(GuideObj(2))
    );
}

#[test]
fn queued_over_drawn_retires_it() {
    let (mut fig, main) = fig_single();
    let mut scene = RecordingScene::new();
    let loc = Some(GuideLoc::LowerLeft);

    fig.legend(main, loc, Payload::new().with_handle(Handle(1)), true, &mut scene)
        .unwrap();
    fig.flush_guides(&mut scene).unwrap();
    fig.legend(main, loc, Payload::new().with_handle(Handle(2)), true, &mut scene)
        .unwrap();
    assert_eq!(scene.removed, vec![(GuideKind::Legend, GuideObj(1))]);

    assert_eq!(fig.flush_guides(&mut scene).unwrap(), 1);
    assert_eq!(scene.legends.len(), 2);
    assert_eq!(scene.removed.len(), 1);
}

#[test]
fn outer_legend_fills_hidden_panel() {
    let (mut fig, main) = fig_single();
    let mut scene = RecordingScene::new();

    fig.legend(
        main,
        Some(GuideLoc::Outer(Side::Right)),
        Payload::new().with_entry(Handle(1), "a"),
        true,
        &mut scene,
    )
    .unwrap();
    assert!(fig.panels(main, Side::Right, true).unwrap().is_empty());

    assert_eq!(fig.flush_guides(&mut scene).unwrap(), 1);
    let panels = fig.panels(main, Side::Right, true).unwrap();
    assert_eq!(panels.len(), 1);
    let pax = fig.get(panels[0]).unwrap();
    assert!(pax.is_hidden());
    assert!(!pax.is_share_eligible());
    assert!(fig.get(main).unwrap().legends().is_empty());

    let (axes, req, _) = &scene.legends[0];
    assert_eq!(*axes, panels[0]);
    // aligned towards the main axes
    assert_eq!(req.loc, GuideLoc::CenterLeft);
}

#[test]
fn outer_guides_of_both_kinds_get_their_own_panel() {
    let (mut fig, main) = fig_single();
    let mut scene = RecordingScene::new();
    let right = Some(GuideLoc::Outer(Side::Right));

    fig.colorbar(main, right, Payload::new().with_handle(Handle(1)), true, &mut scene)
        .unwrap();
    fig.legend(main, right, Payload::new().with_handle(Handle(2)), true, &mut scene)
        .unwrap();
    assert_eq!(fig.flush_guides(&mut scene).unwrap(), 2);
    assert_eq!(fig.panels(main, Side::Right, true).unwrap().len(), 2);
    assert_eq!(scene.colorbars[0].1.orientation, Orientation::Vertical);
}

#[test]
fn immediate_outer_colorbar_reuses_filled_panel() {
    let (mut fig, main) = fig_single();
    let mut scene = RecordingScene::new();
    let bottom = Some(GuideLoc::Outer(Side::Bottom));
    let payload = || Payload::new().with_handle(Handle(1)).with_values(vec![0.0, 1.0, 2.0]);

    fig.colorbar(main, bottom, payload(), false, &mut scene).unwrap();
    fig.colorbar(main, bottom, payload(), false, &mut scene).unwrap();
    let panels = fig.panels(main, Side::Bottom, true).unwrap();
    assert_eq!(panels.len(), 1);
    assert_eq!(scene.colorbars.len(), 2);
    assert_eq!(scene.removed, vec![(GuideKind::Colorbar, GuideObj(1))]);

    let (axes, req, _) = &scene.colorbars[1];
    assert_eq!(*axes, panels[0]);
    assert_eq!(req.loc, GuideLoc::Fill);
    assert_eq!(req.orientation, Orientation::Horizontal);
    assert_eq!(req.ticks, vec![0.0, 1.0, 2.0]);
}

#[test]
fn fill_hides_existing_panel() {
    let (mut fig, main) = fig_single();
    let mut scene = RecordingScene::new();
    let pax = fig.add_panel(main, Side::Left, PanelOptions::new()).unwrap();

    fig.colorbar(
        pax,
        Some(GuideLoc::Fill),
        Payload::new().with_handle(Handle(3)),
        false,
        &mut scene,
    )
    .unwrap();
    assert!(fig.get(pax).unwrap().is_hidden());
    assert!(fig.panels(main, Side::Left, false).unwrap().is_empty());
    assert_eq!(scene.colorbars[0].1.orientation, Orientation::Vertical);
}

#[test]
fn fill_outside_panel_is_ignored() {
    let (mut fig, main) = fig_single();
    let mut scene = RecordingScene::new();
    let res = fig
        .legend(
            main,
            Some(GuideLoc::Fill),
            Payload::new().with_handle(Handle(1)),
            false,
            &mut scene,
        )
        .unwrap();
    assert_eq!(res, None);
    assert!(scene.legends.is_empty());
    assert!(fig.get(main).unwrap().legends().is_empty());
}

#[test]
fn outer_location_on_panel_fails() {
    let (mut fig, main) = fig_single();
    let mut scene = RecordingScene::new();
    let pax = fig.add_panel(main, Side::Top, PanelOptions::new()).unwrap();
    let res = fig.legend(
        pax,
        Some(GuideLoc::Outer(Side::Top)),
        Payload::new(),
        true,
        &mut scene,
    );
    assert_eq!(res, Err(Error::NestedPanel(pax)));
}

#[test]
fn legend_props_are_consumed() {
    let (mut fig, main) = fig_single();
    let mut scene = RecordingScene::new();
    let payload = Payload::new()
        .with_entry(Handle(1), "a")
        .with_entry(Handle(2), "b")
        .with_entry(Handle(3), "c")
        .with_prop("ncol", 2.0)
        .with_prop("center", true)
        .with_prop("title", "Legend")
        .with_prop("framealpha", 0.5);

    fig.legend(main, None, payload, false, &mut scene).unwrap();
    let (_, req, _) = &scene.legends[0];
    // best location is not available for centered rows
    assert_eq!(req.loc, GuideLoc::UpperCenter);
    assert_eq!(req.title.as_deref(), Some("Legend"));
    assert_eq!(req.props.len(), 1);
    assert!(req.props.contains_key("framealpha"));
    match &req.layout {
        LegendLayout::CenteredRows { rows } => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].entries.len(), 2);
            assert!(rows[0].band.0 > rows[1].band.0);
        }
        layout => panic!("unexpected layout {:?}", layout),
    }
}

#[test]
fn backend_failure_is_surfaced() {
    let (mut fig, main) = fig_single();
    let mut scene = RecordingScene::failing();
    let res = fig.legend(
        main,
        Some(GuideLoc::UpperLeft),
        Payload::new().with_handle(Handle(1)),
        false,
        &mut scene,
    );
    assert!(matches!(res, Err(Error::Backend(_))));

    fig.legend(
        main,
        Some(GuideLoc::UpperLeft),
        Payload::new().with_handle(Handle(1)),
        true,
        &mut scene,
    )
    .unwrap();
    assert!(matches!(fig.flush_guides(&mut scene), Err(Error::Backend(_))));
    // still pending for the next attempt
    assert_eq!(fig.get(main).unwrap().legends().pending_count(), 1);
}
