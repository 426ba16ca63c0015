use plotive_axes::style::{StyleValue, TextStyle};
use plotive_axes::{
    Abc, ColorU8, Error, Figure, Format, GridSpan, PanelOptions, Rc, Side, TitleAbove, TitleLoc,
};

use super::{fig_2x2, fig_single};
use crate::{FixedMetrics, RecordingScene};

fn red() -> ColorU8 {
    ColorU8::from_rgb(255, 0, 0)
}

#[test]
fn partial_update_keeps_text() {
    let (mut fig, main) = fig_single();
    fig.set_title(main, TitleLoc::Center, Some("Hello"), &TextStyle::new())
        .unwrap();
    fig.set_title(
        main,
        TitleLoc::Center,
        None,
        &TextStyle::new().with_color(red()),
    )
    .unwrap();

    let slot = fig.get(main).unwrap().titles().get(TitleLoc::Center);
    assert_eq!(slot.text(), "Hello");
    assert_eq!(slot.style().color, Some(red()));
}

#[test]
fn unknown_slot_name() {
    assert_eq!(
        "middle".parse::<TitleLoc>(),
        Err(Error::UnknownSlot("middle".to_string()))
    );
    assert_eq!("upper-left".parse::<TitleLoc>(), Ok(TitleLoc::UpperLeft));
}

#[test]
fn transfer_moves_text_and_font() {
    let (mut fig, ids) = fig_2x2();
    let (src, dest) = (ids[0], ids[1]);
    fig.set_title(
        src,
        TitleLoc::Left,
        Some("Left title"),
        &TextStyle::new().with_color(red()).with_bbox(true),
    )
    .unwrap();
    fig.transfer_slot(src, dest, TitleLoc::Left).unwrap();

    let dslot = fig.get(dest).unwrap().titles().get(TitleLoc::Left);
    assert_eq!(dslot.text(), "Left title");
    assert_eq!(dslot.style().color, Some(red()));
    // box properties stay behind
    assert_eq!(dslot.style().bbox, None);
    assert!(fig.get(src).unwrap().titles().get(TitleLoc::Left).is_empty());
}

#[test]
fn transfer_blank_keeps_dest_text() {
    let (mut fig, ids) = fig_2x2();
    let (src, dest) = (ids[0], ids[1]);
    fig.set_title(dest, TitleLoc::Right, Some("kept"), &TextStyle::new())
        .unwrap();
    fig.set_title(src, TitleLoc::Right, Some("  "), &TextStyle::new().with_size(20.0))
        .unwrap();
    fig.transfer_slot(src, dest, TitleLoc::Right).unwrap();

    let dslot = fig.get(dest).unwrap().titles().get(TitleLoc::Right);
    assert_eq!(dslot.text(), "kept");
    assert_eq!(dslot.style().size, Some(20.0));
    // the source reads empty afterwards
    assert_eq!(
        fig.get(src).unwrap().titles().get(TitleLoc::Right).text(),
        ""
    );
}

#[test]
fn transfer_moves_pass_through_props() {
    let (mut fig, main) = fig_single();
    let top = fig.add_panel(main, Side::Top, PanelOptions::new()).unwrap();
    fig.set_title(
        main,
        TitleLoc::Center,
        Some("Hi"),
        &TextStyle::new().with("rotation", 45.0).with_bbox(true),
    )
    .unwrap();
    fig.transfer_slot(main, top, TitleLoc::Center).unwrap();

    let dslot = fig.get(top).unwrap().titles().get(TitleLoc::Center);
    assert_eq!(dslot.text(), "Hi");
    assert_eq!(
        dslot.style().extra.get("rotation"),
        Some(&StyleValue::Number(45.0))
    );
    // outer slots carry no box
    assert_eq!(dslot.style().bbox, None);
    assert_eq!(
        fig.get(main).unwrap().titles().get(TitleLoc::Center).text(),
        ""
    );
}

#[test]
fn titles_go_above_visible_panel() {
    let (mut fig, main) = fig_single();
    let top = fig.add_panel(main, Side::Top, PanelOptions::new()).unwrap();
    fig.set_title(main, TitleLoc::Center, Some("Above"), &TextStyle::new())
        .unwrap();
    fig.arbitrate_outer_slots(main).unwrap();

    assert_eq!(
        fig.get(top).unwrap().titles().get(TitleLoc::Center).text(),
        "Above"
    );
    assert!(fig.get(main).unwrap().titles().get(TitleLoc::Center).is_empty());

    // once the panel is hidden, the title comes back
    fig.hide_panel(top).unwrap();
    fig.arbitrate_outer_slots(main).unwrap();
    assert_eq!(
        fig.get(main).unwrap().titles().get(TitleLoc::Center).text(),
        "Above"
    );
    assert!(fig.get(top).unwrap().titles().get(TitleLoc::Center).is_empty());
}

#[test]
fn outermost_top_panel_receives_titles() {
    let (mut fig, main) = fig_single();
    let inner = fig.add_panel(main, Side::Top, PanelOptions::new()).unwrap();
    let outer = fig.add_panel(main, Side::Top, PanelOptions::new()).unwrap();
    fig.set_title(main, TitleLoc::Right, Some("R"), &TextStyle::new())
        .unwrap();
    fig.arbitrate_outer_slots(main).unwrap();
    assert!(fig.get(inner).unwrap().titles().get(TitleLoc::Right).is_empty());
    assert_eq!(
        fig.get(outer).unwrap().titles().get(TitleLoc::Right).text(),
        "R"
    );
}

#[test]
fn title_above_preference() {
    let (mut fig, main) = fig_single();
    let top = fig.add_panel(main, Side::Top, PanelOptions::new()).unwrap();
    fig.format(
        main,
        &Format::new()
            .with_title("Main")
            .with_title_above(TitleAbove::AlwaysMain),
    )
    .unwrap();
    fig.arbitrate_outer_slots(main).unwrap();
    assert_eq!(
        fig.get(main).unwrap().titles().get(TitleLoc::Center).text(),
        "Main"
    );

    fig.hide_panel(top).unwrap();
    fig.format(main, &Format::new().with_title_above(TitleAbove::AlwaysPanel))
        .unwrap();
    fig.arbitrate_outer_slots(main).unwrap();
    assert_eq!(
        fig.get(top).unwrap().titles().get(TitleLoc::Center).text(),
        "Main"
    );
}

#[test]
fn outer_abc_moves_with_titles() {
    let rc = Rc {
        abc: Some("(a)".to_string()),
        ..Rc::default()
    };
    let mut fig = Figure::new().with_rc(rc);
    let main = fig.add_subplot(GridSpan::cell(0, 0)).unwrap();
    let top = fig.add_panel(main, Side::Top, PanelOptions::new()).unwrap();
    fig.arbitrate_outer_slots(main).unwrap();

    let titles = fig.get(top).unwrap().titles();
    assert_eq!(titles.get(TitleLoc::Abc).text(), "(a)");
    assert_eq!(titles.abc_loc(), TitleLoc::Left);
}

#[test]
fn inner_abc_stays() {
    let rc = Rc {
        abc: Some("a".to_string()),
        abc_loc: TitleLoc::UpperLeft,
        ..Rc::default()
    };
    let mut fig = Figure::new().with_rc(rc);
    let main = fig.add_subplot(GridSpan::cell(0, 0)).unwrap();
    fig.add_panel(main, Side::Top, PanelOptions::new()).unwrap();
    fig.arbitrate_outer_slots(main).unwrap();

    let slot = fig.get(main).unwrap().titles().get(TitleLoc::Abc);
    assert_eq!(slot.text(), "a");
    // inner a-b-c labels get a border
    assert_eq!(slot.style().border, Some(true));
}

#[test]
fn invalid_abc_style_changes_nothing() {
    let (mut fig, main) = fig_single();
    let res = fig.format(
        main,
        &Format::new()
            .with_title("ignored")
            .with_abc(Abc::Style("(x)".to_string())),
    );
    assert_eq!(res, Err(Error::InvalidAbcStyle("(x)".to_string())));
    assert!(fig.get(main).unwrap().titles().get(TitleLoc::Center).is_empty());
}

#[test]
fn draw_hands_titles_to_scene() {
    let (mut fig, main) = fig_single();
    fig.format(
        main,
        &Format::new()
            .with_title_at(TitleLoc::Left, "Title")
            .with_abc(Abc::On),
    )
    .unwrap();

    let mut scene = RecordingScene::new();
    fig.draw(&mut scene, &FixedMetrics::new(6.0)).unwrap();

    let mut texts = scene.texts_of(main);
    texts.sort();
    assert_eq!(texts, vec!["Title", "a"]);
    assert_eq!(scene.decorations.len(), 1);

    let cmd = |text: &str| {
        scene
            .texts
            .iter()
            .find(|(_, cmd)| cmd.text == text)
            .map(|(_, cmd)| cmd.clone())
            .unwrap()
    };
    let abc = cmd("a");
    let title = cmd("Title");
    // the title is pushed right of the a-b-c label
    assert!(title.pos.x > abc.pos.x);
    assert_eq!(title.offset, (0.0, fig.rc().title_pad));
}

#[test]
fn draw_assigns_outer_titles() {
    let (mut fig, main) = fig_single();
    let top = fig.add_panel(main, Side::Top, PanelOptions::new()).unwrap();
    fig.set_title(main, TitleLoc::Center, Some("Up"), &TextStyle::new())
        .unwrap();

    let mut scene = RecordingScene::new();
    fig.draw(&mut scene, &FixedMetrics::new(6.0)).unwrap();
    assert!(scene.texts_of(main).is_empty());
    assert_eq!(scene.texts_of(top), vec!["Up"]);
}
