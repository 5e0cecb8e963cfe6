//! Drives the grid widget headlessly with synthetic pointer input.

use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect, vec2};
use huegrid_core::{BorderStyle, ColorGridPanel, DefaultSelectionModel, SwatchState};
use huegrid_widgets::ColorGridView;

struct GridFrame {
    rect: Rect,
    hovered: Option<usize>,
    pressed: Option<usize>,
}

fn run_frame(
    ctx: &egui::Context,
    panel: &mut ColorGridPanel,
    model: &mut DefaultSelectionModel,
    events: Vec<Event>,
) -> GridFrame {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
        events,
        ..Default::default()
    };

    let mut frame = None;
    let _ = ctx.run(input, |ctx| {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let response = ColorGridView::new(&mut *panel, &mut *model).show(ui);
                frame = Some(GridFrame {
                    rect: response.response.rect,
                    hovered: response.hovered,
                    pressed: response.pressed,
                });
            });
    });
    frame.expect("grid was not shown")
}

fn cell_center(rect: Rect, row: f32, col: f32, cell: f32) -> Pos2 {
    rect.min + vec2((col + 0.5) * cell, (row + 0.5) * cell)
}

fn press(pos: Pos2) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: true,
        modifiers: Modifiers::default(),
    }
}

#[test]
fn test_first_frame_builds_panel() {
    let _ = env_logger::builder().is_test(true).try_init();
    let ctx = egui::Context::default();
    let mut panel = ColorGridPanel::default();
    let mut model = DefaultSelectionModel::new();

    let frame = run_frame(&ctx, &mut panel, &mut model, vec![]);

    assert!(panel.is_built());
    assert_eq!(panel.visible_swatches().len(), 16);
    assert_eq!(frame.rect.size(), vec2(140.0, 140.0));
    assert_eq!(frame.hovered, None);
    assert!(model.selected_color().is_none());
}

#[test]
fn test_hover_press_and_leave() {
    let _ = env_logger::builder().is_test(true).try_init();
    let ctx = egui::Context::default();
    let mut panel = ColorGridPanel::default();
    let mut model = DefaultSelectionModel::new();

    let rect = run_frame(&ctx, &mut panel, &mut model, vec![]).rect;
    let over_three = cell_center(rect, 0.0, 3.0, 35.0);
    let over_zero = cell_center(rect, 0.0, 0.0, 35.0);

    // Enter swatch 3.
    let frame = run_frame(&ctx, &mut panel, &mut model, vec![Event::PointerMoved(over_three)]);
    assert_eq!(frame.hovered, Some(3));
    assert_eq!(panel.swatch(3).unwrap().state, SwatchState::Hovered);
    assert_eq!(
        panel.swatch(3).unwrap().border(1),
        BorderStyle::Line { width: 2 }
    );

    // Press it.
    let frame = run_frame(&ctx, &mut panel, &mut model, vec![press(over_three)]);
    assert_eq!(frame.pressed, Some(3));
    assert_eq!(panel.selected_index(), Some(3));
    let rgba = model.selected_color().unwrap().to_rgba8();
    assert_eq!((rgba.r, rgba.g, rgba.b), (223, 255, 0));

    // Move to swatch 0: 3 stays selected, 0 is emphasized.
    let frame = run_frame(&ctx, &mut panel, &mut model, vec![Event::PointerMoved(over_zero)]);
    assert_eq!(frame.hovered, Some(0));
    assert_eq!(panel.swatch(3).unwrap().border(1), BorderStyle::LoweredBevel);
    assert_eq!(panel.swatch(0).unwrap().state, SwatchState::Hovered);

    // Leave the window.
    let frame = run_frame(&ctx, &mut panel, &mut model, vec![Event::PointerGone]);
    assert_eq!(frame.hovered, None);
    assert_eq!(panel.swatch(0).unwrap().state, SwatchState::Normal);
    assert_eq!(panel.selected_index(), Some(3));
}

#[test]
fn test_press_moves_selection() {
    let ctx = egui::Context::default();
    let mut panel = ColorGridPanel::new(9, 40).unwrap();
    let mut model = DefaultSelectionModel::new();

    let rect = run_frame(&ctx, &mut panel, &mut model, vec![]).rect;
    let first = cell_center(rect, 0.0, 0.0, 40.0);
    let last = cell_center(rect, 2.0, 2.0, 40.0);

    run_frame(&ctx, &mut panel, &mut model, vec![Event::PointerMoved(first), press(first)]);
    assert_eq!(panel.selected_index(), Some(0));

    run_frame(&ctx, &mut panel, &mut model, vec![Event::PointerMoved(last), press(last)]);
    assert_eq!(panel.selected_index(), Some(8));
    assert!(!panel.swatch(0).unwrap().is_selected());
    assert_eq!(panel.swatch(0).unwrap().border(1), BorderStyle::Line { width: 1 });
}
