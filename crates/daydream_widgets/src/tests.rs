//! Cross-widget scenarios against the recording context

use std::cell::RefCell;

use daydream_core::{
    Brush, CanvasRef, Color, DrawCommand, Point, RecordingContext, Rect, Size, TextAlign,
};

use crate::{Commons, Image, Rectangle, Text, Widget, COMMONS_IMAGE_PATHS};

fn context() -> RefCell<RecordingContext> {
    RefCell::new(RecordingContext::new(Size::new(1280.0, 720.0)))
}

fn context_with_commons_images() -> RefCell<RecordingContext> {
    let mut ctx = RecordingContext::new(Size::new(1280.0, 720.0));
    for path in COMMONS_IMAGE_PATHS {
        ctx.add_image(path);
    }
    RefCell::new(ctx)
}

/// Commands recorded by `f`, excluding everything before it
fn commands_of(ctx: &RefCell<RecordingContext>, f: impl FnOnce()) -> Vec<DrawCommand> {
    ctx.borrow_mut().clear();
    f();
    ctx.borrow_mut().take_commands()
}

// ─────────────────────────────────────────────────────────────────────────────
// Redraw
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn update_repeats_construction_sequence() {
    let ctx = context_with_commons_images();
    let canvas = CanvasRef::new(&ctx);

    let mut image = Image::new(canvas, 1.0, 2.0, 3.0, 4.0, COMMONS_IMAGE_PATHS[0]);
    let constructed = ctx.borrow_mut().take_commands();
    assert_eq!(commands_of(&ctx, || image.update()), constructed);

    let mut rect = Rectangle::new(canvas, 5.0, 6.0, 7.0, 8.0);
    let constructed = ctx.borrow_mut().take_commands();
    assert_eq!(commands_of(&ctx, || rect.update()), constructed);

    let mut text = Text::new(
        canvas,
        "label",
        "sans",
        18.0,
        9.0,
        10.0,
        Color::RED,
        TextAlign::LEFT_MIDDLE,
    );
    let constructed = ctx.borrow_mut().take_commands();
    assert_eq!(commands_of(&ctx, || text.update()), constructed);
}

#[test]
fn setters_show_new_values_only() {
    let ctx = context_with_commons_images();
    let canvas = CanvasRef::new(&ctx);

    let mut image = Image::new(canvas, 0.0, 0.0, 10.0, 10.0, COMMONS_IMAGE_PATHS[0]);
    image.set_x(11.0);
    image.set_y(12.0);
    image.set_width(13.0);
    image.set_height(14.0);
    image.set_angle(1.5);
    image.set_alpha(0.5);

    let commands = commands_of(&ctx, || image.update());
    let handle = image.handle().unwrap();
    assert_eq!(
        commands,
        vec![
            DrawCommand::BeginPath,
            DrawCommand::Rect(Rect::new(11.0, 12.0, 13.0, 14.0)),
            DrawCommand::FillPaint(Brush::image_pattern(
                11.0, 12.0, 13.0, 14.0, 1.5, handle, 0.5
            )),
            DrawCommand::Fill,
        ]
    );

    let mut text = Text::new(
        canvas,
        "old",
        "sans",
        16.0,
        0.0,
        0.0,
        Color::BLACK,
        TextAlign::default(),
    );
    text.set_text("new");
    text.set_font_face("mono");
    text.set_font_size(20.0);
    text.set_x(3.0);
    text.set_y(4.0);
    text.set_color(Color::GREEN);
    text.set_align(TextAlign::CENTER_MIDDLE);

    ctx.borrow_mut().clear();
    text.update();
    let ctx = ctx.borrow();
    let drawn = &ctx.texts()[0];
    assert_eq!(drawn.text, "new");
    assert_eq!(drawn.face.as_deref(), Some("mono"));
    assert_eq!(drawn.size, 20.0);
    assert_eq!(drawn.origin, Point::new(3.0, 4.0));
    assert_eq!(drawn.brush, Brush::Solid(Color::GREEN));
    assert_eq!(drawn.align, TextAlign::CENTER_MIDDLE);
}

// ─────────────────────────────────────────────────────────────────────────────
// Image acquisition
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn resolvable_image_acquires_handle() {
    let ctx = context_with_commons_images();
    let image = Image::new(CanvasRef::new(&ctx), 0.0, 0.0, 1.0, 1.0, COMMONS_IMAGE_PATHS[1]);

    let handle = image.handle().unwrap();
    assert_ne!(handle.0, 0);
    assert!(ctx.borrow().is_live(handle));
}

#[test]
fn unresolvable_image_fails_once_and_draws_nothing() {
    let ctx = context();
    let mut image = Image::new(CanvasRef::new(&ctx), 0.0, 0.0, 1.0, 1.0, "romfs:/missing.png");
    image.update();
    image.update();

    assert!(image.handle().is_none());
    let ctx = ctx.borrow();
    // Each failed create_image is one `warn!` in Image::draw
    assert_eq!(ctx.image_stats().failed, 1);
    assert!(ctx.fills().is_empty());
    assert!(ctx.commands().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Commons
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn draw_text_in_rect_layout() {
    let ctx = context_with_commons_images();
    let commons = Commons::new(CanvasRef::new(&ctx));
    let [first, second] = commons.images().map(Option::unwrap);

    commons.draw_text_in_rect("X", 10.0, 50.0, 300.0, 100.0);

    let ctx = ctx.borrow();
    let fills = ctx.fills();
    assert_eq!(fills.len(), 3);

    assert_eq!(fills[0].rect(), Some(Rect::new(10.0, 50.0, 300.0, 100.0)));
    assert_eq!(fills[0].brush, Brush::Solid(Color::rgba8(0, 0, 0, 255)));

    assert_eq!(fills[1].rect(), Some(Rect::new(30.0, 25.0, 100.0, 100.0)));
    assert_eq!(
        fills[1].brush,
        Brush::image_pattern(30.0, 25.0, 100.0, 100.0, 0.0, first, 1.0)
    );

    assert_eq!(fills[2].rect(), Some(Rect::new(90.0, 85.0, 80.0, 80.0)));
    assert_eq!(
        fills[2].brush,
        Brush::image_pattern(90.0, 85.0, 80.0, 80.0, 0.0, second, 1.0)
    );

    let caption = &ctx.texts()[0];
    assert_eq!(caption.text, "X");
    assert_eq!(caption.origin, Point::new(220.0, 100.0));
    assert_eq!(caption.size, 16.0);
    assert_eq!(caption.face.as_deref(), Some("sans"));
    assert_eq!(caption.brush, Brush::Solid(Color::WHITE));
    assert_eq!(caption.align, TextAlign::CENTER_MIDDLE);
}

#[test]
fn caption_anchor_ignores_panel_x() {
    let ctx = context_with_commons_images();
    let commons = Commons::new(CanvasRef::new(&ctx));

    commons.draw_text_in_rect("a", 0.0, 100.0, 400.0, 75.0);
    commons.draw_text_in_rect("b", 600.0, 100.0, 400.0, 75.0);

    let ctx = ctx.borrow();
    let xs: Vec<f32> = ctx.texts().iter().map(|t| t.origin.x).collect();
    assert_eq!(xs, vec![220.0, 220.0]);
    assert_eq!(ctx.texts()[0].origin.y, 137.5);
}

#[test]
fn draw_label_ignores_width() {
    let ctx = context();
    let commons = Commons::new(CanvasRef::new(&ctx));

    let narrow = commands_of(&ctx, || commons.draw_label("Hi", 5.0, 5.0, 999.0, 40.0));
    let wide = commands_of(&ctx, || commons.draw_label("Hi", 5.0, 5.0, 1.0, 40.0));
    assert_eq!(narrow, wide);

    assert_eq!(
        narrow,
        vec![
            DrawCommand::FontSize(64.0),
            DrawCommand::FontFace("sans".to_string()),
            DrawCommand::FillColor(Color::rgba8(0, 0, 0, 128)),
            DrawCommand::TextAlign(TextAlign::LEFT_MIDDLE),
            DrawCommand::Text {
                origin: Point::new(5.0, 25.0),
                text: "Hi".to_string(),
            },
        ]
    );
}

#[test]
fn commons_with_one_image_skips_other_layer() {
    let ctx = RefCell::new(
        RecordingContext::new(Size::new(1280.0, 720.0)).with_image(COMMONS_IMAGE_PATHS[0]),
    );
    let commons = Commons::new(CanvasRef::new(&ctx));

    commons.draw_text_in_rect("X", 10.0, 50.0, 300.0, 100.0);

    let ctx = ctx.borrow();
    let rects: Vec<_> = ctx.fills().iter().filter_map(|f| f.rect()).collect();
    assert_eq!(
        rects,
        vec![
            Rect::new(10.0, 50.0, 300.0, 100.0),
            Rect::new(30.0, 25.0, 100.0, 100.0),
        ]
    );
    assert_eq!(ctx.texts().len(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Release
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn dropping_widgets_releases_each_handle_once() {
    let ctx = context_with_commons_images();
    {
        let canvas = CanvasRef::new(&ctx);
        let _commons = Commons::new(canvas);
        let mut image = Image::new(canvas, 0.0, 0.0, 1.0, 1.0, COMMONS_IMAGE_PATHS[0]);
        image.update();
        assert_eq!(ctx.borrow().live_image_count(), 3);
    }

    let ctx = ctx.borrow();
    let stats = ctx.image_stats();
    assert_eq!(stats.created, 3);
    assert_eq!(stats.deleted, 3);
    assert_eq!(stats.invalid_deletes, 0);
    assert_eq!(ctx.live_image_count(), 0);
}

#[test]
fn failed_image_releases_nothing() {
    let ctx = context();
    {
        let _image = Image::new(CanvasRef::new(&ctx), 0.0, 0.0, 1.0, 1.0, "romfs:/nope.png");
    }
    let stats = ctx.borrow().image_stats();
    assert_eq!(stats.deleted, 0);
    assert_eq!(stats.invalid_deletes, 0);
}

#[test]
fn text_style_is_ambient_between_widgets() {
    let ctx = context();
    let canvas = CanvasRef::new(&ctx);

    let _title = Text::new(
        canvas,
        "title",
        "sans",
        40.0,
        0.0,
        0.0,
        Color::RED,
        TextAlign::CENTER_MIDDLE,
    );
    // A raw text call after the widget inherits whatever it set
    canvas.with(|vg| vg.text(Point::new(1.0, 1.0), "raw"));

    let ctx = ctx.borrow();
    let raw = &ctx.texts()[1];
    assert_eq!(raw.size, 40.0);
    assert_eq!(raw.face.as_deref(), Some("sans"));
    assert_eq!(raw.brush, Brush::Solid(Color::RED));
}
