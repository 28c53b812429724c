//! The frame driver
//!
//! Each frame: quit on Plus, arm the caption on ZR, then draw the caption
//! panel between `begin_frame` and `end_frame` while its timer runs.

use std::cell::RefCell;

use daydream_core::{CanvasRef, Size};
use daydream_paint::PaintContext;
use daydream_platform::{
    AssetLoader, Button, ControlFlow, DisplayConfig, EventLoop, FrameClock, FrameTime, PadState,
};
use daydream_widgets::Commons;
use tracing::{debug, info, warn};

use crate::caption::CaptionTimer;
use crate::config::{AppConfig, CaptionSection};
use crate::error::Result;

/// Per-frame state of the demo
#[derive(Debug)]
pub struct DemoApp<'a> {
    canvas: CanvasRef<'a>,
    display: DisplayConfig,
    caption: CaptionSection,
    timer: CaptionTimer,
    commons: Commons<'a>,
    caption_frames: u64,
}

impl<'a> DemoApp<'a> {
    /// Register the configured font and load the commons images
    ///
    /// A font that fails to load is logged; text then draws without it.
    pub fn new(canvas: CanvasRef<'a>, config: &AppConfig) -> Self {
        let font = &config.font;
        match canvas.with(|vg| vg.create_font(&font.name, &font.path)) {
            Ok(id) => debug!("font '{}' registered as {:?}", font.name, id),
            Err(err) => warn!("{}", err),
        }

        Self {
            canvas,
            display: config.display_config(),
            caption: config.caption.clone(),
            timer: CaptionTimer::new(config.caption.duration_secs),
            commons: Commons::new(canvas),
            caption_frames: 0,
        }
    }

    /// Handle one frame
    pub fn on_frame(&mut self, time: FrameTime, pad: &PadState) -> ControlFlow {
        if pad.is_down(Button::Plus) {
            info!("plus pressed, exiting at {:.3}s", time.seconds);
            return ControlFlow::Exit;
        }

        if pad.is_down(Button::ZR) {
            debug!("caption triggered at {:.3}s", time.seconds);
            self.timer.trigger(time.seconds);
        }

        let display = &self.display;
        self.canvas.with(|vg| {
            vg.begin_frame(
                display.width as f32,
                display.height as f32,
                display.pixel_ratio,
            )
        });

        if self.timer.is_visible(time.seconds) {
            let [x, y, width, height] = self.caption.rect;
            self.commons
                .draw_text_in_rect(&self.caption.text, x, y, width, height);
            self.caption_frames += 1;
        }

        self.canvas.with(|vg| vg.end_frame());
        ControlFlow::Continue
    }

    /// Frames on which the caption panel was drawn
    pub fn caption_frames(&self) -> u64 {
        self.caption_frames
    }

    pub fn timer(&self) -> &CaptionTimer {
        &self.timer
    }
}

/// What a finished run did
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames handed to the driver, including the one that exited
    pub frames: u64,
    /// Frames that reached `end_frame`
    pub frames_presented: u64,
    /// Frames that drew the caption panel
    pub caption_frames: u64,
    /// Images still live after the driver shut down
    pub leaked_images: usize,
}

/// Run the demo until the event loop stops
pub fn run<L, E>(config: &AppConfig, loader: L, event_loop: E) -> Result<RunSummary>
where
    L: AssetLoader,
    E: EventLoop,
{
    let viewport = Size::new(config.display.width as f32, config.display.height as f32);
    let ctx = RefCell::new(PaintContext::new(viewport, loader));

    let (frames, caption_frames) = {
        let mut app = DemoApp::new(CanvasRef::new(&ctx), config);
        let mut clock = FrameClock::new();

        info!(
            "running at {}x{}",
            config.display.width, config.display.height
        );
        let frames = event_loop.run(|frame| {
            let time = clock.tick(frame.timestamp_ns);
            app.on_frame(time, &frame.pad)
        })?;
        (frames, app.caption_frames())
    };

    let ctx = ctx.into_inner();
    let summary = RunSummary {
        frames,
        frames_presented: ctx.frames_presented(),
        caption_frames,
        leaked_images: ctx.image_count(),
    };
    info!(
        "stopped after {} frames ({} with caption)",
        summary.frames, summary.caption_frames
    );
    Ok(summary)
}
