//! Daydream demo application
//!
//! The frame driver that shows the commons caption panel for a few seconds
//! after ZR is pressed and exits on Plus. It renders into a
//! [`PaintContext`](daydream_paint::PaintContext) backed by the romfs
//! mount and is driven by any [`EventLoop`](daydream_platform::EventLoop).
//!
//! # Example
//!
//! ```ignore
//! use daydream_app::{run, AppConfig};
//! use daydream_platform::{Button, RomfsLoader, ScriptedEventLoop};
//!
//! let config = AppConfig::default();
//! let loader = RomfsLoader::mount(&config.assets.romfs);
//! let event_loop = ScriptedEventLoop::new(600).press_at(30, Button::ZR);
//!
//! let summary = run(&config, loader, event_loop)?;
//! println!("{} frames", summary.frames);
//! ```

pub mod app;
pub mod caption;
pub mod config;
pub mod error;

pub use app::{run, DemoApp, RunSummary};
pub use caption::CaptionTimer;
pub use config::AppConfig;
pub use error::{AppError, Result};
