//! Daydream Platform Layer
//!
//! Platform-agnostic pieces the frame driver is built from:
//!
//! - [`assets`] - asset paths and loaders, including the read-only `romfs:/`
//!   mount
//! - [`PadState`] - per-frame button state (pressed this frame vs held)
//! - [`FrameClock`] - nanosecond timestamps to seconds and frame delta
//! - [`EventLoop`] - drives frames until the handler asks to exit
//!
//! # Example
//!
//! ```ignore
//! use daydream_platform::*;
//!
//! let event_loop = ScriptedEventLoop::new(600).press_at(10, Button::ZR);
//! event_loop.run(|frame| {
//!     if frame.pad.is_down(Button::Plus) {
//!         return ControlFlow::Exit;
//!     }
//!     // Render frame
//!     ControlFlow::Continue
//! })?;
//! ```

pub mod assets;
mod clock;
mod display;
mod error;
mod event;
mod input;

// Re-export all public types
pub use assets::{AssetLoader, AssetPath, MemoryAssetLoader, RomfsLoader};
pub use clock::{FrameClock, FrameTime};
pub use display::DisplayConfig;
pub use error::{PlatformError, Result};
pub use event::{ControlFlow, EventLoop, FrameEvent, ScriptedEventLoop};
pub use input::{Button, PadState};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assets::{AssetLoader, AssetPath, MemoryAssetLoader, RomfsLoader};
    pub use crate::clock::{FrameClock, FrameTime};
    pub use crate::display::DisplayConfig;
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{ControlFlow, EventLoop, FrameEvent, ScriptedEventLoop};
    pub use crate::input::{Button, PadState};
}
