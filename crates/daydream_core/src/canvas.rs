//! Borrowed handle to the shared render context
//!
//! Every widget draws into the same context, which the frame driver owns.
//! `CanvasRef` is how widgets refer to it: a `Copy` handle borrowing a
//! `RefCell<dyn RenderContext>` for `'a`, so the context must outlive every
//! widget holding one. Each draw takes the mutable borrow for the duration of
//! a single primitive sequence and releases it before returning.

use std::cell::RefCell;
use std::fmt;

use crate::draw::RenderContext;

/// Non-owning, lifetime-bound reference to the shared render context
#[derive(Clone, Copy)]
pub struct CanvasRef<'a> {
    ctx: &'a RefCell<dyn RenderContext + 'a>,
}

impl<'a> CanvasRef<'a> {
    /// Borrow a concrete context
    pub fn new<C: RenderContext + 'a>(ctx: &'a RefCell<C>) -> Self {
        Self { ctx }
    }

    /// Borrow an already type-erased context
    pub fn from_dyn(ctx: &'a RefCell<dyn RenderContext + 'a>) -> Self {
        Self { ctx }
    }

    /// Run `f` with exclusive access to the context
    ///
    /// # Panics
    ///
    /// Panics if the context is already borrowed, i.e. when called from
    /// inside another `with` on the same context.
    pub fn with<R>(&self, f: impl FnOnce(&mut (dyn RenderContext + 'a)) -> R) -> R {
        let mut ctx = self.ctx.borrow_mut();
        f(&mut *ctx)
    }

    /// Like `with`, but returns `None` instead of panicking when the context
    /// is already borrowed
    pub fn try_with<R>(&self, f: impl FnOnce(&mut (dyn RenderContext + 'a)) -> R) -> Option<R> {
        let mut ctx = self.ctx.try_borrow_mut().ok()?;
        Some(f(&mut *ctx))
    }
}

impl fmt::Debug for CanvasRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasRef").finish_non_exhaustive()
    }
}
