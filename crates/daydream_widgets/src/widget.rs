//! The widget trait

/// Something that draws itself into the shared render context
///
/// Widgets draw once when constructed. `update` redraws with the current
/// fields, so calling it after a setter makes the change visible.
pub trait Widget {
    /// Issue this widget's draw sequence
    fn draw(&mut self);

    /// Redraw with the current fields
    fn update(&mut self) {
        self.draw();
    }
}
