//! Pad input
//!
//! The frame driver polls the pad once per frame. [`PadState`] keeps the
//! previous frame's held set so it can tell buttons that went down this
//! frame apart from buttons that are merely still held.

/// Pad buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
    X,
    Y,
    StickL,
    StickR,
    L,
    R,
    ZL,
    ZR,
    Plus,
    Minus,
    Left,
    Up,
    Right,
    Down,
}

impl Button {
    /// Every button, in bit order
    pub const ALL: [Button; 16] = [
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::StickL,
        Button::StickR,
        Button::L,
        Button::R,
        Button::ZL,
        Button::ZR,
        Button::Plus,
        Button::Minus,
        Button::Left,
        Button::Up,
        Button::Right,
        Button::Down,
    ];

    /// Bit of this button in a button mask
    pub const fn mask(self) -> u64 {
        1 << (self as u32)
    }

    /// Parse a button name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Button> {
        let name = name.to_ascii_lowercase();
        let button = match name.as_str() {
            "a" => Button::A,
            "b" => Button::B,
            "x" => Button::X,
            "y" => Button::Y,
            "stickl" | "lstick" => Button::StickL,
            "stickr" | "rstick" => Button::StickR,
            "l" => Button::L,
            "r" => Button::R,
            "zl" => Button::ZL,
            "zr" => Button::ZR,
            "plus" | "+" => Button::Plus,
            "minus" | "-" => Button::Minus,
            "left" => Button::Left,
            "up" => Button::Up,
            "right" => Button::Right,
            "down" => Button::Down,
            _ => return None,
        };
        Some(button)
    }
}

/// Button state for the current frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PadState {
    held: u64,
    previous: u64,
}

impl PadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame with the set of buttons currently held
    pub fn update<I>(&mut self, held: I)
    where
        I: IntoIterator<Item = Button>,
    {
        let mask = held.into_iter().fold(0, |acc, b| acc | b.mask());
        self.update_mask(mask);
    }

    /// Advance one frame with a raw held mask
    pub fn update_mask(&mut self, held: u64) {
        self.previous = self.held;
        self.held = held;
    }

    /// Mask of buttons that went down this frame
    pub fn buttons_down(&self) -> u64 {
        self.held & !self.previous
    }

    /// Mask of buttons that were released this frame
    pub fn buttons_up(&self) -> u64 {
        self.previous & !self.held
    }

    /// Mask of buttons held this frame
    pub fn buttons_held(&self) -> u64 {
        self.held
    }

    /// Whether `button` went down this frame
    pub fn is_down(&self, button: Button) -> bool {
        self.buttons_down() & button.mask() != 0
    }

    /// Whether `button` is held this frame
    pub fn is_held(&self, button: Button) -> bool {
        self.held & button.mask() != 0
    }

    /// Buttons that went down this frame
    pub fn pressed(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(|b| self.is_down(*b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_only_on_first_frame() {
        let mut pad = PadState::new();

        pad.update([Button::ZR]);
        assert!(pad.is_down(Button::ZR));
        assert!(pad.is_held(Button::ZR));

        pad.update([Button::ZR]);
        assert!(!pad.is_down(Button::ZR));
        assert!(pad.is_held(Button::ZR));

        pad.update([]);
        assert!(!pad.is_held(Button::ZR));
        assert_eq!(pad.buttons_up(), Button::ZR.mask());
    }

    #[test]
    fn test_pressed_lists_new_buttons() {
        let mut pad = PadState::new();
        pad.update([Button::A]);
        pad.update([Button::A, Button::Plus, Button::ZR]);

        let pressed: Vec<_> = pad.pressed().collect();
        assert_eq!(pressed, vec![Button::ZR, Button::Plus]);
    }

    #[test]
    fn test_masks_are_distinct() {
        let combined = Button::ALL.iter().fold(0u64, |acc, b| {
            assert_eq!(acc & b.mask(), 0);
            acc | b.mask()
        });
        assert_eq!(combined.count_ones(), 16);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Button::from_name("ZR"), Some(Button::ZR));
        assert_eq!(Button::from_name("plus"), Some(Button::Plus));
        assert_eq!(Button::from_name("nope"), None);
    }
}
