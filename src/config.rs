// Window defaults for the interactive harness.

use std::time::Duration;

use crate::types::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    pub width: usize,
    pub height: usize,
    pub background: Color,
    pub title: String,
    /// Pause after every cursor move so the drawing is visible as it happens.
    pub delay: Duration,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color::new(240, 248, 255),
            title: "Pixel Turtle".to_string(),
            delay: Duration::ZERO,
        }
    }
}
