use macroquad::prelude::*;

pub const HUD_FONT_SIZE: u16 = 14;
pub const HUD_TEXT_COLOR: Color = BLACK;

/// Text renderer shared by every draw call. Built once in `run` and passed
/// down explicitly; draws with macroquad's built-in font.
pub struct HudFont {
    size: u16,
    color: Color,
}

impl HudFont {
    pub fn new(size: u16, color: Color) -> Self {
        Self { size, color }
    }

    pub fn measure(&self, text: &str) -> TextDimensions {
        measure_text(text, None, self.size, 1.0)
    }

    /// Draws with `(x, y)` as the top-left corner of the text box.
    pub fn draw(&self, text: &str, x: f32, y: f32) {
        let dims = self.measure(text);
        self.draw_baseline(text, x, y + dims.offset_y);
    }

    pub fn draw_centered(&self, text: &str, center_x: f32, center_y: f32) {
        let dims = self.measure(text);
        let x = center_x - dims.width * 0.5;
        let y = center_y - dims.height * 0.5 + dims.offset_y;
        self.draw_baseline(text, x, y);
    }

    fn draw_baseline(&self, text: &str, x: f32, baseline_y: f32) {
        draw_text_ex(
            text,
            x,
            baseline_y,
            TextParams {
                font_size: self.size,
                color: self.color,
                ..Default::default()
            },
        );
    }
}

impl Default for HudFont {
    fn default() -> Self {
        Self::new(HUD_FONT_SIZE, HUD_TEXT_COLOR)
    }
}
