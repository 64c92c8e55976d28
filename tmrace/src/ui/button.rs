use cmrace::dims::Dims;
use crossterm::style::ContentStyle;
use unicode_width::UnicodeWidthStr;

use crate::renderer::{drawable::Drawable, helpers::style, Cell, Frame};

use super::{draw_box, swap_fg_bg, Rect};

#[derive(Debug)]
pub struct Button {
    pub text: String,
    pub pos: Dims,
    pub size: Dims,
    pub normal: ContentStyle,
    pub highlight: ContentStyle,
    /// Hover state; drawn inverted when set.
    pub set: bool,
}

impl Button {
    pub fn new(text: &str, pos: Dims, size: Dims) -> Self {
        assert!(size.0 >= text.width() as i32 + 2);
        assert!(size.1 >= 3);

        Self {
            text: text.to_string(),
            pos,
            size,
            normal: style().build(),
            highlight: style().a(crossterm::style::Attribute::Bold).build(),
            set: false,
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let base = if self.set {
            swap_fg_bg(self.highlight)
        } else {
            self.normal
        };

        draw_box(frame, self.pos, self.size, base);
        frame.fill_rect(
            self.pos + Dims::ONE,
            self.size - Dims(2, 2),
            Cell::styled(' ', base),
        );

        let text_rect = Rect::sized_at(self.pos + Dims::ONE, self.size - Dims(2, 2))
            .centered(Dims(self.text.width() as i32, 1));
        self.text.draw(text_rect.start, frame, base);
    }

    pub fn detect_over(&self, pos: Dims) -> bool {
        Rect::sized_at(self.pos, self.size).contains(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_over_matches_the_drawn_area() {
        let button = Button::new("Restart", Dims(10, 5), Dims(11, 3));
        assert!(button.detect_over(Dims(10, 5)));
        assert!(button.detect_over(Dims(20, 7)));
        assert!(!button.detect_over(Dims(21, 7)));
        assert!(!button.detect_over(Dims(10, 4)));
    }

    #[test]
    #[should_panic]
    fn too_small_for_its_text() {
        let _ = Button::new("Restart", Dims::ZERO, Dims(7, 3));
    }
}
