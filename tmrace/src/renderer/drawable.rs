use cmrace::dims::Dims;
use crossterm::style::ContentStyle;

use super::Frame;

pub trait Drawable {
    fn draw(&self, pos: Dims, frame: &mut Frame, style: ContentStyle);
}

impl<D: Drawable> Drawable for &D {
    fn draw(&self, pos: Dims, frame: &mut Frame, style: ContentStyle) {
        (**self).draw(pos, frame, style);
    }
}

impl Drawable for char {
    fn draw(&self, pos: Dims, frame: &mut Frame, style: ContentStyle) {
        frame.put_char(pos, *self, style);
    }
}

impl Drawable for &'_ str {
    fn draw(&self, pos: Dims, frame: &mut Frame, style: ContentStyle) {
        let mut x = 0;
        for character in self.chars() {
            x += frame.put_char(Dims(pos.0 + x, pos.1), character, style);
        }
    }
}

impl Drawable for String {
    fn draw(&self, pos: Dims, frame: &mut Frame, style: ContentStyle) {
        self.as_str().draw(pos, frame, style);
    }
}
