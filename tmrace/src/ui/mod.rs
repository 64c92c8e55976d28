pub mod button;
pub mod rect;

pub use button::Button;
pub use rect::Rect;

use cmrace::dims::Dims;
use crossterm::style::{Attribute, Color, ContentStyle};

use crate::renderer::Frame;

pub fn style_with_attribute(style: ContentStyle, attr: Attribute) -> ContentStyle {
    ContentStyle {
        attributes: style.attributes | attr,
        ..style
    }
}

pub fn swap_fg_bg(style: ContentStyle) -> ContentStyle {
    ContentStyle {
        background_color: Some(style.foreground_color.unwrap_or(Color::White)),
        foreground_color: Some(style.background_color.unwrap_or(Color::Black)),
        ..style
    }
}

pub fn draw_box(frame: &mut Frame, pos: Dims, size: Dims, style: ContentStyle) {
    if size.0 < 2 || size.1 < 2 {
        return;
    }

    let end = pos + size - Dims::ONE;

    frame.put_char(pos, '┌', style);
    frame.put_char(Dims(end.0, pos.1), '┐', style);
    frame.put_char(Dims(pos.0, end.1), '└', style);
    frame.put_char(end, '┘', style);

    for x in pos.0 + 1..end.0 {
        frame.put_char(Dims(x, pos.1), '─', style);
        frame.put_char(Dims(x, end.1), '─', style);
    }
    for y in pos.1 + 1..end.1 {
        frame.put_char(Dims(pos.0, y), '│', style);
        frame.put_char(Dims(end.0, y), '│', style);
    }
}
