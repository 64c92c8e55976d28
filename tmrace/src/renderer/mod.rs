pub mod drawable;
pub mod helpers;

use std::{
    io::{self, stdout, Write},
    ops::{Index, IndexMut},
    panic, thread,
};

use cmrace::dims::Dims;
use crossterm::{
    event::Event, execute, style::ContentStyle, terminal, QueueableCommand, SynchronizedUpdate,
};
use unicode_width::UnicodeWidthChar;

use self::helpers::term_size;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub character: char,
    /// Terminal columns this cell occupies; 0 marks the shadow of a
    /// double-width character and is skipped when flushing.
    pub width: u8,
    pub style: ContentStyle,
}

impl Cell {
    pub fn styled(character: char, style: ContentStyle) -> Self {
        Cell {
            character,
            width: character.width().unwrap_or(1) as u8,
            style,
        }
    }

    pub fn empty() -> Self {
        Cell {
            character: ' ',
            width: 1,
            style: ContentStyle::default(),
        }
    }
}

/// One screenful of cells, drawn into before being flushed to the terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    size: Dims,
    cells: Vec<Cell>,
}

impl Frame {
    fn new(size: Dims) -> Self {
        let size = Dims(size.0.max(1), size.1.max(1));
        Frame {
            size,
            cells: vec![Cell::empty(); (size.0 * size.1) as usize],
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::empty());
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        pos.all_non_negative() && pos.0 < self.size.0 && pos.1 < self.size.1
    }

    /// Writes one character, returns the columns advanced. Out-of-frame
    /// writes are clipped, not errors, so drawing code does not need to care
    /// about small terminals.
    pub fn put_char(&mut self, pos: Dims, character: char, style: ContentStyle) -> i32 {
        let width = character.width().unwrap_or(1) as i32;
        if !self.is_in_bounds(pos) {
            return width;
        }

        self[pos] = Cell::styled(character, style);
        if width == 2 && self.is_in_bounds(pos + Dims(1, 0)) {
            self[pos + Dims(1, 0)] = Cell {
                character: ' ',
                width: 0,
                style,
            };
        }

        width
    }

    pub fn fill_rect(&mut self, pos: Dims, size: Dims, cell: Cell) {
        for y in pos.1..pos.1 + size.1 {
            for x in pos.0..pos.0 + size.0 {
                if self.is_in_bounds(Dims(x, y)) {
                    self[Dims(x, y)] = cell;
                }
            }
        }
    }

    fn row(&self, y: i32) -> &[Cell] {
        let from = (y * self.size.0) as usize;
        &self.cells[from..from + self.size.0 as usize]
    }

    fn index_of(&self, pos: Dims) -> usize {
        (pos.1 * self.size.0 + pos.0) as usize
    }
}

impl Index<Dims> for Frame {
    type Output = Cell;

    fn index(&self, pos: Dims) -> &Cell {
        &self.cells[self.index_of(pos)]
    }
}

impl IndexMut<Dims> for Frame {
    fn index_mut(&mut self, pos: Dims) -> &mut Cell {
        let index = self.index_of(pos);
        &mut self.cells[index]
    }
}

/// Double-buffered terminal renderer. Only rows that changed since the last
/// flush are rewritten.
pub struct Renderer {
    size: Dims,
    shown: Frame,
    hidden: Frame,
    full_redraw: bool,
}

impl Renderer {
    pub fn new() -> io::Result<Self> {
        let size: Dims = term_size().into();

        let mut ren = Renderer {
            size,
            shown: Frame::new(size),
            hidden: Frame::new(size),
            full_redraw: true,
        };

        ren.turn_on()?;

        Ok(ren)
    }

    fn turn_on(&mut self) -> io::Result<()> {
        self.register_panic_hook();

        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            stdout(),
            crossterm::cursor::Hide,
            crossterm::terminal::EnterAlternateScreen,
            crossterm::event::EnableMouseCapture,
        )?;

        Ok(())
    }

    fn turn_off(&mut self) -> io::Result<()> {
        self.unregister_panic_hook();

        crossterm::execute!(
            stdout(),
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture,
        )?;
        crossterm::terminal::disable_raw_mode()?;

        Ok(())
    }

    fn register_panic_hook(&self) {
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let mut stdout = stdout();

            let _ = execute!(
                stdout,
                crossterm::terminal::LeaveAlternateScreen,
                crossterm::cursor::Show,
                crossterm::event::DisableMouseCapture,
            );
            let _ = crossterm::terminal::disable_raw_mode();

            prev(info)
        }));
    }

    fn unregister_panic_hook(&self) {
        if !thread::panicking() {
            let _ = panic::take_hook();
        }
    }

    fn on_resize(&mut self, size: Dims) {
        self.size = size;
        self.shown = Frame::new(size);
        self.hidden = Frame::new(size);
        self.full_redraw = true;
    }

    pub fn on_event(&mut self, event: &Event) {
        if let Event::Resize(x, y) = event {
            self.on_resize((*x, *y).into());
        }
    }

    pub fn frame(&mut self) -> &mut Frame {
        &mut self.hidden
    }

    pub fn frame_size(&self) -> Dims {
        self.size
    }

    pub fn show(&mut self) -> io::Result<()> {
        let mut tty = stdout();

        tty.sync_update(|tty| {
            use crossterm::style;

            let mut current = ContentStyle::default();
            tty.queue(style::ResetColor)?;

            for y in 0..self.size.1 {
                if self.hidden.row(y) == self.shown.row(y) && !self.full_redraw {
                    continue;
                }

                tty.queue(crossterm::cursor::MoveTo(0, y as u16))?;

                for x in 0..self.size.0 {
                    let cell = self.hidden[Dims(x, y)];
                    if cell.width == 0 {
                        continue;
                    }

                    if current != cell.style {
                        if current.attributes != cell.style.attributes {
                            tty.queue(style::SetAttribute(style::Attribute::Reset))?;
                            tty.queue(style::SetAttributes(cell.style.attributes))?;
                            tty.queue(style::SetForegroundColor(
                                cell.style.foreground_color.unwrap_or(style::Color::Reset),
                            ))?;
                            tty.queue(style::SetBackgroundColor(
                                cell.style.background_color.unwrap_or(style::Color::Reset),
                            ))?;
                        } else {
                            if current.foreground_color != cell.style.foreground_color {
                                tty.queue(style::SetForegroundColor(
                                    cell.style.foreground_color.unwrap_or(style::Color::Reset),
                                ))?;
                            }
                            if current.background_color != cell.style.background_color {
                                tty.queue(style::SetBackgroundColor(
                                    cell.style.background_color.unwrap_or(style::Color::Reset),
                                ))?;
                            }
                        }
                        current = cell.style;
                    }

                    tty.queue(style::Print(cell.character))?;
                }
            }

            tty.flush()?;
            self.full_redraw = false;

            io::Result::Ok(())
        })??;

        std::mem::swap(&mut self.shown, &mut self.hidden);
        self.hidden.clear();

        Ok(())
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        let _ = self.turn_off();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    fn style_fg(color: Color) -> ContentStyle {
        ContentStyle {
            foreground_color: Some(color),
            ..Default::default()
        }
    }

    #[test]
    fn put_char_clips_out_of_bounds() {
        let mut frame = Frame::new(Dims(4, 2));
        assert_eq!(frame.put_char(Dims(10, 10), 'a', ContentStyle::default()), 1);
        assert_eq!(frame, Frame::new(Dims(4, 2)));
    }

    #[test]
    fn wide_chars_leave_a_shadow_cell() {
        let mut frame = Frame::new(Dims(4, 1));
        let advanced = frame.put_char(Dims(0, 0), '█', ContentStyle::default());
        assert_eq!(advanced, 1);

        let advanced = frame.put_char(Dims(1, 0), '世', style_fg(Color::Red));
        assert_eq!(advanced, 2);
        assert_eq!(frame[Dims(2, 0)].width, 0);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut frame = Frame::new(Dims(3, 3));
        frame.fill_rect(Dims(2, 2), Dims(5, 5), Cell::styled('#', ContentStyle::default()));
        assert_eq!(frame[Dims(2, 2)].character, '#');
        assert_eq!(frame[Dims(1, 1)].character, ' ');
    }
}
