//! End-of-round screen: the three finished lanes, the ranking and a restart
//! button.

use cmrace::{board::Board, dims::Dims, solve::RunResult};
use crossterm::event::{
    Event as TermEvent, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::{
    app::{ActivityHandler, AppData, Change, Event},
    helpers::{format_elapsed, line_center},
    renderer::{drawable::Drawable, helpers::style, Frame},
    ui::{Button, Rect},
};

use super::{draw, Lane};

const BUTTON_SIZE: Dims = Dims(11, 3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryChoice {
    Restart,
    Quit,
}

pub struct SummaryActivity {
    board: Board,
    lanes: Vec<Lane>,
    ranked: Vec<RunResult>,
    button: Button,
}

impl SummaryActivity {
    pub fn new(board: Board, lanes: Vec<Lane>, ranked: Vec<RunResult>) -> Self {
        let size: Dims = crate::renderer::helpers::term_size().into();

        Self {
            board,
            lanes,
            ranked,
            button: Self::place_button(size),
        }
    }

    fn place_button(screen: Dims) -> Button {
        let rect = Rect::sized(screen).centered_x(BUTTON_SIZE);
        Button::new("Restart", Dims(rect.start.0, screen.1 - BUTTON_SIZE.1 - 1), BUTTON_SIZE)
    }

    fn ranking_lines(&self) -> Vec<String> {
        self.ranked
            .iter()
            .enumerate()
            .map(|(place, result)| {
                format!(
                    "{}. {} | time: {} | visited: {} | path: {}",
                    place + 1,
                    result.discipline,
                    format_elapsed(result.elapsed),
                    result.visited.len(),
                    result.path.len(),
                )
            })
            .collect()
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Option<Change> {
        let pos = Dims(mouse.column as i32, mouse.row as i32);

        match mouse.kind {
            MouseEventKind::Moved => {
                self.button.set = self.button.detect_over(pos);
                None
            }
            MouseEventKind::Down(MouseButton::Left) if self.button.detect_over(pos) => {
                Some(Change::pop_with(SummaryChoice::Restart))
            }
            _ => None,
        }
    }
}

impl ActivityHandler for SummaryActivity {
    fn update(&mut self, events: Vec<Event>, _data: &mut AppData) -> Option<Change> {
        for event in events {
            match event {
                Event::Term(TermEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                    match key.code {
                        KeyCode::Char('r') | KeyCode::Enter => {
                            return Some(Change::pop_with(SummaryChoice::Restart));
                        }
                        KeyCode::Char('q') | KeyCode::Esc => {
                            return Some(Change::pop_with(SummaryChoice::Quit));
                        }
                        _ => {}
                    }
                }
                Event::Term(TermEvent::Mouse(mouse)) => {
                    if let Some(change) = self.on_mouse(mouse) {
                        return Some(change);
                    }
                }
                Event::Term(TermEvent::Resize(x, y)) => {
                    let set = self.button.set;
                    self.button = Self::place_button(Dims(x as i32, y as i32));
                    self.button.set = set;
                }
                _ => {}
            }
        }

        None
    }

    fn draw(&self, frame: &mut Frame) {
        let origins = draw::lane_origins(&self.board, self.lanes.len() as i32, frame.size().0);
        for (lane, x) in self.lanes.iter().zip(origins) {
            draw::draw_lane(frame, Dims(x, 1), &self.board, lane);
        }

        let base_y = 2 + self.board.size() + 1;
        for (i, line) in self.ranking_lines().iter().enumerate() {
            let x = line_center(0, frame.size().0, line.len() as i32);
            line.draw(Dims(x, base_y + i as i32), frame, style().build());
        }

        self.button.draw(frame);
    }
}
