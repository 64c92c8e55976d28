//! Lane rendering shared by the running race and the summary screen.

use cmrace::{
    board::{Board, Tile},
    dims::Dims,
    solve::RunResult,
};
use crossterm::style::{Attribute, Color, ContentStyle};

use crate::{
    helpers::{format_elapsed, line_center},
    renderer::{drawable::Drawable, helpers::style, Frame},
};

use super::Lane;

/// Terminal columns per maze cell. Two columns roughly square the cells and
/// leave room for a two digit visit number.
pub const CELL_WIDTH: i32 = 2;

/// Columns between adjacent lanes.
pub const LANE_GAP: i32 = 3;

pub fn lane_width(board: &Board) -> i32 {
    board.size() * CELL_WIDTH
}

/// Left edges of `count` lanes of `board`, centered in a frame of `width`.
pub fn lane_origins(board: &Board, count: i32, width: i32) -> Vec<i32> {
    let total = lane_width(board) * count + LANE_GAP * (count - 1);
    let left = line_center(0, width, total);
    (0..count)
        .map(|i| left + i * (lane_width(board) + LANE_GAP))
        .collect()
}

fn wall_style() -> ContentStyle {
    style().f(Color::DarkGrey).build()
}

fn marker_style(color: Color) -> ContentStyle {
    style().f(color).a(Attribute::Bold).build()
}

fn visit_style() -> ContentStyle {
    style().f(Color::Grey).a(Attribute::Dim).build()
}

fn with_bg(base: ContentStyle, color: Color) -> ContentStyle {
    ContentStyle {
        background_color: Some(color),
        ..base
    }
}

fn cell_text(tile: Tile, visit: Option<usize>) -> String {
    match tile {
        Tile::Wall => "██".to_string(),
        Tile::Start => "e ".to_string(),
        Tile::Exit => "x ".to_string(),
        // Visit numbers wrap at two digits, they only exist to show order.
        Tile::Open => match visit {
            Some(n) => format!("{:02}", n % 100),
            None => "  ".to_string(),
        },
    }
}

/// Draws one lane with its title row. `origin` is the top-left of the title;
/// the board starts one row below it.
pub fn draw_lane(frame: &mut Frame, origin: Dims, board: &Board, lane: &Lane) {
    let title = match (&lane.result, lane.exhausted, &lane.solver) {
        (Some(result), _, _) => format!(
            "{} ({} in {})",
            lane.discipline,
            result.visited.len(),
            format_elapsed(result.elapsed),
        ),
        (None, true, _) => format!("{} (no way out)", lane.discipline),
        (None, false, Some(solver)) => {
            format!("{} ({})", lane.discipline, solver.visited_order().len())
        }
        (None, false, None) => format!("{} (waiting)", lane.discipline),
    };
    let title_x = line_center(origin.0, origin.0 + lane_width(board), title.len() as i32);
    title.draw(Dims(title_x, origin.1), frame, style().build());

    let top = origin + Dims(0, 1);
    let visits = lane.visit_numbers();
    let path = lane.current_path();
    let head = lane.head();

    for pos in Dims::iter_fill(Dims::ZERO, Dims(board.size(), board.size())) {
        let Some(tile) = board.get(pos) else { continue };
        let visit = visits.get(&pos).copied();

        let mut cell_style = match tile {
            Tile::Wall => wall_style(),
            Tile::Start => marker_style(Color::Green),
            Tile::Exit => marker_style(Color::Red),
            Tile::Open if visit.is_some() => visit_style(),
            Tile::Open => style().build(),
        };

        if head == Some(pos) {
            cell_style = with_bg(cell_style, Color::DarkYellow);
        } else if tile != Tile::Wall && path.contains(&pos) {
            cell_style = with_bg(cell_style, Color::DarkBlue);
        }

        let text = cell_text(tile, visit);
        text.draw(top + Dims(pos.0 * CELL_WIDTH, pos.1), frame, cell_style);
    }
}

/// Round summary pushed to stdout after the terminal is restored. Mirrors
/// what the screen showed: the ranking first, then each engine's full visit
/// sequence.
pub fn report(round: u32, ranked: &[RunResult]) -> String {
    let mut out = format!("=== round {round} ===\n");

    for (place, result) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} | time: {} | visited: {} | path: {}\n",
            place + 1,
            result.discipline,
            format_elapsed(result.elapsed),
            result.visited.len(),
            result.path.len(),
        ));
    }

    for result in ranked {
        out.push_str(&format!("{} visited:", result.discipline));
        for pos in &result.visited {
            out.push_str(&format!(" ({}, {})", pos.0, pos.1));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use cmrace::solve::Discipline;

    use super::*;

    #[test]
    fn origins_are_evenly_spaced_and_centered() {
        let board = Board::new_filled(5, Tile::Open);
        let origins = lane_origins(&board, 3, 60);

        assert_eq!(origins.len(), 3);
        assert_eq!(origins[1] - origins[0], lane_width(&board) + LANE_GAP);
        assert_eq!(origins[2] - origins[1], lane_width(&board) + LANE_GAP);
        // 3 * 10 + 2 * 3 = 36 columns, so 12 spare, 6 on the left.
        assert_eq!(origins[0], 12);
    }

    #[test]
    fn visit_numbers_wrap_at_two_digits() {
        assert_eq!(cell_text(Tile::Open, Some(7)), "07");
        assert_eq!(cell_text(Tile::Open, Some(42)), "42");
        assert_eq!(cell_text(Tile::Open, Some(103)), "03");
        assert_eq!(cell_text(Tile::Open, None), "  ");
    }

    #[test]
    fn report_lists_placements_in_order() {
        let ranked = vec![
            RunResult {
                discipline: Discipline::Bfs,
                path: vec![Dims(1, 1), Dims(2, 1)],
                visited: vec![Dims(1, 1), Dims(2, 1)],
                elapsed: Duration::from_millis(120),
            },
            RunResult {
                discipline: Discipline::Dfs,
                path: vec![Dims(1, 1), Dims(2, 1)],
                visited: vec![Dims(1, 1), Dims(1, 2), Dims(2, 1)],
                elapsed: Duration::from_millis(200),
            },
        ];

        let report = report(3, &ranked);
        assert!(report.starts_with("=== round 3 ===\n1. BFS | time: 0.12s"));
        assert!(report.contains("2. DFS | time: 0.20s | visited: 3 | path: 2"));
        assert!(report.contains("BFS visited: (1, 1) (2, 1)\n"));
    }
}
