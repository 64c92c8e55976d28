//! The race itself: one maze, three engines exploring it one after another,
//! animated at a fixed pace.

pub mod draw;
pub mod summary;

use std::{
    collections::HashMap,
    fs,
    mem,
    path::PathBuf,
    time::{Duration, Instant},
};

use cmrace::{
    board::Board,
    dims::Dims,
    generate::{generate, seeded_rng, Random},
    rank::rank,
    solve::{Discipline, RunResult, Solver, Step},
};
use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    app::{Activity, ActivityHandler, AppData, AppError, Change, Event},
    helpers::line_center,
    renderer::{drawable::Drawable, helpers::style, Frame},
    settings::Settings,
};

use self::summary::{SummaryActivity, SummaryChoice};

/// Ceiling on catch-up steps per tick, so a stall does not turn into a
/// visually instant flood of visits.
const MAX_STEPS_PER_TICK: u32 = 256;

#[derive(Debug, Clone)]
pub struct RaceConfig {
    pub maze_size: i32,
    pub wall_chance: f64,
    pub steps_per_second: f64,
    pub maze_file: PathBuf,
    pub seed: Option<u64>,
}

impl RaceConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            maze_size: settings.get_maze_size(),
            wall_chance: settings.get_wall_chance(),
            steps_per_second: settings.get_steps_per_second(),
            maze_file: settings.get_maze_file(),
            seed: None,
        }
    }

    fn step_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.steps_per_second.max(0.001))
    }
}

/// One engine's progress through the shared maze.
pub struct Lane {
    pub discipline: Discipline,
    /// Built when the lane's turn starts, so elapsed time never includes
    /// waiting for the lanes before it.
    pub solver: Option<Solver>,
    pub result: Option<RunResult>,
    pub exhausted: bool,
}

impl Lane {
    fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            solver: None,
            result: None,
            exhausted: false,
        }
    }

    fn is_done(&self) -> bool {
        self.result.is_some() || self.exhausted
    }

    /// Visit number per position, 1-based in visit order.
    pub fn visit_numbers(&self) -> HashMap<Dims, usize> {
        self.visited()
            .iter()
            .enumerate()
            .map(|(i, &pos)| (pos, i + 1))
            .collect()
    }

    pub fn visited(&self) -> &[Dims] {
        match (&self.result, &self.solver) {
            (Some(result), _) => &result.visited,
            (None, Some(solver)) => solver.visited_order(),
            (None, None) => &[],
        }
    }

    pub fn current_path(&self) -> &[Dims] {
        match (&self.result, &self.solver) {
            (Some(result), _) => &result.path,
            (None, Some(solver)) => solver.current_path(),
            (None, None) => &[],
        }
    }

    pub fn head(&self) -> Option<Dims> {
        if self.is_done() {
            return None;
        }
        self.solver.as_ref().and_then(|solver| solver.head())
    }
}

pub struct RaceActivity {
    config: RaceConfig,
    rng: Random,
    board: Board,
    lanes: Vec<Lane>,
    /// Index of the lane currently exploring; lanes run one after another.
    active: usize,
    last_step: Instant,
    round: u32,
}

impl RaceActivity {
    pub fn new(config: RaceConfig) -> Result<Self, AppError> {
        let mut rng = seeded_rng(config.seed);
        let board = new_round_board(&config, &mut rng)?;

        Ok(Self {
            config,
            rng,
            board,
            lanes: Discipline::ALL.into_iter().map(Lane::new).collect(),
            active: 0,
            last_step: Instant::now(),
            round: 1,
        })
    }

    fn start_round(&mut self) -> Result<(), AppError> {
        self.board = new_round_board(&self.config, &mut self.rng)?;
        self.lanes = Discipline::ALL.into_iter().map(Lane::new).collect();
        self.active = 0;
        self.last_step = Instant::now();
        self.round += 1;
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.active >= self.lanes.len()
    }

    /// Expands one position in the active lane, advancing to the next lane
    /// when it finishes.
    fn step_once(&mut self) -> Result<(), AppError> {
        let Some(lane) = self.lanes.get_mut(self.active) else {
            return Ok(());
        };

        if lane.solver.is_none() {
            lane.solver = Some(Solver::new(self.board.clone(), lane.discipline)?);
        }
        let Some(solver) = lane.solver.as_mut() else {
            return Ok(());
        };

        match solver.step() {
            Step::Visited(_) => {}
            Step::Found(result) => {
                lane.result = Some(result);
                self.active += 1;
            }
            Step::Exhausted => {
                lane.exhausted = true;
                self.active += 1;
            }
        }

        Ok(())
    }

    fn advance(&mut self) -> Result<(), AppError> {
        let interval = self.config.step_interval();
        let mut steps = 0;

        while !self.is_finished()
            && self.last_step.elapsed() >= interval
            && steps < MAX_STEPS_PER_TICK
        {
            self.last_step += interval;
            steps += 1;
            self.step_once()?;
        }

        // Hitting the cap means we fell far behind; drop the backlog instead
        // of flooding the next ticks too.
        if steps == MAX_STEPS_PER_TICK {
            self.last_step = Instant::now();
        }

        Ok(())
    }

    /// Called once every lane has finished. Either pushes the summary or, when
    /// some engine could not reach the exit, starts over with a fresh maze.
    fn finish_round(&mut self, data: &mut AppData) -> Result<Option<Change>, AppError> {
        if self.lanes.iter().any(|lane| lane.exhausted) {
            log::warn!("exit unreachable in round {}, regenerating", self.round);
            self.start_round()?;
            return Ok(None);
        }

        let ranked = rank(
            self.lanes
                .iter()
                .filter_map(|lane| lane.result.clone())
                .collect(),
        );

        data.reports.push(draw::report(self.round, &ranked));

        let summary = SummaryActivity::new(self.board.clone(), mem::take(&mut self.lanes), ranked);
        Ok(Some(Change::push(Activity::new_boxed("summary", summary))))
    }

    fn on_key(&mut self, key: KeyEvent) -> Option<Result<Option<Change>, AppError>> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Ok(Some(Change::pop()))),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Ok(Some(Change::pop())))
            }
            KeyCode::Char('r') => Some(self.start_round().map(|_| None)),
            _ => None,
        }
    }

    fn update_inner(
        &mut self,
        events: Vec<Event>,
        data: &mut AppData,
    ) -> Result<Option<Change>, AppError> {
        for event in events {
            match event {
                Event::Term(TermEvent::Key(key)) => {
                    if let Some(outcome) = self.on_key(key) {
                        return outcome;
                    }
                }
                Event::Term(_) => {}
                Event::ActiveAfterPop(res) => {
                    let restart = res
                        .and_then(|res| res.downcast::<SummaryChoice>().ok())
                        .is_some_and(|choice| *choice == SummaryChoice::Restart);

                    if restart {
                        self.start_round()?;
                    } else {
                        return Ok(Some(Change::pop()));
                    }
                }
            }
        }

        self.advance()?;

        if self.is_finished() {
            return self.finish_round(data);
        }

        Ok(None)
    }
}

impl ActivityHandler for RaceActivity {
    fn update(&mut self, events: Vec<Event>, data: &mut AppData) -> Option<Change> {
        match self.update_inner(events, data) {
            Ok(change) => change,
            Err(err) => {
                log::error!("race failed: {err}");
                Some(Change::pop())
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let header = format!("round {}", self.round);
        let header_x = line_center(0, frame.size().0, header.len() as i32);
        header.draw(Dims(header_x, 0), frame, style().build());

        let origins = draw::lane_origins(&self.board, self.lanes.len() as i32, frame.size().0);
        for (lane, x) in self.lanes.iter().zip(origins) {
            draw::draw_lane(frame, Dims(x, 2), &self.board, lane);
        }

        let legend = "q quit | r new maze";
        let legend_x = line_center(0, frame.size().0, legend.len() as i32);
        legend.draw(Dims(legend_x, frame.size().1 - 1), frame, style().build());
    }
}

/// Generates a maze, writes it to the configured file and reads it back, so
/// every round exercises the same on-disk format a hand-made maze would use.
fn new_round_board(config: &RaceConfig, rng: &mut Random) -> Result<Board, AppError> {
    let board = generate(config.maze_size, config.wall_chance, rng)?;

    if let Some(parent) = config.maze_file.parent() {
        fs::create_dir_all(parent)?;
    }
    board.save(&config.maze_file)?;

    Ok(Board::load(&config.maze_file)?)
}
