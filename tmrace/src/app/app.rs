use std::{io, time::Duration};

use cmrace::{
    board::{ser::ParseBoardError, LocateError},
    dims::Dims,
    generate::GenerateError,
};
use crossterm::event::read;
use thiserror::Error;

use crate::{
    logging,
    renderer::{drawable::Drawable, Renderer},
    settings::Settings,
};

use super::{
    activity::{Activities, Activity, Change},
    event::Event,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("could not generate a maze: {0}")]
    Generate(#[from] GenerateError),
    #[error("could not read the maze back: {0}")]
    Parse(#[from] ParseBoardError),
    #[error("invalid maze: {0}")]
    Locate(#[from] LocateError),
}

/// State shared by every activity on the stack.
pub struct AppData {
    pub settings: Settings,
    /// Round summaries, printed to stdout once the terminal is restored.
    pub reports: Vec<String>,
}

pub struct App {
    renderer: Renderer,
    activities: Activities,
    data: AppData,
}

impl App {
    pub fn new(base_activity: Activity, settings: Settings) -> Result<Self, AppError> {
        let renderer = Renderer::new()?;
        let activities = Activities::new(base_activity);

        Ok(Self {
            renderer,
            activities,
            data: AppData {
                settings,
                reports: Vec::new(),
            },
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        'mainloop: loop {
            let mut events = vec![];

            // Block briefly for the first event, then drain whatever else
            // arrived so one frame handles the whole burst.
            let mut delay = 45;
            while let Ok(true) = crossterm::event::poll(Duration::from_millis(delay)) {
                let event = read()?;
                self.renderer.on_event(&event);
                events.push(Event::Term(event));

                delay = 1;
            }

            while let Some(change) = match self.activities.active_mut() {
                Some(active) => active,
                None => break 'mainloop,
            }
            .update(events.drain(..).collect(), &mut self.data)
            {
                match change {
                    Change::Push(activity) => self.activities.push(activity),
                    Change::Pop { res } => {
                        self.activities.pop();
                        events.push(Event::ActiveAfterPop(res));
                    }
                }
            }

            let Some(active) = self.activities.active() else {
                break 'mainloop;
            };

            let frame = self.renderer.frame();
            active.draw(frame);
            logging::get_logger().draw(Dims(0, 0), frame, Default::default());

            self.renderer.show()?;
        }

        Ok(())
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    /// Consumes the app, dropping the renderer (and with it raw mode) so the
    /// reports can be printed to a usable terminal.
    pub fn into_reports(self) -> Vec<String> {
        self.data.reports
    }
}
