use std::path::PathBuf;

use clap::Parser;

use tmrace::{
    app::{Activity, App, AppError},
    logging,
    race::{RaceActivity, RaceConfig},
    settings::Settings,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Side of the square maze, at least 3
    #[arg(short, long)]
    size: Option<i32>,

    /// Chance of an interior tile being a wall, 0.0 inclusive to 1.0 exclusive
    #[arg(short, long)]
    wall_chance: Option<f64>,

    /// How many positions each engine expands per second
    #[arg(short, long)]
    fps: Option<f64>,

    /// Seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Where the generated maze is written each round
    #[arg(long)]
    maze_file: Option<PathBuf>,

    /// Overwrite the settings file with the defaults and exit
    #[arg(long)]
    reset_config: bool,

    /// Print the settings file path and exit
    #[arg(long)]
    show_config_path: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.show_config_path {
        println!("{}", Settings::default_path().display());
        return Ok(());
    }

    if args.reset_config {
        Settings::reset_config(Settings::default_path());
        return Ok(());
    }

    better_panic::install();
    logging::init();

    let settings = Settings::load(Settings::default_path());

    let mut config = RaceConfig::from_settings(&settings);
    if let Some(size) = args.size {
        config.maze_size = size;
    }
    if let Some(wall_chance) = args.wall_chance {
        config.wall_chance = wall_chance;
    }
    if let Some(fps) = args.fps {
        config.steps_per_second = fps;
    }
    if let Some(maze_file) = args.maze_file {
        config.maze_file = maze_file;
    }
    config.seed = args.seed;

    let race = RaceActivity::new(config)?;
    let mut app = App::new(Activity::new_boxed("race", race), settings)?;
    app.run()?;

    // The renderer is dropped here, restoring the terminal, so the summaries
    // land on a normal screen.
    for report in app.into_reports() {
        println!("{report}");
    }

    Ok(())
}
