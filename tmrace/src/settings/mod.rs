use std::{fs, path::PathBuf};

use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

use crate::constants::base_path;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Side of the square board, at least 3.
    #[serde(default)]
    pub maze_size: Option<i32>,
    /// Chance of an interior tile being a wall, `[0, 1)`.
    #[serde(default)]
    pub wall_chance: Option<f64>,
    /// Animation pace: how many positions each search expands per second.
    #[serde(default)]
    pub steps_per_second: Option<f64>,
    /// Where the generated maze is written out each round.
    #[serde(default)]
    pub maze_file: Option<PathBuf>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_maze_size(&self) -> i32 {
        self.maze_size.unwrap_or(15)
    }

    pub fn get_wall_chance(&self) -> f64 {
        self.wall_chance.unwrap_or(0.3)
    }

    pub fn get_steps_per_second(&self) -> f64 {
        self.steps_per_second.unwrap_or(15.0)
    }

    pub fn get_maze_file(&self) -> PathBuf {
        self.maze_file
            .clone()
            .unwrap_or_else(|| base_path().join("maze.txt"))
    }

    pub fn default_path() -> PathBuf {
        base_path().join("settings.ron")
    }

    pub fn load(path: PathBuf) -> Self {
        let default_settings_string = include_str!("./default_settings.ron");

        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        match fs::read_to_string(&path) {
            Ok(settings_string) => match options.from_str(&settings_string) {
                Ok(settings) => settings,
                Err(err) => {
                    panic!("Error reading settings file ({:?}), {}", path, err);
                }
            },
            Err(_) => {
                let _ = fs::create_dir_all(path.parent().expect("settings path has no parent"));
                let _ = fs::write(&path, default_settings_string);
                options.from_str(default_settings_string).unwrap()
            }
        }
    }

    pub fn reset_config(path: PathBuf) {
        let default_settings_string = include_str!("./default_settings.ron");
        let _ = fs::create_dir_all(path.parent().expect("settings path has no parent"));
        let _ = fs::write(&path, default_settings_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getters_fall_back_to_defaults() {
        let settings = Settings::new();
        assert_eq!(settings.get_maze_size(), 15);
        assert_eq!(settings.get_wall_chance(), 0.3);
        assert_eq!(settings.get_steps_per_second(), 15.0);
    }

    #[test]
    fn partial_files_keep_defaults_for_the_rest() {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        let settings: Settings = options.from_str("(maze_size: 21)").unwrap();
        assert_eq!(settings.get_maze_size(), 21);
        assert_eq!(settings.get_wall_chance(), 0.3);
    }

    #[test]
    fn shipped_default_file_parses() {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        let _: Settings = options
            .from_str(include_str!("./default_settings.ron"))
            .unwrap();
    }
}
