// main.rs - eframe host for the toroidal Game of Life

use eframe::egui;
use egui::Color32;
use life_grid::{Grid, GridError};
use log::debug;
use std::time::{Duration, Instant};

mod patterns;
mod ui;

/// Grid size used when no dimensions are given on the command line.
const DEFAULT_SIZE: u32 = 31;
/// On-screen size of one cell.
const PIXEL_SIZE: f32 = 16.0;
/// Age at which a live cell reaches its final color.
const MAX_AGE: u32 = 6;
/// A randomize event flips a cell when a fresh uniform draw exceeds this,
/// which lands the grid at roughly 25% density.
const RANDOM_THRESHOLD: f64 = 0.75;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let app = match parse_dimensions(&args).and_then(|(width, height)| {
        LifeApp::new(width, height).map_err(|e| e.to_string())
    }) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let window_width = (app.grid.width() as f32 * PIXEL_SIZE + 20.0).max(640.0);
    let window_height = app.grid.height() as f32 * PIXEL_SIZE + 240.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_width, window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
}

/// No arguments: default square grid. One: square grid of that size.
/// Two: width and height.
fn parse_dimensions(args: &[String]) -> Result<(u32, u32), String> {
    match args {
        [] => Ok((DEFAULT_SIZE, DEFAULT_SIZE)),
        [size] => {
            let size = parse_dimension(size)?;
            Ok((size, size))
        }
        [width, height] => Ok((parse_dimension(width)?, parse_dimension(height)?)),
        _ => Err(String::from("usage: life_app [SIZE | WIDTH HEIGHT]")),
    }
}

fn parse_dimension(arg: &str) -> Result<u32, String> {
    arg.parse()
        .map_err(|_| format!("invalid grid dimension {arg:?}"))
}

pub struct LifeApp {
    pub grid: Grid,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u32,
    pub live_color: Color32,
    pub young_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub show_help: bool,
}

impl LifeApp {
    fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let mut grid = Grid::new(width, height)?;
        // classic startup seed: a glider near the center
        patterns::apply_pattern(&mut grid, &patterns::PATTERNS[0]);
        Ok(Self {
            grid,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            generation: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            young_color: Color32::from_rgb(230, 255, 230),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            show_help: true,
        })
    }

    pub fn update_generation(&mut self) {
        self.grid.step();
        self.generation += 1;
    }

    pub fn clear_grid(&mut self) {
        debug!("clearing the grid");
        self.grid.clear();
        self.generation = 0;
    }

    pub fn randomize_grid(&mut self) {
        debug!("adding random cells");
        self.grid.randomize(RANDOM_THRESHOLD, &mut rand::thread_rng());
        self.generation = 0;
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            debug!("applying pattern {}", pattern.name);
            patterns::apply_pattern(&mut self.grid, pattern);
            self.generation = 0;
        }
    }

    pub fn toggle_cell(&mut self, row: i64, col: i64) {
        debug!("toggled ({row},{col})");
        self.grid.toggle(row, col);
    }

    /// Blend from the young color toward the mature live color as the cell
    /// ages; the age only saturates here, the grid keeps counting past it.
    pub fn cell_color(&self, age: u32) -> Color32 {
        if age == 0 {
            return self.dead_color;
        }
        let t = (age.min(MAX_AGE) - 1) as f32 / (MAX_AGE - 1) as f32;
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color32::from_rgb(
            lerp(self.young_color.r(), self.live_color.r()),
            lerp(self.young_color.g(), self.live_color.g()),
            lerp(self.young_color.b(), self.live_color.b()),
        )
    }
}
