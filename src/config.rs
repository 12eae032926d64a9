use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{ensure, Report, Result};

pub const W_WIDTH: u32 = 600;
pub const W_HEIGHT: u32 = 600;
/// Side of one grid cell in pixels
pub const UNIT_SIZE: u32 = 25;
pub const DELAY_MS: u64 = 75;
pub const INITIAL_LEN: usize = 6;
/// Largest board, in cells, a round may be played on
pub const MAX_GAME_UNITS: u64 = 1 << 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FrontendKind {
    #[default]
    Piston,
    Sdl2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub unit_size: u32,
    /// Time between two game ticks
    pub delay: Duration,
    pub initial_len: usize,
    /// Fixed seed for food placement. Random when `None`.
    pub seed: Option<u64>,
    pub frontend: FrontendKind,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            width: W_WIDTH,
            height: W_HEIGHT,
            unit_size: UNIT_SIZE,
            delay: Duration::from_millis(DELAY_MS),
            initial_len: INITIAL_LEN,
            seed: None,
            frontend: FrontendKind::default(),
        }
    }
}

impl Settings {
    /// Grid columns
    pub fn cols(&self) -> i32 {
        (self.width / self.unit_size) as i32
    }

    /// Grid rows
    pub fn rows(&self) -> i32 {
        (self.height / self.unit_size) as i32
    }

    /// Number of cells on the board, which bounds the snake length.
    pub fn game_units(&self) -> usize {
        self.game_units_u64() as usize
    }

    fn game_units_u64(&self) -> u64 {
        (self.width as u64 / self.unit_size as u64) * (self.height as u64 / self.unit_size as u64)
    }

    pub fn validate(self) -> Result<Self> {
        ensure!(self.unit_size != 0, "unit size must be positive");
        ensure!(self.width != 0 && self.height != 0, "window size must be positive");
        ensure!(
            self.width % self.unit_size == 0 && self.height % self.unit_size == 0,
            "window size {}x{} is not a multiple of the unit size {}",
            self.width, self.height, self.unit_size
        );
        ensure!(
            self.game_units_u64() <= MAX_GAME_UNITS,
            "board of {}x{} cells is larger than {} cells",
            self.width / self.unit_size, self.height / self.unit_size, MAX_GAME_UNITS
        );
        ensure!(!self.delay.is_zero(), "tick delay must be positive");
        ensure!(
            self.initial_len >= 1 && self.initial_len <= self.game_units(),
            "initial length {} must be between 1 and {}",
            self.initial_len, self.game_units()
        );
        Ok(self)
    }
}

#[derive(Parser, Debug)]
#[command(name = "classic-snake", about = "Classic grid snake in a window")]
pub struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = W_WIDTH)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = W_HEIGHT)]
    pub height: u32,

    /// Size of one grid cell in pixels
    #[arg(long, default_value_t = UNIT_SIZE)]
    pub unit_size: u32,

    /// Milliseconds between game ticks
    #[arg(long, default_value_t = DELAY_MS)]
    pub delay_ms: u64,

    /// Snake length at the start of each round
    #[arg(long, default_value_t = INITIAL_LEN)]
    pub initial_len: usize,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Windowing backend
    #[arg(long, value_enum, default_value_t = FrontendKind::Piston)]
    pub frontend: FrontendKind,
}

impl TryFrom<Args> for Settings {
    type Error = Report;

    fn try_from(args: Args) -> Result<Self> {
        Settings {
            width: args.width,
            height: args.height,
            unit_size: args.unit_size,
            delay: Duration::from_millis(args.delay_ms),
            initial_len: args.initial_len,
            seed: args.seed,
            frontend: args.frontend,
        }
        .validate()
    }
}
