#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use color_eyre::eyre::Result;
use log::{info, LevelFilter};

use classic::draw::{Frontend, PistonFrontend};
use config::{Args, FrontendKind, Settings};

mod classic;
mod config;
mod text;

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = Settings::try_from(Args::parse())?;
    info!(
        "Starting {}x{} window, {} px cells, {} ms per tick",
        settings.width, settings.height, settings.unit_size, settings.delay.as_millis()
    );

    match settings.frontend {
        FrontendKind::Piston => start_classic(PistonFrontend::new(&settings)?, &settings),
        FrontendKind::Sdl2 => start_sdl2(&settings)?,
    }

    Ok(())
}

fn start_classic<F: Frontend>(mut frontend: F, settings: &Settings) {
    classic::draw::window_loop(&mut frontend, settings);
}

#[cfg(feature = "sdl2-frontend")]
fn start_sdl2(settings: &Settings) -> Result<()> {
    start_classic(classic::draw::Sdl2Frontend::new(settings)?, settings);
    Ok(())
}

#[cfg(not(feature = "sdl2-frontend"))]
fn start_sdl2(_settings: &Settings) -> Result<()> {
    color_eyre::eyre::bail!("this build has no SDL2 support, rebuild with --features sdl2-frontend")
}
