use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser;
use glow::HasContext;
use jinxgl_core::{
    Config,
    timing::{FpsCounter, FrameClock},
};
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
};

use crate::{abs::App, other::KeyboardState, samples::SampleKind};

mod abs;
mod logger;
mod other;
mod samples;

/// Builds a [`abs::ShaderProgram`] from `<resource_dir>/<name>/vert.glsl` and `frag.glsl`.
#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr, $config:expr) => {
        $crate::abs::ShaderProgram::from_files(
            $gl,
            &$config.resource_path(concat!(stringify!($name), "/vert.glsl")),
            &$config.resource_path(concat!(stringify!($name), "/frag.glsl")),
        )
    };
}

#[derive(Parser, Debug)]
#[command(name = "jinxgl", version, about = "Small OpenGL samples")]
struct Cli {
    /// Sample to run.
    #[arg(value_enum, default_value_t = SampleKind::Cube)]
    sample: SampleKind,

    /// Configuration file. Defaults to the per-user config.json if it exists.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long)]
    fullscreen: bool,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Directory holding shaders and textures.
    #[arg(long, value_name = "DIR")]
    resources: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Overrides configuration values given on the command line.
    fn apply(&self, config: &mut Config) {
        if self.fullscreen {
            config.window.fullscreen = true;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if let Some(resources) = &self.resources {
            config.resource_dir = resources.clone();
        }
    }

    fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

fn set_viewport(gl: &glow::Context, width: u32, height: u32) {
    unsafe {
        gl.viewport(0, 0, width as i32, height as i32);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config_path = Config::locate(cli.config.as_deref());
    let mut config =
        Config::load_or_default(config_path.as_deref()).map_err(anyhow::Error::msg)?;
    cli.apply(&mut config);
    config.validate().map_err(anyhow::Error::msg)?;

    logger::init(cli.log_level(), config.log_file.as_deref()).map_err(anyhow::Error::msg)?;
    match &config_path {
        Some(path) => log::info!("Loaded config from {}", path.display()),
        None => log::info!("No config file found, using defaults"),
    }

    let mut app = App::new(&config.window)
        .map_err(anyhow::Error::msg)
        .context("Could not create the window")?;
    app.log_gl_params();

    let mut sample = cli
        .sample
        .build(&app.gl, &config)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Could not load the {:?} sample", cli.sample))?;

    let (width, height) = app.drawable_size();
    set_viewport(&app.gl, width, height);
    sample.resize(width, height);

    let mut keyboard = KeyboardState::default();
    let mut clock = FrameClock::new();
    let mut fps = FpsCounter::new();
    let start = Instant::now();

    'running: loop {
        let now = start.elapsed().as_secs_f64();
        let delta_time = clock.tick(now) as f32;

        keyboard.begin_frame();
        for event in app.event_pump.poll_iter() {
            keyboard.handle_event(&event);
            match event {
                Event::Quit { .. } => break 'running,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (width, height) = app.window.drawable_size();
                    log::debug!("Drawable resized to {width}x{height}");
                    set_viewport(&app.gl, width, height);
                    sample.resize(width, height);
                }
                _ => sample.handle_event(&event),
            }
        }

        if keyboard.pressed.contains(&Keycode::Escape) {
            break 'running;
        }

        let ctx = other::UpdateContext::new(&keyboard, delta_time, now as f32);
        sample.update(&ctx);
        sample.render();
        app.window.gl_swap_window();

        if let Some(rate) = fps.frame(delta_time) {
            let title = format!("{} @ fps: {rate:.2}", config.window.title);
            if let Err(e) = app.window.set_title(&title) {
                log::warn!("Could not set window title: {e}");
            }
        }
    }

    log::info!("Exiting after {:.1}s", start.elapsed().as_secs_f32());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_the_cube() {
        let cli = Cli::try_parse_from(["jinxgl"]).unwrap();
        assert_eq!(cli.sample, SampleKind::Cube);
        assert_eq!(cli.log_level(), log::LevelFilter::Info);

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "jinxgl",
            "triangle",
            "--width",
            "800",
            "--height",
            "600",
            "--resources",
            "assets",
            "--fullscreen",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.sample, SampleKind::Triangle);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert!(config.window.fullscreen);
        assert_eq!(config.resource_dir, PathBuf::from("assets"));
    }

    #[test]
    fn rejects_unknown_samples() {
        assert!(Cli::try_parse_from(["jinxgl", "teapot"]).is_err());
        assert!(Cli::try_parse_from(["jinxgl", "orbit"]).is_ok());
    }
}
