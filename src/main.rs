mod input;
mod sim_events;
mod ui;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{map_key, map_mouse, HostAction};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use sim_events::apply_sim_events;
use skyflap::audio::TerminalBell;
use skyflap::build_info;
use skyflap::core::assets::{AssetCatalog, LoadedAssets};
use skyflap::core::logging::{default_log_path, init_file_logging};
use skyflap::core::{GameError, PillarLayout};
use skyflap::{GameConfig, GameLoop, World};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use ui::flappy_scene::render_game;
use ui::{HudState, UiState};

const USAGE: &str = "\
Skyflap - Flappy Bird in the terminal

Usage: skyflap [options]

Options:
  --config PATH   Load settings from a JSON file
  --assets PATH   Merge an asset manifest over the built-in glyphs
  --seed N        Seed the pillar generator
  --single        Spawn lone bottom pillars instead of pairs
  --log PATH      Write the log here instead of the data directory
  --mute          Never ring the terminal bell
  -v, --version   Show version information
  -h, --help      Show this help message

Keys: Space/Up start and flap, Enter/R resume, Q/Esc quit.
Log filter: SKYFLAP_LOG (default info).";

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config: Option<PathBuf>,
    assets: Option<PathBuf>,
    seed: Option<u64>,
    single: bool,
    log: Option<PathBuf>,
    mute: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Play(CliArgs),
    Version,
    Help,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, GameError> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| GameError::Usage(format!("{} needs a value", flag)))
        };
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
            "--assets" => parsed.assets = Some(PathBuf::from(value("--assets")?)),
            "--log" => parsed.log = Some(PathBuf::from(value("--log")?)),
            "--seed" => {
                let raw = value("--seed")?;
                let seed = raw
                    .parse()
                    .map_err(|_| GameError::Usage(format!("invalid seed `{}`", raw)))?;
                parsed.seed = Some(seed);
            }
            "--single" => parsed.single = true,
            "--mute" => parsed.mute = true,
            other => return Err(GameError::Usage(format!("unknown option `{}`", other))),
        }
    }
    Ok(Command::Play(parsed))
}

/// Everything the main loop needs, built before the terminal is touched so
/// startup errors print normally.
struct Session {
    world: World,
    assets: LoadedAssets,
    rng: StdRng,
}

fn start_session(args: &CliArgs) -> Result<Session, GameError> {
    let log_path = args.log.clone().or_else(default_log_path);
    if let Some(path) = &log_path {
        if let Err(e) = init_file_logging(path) {
            eprintln!("skyflap: logging disabled ({}): {}", path.display(), e);
        }
    }
    info!("{}", build_info::version_line());

    let mut config = GameConfig::load(args.config.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.single {
        config.obstacles.layout = PillarLayout::Single;
    }

    let mut catalog = AssetCatalog::builtin();
    if let Some(path) = &args.assets {
        let merged = catalog.merge_manifest(path)?;
        info!("merged {} assets from {}", merged, path.display());
    }

    let mut world = World::new(config)?;
    let assets = world.load(&catalog)?;
    world.initialize();

    let rng = match world.config.seed {
        Some(seed) => {
            info!("seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    Ok(Session { world, assets, rng })
}

fn play(args: CliArgs) -> Result<(), GameError> {
    let session = start_session(&args)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_loop(&mut terminal, session, args.mute);

    // Restore the terminal even if the loop failed
    let _ = disable_raw_mode();
    let _ = terminal.backend_mut().execute(DisableMouseCapture);
    let _ = terminal.backend_mut().execute(LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: Session,
    mute: bool,
) -> Result<(), GameError> {
    let Session {
        mut world,
        assets,
        mut rng,
    } = session;
    let mut ui = UiState::default();
    let mut hud = HudState::default();
    let mut bell = TerminalBell::new(io::stdout(), mute);

    let frame_budget = Duration::from_millis(world.config.timing.step_ms);
    let started = Instant::now();
    let mut consumed_ms = 0u64;

    loop {
        terminal.draw(|frame| render_game(frame, &world, &assets, &mut ui, &hud))?;

        // Wait up to one frame for input, then take everything queued
        let mut timeout = frame_budget;
        while event::poll(timeout)? {
            timeout = Duration::ZERO;
            let action = match event::read()? {
                Event::Key(key) => map_key(key, world.phase()),
                Event::Mouse(mouse) => map_mouse(mouse, world.phase(), &mut ui),
                _ => HostAction::None,
            };
            match action {
                HostAction::Sim(input) => world.queue_input(input),
                HostAction::Quit => {
                    info!("quit (best score {})", world.run.best_score);
                    return Ok(());
                }
                HostAction::None => {}
            }
        }

        let elapsed_ms = started.elapsed().as_millis() as u64;
        let dt_ms = elapsed_ms - consumed_ms;
        consumed_ms = elapsed_ms;

        let events = world.tick(dt_ms, &mut rng);
        hud.decay(dt_ms);
        apply_sim_events(&mut hud, &events, &assets, &mut bell);
    }
}

fn main() {
    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("skyflap: {}", e);
            eprintln!("Run 'skyflap --help' for usage.");
            std::process::exit(2);
        }
    };

    match command {
        Command::Version => println!("{}", build_info::version_line()),
        Command::Help => println!("{}", USAGE),
        Command::Play(args) => {
            if let Err(e) = play(args) {
                warn!("exiting on error: {}", e);
                eprintln!("skyflap: {}", e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, GameError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_plays_with_defaults() {
        assert_eq!(parse(&[]).unwrap(), Command::Play(CliArgs::default()));
    }

    #[test]
    fn test_all_options() {
        let command = parse(&[
            "--config", "c.json", "--assets", "a.json", "--seed", "42", "--single", "--log",
            "x.log", "--mute",
        ])
        .unwrap();
        assert_eq!(
            command,
            Command::Play(CliArgs {
                config: Some(PathBuf::from("c.json")),
                assets: Some(PathBuf::from("a.json")),
                seed: Some(42),
                single: true,
                log: Some(PathBuf::from("x.log")),
                mute: true,
            })
        );
    }

    #[test]
    fn test_version_and_help_win() {
        assert_eq!(parse(&["--mute", "-v"]).unwrap(), Command::Version);
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_bad_usage() {
        assert!(matches!(parse(&["--seed"]), Err(GameError::Usage(_))));
        assert!(matches!(parse(&["--seed", "abc"]), Err(GameError::Usage(_))));
        assert!(matches!(parse(&["update"]), Err(GameError::Usage(_))));
    }
}
