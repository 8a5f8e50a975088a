#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::fs;
use std::io::{Write, stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use serde::Deserialize;
use tracing::{info, warn};

use torus_life::{Board, BoardConfig, Pattern, StabilityEvent};

const SETTINGS_FILE: &str = "SettingsBoard.json";
const SNAPSHOT_FILE: &str = "StateB.txt";
const QUICK_SLOTS: [&str; 3] = ["State1.txt", "State2.txt", "State3.txt"];
const FRAME_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Settings {
    width: u32,
    height: u32,
    cell_size: u32,
    live_density: f64,
}

struct MainArgs {
    settings_path: String,
    seed: Option<u64>,
}

fn parse_args() -> MainArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut settings_path = SETTINGS_FILE.to_string();
    let mut seed = None;
    let next_arg = |i: usize, flag: &str| -> &str {
        args.get(i)
            .map(String::as_str)
            .unwrap_or_else(|| panic!("{flag} requires a value"))
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--settings" => {
                i += 1;
                settings_path = next_arg(i, "--settings").to_string();
            }
            "--seed" => {
                i += 1;
                seed = Some(
                    next_arg(i, "--seed")
                        .parse()
                        .expect("--seed requires an unsigned integer"),
                );
            }
            other => panic!(
                "unknown argument: {other}\nusage: torus-life [--settings PATH] [--seed N]"
            ),
        }
        i += 1;
    }
    MainArgs {
        settings_path,
        seed,
    }
}

fn load_config(settings_path: &str, seed: Option<u64>) -> BoardConfig {
    let mut config = BoardConfig::default();
    match fs::read_to_string(settings_path) {
        Ok(text) => {
            let settings: Settings = serde_json::from_str(&text)
                .unwrap_or_else(|err| panic!("malformed {settings_path}: {err}"));
            config = config
                .width(settings.width)
                .height(settings.height)
                .cell_size(settings.cell_size)
                .live_density(settings.live_density);
        }
        Err(err) => {
            warn!("could not read {settings_path} ({err}), using default board settings");
        }
    }
    if let Some(seed) = seed {
        config = config.seed(seed);
    }
    config
}

/// Handle at most one pending key press without blocking.
/// Returns false when the user asked to quit.
fn handle_keys(board: &mut Board) -> bool {
    if !event::poll(Duration::ZERO).unwrap_or(false) {
        return true;
    }
    let Ok(Event::Key(key)) = event::read() else {
        return true;
    };
    if key.kind != KeyEventKind::Press {
        return true;
    }
    match key.code {
        KeyCode::Char(digit @ '1'..='3') => {
            let path = QUICK_SLOTS[digit as usize - '1' as usize];
            if let Err(err) = board.load_snapshot(path) {
                warn!("load {path} failed: {err}");
            }
        }
        KeyCode::Char('s') => match board.save_snapshot(SNAPSHOT_FILE) {
            Ok(()) => info!("saved {SNAPSHOT_FILE}"),
            Err(err) => warn!("save {SNAPSHOT_FILE} failed: {err}"),
        },
        KeyCode::Char('l') => {
            if let Err(err) = board.load_snapshot(SNAPSHOT_FILE) {
                warn!("load {SNAPSHOT_FILE} failed: {err}");
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => return false,
        _ => {}
    }
    true
}

fn render_frame(board: &Board, blinker: &Pattern) -> String {
    let mut frame = String::with_capacity((board.columns() + 1) * (board.rows() + 6));
    for y in 0..board.rows() {
        for x in 0..board.columns() {
            frame.push(if board.get_cell(x, y) { '*' } else { ' ' });
        }
        frame.push('\n');
    }

    let (live_cells, combinations) = board.live_cells_and_combinations();
    let (symmetrical, symmetrical_pairs) = board.symmetrical_cells();
    frame.push_str(&format!(
        "generation {} | live {live_cells} | combinations {combinations} | symmetrical {symmetrical} ({symmetrical_pairs} pairs)\n",
        board.generation(),
    ));
    if board.matches_pattern(0, 0, blinker) {
        frame.push_str("blinker detected at origin\n");
    }
    frame.push_str("keys: 1/2/3 load slots, s save, l load, q quit\n");
    frame
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = parse_args();
    let config = load_config(&args.settings_path, args.seed);
    let mut board = Board::with_config(config);
    let blinker = Pattern::blinker();

    info!(
        "board {}x{} cells (cell size {})",
        board.columns(),
        board.rows(),
        board.cell_size()
    );

    let mut out = stdout();
    loop {
        let frame = render_frame(&board, &blinker);
        let _ = execute!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        );
        let _ = out.write_all(frame.as_bytes());
        let _ = out.flush();

        if !handle_keys(&mut board) {
            break;
        }

        let step = board.advance();
        match step.stability {
            Some(StabilityEvent::Reached { generation }) => {
                info!("stability reached at generation {generation}");
            }
            Some(StabilityEvent::Continuing { .. }) => {
                info!("stable phase continues");
            }
            None => {}
        }
        if step.is_stable {
            break;
        }
        std::thread::sleep(FRAME_DELAY);
    }
}
