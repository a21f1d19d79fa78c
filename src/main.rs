//! reef-runner entry point
//!
//! Terminal shell around the sim: maps keys to commands, drives the
//! fixed-timestep orchestrator, and paints a coarse projection of the
//! board. All real rendering/audio stays behind thin collaborators.

use std::io::{self, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use glam::Vec2;

use reef_runner::app::Game;
use reef_runner::audio::{AudioManager, SoundCue};
use reef_runner::sim::{Command, GamePhase, GameState, STARTING_LIVES};
use reef_runner::tuning::Tuning;

/// Rows reserved above the playfield for score and hearts
const HUD_ROWS: u16 = 2;

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("reef-runner starting");

    let tuning = Tuning::load(std::path::Path::new("tuning.json"));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut game = Game::with_state(GameState::with_tuning(seed, tuning));
    let mut audio = AudioManager::new();

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout, &mut game, &mut audio);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    log::info!("reef-runner exiting");
    result
}

fn run(out: &mut io::Stdout, game: &mut Game, audio: &mut AudioManager) -> io::Result<()> {
    let mut last = Instant::now();

    loop {
        // Drain pending input before the next frame
        if event::poll(Duration::from_millis(8))? {
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Enter => game.start(),
                        KeyCode::Char(' ') => game.command(Command::Ascend),
                        KeyCode::Up => game.command(Command::Up),
                        KeyCode::Down => game.command(Command::Down),
                        KeyCode::Left => game.command(Command::Left),
                        KeyCode::Right => game.command(Command::Right),
                        KeyCode::Char('m') => {
                            let muted = audio.muted();
                            audio.set_muted(!muted);
                        }
                        _ => {}
                    }
                }
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        for &fired in game.update(dt) {
            audio.play(SoundCue::from_event(fired));
        }

        draw(out, game.state())?;
    }
}

fn draw(out: &mut io::Stdout, state: &GameState) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let cols = cols.max(20) as usize;
    let view_rows = rows.saturating_sub(HUD_ROWS).max(10) as usize;

    let sx = cols as f32 / state.tuning.board_width;
    let sy = view_rows as f32 / state.tuning.board_height;

    let mut grid = vec![vec![' '; cols]; view_rows];
    for coral in &state.corals {
        plot_rect(&mut grid, coral.pos, coral.width, coral.height, sx, sy, '#');
    }
    for fish in &state.fish {
        plot_rect(&mut grid, fish.pos, fish.width, fish.height, sx, sy, '>');
    }
    plot_rect(
        &mut grid,
        state.submarine.pos,
        state.submarine.width,
        state.submarine.height,
        sx,
        sy,
        '=',
    );

    let status = match state.phase {
        GamePhase::NotStarted => "Press Enter to begin".to_string(),
        GamePhase::Running => format!("Score: {}", state.score as i64),
        GamePhase::GameOver => {
            format!("Game Over: {} - Space to restart", state.score as i64)
        }
    };
    let mut hearts = String::new();
    for i in 0..STARTING_LIVES {
        hearts.push(if i < state.lives { '\u{2665}' } else { '\u{2661}' });
        hearts.push(' ');
    }

    queue!(
        out,
        cursor::MoveTo(0, 0),
        Print(pad(&status, cols)),
        cursor::MoveTo(0, 1),
        Print(pad(&hearts, cols)),
    )?;
    for (row, line) in grid.iter().enumerate() {
        let text: String = line.iter().collect();
        queue!(out, cursor::MoveTo(0, HUD_ROWS + row as u16), Print(text))?;
    }
    out.flush()
}

/// Stamp a board-space rectangle onto the character grid.
fn plot_rect(
    grid: &mut [Vec<char>],
    min: Vec2,
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
    ch: char,
) {
    let cols = grid[0].len() as i32;
    let rows = grid.len() as i32;
    let x0 = (min.x * sx).floor() as i32;
    let x1 = ((min.x + width) * sx).ceil() as i32;
    let y0 = (min.y * sy).floor() as i32;
    let y1 = ((min.y + height) * sy).ceil() as i32;

    for row in y0.max(0)..y1.min(rows) {
        for col in x0.max(0)..x1.min(cols) {
            grid[row as usize][col as usize] = ch;
        }
    }
}

fn pad(text: &str, width: usize) -> String {
    let mut padded = text.to_string();
    while padded.chars().count() < width {
        padded.push(' ');
    }
    padded
}
