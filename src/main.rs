//! Terminal match-3 runner (default binary).
//!
//! Flags:
//!   --objective   play objective mode (clear N tiles of a rolled color)
//!   --seed <n>    fixed RNG seed for a reproducible board

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_match3::core::Session;
use tui_match3::input::{handle_key_event, should_quit};
use tui_match3::term::{GameView, TerminalRenderer, UiState, Viewport};
use tui_match3::types::{GameAction, GameMode, Pos, BOT_MOVE_DELAY_MS, GRID_SIZE, TICK_MS};

struct Options {
    mode: GameMode,
    seed: Option<u32>,
}

fn parse_args() -> Result<Options> {
    let mut opts = Options {
        mode: GameMode::Endless,
        seed: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--objective" => opts.mode = GameMode::Objective,
            "--seed" => {
                let value = match args.next() {
                    Some(v) => v,
                    None => bail!("--seed requires a value"),
                };
                opts.seed = Some(value.parse()?);
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(opts)
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let opts = parse_args()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &opts);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, opts: &Options) -> Result<()> {
    let seed = opts.seed.unwrap_or_else(time_seed);
    let mut session = Session::new(opts.mode, seed)?;

    let view = GameView::default();
    let mut cursor = Pos::new(0, 0);
    let mut selected: Option<Pos> = None;
    let mut autoplay = false;

    let tick_duration = Duration::from_millis(TICK_MS);
    let bot_delay = Duration::from_millis(BOT_MOVE_DELAY_MS);
    let mut last_tick = Instant::now();
    let mut last_bot_move = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let ui = UiState {
            cursor,
            selected,
            autoplay,
        };
        let fb = view.render(&session, ui, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(action) = handle_key_event(key) {
                        match action {
                            GameAction::CursorLeft => {
                                cursor.x = cursor.x.saturating_sub(1);
                            }
                            GameAction::CursorRight => {
                                cursor.x = (cursor.x + 1).min(GRID_SIZE - 1);
                            }
                            GameAction::CursorUp => {
                                cursor.y = cursor.y.saturating_sub(1);
                            }
                            GameAction::CursorDown => {
                                cursor.y = (cursor.y + 1).min(GRID_SIZE - 1);
                            }
                            GameAction::Select => {
                                match selected.take() {
                                    None => selected = Some(cursor),
                                    Some(prev) if prev == cursor => {}
                                    Some(prev) => {
                                        // Swap errors (non-adjacent picks) just
                                        // drop the selection.
                                        let _ = session.try_swap(prev, cursor);
                                    }
                                }
                            }
                            GameAction::BotMove => {
                                session.bot_step()?;
                            }
                            GameAction::ToggleAutoplay => {
                                autoplay = !autoplay;
                                last_bot_move = Instant::now();
                            }
                            GameAction::Restart => {
                                session.restart(opts.seed.unwrap_or_else(time_seed))?;
                                cursor = Pos::new(0, 0);
                                selected = None;
                                autoplay = false;
                            }
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if autoplay && !session.game_over() && last_bot_move.elapsed() >= bot_delay {
                last_bot_move = Instant::now();
                if session.bot_step()?.is_none() {
                    autoplay = false;
                }
            }
        }
    }
}
