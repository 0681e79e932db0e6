//! Input handling for the Sprintgate TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use sprintgate_engine::{App, GatePhase};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Background reader feeding terminal events into a bounded channel so the
/// frame loop can drain input without blocking.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let join = tokio::task::spawn_blocking(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                match event::poll(INPUT_POLL_TIMEOUT) {
                    Ok(true) => match event::read() {
                        Ok(ev) => {
                            if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                        break;
                    }
                }
            }
        });

        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(join) = self.join.take() {
            let _ = join.await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// Drain queued input and apply it to the app. Returns `true` to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        let msg = match input.rx.try_recv() {
            Ok(msg) => msg,
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input reader terminated"));
            }
        };

        match msg {
            InputMsg::Event(Event::Key(key))
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
            {
                if handle_key(app, key) {
                    return Ok(true);
                }
            }
            InputMsg::Event(Event::Paste(text)) => {
                if app.phase() == GatePhase::Login && app.notice().is_none() {
                    for ch in text.chars().filter(|ch| !ch.is_control()) {
                        app.login_insert(ch);
                    }
                }
            }
            InputMsg::Event(_) => {}
            InputMsg::Error(err) => {
                debug!("input error: {err}");
                return Err(anyhow!("input error: {err}"));
            }
        }
    }
    Ok(false)
}

fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl+C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.phase() {
        GatePhase::Loading | GatePhase::Background => {
            matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        }
        GatePhase::Guidelines => {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => app.guidelines_cursor_up(),
                KeyCode::Down | KeyCode::Char('j') => app.guidelines_cursor_down(),
                KeyCode::Char(' ') => app.toggle_guidelines_item(),
                KeyCode::Enter => app.activate_guidelines(),
                KeyCode::Esc => app.cancel_guidelines(),
                _ => {}
            }
            false
        }
        GatePhase::Login => {
            // The invalid-credentials notice is blocking: it swallows all
            // input until dismissed.
            if app.notice().is_some() {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    app.dismiss_notice();
                }
                return false;
            }
            match key.code {
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    app.login_switch_field();
                }
                KeyCode::Enter => app.submit_login(),
                KeyCode::Esc => app.close_login(),
                KeyCode::Backspace => app.login_delete(),
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.login_insert(ch);
                }
                _ => {}
            }
            false
        }
    }
}
