use crate::api::ApiClient;
use crate::cli::commands::monitor::{print_log, watch_ended};
use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::kiosk::{KioskFlow, KioskState, MSG_NO_ACTIVE_EVENT};
use crate::core::session_guard::SessionWatch;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::CheckInStatus;
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::prompt::read_line;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// Rows of the live log shown after each check-in.
const RECENT_ROWS: usize = 5;

/// How often the prompt wait looks at the session watch.
const WATCH_TICK: Duration = Duration::from_millis(100);

const PROMPT: &str = "Student ID> ";

type LineResult = AppResult<Option<String>>;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let api = ApiClient::from_config(cfg)?;
    let store = open_store(cfg)?;
    let session = store.session()?;

    // the staffing officer's session is watched; an anonymous kiosk is not
    let watch = match &session {
        Some(s) => Some(SessionWatch::start(
            &cfg.store,
            api.clone(),
            cfg.poll_interval(s.user.role),
        )?),
        None => None,
    };

    let mut flow = KioskFlow::new(session);
    match flow.load_active_event(&api) {
        Ok(Some(ev)) => header(format!("{} ({})", ev.name, ev.date)),
        Ok(None) => warning(MSG_NO_ACTIVE_EVENT),
        Err(e) => error(format!("Connection Error: Could not verify active event. ({e})")),
    }
    info("Enter a student number per line, `quit` to stop.");

    let (ready, lines) = spawn_reader()?;
    loop {
        // the reader prompts only once the previous line has been handled
        if ready.send(()).is_err() {
            break;
        }
        let Some(line) = next_line(&lines, watch.as_ref())? else {
            break;
        };
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        flow.set_input(&line);
        let state = match flow.submit(&api) {
            Ok(state) => state.clone(),
            Err(AppError::Validation(msg)) => {
                error(msg);
                continue;
            }
            Err(e) => return Err(e),
        };

        report(&state);

        if let KioskState::CheckInFailed {
            session_expired: true,
            ..
        } = state
        {
            store.clear()?;
            store.journal("revoked", "kiosk", "Check-in rejected the officer session");
            return Err(AppError::Unauthenticated(
                "please log in again to continue scanning".into(),
            ));
        }

        if matches!(state, KioskState::CheckedIn { .. } | KioskState::CheckInFailed { .. }) {
            refresh_log(&api, &flow);
        }
    }

    if let Some(w) = watch {
        w.stop();
    }
    Ok(())
}

/// Stdin on its own thread, one line per `ready` signal.
fn spawn_reader() -> AppResult<(Sender<()>, Receiver<LineResult>)> {
    let (ready_tx, ready_rx) = mpsc::channel::<()>();
    let (line_tx, line_rx) = mpsc::channel();

    thread::Builder::new()
        .name("kiosk-stdin".into())
        .spawn(move || {
            while ready_rx.recv().is_ok() {
                let line = read_line(PROMPT);
                let last = !matches!(line, Ok(Some(_)));
                if line_tx.send(line).is_err() || last {
                    return;
                }
            }
        })?;

    Ok((ready_tx, line_rx))
}

/// Wait for the next line, ending early when the watch reports the session
/// gone. `None` on end of input.
fn next_line(lines: &Receiver<LineResult>, watch: Option<&SessionWatch>) -> LineResult {
    loop {
        if let Some(ev) = watch.and_then(|w| w.poll()) {
            println!();
            return Err(watch_ended(ev));
        }
        match lines.recv_timeout(WATCH_TICK) {
            Ok(line) => return line,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return Ok(None),
        }
    }
}

fn report(state: &KioskState) {
    let Some(msg) = state.message() else {
        return;
    };
    match state {
        KioskState::CheckedIn {
            status: CheckInStatus::Out,
            ..
        } => info(msg),
        KioskState::CheckedIn { .. } => success(msg),
        _ => error(msg),
    }
}

fn refresh_log(api: &ApiClient, flow: &KioskFlow) {
    let Some(event) = flow.active_event() else {
        return;
    };
    match api.attendance(event.id) {
        Ok(records) => {
            let recent: Vec<_> = records.into_iter().take(RECENT_ROWS).collect();
            print_log(&recent);
        }
        Err(AppError::NotFound(_)) => print_log(&[]),
        Err(e) => tracing::debug!("attendance refresh failed: {e}"),
    }
}
