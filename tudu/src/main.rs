//! tudu - terminal todo list
//!
//! The main loop is the classic unidirectional cycle:
//! 1. Terminal event -> keymap command or component `handle_event` -> actions
//! 2. Actions dispatched to the store
//! 3. Reducers fold the action into the next state
//! 4. If the state changed, re-render
//!
//! Keys (defaults): a: add todo, space: toggle, j/k: move, f: filter,
//! ?: help, l: action log, q: quit

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tudu_core::{
    process_raw_event, spawn_event_poller, ActionFilter, ActionLog, ActionLoggerMiddleware,
    EventKind, Keymap, RawEvent, StoreWithMiddleware,
};

use tudu::action::{Action, ActionFactory};
use tudu::keymap::{command_to_action, context_for, default_keymap, load_keymap, Context};
use tudu::reducer::todo_app;
use tudu::state::AppState;
use tudu::ui::AppUi;

/// tudu - a todo list with unidirectional state flow
#[derive(Parser, Debug)]
#[command(name = "tudu")]
#[command(about = "A todo list for the terminal")]
struct Args {
    /// Keybindings config file (JSON), overlaid on the defaults
    #[arg(long)]
    keys: Option<PathBuf>,

    /// Comma-separated glob patterns of actions to record in the log overlay
    #[arg(long)]
    log_actions: Option<String>,

    /// Comma-separated glob patterns of actions to keep out of the log overlay
    #[arg(long, default_value = "InputChange,SelectionSet")]
    log_exclude: String,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    let keymap = match &args.keys {
        Some(path) => match load_keymap(path) {
            Ok(keymap) => keymap,
            Err(e) => {
                eprintln!("Error: could not load keybindings from {}", path.display());
                eprintln!("Details: {e}");
                std::process::exit(1);
            }
        },
        None => default_keymap(),
    };

    let log_filter = ActionFilter::parse(args.log_actions.as_deref(), Some(args.log_exclude.as_str()));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, keymap, log_filter).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    keymap: Keymap<Context>,
    log_filter: ActionFilter,
) -> io::Result<()> {
    // Action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Store = state + composed reducer, with the action log in front
    let mut store = StoreWithMiddleware::new(
        AppState::default(),
        todo_app,
        ActionLoggerMiddleware::new(ActionLog::new(100, log_filter)),
    );
    store.subscribe(|state: &AppState| {
        tracing::trace!(
            todos = state.todos.len(),
            filter = ?state.visibility_filter,
            "state replaced"
        );
    });

    // The factory owns the todo id counter.
    let mut factory = ActionFactory::new();

    // Event poller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _event_handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    let mut ui = AppUi::new();
    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| {
                ui.render(frame, store.state(), store.middleware().log(), &keymap);
            })?;
            should_render = false;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);

                if let EventKind::Resize(_, _) = event {
                    should_render = true;
                    continue;
                }

                for action in route_event(&event, &keymap, store.state(), &factory, &mut ui) {
                    let _ = action_tx.send(action);
                }
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    break;
                }

                // The entry field only knows its text; minting the todo id
                // happens here, through the factory.
                if let Action::InputSubmit(ref text) = action {
                    let text = text.trim();
                    if !text.is_empty() {
                        let _ = action_tx.send(factory.add_todo(text));
                    }
                }

                should_render |= store.dispatch(action);
            }
        }
    }

    cancel_token.cancel();
    Ok(())
}

/// Turn one terminal event into actions.
///
/// While the entry field is open it gets first refusal, so typed characters
/// never trigger list bindings; otherwise keymap commands win and the list
/// component handles the rest (navigation).
fn route_event(
    event: &EventKind,
    keymap: &Keymap<Context>,
    state: &AppState,
    factory: &ActionFactory,
    ui: &mut AppUi,
) -> Vec<Action> {
    let context = context_for(state);
    let keymap_actions = |event: &EventKind| -> Vec<Action> {
        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        keymap
            .command_for(*key, context)
            .and_then(|command| command_to_action(command, state, factory))
            .into_iter()
            .collect()
    };

    match context {
        Context::Input => {
            let actions = ui.map_event(event, state);
            if actions.is_empty() {
                keymap_actions(event)
            } else {
                actions
            }
        }
        Context::List => {
            let actions = keymap_actions(event);
            if actions.is_empty() {
                ui.map_event(event, state)
            } else {
                actions
            }
        }
    }
}
