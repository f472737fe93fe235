//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. All session state is
//! mutated on this one thread; lookups are spawned onto the tokio runtime and
//! their outcomes drained from an mpsc channel each tick, so out-of-order
//! completions reach the controller's ticket guard in arrival order.

use crate::{
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        hint_bar::HintBar,
        search_input::{SearchInput, SearchInputState},
        suggestion_list::{SuggestionList, SuggestionListState},
    },
};
use crossterm::{
    event::{self as ct_event, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pindrop_core::config::{GeocoderConfig, InputPosition, UiConfig};
use pindrop_core::{ResultSet, SearchSession, Suggestion, Ticket};
use pindrop_geocoder::{Dispatcher, GeocoderError};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    Frame, Terminal,
};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;

type DispatchOutcome = Result<ResultSet, GeocoderError>;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub session: SearchSession,
    pub input: SearchInputState,
    pub list: SuggestionListState,
    pub ui: UiConfig,
    pub theme: Theme,
    /// User-facing message from the last failed lookup, cleared on the next
    /// edit or accepted response.
    pub last_error: Option<String>,
    pub selected: Option<Suggestion>,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    dispatcher: Arc<Dispatcher>,
    runtime: tokio::runtime::Handle,
    outcome_tx: mpsc::UnboundedSender<DispatchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<DispatchOutcome>,
}

impl App {
    pub fn new(
        search: GeocoderConfig,
        ui: UiConfig,
        theme: Theme,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        let session = SearchSession::new(|s: &Suggestion| {
            tracing::info!(id = %s.id, place = %s.place_name, "selection committed");
        })
        .with_on_suggest(|list: &[Suggestion]| {
            tracing::debug!(count = list.len(), "suggestions updated");
        });

        let state = AppState {
            session,
            input: SearchInputState::default(),
            list: SuggestionListState::default(),
            ui,
            theme,
            last_error: None,
            selected: None,
            quit: false,
        };

        App {
            state,
            dispatcher: Arc::new(Dispatcher::new(search)),
            runtime,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on
    /// exit. Returns the committed selection, if any.
    pub fn run(mut self) -> anyhow::Result<Option<Suggestion>> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = terminal.show_cursor();

        result.map(|()| self.state.selected)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.drain_outcomes();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        if let Some(ev) = event::to_app_event(Event::Key(key)) {
                            tracing::debug!(event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Pull completed lookups off the channel and feed them to the session.
    /// The ticket guard decides acceptance; a failed lookup only surfaces a
    /// message — it leaves the displayed list untouched and the loading flag
    /// set until a later accepted response or an empty-input clear.
    fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            match outcome {
                Ok(set) => {
                    if self.state.session.apply_response(set) {
                        self.state.last_error = None;
                    }
                }
                Err(err) => {
                    tracing::warn!(error = ?err, "lookup failed");
                    self.state.last_error = Some(err.to_string());
                }
            }
        }
    }

    fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => {
                tracing::debug!("quit without selection");
                self.state.quit = true;
            }

            AppEvent::Char(_) | AppEvent::Backspace => {
                if self.state.input.handle(&event) {
                    self.state.last_error = None;
                    let query = self.state.input.text().to_string();
                    if let Some(ticket) = self.state.session.input_changed(&query) {
                        self.spawn_dispatch(query, ticket);
                    }
                }
            }

            AppEvent::Nav(Direction::Up) => self.state.session.move_focus(-1),
            AppEvent::Nav(Direction::Down) => self.state.session.move_focus(1),

            // Left/right move the text cursor
            AppEvent::Nav(_) => {
                self.state.input.handle(&event);
            }

            AppEvent::Enter => {
                if let Some(picked) = self.state.session.submit() {
                    self.state.selected = Some(picked);
                    self.state.quit = true;
                }
            }

            AppEvent::Click { column, row } => {
                if let Some(index) = self.state.list.hit(column, row) {
                    if let Some(picked) = self.state.session.click_option(index) {
                        self.state.selected = Some(picked);
                        self.state.quit = true;
                    }
                }
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}
        }
    }

    fn spawn_dispatch(&self, query: String, ticket: Ticket) {
        let dispatcher = Arc::clone(&self.dispatcher);
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let outcome = dispatcher.dispatch(&query, ticket).await;
            // The receiver only closes on shutdown; a dropped outcome is fine
            let _ = tx.send(outcome);
        });
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 3-line search input (top or bottom) | suggestions | 1-line hints
    let (input_area, list_area, hint_area) = match state.ui.input_position {
        InputPosition::Top => {
            let vert = Layout::default()
                .direction(LayoutDir::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Fill(1),
                    Constraint::Length(1),
                ])
                .split(area);
            (vert[0], vert[1], vert[2])
        }
        InputPosition::Bottom => {
            let vert = Layout::default()
                .direction(LayoutDir::Vertical)
                .constraints([
                    Constraint::Fill(1),
                    Constraint::Length(3),
                    Constraint::Length(1),
                ])
                .split(area);
            (vert[1], vert[0], vert[2])
        }
    };

    let show_loader = state.ui.show_loader && state.session.is_loading();
    frame.render_widget(
        SearchInput::new(&state.input, &state.ui.placeholder, show_loader, &state.theme),
        input_area,
    );
    frame.render_widget(
        SuggestionList::new(
            state.session.suggestions(),
            state.session.focus(),
            &state.list,
            &state.theme,
        ),
        list_area,
    );
    frame.render_widget(
        HintBar::new(state.last_error.as_deref(), &state.theme),
        hint_area,
    );

    let (cx, cy) = state.input.cursor_position(input_area);
    frame.set_cursor_position((cx, cy));
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original(info);
    }));
}
