//! TUI application: the page's select! loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 AutoAdvance (tokio::spawn)
//!   ├─ crossterm EventStream              └─ interval ──> tick_tx
//!   ├─ tick_rx (AdvanceTick) <────────────────────────────┘
//!   └─ frame_interval (reveal transitions, flash expiry)
//! ```
//!
//! Every state mutation happens on this loop; the timer task only sends
//! ticks.

use super::mode::KeyHandler;
use super::page::content_column;
use super::state::TuiState;
use super::widgets::{
    ScreenLayout, help::HelpWidget, menu::MenuWidget, nav_bar::NavBarWidget, page::PageWidget,
    status_bar::StatusBarWidget,
};
use super::theme;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_application::{AdvanceTick, FolioConfig, LoadedPage, ViewStateController};
use futures::stream::StreamExt;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    widgets::{Block, Clear},
};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Default frame period while the loop is idle or animating
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(50);

const FLASH_TTL: Duration = Duration::from_secs(3);

/// Rows scrolled per mouse wheel step
const WHEEL_STEP: isize = 3;

/// Main TUI application
pub struct TuiApp {
    page: Option<LoadedPage>,
    config: FolioConfig,
    tick_rate: Duration,
}

impl TuiApp {
    pub fn new(page: LoadedPage, config: FolioConfig) -> Self {
        Self {
            page: Some(page),
            config,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        if !tick_rate.is_zero() {
            self.tick_rate = tick_rate;
        }
        self
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        let Some(page) = self.page.take() else {
            return Ok(());
        };

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(info);
        }));

        let size = terminal.size()?;
        let mut area = Rect::new(0, 0, size.width, size.height);
        let screen = ScreenLayout::compute(area);

        let (controller, mut ticks) =
            ViewStateController::start(page.content.list_sizes(), self.config.rotation);
        let mut state = TuiState::new(
            page,
            controller,
            self.config.reveal,
            content_column(screen.page).width,
            screen.page.height,
            Instant::now(),
        );
        info!("TUI started ({}x{})", area.width, area.height);

        let mut event_stream = EventStream::new();
        let mut frames = tokio::time::interval(self.tick_rate);
        frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            // Render
            let now = Instant::now();
            terminal.draw(|frame| render(frame, &state, now))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, mouse, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    if let Event::Resize(width, height) = term_event {
                        area = Rect::new(0, 0, width, height);
                    }
                    handle_terminal_event(&mut state, area, term_event);
                }

                // Testimonial auto-advance
                Some(tick) = next_tick(&mut ticks) => {
                    state.on_rotation_tick(tick, Instant::now());
                }

                // Frame tick for reveal transitions and flash expiry
                _ = frames.tick() => {
                    state.expire_flash(FLASH_TTL);
                }
            }
        }

        state.shutdown();
        debug!("TUI loop exited");

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }
}

/// Next auto-advance tick; pends forever when rotation is off or the
/// timer has stopped
async fn next_tick(
    ticks: &mut Option<mpsc::UnboundedReceiver<AdvanceTick>>,
) -> Option<AdvanceTick> {
    match ticks {
        Some(rx) => match rx.recv().await {
            Some(tick) => Some(tick),
            None => {
                *ticks = None;
                std::future::pending().await
            }
        },
        None => std::future::pending().await,
    }
}

fn handle_terminal_event(state: &mut TuiState, area: Rect, event: Event) {
    let now = Instant::now();
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let action = KeyHandler::handle(state.mode(), key);
            state.apply(action, now);
        }
        Event::Mouse(mouse) => handle_mouse(state, area, mouse, now),
        Event::Resize(..) => {
            let screen = ScreenLayout::compute(area);
            state.resize(content_column(screen.page).width, screen.page.height, now);
        }
        _ => {}
    }
}

fn handle_mouse(state: &mut TuiState, area: Rect, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::ScrollUp => state.scroll_by(-WHEEL_STEP, now),
        MouseEventKind::ScrollDown => state.scroll_by(WHEEL_STEP, now),
        MouseEventKind::Down(MouseButton::Left) => {
            let screen = ScreenLayout::compute(area);
            let column = content_column(screen.page);
            if mouse.row >= screen.page.y
                && mouse.row < screen.page.bottom()
                && mouse.column >= column.x
                && mouse.column < column.right()
            {
                state.click(mouse.column - column.x, mouse.row - screen.page.y, now);
            }
        }
        _ => {}
    }
}

/// Render all widgets
fn render(frame: &mut ratatui::Frame, state: &TuiState, now: Instant) {
    let area = frame.area();
    let layout = ScreenLayout::compute(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND)),
        area,
    );
    frame.render_widget(NavBarWidget::new(state), layout.nav_bar);
    frame.render_widget(PageWidget::new(state, now), layout.page);
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    // Menu dropdown
    if state.view().is_menu_open() {
        let menu_area = layout.menu_dropdown(MenuWidget::item_count());
        frame.render_widget(Clear, menu_area);
        frame.render_widget(MenuWidget::new(state), menu_area);
    }

    // Help overlay
    if state.show_help {
        let help_area = ScreenLayout::centered_overlay(60, 70, area);
        frame.render_widget(Clear, help_area);
        frame.render_widget(HelpWidget::new(), help_area);
    }
}
