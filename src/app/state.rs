use crate::config::AppConfig;
use crate::page::Page;
use crate::ui::layout::{self, PageLayout};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(5);

pub struct AppState {
    pub config: AppConfig,
    pub page: Page,
    pub viewport: Rect,
    pub clicks: u64,
    pub should_quit: bool,
    pub dirty: bool,
    status_message: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(config: AppConfig, page: Page) -> Self {
        Self {
            config,
            page,
            viewport: Rect::default(),
            clicks: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.dirty = true;
    }

    /// The layout used both for rendering and for mouse hit testing.
    pub fn layout(&self) -> PageLayout {
        layout::compute_layout(self.viewport)
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
        self.dirty = true;
    }

    /// Drop the transient status message once it has been visible long
    /// enough. Called on every tick.
    pub fn expire_status(&mut self) {
        if let Some((_, since)) = &self.status_message {
            if since.elapsed() >= STATUS_MESSAGE_TTL {
                self.status_message = None;
                self.dirty = true;
            }
        }
    }

    pub fn status_line(&self) -> String {
        if let Some((ref msg, _)) = self.status_message {
            return msg.clone();
        }
        format!(
            "Clicks: {} | Console: {} lines",
            self.clicks,
            self.page.console().len()
        )
    }
}
