#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Task, Theme};

use crate::config;
use crate::theme::AppTheme;
use crate::widgets::resolver::services::ResolverApi;
use crate::widgets::resolver::{ResolverEffect, ResolverEvent, ResolverWidget};
use crate::widgets::trie::{TrieEvent, TrieWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 640.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Resolver widget
    ResolverUi(ResolverEvent),
    ResolverEffect(ResolverEffect),
    // Trie widget
    TrieUi(TrieEvent),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) resolver: ResolverWidget,
    pub(crate) trie: TrieWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme: AppTheme,
    /// `None` when the HTTP client could not be built; requests then fail
    /// immediately.
    pub(crate) api: Option<ResolverApi>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = config::load();
        let api = match ResolverApi::new(&settings.api) {
            Ok(api) => {
                log::info!("resolution service at {}", api.base_url());
                Some(api)
            },
            Err(err) => {
                log::warn!("resolution client unavailable: {err}");
                None
            },
        };

        let app = App {
            theme: AppTheme::default(),
            api,
            widgets: Widgets {
                resolver: ResolverWidget::new(),
                trie: TrieWidget::new(),
            },
        };

        (app, Task::done(AppEvent::IcedReady))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("DNS Resolver")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::from(&self.theme)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
