use iced::widget::{column, container, text};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::theme::ThemeProps;
use crate::widgets::resolver::view::{history_list, resolve_form, result_panel};
use crate::widgets::trie::view::trie_panel;

const TITLE_FONT_SIZE: f32 = 22.0;
const CONTENT_PADDING: f32 = 16.0;
const SECTION_SPACING: f32 = 12.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);
    let palette = app.theme.iced_palette();

    let title = text("DNS Resolver")
        .size(TITLE_FONT_SIZE)
        .color(palette.foreground);

    let form = resolve_form::view(resolve_form::ResolveFormProps {
        vm: app.widgets.resolver.vm(),
        theme: theme_props,
    })
    .map(AppEvent::ResolverUi);

    let result = result_panel::view(result_panel::ResultPanelProps {
        vm: app.widgets.resolver.vm(),
        theme: theme_props,
    })
    .map(AppEvent::ResolverUi);

    let history = history_list::view(history_list::HistoryListProps {
        vm: app.widgets.resolver.vm(),
        theme: theme_props,
    })
    .map(AppEvent::ResolverUi);

    let trie = trie_panel::view(trie_panel::TriePanelProps {
        vm: app.widgets.trie.vm(),
        theme: theme_props,
    })
    .map(AppEvent::TrieUi);

    container(
        column![title, form, result, history, trie]
            .spacing(SECTION_SPACING)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(CONTENT_PADDING)
    .into()
}
