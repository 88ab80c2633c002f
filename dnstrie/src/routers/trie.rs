use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::trie::TrieEvent;

/// Route a trie event through the widget reducer.
pub(crate) fn route_event(app: &mut App, event: TrieEvent) -> Task<AppEvent> {
    let _changed = app.widgets.trie.reduce(event);
    Task::none()
}
