use iced::Task;

use super::{App, AppEvent};
use crate::routers;
use crate::widgets::resolver::ResolverEvent;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => {
            routers::resolver::route_event(app, ResolverEvent::RefreshSnapshot)
        },
        // Resolver widget
        AppEvent::ResolverUi(event) => {
            routers::resolver::route_event(app, event)
        },
        AppEvent::ResolverEffect(effect) => {
            routers::resolver::route_effect(app, effect)
        },
        // Trie widget
        AppEvent::TrieUi(event) => routers::trie::route_event(app, event),
    }
}
