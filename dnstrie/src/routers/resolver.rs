use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::resolver::model::format_timestamp;
use crate::widgets::resolver::services::ResolverApi;
use crate::widgets::resolver::{ResolverCtx, ResolverEffect, ResolverEvent};
use crate::widgets::trie::TrieEvent;

use super::trie;

/// Route a resolver event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: ResolverEvent,
) -> Task<AppEvent> {
    let ctx = ResolverCtx {
        timestamp: format_timestamp(&chrono::Local::now()),
    };
    app.widgets
        .resolver
        .reduce(event, &ctx)
        .map(AppEvent::ResolverEffect)
}

/// Route a resolver effect event to app-level tasks.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ResolverEffect,
) -> Task<AppEvent> {
    match effect {
        ResolverEffect::LookupRequested { domain } => {
            lookup_async(app.api.clone(), domain)
        },
        ResolverEffect::SnapshotRequested { generation } => {
            snapshot_async(app.api.clone(), generation)
        },
        ResolverEffect::SnapshotReady { root } => {
            trie::route_event(app, TrieEvent::SnapshotReplaced { root })
        },
    }
}

/// Resolve `domain` and produce a completion event.
fn lookup_async(api: Option<ResolverApi>, domain: String) -> Task<AppEvent> {
    let Some(api) = api else {
        return Task::done(AppEvent::ResolverUi(ResolverEvent::LookupFailed {
            domain,
            message: String::from("HTTP client unavailable"),
        }));
    };

    let request_domain = domain.clone();
    Task::perform(
        async move { api.resolve(&request_domain).await },
        move |result| {
            let event = match result {
                Ok(response) => ResolverEvent::LookupCompleted {
                    domain: domain.clone(),
                    response,
                },
                Err(err) => ResolverEvent::LookupFailed {
                    domain: domain.clone(),
                    message: format!("{err}"),
                },
            };
            AppEvent::ResolverUi(event)
        },
    )
}

/// Fetch the trie snapshot and produce a completion event tagged with
/// `generation`.
fn snapshot_async(api: Option<ResolverApi>, generation: u64) -> Task<AppEvent> {
    let Some(api) = api else {
        return Task::done(AppEvent::ResolverUi(
            ResolverEvent::SnapshotFailed {
                message: String::from("HTTP client unavailable"),
            },
        ));
    };

    Task::perform(async move { api.fetch_trie().await }, move |result| {
        let event = match result {
            Ok(root) => ResolverEvent::SnapshotLoaded { generation, root },
            Err(err) => ResolverEvent::SnapshotFailed {
                message: format!("{err}"),
            },
        };
        AppEvent::ResolverUi(event)
    })
}
