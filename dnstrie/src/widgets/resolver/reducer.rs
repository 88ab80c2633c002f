use iced::Task;

use super::event::{ResolverEffect, ResolverEvent};
use super::state::ResolverState;

/// Runtime context for the resolver reducer.
pub(crate) struct ResolverCtx {
    /// Pre-formatted wall-clock time at which the event is handled.
    pub(crate) timestamp: String,
}

/// Reduce a resolver event into state updates and effects.
pub(crate) fn reduce(
    state: &mut ResolverState,
    event: ResolverEvent,
    ctx: &ResolverCtx,
) -> Task<ResolverEffect> {
    match apply(state, event, ctx) {
        Some(effect) => Task::done(effect),
        None => Task::none(),
    }
}

/// Apply an event to state and return the follow-up effect, if any.
pub(crate) fn apply(
    state: &mut ResolverState,
    event: ResolverEvent,
    ctx: &ResolverCtx,
) -> Option<ResolverEffect> {
    match event {
        ResolverEvent::InputChanged { value } => {
            state.set_input(value);
            None
        },
        ResolverEvent::Submit => submit(state),
        ResolverEvent::HistorySelected { index } => {
            reduce_history_selected(state, index)
        },
        ResolverEvent::RefreshSnapshot => Some(request_snapshot(state)),
        ResolverEvent::LookupCompleted { domain, response } => {
            log::debug!("resolved {domain} to {}", response.address);
            state.complete_lookup(domain, response, ctx.timestamp.clone());
            Some(request_snapshot(state))
        },
        ResolverEvent::LookupFailed { domain, message } => {
            log::warn!("lookup of {domain} failed: {message}");
            state.fail_lookup();
            None
        },
        ResolverEvent::SnapshotLoaded { generation, root } => {
            if !state.accept_snapshot(generation) {
                log::debug!("dropping stale trie snapshot #{generation}");
                return None;
            }
            Some(ResolverEffect::SnapshotReady { root })
        },
        ResolverEvent::SnapshotFailed { message } => {
            log::warn!("trie snapshot fetch failed: {message}");
            None
        },
    }
}

fn request_snapshot(state: &mut ResolverState) -> ResolverEffect {
    ResolverEffect::SnapshotRequested {
        generation: state.next_snapshot_generation(),
    }
}

fn submit(state: &mut ResolverState) -> Option<ResolverEffect> {
    let domain = state.begin_lookup()?;
    Some(ResolverEffect::LookupRequested { domain })
}

/// Copy a history entry into the input and resolve it again.
fn reduce_history_selected(
    state: &mut ResolverState,
    index: usize,
) -> Option<ResolverEffect> {
    if state.is_loading() {
        return None;
    }

    let domain = state.history().get(index)?.domain.clone();
    state.set_input(domain);
    submit(state)
}
