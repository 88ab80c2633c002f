mod errors;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod services;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use event::{ResolverEffect, ResolverEvent};
use iced::Task;
pub(crate) use reducer::ResolverCtx;
use state::ResolverState;

/// Resolver widget: owns the domain input, the last answer and note, the
/// in-flight flag and the bounded lookup history.
pub(crate) struct ResolverWidget {
    state: ResolverState,
}

impl ResolverWidget {
    /// Create a new widget with empty input and history.
    pub(crate) fn new() -> Self {
        Self {
            state: ResolverState::default(),
        }
    }

    /// Reduce an event into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        event: ResolverEvent,
        ctx: &ResolverCtx,
    ) -> Task<ResolverEffect> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Return a view model for the form, result and history views.
    pub(crate) fn vm(&self) -> model::ResolverViewModel<'_> {
        model::ResolverViewModel {
            input: self.state.input(),
            address: self.state.address(),
            note: self.state.note(),
            is_loading: self.state.is_loading(),
            can_submit: self.state.can_submit(),
            history: self.state.history(),
        }
    }
}
