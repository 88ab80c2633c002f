use super::model::LookupResponse;
use crate::widgets::trie::model::TrieNode;

/// UI intents and async completions handled by the resolver.
#[derive(Debug, Clone)]
pub(crate) enum ResolverEvent {
    /// The domain input changed.
    InputChanged { value: String },
    /// Resolve the current input (button press or Enter).
    Submit,
    /// Re-submit a domain from the history list.
    HistorySelected { index: usize },
    /// Re-fetch the trie snapshot without resolving anything.
    RefreshSnapshot,
    /// The resolution endpoint answered.
    LookupCompleted {
        domain: String,
        response: LookupResponse,
    },
    /// The resolution request failed.
    LookupFailed { domain: String, message: String },
    /// A trie snapshot was fetched and decoded.
    ///
    /// `generation` echoes the value of the request that produced it.
    SnapshotLoaded { generation: u64, root: TrieNode },
    /// The trie snapshot could not be fetched or decoded.
    SnapshotFailed { message: String },
}

/// Effect events produced by the resolver reducer.
#[derive(Debug, Clone)]
pub(crate) enum ResolverEffect {
    /// Request asynchronous resolution of `domain`.
    LookupRequested { domain: String },
    /// Request an asynchronous trie snapshot fetch.
    SnapshotRequested { generation: u64 },
    /// Hand a fresh snapshot to the trie renderer.
    SnapshotReady { root: TrieNode },
}
