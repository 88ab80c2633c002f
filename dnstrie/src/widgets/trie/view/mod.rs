pub(crate) mod trie_panel;
