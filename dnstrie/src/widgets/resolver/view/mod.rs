pub(crate) mod history_list;
pub(crate) mod resolve_form;
pub(crate) mod result_panel;
