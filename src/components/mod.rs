pub mod breadcrumbs;
pub mod force_graph;
pub mod graph_panel;
pub mod header;
pub mod info_panel;
pub mod miller_columns;
pub mod program_compare;
pub mod requirements;
pub mod special_tag;
