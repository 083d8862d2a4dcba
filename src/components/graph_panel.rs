use leptos::prelude::*;

use super::force_graph::{CanvasData, ForceGraphCanvas};
use crate::pathways::LayoutConfig;
use crate::store::use_store;

/// Force-graph canvas showing the nodes visible in the current view state.
#[component]
pub fn GraphPanel() -> impl IntoView {
	let store = use_store();
	let view_state = store.view;
	let layout = LayoutConfig::default();

	let data = {
		let store = store.clone();
		let layout = layout.clone();
		Memo::new(move |_| view_state.with(|s| CanvasData::from_view(store.graph(), s, &layout)))
	};
	let on_node_click = Callback::new(move |id: String| store.click(&id));

	view! {
		<div class="graph-panel">
			<ForceGraphCanvas data=data on_node_click=on_node_click layout=layout />
			<p class="graph-hint">"Click a university to focus it. Drag nodes, scroll to zoom, drag the background to pan."</p>
		</div>
	}
}
