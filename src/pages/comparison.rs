use leptos::prelude::*;

use crate::components::graph_panel::GraphPanel;
use crate::components::header::Header;
use crate::components::miller_columns::MillerColumns;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ViewMode {
	Graph,
	Miller,
	#[default]
	Split,
}

impl ViewMode {
	const ALL: [ViewMode; 3] = [ViewMode::Graph, ViewMode::Miller, ViewMode::Split];

	fn label(self) -> &'static str {
		match self {
			ViewMode::Graph => "📊 Graph View",
			ViewMode::Miller => "📋 Miller Columns",
			ViewMode::Split => "🔄 Side-by-Side",
		}
	}
}

/// Graph and Miller columns over the same data, alone or side by side.
#[component]
pub fn Comparison() -> impl IntoView {
	let mode = RwSignal::new(ViewMode::default());

	let buttons = ViewMode::ALL
		.into_iter()
		.map(|m| {
			view! {
				<button class="mode-button" class:active=move || mode.get() == m on:click=move |_| mode.set(m)>
					{m.label()}
				</button>
			}
		})
		.collect_view();

	view! {
		<main class="page">
			<Header />
			<section class="card mode-selector">
				<h2>"🔍 Interface Comparison"</h2>
				<div class="mode-buttons">{buttons}</div>
				<div class="mode-notes">
					<div>
						<h3>"📊 Graph Approach"</h3>
						<ul>
							<li>"Shows all connections visually"</li>
							<li>"Good for exploring relationships"</li>
						</ul>
					</div>
					<div>
						<h3>"📋 Miller Columns"</h3>
						<ul>
							<li>"Progressive disclosure, step by step"</li>
							<li>"Better for focused decision-making"</li>
						</ul>
					</div>
				</div>
			</section>
			{move || match mode.get() {
				ViewMode::Graph => view! { <GraphPanel /> }.into_any(),
				ViewMode::Miller => view! { <MillerColumns /> }.into_any(),
				ViewMode::Split => view! {
					<div class="split">
						<div>
							<h3>"📊 Graph"</h3>
							<GraphPanel />
						</div>
						<div>
							<h3>"📋 Miller Columns"</h3>
							<MillerColumns />
						</div>
					</div>
				}
				.into_any(),
			}}
		</main>
	}
}
