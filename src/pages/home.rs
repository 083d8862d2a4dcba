use leptos::prelude::*;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::graph_panel::GraphPanel;
use crate::components::header::{Header, Tab};
use crate::components::info_panel::InfoPanel;
use crate::components::program_compare::ProgramCompare;
use crate::components::requirements::PreEngineeringRequirements;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let tab = RwSignal::new(Tab::default());

	view! {
		<main class="page">
			<Header tab=tab />
			{move || match tab.get() {
				Tab::Pathways => view! {
					<Breadcrumbs />
					<div class="pathways-layout">
						<GraphPanel />
						<InfoPanel />
					</div>
				}
				.into_any(),
				Tab::Requirements => view! { <PreEngineeringRequirements /> }.into_any(),
				Tab::Compare => view! { <ProgramCompare /> }.into_any(),
			}}
		</main>
	}
}
