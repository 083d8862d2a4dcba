use leptos::prelude::*;

use crate::pathways::Action;
use crate::store::use_store;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
	#[default]
	Pathways,
	Requirements,
	Compare,
}

impl Tab {
	const ALL: [Tab; 3] = [Tab::Pathways, Tab::Requirements, Tab::Compare];

	fn label(self) -> &'static str {
		match self {
			Tab::Pathways => "Engineering Pathways",
			Tab::Requirements => "Arcadia Course Requirements",
			Tab::Compare => "Compare Programs",
		}
	}
}

#[component]
fn SearchBox() -> impl IntoView {
	let store = use_store();
	let view_state = store.view;
	let search = Memo::new(move |_| view_state.with(|s| s.search_term.clone()));
	let (on_input, on_clear) = (store.clone(), store);

	view! {
		<div class="search-box">
			<input
				type="text"
				placeholder="Search majors, universities..."
				prop:value=move || search.get()
				on:input=move |ev| on_input.dispatch(Action::UpdateSearch(event_target_value(&ev)))
			/>
			<Show when=move || !search.get().is_empty()>
				<button
					class="search-clear"
					on:click={
						let store = on_clear.clone();
						move |_| store.dispatch(Action::UpdateSearch(String::new()))
					}
				>
					"✕"
				</button>
			</Show>
		</div>
	}
}

/// Title bar with the search box and, on the home page, the view tabs.
///
/// The search box is hidden while a non-graph tab is active.
#[component]
pub fn Header(#[prop(optional)] tab: Option<RwSignal<Tab>>) -> impl IntoView {
	let show_search = move || tab.is_none_or(|t| t.get() == Tab::Pathways);

	view! {
		<header class="app-header">
			<div class="app-title">
				<div>
					<h1>"Arcadia University Engineering Pathways"</h1>
					<p class="subtitle">"Your guide to dual-degree engineering programs"</p>
				</div>
				<Show when=show_search>
					<SearchBox />
				</Show>
			</div>
			{tab.map(|tab| {
				view! {
					<nav class="tabs">
						{Tab::ALL
							.into_iter()
							.map(|t| {
								view! {
									<button
										class="tab"
										class:active=move || tab.get() == t
										on:click=move |_| tab.set(t)
									>
										{t.label()}
									</button>
								}
							})
							.collect_view()}
					</nav>
				}
			})}
		</header>
	}
}
