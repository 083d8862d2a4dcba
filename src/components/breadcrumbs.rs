use leptos::prelude::*;

use crate::pathways::Action;
use crate::pathways::breadcrumbs::{CrumbKind, breadcrumbs, major_choices, university_choice};
use crate::store::use_store;

/// Trail of Home / university / major with dropdowns to jump sideways.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
	let store = use_store();
	let view_state = store.view;

	let trail = {
		let store = store.clone();
		move || {
			let crumbs = view_state.with(|s| breadcrumbs(s, store.graph()));
			crumbs
				.into_iter()
				.map(|crumb| {
					let store = store.clone();
					let class = match crumb.kind {
						CrumbKind::Home => "crumb crumb-home",
						CrumbKind::University => "crumb crumb-university",
						CrumbKind::Major => "crumb crumb-major",
					};
					let action = crumb.action;
					let sep = (crumb.kind != CrumbKind::Home).then(|| view! { <span class="crumb-sep">"/"</span> });
					view! {
						{sep}
						<button class=class on:click=move |_| store.dispatch(action.clone())>
							{crumb.name}
						</button>
					}
				})
				.collect_view()
		}
	};

	let university_select = {
		let store = store.clone();
		let options = store
			.graph()
			.universities()
			.map(|u| (u.id.clone(), u.name.clone()))
			.collect::<Vec<_>>();
		view! {
			<select
				class="crumb-select"
				prop:value=move || view_state.with(|s| s.selected_university_id.clone().unwrap_or_default())
				on:change=move |ev| {
					let id = event_target_value(&ev);
					if id.is_empty() {
						store.dispatch(Action::NavigateHome);
					} else if let Some(action) = view_state.with_untracked(|s| university_choice(s, &id)) {
						store.dispatch(action);
					}
				}
			>
				<option value="">"All universities"</option>
				{options
					.into_iter()
					.map(|(id, name)| view! { <option value=id>{name}</option> })
					.collect_view()}
			</select>
		}
	};

	let major_select = move || {
		let store = store.clone();
		let (university_id, choices) = view_state.with(|s| {
			let choices = major_choices(s, store.graph())
				.into_iter()
				.map(|m| (m.id.clone(), m.name.clone()))
				.collect::<Vec<_>>();
			(s.selected_university_id.clone(), choices)
		});
		let university_id = university_id?;
		Some(view! {
			<select
				class="crumb-select"
				prop:value=move || view_state.with(|s| s.selected_major_id.clone().unwrap_or_default())
				on:change=move |ev| {
					let major_id = event_target_value(&ev);
					if major_id.is_empty() {
						store.dispatch(Action::SelectUniversity(university_id.clone()));
					} else {
						store.dispatch(Action::SelectMajor {
							major_id,
							university_id: Some(university_id.clone()),
						});
					}
				}
			>
				<option value="">"Any major"</option>
				{choices
					.into_iter()
					.map(|(id, name)| view! { <option value=id>{name}</option> })
					.collect_view()}
			</select>
		})
	};

	view! {
		<nav class="breadcrumbs">
			<div class="trail">{trail}</div>
			<div class="crumb-controls">{university_select} {major_select}</div>
		</nav>
	}
}
