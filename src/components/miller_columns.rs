use leptos::prelude::*;

use crate::browse::miller::{MillerSelection, filter_programs, filter_universities, matching_majors};
use crate::store::use_store;

fn plural(n: usize, word: &str) -> String {
	if n == 1 {
		format!("{n} {word}")
	} else {
		format!("{n} {word}s")
	}
}

/// University, then program, then details; each column narrows the next.
///
/// Filtered by the shared search term.
#[component]
pub fn MillerColumns() -> impl IntoView {
	let store = use_store();
	let view_state = store.view;
	let selection = RwSignal::new(MillerSelection::default());
	let search = Memo::new(move |_| view_state.with(|s| s.search_term.clone()));

	let universities = {
		let store = store.clone();
		move || {
			let term = search.get();
			let selected = selection.with(|s| s.university_id.clone());
			let list = filter_universities(store.dataset(), &term);
			let header = view! {
				<div class="column-header">
					<h2>"Universities (" {list.len()} ")"</h2>
					{(!term.is_empty()).then(|| view! { <span class="badge">"Filtered"</span> })}
				</div>
			};
			let rows = list
				.into_iter()
				.map(|u| {
					let id = u.id.clone();
					let gpa = u
						.requirements
						.gpa
						.is_specified()
						.then(|| view! { <span class="gpa">" • GPA: " {u.requirements.gpa.as_str().to_string()}</span> });
					view! {
						<div
							class="column-row"
							class:selected={selected.as_deref() == Some(u.id.as_str())}
							on:click=move |_| selection.update(|s| *s = s.select_university(&id))
						>
							<h3>{u.name.clone()}</h3>
							<p class="muted">{plural(u.programs.len(), "program")} {gpa}</p>
						</div>
					}
				})
				.collect_view();
			view! {
				{header}
				<div class="column-body">{rows}</div>
			}
		}
	};

	let programs = {
		let store = store.clone();
		move || {
			let term = search.get();
			let dataset = store.dataset();
			let current = selection.get();
			let Some(university) = current.university(dataset) else {
				return view! {
					<div class="column-header"><h2>"Programs"</h2></div>
					<div class="column-empty">"Select a university to view programs"</div>
				}
				.into_any();
			};
			let list = filter_programs(dataset, university, &term);
			let header = view! {
				<div class="column-header">
					<h2>"Programs (" {list.len()} ")"</h2>
					{(!term.is_empty()).then(|| view! { <span class="badge">"Filtered"</span> })}
				</div>
			};
			let rows = list
				.into_iter()
				.map(|p| {
					let id = p.id.clone();
					let majors = matching_majors(dataset, p)
						.into_iter()
						.map(|m| view! { <span class="pill pill-major">{m.name.clone()}</span> })
						.collect_view();
					view! {
						<div
							class="column-row"
							class:selected={current.program_id.as_deref() == Some(p.id.as_str())}
							on:click=move |_| selection.update(|s| *s = s.select_program(&id))
						>
							<h3>{p.name.clone()}</h3>
							<div class="pill-row">{majors}</div>
						</div>
					}
				})
				.collect_view();
			view! {
				{header}
				<div class="column-body">{rows}</div>
			}
			.into_any()
		}
	};

	let details = move || {
		let dataset = store.dataset();
		let current = selection.get();
		let (Some(university), Some(program)) = (current.university(dataset), current.program(dataset)) else {
			return view! { <div class="column-empty">"Select a program to view requirements"</div> }.into_any();
		};
		let gpa = &university.requirements.gpa;
		let requirements = program
			.requirements
			.iter()
			.map(|r| view! { <li>{r.clone()}</li> })
			.collect_view();
		let stats = [
			("Total Programs", university.programs.len().to_string()),
			(
				"Required GPA",
				if gpa.is_specified() { gpa.as_str().to_string() } else { "Not specified".into() },
			),
			("Matching Majors", matching_majors(dataset, program).len().to_string()),
			("Requirements", program.requirements.len().to_string()),
		];

		view! {
			<h3 class="info-title major">{program.name.clone()}</h3>
			<p class="muted">"at " {university.name.clone()}</p>
			<section class="card">
				<h4>"University Requirements"</h4>
				{gpa.is_specified().then(|| view! { <p><strong>"GPA Required: "</strong>{gpa.as_str().to_string()}</p> })}
				<p>{university.requirements.notes.clone()}</p>
			</section>
			{(!program.requirements.is_empty()).then(|| view! {
				<section class="card">
					<h4>"Program Requirements"</h4>
					<ul>{requirements}</ul>
				</section>
			})}
			<section class="card stats">
				<h4>"Quick Stats"</h4>
				{stats
					.into_iter()
					.map(|(label, value)| view! { <div><span class="muted">{label}</span><p>{value}</p></div> })
					.collect_view()}
			</section>
		}
		.into_any()
	};

	view! {
		<div class="miller-columns">
			<div class="column">{universities}</div>
			<div class="column">{programs}</div>
			<div class="column column-details">
				<div class="column-header"><h2>"Details"</h2></div>
				<div class="column-body">{details}</div>
			</div>
		</div>
	}
}
