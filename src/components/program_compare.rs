use leptos::prelude::*;

use super::special_tag::{FeatureTags, SpecialTag};
use crate::browse::compare::{ComparisonMetrics, ComparisonSet, MAX_COMPARED, ProgramPick, search_options};
use crate::browse::tooltips::{MAJOR_TOOLTIP, TagKind};
use crate::store::{PathwayStore, use_store};

#[component]
fn ProgramSelector(picks: RwSignal<ComparisonSet>) -> impl IntoView {
	let store = use_store();
	let term = RwSignal::new(String::new());
	let open = RwSignal::new(false);
	let is_full = move || picks.with(|p| p.is_full());

	let options = move || {
		let store = store.clone();
		let needle = term.get();
		let groups = search_options(store.dataset(), &needle);
		if groups.is_empty() {
			return view! { <div class="dropdown-empty">"No programs found"</div> }.into_any();
		}
		groups
			.into_iter()
			.map(|(university, programs)| {
				let rows = programs
					.into_iter()
					.map(|program| {
						let pick = ProgramPick::new(&university.id, &program.id);
						let chosen = picks.with(|p| p.contains(&pick));
						view! {
							<button
								class="dropdown-option"
								class:chosen=chosen
								disabled=chosen
								on:click=move |_| {
									let added = picks
										.try_update(|p| p.add(pick.clone()))
										.unwrap_or(false);
									if added {
										term.set(String::new());
										open.set(false);
									}
								}
							>
								{program.name.clone()}
								{chosen.then(|| view! { <span class="muted">" ✓ Selected"</span> })}
							</button>
						}
					})
					.collect_view();
				view! {
					<div class="dropdown-group">
						<div class="dropdown-group-title">{university.name.clone()}</div>
						{rows}
					</div>
				}
			})
			.collect_view()
			.into_any()
	};

	view! {
		<div class="program-selector">
			<input
				type="text"
				placeholder=move || {
					if is_full() {
						format!("Maximum {MAX_COMPARED} programs selected")
					} else {
						"Search and add programs to compare...".to_string()
					}
				}
				disabled=is_full
				prop:value=move || term.get()
				on:input=move |ev| {
					term.set(event_target_value(&ev));
					open.set(true);
				}
				on:focus=move |_| open.set(true)
			/>
			<Show when=move || open.get() && !is_full()>
				<div class="dropdown-backdrop" on:click=move |_| open.set(false)></div>
				<div class="dropdown">{options.clone()}</div>
			</Show>
		</div>
	}
}

fn comparison_card(
	store: &PathwayStore,
	picks: RwSignal<ComparisonSet>,
	index: usize,
	pick: &ProgramPick,
	metrics: &ComparisonMetrics,
) -> Option<AnyView> {
	let (university, program) = pick.resolve(store.dataset())?;
	let gpa = &university.requirements.gpa;
	let lowest_gpa = metrics.lowest_gpa == Some(index);
	let highest_gpa = metrics.highest_gpa == Some(index);
	let fewest = metrics.fewest_requirements == Some(index);
	let most = metrics.most_requirements == Some(index);

	let majors = store
		.dataset()
		.majors_for(program)
		.into_iter()
		.map(|m| view! { <SpecialTag kind=TagKind::Major text=m.name.clone() tooltip=MAJOR_TOOLTIP /> })
		.collect_view();
	let dual_degree = university
		.special_features
		.degree_info
		.as_ref()
		.map(|info| view! { <span class="pill pill-degree" title=info.clone()>"Dual Degree"</span> });
	let requirements = program
		.requirements
		.iter()
		.map(|r| view! { <li>{r.clone()}</li> })
		.collect_view();

	Some(
		view! {
			<div class="comparison-card">
				<div class="card-head">
					<button
						class="card-remove"
						aria-label="Remove program"
						on:click=move |_| picks.update(|p| p.remove(index))
					>
						"✕"
					</button>
					<h3>{program.name.clone()}</h3>
					<p>{university.name.clone()}</p>
				</div>
				<div class="metric" class:best=lowest_gpa class:worst=highest_gpa>
					<span class="muted">"GPA Requirement"</span>
					{lowest_gpa.then(|| view! { <span class="badge badge-best">"✓ Lowest"</span> })}
					{highest_gpa.then(|| view! { <span class="badge badge-worst">"Highest"</span> })}
					<p class="metric-value">
						{if gpa.is_specified() { gpa.as_str().to_string() } else { "Not specified".into() }}
					</p>
				</div>
				<div>
					<span class="muted">"Related Arcadia Majors"</span>
					<div class="pill-row">{majors}</div>
				</div>
				<div>
					<span class="muted">"Special Features"</span>
					<div class="pill-row">
						<FeatureTags university=university.clone() />
						{dual_degree}
					</div>
				</div>
				<div class="metric" class:best=fewest class:worst=most>
					<span class="muted">"Course Requirements"</span>
					{fewest.then(|| view! { <span class="badge badge-best">"✓ Fewest"</span> })}
					{most.then(|| view! { <span class="badge badge-worst">"Most"</span> })}
					<p class="metric-value">{program.requirements.len()}</p>
				</div>
				<ul class="card-requirements">{requirements}</ul>
			</div>
		}
		.into_any(),
	)
}

/// Side-by-side comparison of up to three programs.
#[component]
pub fn ProgramCompare() -> impl IntoView {
	let store = use_store();
	let picks = RwSignal::new(ComparisonSet::default());

	let cards = move || {
		let set = picks.get();
		if set.is_empty() {
			return view! {
				<div class="compare-empty">
					<h3>"No Programs Selected"</h3>
					<p class="muted">
						"Use the search bar above to add programs to compare. You can compare up to 3 programs at once."
					</p>
				</div>
			}
			.into_any();
		}
		let metrics = set.metrics(store.dataset());
		let cards = set
			.picks()
			.iter()
			.enumerate()
			.filter_map(|(i, pick)| comparison_card(&store, picks, i, pick, &metrics))
			.collect_view();
		view! { <div class="compare-grid" data-count=set.len().to_string()>{cards}</div> }.into_any()
	};

	view! {
		<div class="program-compare">
			<div class="compare-header">
				<div>
					<h2>"Compare Engineering Programs"</h2>
					<p class="muted">"Select up to 3 programs to compare side-by-side"</p>
				</div>
				<Show when=move || picks.with(|p| !p.is_empty())>
					<button class="clear-all" on:click=move |_| picks.update(|p| p.clear())>
						"Clear All (" {move || picks.with(|p| p.len())} ")"
					</button>
				</Show>
			</div>
			<ProgramSelector picks=picks />
			<div class="compare-legend">
				<span class="legend-best">"Best value"</span>
				<span class="legend-worst">"Highest requirement"</span>
				<span class="muted">{move || picks.with(|p| p.len())} " / " {MAX_COMPARED} " programs selected"</span>
			</div>
			{cards}
		</div>
	}
}
