use leptos::prelude::*;

use super::special_tag::FeatureTags;
use crate::browse::courses::{Semester, course_url, extract_course_code, next_semester, today};
use crate::data::{Dataset, Major, Program, University};
use crate::pathways::NodeType;
use crate::store::use_store;

/// Course name, linked to the course search when it carries a code.
#[component]
pub fn CourseLink(#[prop(into)] course: String, semester: Semester) -> impl IntoView {
	match extract_course_code(&course) {
		Some(code) => view! {
			<a href=course_url(&code, semester) target="_blank" rel="noopener noreferrer">
				{course}
			</a>
		}
		.into_any(),
		None => view! { <span>{course}</span> }.into_any(),
	}
}

fn major_details(major: &Major, semester: Semester) -> AnyView {
	let degree_types = major.degree_types.clone().map(|types| {
		view! {
			<section>
				<h3>"Degree Types"</h3>
				<div class="pill-row">
					{types.into_iter().map(|d| view! { <span class="pill pill-major">{d}</span> }).collect_view()}
				</div>
			</section>
		}
	});
	let courses = (!major.courses.is_empty()).then(|| {
		let items = major
			.courses
			.iter()
			.map(|c| view! { <li><CourseLink course=c.clone() semester=semester /></li> })
			.collect_view();
		view! {
			<section>
				<h3>"Required Courses"</h3>
				<ul>{items}</ul>
			</section>
		}
	});

	view! {
		<h2 class="info-title major">{major.name.clone()}</h2>
		<p>{major.description.clone()}</p>
		{degree_types}
		{courses}
	}
	.into_any()
}

fn university_details(university: &University) -> AnyView {
	let programs = university
		.programs
		.iter()
		.map(|p| view! { <li>{p.name.clone()}</li> })
		.collect_view();
	let degree_info = university
		.special_features
		.degree_info
		.clone()
		.map(|info| view! { <p class="degree-info">{info}</p> });

	view! {
		<h2 class="info-title university">{university.name.clone()}</h2>
		<div class="pill-row">
			<FeatureTags university=university.clone() />
		</div>
		{degree_info}
		<section>
			<h3>"University Requirements"</h3>
			<p><strong>"GPA: "</strong>{university.requirements.gpa.as_str().to_string()}</p>
			<p><strong>"Notes: "</strong>{university.requirements.notes.clone()}</p>
		</section>
		<section>
			<h3>"Programs"</h3>
			<ul>{programs}</ul>
		</section>
	}
	.into_any()
}

fn program_details(dataset: &Dataset, university: &University, program: &Program) -> AnyView {
	let requirements = program
		.requirements
		.iter()
		.map(|r| view! { <li>{r.clone()}</li> })
		.collect_view();
	let majors = dataset
		.majors_for(program)
		.into_iter()
		.map(|m| view! { <span class="pill pill-major">{m.name.clone()}</span> })
		.collect_view();

	view! {
		<h2 class="info-title program">{program.name.clone()}</h2>
		<p class="muted">"at " {university.name.clone()}</p>
		<section>
			<h3>"Related Arcadia Majors"</h3>
			<div class="pill-row">{majors}</div>
		</section>
		<section>
			<h3>"Program Requirements"</h3>
			<ul>{requirements}</ul>
		</section>
	}
	.into_any()
}

/// Details for the focused node, or a prompt when nothing is focused.
#[component]
pub fn InfoPanel() -> impl IntoView {
	let store = use_store();
	let view_state = store.view;
	let (year, month, day) = today();
	let semester = next_semester(year, month, day);

	move || {
		let focused = view_state.with(|s| s.focused_node_id.clone());
		let dataset = store.dataset();
		let details = focused
			.and_then(|id| store.graph().node(&id))
			.and_then(|node| match node.node_type() {
				NodeType::Major => dataset.major(&node.id).map(|m| major_details(m, semester)),
				NodeType::University => dataset.university(&node.id).map(university_details),
				NodeType::Program => dataset
					.program(&node.id)
					.map(|(u, p)| program_details(dataset, u, p)),
			});

		let content = details.unwrap_or_else(|| {
			view! {
				<h2 class="info-title">"Select a Node"</h2>
				<p class="muted">"Click on a major, university, or program to see more details here."</p>
			}
			.into_any()
		});
		view! { <aside class="info-panel">{content}</aside> }
	}
}
