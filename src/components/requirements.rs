use leptos::prelude::*;

use super::info_panel::CourseLink;
use crate::browse::courses::{Semester, auc_urls, next_semester, today};
use crate::data::{AucCategory, Course, CourseOption, RequirementCategory};
use crate::store::use_store;

fn course_row(course: &Course, semester: Semester) -> AnyView {
	let label = format!("{} {}", course.code, course.name);
	let note = course.note.clone().map(|n| view! { <div class="course-note">{n}</div> });
	view! {
		<div class="course-row">
			<div>
				<CourseLink course=label semester=semester />
				{note}
			</div>
			<span class="credits">{course.credits} " credits"</span>
		</div>
	}
	.into_any()
}

fn course_option(option: &CourseOption, semester: Semester) -> AnyView {
	let courses = option
		.courses
		.iter()
		.map(|c| course_row(c, semester))
		.collect_view();
	let note = option.note.clone().map(|n| view! { <div class="muted">{n}</div> });
	view! {
		<div class="course-option">
			<div class="course-option-prompt">{option.prompt()}</div>
			{courses}
			{note}
		</div>
	}
	.into_any()
}

fn category(category: &RequirementCategory, semester: Semester) -> AnyView {
	let courses = category
		.courses
		.iter()
		.map(|c| course_row(c, semester))
		.collect_view();
	let options = category
		.course_options
		.iter()
		.map(|o| course_option(o, semester))
		.collect_view();
	let total = category
		.total_credits
		.map(|credits| view! { <span class="pill">{credits} " credits total"</span> });
	let note = category.note.clone().map(|n| view! { <div class="category-note">{n}</div> });

	view! {
		<section class="card requirement-category">
			<div class="category-header">
				<div>
					<h3>{category.name.clone()}</h3>
					<p class="muted">{category.description.clone()}</p>
				</div>
				{total}
			</div>
			{courses}
			{options}
			{note}
		</section>
	}
	.into_any()
}

fn auc_link(auc: &AucCategory, semester: Semester) -> AnyView {
	let links = auc_urls(&auc.code, semester)
		.into_iter()
		.enumerate()
		.map(|(i, url)| {
			let text = if i == 0 { "Find courses".to_string() } else { format!("More ({})", i + 1) };
			view! { <a href=url target="_blank" rel="noopener noreferrer">{text}</a> }
		})
		.collect_view();
	view! {
		<li>
			<strong>{auc.code.clone()}</strong>
			" "
			{auc.name.clone()}
			" "
			{links}
		</li>
	}
	.into_any()
}

/// Courses every dual-degree student completes at Arcadia.
#[component]
pub fn PreEngineeringRequirements() -> impl IntoView {
	let store = use_store();
	let requirements = store.dataset().requirements();
	let (year, month, day) = today();
	let semester = next_semester(year, month, day);

	let summary = [
		("Technical Credits", requirements.total_technical_credits),
		("Non-Technical Credits", requirements.non_technical_credits),
		("Total Credits", requirements.total_credits()),
	]
	.into_iter()
	.map(|(label, value)| {
		view! {
			<div class="credit-card">
				<div class="credit-value">{value}</div>
				<div>{label}</div>
			</div>
		}
	})
	.collect_view();
	let categories = requirements
		.categories
		.iter()
		.map(|c| category(c, semester))
		.collect_view();
	let aucs = (!requirements.auc_categories.is_empty()).then(|| {
		let items = requirements
			.auc_categories
			.iter()
			.map(|a| auc_link(a, semester))
			.collect_view();
		view! {
			<section class="card">
				<h3>"Arcadia University Curriculum"</h3>
				<p class="muted">"Course search for " {semester.term.to_string()} " " {semester.year}</p>
				<ul>{items}</ul>
			</section>
		}
	});

	view! {
		<div class="requirements-page">
			<h1>"Pre-Engineering Requirements"</h1>
			<p class="muted">"Required courses for all students in Arcadia's dual-degree engineering programs"</p>
			<div class="credit-summary">{summary}</div>

			<h2>"Technical Requirements"</h2>
			{categories}

			<section class="card">
				<h3>"Non-Technical Requirements"</h3>
				<p><strong>{requirements.non_technical_credits} " non-technical credit hours (Humanities and Social Sciences)"</strong></p>
				<p>{requirements.transfer_requirements.clone()}</p>
			</section>
			<section class="card">
				<h3>"Major Requirements"</h3>
				<p>{requirements.major_requirements.clone()}</p>
			</section>
			{aucs}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Dataset;

	#[test]
	fn section_views_own_their_text() {
		let semester = next_semester(2025, 3, 1);
		let dataset = Dataset::bundled().unwrap();
		let requirements = dataset.requirements();
		let mut views: Vec<AnyView> = requirements
			.categories
			.iter()
			.map(|c| category(c, semester))
			.collect();
		views.extend(requirements.auc_categories.iter().map(|a| auc_link(a, semester)));
		drop(dataset);
		assert!(!views.is_empty());
	}
}
