use super::graph::{GraphNode, NodeType, PathwayGraph};
use super::view_state::{Action, ViewState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrumbKind {
	Home,
	University,
	Major,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Breadcrumb {
	pub id: String,
	pub name: String,
	pub kind: CrumbKind,
	/// Dispatched when the crumb is clicked.
	pub action: Action,
}

/// Home, then the selected university and major when they resolve.
pub fn breadcrumbs(state: &ViewState, graph: &PathwayGraph) -> Vec<Breadcrumb> {
	let mut trail = vec![Breadcrumb {
		id: "home".into(),
		name: "Home".into(),
		kind: CrumbKind::Home,
		action: Action::NavigateHome,
	}];

	let selected = [
		(state.selected_university_id.as_deref(), CrumbKind::University),
		(state.selected_major_id.as_deref(), CrumbKind::Major),
	];
	for (id, kind) in selected {
		if let Some(node) = id.and_then(|id| graph.node(id)) {
			let action = match kind {
				CrumbKind::University => Action::SelectUniversity(node.id.clone()),
				_ => Action::FocusNode(node.id.clone()),
			};
			trail.push(Breadcrumb {
				id: node.id.clone(),
				name: node.name.clone(),
				kind,
				action,
			});
		}
	}

	trail
}

/// Action for picking a university from the breadcrumb dropdown.
pub fn university_choice(state: &ViewState, university_id: &str) -> Option<Action> {
	if state.selected_university_id.as_deref() == Some(university_id) {
		return None;
	}
	Some(match &state.selected_major_id {
		Some(major_id) => Action::SwitchUniversity {
			university_id: university_id.to_string(),
			current_major_id: Some(major_id.clone()),
		},
		None => Action::SelectUniversity(university_id.to_string()),
	})
}

/// Majors offered in the dropdown next to the selected university.
pub fn major_choices<'a>(state: &ViewState, graph: &'a PathwayGraph) -> Vec<&'a GraphNode> {
	let Some(university_id) = state.selected_university_id.as_deref() else {
		return Vec::new();
	};
	graph
		.connected_major_ids(university_id)
		.iter()
		.filter_map(|id| graph.node(id))
		.filter(|n| n.node_type() == NodeType::Major)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::fixtures::sample;

	fn graph() -> PathwayGraph {
		PathwayGraph::derive(&sample())
	}

	#[test]
	fn trail_follows_selection() {
		let graph = graph();
		let home = breadcrumbs(&ViewState::default(), &graph);
		assert_eq!(home.len(), 1);
		assert_eq!(home[0].kind, CrumbKind::Home);

		let state = ViewState::default()
			.reduce(Action::SelectUniversity("drexel".into()), &graph)
			.reduce(
				Action::SelectMajor {
					major_id: "chemistry".into(),
					university_id: None,
				},
				&graph,
			);
		let names: Vec<_> = breadcrumbs(&state, &graph)
			.into_iter()
			.map(|c| c.name)
			.collect();
		assert_eq!(names, vec!["Home", "Drexel University", "Chemistry"]);
	}

	#[test]
	fn every_crumb_navigates() {
		let graph = graph();
		let state = ViewState::default()
			.reduce(Action::SelectUniversity("drexel".into()), &graph)
			.reduce(
				Action::SelectMajor {
					major_id: "chemistry".into(),
					university_id: None,
				},
				&graph,
			);
		let actions: Vec<_> = breadcrumbs(&state, &graph)
			.into_iter()
			.map(|c| c.action)
			.collect();
		assert_eq!(
			actions,
			vec![
				Action::NavigateHome,
				Action::SelectUniversity("drexel".into()),
				Action::FocusNode("chemistry".into()),
			]
		);

		let back = state.reduce(actions[1].clone(), &graph);
		assert_eq!(back.selected_major_id, None);
		assert_eq!(back.focused_node_id.as_deref(), Some("drexel"));
	}

	#[test]
	fn unresolved_ids_are_omitted() {
		let graph = graph();
		let state = ViewState::default().reduce(Action::SelectUniversity("gone".into()), &graph);
		assert_eq!(breadcrumbs(&state, &graph).len(), 1);
	}

	#[test]
	fn dropdown_choice_depends_on_selected_major() {
		let graph = graph();
		let state = ViewState::default().reduce(Action::SelectUniversity("drexel".into()), &graph);
		assert_eq!(university_choice(&state, "drexel"), None);
		assert_eq!(
			university_choice(&state, "pitt"),
			Some(Action::SelectUniversity("pitt".into()))
		);

		let with_major = state.reduce(
			Action::SelectMajor {
				major_id: "mathematics".into(),
				university_id: None,
			},
			&graph,
		);
		assert_eq!(
			university_choice(&with_major, "pitt"),
			Some(Action::SwitchUniversity {
				university_id: "pitt".into(),
				current_major_id: Some("mathematics".into()),
			})
		);
	}

	#[test]
	fn major_choices_are_connected_majors() {
		let graph = graph();
		assert!(major_choices(&ViewState::default(), &graph).is_empty());
		let state = ViewState::default().reduce(Action::SelectUniversity("pitt".into()), &graph);
		let names: Vec<_> = major_choices(&state, &graph)
			.into_iter()
			.map(|n| n.name.as_str())
			.collect();
		assert_eq!(names, vec!["Mathematics"]);
	}
}
