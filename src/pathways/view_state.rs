use std::collections::HashSet;

use log::{debug, info};

use super::graph::{GraphEdge, GraphNode, NodeKind, NodeType, PathwayGraph};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
	/// Majors and universities only.
	#[default]
	Overview,
	/// Adds the programs of the selected university.
	UniversityFocused,
}

/// Navigation state shared by the graph, breadcrumbs and info panel.
///
/// Only [`ViewState::reduce`] produces new states. `selected_university_id`
/// is always set while the mode is [`Mode::UniversityFocused`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
	pub mode: Mode,
	pub selected_university_id: Option<String>,
	pub selected_major_id: Option<String>,
	pub expanded_universities: HashSet<String>,
	/// Majors connected to the selected university, used for highlighting.
	pub connected_majors: HashSet<String>,
	pub search_term: String,
	/// Node whose details are shown.
	pub focused_node_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
	NavigateHome,
	SelectUniversity(String),
	SelectMajor {
		major_id: String,
		university_id: Option<String>,
	},
	SwitchUniversity {
		university_id: String,
		current_major_id: Option<String>,
	},
	UpdateSearch(String),
	FocusNode(String),
}

impl ViewState {
	pub fn reduce(&self, action: Action, graph: &PathwayGraph) -> ViewState {
		match action {
			Action::NavigateHome => {
				info!("Navigating home");
				ViewState::default()
			}
			Action::SelectUniversity(university_id) => {
				info!("Selecting university {university_id}");
				let connected = graph.connected_major_ids(&university_id);
				ViewState {
					mode: Mode::UniversityFocused,
					expanded_universities: HashSet::from([university_id.clone()]),
					connected_majors: connected.into_iter().collect(),
					selected_major_id: None,
					focused_node_id: Some(university_id.clone()),
					selected_university_id: Some(university_id),
					search_term: self.search_term.clone(),
				}
			}
			Action::SelectMajor {
				major_id,
				university_id,
			} => {
				info!("Selecting major {major_id}");
				ViewState {
					selected_university_id: university_id
						.or_else(|| self.selected_university_id.clone()),
					focused_node_id: Some(major_id.clone()),
					selected_major_id: Some(major_id),
					..self.clone()
				}
			}
			Action::SwitchUniversity {
				university_id,
				current_major_id,
			} => {
				let connected: HashSet<String> =
					graph.connected_major_ids(&university_id).into_iter().collect();
				let kept = current_major_id.filter(|m| connected.contains(m));
				info!(
					"Switching to university {university_id} (keeping major: {})",
					kept.as_deref().unwrap_or("none")
				);
				ViewState {
					expanded_universities: HashSet::from([university_id.clone()]),
					connected_majors: connected,
					focused_node_id: Some(kept.clone().unwrap_or_else(|| university_id.clone())),
					selected_major_id: kept,
					selected_university_id: Some(university_id),
					..self.clone()
				}
			}
			Action::UpdateSearch(search_term) => {
				debug!("Search term: {search_term:?}");
				ViewState {
					search_term,
					..self.clone()
				}
			}
			Action::FocusNode(node_id) => ViewState {
				focused_node_id: Some(node_id),
				..self.clone()
			},
		}
	}

	/// Map a click on a node to the transition for its kind.
	pub fn click(&self, node_id: &str, graph: &PathwayGraph) -> ViewState {
		match self.action_for_click(node_id, graph) {
			Some(action) => self.reduce(action, graph),
			None => self.clone(),
		}
	}

	fn action_for_click(&self, node_id: &str, graph: &PathwayGraph) -> Option<Action> {
		let node = graph.node(node_id)?;
		Some(match node.kind {
			NodeKind::University => Action::SelectUniversity(node.id.clone()),
			NodeKind::Major { .. } => Action::SelectMajor {
				major_id: node.id.clone(),
				university_id: self.selected_university_id.clone(),
			},
			NodeKind::Program { .. } => Action::FocusNode(node.id.clone()),
		})
	}

	pub fn is_node_visible(&self, node: &GraphNode) -> bool {
		if !self.search_term.is_empty() && !node.matches(&self.search_term.to_lowercase()) {
			return false;
		}

		match self.mode {
			Mode::Overview => node.node_type() != NodeType::Program,
			Mode::UniversityFocused => match node.university_id() {
				Some(owner) => self.selected_university_id.as_deref() == Some(owner),
				None => true,
			},
		}
	}

	pub fn visible_nodes<'a>(&self, graph: &'a PathwayGraph) -> Vec<&'a GraphNode> {
		graph
			.nodes()
			.iter()
			.filter(|n| self.is_node_visible(n))
			.collect()
	}

	/// Edges whose endpoints are both visible.
	pub fn visible_edges<'a>(&self, graph: &'a PathwayGraph) -> Vec<&'a GraphEdge> {
		let visible: HashSet<&str> = self
			.visible_nodes(graph)
			.into_iter()
			.map(|n| n.id.as_str())
			.collect();
		graph
			.edges()
			.iter()
			.filter(|e| visible.contains(e.source_id.as_str()) && visible.contains(e.target_id.as_str()))
			.collect()
	}

	pub fn is_connected_major(&self, node_id: &str) -> bool {
		self.connected_majors.contains(node_id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Dataset;
	use crate::data::fixtures::{empty_requirements, major, program, sample, university};
	use crate::pathways::graph::EdgeKind;

	fn graph() -> PathwayGraph {
		PathwayGraph::derive(&sample())
	}

	fn ids(nodes: Vec<&GraphNode>) -> Vec<&str> {
		nodes.into_iter().map(|n| n.id.as_str()).collect()
	}

	fn focused_invariant_holds(state: &ViewState) -> bool {
		state.mode == Mode::Overview || state.selected_university_id.is_some()
	}

	#[test]
	fn navigate_home_resets_everything() {
		let graph = graph();
		let state = ViewState::default()
			.reduce(Action::SelectUniversity("drexel".into()), &graph)
			.reduce(
				Action::SelectMajor {
					major_id: "chemistry".into(),
					university_id: None,
				},
				&graph,
			)
			.reduce(Action::UpdateSearch("chem".into()), &graph)
			.reduce(Action::NavigateHome, &graph);
		assert_eq!(state, ViewState::default());
		assert_eq!(state.mode, Mode::Overview);
		assert!(state.selected_university_id.is_none());
		assert!(state.selected_major_id.is_none());
	}

	#[test]
	fn select_university_focuses_and_collects_connected_majors() {
		let graph = graph();
		let state = ViewState::default()
			.reduce(
				Action::SelectMajor {
					major_id: "chemistry".into(),
					university_id: None,
				},
				&graph,
			)
			.reduce(Action::SelectUniversity("pitt".into()), &graph);
		assert_eq!(state.mode, Mode::UniversityFocused);
		assert_eq!(state.selected_university_id.as_deref(), Some("pitt"));
		assert!(state.selected_major_id.is_none());
		assert_eq!(state.connected_majors, HashSet::from(["mathematics".to_string()]));
		assert_eq!(state.focused_node_id.as_deref(), Some("pitt"));
	}

	#[test]
	fn connected_majors_for_a_university_with_two_majors() {
		let dataset = Dataset::new(
			vec![
				major("mathematics", "Mathematics"),
				major("computer-science", "Computer Science"),
				major("chemistry", "Chemistry"),
			],
			vec![university(
				"drexel",
				"Drexel University",
				"N/A",
				vec![
					program(
						"computer",
						"Computer Engineering",
						&["computer-science", "mathematics"],
					),
					program("civil", "Civil Engineering", &["mathematics"]),
				],
			)],
			empty_requirements(),
		)
		.unwrap();
		let graph = PathwayGraph::derive(&dataset);
		let state = ViewState::default().reduce(Action::SelectUniversity("drexel".into()), &graph);
		assert_eq!(
			state.connected_majors,
			HashSet::from(["mathematics".to_string(), "computer-science".to_string()])
		);
	}

	#[test]
	fn select_major_can_retarget_university() {
		let graph = graph();
		let state = ViewState::default()
			.reduce(Action::SelectUniversity("drexel".into()), &graph)
			.reduce(
				Action::SelectMajor {
					major_id: "mathematics".into(),
					university_id: Some("pitt".into()),
				},
				&graph,
			);
		assert_eq!(state.selected_major_id.as_deref(), Some("mathematics"));
		assert_eq!(state.selected_university_id.as_deref(), Some("pitt"));

		let kept = state.reduce(
			Action::SelectMajor {
				major_id: "chemistry".into(),
				university_id: None,
			},
			&graph,
		);
		assert_eq!(kept.selected_university_id.as_deref(), Some("pitt"));
	}

	#[test]
	fn switch_university_keeps_reachable_major_only() {
		let graph = graph();
		let base = ViewState::default().reduce(Action::SelectUniversity("drexel".into()), &graph);

		let kept = base.reduce(
			Action::SwitchUniversity {
				university_id: "pitt".into(),
				current_major_id: Some("mathematics".into()),
			},
			&graph,
		);
		assert_eq!(kept.selected_university_id.as_deref(), Some("pitt"));
		assert_eq!(kept.selected_major_id.as_deref(), Some("mathematics"));
		assert_eq!(kept.focused_node_id.as_deref(), Some("mathematics"));

		let cleared = base.reduce(
			Action::SwitchUniversity {
				university_id: "pitt".into(),
				current_major_id: Some("chemistry".into()),
			},
			&graph,
		);
		assert!(cleared.selected_major_id.is_none());
		assert_eq!(cleared.focused_node_id.as_deref(), Some("pitt"));
		assert!(focused_invariant_holds(&cleared));
	}

	#[test]
	fn search_does_not_change_selection() {
		let graph = graph();
		let base = ViewState::default().reduce(Action::SelectUniversity("drexel".into()), &graph);
		let searched = base.reduce(Action::UpdateSearch("Chem".into()), &graph);
		assert_eq!(searched.mode, base.mode);
		assert_eq!(searched.selected_university_id, base.selected_university_id);
		assert_eq!(searched.search_term, "Chem");
	}

	#[test]
	fn overview_never_shows_programs() {
		let graph = graph();
		for term in ["", "engineering", "chemical", "drexel", "xyz"] {
			let state = ViewState::default().reduce(Action::UpdateSearch(term.into()), &graph);
			assert!(
				state
					.visible_nodes(&graph)
					.iter()
					.all(|n| n.node_type() != NodeType::Program),
				"program visible for {term:?}"
			);
		}
		assert_eq!(
			ids(ViewState::default().visible_nodes(&graph)),
			vec!["mathematics", "computer-science", "chemistry", "drexel", "pitt"]
		);
	}

	#[test]
	fn focused_mode_shows_selected_programs_only() {
		let graph = graph();
		let state = ViewState::default().reduce(Action::SelectUniversity("drexel".into()), &graph);
		let visible = ids(state.visible_nodes(&graph));
		assert!(visible.contains(&"chemical"));
		assert!(visible.contains(&"pitt"));
		assert!(!visible.contains(&"industrial"));
	}

	#[test]
	fn search_results_are_a_subset_of_unfiltered() {
		let graph = graph();
		let bases = [
			ViewState::default(),
			ViewState::default().reduce(Action::SelectUniversity("drexel".into()), &graph),
		];
		for base in bases {
			let all: HashSet<&str> = base
				.visible_nodes(&graph)
				.into_iter()
				.map(|n| n.id.as_str())
				.collect();
			for term in ["a", "CHEM", "engineering", "organic", "university", "zzz", " "] {
				let filtered = base.reduce(Action::UpdateSearch(term.into()), &graph);
				for node in filtered.visible_nodes(&graph) {
					assert!(all.contains(node.id.as_str()), "{} leaked for {term:?}", node.id);
				}
			}
		}
	}

	#[test]
	fn search_is_case_insensitive_and_matches_courses() {
		let graph = graph();
		let state = ViewState::default().reduce(Action::UpdateSearch("ORGANIC".into()), &graph);
		assert_eq!(ids(state.visible_nodes(&graph)), vec!["chemistry"]);
	}

	#[test]
	fn dangling_edges_are_dropped() {
		let graph = graph();
		let state = ViewState::default().reduce(Action::UpdateSearch("drexel".into()), &graph);
		// Only the university is visible, so no edge survives.
		assert!(state.visible_edges(&graph).is_empty());

		let overview = ViewState::default();
		for edge in overview.visible_edges(&graph) {
			assert_ne!(edge.kind, EdgeKind::UniversityToProgram);
		}
	}

	#[test]
	fn click_dispatches_by_kind() {
		let graph = graph();
		let state = ViewState::default().click("drexel", &graph);
		assert_eq!(state.mode, Mode::UniversityFocused);

		let state = state.click("chemistry", &graph);
		assert_eq!(state.selected_major_id.as_deref(), Some("chemistry"));
		assert_eq!(state.selected_university_id.as_deref(), Some("drexel"));

		let state = state.click("civil", &graph);
		assert_eq!(state.focused_node_id.as_deref(), Some("civil"));
		assert_eq!(state.selected_major_id.as_deref(), Some("chemistry"));

		assert_eq!(state.click("missing", &graph), state);
	}

	#[test]
	fn unknown_ids_are_total() {
		let graph = graph();
		let state = ViewState::default().reduce(Action::SelectUniversity("nowhere".into()), &graph);
		assert!(state.connected_majors.is_empty());
		assert!(focused_invariant_holds(&state));
		assert!(
			state
				.visible_nodes(&graph)
				.iter()
				.all(|n| n.node_type() != NodeType::Program)
		);
	}
}
