use std::f64::consts::PI;

use super::graph::{GraphNode, NodeType, Point};
use super::view_state::{Mode, ViewState};

/// A ring of nodes around a center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cluster {
	pub center: Point,
	pub radius: f64,
}

/// Tunables for the graph canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	pub width: f64,
	pub height: f64,
	pub overview_majors: Cluster,
	pub overview_universities: Cluster,
	pub focused_university: Point,
	pub focused_majors: Cluster,
	pub focused_programs: Cluster,
	pub focused_other_universities: Cluster,
	pub simulation: SimulationConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
	pub node_mass: f32,
	/// Energy after a drag starts.
	pub drag_alpha: f64,
	pub alpha_decay: f64,
	pub alpha_min: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		let (width, height) = (1200.0, 700.0);
		let cluster = |fx: f64, fy: f64, radius: f64| Cluster {
			center: Point::new(width * fx, height * fy),
			radius,
		};
		Self {
			width,
			height,
			overview_majors: cluster(0.3, 0.5, 140.0),
			overview_universities: cluster(0.7, 0.5, 180.0),
			focused_university: Point::new(width * 0.5, height * 0.5),
			focused_majors: cluster(0.18, 0.5, 120.0),
			focused_programs: cluster(0.8, 0.5, 200.0),
			focused_other_universities: cluster(0.5, 0.85, 160.0),
			simulation: SimulationConfig::default(),
		}
	}
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			force_charge: 800.0,
			force_spring: 0.08,
			force_max: 200.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			node_mass: 10.0,
			drag_alpha: 0.3,
			alpha_decay: 0.0228,
			alpha_min: 0.001,
		}
	}
}

/// Position `index` of `total` evenly around the cluster; a lone node sits
/// on the center.
pub fn cluster_position(cluster: Cluster, index: usize, total: usize) -> Point {
	if total <= 1 {
		return cluster.center;
	}
	let angle = 2.0 * PI * index as f64 / total as f64;
	Point::new(
		cluster.center.x + angle.cos() * cluster.radius,
		cluster.center.y + angle.sin() * cluster.radius,
	)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Group {
	Fixed,
	Majors,
	Universities,
	Programs,
}

/// Seed a position for every visible node from its cluster.
///
/// Group indices follow the order of `visible`, which is dataset order.
pub fn seed_positions(visible: &[&GraphNode], state: &ViewState, config: &LayoutConfig) -> Vec<Point> {
	let selected = state.selected_university_id.as_deref();
	let group_of = |node: &GraphNode| match (state.mode, node.node_type()) {
		(Mode::UniversityFocused, NodeType::University) if Some(node.id.as_str()) == selected => {
			Group::Fixed
		}
		(_, NodeType::Major) => Group::Majors,
		(_, NodeType::University) => Group::Universities,
		(_, NodeType::Program) => Group::Programs,
	};
	let cluster_of = |group: Group| match (state.mode, group) {
		(Mode::Overview, Group::Majors) => config.overview_majors,
		(Mode::Overview, _) => config.overview_universities,
		(Mode::UniversityFocused, Group::Majors) => config.focused_majors,
		(Mode::UniversityFocused, Group::Programs) => config.focused_programs,
		(Mode::UniversityFocused, _) => config.focused_other_universities,
	};

	let groups: Vec<Group> = visible.iter().map(|&n| group_of(n)).collect();
	let mut seen = [0usize; 4];
	groups
		.iter()
		.map(|&group| {
			if group == Group::Fixed {
				return config.focused_university;
			}
			let slot = group as usize;
			let index = seen[slot];
			seen[slot] += 1;
			let total = groups.iter().filter(|&&g| g == group).count();
			cluster_position(cluster_of(group), index, total)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::fixtures::sample;
	use crate::pathways::graph::PathwayGraph;
	use crate::pathways::view_state::Action;

	fn close(a: Point, b: Point) -> bool {
		a.distance(b) < 1e-9
	}

	#[test]
	fn single_node_sits_on_center() {
		let cluster = Cluster {
			center: Point::new(42.0, -7.0),
			radius: 500.0,
		};
		assert_eq!(cluster_position(cluster, 0, 1), Point::new(42.0, -7.0));
	}

	#[test]
	fn ring_is_evenly_spaced() {
		let cluster = Cluster {
			center: Point::new(0.0, 0.0),
			radius: 10.0,
		};
		assert!(close(cluster_position(cluster, 0, 4), Point::new(10.0, 0.0)));
		assert!(close(cluster_position(cluster, 1, 4), Point::new(0.0, 10.0)));
		assert!(close(cluster_position(cluster, 2, 4), Point::new(-10.0, 0.0)));
	}

	#[test]
	fn overview_places_majors_left_and_universities_right() {
		let graph = PathwayGraph::derive(&sample());
		let state = ViewState::default();
		let config = LayoutConfig::default();
		let visible = state.visible_nodes(&graph);
		let seeds = seed_positions(&visible, &state, &config);
		assert_eq!(seeds.len(), visible.len());

		let mid = config.width / 2.0;
		for (node, seed) in visible.iter().zip(&seeds) {
			match node.node_type() {
				NodeType::Major => assert!(seed.x < mid, "{} at {:?}", node.id, seed),
				NodeType::University => assert!(seed.x > mid - config.overview_universities.radius),
				NodeType::Program => unreachable!(),
			}
		}
	}

	#[test]
	fn focused_mode_pins_selected_university_and_opposes_programs() {
		let graph = PathwayGraph::derive(&sample());
		let state = ViewState::default().reduce(Action::SelectUniversity("pitt".into()), &graph);
		let config = LayoutConfig::default();
		let visible = state.visible_nodes(&graph);
		let seeds = seed_positions(&visible, &state, &config);

		let seed_of = |id: &str| {
			let i = visible.iter().position(|n| n.id == id).unwrap();
			seeds[i]
		};
		assert_eq!(seed_of("pitt"), config.focused_university);
		// Only one program, so it sits on the program cluster center.
		assert_eq!(seed_of("industrial"), config.focused_programs.center);
		// The other university is alone in its group too.
		assert_eq!(seed_of("drexel"), config.focused_other_universities.center);
		assert!(seed_of("mathematics").x < config.focused_university.x);
	}
}
