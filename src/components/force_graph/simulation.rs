use std::collections::HashMap;
use std::rc::Rc;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::types::CanvasData;
use crate::pathways::Point;
use crate::pathways::layout::SimulationConfig;

/// Positions published after a tick. Cheap to clone and never mutated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionSnapshot(Rc<HashMap<String, Point>>);

impl PositionSnapshot {
	pub fn get(&self, id: &str) -> Option<Point> {
		self.0.get(id).copied()
	}

	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[cfg(test)]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Owns the force layout and every position it has ever assigned.
pub struct Simulation {
	graph: ForceGraph<String, ()>,
	index: HashMap<String, DefaultNodeIdx>,
	/// Last position of every node seen, including ones no longer visible.
	known: HashMap<String, Point>,
	config: SimulationConfig,
	alpha: f64,
	dragging: Option<String>,
	snapshot: PositionSnapshot,
}

impl Simulation {
	pub fn new(config: SimulationConfig) -> Self {
		Self {
			graph: ForceGraph::new(Self::parameters(&config)),
			index: HashMap::new(),
			known: HashMap::new(),
			config,
			alpha: 0.0,
			dragging: None,
			snapshot: PositionSnapshot::default(),
		}
	}

	fn parameters(config: &SimulationConfig) -> SimulationParameters {
		SimulationParameters {
			force_charge: config.force_charge,
			force_spring: config.force_spring,
			force_max: config.force_max,
			node_speed: config.node_speed,
			damping_factor: config.damping_factor,
		}
	}

	/// Rebuild the layout for a new visible set. Nodes placed before keep
	/// their position; new ones start at their seed.
	pub fn sync(&mut self, data: &CanvasData) {
		let mut graph = ForceGraph::new(Self::parameters(&self.config));
		let mut index = HashMap::new();

		for node in &data.nodes {
			let at = self.known.get(&node.id).copied().unwrap_or(node.seed);
			self.known.insert(node.id.clone(), at);
			let idx = graph.add_node(NodeData {
				x: at.x as f32,
				y: at.y as f32,
				mass: self.config.node_mass,
				is_anchor: false,
				user_data: node.id.clone(),
			});
			index.insert(node.id.clone(), idx);
		}

		let mut edges = 0;
		for link in &data.links {
			if let (Some(&src), Some(&tgt)) = (index.get(&link.source), index.get(&link.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges += 1;
			}
		}
		debug!(
			"Simulation rebuilt with {} nodes and {} edges",
			index.len(),
			edges
		);

		self.graph = graph;
		self.index = index;
		self.dragging = None;
		self.alpha = 1.0;
		self.publish();
	}

	/// Advance one frame. Returns false once the layout has cooled down.
	pub fn tick(&mut self, dt: f32) -> bool {
		let target = if self.dragging.is_some() {
			self.config.drag_alpha
		} else {
			0.0
		};
		if self.dragging.is_none() && self.alpha < self.config.alpha_min {
			return false;
		}

		self.graph.update(dt * self.alpha as f32);
		self.alpha += (target - self.alpha) * self.config.alpha_decay;

		let known = &mut self.known;
		self.graph.visit_nodes(|node| {
			known.insert(
				node.data.user_data.clone(),
				Point::new(node.x() as f64, node.y() as f64),
			);
		});
		self.publish();
		true
	}

	fn publish(&mut self) {
		let positions = self
			.index
			.keys()
			.filter_map(|id| self.known.get(id).map(|p| (id.clone(), *p)))
			.collect();
		self.snapshot = PositionSnapshot(Rc::new(positions));
	}

	pub fn snapshot(&self) -> PositionSnapshot {
		self.snapshot.clone()
	}

	#[cfg(test)]
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	#[cfg(test)]
	pub fn is_running(&self) -> bool {
		self.dragging.is_some() || self.alpha >= self.config.alpha_min
	}

	/// Pin a node for the duration of a drag and wake the layout gently.
	pub fn begin_drag(&mut self, id: &str) -> bool {
		let Some(&idx) = self.index.get(id) else {
			return false;
		};
		self.set_anchor(idx, true);
		self.dragging = Some(id.to_string());
		self.alpha = self.alpha.max(self.config.drag_alpha);
		debug!("Dragging {id}");
		true
	}

	pub fn drag_to(&mut self, id: &str, to: Point) {
		if self.dragging.as_deref() != Some(id) {
			return;
		}
		let Some(&idx) = self.index.get(id) else {
			return;
		};
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = to.x as f32;
				node.data.y = to.y as f32;
			}
		});
		self.known.insert(id.to_string(), to);
		self.publish();
	}

	/// Release the pin so the layout may move the node again.
	pub fn end_drag(&mut self, id: &str) {
		if self.dragging.as_deref() != Some(id) {
			return;
		}
		if let Some(&idx) = self.index.get(id) {
			self.set_anchor(idx, false);
		}
		self.dragging = None;
	}

	#[cfg(test)]
	pub fn dragging(&self) -> Option<&str> {
		self.dragging.as_deref()
	}

	#[cfg(test)]
	pub fn is_pinned(&self, id: &str) -> bool {
		let Some(&idx) = self.index.get(id) else {
			return false;
		};
		let mut pinned = false;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pinned = node.data.is_anchor;
			}
		});
		pinned
	}

	fn set_anchor(&mut self, idx: DefaultNodeIdx, anchored: bool) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = anchored;
			}
		});
	}
}
