use std::collections::HashSet;

use super::simulation::{PositionSnapshot, Simulation};
use super::types::CanvasData;
use crate::pathways::layout::SimulationConfig;
use crate::pathways::{NodeType, Point};

/// Pointer travel (screen pixels) below which a press counts as a click.
pub const CLICK_THRESHOLD: f64 = 4.0;

pub fn node_radius(node_type: NodeType) -> f64 {
	match node_type {
		NodeType::Major => 14.0,
		NodeType::University => 18.0,
		NodeType::Program => 10.0,
	}
}

/// World-space hit radius, a little larger than the drawn disc.
pub fn hit_radius(node_type: NodeType) -> f64 {
	node_radius(node_type) + 6.0
}

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_id: Option<String>,
	pub start: Point,
	pub node_start: Point,
	/// Set once the pointer travels past [`CLICK_THRESHOLD`].
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start: Point,
	pub transform_start: Point,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<String>,
	pub neighbors: HashSet<String>,
	pub highlight_t: f64,
	pub prev_node: Option<String>,
	pub prev_neighbors: HashSet<String>,
	delay_t: f64,
}

pub struct ForceGraphState {
	pub data: CanvasData,
	pub simulation: Simulation,
	pub positions: PositionSnapshot,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	/// Layout size the seeds were computed for.
	layout_size: (f64, f64),
}

impl ForceGraphState {
	pub fn new(data: CanvasData, config: SimulationConfig, layout_size: (f64, f64), width: f64, height: f64) -> Self {
		let mut state = Self {
			data: CanvasData::default(),
			simulation: Simulation::new(config),
			positions: PositionSnapshot::default(),
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			flow_time: 0.0,
			layout_size,
		};
		state.fit_layout();
		state.set_data(data);
		state
	}

	/// Replace the visible set. Hover and drag referring to nodes that left
	/// are dropped. A change that keeps the same nodes and links only swaps
	/// the flags and leaves the layout running as it was.
	pub fn set_data(&mut self, data: CanvasData) {
		if self.data.same_topology(&data) {
			self.data = data;
			return;
		}
		self.simulation.sync(&data);
		self.positions = self.simulation.snapshot();
		self.data = data;
		self.drag = DragState::default();

		let hovered = self
			.hover
			.node
			.take()
			.filter(|id| self.data.node(id).is_some());
		self.hover.prev_node = None;
		self.hover.prev_neighbors.clear();
		self.set_hover(hovered);
	}

	/// Centre the layout rectangle in the canvas at unit zoom.
	fn fit_layout(&mut self) {
		let (lw, lh) = self.layout_size;
		self.transform.x = (self.width - lw) / 2.0;
		self.transform.y = (self.height - lh) / 2.0;
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> Point {
		Point::new(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<String> {
		let at = self.screen_to_graph(sx, sy);
		// Last drawn wins, matching paint order.
		self.data
			.nodes
			.iter()
			.rev()
			.find(|node| {
				self.positions
					.get(&node.id)
					.is_some_and(|p| p.distance(at) < hit_radius(node.node_type))
			})
			.map(|node| node.id.clone())
	}

	pub fn set_hover(&mut self, node: Option<String>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.neighbors.clear();
		if let Some(id) = &node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			self.hover.neighbors = self.data.neighbors(id).map(str::to_string).collect();
		}
		self.hover.node = node;
	}

	pub fn is_highlighted(&self, id: &str) -> bool {
		self.is_hovered(id)
			|| self.hover.neighbors.contains(id)
			|| self.hover.prev_neighbors.contains(id)
	}

	pub fn is_hovered(&self, id: &str) -> bool {
		self.hover.node.as_deref() == Some(id) || self.hover.prev_node.as_deref() == Some(id)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn press_node(&mut self, id: String, sx: f64, sy: f64) {
		let node_start = self.positions.get(&id).unwrap_or_default();
		self.drag = DragState {
			node_id: Some(id),
			start: Point::new(sx, sy),
			node_start,
			moved: false,
		};
	}

	/// Move the pressed node once the pointer has left the click radius.
	pub fn drag_pointer(&mut self, sx: f64, sy: f64) {
		let Some(id) = self.drag.node_id.clone() else {
			return;
		};
		let travel = Point::new(sx, sy).distance(self.drag.start);
		if !self.drag.moved {
			if travel < CLICK_THRESHOLD {
				return;
			}
			self.drag.moved = self.simulation.begin_drag(&id);
		}
		let k = self.transform.k;
		let to = Point::new(
			self.drag.node_start.x + (sx - self.drag.start.x) / k,
			self.drag.node_start.y + (sy - self.drag.start.y) / k,
		);
		self.simulation.drag_to(&id, to);
		self.positions = self.simulation.snapshot();
	}

	/// Finish a press. Returns the node id when the press was a click.
	pub fn release(&mut self) -> Option<String> {
		self.pan.active = false;
		let drag = std::mem::take(&mut self.drag);
		let id = drag.node_id?;
		if drag.moved {
			self.simulation.end_drag(&id);
			None
		} else {
			Some(id)
		}
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.node_id.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		if self.simulation.tick(dt) {
			self.positions = self.simulation.snapshot();
		}
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::fixtures::sample;
	use crate::pathways::{Action, LayoutConfig, PathwayGraph, ViewState};

	fn state_for(view: &ViewState, graph: &PathwayGraph) -> ForceGraphState {
		let config = LayoutConfig::default();
		let data = CanvasData::from_view(graph, view, &config);
		ForceGraphState::new(
			data,
			config.simulation.clone(),
			(config.width, config.height),
			config.width,
			config.height,
		)
	}

	fn screen_of(state: &ForceGraphState, id: &str) -> (f64, f64) {
		let p = state.positions.get(id).unwrap();
		(
			p.x * state.transform.k + state.transform.x,
			p.y * state.transform.k + state.transform.y,
		)
	}

	#[test]
	fn short_press_is_a_click() {
		let graph = PathwayGraph::derive(&sample());
		let mut state = state_for(&ViewState::default(), &graph);
		let (x, y) = screen_of(&state, "pitt");

		assert_eq!(state.node_at_position(x, y).as_deref(), Some("pitt"));
		state.press_node("pitt".into(), x, y);
		state.drag_pointer(x + 1.0, y + 1.0);
		assert_eq!(state.release().as_deref(), Some("pitt"));
		assert!(!state.simulation.is_pinned("pitt"));
	}

	#[test]
	fn drag_moves_node_and_is_not_a_click() {
		let graph = PathwayGraph::derive(&sample());
		let mut state = state_for(&ViewState::default(), &graph);
		let (x, y) = screen_of(&state, "pitt");
		let before = state.positions.get("pitt").unwrap();

		state.press_node("pitt".into(), x, y);
		state.drag_pointer(x + 40.0, y);
		assert!(state.simulation.is_pinned("pitt"));
		assert_eq!(
			state.positions.get("pitt"),
			Some(Point::new(before.x + 40.0, before.y))
		);
		assert_eq!(state.release(), None);
		assert!(!state.simulation.is_pinned("pitt"));
	}

	#[test]
	fn hover_tracks_neighbors_and_survives_refresh() {
		let graph = PathwayGraph::derive(&sample());
		let overview = ViewState::default();
		let mut state = state_for(&overview, &graph);

		state.set_hover(Some("pitt".into()));
		assert!(state.is_highlighted("mathematics"));
		assert!(!state.is_highlighted("chemistry"));

		let focused = overview.reduce(Action::SelectUniversity("drexel".into()), &graph);
		state.set_data(CanvasData::from_view(&graph, &focused, &LayoutConfig::default()));
		assert_eq!(state.hover.node.as_deref(), Some("pitt"));

		let back = focused.reduce(Action::NavigateHome, &graph);
		state.set_hover(Some("chemical".into()));
		state.set_data(CanvasData::from_view(&graph, &back, &LayoutConfig::default()));
		assert_eq!(state.hover.node, None);
	}

	#[test]
	fn selection_change_keeps_layout_cool() {
		let graph = PathwayGraph::derive(&sample());
		let config = LayoutConfig::default();
		let focused = ViewState::default().reduce(Action::SelectUniversity("drexel".into()), &graph);
		let mut state = state_for(&focused, &graph);
		while state.simulation.tick(0.016) {}
		let before = state.positions.clone();
		let alpha = state.simulation.alpha();

		let clicked = focused.click("mathematics", &graph);
		let next = CanvasData::from_view(&graph, &clicked, &config);
		assert!(state.data.same_topology(&next));
		assert_ne!(state.data, next);

		state.set_data(next.clone());
		assert_eq!(state.data, next);
		assert_eq!(state.simulation.alpha(), alpha);
		assert!(!state.simulation.is_running());
		for node in &state.data.nodes {
			assert_eq!(state.positions.get(&node.id), before.get(&node.id));
		}
	}
}
