use crate::pathways::layout::{LayoutConfig, seed_positions};
use crate::pathways::{EdgeKind, NodeType, PathwayGraph, Point, ViewState};

#[derive(Clone, Debug, PartialEq)]
pub struct CanvasNode {
	pub id: String,
	pub label: String,
	pub node_type: NodeType,
	/// Where the node starts if the canvas has never placed it.
	pub seed: Point,
	pub selected: bool,
	/// Major connected to the selected university.
	pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CanvasLink {
	pub source: String,
	pub target: String,
	pub kind: EdgeKind,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasData {
	pub nodes: Vec<CanvasNode>,
	pub links: Vec<CanvasLink>,
}

impl CanvasData {
	/// Visible subset of the graph for the current view state.
	pub fn from_view(graph: &PathwayGraph, state: &ViewState, config: &LayoutConfig) -> Self {
		let visible = state.visible_nodes(graph);
		let seeds = seed_positions(&visible, state, config);
		let selected = state.focused_node_id.as_deref();

		let nodes = visible
			.iter()
			.zip(seeds)
			.map(|(node, seed)| CanvasNode {
				id: node.id.clone(),
				label: node.name.clone(),
				node_type: node.node_type(),
				seed,
				selected: selected == Some(node.id.as_str()),
				highlighted: state.is_connected_major(&node.id),
			})
			.collect();

		let links = state
			.visible_edges(graph)
			.into_iter()
			.map(|edge| CanvasLink {
				source: edge.source_id.clone(),
				target: edge.target_id.clone(),
				kind: edge.kind,
			})
			.collect();

		Self { nodes, links }
	}

	/// Same node ids and links as `other`, ignoring flags and seeds.
	pub fn same_topology(&self, other: &CanvasData) -> bool {
		self.links == other.links
			&& self.nodes.len() == other.nodes.len()
			&& self.nodes.iter().zip(&other.nodes).all(|(a, b)| a.id == b.id)
	}

	pub fn node(&self, id: &str) -> Option<&CanvasNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Ids of nodes sharing a link with `id`.
	pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> {
		self.links.iter().filter_map(move |link| {
			if link.source == id {
				Some(link.target.as_str())
			} else if link.target == id {
				Some(link.source.as_str())
			} else {
				None
			}
		})
	}
}
