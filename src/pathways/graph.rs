use std::collections::HashMap;

use crate::data::Dataset;

/// A point in graph space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
	}
}

/// Discriminant of [`NodeKind`], handy for per-type lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
	Major,
	University,
	Program,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
	Major {
		description: String,
		courses: Vec<String>,
	},
	University,
	Program {
		university_id: String,
		major_ids: Vec<String>,
	},
}

impl NodeKind {
	pub fn node_type(&self) -> NodeType {
		match self {
			NodeKind::Major { .. } => NodeType::Major,
			NodeKind::University => NodeType::University,
			NodeKind::Program { .. } => NodeType::Program,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub name: String,
	pub position: Point,
	pub kind: NodeKind,
}

impl GraphNode {
	pub fn node_type(&self) -> NodeType {
		self.kind.node_type()
	}

	/// Owning university for program nodes.
	pub fn university_id(&self) -> Option<&str> {
		match &self.kind {
			NodeKind::Program { university_id, .. } => Some(university_id),
			_ => None,
		}
	}

	/// Case-insensitive substring match over name, description and courses.
	/// `needle` must already be lowercase.
	pub fn matches(&self, needle: &str) -> bool {
		if self.name.to_lowercase().contains(needle) {
			return true;
		}
		match &self.kind {
			NodeKind::Major {
				description,
				courses,
			} => {
				description.to_lowercase().contains(needle)
					|| courses.iter().any(|c| c.to_lowercase().contains(needle))
			}
			NodeKind::University | NodeKind::Program { .. } => false,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
	MajorToUniversity,
	UniversityToProgram,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GraphEdge {
	pub id: String,
	pub source_id: String,
	pub target_id: String,
	pub kind: EdgeKind,
}

/// Every node and edge the dataset can produce.
///
/// Nodes keep dataset order: majors, then each university followed by its
/// programs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathwayGraph {
	nodes: Vec<GraphNode>,
	node_index: HashMap<String, usize>,
	edges: Vec<GraphEdge>,
	edge_index: HashMap<String, usize>,
}

impl PathwayGraph {
	pub fn derive(dataset: &Dataset) -> Self {
		let mut graph = Self::default();

		for major in dataset.majors() {
			graph.insert_node(GraphNode {
				id: major.id.clone(),
				name: major.name.clone(),
				position: Point::default(),
				kind: NodeKind::Major {
					description: major.description.clone(),
					courses: major.courses.clone(),
				},
			});
		}

		for university in dataset.universities() {
			graph.insert_node(GraphNode {
				id: university.id.clone(),
				name: university.name.clone(),
				position: Point::default(),
				kind: NodeKind::University,
			});

			for program in &university.programs {
				graph.insert_node(GraphNode {
					id: program.id.clone(),
					name: program.name.clone(),
					position: Point::default(),
					kind: NodeKind::Program {
						university_id: university.id.clone(),
						major_ids: program.major_ids.clone(),
					},
				});
				graph.insert_edge(GraphEdge {
					id: format!("{}-{}", university.id, program.id),
					source_id: university.id.clone(),
					target_id: program.id.clone(),
					kind: EdgeKind::UniversityToProgram,
				});

				for major_id in &program.major_ids {
					graph.insert_edge(GraphEdge {
						id: format!("{}-{}", major_id, university.id),
						source_id: major_id.clone(),
						target_id: university.id.clone(),
						kind: EdgeKind::MajorToUniversity,
					});
				}
			}
		}

		graph
	}

	fn insert_node(&mut self, node: GraphNode) {
		match self.node_index.get(&node.id) {
			Some(&i) => self.nodes[i] = node,
			None => {
				self.node_index.insert(node.id.clone(), self.nodes.len());
				self.nodes.push(node);
			}
		}
	}

	/// Re-inserting an existing edge id is a no-op.
	fn insert_edge(&mut self, edge: GraphEdge) {
		if self.edge_index.contains_key(&edge.id) {
			return;
		}
		self.edge_index.insert(edge.id.clone(), self.edges.len());
		self.edges.push(edge);
	}

	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[GraphEdge] {
		&self.edges
	}

	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.node_index.get(id).map(|&i| &self.nodes[i])
	}

	pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
		self.edge_index.get(id).map(|&i| &self.edges[i])
	}

	pub fn universities(&self) -> impl Iterator<Item = &GraphNode> {
		self.nodes
			.iter()
			.filter(|n| n.node_type() == NodeType::University)
	}

	pub fn programs_of<'a>(&'a self, university_id: &'a str) -> impl Iterator<Item = &'a GraphNode> {
		self.nodes
			.iter()
			.filter(move |n| n.university_id() == Some(university_id))
	}

	/// Majors reachable from any program of the university, deduplicated and
	/// in the order programs list them.
	pub fn connected_major_ids(&self, university_id: &str) -> Vec<String> {
		let mut connected: Vec<String> = Vec::new();
		for program in self.programs_of(university_id) {
			if let NodeKind::Program { major_ids, .. } = &program.kind {
				for major_id in major_ids {
					if !connected.contains(major_id) {
						connected.push(major_id.clone());
					}
				}
			}
		}
		connected
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Dataset;
	use crate::data::fixtures::*;

	#[test]
	fn one_node_per_entity() {
		let graph = PathwayGraph::derive(&sample());
		assert_eq!(graph.nodes().len(), 3 + 2 + 4);
		assert_eq!(graph.node("drexel").unwrap().node_type(), NodeType::University);
		assert_eq!(graph.node("chemical").unwrap().university_id(), Some("drexel"));
		assert!(graph.node("nowhere").is_none());
	}

	#[test]
	fn major_edges_are_deduplicated_per_university() {
		// A: P1 -> {M1}, P2 -> {M1, M2}
		let dataset = Dataset::new(
			vec![major("m1", "M1"), major("m2", "M2")],
			vec![university(
				"a",
				"A",
				"N/A",
				vec![program("p1", "P1", &["m1"]), program("p2", "P2", &["m1", "m2"])],
			)],
			empty_requirements(),
		)
		.unwrap();
		let graph = PathwayGraph::derive(&dataset);

		let major_edges: Vec<_> = graph
			.edges()
			.iter()
			.filter(|e| e.kind == EdgeKind::MajorToUniversity)
			.map(|e| e.id.as_str())
			.collect();
		assert_eq!(major_edges, vec!["m1-a", "m2-a"]);

		let program_edges = graph
			.edges()
			.iter()
			.filter(|e| e.kind == EdgeKind::UniversityToProgram)
			.count();
		assert_eq!(program_edges, 2);
		assert_eq!(graph.edge("a-p2").unwrap().target_id, "p2");
	}

	#[test]
	fn derivation_is_idempotent() {
		let dataset = Dataset::bundled().unwrap();
		let first = PathwayGraph::derive(&dataset);
		let second = PathwayGraph::derive(&dataset);
		assert_eq!(first, second);

		let mut ids: Vec<_> = first.edges().iter().map(|e| e.id.clone()).collect();
		let total = ids.len();
		ids.sort();
		ids.dedup();
		assert_eq!(ids.len(), total);
	}

	#[test]
	fn connected_majors_follow_programs() {
		let graph = PathwayGraph::derive(&sample());
		assert_eq!(
			graph.connected_major_ids("drexel"),
			vec!["chemistry", "mathematics", "computer-science"]
		);
		assert_eq!(graph.connected_major_ids("pitt"), vec!["mathematics"]);
		assert!(graph.connected_major_ids("unknown").is_empty());
	}

	#[test]
	fn search_matches_courses_and_description() {
		let graph = PathwayGraph::derive(&sample());
		let chemistry = graph.node("chemistry").unwrap();
		assert!(chemistry.matches("organic"));
		assert!(chemistry.matches("about chem"));
		assert!(!graph.node("drexel").unwrap().matches("organic"));
	}
}
