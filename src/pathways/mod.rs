//! Navigation model behind every pathway view: the node/edge graph derived
//! from the dataset, the view-state reducer and the initial layout.

pub mod breadcrumbs;
pub mod graph;
pub mod layout;
pub mod view_state;

use anyhow::Result;

use crate::data::Dataset;

pub use graph::{EdgeKind, NodeType, PathwayGraph, Point};
pub use layout::LayoutConfig;
pub use view_state::{Action, ViewState};

/// The dataset and the graph derived from it, built once at startup.
#[derive(Debug)]
pub struct Pathways {
	pub dataset: Dataset,
	pub graph: PathwayGraph,
}

impl Pathways {
	pub fn new(dataset: Dataset) -> Self {
		let graph = PathwayGraph::derive(&dataset);
		Self { dataset, graph }
	}

	pub fn bundled() -> Result<Self> {
		Ok(Self::new(Dataset::bundled()?))
	}
}
