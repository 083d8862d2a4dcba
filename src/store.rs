//! Reactive handle shared by every page through Leptos context.

use std::sync::Arc;

use leptos::prelude::*;

use crate::data::Dataset;
use crate::pathways::{Action, PathwayGraph, Pathways, ViewState};

/// Loaded pathways plus the one view state all pages navigate.
#[derive(Clone)]
pub struct PathwayStore {
	pathways: Arc<Pathways>,
	pub view: RwSignal<ViewState>,
}

impl PathwayStore {
	pub fn new(pathways: Pathways) -> Self {
		Self {
			pathways: Arc::new(pathways),
			view: RwSignal::new(ViewState::default()),
		}
	}

	pub fn dataset(&self) -> &Dataset {
		&self.pathways.dataset
	}

	pub fn graph(&self) -> &PathwayGraph {
		&self.pathways.graph
	}

	pub fn dispatch(&self, action: Action) {
		let graph = self.graph();
		self.view.update(|state| *state = state.reduce(action, graph));
	}

	pub fn click(&self, node_id: &str) {
		let graph = self.graph();
		self.view.update(|state| *state = state.click(node_id, graph));
	}
}

pub fn use_store() -> PathwayStore {
	expect_context::<PathwayStore>()
}
