//! Editing-surface state: owns the graph and maps pointer gestures onto the
//! model's mutation operations. No web-sys in here so the gesture logic
//! stays testable.

use crate::graph::{Graph, VertexId};

/// In-flight pointer gestures.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
	/// Anchor of a connect gesture (press on a vertex, release on another).
	pub connect_from: Option<VertexId>,
	/// Vertex picked up by a ctrl-drag; dropped on the next ctrl-drag event.
	pub moving: Option<VertexId>,
}

pub struct CanvasState {
	pub graph: Graph,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
}

impl CanvasState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			graph: Graph::new(),
			drag: DragState::default(),
			width,
			height,
		}
	}

	/// Left click: add a vertex (no-op over an existing one).
	pub fn click_add(&mut self, x: f64, y: f64) {
		self.graph.add_vertex(x, y);
	}

	/// Right click: remove the vertex under the pointer, if any.
	pub fn click_remove(&mut self, x: f64, y: f64) {
		self.graph.remove_vertex(x, y);
	}

	/// Press: arm the connect gesture when starting on a vertex.
	pub fn press(&mut self, x: f64, y: f64) {
		self.drag.connect_from = self.graph.vertex_at(x, y);
	}

	/// Release: finish the connect gesture. An edge is added only when the
	/// release lands on a different vertex than the press.
	pub fn release(&mut self, x: f64, y: f64) {
		if let Some(from) = self.drag.connect_from.take() {
			if let Some(to) = self.graph.vertex_at(x, y) {
				if to != from {
					self.graph.add_edge(from, to);
				}
			}
		}
	}

	/// Ctrl-drag: first event picks up the vertex under the pointer, the
	/// next one drops it at the pointer position. Returns true when a drop
	/// happened and the canvas needs a redraw.
	pub fn ctrl_drag(&mut self, x: f64, y: f64) -> bool {
		match self.drag.moving.take() {
			Some(id) => {
				self.graph.move_vertex(id, x, y);
				true
			}
			None => {
				self.drag.moving = self.graph.vertex_at(x, y);
				false
			}
		}
	}
}
