//! Tree and path drawing over an abstract sink.
//!
//! The engine never talks to the canvas directly; it hands a parent map to
//! these helpers together with whatever [`DrawSink`] the caller provides.

use log::debug;

use super::model::{Graph, VertexId};
use super::traversal::ParentMap;

/// Rendering sink the tree renderer draws into. The canvas-backed
/// implementation lives with the component; tests substitute a recorder.
pub trait DrawSink {
	fn clear(&mut self);
	fn draw_edge(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
	/// Draw a vertex circle of the fixed radius with its id labelled near
	/// the center.
	fn draw_node(&mut self, id: VertexId, x: f64, y: f64);
}

/// Draw the full traversal tree: one segment per (child, parent) pair plus
/// every visited vertex. Runs only after the traversal has completed.
pub fn draw_tree(graph: &Graph, parents: &ParentMap, sink: &mut impl DrawSink) {
	sink.clear();
	for child in parents.visited_ids() {
		let Some(cv) = graph.vertex(child) else {
			continue;
		};
		if let Some(parent) = parents.parent_of(child) {
			if let Some(pv) = graph.vertex(parent) {
				debug!("Drawing edge from {parent} to {child}");
				sink.draw_edge(pv.x, pv.y, cv.x, cv.y);
			}
		}
		sink.draw_node(child, cv.x, cv.y);
	}
}

/// Draw only the reconstructed chain from `end` back to the root.
pub fn draw_path(graph: &Graph, parents: &ParentMap, end: VertexId, sink: &mut impl DrawSink) {
	sink.clear();
	let mut current = Some(end);
	while let Some(id) = current {
		let Some(cv) = graph.vertex(id) else {
			break;
		};
		let parent = parents.parent_of(id);
		if let Some(p) = parent {
			if let Some(pv) = graph.vertex(p) {
				debug!("Drawing edge from {p} to {id}");
				sink.draw_edge(pv.x, pv.y, cv.x, cv.y);
			}
		}
		sink.draw_node(id, cv.x, cv.y);
		current = parent;
	}
}
