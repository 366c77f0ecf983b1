//! Step records emitted during a traversal run, one per table row.

use super::model::VertexId;

/// One row of the step table: iteration counter, the vertex being processed
/// (empty for terminal status rows), and a textual frontier snapshot or a
/// status message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceStep {
	pub iteration: u32,
	pub vertex: Option<VertexId>,
	pub frontier: String,
}

impl TraceStep {
	/// Row for a vertex being dequeued/popped, with the frontier as it looks
	/// at that moment.
	pub fn visit(iteration: u32, vertex: VertexId, frontier: String) -> Self {
		Self {
			iteration,
			vertex: Some(vertex),
			frontier,
		}
	}

	/// Terminal status row ("BFS complete", "No path found", ...).
	pub fn status(iteration: u32, message: &str) -> Self {
		Self {
			iteration,
			vertex: None,
			frontier: message.to_owned(),
		}
	}
}

/// Bracketed snapshot of frontier contents in iteration order, e.g. `[1, 3]`.
/// Queues print front first, stacks bottom first.
pub fn frontier_text<'a>(ids: impl IntoIterator<Item = &'a VertexId>) -> String {
	let inner = ids
		.into_iter()
		.map(|id| id.to_string())
		.collect::<Vec<_>>()
		.join(", ");
	format!("[{inner}]")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn frontier_text_formats_like_a_list() {
		assert_eq!(frontier_text(&[] as &[VertexId]), "[]");
		assert_eq!(frontier_text(&[4usize]), "[4]");
		assert_eq!(frontier_text(&[1usize, 3, 2]), "[1, 3, 2]");
	}

	#[test]
	fn status_rows_have_no_vertex() {
		let step = TraceStep::status(5, "BFS complete");
		assert_eq!(step.vertex, None);
		assert_eq!(step.frontier, "BFS complete");
		assert_eq!(step.iteration, 5);
	}
}
