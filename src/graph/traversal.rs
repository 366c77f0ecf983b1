//! The traversal engine: BFS, DFS, and unweighted shortest path.
//!
//! All three are pure functions over `(&Graph, start[, end])` returning the
//! parent map and the step log; drawing and table display consume the return
//! value, nothing here touches shared state.

use std::collections::VecDeque;

use log::{debug, info};
use thiserror::Error;

use super::model::{Graph, VertexId};
use super::trace::{TraceStep, frontier_text};

/// A run rejected before it starts. Raised for out-of-range ids, which also
/// covers the empty graph (no id is in range).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
	#[error("vertex {id} does not exist (graph has {count} vertices)")]
	InvalidVertexReference { id: VertexId, count: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
	Unvisited,
	Root,
	Parent(VertexId),
}

/// Parent map for one traversal run, indexed by vertex id.
///
/// Each slot is unvisited, the root (visited, explicitly no parent), or the
/// id the vertex was first discovered from. The root sentinel is distinct
/// from absence: absence means the traversal never reached the vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentMap {
	slots: Vec<Slot>,
}

impl ParentMap {
	fn new(vertex_count: usize) -> Self {
		Self {
			slots: vec![Slot::Unvisited; vertex_count],
		}
	}

	fn set_root(&mut self, v: VertexId) {
		self.slots[v] = Slot::Root;
	}

	fn set_parent(&mut self, child: VertexId, parent: VertexId) {
		self.slots[child] = Slot::Parent(parent);
	}

	pub fn visited(&self, v: VertexId) -> bool {
		matches!(self.slots.get(v), Some(Slot::Root | Slot::Parent(_)))
	}

	/// The predecessor of `v` in the traversal tree; `None` for the root and
	/// for unvisited vertices (disambiguate with [`ParentMap::visited`]).
	pub fn parent_of(&self, v: VertexId) -> Option<VertexId> {
		match self.slots.get(v) {
			Some(Slot::Parent(p)) => Some(*p),
			_ => None,
		}
	}

	/// Ids of all visited vertices in id order.
	pub fn visited_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
		self.slots
			.iter()
			.enumerate()
			.filter(|(_, slot)| !matches!(slot, Slot::Unvisited))
			.map(|(id, _)| id)
	}

	pub fn visited_count(&self) -> usize {
		self.visited_ids().count()
	}
}

/// Result of a BFS or DFS run.
#[derive(Clone, Debug)]
pub struct Traversal {
	pub parents: ParentMap,
	pub steps: Vec<TraceStep>,
}

/// Result of a shortest-path run; `found` says whether `end` was reached.
#[derive(Clone, Debug)]
pub struct PathTraversal {
	pub parents: ParentMap,
	pub steps: Vec<TraceStep>,
	pub found: bool,
}

fn check_vertex(graph: &Graph, id: VertexId) -> Result<VertexId, GraphError> {
	if id < graph.vertex_count() {
		Ok(id)
	} else {
		Err(GraphError::InvalidVertexReference {
			id,
			count: graph.vertex_count(),
		})
	}
}

/// Level-synchronous breadth-first search from `start`.
///
/// The iteration counter advances once per level, so every step row carries
/// the BFS depth of its vertex. Neighbor discovery scans the edge list in
/// insertion order, which fixes all tie-breaking.
pub fn run_bfs(graph: &Graph, start: VertexId) -> Result<Traversal, GraphError> {
	let start = check_vertex(graph, start)?;
	info!("Starting BFS from vertex: {start}");

	let mut parents = ParentMap::new(graph.vertex_count());
	let mut queue: VecDeque<VertexId> = VecDeque::new();
	let mut steps = Vec::new();
	let mut iteration: u32 = 1;

	parents.set_root(start);
	queue.push_back(start);

	while !queue.is_empty() {
		// Everything currently queued sits at the same depth; drain exactly
		// that many entries as one iteration.
		let level_width = queue.len();
		for _ in 0..level_width {
			let Some(current) = queue.pop_front() else {
				break;
			};
			debug!("Visiting vertex: {current}");

			for edge in graph.edges() {
				let Some(neighbor) = edge.endpoint_across(current) else {
					continue;
				};
				if !parents.visited(neighbor) {
					debug!("Adding vertex to queue: {neighbor}");
					parents.set_parent(neighbor, current);
					queue.push_back(neighbor);
				}
			}

			steps.push(TraceStep::visit(
				iteration,
				current,
				frontier_text(queue.iter()),
			));
		}
		iteration += 1;
	}

	info!("BFS complete");
	steps.push(TraceStep::status(iteration, "BFS complete"));
	Ok(Traversal { parents, steps })
}

/// Iterative stack-based depth-first search from `start`.
///
/// Every unvisited neighbor of a popped vertex is pushed before any of them
/// is popped, so a single pop can claim several children. The result is a
/// valid DFS tree but not a recursive pre-order one. The iteration counter
/// advances per pop, unlike BFS's per-level counting.
pub fn run_dfs(graph: &Graph, start: VertexId) -> Result<Traversal, GraphError> {
	let start = check_vertex(graph, start)?;
	info!("Starting DFS from vertex: {start}");

	let mut parents = ParentMap::new(graph.vertex_count());
	let mut stack: Vec<VertexId> = Vec::new();
	let mut steps = Vec::new();
	let mut iteration: u32 = 1;

	parents.set_root(start);
	stack.push(start);

	while let Some(current) = stack.pop() {
		debug!("Visiting vertex: {current}");

		for edge in graph.edges() {
			let Some(neighbor) = edge.endpoint_across(current) else {
				continue;
			};
			if !parents.visited(neighbor) {
				debug!("Adding vertex to stack: {neighbor}");
				parents.set_parent(neighbor, current);
				stack.push(neighbor);
			}
		}

		// Stack snapshot prints bottom first.
		steps.push(TraceStep::visit(
			iteration,
			current,
			frontier_text(stack.iter()),
		));
		iteration += 1;
	}

	info!("DFS complete");
	steps.push(TraceStep::status(iteration, "DFS complete"));
	Ok(Traversal { parents, steps })
}

/// Unweighted shortest path from `start` to `end`, BFS with early exit.
///
/// The search stops the moment `end` is discovered as a neighbor, cutting
/// both the edge scan and the outer loop short. The iteration counter
/// advances per dequeue here. When the target is reached the parent chain
/// from `end` back to `start` is the minimum-edge-count path; ties fall to
/// edge insertion order.
pub fn run_shortest_path(
	graph: &Graph,
	start: VertexId,
	end: VertexId,
) -> Result<PathTraversal, GraphError> {
	let start = check_vertex(graph, start)?;
	let end = check_vertex(graph, end)?;
	info!("Finding shortest path from vertex: {start} to vertex: {end}");

	let mut parents = ParentMap::new(graph.vertex_count());
	let mut queue: VecDeque<VertexId> = VecDeque::new();
	let mut steps = Vec::new();
	let mut iteration: u32 = 1;

	parents.set_root(start);
	queue.push_back(start);

	// Degenerate query: the start is its own target, path of length zero.
	let mut found = start == end;

	while !found {
		let Some(current) = queue.pop_front() else {
			break;
		};
		debug!("Visiting vertex: {current}");

		for edge in graph.edges() {
			let Some(neighbor) = edge.endpoint_across(current) else {
				continue;
			};
			if !parents.visited(neighbor) {
				debug!("Adding vertex to queue: {neighbor}");
				parents.set_parent(neighbor, current);
				queue.push_back(neighbor);
				if neighbor == end {
					found = true;
					break;
				}
			}
		}

		steps.push(TraceStep::visit(
			iteration,
			current,
			frontier_text(queue.iter()),
		));
		iteration += 1;
	}

	if found {
		steps.push(TraceStep::status(iteration, "Shortest path found"));
	} else {
		info!("No path found");
		steps.push(TraceStep::status(iteration, "No path found"));
	}
	info!("Shortest path complete");
	steps.push(TraceStep::status(iteration, "Shortest path complete"));

	Ok(PathTraversal {
		parents,
		steps,
		found,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::model::Graph;

	/// Vertices 0..=3 with edges (0-1), (1-2), (0-3).
	fn fork_graph() -> Graph {
		let mut g = Graph::new();
		g.add_vertex(100.0, 100.0);
		g.add_vertex(200.0, 100.0);
		g.add_vertex(300.0, 100.0);
		g.add_vertex(100.0, 200.0);
		g.add_edge(0, 1);
		g.add_edge(1, 2);
		g.add_edge(0, 3);
		g
	}

	/// Fork graph plus an isolated vertex 4.
	fn fork_graph_with_island() -> Graph {
		let mut g = fork_graph();
		g.add_vertex(400.0, 400.0);
		g
	}

	fn visit_order(steps: &[TraceStep]) -> Vec<VertexId> {
		steps.iter().filter_map(|s| s.vertex).collect()
	}

	/// Edge count from `v` back to the root along the parent chain.
	fn chain_len(parents: &ParentMap, mut v: VertexId) -> usize {
		let mut len = 0;
		while let Some(p) = parents.parent_of(v) {
			v = p;
			len += 1;
		}
		len
	}

	#[test]
	fn bfs_levels_match_distance() {
		let g = fork_graph();
		let run = run_bfs(&g, 0).unwrap();

		// Visit order is [0] then [1, 3] (edge insertion order) then [2].
		assert_eq!(visit_order(&run.steps), vec![0, 1, 3, 2]);
		let iterations: Vec<u32> = run
			.steps
			.iter()
			.filter(|s| s.vertex.is_some())
			.map(|s| s.iteration)
			.collect();
		assert_eq!(iterations, vec![1, 2, 2, 3]);

		// Parent chain length equals the level the vertex was visited at.
		for step in run.steps.iter().filter(|s| s.vertex.is_some()) {
			let v = step.vertex.unwrap();
			assert_eq!(chain_len(&run.parents, v) as u32 + 1, step.iteration);
		}

		let last = run.steps.last().unwrap();
		assert_eq!(last.frontier, "BFS complete");
		assert_eq!(last.vertex, None);
	}

	#[test]
	fn bfs_queue_snapshots() {
		let g = fork_graph();
		let run = run_bfs(&g, 0).unwrap();

		// After processing 0 the queue holds its two children.
		assert_eq!(run.steps[0].frontier, "[1, 3]");
		// After processing 1 the queue holds 3 (still queued) and 2.
		assert_eq!(run.steps[1].frontier, "[3, 2]");
		assert_eq!(run.steps[2].frontier, "[2]");
		assert_eq!(run.steps[3].frontier, "[]");
	}

	#[test]
	fn bfs_visits_reachable_exactly_once() {
		let g = fork_graph_with_island();
		let run = run_bfs(&g, 0).unwrap();

		let mut order = visit_order(&run.steps);
		assert_eq!(order.len(), 4);
		order.sort_unstable();
		order.dedup();
		assert_eq!(order, vec![0, 1, 2, 3]);

		assert!(!run.parents.visited(4));
		assert_eq!(run.parents.visited_count(), 4);
	}

	#[test]
	fn bfs_handles_duplicate_edges_and_self_loops() {
		let mut g = fork_graph();
		g.add_edge(0, 1); // duplicate
		g.add_edge(0, 0); // self-loop
		let run = run_bfs(&g, 0).unwrap();
		assert_eq!(visit_order(&run.steps), vec![0, 1, 3, 2]);
	}

	#[test]
	fn bfs_rejects_out_of_range_start() {
		let g = fork_graph();
		let err = run_bfs(&g, 9).unwrap_err();
		assert_eq!(
			err,
			GraphError::InvalidVertexReference { id: 9, count: 4 }
		);
	}

	#[test]
	fn empty_graph_is_an_invalid_reference() {
		let g = Graph::new();
		assert!(run_bfs(&g, 0).is_err());
		assert!(run_dfs(&g, 0).is_err());
		assert!(run_shortest_path(&g, 0, 0).is_err());
	}

	#[test]
	fn dfs_iteration_counts_pops() {
		let g = fork_graph();
		let run = run_dfs(&g, 0).unwrap();

		// Pop 0, discover 1 and 3; pop 3 (top of stack), nothing new;
		// pop 1, discover 2; pop 2.
		assert_eq!(visit_order(&run.steps), vec![0, 3, 1, 2]);
		let iterations: Vec<u32> = run
			.steps
			.iter()
			.filter(|s| s.vertex.is_some())
			.map(|s| s.iteration)
			.collect();
		assert_eq!(iterations, vec![1, 2, 3, 4]);

		// Stack snapshots print bottom first.
		assert_eq!(run.steps[0].frontier, "[1, 3]");
		assert_eq!(run.steps[1].frontier, "[1]");
		assert_eq!(run.steps[2].frontier, "[2]");
		assert_eq!(run.steps[3].frontier, "[]");

		assert_eq!(run.steps.last().unwrap().frontier, "DFS complete");
	}

	#[test]
	fn dfs_parent_map_is_a_tree() {
		let mut g = fork_graph();
		g.add_edge(2, 3); // close a cycle 0-1-2-3-0
		let run = run_dfs(&g, 0).unwrap();

		// Every reachable vertex visited once; root has no parent, every
		// other visited vertex has exactly one, and chains terminate.
		assert_eq!(run.parents.visited_count(), 4);
		assert_eq!(run.parents.parent_of(0), None);
		for v in run.parents.visited_ids().filter(|&v| v != 0) {
			assert!(run.parents.parent_of(v).is_some());
			assert!(chain_len(&run.parents, v) <= 4);
		}
	}

	#[test]
	fn shortest_path_picks_minimum_edge_count() {
		let mut g = fork_graph();
		// Long way round to 2: 0-3, 3-2 would tie at length 2; add a direct
		// detour of length 3 that must lose.
		g.add_vertex(200.0, 300.0); // id 4
		g.add_edge(3, 4);
		g.add_edge(4, 2);

		let run = run_shortest_path(&g, 0, 2).unwrap();
		assert!(run.found);
		assert_eq!(chain_len(&run.parents, 2), 2);
		// Tie-break by edge insertion order: through 1, not 3.
		assert_eq!(run.parents.parent_of(2), Some(1));
		assert_eq!(run.parents.parent_of(1), Some(0));
	}

	#[test]
	fn shortest_path_stops_on_discovery() {
		let g = fork_graph();
		let run = run_shortest_path(&g, 0, 1).unwrap();
		assert!(run.found);

		// 1 is discovered while processing 0: exactly one visit row, then
		// the two terminal rows.
		assert_eq!(visit_order(&run.steps), vec![0]);
		assert_eq!(run.steps[0].iteration, 1);
		assert_eq!(run.steps[1].frontier, "Shortest path found");
		assert_eq!(run.steps[2].frontier, "Shortest path complete");
		assert_eq!(run.steps.len(), 3);
	}

	#[test]
	fn shortest_path_iteration_counts_dequeues() {
		let g = fork_graph();
		let run = run_shortest_path(&g, 0, 2).unwrap();

		// 2 is discovered while processing 1, the second dequeue.
		assert_eq!(visit_order(&run.steps), vec![0, 1]);
		let iterations: Vec<u32> = run
			.steps
			.iter()
			.filter(|s| s.vertex.is_some())
			.map(|s| s.iteration)
			.collect();
		assert_eq!(iterations, vec![1, 2]);
	}

	#[test]
	fn shortest_path_unreachable_reports_no_path() {
		let g = fork_graph_with_island();
		let run = run_shortest_path(&g, 0, 4).unwrap();
		assert!(!run.found);

		let n = run.steps.len();
		assert_eq!(run.steps[n - 2].frontier, "No path found");
		assert_eq!(run.steps[n - 1].frontier, "Shortest path complete");
	}

	#[test]
	fn shortest_path_to_self_is_trivially_found() {
		let g = fork_graph();
		let run = run_shortest_path(&g, 2, 2).unwrap();
		assert!(run.found);
		assert_eq!(chain_len(&run.parents, 2), 0);
		assert_eq!(run.steps[0].frontier, "Shortest path found");
	}

	#[test]
	fn reruns_are_identical() {
		let g = fork_graph_with_island();

		let a = run_bfs(&g, 0).unwrap();
		let b = run_bfs(&g, 0).unwrap();
		assert_eq!(a.parents, b.parents);
		assert_eq!(a.steps, b.steps);

		let a = run_dfs(&g, 0).unwrap();
		let b = run_dfs(&g, 0).unwrap();
		assert_eq!(a.parents, b.parents);
		assert_eq!(a.steps, b.steps);

		let a = run_shortest_path(&g, 0, 4).unwrap();
		let b = run_shortest_path(&g, 0, 4).unwrap();
		assert_eq!(a.parents, b.parents);
		assert_eq!(a.steps, b.steps);
	}
}
