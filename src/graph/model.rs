//! Graph model: vertices, edges, and the pointer-driven editing operations.
//!
//! Vertex ids are dense indices into the storage order. Removing a vertex
//! renumbers everything above it so ids always cover `0..vertex_count`.

/// Dense vertex id; doubles as the vertex's index while it is alive.
pub type VertexId = usize;

/// Circle radius shared by rendering and pointer hit-testing.
pub const RADIUS: f64 = 20.0;

/// A vertex is just a position; its id is its index in the graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
	pub x: f64,
	pub y: f64,
}

impl Vertex {
	/// Hit test: true when `(px, py)` lies inside the display circle.
	pub fn contains(&self, px: f64, py: f64) -> bool {
		let (dx, dy) = (self.x - px, self.y - py);
		(dx * dx + dy * dy).sqrt() <= RADIUS
	}
}

/// Undirected edge between two vertex ids. Duplicates and self-loops are
/// representable; nothing deduplicates them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	pub a: VertexId,
	pub b: VertexId,
}

impl Edge {
	/// The endpoint opposite `v`, checking both sides.
	///
	/// A self-loop matches only its `a` side and so yields `v` itself once;
	/// traversals discard it because `v` is already visited.
	pub fn endpoint_across(&self, v: VertexId) -> Option<VertexId> {
		if self.a == v {
			Some(self.b)
		} else if self.b == v {
			Some(self.a)
		} else {
			None
		}
	}
}

/// The editable graph: vertices and edges in insertion order.
///
/// Editing operations follow a permissive policy: invalid input (overlapping
/// add, miss on remove, out-of-range ids) is a silent no-op, never an error.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	vertices: Vec<Vertex>,
	edges: Vec<Edge>,
}

impl Graph {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
		self.vertices.get(id)
	}

	pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
		self.vertices.iter().enumerate()
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// First vertex in storage order whose hit-region contains the point.
	pub fn vertex_at(&self, x: f64, y: f64) -> Option<VertexId> {
		self.vertices.iter().position(|v| v.contains(x, y))
	}

	/// Add a vertex at `(x, y)` with id = current count.
	///
	/// No-op when the point falls inside any existing vertex's hit-region.
	pub fn add_vertex(&mut self, x: f64, y: f64) -> Option<VertexId> {
		if self.vertex_at(x, y).is_some() {
			return None;
		}
		let id = self.vertices.len();
		self.vertices.push(Vertex { x, y });
		Some(id)
	}

	/// Remove the first vertex containing `(x, y)` along with every incident
	/// edge, then renumber the survivors to `0..n-1` in storage order.
	///
	/// Surviving edges keep pointing at the same vertices: endpoints above
	/// the removed slot shift down with them.
	pub fn remove_vertex(&mut self, x: f64, y: f64) -> Option<VertexId> {
		let removed = self.vertex_at(x, y)?;
		self.vertices.remove(removed);
		self.edges.retain(|e| e.a != removed && e.b != removed);
		for edge in &mut self.edges {
			if edge.a > removed {
				edge.a -= 1;
			}
			if edge.b > removed {
				edge.b -= 1;
			}
		}
		Some(removed)
	}

	/// Append an edge. No self-loop or duplicate check; out-of-range ids are
	/// dropped silently.
	pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
		if u < self.vertices.len() && v < self.vertices.len() {
			self.edges.push(Edge { a: u, b: v });
		}
	}

	/// Move a vertex in place; silent no-op for an unknown id.
	pub fn move_vertex(&mut self, id: VertexId, x: f64, y: f64) {
		if let Some(vertex) = self.vertices.get_mut(id) {
			vertex.x = x;
			vertex.y = y;
		}
	}
}
