//! Pure traversal core: graph model, step tracing, the three algorithms,
//! and sink-based tree drawing. Nothing in here touches the DOM.

mod draw;
mod model;
mod trace;
mod traversal;

pub use draw::{DrawSink, draw_path, draw_tree};
pub use model::{Edge, Graph, RADIUS, Vertex, VertexId};
pub use trace::TraceStep;
pub use traversal::{GraphError, ParentMap, PathTraversal, Traversal, run_bfs, run_dfs, run_shortest_path};
