//! Canvas drawing: whole-graph redraw after edits, plus the canvas-backed
//! [`DrawSink`] the tree renderer draws traversal results into.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::graph::{DrawSink, Graph, RADIUS, VertexId};

const STROKE: &str = "#1a1a2e";

/// Redraw the whole graph: edges first, then vertices on top.
pub fn draw_graph(graph: &Graph, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.clear_rect(0.0, 0.0, width, height);
	ctx.set_stroke_style_str(STROKE);
	ctx.set_fill_style_str(STROKE);
	ctx.set_line_width(1.5);

	for edge in graph.edges() {
		if let (Some(a), Some(b)) = (graph.vertex(edge.a), graph.vertex(edge.b)) {
			ctx.begin_path();
			ctx.move_to(a.x, a.y);
			ctx.line_to(b.x, b.y);
			ctx.stroke();
		}
	}
	for (id, vertex) in graph.vertices() {
		draw_labelled_circle(ctx, id, vertex.x, vertex.y);
	}
}

fn draw_labelled_circle(ctx: &CanvasRenderingContext2d, id: VertexId, x: f64, y: f64) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, RADIUS, 0.0, 2.0 * PI);
	ctx.stroke();
	ctx.set_font("14px sans-serif");
	let _ = ctx.fill_text(&id.to_string(), x - 5.0, y + 5.0);
}

/// [`DrawSink`] over a 2d canvas context.
pub struct CanvasSink<'a> {
	ctx: &'a CanvasRenderingContext2d,
	width: f64,
	height: f64,
}

impl<'a> CanvasSink<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d, width: f64, height: f64) -> Self {
		ctx.set_stroke_style_str(STROKE);
		ctx.set_fill_style_str(STROKE);
		ctx.set_line_width(1.5);
		Self { ctx, width, height }
	}
}

impl DrawSink for CanvasSink<'_> {
	fn clear(&mut self) {
		self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
	}

	fn draw_edge(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
		self.ctx.begin_path();
		self.ctx.move_to(x1, y1);
		self.ctx.line_to(x2, y2);
		self.ctx.stroke();
	}

	fn draw_node(&mut self, id: VertexId, x: f64, y: f64) {
		draw_labelled_circle(self.ctx, id, x, y);
	}
}
