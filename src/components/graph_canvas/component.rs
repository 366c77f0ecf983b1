use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlInputElement, MouseEvent};

use super::render::{CanvasSink, draw_graph};
use super::state::CanvasState;
use crate::graph::{self, DrawSink, VertexId};

fn context_2d(canvas: &HtmlCanvasElement) -> CanvasRenderingContext2d {
	canvas
		.get_context("2d")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap()
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn vertex_field(input: &NodeRef<leptos::html::Input>) -> Option<VertexId> {
	let input: HtmlInputElement = input.get()?.into();
	input.value().trim().parse().ok()
}

/// The graph editing surface plus algorithm controls and the step table.
///
/// Pointer gestures mutate the graph; the three buttons run a traversal and
/// hand its parent map to the tree renderer and its step log to the table.
#[component]
pub fn GraphCanvas(
	#[prop(default = 800.0)] width: f64,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let start_ref = NodeRef::<leptos::html::Input>::new();
	let end_ref = NodeRef::<leptos::html::Input>::new();
	let steps = RwSignal::new(Vec::<graph::TraceStep>::new());
	let state: Rc<RefCell<CanvasState>> = Rc::new(RefCell::new(CanvasState::new(width, height)));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);
	});

	let redraw = move |state: &CanvasState| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		draw_graph(&state.graph, &context_2d(&canvas), state.width, state.height);
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);
		state_md.borrow_mut().press(x, y);
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		// Ctrl-drag moves a vertex; plain drags are the connect gesture and
		// resolve on mouseup.
		if ev.buttons() == 0 || !ev.ctrl_key() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);
		let mut s = state_mm.borrow_mut();
		if s.ctrl_drag(x, y) {
			redraw(&s);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);
		let mut s = state_mu.borrow_mut();
		s.release(x, y);
		redraw(&s);
	};

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);
		let mut s = state_click.borrow_mut();
		s.click_add(x, y);
		redraw(&s);
	};

	let state_ctx = state.clone();
	let on_contextmenu = move |ev: MouseEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&canvas, &ev);
		let mut s = state_ctx.borrow_mut();
		s.click_remove(x, y);
		redraw(&s);
	};

	let state_bfs = state.clone();
	let on_bfs = move |_| {
		let Some(start) = vertex_field(&start_ref) else {
			warn!("BFS not started: start vertex is not a number");
			return;
		};
		let s = state_bfs.borrow();
		match graph::run_bfs(&s.graph, start) {
			Ok(run) => {
				let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
				let ctx = context_2d(&canvas);
				let mut sink = CanvasSink::new(&ctx, s.width, s.height);
				graph::draw_tree(&s.graph, &run.parents, &mut sink);
				steps.set(run.steps);
			}
			Err(err) => warn!("BFS not started: {err}"),
		}
	};

	let state_dfs = state.clone();
	let on_dfs = move |_| {
		let Some(start) = vertex_field(&start_ref) else {
			warn!("DFS not started: start vertex is not a number");
			return;
		};
		let s = state_dfs.borrow();
		match graph::run_dfs(&s.graph, start) {
			Ok(run) => {
				let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
				let ctx = context_2d(&canvas);
				let mut sink = CanvasSink::new(&ctx, s.width, s.height);
				graph::draw_tree(&s.graph, &run.parents, &mut sink);
				steps.set(run.steps);
			}
			Err(err) => warn!("DFS not started: {err}"),
		}
	};

	let state_sp = state.clone();
	let on_shortest_path = move |_| {
		let (Some(start), Some(end)) = (vertex_field(&start_ref), vertex_field(&end_ref)) else {
			warn!("Shortest path not started: vertex fields are not numbers");
			return;
		};
		let s = state_sp.borrow();
		match graph::run_shortest_path(&s.graph, start, end) {
			Ok(run) => {
				let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
				let ctx = context_2d(&canvas);
				let mut sink = CanvasSink::new(&ctx, s.width, s.height);
				if run.found {
					graph::draw_path(&s.graph, &run.parents, end, &mut sink);
				} else {
					sink.clear();
				}
				steps.set(run.steps);
			}
			Err(err) => warn!("Shortest path not started: {err}"),
		}
	};

	view! {
		<div class="graph-tool">
			<div class="side-pane">
				<div class="instructions">
					<h2>"INSTRUCTIONS"</h2>
					<p>"Add: Left Click"</p>
					<p>"Move: Ctrl Drag"</p>
					<p>"Connect: Drag"</p>
					<p>"Remove: Right Click"</p>
				</div>
				<table class="steps-table">
					<thead>
						<tr>
							<th>"Iteration"</th>
							<th>"Current Node"</th>
							<th>"Queue/Stack"</th>
						</tr>
					</thead>
					<tbody>
						{move || {
							steps
								.get()
								.into_iter()
								.map(|step| {
									let vertex = step
										.vertex
										.map(|v| v.to_string())
										.unwrap_or_default();
									view! {
										<tr>
											<td>{step.iteration}</td>
											<td>{vertex}</td>
											<td>{step.frontier}</td>
										</tr>
									}
								})
								.collect_view()
						}}
					</tbody>
				</table>
			</div>
			<canvas
				node_ref=canvas_ref
				class="graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:click=on_click
				on:contextmenu=on_contextmenu
				style="display: block; background: #fff; cursor: crosshair;"
			/>
			<div class="controls">
				<label>"Start Vertex: "</label>
				<input node_ref=start_ref placeholder="Starting vertex" />
				<button on:click=on_bfs>"BFS Tree"</button>
				<button on:click=on_dfs>"DFS Tree"</button>
				<button on:click=on_shortest_path>"Shortest Path"</button>
				<label>"End Vertex: "</label>
				<input node_ref=end_ref placeholder="Ending vertex" />
			</div>
		</div>
	}
}
