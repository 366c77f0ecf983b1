use leptos::prelude::*;

use crate::components::graph_canvas::GraphCanvas;

/// Default Home Page: the graph editing canvas with algorithm controls.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<h1>"Graph Learning Tool"</h1>
				<p class="subtitle">
					"Build a graph with the mouse, then trace BFS, DFS, or a shortest path."
				</p>
				<GraphCanvas />
			</div>
		</ErrorBoundary>
	}
}
