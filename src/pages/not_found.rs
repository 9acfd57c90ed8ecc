use leptos::prelude::*;

use crate::components::{StaticGraph, StaticGraphVariant};

/// Fallback for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="not-found">
			<StaticGraph variant=StaticGraphVariant::Compact class="not-found-graph" />
			<h1 class="page-title">"Page not found"</h1>
			<p class="page-byline">"That path is not on the graph."</p>
			<a href="/" class="inline-link">
				"Back to the overview"
			</a>
		</main>
	}
}
