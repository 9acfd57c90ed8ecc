use leptos::prelude::*;

use crate::content::SummaryNode;

/// Renders an update summary inline. External links open in a new tab;
/// internal ones are left to the router.
#[component]
pub fn UpdateSummary(summary: &'static [SummaryNode]) -> impl IntoView {
	summary
		.iter()
		.map(|node| match node {
			SummaryNode::Text { text } => text.as_str().into_any(),
			SummaryNode::Link {
				text,
				href,
				is_external: true,
			} => view! {
				<a href={href.as_str()} class="inline-link" target="_blank" rel="noreferrer">
					{text.as_str()}
				</a>
			}
			.into_any(),
			SummaryNode::Link { text, href, .. } => view! {
				<a href={href.as_str()} class="inline-link">
					{text.as_str()}
				</a>
			}
			.into_any(),
		})
		.collect_view()
}
