use leptos::prelude::*;

use crate::components::{PageScaffold, UpdateSummary};
use crate::content::{ProjectUpdate, project_updates};

#[component]
fn UpdateEntry(update: &'static ProjectUpdate) -> impl IntoView {
	view! {
		<article id={update.id.as_str()} class="update-entry">
			<time datetime={update.date.to_string()} class="update-date">
				{update.display_date.as_str()}
			</time>
			<h2 class="update-title">{update.title.as_str()}</h2>
			<p class="update-summary">
				<UpdateSummary summary={update.summary.as_slice()} />
			</p>
		</article>
	}
}

/// Project log, newest first.
#[component]
pub fn LatestUpdates() -> impl IntoView {
	let updates = project_updates();
	let feed = if updates.is_empty() {
		view! {
			<div id="latest-coming-soon" class="card card-dashed">
				"Entries begin once I touchdown in Patagonia. Expect weekly status notes, model diagnostics, and open questions for collaborators."
			</div>
		}
		.into_any()
	} else {
		let entries = updates
			.iter()
			.map(|update| view! { <UpdateEntry update=update /> })
			.collect_view();
		view! { <div class="update-feed">{entries}</div> }.into_any()
	};

	view! {
		<PageScaffold active_item_id="latest-updates">
			<section id="latest-updates" class="page-section">
				<header class="page-header">
					<h1 class="page-title">"Milestones & cadence"</h1>
					<p class="page-byline">
						"Milestones, breakthroughs, and setbacks will collect here as the work scales up."
					</p>
				</header>
				{feed}
			</section>
		</PageScaffold>
	}
}
