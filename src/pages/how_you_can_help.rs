use leptos::prelude::*;

use crate::components::PageScaffold;

const CONTACT: &str = "brian@microdoc.io";

const PATHWAYS: [&str; 3] = [
	"OpenAI or foundation model partners: access to cutting-edge models, eval harnesses, and credits dramatically accelerates the work.",
	"Mathematicians: feedback on conjectures, proposed proof sketches, and promising directions is gold dust.",
	"Tool builders: ideas for orchestration, verification, or graph-theoretic search pipelines are welcome.",
];

#[component]
pub fn HowYouCanHelp() -> impl IntoView {
	view! {
		<PageScaffold active_item_id="how-you-can-help">
			<section id="how-you-can-help" class="page-section page-section-last">
				<header class="page-header">
					<h1 class="page-title">"Support pathways"</h1>
					<p class="page-byline">
						"I want this project to be collaborative, transparent, and well-supported."
					</p>
				</header>

				<div id="support-intro" class="card card-highlight">
					<ul class="pathways">
						{PATHWAYS.iter().map(|text| view! { <li>"• " {*text}</li> }).collect_view()}
					</ul>
					<p class="card-eyebrow">
						"Email · " <a href={format!("mailto:{CONTACT}")} class="inline-link">{CONTACT}</a>
					</p>
				</div>
			</section>
		</PageScaffold>
	}
}
