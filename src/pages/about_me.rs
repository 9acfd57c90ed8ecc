use leptos::prelude::*;

use crate::components::PageScaffold;

const SECTIONS: &[&str] = &["about-profile", "about-collaborators"];

#[component]
pub fn AboutMe() -> impl IntoView {
	view! {
		<PageScaffold active_item_id="about-me" section_ids=SECTIONS>
			<section id="about-me" class="page-section">
				<header class="page-header">
					<h1 class="page-title">"About me"</h1>
					<p class="page-byline">"A bit about me and the tools I'm working with."</p>
				</header>

				<div id="about-profile" class="card">
					<h2 class="card-eyebrow">"Brian Kelleher"</h2>
					<p class="card-body">
						"Founder and CEO of Microdoc, AI-powered dictation for doctors, used by doctors across Ireland, the UK, and the US."
					</p>
				</div>

				<div id="about-collaborators" class="card">
					<h2 class="card-eyebrow">"Collaborators"</h2>
					<p class="card-body">
						"Fellows and advisors from Edge City, Oxford, and Trinity will guide and evaluate the AI-generated mathematics as this project evolves."
					</p>
				</div>
			</section>
		</PageScaffold>
	}
}
