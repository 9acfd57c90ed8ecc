use leptos::prelude::*;

use crate::components::PageScaffold;

struct Paper {
	topic: &'static str,
	title: &'static str,
	href: &'static str,
	note: &'static str,
}

const PAPERS: [Paper; 2] = [
	Paper {
		topic: "Test-time compute",
		title: "Sample, Scrutinize and Scale: Effective Inference-Time Search by Scaling Verification",
		href: "https://arxiv.org/pdf/2502.01839",
		note: "Zhao et al. probe how simply scaling sampling-based search with stronger self-verification lets Gemini v1.5 Pro surpass o1-Preview on reasoning benchmarks, attributing gains to implicit improvements in verification accuracy as the candidate pool widens.",
	},
	Paper {
		topic: "RL for reasoning",
		title: "Does Reinforcement Learning Really Incentivize Reasoning Capacity in LLMs Beyond the Base Model?",
		href: "https://arxiv.org/pdf/2504.13837",
		note: "Yue et al. evaluate RL with verifiable rewards across math, coding, and multimodal tasks, finding that while sampling efficiency improves at low pass@k, the reasoning boundary largely remains inside what the base model already produces, underscoring tooling and training gaps.",
	},
];

#[component]
pub fn ReadingMaterials() -> impl IntoView {
	let papers = PAPERS
		.iter()
		.map(|paper| {
			view! {
				<li class="paper">
					<div class="paper-topic">{paper.topic}</div>
					<h2 class="paper-title">
						<a href=paper.href class="inline-link" target="_blank" rel="noreferrer">
							{paper.title}
						</a>
					</h2>
					<p class="paper-note">{paper.note}</p>
				</li>
			}
		})
		.collect_view();

	view! {
		<PageScaffold active_item_id="reading-materials">
			<section id="reading-materials" class="page-section">
				<header class="page-header">
					<h1 class="page-title">"Working bibliography"</h1>
					<p class="page-byline">
						"A living repository of the papers, notes, and intermediate artifacts informing the work."
					</p>
				</header>

				<div id="reading-curation" class="card card-dashed">
					<p class="prose-lede">
						"I am actively cataloging work at the intersection of automated reasoning, test-time compute, and research tooling. Highlights from the current stack:"
					</p>
					<ul class="paper-list">{papers}</ul>
				</div>
			</section>
		</PageScaffold>
	}
}
