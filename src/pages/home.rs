use leptos::prelude::*;

use crate::components::PageScaffold;
use crate::content::latest_update;

const PUBLISHED: &str = "October 15, 2025 · 09:18 (Ireland, UTC+1)";

#[component]
fn ExternalLink(href: &'static str, children: Children) -> impl IntoView {
	view! {
		<a href=href class="inline-link" target="_blank" rel="noreferrer">
			{children()}
		</a>
	}
}

/// Landing page: the project's aim and motivation.
#[component]
pub fn Home() -> impl IntoView {
	let latest = latest_update().map(|update| {
		let href = format!("/latest-updates#{}", update.id);
		view! {
			<p class="page-byline">
				"Latest update · " {update.display_date.as_str()} " · "
				<a href=href class="inline-link">{update.title.as_str()}</a>
			</p>
		}
	});

	view! {
		<PageScaffold active_item_id="overview">
			<section id="overview" class="page-section">
				<header class="page-header">
					<h1 class="page-title-large">"Charting an AI-first approach to frontier mathematics"</h1>
					<p class="page-byline">"Brian Kelleher · " {PUBLISHED}</p>
					{latest}
				</header>

				<div class="prose">
					<p>
						"Hi, I'm Brian Kelleher. Over the next 4 weeks, I will be working on using AI to prove an unproven mathematics theorem. I will be doing this project as part of the "
						<ExternalLink href="https://www.edgecity.live/patagonia">
							"Edge City fellowship in Patagonia"
						</ExternalLink> "."
					</p>
					<p>
						"AI has fascinated and intrigued me for a long time. In 2022, I used GPT-3 to give me feedback on English essays for my Leaving Cert (final high school exams in Ireland) and over the past 3 years, I have built and scaled AI applications (like Microdoc)."
					</p>
					<p>
						"One of the most powerful ways that AI will be used is with the furtherance of research. I think that the use of AI will be diffuse throughout the economy and will take decades to fully materialise. Unregulated industries (coding, customer support) will adopt this most quickly, and more highly regulated/bureaucratic industries will adopt much more slowly (healthcare, education, law, finance)."
					</p>
					<p>
						"I believe that the frontier AI models are already AGI, and the most important bottleneck now is the tooling around these models; the instrumentation that they require to make a meaningful impact on the world."
					</p>
					<p>
						"However, when we look at frontier science research, these models are equivalent to a capable undergraduate student. Leading mathematicians like Terence Tao are sceptical of their ability to contribute meaningfully to mathematical research."
					</p>
					<p>
						"The goal of this project is to assess where the frontier AI models and scientific progress overlap. Key questions are:"
					</p>
					<ul>
						<li>"To what extent can these models work autonomously?"</li>
						<li>
							"What are the bottlenecks to their efficacy: tooling, verification, raw intelligence, or training data?"
						</li>
					</ul>
					<p>
						"Other papers which inspire me are "
						<ExternalLink href="https://arxiv.org/pdf/2502.01839">
							"Sample, Scrutinize and Scale: Effective Inference-Time Search by Scaling Verification"
						</ExternalLink>
						" by Zhao et al., which shows how scaling sampling-based search with stronger self-verification pushes systems like Gemini v1.5 Pro beyond o1-Preview on rigorous reasoning benchmarks, and "
						<ExternalLink href="https://arxiv.org/pdf/2504.13837">
							"Does Reinforcement Learning Really Incentivize Reasoning Capacity in LLMs Beyond the Base Model?"
						</ExternalLink>
						" by Yue et al., which finds that current RL with verifiable rewards mainly improves sampling efficiency while leaving core reasoning boundaries constrained by the base models themselves."
					</p>
					<p>"I will be publishing my research, progress, and related reading as I go."</p>
				</div>
			</section>
		</PageScaffold>
	}
}
