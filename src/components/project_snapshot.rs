use leptos::prelude::*;

/// A dated entry in the snapshot card.
#[derive(Clone, Copy, Debug)]
struct Dated {
	label: &'static str,
	detail: &'static str,
}

/// Current state of the project, edited by hand as the work moves.
#[derive(Clone, Copy, Debug)]
struct Snapshot {
	status: &'static str,
	focus: &'static str,
	tooling: &'static str,
	checkpoint: Dated,
	milestone: Dated,
	constraints: &'static str,
}

const SNAPSHOT: Snapshot = Snapshot {
	status: "Week 2 · In motion",
	focus: "Formalising the candidate theorem and decomposition strategy.",
	tooling: "o1-preview orchestration + Lean validation harness",
	checkpoint: Dated {
		label: "Oct 14, 2025",
		detail: "Lean tactics for base lemmas compiled; identified two brittle proof steps awaiting search tuning.",
	},
	milestone: Dated {
		label: "Oct 21, 2025",
		detail: "Lock the target theorem statement and ship a proof-sketch dossier.",
	},
	constraints: "Need higher-quality exemplars of mechanised proofs covering analogous symmetry reductions.",
};

#[component]
fn Fact(term: &'static str, children: Children) -> impl IntoView {
	view! {
		<div class="snapshot-fact">
			<dt>{term}</dt>
			<dd>{children()}</dd>
		</div>
	}
}

#[component]
fn DatedFact(term: &'static str, entry: Dated) -> impl IntoView {
	view! {
		<Fact term=term>
			<span class="snapshot-date">{entry.label}</span>
			<br />
			{entry.detail}
		</Fact>
	}
}

/// Side card summarising where the project stands.
#[component]
pub fn ProjectSnapshotCard() -> impl IntoView {
	let snapshot = SNAPSHOT;
	view! {
		<section aria-labelledby="project-snapshot-heading" class="project-snapshot">
			<div class="snapshot-header">
				<p id="project-snapshot-heading" class="snapshot-eyebrow">
					"Project Snapshot"
				</p>
				<span class="snapshot-status">
					<span class="snapshot-status-dot" aria-hidden="true" />
					{snapshot.status}
				</span>
			</div>

			<p class="snapshot-lede">
				"Mapping the proof search surface while keeping verification loops tight."
			</p>

			<dl class="snapshot-facts">
				<Fact term="Current focus">{snapshot.focus}</Fact>
				<Fact term="Active tooling">{snapshot.tooling}</Fact>
				<DatedFact term="Latest checkpoint" entry=snapshot.checkpoint />
				<DatedFact term="Next milestone" entry=snapshot.milestone />
				<Fact term="Constraints">{snapshot.constraints}</Fact>
			</dl>
		</section>
	}
}
