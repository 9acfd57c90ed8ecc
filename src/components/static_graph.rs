use leptos::prelude::*;

struct StaticNode {
	id: &'static str,
	cx: f64,
	cy: f64,
	r: f64,
}

const fn node(id: &'static str, cx: f64, cy: f64, r: f64) -> StaticNode {
	StaticNode { id, cx, cy, r }
}

const NODES: [StaticNode; 8] = [
	node("A", 40.0, 52.0, 8.0),
	node("B", 80.0, 28.0, 7.0),
	node("C", 134.0, 38.0, 9.0),
	node("D", 112.0, 92.0, 7.0),
	node("E", 170.0, 110.0, 10.0),
	node("F", 62.0, 112.0, 6.0),
	node("G", 100.0, 150.0, 7.0),
	node("H", 38.0, 152.0, 9.0),
];

/// `(from, to, emphasis)` as indices into [`NODES`].
const EDGES: [(usize, usize, bool); 10] = [
	(0, 1, false),
	(1, 2, true),
	(0, 5, false),
	(5, 7, false),
	(7, 6, false),
	(6, 4, true),
	(4, 3, false),
	(3, 2, false),
	(1, 3, true),
	(0, 3, false),
];

const GRID_STEP: f64 = 25.0;

/// Padding around the diagram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaticGraphVariant {
	#[default]
	Default,
	Compact,
}

/// Non-animated network diagram on a faint grid.
#[component]
pub fn StaticGraph(
	#[prop(optional)] variant: StaticGraphVariant,
	#[prop(optional, into)] class: String,
) -> impl IntoView {
	let padding = match variant {
		StaticGraphVariant::Default => "static-graph-roomy",
		StaticGraphVariant::Compact => "static-graph-compact",
	};

	let grid = (1..=8)
		.map(|step| {
			let at = (GRID_STEP * step as f64).to_string();
			view! {
				<line x1="0" x2="200" y1={at.clone()} y2={at.clone()} stroke="currentColor" stroke-width="0.5" />
				<line y1="0" y2="200" x1={at.clone()} x2=at stroke="currentColor" stroke-width="0.5" />
			}
		})
		.collect_view();

	let edges = EDGES
		.iter()
		.map(|&(from, to, emphasis)| {
			let (a, b) = (&NODES[from], &NODES[to]);
			view! {
				<line
					x1={a.cx.to_string()}
					y1={a.cy.to_string()}
					x2={b.cx.to_string()}
					y2={b.cy.to_string()}
					stroke={if emphasis { "url(#edge-highlight)" } else { "rgba(100,116,139,0.45)" }}
					stroke-width={if emphasis { "3" } else { "2" }}
					stroke-linecap="round"
					stroke-dasharray={(!emphasis).then_some("6 6")}
				/>
			}
		})
		.collect_view();

	let nodes = NODES
		.iter()
		.map(|n| {
			let (cx, cy) = (n.cx.to_string(), n.cy.to_string());
			view! {
				<g>
					<circle cx={cx.clone()} cy={cy.clone()} r={(n.r + 4.0).to_string()} fill="rgba(148,163,184,0.22)" />
					<circle
						cx={cx.clone()}
						cy=cy
						r={n.r.to_string()}
						fill="url(#node-core)"
						stroke="rgba(51,65,85,0.35)"
						stroke-width="1.5"
					/>
					<text x=cx y={(n.cy + 4.0).to_string()} font-size="9" text-anchor="middle" class="static-graph-label">
						{n.id}
					</text>
				</g>
			}
		})
		.collect_view();

	view! {
		<figure class={format!("static-graph {padding} {class}")}>
			<div class="static-graph-backdrop" aria-hidden="true" />
			<svg viewBox="0 0 200 200" class="static-graph-surface" aria-hidden="true">
				<defs>
					<linearGradient id="edge-highlight" x1="0%" x2="100%" y1="0%" y2="100%">
						<stop offset="0%" stop-color="rgb(14 165 233)" stop-opacity="0.2" />
						<stop offset="50%" stop-color="rgb(37 99 235)" stop-opacity="0.55" />
						<stop offset="100%" stop-color="rgb(15 118 110)" stop-opacity="0.8" />
					</linearGradient>
					<radialGradient id="node-core" cx="50%" cy="50%" r="50%">
						<stop offset="0%" stop-color="rgb(255 255 255)" stop-opacity="0.9" />
						<stop offset="100%" stop-color="rgb(148 163 184)" stop-opacity="0.9" />
					</radialGradient>
				</defs>
				<g opacity="0.2">{grid}</g>
				{edges}
				{nodes}
			</svg>
			<figcaption class="sr-only">"Static network diagram showing research focus clusters."</figcaption>
		</figure>
	}
}
