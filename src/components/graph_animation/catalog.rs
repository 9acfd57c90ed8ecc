//! Fixed node roster and the ordered catalog of graph layouts.

use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

/// One of the eight abstract vertices shared by every layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeId {
	A,
	B,
	C,
	D,
	E,
	F,
	G,
	H,
}

impl NodeId {
	/// Lowercase identifier as used in edge and element ids.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::A => "a",
			Self::B => "b",
			Self::C => "c",
			Self::D => "d",
			Self::E => "e",
			Self::F => "f",
			Self::G => "g",
			Self::H => "h",
		}
	}

	/// Position of this vertex in [`ROSTER`].
	pub const fn slot(self) -> usize {
		self as usize
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A roster entry: identifier plus its unscaled radius in viewBox units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeDefinition {
	pub id: NodeId,
	pub base_radius: f64,
}

/// Every layout materializes exactly these vertices, in this order.
pub const ROSTER: [NodeDefinition; 8] = [
	NodeDefinition { id: NodeId::A, base_radius: 3.6 },
	NodeDefinition { id: NodeId::B, base_radius: 2.8 },
	NodeDefinition { id: NodeId::C, base_radius: 3.1 },
	NodeDefinition { id: NodeId::D, base_radius: 2.4 },
	NodeDefinition { id: NodeId::E, base_radius: 4.1 },
	NodeDefinition { id: NodeId::F, base_radius: 2.9 },
	NodeDefinition { id: NodeId::G, base_radius: 2.6 },
	NodeDefinition { id: NodeId::H, base_radius: 3.0 },
];

/// Placement of a vertex inside a template, in percent of the bounding box.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateNode {
	pub x: f64,
	pub y: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub visible: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub radius_scale: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub label: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<&'static str>,
}

impl TemplateNode {
	pub const fn at(x: f64, y: f64) -> Self {
		Self {
			x,
			y,
			visible: None,
			radius_scale: None,
			label: None,
			description: None,
		}
	}

	pub const fn labelled(mut self, label: &'static str, description: &'static str) -> Self {
		self.label = Some(label);
		self.description = Some(description);
		self
	}

	pub const fn scaled(mut self, radius_scale: f64) -> Self {
		self.radius_scale = Some(radius_scale);
		self
	}
}

/// A connection between two roster vertices.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplateEdge {
	pub from: NodeId,
	pub to: NodeId,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub weight: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dashed: Option<bool>,
}

impl TemplateEdge {
	pub const fn new(from: NodeId, to: NodeId) -> Self {
		Self {
			from,
			to,
			weight: None,
			dashed: None,
		}
	}

	pub const fn weighted(mut self, weight: f64) -> Self {
		self.weight = Some(weight);
		self
	}

	pub const fn dashed(mut self) -> Self {
		self.dashed = Some(true);
		self
	}
}

/// A named frame of the animation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphTemplate {
	pub name: &'static str,
	pub nodes: BTreeMap<NodeId, TemplateNode>,
	pub edges: Vec<TemplateEdge>,
}

/// Center of the percentage coordinate space.
pub const CENTER: (f64, f64) = (50.0, 50.0);

fn round2(value: f64) -> f64 {
	(value * 100.0).round() / 100.0
}

/// Places `ids` at equal angular steps around `center`, starting at
/// `rotation` radians. Coordinates are rounded to two decimals.
pub fn radial_nodes(
	ids: &[NodeId],
	radius: f64,
	rotation: f64,
	center: (f64, f64),
) -> BTreeMap<NodeId, TemplateNode> {
	let step = 2.0 * PI / ids.len() as f64;
	ids.iter()
		.enumerate()
		.map(|(i, &id)| {
			let angle = rotation + step * i as f64;
			let node = TemplateNode::at(
				round2(center.0 + angle.cos() * radius),
				round2(center.1 + angle.sin() * radius),
			);
			(id, node)
		})
		.collect()
}

/// Overlays labels and descriptions onto generated positions. Ids absent from
/// `nodes` are added at the center.
fn annotate(
	mut nodes: BTreeMap<NodeId, TemplateNode>,
	meta: &[(NodeId, &'static str, &'static str)],
) -> BTreeMap<NodeId, TemplateNode> {
	for &(id, label, description) in meta {
		let base = nodes
			.remove(&id)
			.unwrap_or(TemplateNode::at(CENTER.0, CENTER.1));
		nodes.insert(id, base.labelled(label, description));
	}
	nodes
}

fn placed(nodes: Vec<(NodeId, TemplateNode)>) -> BTreeMap<NodeId, TemplateNode> {
	nodes.into_iter().collect()
}

use NodeId::{A, B, C, D, E, F, G, H};

fn e(from: NodeId, to: NodeId) -> TemplateEdge {
	TemplateEdge::new(from, to)
}

fn ring() -> GraphTemplate {
	let nodes = annotate(
		radial_nodes(&[A, B, C, D, E, F, G, H], 30.0, PI / 8.0, CENTER),
		&[
			(A, "a", "Entrance vertex on the ring; anchors one of the chord highlights."),
			(B, "b", "Cycle step that keeps the ring balanced between two neighbors."),
			(C, "c", "Marks the chord crossing toward g, hinting at alternate paths."),
			(D, "d", "Quarter-turn vertex closing the upper arc of the cycle."),
			(E, "e", "Opposite anchor to a; carries the second chord highlight toward a."),
			(F, "f", "Lower-right bridge that continues the clockwise traversal."),
			(G, "g", "Receives the dashed chord from c, forming a shortcut across the ring."),
			(H, "h", "Final ring vertex joining back to a to complete the circuit."),
		],
	);
	GraphTemplate {
		name: "ring",
		nodes,
		edges: vec![
			e(A, B),
			e(B, C),
			e(C, D),
			e(D, E),
			e(E, F),
			e(F, G),
			e(G, H),
			e(H, A),
			e(A, E).dashed(),
			e(C, G).dashed(),
		],
	}
}

fn star() -> GraphTemplate {
	let mut nodes = annotate(
		radial_nodes(&[A, B, C, D, F, G, H], 28.0, PI / 7.0, CENTER),
		&[
			(A, "leaf a", "Outer node a receiving a spoke from the hub."),
			(B, "leaf b", "Outer node b illustrating the star's symmetry."),
			(C, "leaf c", "Outer node tied into a dashed triangle of alternate routes."),
			(D, "leaf d", "Outer node d demonstrating even spoke distribution."),
			(F, "leaf f", "Outer node f closing the dashed alternate triangle."),
			(G, "leaf g", "Outer node displaying a standard spoke from the hub."),
			(H, "leaf h", "Outer node h finishing the circular arrangement of leaves."),
		],
	);
	nodes.insert(
		E,
		TemplateNode::at(50.0, 50.0).scaled(1.1).labelled(
			"hub e",
			"Central hub connecting to every leaf, forming a star graph.",
		),
	);
	let mut edges: Vec<TemplateEdge> = [A, B, C, D, F, G, H]
		.into_iter()
		.map(|leaf| e(E, leaf).weighted(1.1))
		.collect();
	edges.extend([e(A, C).dashed(), e(C, F).dashed(), e(F, A).dashed()]);
	GraphTemplate {
		name: "star",
		nodes,
		edges,
	}
}

fn ladder() -> GraphTemplate {
	GraphTemplate {
		name: "ladder",
		nodes: placed(vec![
			(A, TemplateNode::at(26.0, 32.0).labelled("rung a", "Top-left rung starting the ladder path.")),
			(B, TemplateNode::at(42.0, 32.0).labelled("rung b", "Top lane vertex b linking the first square.")),
			(
				C,
				TemplateNode::at(58.0, 32.0).labelled(
					"rung c",
					"Top lane vertex c crossing to the lower rail via dashed diagonal.",
				),
			),
			(D, TemplateNode::at(74.0, 32.0).labelled("rung d", "Top-right rung finishing the upper rail.")),
			(E, TemplateNode::at(26.0, 68.0).labelled("rung e", "Bottom-left rung forming the first vertical edge.")),
			(
				F,
				TemplateNode::at(42.0, 68.0)
					.labelled("rung f", "Bottom lane vertex f aligning with the top row square."),
			),
			(G, TemplateNode::at(58.0, 68.0).labelled("rung g", "Bottom lane vertex g connecting the middle square.")),
			(H, TemplateNode::at(74.0, 68.0).labelled("rung h", "Bottom-right rung closing the ladder.")),
		]),
		edges: vec![
			e(A, B),
			e(B, C),
			e(C, D),
			e(E, F),
			e(F, G),
			e(G, H),
			e(A, E).weighted(1.1),
			e(B, F),
			e(C, G),
			e(D, H).weighted(1.1),
			e(B, E).dashed(),
			e(C, H).dashed(),
		],
	}
}

fn twin_triangle() -> GraphTemplate {
	GraphTemplate {
		name: "twin-triangle",
		nodes: placed(vec![
			(
				A,
				TemplateNode::at(26.0, 38.0).labelled(
					"triangle a",
					"Vertex a of the left triangle, linking into the central hinge.",
				),
			),
			(
				B,
				TemplateNode::at(38.0, 24.0)
					.labelled("triangle b", "Upper vertex b, shared with the left triangle's apex."),
			),
			(C, TemplateNode::at(38.0, 52.0).labelled("triangle c", "Lower vertex c completing the left triangle.")),
			(
				D,
				TemplateNode::at(50.0, 38.0).labelled(
					"hinge d",
					"Central hinge connecting both triangles and the bridge to e.",
				),
			),
			(
				E,
				TemplateNode::at(62.0, 38.0)
					.labelled("triangle e", "Entry vertex into the right triangle and lower extension."),
			),
			(
				F,
				TemplateNode::at(74.0, 24.0)
					.labelled("triangle f", "Upper-right vertex illustrating the mirrored triangle."),
			),
			(
				G,
				TemplateNode::at(74.0, 52.0)
					.labelled("triangle g", "Lower-right vertex balancing the mirrored triangle."),
			),
			(
				H,
				TemplateNode::at(62.0, 66.0).labelled("tail h", "Tail vertex hanging from the right triangle's base."),
			),
		]),
		edges: vec![
			e(A, B),
			e(B, C),
			e(C, A),
			e(D, A).weighted(1.05),
			e(D, B).weighted(1.05),
			e(D, C).weighted(1.05),
			e(D, E).weighted(1.15),
			e(E, F),
			e(E, G),
			e(F, G),
			e(E, H),
			e(G, H),
		],
	}
}

fn chain() -> GraphTemplate {
	GraphTemplate {
		name: "chain",
		nodes: placed(vec![
			(A, TemplateNode::at(20.0, 50.0).labelled("anchor a", "Anchor node starting the zig-zag chain.")),
			(B, TemplateNode::at(32.0, 34.0).labelled("bend b", "Upper bend b turning the chain upward.")),
			(
				C,
				TemplateNode::at(44.0, 50.0)
					.labelled("pivot c", "Central pivot c where alternate dashed chords appear."),
			),
			(D, TemplateNode::at(56.0, 34.0).labelled("bend d", "Second upward bend keeping the pattern consistent.")),
			(E, TemplateNode::at(68.0, 50.0).labelled("anchor e", "Right anchor e tying into the lower chords.")),
			(F, TemplateNode::at(80.0, 34.0).labelled("end f", "Final bend of the chain reaching the far right.")),
			(
				G,
				TemplateNode::at(56.0, 66.0)
					.labelled("lower g", "Lower node g forming a supporting triangle with c and e."),
			),
			(H, TemplateNode::at(32.0, 66.0).labelled("lower h", "Lower node h mirroring g on the left side.")),
		]),
		edges: vec![
			e(A, B),
			e(B, C),
			e(C, D),
			e(D, E),
			e(E, F),
			e(C, H).dashed(),
			e(C, G).dashed(),
			e(G, E).weighted(1.05),
			e(H, A).weighted(1.05),
		],
	}
}

fn wheel() -> GraphTemplate {
	let mut nodes = annotate(
		radial_nodes(&[A, B, C, D, F, G, H], 26.0, PI / 6.0, CENTER),
		&[
			(A, "rim a", "Rim vertex a starting the circular boundary of the wheel."),
			(B, "rim b", "Rim vertex b on the upper arc of the wheel."),
			(C, "rim c", "Rim vertex c leading toward the first diagonal chord."),
			(D, "rim d", "Rim vertex d continuing the circumference."),
			(F, "rim f", "Rim vertex f opposite the top rim, closing the lower arc."),
			(G, "rim g", "Rim vertex g demonstrating the radial spoke pattern."),
			(H, "rim h", "Rim vertex h completing the cycle back to a."),
		],
	);
	nodes.insert(
		E,
		TemplateNode::at(50.0, 50.0).scaled(1.15).labelled(
			"hub e",
			"Central hub of the wheel graph connecting every rim vertex.",
		),
	);
	let mut edges = vec![
		e(A, B),
		e(B, C),
		e(C, D),
		e(D, F),
		e(F, G),
		e(G, H),
		e(H, A),
	];
	edges.extend(
		[A, B, C, D, F, G, H]
			.into_iter()
			.map(|rim| e(E, rim).weighted(1.1)),
	);
	edges.extend([e(B, F).dashed(), e(D, H).dashed()]);
	GraphTemplate {
		name: "wheel",
		nodes,
		edges,
	}
}

fn bipartite() -> GraphTemplate {
	GraphTemplate {
		name: "bipartite",
		nodes: placed(vec![
			(
				A,
				TemplateNode::at(26.0, 30.0).labelled(
					"left a",
					"Left partition vertex a showing a connection into every right node.",
				),
			),
			(
				C,
				TemplateNode::at(26.0, 46.0)
					.labelled("left c", "Left partition vertex c forming the dense bipartite core."),
			),
			(
				E,
				TemplateNode::at(26.0, 62.0).scaled(1.05).labelled(
					"left e",
					"Left partition vertex e with a slight emphasis to mark balance.",
				),
			),
			(G, TemplateNode::at(26.0, 78.0).labelled("left g", "Left partition vertex g wrapping up the column.")),
			(
				B,
				TemplateNode::at(74.0, 30.0).labelled(
					"right b",
					"Right partition vertex b receiving connections from every left node.",
				),
			),
			(
				D,
				TemplateNode::at(74.0, 46.0).labelled(
					"right d",
					"Right partition vertex d strengthening the complete bipartite structure.",
				),
			),
			(
				F,
				TemplateNode::at(74.0, 62.0)
					.labelled("right f", "Right partition vertex f balancing the dense cross links."),
			),
			(
				H,
				TemplateNode::at(74.0, 78.0)
					.labelled("right h", "Right partition vertex h closing the opposing column."),
			),
		]),
		edges: vec![
			e(A, B),
			e(A, D),
			e(A, F),
			e(A, H).dashed(),
			e(C, B),
			e(C, D),
			e(C, F),
			e(C, H),
			e(E, B),
			e(E, D),
			e(E, F),
			e(E, H),
			e(G, B).dashed(),
			e(G, D),
			e(G, F),
			e(G, H),
		],
	}
}

fn branching_tree() -> GraphTemplate {
	GraphTemplate {
		name: "branching-tree",
		nodes: placed(vec![
			(
				E,
				TemplateNode::at(50.0, 22.0)
					.scaled(1.1)
					.labelled("root e", "Root vertex feeding the binary-style branching below."),
			),
			(
				C,
				TemplateNode::at(34.0, 38.0)
					.labelled("branch c", "Left branch c splitting toward two child vertices."),
			),
			(
				G,
				TemplateNode::at(66.0, 38.0)
					.labelled("branch g", "Right branch g mirroring the left side of the tree."),
			),
			(B, TemplateNode::at(24.0, 54.0).labelled("leaf b", "Leaf b on the far left, one hop from branch c.")),
			(
				D,
				TemplateNode::at(44.0, 54.0)
					.labelled("leaf d", "Leaf d descending from branch c and sharing the trunk to a."),
			),
			(F, TemplateNode::at(56.0, 54.0).labelled("leaf f", "Leaf f descending from branch g toward the trunk.")),
			(
				H,
				TemplateNode::at(76.0, 54.0)
					.labelled("leaf h", "Leaf h on the far right completing the symmetric branches."),
			),
			(
				A,
				TemplateNode::at(50.0, 72.0)
					.labelled("trunk a", "Shared trunk vertex a where the branches reconverge."),
			),
		]),
		edges: vec![
			e(E, C),
			e(E, G),
			e(C, B),
			e(C, D),
			e(G, F),
			e(G, H),
			e(D, A),
			e(F, A),
			e(B, A).dashed(),
			e(H, A).dashed(),
		],
	}
}

fn cube() -> GraphTemplate {
	GraphTemplate {
		name: "cube",
		nodes: placed(vec![
			(A, TemplateNode::at(28.0, 32.0).labelled("front a", "Front-left vertex a of the cube projection.")),
			(B, TemplateNode::at(46.0, 26.0).labelled("front b", "Front-top vertex b joining the visible face.")),
			(C, TemplateNode::at(66.0, 34.0).labelled("front c", "Front-right vertex c outlining the top face.")),
			(D, TemplateNode::at(48.0, 40.0).labelled("front d", "Front-bottom vertex d closing the visible square.")),
			(
				E,
				TemplateNode::at(32.0, 68.0)
					.labelled("back e", "Back-left vertex e connected diagonally to the front face."),
			),
			(F, TemplateNode::at(50.0, 62.0).labelled("back f", "Back-top vertex f illustrating the offset square.")),
			(
				G,
				TemplateNode::at(70.0, 70.0)
					.labelled("back g", "Back-right vertex g reinforcing the cube depth illusion."),
			),
			(H, TemplateNode::at(52.0, 76.0).labelled("back h", "Back-bottom vertex h tying the two squares together.")),
		]),
		edges: vec![
			e(A, B),
			e(B, C),
			e(C, D),
			e(D, A),
			e(E, F),
			e(F, G),
			e(G, H),
			e(H, E),
			e(A, E),
			e(B, F),
			e(C, G),
			e(D, H),
			e(A, F).dashed(),
			e(B, G).dashed(),
			e(C, H).dashed(),
		],
	}
}

static CATALOG: LazyLock<Vec<GraphTemplate>> = LazyLock::new(|| {
	vec![
		ring(),
		star(),
		ladder(),
		twin_triangle(),
		chain(),
		wheel(),
		bipartite(),
		branching_tree(),
		cube(),
	]
});

/// The ordered, immutable layout catalog.
pub fn templates() -> &'static [GraphTemplate] {
	&CATALOG
}

/// Looks up a template, wrapping out-of-range indices.
pub fn template(index: usize) -> &'static GraphTemplate {
	let catalog = templates();
	&catalog[index % catalog.len()]
}
