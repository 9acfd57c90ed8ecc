//! Expands a template into complete render state for the fixed roster.

use super::catalog::{GraphTemplate, NodeId, ROSTER, template};
use super::tooltip::TooltipContent;

/// Render state of one roster vertex under the active template.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeState {
	pub id: NodeId,
	pub radius: f64,
	pub x: f64,
	pub y: f64,
	pub visible: bool,
	pub label: String,
	pub description: String,
}

/// Render state of one template edge.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeState {
	pub id: String,
	pub from: NodeId,
	pub to: NodeId,
	pub weight: f64,
	pub dashed: bool,
}

impl EdgeState {
	/// Stroke width in viewBox units.
	pub fn stroke_width(&self) -> f64 {
		0.52 + self.weight * 0.18
	}
}

/// A materialized template. Always replaced as a whole.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
	pub index: usize,
	pub name: &'static str,
	pub nodes: Vec<NodeState>,
	pub edges: Vec<EdgeState>,
}

/// Human-readable template name: the first hyphen becomes a space.
pub fn display_name(name: &str) -> String {
	name.replacen('-', " ", 1)
}

/// Builds the node and edge state for `template`.
///
/// Roster ids the template omits are parked at the center, hidden, with
/// generated text. Positions of specified ids are taken as-is.
pub fn materialize(index: usize, template: &GraphTemplate) -> Layout {
	let readable = display_name(template.name);

	let nodes = ROSTER
		.iter()
		.map(|definition| {
			let base_label = definition.id.as_str().to_uppercase();
			match template.nodes.get(&definition.id) {
				Some(placed) => {
					let label = placed.label.map(str::to_owned).unwrap_or(base_label);
					let description = placed
						.description
						.map(str::to_owned)
						.unwrap_or_else(|| format!("Vertex {label} inside the {readable} layout."));
					NodeState {
						id: definition.id,
						radius: definition.base_radius * placed.radius_scale.unwrap_or(1.0),
						x: placed.x,
						y: placed.y,
						visible: placed.visible.unwrap_or(true),
						label,
						description,
					}
				}
				None => NodeState {
					id: definition.id,
					radius: definition.base_radius,
					x: 50.0,
					y: 50.0,
					visible: false,
					description: format!("Vertex {base_label} is hidden in the {readable} layout."),
					label: base_label,
				},
			}
		})
		.collect();

	let edges = template
		.edges
		.iter()
		.enumerate()
		.map(|(i, edge)| EdgeState {
			id: format!("{}-edge-{}", template.name, i),
			from: edge.from,
			to: edge.to,
			weight: edge.weight.unwrap_or(1.0),
			dashed: edge.dashed.unwrap_or(false),
		})
		.collect();

	Layout {
		index,
		name: template.name,
		nodes,
		edges,
	}
}

impl Layout {
	/// Materializes the catalog entry at `index` (wrapped).
	pub fn from_catalog(index: usize) -> Self {
		let template = template(index);
		let len = super::catalog::templates().len();
		materialize(index % len, template)
	}

	pub fn node(&self, id: NodeId) -> Option<&NodeState> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Edges whose endpoints both resolve to visible nodes, with their index
	/// in the full edge list.
	pub fn visible_edges(&self) -> impl Iterator<Item = (usize, &EdgeState)> + '_ {
		self.edges.iter().enumerate().filter(|(_, edge)| {
			matches!(
				(self.node(edge.from), self.node(edge.to)),
				(Some(from), Some(to)) if from.visible && to.visible
			)
		})
	}

	pub fn display_name(&self) -> String {
		display_name(self.name)
	}

	/// Tooltip describing the layout as a whole.
	pub fn ambient_tooltip(&self) -> TooltipContent {
		let readable = self.display_name();
		let readable = readable.trim();
		if readable.is_empty() {
			TooltipContent::card(
				"Graph animation",
				"Currently showcasing an animated graph layout. Hover vertices to explore their roles.",
			)
		} else {
			TooltipContent::card(
				format!("{readable} layout"),
				format!(
					"Currently showcasing the {readable} graph layout. Hover vertices to explore their roles."
				),
			)
		}
	}
}
