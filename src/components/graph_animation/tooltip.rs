//! Pointer and focus tracking for the graph tooltip.

use crate::config::TooltipConfig;

use super::layout::NodeState;

/// What the tooltip currently describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipSource {
	/// The active layout as a whole.
	Card,
	/// A single hovered or focused vertex.
	Node,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
	pub label: String,
	pub description: String,
	pub source: TooltipSource,
}

impl TooltipContent {
	pub fn card(label: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			description: description.into(),
			source: TooltipSource::Card,
		}
	}

	pub fn node(node: &NodeState) -> Self {
		Self {
			label: node.label.clone(),
			description: node.description.clone(),
			source: TooltipSource::Node,
		}
	}
}

/// A point in CSS pixels relative to the graph container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Measured size of the graph container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	/// Returns `None` for a container that has not been laid out yet.
	pub fn measured(width: f64, height: f64) -> Option<Self> {
		(width > 0.0 && height > 0.0).then_some(Self { width, height })
	}

	/// Pixel position of a vertex given in percent coordinates.
	pub fn node_center(&self, node: &NodeState) -> Point {
		Point::new(node.x / 100.0 * self.width, node.y / 100.0 * self.height)
	}
}

/// Tooltip state machine driven by pointer, focus and layout events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interaction {
	inside: bool,
	pointer: Point,
	content: Option<TooltipContent>,
}

impl Interaction {
	#[cfg(test)]
	pub fn is_inside(&self) -> bool {
		self.inside
	}

	pub fn pointer(&self) -> Point {
		self.pointer
	}

	pub fn content(&self) -> Option<&TooltipContent> {
		self.content.as_ref()
	}

	pub fn pointer_enter(&mut self, at: Point, ambient: &TooltipContent) {
		self.inside = true;
		self.pointer = at;
		self.ensure_ambient(ambient, false);
	}

	/// Motion never replaces a node tooltip; a stale card is refreshed.
	pub fn pointer_move(&mut self, at: Point, ambient: &TooltipContent) {
		self.pointer = at;
		if self.inside {
			self.ensure_ambient(ambient, false);
		}
	}

	pub fn pointer_leave(&mut self) {
		self.inside = false;
		self.content = None;
	}

	/// Hover on a vertex. Hidden vertices are inert.
	pub fn node_enter(&mut self, node: &NodeState, at: Point) {
		if !node.visible {
			return;
		}
		self.pointer = at;
		self.content = Some(TooltipContent::node(node));
	}

	/// Keyboard focus behaves like hover, anchored at the vertex center.
	pub fn node_focus(&mut self, node: &NodeState, container: Option<Size>) {
		let at = container
			.map(|size| size.node_center(node))
			.unwrap_or(self.pointer);
		self.node_enter(node, at);
	}

	/// Pointer or focus left a vertex (or the drawing surface).
	pub fn node_leave(&mut self, ambient: &TooltipContent) {
		if self.inside {
			self.ensure_ambient(ambient, true);
		} else {
			self.content = None;
		}
	}

	/// The active template changed; any node tooltip is stale.
	pub fn layout_changed(&mut self, ambient: &TooltipContent) {
		self.content = None;
		if self.inside {
			self.ensure_ambient(ambient, false);
		}
	}

	fn ensure_ambient(&mut self, ambient: &TooltipContent, force: bool) {
		match &self.content {
			Some(current) if !force && current.source == TooltipSource::Node => {}
			Some(current) if current == ambient => {}
			_ => self.content = Some(ambient.clone()),
		}
	}

	/// Top-left corner of the tooltip box.
	///
	/// Clamped to the container when it can be measured, otherwise the raw
	/// pointer plus offsets.
	pub fn tooltip_position(&self, container: Option<Size>, config: &TooltipConfig) -> Point {
		let left = self.pointer.x + config.offset_x;
		let top = self.pointer.y + config.offset_y;
		let Some(size) = container else {
			return Point::new(left, top);
		};
		let max_left = (size.width - config.max_width).max(config.margin);
		let max_top = (size.height - config.max_height).max(config.margin);
		Point::new(
			left.max(config.margin).min(max_left),
			top.max(config.margin).min(max_top),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::super::catalog::NodeId;
	use super::super::layout::Layout;
	use super::*;

	fn visible_node(layout: &Layout) -> &NodeState {
		layout.nodes.iter().find(|n| n.visible).unwrap()
	}

	#[test]
	fn entering_shows_ambient_card() {
		let layout = Layout::from_catalog(0);
		let mut ui = Interaction::default();
		ui.pointer_enter(Point::new(5.0, 6.0), &layout.ambient_tooltip());
		assert!(ui.is_inside());
		assert_eq!(ui.pointer(), Point::new(5.0, 6.0));
		assert_eq!(ui.content(), Some(&layout.ambient_tooltip()));
	}

	#[test]
	fn motion_does_not_override_node_tooltip() {
		let layout = Layout::from_catalog(0);
		let ambient = layout.ambient_tooltip();
		let node = visible_node(&layout);
		let mut ui = Interaction::default();
		ui.pointer_enter(Point::default(), &ambient);
		ui.node_enter(node, Point::new(40.0, 40.0));
		ui.pointer_move(Point::new(41.0, 42.0), &ambient);
		assert_eq!(ui.content().unwrap().source, TooltipSource::Node);
		assert_eq!(ui.content().unwrap().label, node.label);
		assert_eq!(ui.pointer(), Point::new(41.0, 42.0));
	}

	#[test]
	fn motion_refreshes_stale_card() {
		let ring = Layout::from_catalog(0);
		let cube = Layout::from_catalog(8);
		let mut ui = Interaction::default();
		ui.pointer_enter(Point::default(), &ring.ambient_tooltip());
		ui.pointer_move(Point::new(1.0, 1.0), &cube.ambient_tooltip());
		assert_eq!(ui.content(), Some(&cube.ambient_tooltip()));
	}

	#[test]
	fn leaving_node_inside_reverts_to_card() {
		let layout = Layout::from_catalog(3);
		let ambient = layout.ambient_tooltip();
		let mut ui = Interaction::default();
		ui.pointer_enter(Point::default(), &ambient);
		ui.node_enter(visible_node(&layout), Point::new(10.0, 10.0));
		ui.node_leave(&ambient);
		let content = ui.content().unwrap();
		assert_eq!(content.source, TooltipSource::Card);
		assert_eq!(content.label, "twin triangle layout");
	}

	#[test]
	fn leaving_node_outside_clears() {
		let layout = Layout::from_catalog(3);
		let mut ui = Interaction::default();
		ui.node_focus(visible_node(&layout), None);
		assert_eq!(ui.content().unwrap().source, TooltipSource::Node);
		ui.node_leave(&layout.ambient_tooltip());
		assert_eq!(ui.content(), None);
	}

	#[test]
	fn leaving_container_clears_everything() {
		let layout = Layout::from_catalog(0);
		let mut ui = Interaction::default();
		ui.pointer_enter(Point::default(), &layout.ambient_tooltip());
		ui.node_enter(visible_node(&layout), Point::default());
		ui.pointer_leave();
		assert!(!ui.is_inside());
		assert_eq!(ui.content(), None);
	}

	#[test]
	fn hidden_nodes_are_inert() {
		let layout = Layout::from_catalog(1);
		let ambient = layout.ambient_tooltip();
		let mut ui = Interaction::default();
		ui.pointer_enter(Point::default(), &ambient);
		let hidden = NodeState {
			visible: false,
			..layout.node(NodeId::A).unwrap().clone()
		};
		ui.node_enter(&hidden, Point::new(9.0, 9.0));
		ui.node_focus(&hidden, Size::measured(300.0, 200.0));
		assert_eq!(ui.content(), Some(&ambient));
		assert_eq!(ui.pointer(), Point::default());
	}

	#[test]
	fn focus_anchors_at_node_center() {
		let layout = Layout::from_catalog(2);
		let a = layout.node(NodeId::A).unwrap();
		let mut ui = Interaction::default();
		ui.node_focus(a, Size::measured(400.0, 200.0));
		assert_eq!(ui.pointer(), Point::new(104.0, 64.0));
		assert_eq!(ui.content().unwrap().label, "rung a");
	}

	#[test]
	fn layout_change_replaces_node_tooltip_with_new_card() {
		let ring = Layout::from_catalog(0);
		let star = Layout::from_catalog(1);
		let mut ui = Interaction::default();
		ui.pointer_enter(Point::default(), &ring.ambient_tooltip());
		ui.node_enter(visible_node(&ring), Point::default());
		ui.layout_changed(&star.ambient_tooltip());
		assert_eq!(ui.content(), Some(&star.ambient_tooltip()));
	}

	#[test]
	fn layout_change_outside_clears() {
		let ring = Layout::from_catalog(0);
		let mut ui = Interaction::default();
		ui.node_focus(visible_node(&ring), None);
		ui.layout_changed(&Layout::from_catalog(1).ambient_tooltip());
		assert_eq!(ui.content(), None);
	}

	#[test]
	fn position_is_clamped_inside_container() {
		let config = TooltipConfig::default();
		let size = Size::measured(300.0, 200.0);
		let mut ui = Interaction::default();
		for &(x, y) in &[(-50.0, -50.0), (0.0, 0.0), (150.0, 90.0), (299.0, 199.0), (900.0, 900.0)] {
			ui.pointer_move(Point::new(x, y), &TooltipContent::card("", ""));
			let pos = ui.tooltip_position(size, &config);
			assert!((12.0..=80.0).contains(&pos.x), "x={}", pos.x);
			assert!((12.0..=80.0).contains(&pos.y), "y={}", pos.y);
		}
		ui.pointer_move(Point::new(20.0, 30.0), &TooltipContent::card("", ""));
		assert_eq!(ui.tooltip_position(size, &config), Point::new(34.0, 48.0));
	}

	#[test]
	fn narrow_container_pins_to_margin() {
		let config = TooltipConfig::default();
		let mut ui = Interaction::default();
		ui.pointer_move(Point::new(100.0, 100.0), &TooltipContent::card("", ""));
		let pos = ui.tooltip_position(Size::measured(150.0, 90.0), &config);
		assert_eq!(pos, Point::new(12.0, 12.0));
	}

	#[test]
	fn unmeasured_container_falls_back_to_raw_offsets() {
		let config = TooltipConfig::default();
		let mut ui = Interaction::default();
		ui.pointer_move(Point::new(-100.0, 5000.0), &TooltipContent::card("", ""));
		assert_eq!(Size::measured(0.0, 120.0), None);
		assert_eq!(
			ui.tooltip_position(None, &config),
			Point::new(-86.0, 5018.0)
		);
	}
}
