//! Spring-driven interpolation between layouts.

use crate::config::{MotionConfig, SpringParams};

use super::catalog::ROSTER;
use super::layout::Layout;

/// Largest integration step; longer frames are subdivided.
const MAX_STEP: f64 = 1.0 / 120.0;
const REST_DELTA: f64 = 0.001;

/// Glow radius and opacity keyframes (low, high).
const GLOW_RADIUS: (f64, f64) = (43.5, 46.0);
const GLOW_OPACITY: (f64, f64) = (0.12, 0.22);
const CAPTION_OPACITY: (f64, f64) = (0.55, 0.75);

fn ease_in_out_cubic(t: f64) -> f64 {
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

/// Low → high → low over `period` seconds, eased at both ends.
fn pulse(elapsed: f64, period: f64, (low, high): (f64, f64)) -> f64 {
	if period <= 0.0 {
		return low;
	}
	let phase = (elapsed / period).rem_euclid(1.0);
	let t = 1.0 - (2.0 * phase - 1.0).abs();
	low + (high - low) * ease_in_out_cubic(t)
}

/// A damped spring chasing a target value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	pub value: f64,
	pub velocity: f64,
	pub target: f64,
	params: SpringParams,
}

impl Spring {
	/// A spring already at rest on `value`.
	pub fn at_rest(value: f64, params: SpringParams) -> Self {
		Self {
			value,
			velocity: 0.0,
			target: value,
			params,
		}
	}

	pub fn is_settled(&self) -> bool {
		self.velocity == 0.0 && self.value == self.target
	}

	pub fn step(&mut self, dt: f64) {
		if self.is_settled() || dt <= 0.0 {
			return;
		}
		let steps = (dt / MAX_STEP).ceil().max(1.0);
		let h = dt / steps;
		for _ in 0..steps as usize {
			let displacement = self.value - self.target;
			let force = -self.params.stiffness * displacement - self.params.damping * self.velocity;
			self.velocity += force / self.params.mass * h;
			self.value += self.velocity * h;
		}
		if (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_DELTA {
			self.value = self.target;
			self.velocity = 0.0;
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct NodeMotion {
	radius: f64,
	halo_x: Spring,
	halo_y: Spring,
	halo_r: Spring,
	halo_opacity: Spring,
	core_x: Spring,
	core_y: Spring,
	core_opacity: Spring,
	core_scale: Spring,
}

fn halo_targets(visible: bool, radius: f64) -> (f64, f64) {
	if visible {
		(radius * 1.9, 0.12)
	} else {
		(radius * 1.6, 0.0)
	}
}

fn core_targets(visible: bool) -> (f64, f64) {
	if visible { (0.95, 1.0) } else { (0.0, 0.65) }
}

impl NodeMotion {
	fn new(x: f64, y: f64, radius: f64, visible: bool, config: &MotionConfig) -> Self {
		let (halo_r, halo_opacity) = halo_targets(visible, radius);
		let (core_opacity, core_scale) = core_targets(visible);
		Self {
			radius,
			halo_x: Spring::at_rest(x, config.halo),
			halo_y: Spring::at_rest(y, config.halo),
			halo_r: Spring::at_rest(halo_r, config.halo),
			halo_opacity: Spring::at_rest(halo_opacity, config.halo),
			core_x: Spring::at_rest(x, config.core),
			core_y: Spring::at_rest(y, config.core),
			core_opacity: Spring::at_rest(core_opacity, config.core),
			core_scale: Spring::at_rest(core_scale, config.core),
		}
	}

	fn retarget(&mut self, x: f64, y: f64, radius: f64, visible: bool) {
		let (halo_r, halo_opacity) = halo_targets(visible, radius);
		let (core_opacity, core_scale) = core_targets(visible);
		self.radius = radius;
		self.halo_x.target = x;
		self.halo_y.target = y;
		self.halo_r.target = halo_r;
		self.halo_opacity.target = halo_opacity;
		self.core_x.target = x;
		self.core_y.target = y;
		self.core_opacity.target = core_opacity;
		self.core_scale.target = core_scale;
	}

	#[cfg(test)]
	fn springs(&self) -> [&Spring; 8] {
		[
			&self.halo_x,
			&self.halo_y,
			&self.halo_r,
			&self.halo_opacity,
			&self.core_x,
			&self.core_y,
			&self.core_opacity,
			&self.core_scale,
		]
	}

	fn springs_mut(&mut self) -> [&mut Spring; 8] {
		[
			&mut self.halo_x,
			&mut self.halo_y,
			&mut self.halo_r,
			&mut self.halo_opacity,
			&mut self.core_x,
			&mut self.core_y,
			&mut self.core_opacity,
			&mut self.core_scale,
		]
	}

	fn frame(&self) -> NodeFrame {
		NodeFrame {
			cx: self.core_x.value,
			cy: self.core_y.value,
			r: (self.radius * self.core_scale.value).max(0.0),
			opacity: self.core_opacity.value.clamp(0.0, 1.0),
			halo_cx: self.halo_x.value,
			halo_cy: self.halo_y.value,
			halo_r: self.halo_r.value.max(0.0),
			halo_opacity: self.halo_opacity.value.clamp(0.0, 1.0),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct EdgeMotion {
	age: f64,
	dashed: bool,
	dash_period: f64,
}

/// Drawable state of one vertex for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeFrame {
	pub cx: f64,
	pub cy: f64,
	pub r: f64,
	pub opacity: f64,
	pub halo_cx: f64,
	pub halo_cy: f64,
	pub halo_r: f64,
	pub halo_opacity: f64,
}

/// Drawable state of one edge, indexed like [`Layout::edges`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeFrame {
	pub opacity: f64,
	pub dash_offset: f64,
}

/// Snapshot handed to the view after each tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
	pub nodes: Vec<NodeFrame>,
	pub edges: Vec<EdgeFrame>,
	pub glow_r: f64,
	pub glow_opacity: f64,
	pub caption_opacity: f64,
}

impl Frame {
	pub fn node(&self, slot: usize) -> NodeFrame {
		self.nodes.get(slot).copied().unwrap_or_default()
	}

	pub fn edge(&self, index: usize) -> EdgeFrame {
		self.edges.get(index).copied().unwrap_or_default()
	}
}

/// Animated counterpart of the active [`Layout`].
pub struct MotionState {
	config: MotionConfig,
	nodes: Vec<NodeMotion>,
	edges: Vec<EdgeMotion>,
	elapsed: f64,
}

impl MotionState {
	/// Starts at rest on `layout`, edges fully faded in.
	pub fn new(layout: &Layout, config: MotionConfig) -> Self {
		let nodes = layout
			.nodes
			.iter()
			.map(|n| NodeMotion::new(n.x, n.y, n.radius, n.visible, &config))
			.collect();
		let mut state = Self {
			config,
			nodes,
			edges: Vec::new(),
			elapsed: 0.0,
		};
		state.reset_edges(layout, config.edge_fade);
		state
	}

	fn reset_edges(&mut self, layout: &Layout, age: f64) {
		let config = &self.config;
		self.edges = layout
			.edges
			.iter()
			.enumerate()
			.map(|(i, edge)| EdgeMotion {
				age,
				dashed: edge.dashed,
				dash_period: config.dash_period + i as f64 * config.dash_period_step,
			})
			.collect();
	}

	/// Points every spring at `layout` and restarts the edge fade.
	pub fn retarget(&mut self, layout: &Layout) {
		debug_assert_eq!(layout.nodes.len(), ROSTER.len());
		for (motion, node) in self.nodes.iter_mut().zip(&layout.nodes) {
			motion.retarget(node.x, node.y, node.radius, node.visible);
		}
		self.reset_edges(layout, 0.0);
	}

	pub fn tick(&mut self, dt: f64) {
		self.elapsed += dt;
		for node in &mut self.nodes {
			for spring in node.springs_mut() {
				spring.step(dt);
			}
		}
		for edge in &mut self.edges {
			edge.age += dt;
		}
	}

	/// True once every node spring has come to rest.
	#[cfg(test)]
	pub fn is_settled(&self) -> bool {
		self.nodes
			.iter()
			.all(|n| n.springs().iter().all(|s| s.is_settled()))
	}

	pub fn frame(&self) -> Frame {
		let config = &self.config;
		let edges = self
			.edges
			.iter()
			.map(|edge| {
				let fade = if config.edge_fade > 0.0 {
					(edge.age / config.edge_fade).clamp(0.0, 1.0)
				} else {
					1.0
				};
				let dash_offset = if edge.dashed && edge.dash_period > 0.0 {
					-config.dash_travel * (edge.age / edge.dash_period).rem_euclid(1.0)
				} else {
					0.0
				};
				EdgeFrame {
					opacity: config.edge_opacity * ease_in_out_cubic(fade),
					dash_offset,
				}
			})
			.collect();

		Frame {
			nodes: self.nodes.iter().map(NodeMotion::frame).collect(),
			edges,
			glow_r: pulse(self.elapsed, config.glow_period, GLOW_RADIUS),
			glow_opacity: pulse(self.elapsed, config.glow_period, GLOW_OPACITY),
			caption_opacity: pulse(self.elapsed, config.caption_period, CAPTION_OPACITY),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DT: f64 = 1.0 / 60.0;

	fn settle(state: &mut MotionState) -> usize {
		let mut frames = 0;
		while !state.is_settled() && frames < 1_000 {
			state.tick(DT);
			frames += 1;
		}
		frames
	}

	#[test]
	fn spring_converges_without_blowing_up() {
		let params = MotionConfig::default().core;
		let mut spring = Spring::at_rest(0.0, params);
		spring.target = 100.0;
		let mut peak: f64 = 0.0;
		for _ in 0..600 {
			spring.step(DT);
			peak = peak.max(spring.value);
		}
		assert!(spring.is_settled());
		assert_eq!(spring.value, 100.0);
		assert!(peak < 120.0, "overshoot {peak}");
	}

	#[test]
	fn spring_handles_long_frames() {
		let mut spring = Spring::at_rest(0.0, MotionConfig::default().halo);
		spring.target = 10.0;
		spring.step(0.5);
		assert!(spring.value.is_finite());
		assert!(spring.value > 0.0);
	}

	#[test]
	fn new_state_is_at_rest_on_layout() {
		let layout = Layout::from_catalog(2);
		let state = MotionState::new(&layout, MotionConfig::default());
		assert!(state.is_settled());
		let frame = state.frame();
		assert_eq!(frame.nodes.len(), 8);
		for (node, f) in layout.nodes.iter().zip(&frame.nodes) {
			assert_eq!((f.cx, f.cy), (node.x, node.y));
			assert_eq!(f.opacity, 0.95);
		}
		assert!(frame.edges.iter().all(|e| (e.opacity - 0.88).abs() < 1e-9));
	}

	#[test]
	fn retarget_moves_nodes_to_new_layout() {
		let ring = Layout::from_catalog(0);
		let star = Layout::from_catalog(1);
		let mut state = MotionState::new(&ring, MotionConfig::default());
		state.retarget(&star);
		assert!(!state.is_settled());
		state.tick(DT);
		let mid = state.frame();
		assert_eq!(mid.edges.len(), star.edges.len());
		assert!(mid.edges[0].opacity < 0.88);

		assert!(settle(&mut state) < 1_000);
		let done = state.frame();
		for (node, f) in star.nodes.iter().zip(&done.nodes) {
			assert_eq!((f.cx, f.cy), (node.x, node.y));
			assert!((f.r - node.radius).abs() < 1e-9);
		}
	}

	#[test]
	fn hidden_nodes_fade_out() {
		let ring = Layout::from_catalog(0);
		let star = Layout::from_catalog(1);
		let mut hidden = star.clone();
		hidden.nodes[0].visible = false;
		let mut state = MotionState::new(&ring, MotionConfig::default());
		state.retarget(&hidden);
		settle(&mut state);
		let f = state.frame().node(0);
		assert_eq!(f.opacity, 0.0);
		assert_eq!(f.halo_opacity, 0.0);
		assert!((f.r - hidden.nodes[0].radius * 0.65).abs() < 1e-9);
	}

	#[test]
	fn dashed_edges_scroll_within_one_period() {
		let ring = Layout::from_catalog(0);
		let mut state = MotionState::new(&ring, MotionConfig::default());
		for _ in 0..90 {
			state.tick(DT);
		}
		let frame = state.frame();
		for (edge, f) in ring.edges.iter().zip(&frame.edges) {
			if edge.dashed {
				assert!(f.dash_offset < 0.0 && f.dash_offset > -12.0);
			} else {
				assert_eq!(f.dash_offset, 0.0);
			}
		}
	}

	#[test]
	fn ambient_pulse_stays_in_keyframe_bounds() {
		let layout = Layout::from_catalog(0);
		let mut state = MotionState::new(&layout, MotionConfig::default());
		assert_eq!(state.frame().glow_r, 43.5);
		for _ in 0..2_000 {
			state.tick(DT);
			let f = state.frame();
			assert!(f.glow_r >= 43.5 - 1e-9 && f.glow_r <= 46.0 + 1e-9);
			assert!(f.glow_opacity >= 0.12 - 1e-9 && f.glow_opacity <= 0.22 + 1e-9);
			assert!(f.caption_opacity >= 0.55 - 1e-9 && f.caption_opacity <= 0.75 + 1e-9);
		}
	}

	#[test]
	fn pulse_peaks_mid_period() {
		assert_eq!(pulse(9.0, 18.0, GLOW_RADIUS), 46.0);
		assert_eq!(pulse(18.0, 18.0, GLOW_RADIUS), 43.5);
	}

	#[test]
	fn out_of_range_frame_lookups_are_default() {
		let frame = Frame::default();
		assert_eq!(frame.node(3), NodeFrame::default());
		assert_eq!(frame.edge(7), EdgeFrame::default());
	}
}
