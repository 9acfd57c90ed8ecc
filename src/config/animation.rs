//! Tuning parameters for the margin graph animation.

use std::time::Duration;

/// Timing of the template rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationConfig {
	/// Delay before the first advance after mount.
	pub kickoff_delay: Duration,
	/// Lower bound of the random delay between switches (inclusive).
	pub min_delay: Duration,
	/// Upper bound of the random delay between switches (exclusive).
	pub max_delay: Duration,
}

impl Default for RotationConfig {
	fn default() -> Self {
		Self {
			kickoff_delay: Duration::from_millis(1200),
			min_delay: Duration::from_millis(4200),
			max_delay: Duration::from_millis(6400),
		}
	}
}

/// Placement of the tooltip relative to the pointer, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipConfig {
	/// Horizontal offset from the pointer.
	pub offset_x: f64,
	/// Vertical offset from the pointer.
	pub offset_y: f64,
	/// Width reserved for the tooltip box when clamping.
	pub max_width: f64,
	/// Height reserved for the tooltip box when clamping.
	pub max_height: f64,
	/// Minimum distance from the container's top-left edges.
	pub margin: f64,
}

impl Default for TooltipConfig {
	fn default() -> Self {
		Self {
			offset_x: 14.0,
			offset_y: 18.0,
			max_width: 220.0,
			max_height: 120.0,
			margin: 12.0,
		}
	}
}

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
	/// Restoring force per unit of displacement.
	pub stiffness: f64,
	/// Opposing force per unit of velocity.
	pub damping: f64,
	/// Inertia of the animated value.
	pub mass: f64,
}

/// Parameters for the per-frame motion of nodes, edges and ambient decoration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
	/// Spring driving the soft halo around each node.
	pub halo: SpringParams,
	/// Spring driving the node core.
	pub core: SpringParams,
	/// Seconds an edge takes to fade in after a switch.
	pub edge_fade: f64,
	/// Resting opacity of a rendered edge.
	pub edge_opacity: f64,
	/// Base period of the dash scroll on dashed edges, in seconds.
	pub dash_period: f64,
	/// Extra period added per edge index so dashes drift out of phase.
	pub dash_period_step: f64,
	/// Distance the dash pattern scrolls per period.
	pub dash_travel: f64,
	/// Period of the ambient glow pulse, in seconds.
	pub glow_period: f64,
	/// Period of the caption pulse, in seconds.
	pub caption_period: f64,
}

impl Default for MotionConfig {
	fn default() -> Self {
		Self {
			halo: SpringParams {
				stiffness: 110.0,
				damping: 22.0,
				mass: 0.9,
			},
			core: SpringParams {
				stiffness: 150.0,
				damping: 20.0,
				mass: 0.8,
			},
			edge_fade: 0.4,
			edge_opacity: 0.88,
			dash_period: 5.4,
			dash_period_step: 0.12,
			dash_travel: 12.0,
			glow_period: 18.0,
			caption_period: 6.5,
		}
	}
}

/// All tunables of the graph animation component.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationConfig {
	/// Rotation timing.
	pub rotation: RotationConfig,
	/// Tooltip placement.
	pub tooltip: TooltipConfig,
	/// Frame motion.
	pub motion: MotionConfig,
}
