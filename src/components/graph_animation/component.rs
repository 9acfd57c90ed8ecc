use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::PointerEvent;

use crate::config::AnimationConfig;

use super::catalog::ROSTER;
use super::layout::Layout;
use super::motion::MotionState;
use super::rotation::{ApplyTemplate, Rotation, SharedRotation, TemplateStore, start_rotation};
use super::timers::{FrameLoop, Timers};
use super::tooltip::{Interaction, Point, Size};

/// Fixed simulation step per animation frame, in seconds.
const FRAME_DT: f64 = 0.016;

type FrameCallback = Closure<dyn FnMut()>;

fn fmt(value: f64) -> String {
	format!("{value:.3}")
}

fn request_frame(callback: &FrameCallback, timers: &Timers) {
	if let Some(window) = web_sys::window() {
		if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
			timers.track_frame(id);
		}
	}
}

/// Decorative graph that cycles through the layout catalog.
///
/// Hovering or focusing a vertex shows what it represents; the rest of the
/// card describes the active layout.
#[component]
pub fn GraphAnimation(#[prop(optional)] config: Option<AnimationConfig>) -> impl IntoView {
	let config = config.unwrap_or_default();
	let tooltip_config = config.tooltip;
	let store = use_context::<TemplateStore>().unwrap_or_default();

	let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
	let rotation: SharedRotation<SmallRng> = Rc::new(RefCell::new(Rotation::new(
		store,
		config.rotation,
		SmallRng::seed_from_u64(seed),
	)));
	let initial = rotation.borrow().layout();
	let motion = Rc::new(RefCell::new(MotionState::new(&initial, config.motion)));

	let layout = RwSignal::new(initial);
	let frame = RwSignal::new(motion.borrow().frame());
	let interaction = RwSignal::new(Interaction::default());
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let timers: Timers = Timers::default();
	let frame_loop = StoredValue::new_local(FrameLoop::<FrameCallback>::default());

	let apply: ApplyTemplate = {
		let (rotation, motion) = (rotation.clone(), motion.clone());
		Rc::new(move |index: usize| {
			let next = rotation.borrow_mut().activate(index);
			debug!("graph animation: showing {} ({})", next.name, next.index);
			let ambient = next.ambient_tooltip();
			{
				let mut motion = motion.borrow_mut();
				motion.retarget(&next);
				frame.set(motion.frame());
			}
			layout.set(next);
			interaction.update(|i| i.layout_changed(&ambient));
		})
	};

	let (rotation_init, motion_init, apply_init, timers_init) =
		(rotation.clone(), motion.clone(), apply.clone(), timers.clone());
	Effect::new(move |_| {
		start_rotation(&timers_init, rotation_init.clone(), apply_init.clone());

		let (motion_anim, timers_anim) = (motion_init.clone(), timers_init.clone());
		let slot = frame_loop.with_value(FrameLoop::handle);
		frame_loop.with_value(|frames| {
			frames.install(Closure::new(move || {
				if timers_anim.is_cancelled() {
					return;
				}
				{
					let mut motion = motion_anim.borrow_mut();
					motion.tick(FRAME_DT);
					frame.set(motion.frame());
				}
				if let Some(slot) = slot.upgrade() {
					if let Some(cb) = &*slot.borrow() {
						request_frame(cb, &timers_anim);
					}
				}
			}));
			frames.with(|cb| request_frame(cb, &timers_init));
		});
	});

	let timers_cleanup = timers.clone();
	on_cleanup(move || {
		timers_cleanup.cancel();
		let _ = frame_loop.try_with_value(FrameLoop::release);
	});

	let container_size = move || {
		container_ref.get_untracked().and_then(|el| {
			let rect = el.get_bounding_client_rect();
			Size::measured(rect.width(), rect.height())
		})
	};
	let relative = move |ev: &PointerEvent| {
		let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
		match container_ref.get_untracked() {
			Some(el) => {
				let rect = el.get_bounding_client_rect();
				if rect.width() > 0.0 && rect.height() > 0.0 {
					Point::new(x - rect.left(), y - rect.top())
				} else {
					Point::new(x, y)
				}
			}
			None => Point::new(x, y),
		}
	};
	let ambient = move || layout.with_untracked(Layout::ambient_tooltip);

	let on_pointerenter = move |ev: PointerEvent| {
		let at = relative(&ev);
		let ambient = ambient();
		interaction.update(|i| i.pointer_enter(at, &ambient));
	};
	let on_pointermove = move |ev: PointerEvent| {
		let at = relative(&ev);
		let ambient = ambient();
		interaction.update(|i| i.pointer_move(at, &ambient));
	};
	let on_pointerleave = move |_: PointerEvent| {
		interaction.update(Interaction::pointer_leave);
	};
	let leave_node = move || {
		let ambient = ambient();
		interaction.update(|i| i.node_leave(&ambient));
	};

	let node_views = ROSTER
		.iter()
		.enumerate()
		.map(|(slot, definition)| {
			let visible = move || layout.with(|l| l.nodes[slot].visible);
			let node = move || layout.with_untracked(|l| l.nodes[slot].clone());
			let on_enter = move |_: PointerEvent| {
				let node = node();
				let at = container_size()
					.map(|size| size.node_center(&node))
					.unwrap_or_else(|| interaction.with_untracked(Interaction::pointer));
				interaction.update(|i| i.node_enter(&node, at));
			};
			let on_focus = move |_: web_sys::FocusEvent| {
				let node = node();
				let size = container_size();
				interaction.update(|i| i.node_focus(&node, size));
			};
			view! {
				<g data-node={definition.id.as_str()}>
					<circle
						class="graph-node-halo"
						cx=move || frame.with(|f| fmt(f.node(slot).halo_cx))
						cy=move || frame.with(|f| fmt(f.node(slot).halo_cy))
						r=move || frame.with(|f| fmt(f.node(slot).halo_r))
						opacity=move || frame.with(|f| fmt(f.node(slot).halo_opacity))
						fill="rgba(56, 189, 248, 0.18)"
						style="pointer-events: none"
					/>
					<circle
						class="graph-node"
						class:interactive=visible
						cx=move || frame.with(|f| fmt(f.node(slot).cx))
						cy=move || frame.with(|f| fmt(f.node(slot).cy))
						r=move || frame.with(|f| fmt(f.node(slot).r))
						opacity=move || frame.with(|f| fmt(f.node(slot).opacity))
						fill="url(#nodeGradient)"
						stroke="rgba(14, 165, 233, 0.45)"
						stroke-width="0.55"
						style=move || {
							if visible() { "pointer-events: auto" } else { "pointer-events: none" }
						}
						role="button"
						tabindex=move || { if visible() { "0" } else { "-1" } }
						aria-label=move || {
							layout.with(|l| {
								let n = &l.nodes[slot];
								format!("{}: {}", n.label, n.description)
							})
						}
						on:pointerenter=on_enter
						on:pointerleave=move |_: PointerEvent| leave_node()
						on:focus=on_focus
						on:blur=move |_: web_sys::FocusEvent| leave_node()
					/>
				</g>
			}
		})
		.collect_view();

	let edges = move || {
		layout.with(|l| {
			l.visible_edges()
				.map(|(index, edge)| (index, edge.clone()))
				.collect::<Vec<_>>()
		})
	};

	let tooltip = move || {
		interaction.with(|i| i.content().cloned()).map(|content| {
			let style = move || {
				let pos = interaction.with(|i| i.tooltip_position(container_size(), &tooltip_config));
				format!("left: {:.1}px; top: {:.1}px;", pos.x, pos.y)
			};
			view! {
				<div class="graph-tooltip" style=style>
					<p class="graph-tooltip-label">{content.label}</p>
					<p class="graph-tooltip-description">{content.description}</p>
				</div>
			}
		})
	};

	view! {
		<div
			node_ref=container_ref
			class="graph-animation"
			on:pointerenter=on_pointerenter
			on:pointermove=on_pointermove
			on:pointerleave=on_pointerleave
		>
			<div class="graph-animation-backdrop" />
			<svg
				viewBox="0 0 100 100"
				class="graph-animation-surface"
				aria-hidden="true"
				on:pointerleave=move |_: PointerEvent| leave_node()
			>
				<circle
					cx="50"
					cy="50"
					r=move || frame.with(|f| fmt(f.glow_r))
					opacity=move || frame.with(|f| fmt(f.glow_opacity))
					fill="url(#ambientGlow)"
				/>

				<For
					each=edges
					key=|(_, edge)| edge.id.clone()
					children=move |(index, edge)| {
						let (from, to) = (edge.from.slot(), edge.to.slot());
						view! {
							<line
								x1=move || frame.with(|f| fmt(f.node(from).cx))
								y1=move || frame.with(|f| fmt(f.node(from).cy))
								x2=move || frame.with(|f| fmt(f.node(to).cx))
								y2=move || frame.with(|f| fmt(f.node(to).cy))
								opacity=move || frame.with(|f| fmt(f.edge(index).opacity))
								stroke-dashoffset=move || frame.with(|f| fmt(f.edge(index).dash_offset))
								stroke-width={fmt(edge.stroke_width())}
								stroke="currentColor"
								stroke-linecap="round"
								stroke-dasharray={if edge.dashed { "4 10" } else { "1" }}
								style="pointer-events: none"
							/>
						}
					}
				/>

				{node_views}

				<text
					x="50"
					y="90"
					text-anchor="middle"
					class="graph-animation-caption"
					opacity=move || frame.with(|f| fmt(f.caption_opacity))
				>
					{move || layout.with(Layout::display_name)}
				</text>

				<defs>
					<radialGradient id="ambientGlow" cx="50%" cy="50%" r="85%">
						<stop offset="0%" stop-color="rgba(125, 211, 252, 0.3)" />
						<stop offset="35%" stop-color="rgba(56, 189, 248, 0.18)" />
						<stop offset="100%" stop-color="rgba(56, 189, 248, 0)" />
					</radialGradient>
					<radialGradient id="nodeGradient" cx="50%" cy="50%" r="50%">
						<stop offset="0%" stop-color="rgba(56, 189, 248, 0.85)" />
						<stop offset="70%" stop-color="rgba(14, 165, 233, 0.35)" />
						<stop offset="100%" stop-color="rgba(14, 165, 233, 0)" />
					</radialGradient>
				</defs>
			</svg>
			{tooltip}
		</div>
	}
}
