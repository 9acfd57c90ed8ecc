//! Tracks which in-page section the reader is looking at.

use js_sys::Array;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Shrinks the viewport to a band around its vertical middle.
pub const ROOT_MARGIN: &str = "-45% 0px -45% 0px";
pub const THRESHOLDS: [f64; 4] = [0.0, 0.2, 0.4, 0.6];

/// Observation of one section at the moment the observer fired.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionProbe<'a> {
	pub id: &'a str,
	pub intersecting: bool,
	/// Distance from the viewport top to the section's top edge.
	pub top: f64,
}

/// Picks the topmost intersecting section, or failing that the one whose top
/// edge sits nearest the viewport top. Ties go to the earlier probe.
pub fn pick_active_section<'a>(probes: &[SectionProbe<'a>]) -> Option<&'a str> {
	probes
		.iter()
		.filter(|p| p.intersecting)
		.min_by(|a, b| a.top.total_cmp(&b.top))
		.or_else(|| probes.iter().min_by(|a, b| a.top.abs().total_cmp(&b.top.abs())))
		.map(|p| p.id)
}

type Observation = (IntersectionObserver, Closure<dyn FnMut(Array)>);

/// Returns the id of the section currently in the middle of the viewport.
///
/// Starts on the first id and stays `None` when `section_ids` is empty or
/// none of the ids exist in the document.
pub fn use_active_section(section_ids: &'static [&'static str]) -> ReadSignal<Option<&'static str>> {
	let active = RwSignal::new(section_ids.first().copied());
	let observation = StoredValue::new_local(None::<Observation>);

	Effect::new(move |_| {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		let elements: Vec<_> = section_ids
			.iter()
			.filter_map(|id| document.get_element_by_id(id))
			.collect();
		if elements.is_empty() {
			active.set(None);
			return;
		}

		let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
			let entries: Vec<IntersectionObserverEntry> =
				entries.iter().filter_map(|e| e.dyn_into().ok()).collect();
			let ids: Vec<String> = entries.iter().map(|e| e.target().id()).collect();
			let probes: Vec<SectionProbe> = entries
				.iter()
				.zip(&ids)
				.map(|(entry, id)| SectionProbe {
					id,
					intersecting: entry.is_intersecting(),
					top: entry.bounding_client_rect().top(),
				})
				.collect();
			let picked = pick_active_section(&probes)
				.and_then(|id| section_ids.iter().copied().find(|known| *known == id));
			if let Some(id) = picked {
				if active.get_untracked() != Some(id) {
					debug!("active section: {}", id);
					active.set(Some(id));
				}
			}
		});

		let options = IntersectionObserverInit::new();
		options.set_root_margin(ROOT_MARGIN);
		let thresholds: Array = THRESHOLDS.iter().map(|t| JsValue::from_f64(*t)).collect();
		options.set_threshold(&thresholds);

		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
			Ok(observer) => {
				for element in &elements {
					observer.observe(element);
				}
				observation.set_value(Some((observer, callback)));
			}
			Err(err) => {
				warn!("IntersectionObserver unavailable: {:?}", err);
				active.set(None);
			}
		}
	});

	on_cleanup(move || {
		let _ = observation.try_update_value(|slot| {
			if let Some((observer, _)) = slot.take() {
				observer.disconnect();
			}
		});
	});

	active.read_only()
}
