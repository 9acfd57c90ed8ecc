//! Which template is active, and how the next one is chosen.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rand::Rng;

use crate::config::RotationConfig;

use super::catalog::templates;
use super::layout::{Layout, materialize};
use super::timers::{TimerBackend, Timers};

/// Applies a template index to the rendered state.
pub(crate) type ApplyTemplate = Rc<dyn Fn(usize)>;
pub(crate) type SharedRotation<R> = Rc<RefCell<Rotation<R>>>;

/// Last template index shown by any graph animation instance.
///
/// Shared through context so a remounted component resumes where the
/// previous one stopped.
#[derive(Clone, Debug, Default)]
pub struct TemplateStore(Arc<AtomicUsize>);

impl TemplateStore {
	pub fn last_shown(&self) -> usize {
		self.0.load(Ordering::Acquire)
	}

	pub fn record(&self, index: usize) {
		self.0.store(index, Ordering::Release);
	}
}

/// Rotation state for one component instance.
pub struct Rotation<R> {
	store: TemplateStore,
	active: usize,
	len: usize,
	config: RotationConfig,
	rng: R,
}

impl<R: Rng> Rotation<R> {
	/// Starts from the store's last index over the built-in catalog.
	pub fn new(store: TemplateStore, config: RotationConfig, rng: R) -> Self {
		Self::with_len(store, templates().len(), config, rng)
	}

	pub(crate) fn with_len(store: TemplateStore, len: usize, config: RotationConfig, rng: R) -> Self {
		let len = len.max(1);
		let active = store.last_shown() % len;
		Self {
			store,
			active,
			len,
			config,
			rng,
		}
	}

	#[cfg(test)]
	pub fn active(&self) -> usize {
		self.active
	}

	pub fn layout(&self) -> Layout {
		Layout::from_catalog(self.active)
	}

	pub fn kickoff_delay(&self) -> Duration {
		self.config.kickoff_delay
	}

	/// The first advance after mount moves to the next template in order.
	pub fn kickoff_target(&self) -> usize {
		(self.active + 1) % self.len
	}

	/// Uniform in `[min_delay, max_delay)`.
	pub fn next_delay(&mut self) -> Duration {
		let (min, max) = (self.config.min_delay, self.config.max_delay);
		if max <= min {
			return min;
		}
		let micros = self
			.rng
			.random_range(min.as_micros() as u64..max.as_micros() as u64);
		Duration::from_micros(micros)
	}

	/// Uniform over the catalog, never the active index when there is a
	/// choice.
	pub fn pick_next(&mut self) -> usize {
		let mut next = self.rng.random_range(0..self.len);
		if self.len > 1 {
			while next == self.active {
				next = self.rng.random_range(0..self.len);
			}
		}
		next
	}

	/// Makes `index` (wrapped) active, records it and returns its layout.
	pub fn activate(&mut self, index: usize) -> Layout {
		let index = index % self.len;
		self.active = index;
		self.store.record(index);
		let catalog = templates();
		materialize(index, &catalog[index % catalog.len()])
	}
}

/// Arms the kickoff advance and the randomized chain of switches. Both run
/// until `timers` is cancelled.
pub(crate) fn start_rotation<R, B>(timers: &Timers<B>, rotation: SharedRotation<R>, apply: ApplyTemplate)
where
	R: Rng + 'static,
	B: TimerBackend + 'static,
{
	let delay = rotation.borrow().kickoff_delay();
	let (kickoff_rotation, kickoff_apply) = (rotation.clone(), apply.clone());
	timers.schedule(delay, move || {
		let next = kickoff_rotation.borrow().kickoff_target();
		kickoff_apply(next);
	});
	schedule_next(timers.clone(), rotation, apply);
}

/// Each firing re-arms itself.
fn schedule_next<R, B>(timers: Timers<B>, rotation: SharedRotation<R>, apply: ApplyTemplate)
where
	R: Rng + 'static,
	B: TimerBackend + 'static,
{
	let delay = rotation.borrow_mut().next_delay();
	let next_timers = timers.clone();
	timers.schedule(delay, move || {
		let next = rotation.borrow_mut().pick_next();
		apply(next);
		schedule_next(next_timers, rotation, apply);
	});
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::super::timers::manual::ManualClock;
	use super::*;

	fn rotation(store: &TemplateStore) -> Rotation<StdRng> {
		Rotation::new(store.clone(), RotationConfig::default(), StdRng::seed_from_u64(42))
	}

	#[test]
	fn starts_from_stored_index() {
		let store = TemplateStore::default();
		store.record(4);
		assert_eq!(rotation(&store).active(), 4);
		assert_eq!(rotation(&store).layout().name, "chain");
	}

	#[test]
	fn stored_index_wraps() {
		let store = TemplateStore::default();
		store.record(templates().len() + 1);
		assert_eq!(rotation(&store).active(), 1);
	}

	#[test]
	fn kickoff_advances_in_catalog_order_and_wraps() {
		let store = TemplateStore::default();
		assert_eq!(rotation(&store).kickoff_target(), 1);
		store.record(templates().len() - 1);
		assert_eq!(rotation(&store).kickoff_target(), 0);
	}

	#[test]
	fn delays_stay_in_range() {
		let store = TemplateStore::default();
		let mut r = rotation(&store);
		for _ in 0..500 {
			let delay = r.next_delay();
			assert!(delay >= Duration::from_millis(4200), "{delay:?}");
			assert!(delay < Duration::from_millis(6400), "{delay:?}");
		}
	}

	#[test]
	fn degenerate_delay_range_uses_minimum() {
		let config = RotationConfig {
			min_delay: Duration::from_millis(500),
			max_delay: Duration::from_millis(500),
			..RotationConfig::default()
		};
		let mut r = Rotation::new(TemplateStore::default(), config, StdRng::seed_from_u64(1));
		assert_eq!(r.next_delay(), Duration::from_millis(500));
	}

	#[test]
	fn random_pick_never_repeats_active() {
		for seed in [1, 7, 42, 1337] {
			let mut r = Rotation::new(
				TemplateStore::default(),
				RotationConfig::default(),
				StdRng::seed_from_u64(seed),
			);
			for _ in 0..200 {
				let before = r.active();
				let next = r.pick_next();
				assert_ne!(next, before);
				assert!(next < templates().len());
				r.activate(next);
			}
		}
	}

	#[test]
	fn random_pick_covers_catalog() {
		let mut r = rotation(&TemplateStore::default());
		let mut seen = vec![false; templates().len()];
		for _ in 0..500 {
			let next = r.pick_next();
			seen[next] = true;
			r.activate(next);
		}
		assert!(seen.iter().all(|&s| s));
	}

	#[test]
	fn single_entry_catalog_may_repeat() {
		let mut r = Rotation::with_len(
			TemplateStore::default(),
			1,
			RotationConfig::default(),
			StdRng::seed_from_u64(3),
		);
		assert_eq!(r.pick_next(), 0);
		assert_eq!(r.kickoff_target(), 0);
	}

	#[test]
	fn activation_records_and_materializes() {
		let store = TemplateStore::default();
		let mut r = rotation(&store);
		let layout = r.activate(5);
		assert_eq!(store.last_shown(), 5);
		assert_eq!(r.active(), 5);
		assert_eq!(layout.name, "wheel");
		assert_eq!(layout.index, 5);
		assert_eq!(layout.nodes.len(), 8);

		let resumed = rotation(&store);
		assert_eq!(resumed.active(), 5);
	}

	#[test]
	fn layouts_are_self_consistent_across_switches() {
		let mut r = rotation(&TemplateStore::default());
		for _ in 0..50 {
			let next = r.pick_next();
			let layout = r.activate(next);
			for edge in &layout.edges {
				assert!(layout.node(edge.from).is_some());
				assert!(layout.node(edge.to).is_some());
				assert!(edge.id.starts_with(layout.name));
			}
		}
	}

	struct Driven {
		timers: Timers<ManualClock>,
		applied: Rc<RefCell<Vec<usize>>>,
	}

	fn drive(store: &TemplateStore) -> Driven {
		let timers = Timers::new(ManualClock::default());
		let rotation: SharedRotation<StdRng> = Rc::new(RefCell::new(rotation(store)));
		let applied = Rc::new(RefCell::new(Vec::new()));
		let apply: ApplyTemplate = {
			let (rotation, applied) = (rotation.clone(), applied.clone());
			Rc::new(move |index: usize| {
				rotation.borrow_mut().activate(index);
				applied.borrow_mut().push(index);
			})
		};
		start_rotation(&timers, rotation, apply);
		Driven { timers, applied }
	}

	#[test]
	fn kickoff_fires_before_the_random_chain() {
		let store = TemplateStore::default();
		store.record(3);
		let driven = drive(&store);
		let clock = driven.timers.backend();
		assert_eq!(clock.pending(), 2);

		assert!(clock.fire_next());
		assert_eq!(clock.now(), Duration::from_millis(1200));
		assert_eq!(*driven.applied.borrow(), [4]);
		assert_eq!(store.last_shown(), 4);
		assert_eq!(clock.pending(), 1);
	}

	#[test]
	fn chain_rearms_after_every_switch() {
		let driven = drive(&TemplateStore::default());
		let clock = driven.timers.backend();
		assert!(clock.fire_next());

		let mut last = clock.now();
		for round in 0..20 {
			assert!(clock.fire_next());
			let gap = clock.now() - if round == 0 { Duration::ZERO } else { last };
			assert!(gap >= Duration::from_millis(4200) && gap < Duration::from_millis(6400), "{gap:?}");
			last = clock.now();
			assert_eq!(clock.pending(), 1);
		}

		let applied = driven.applied.borrow();
		assert_eq!(applied.len(), 21);
		for pair in applied.windows(2) {
			assert_ne!(pair[0], pair[1]);
		}
	}

	#[test]
	fn cancel_stops_a_running_chain() {
		let driven = drive(&TemplateStore::default());
		let clock = driven.timers.backend();
		for _ in 0..3 {
			assert!(clock.fire_next());
		}
		let before = driven.applied.borrow().len();

		driven.timers.cancel();
		assert_eq!(clock.pending(), 0);
		assert!(!clock.fire_next());
		assert_eq!(driven.applied.borrow().len(), before);
	}

	#[test]
	fn cancel_before_kickoff_applies_nothing() {
		let driven = drive(&TemplateStore::default());
		driven.timers.cancel();
		assert!(!driven.timers.backend().fire_next());
		assert!(driven.applied.borrow().is_empty());
	}
}
