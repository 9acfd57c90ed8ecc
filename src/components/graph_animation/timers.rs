//! Cancellable timers owned by one component instance.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::{TimeoutHandle, set_timeout_with_handle};
use log::warn;
use parking_lot::Mutex;

/// Where timeouts actually run.
pub trait TimerBackend {
	type Handle;

	fn set_timeout(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Option<Self::Handle>;
	fn clear_timeout(&self, handle: Self::Handle);
	fn cancel_frame(&self, request_id: i32);
}

/// `window.setTimeout` and `cancelAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl TimerBackend for BrowserTimers {
	type Handle = TimeoutHandle;

	fn set_timeout(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
		set_timeout_with_handle(f, delay)
			.map_err(|err| warn!("failed to schedule timer: {:?}", err))
			.ok()
	}

	fn clear_timeout(&self, handle: TimeoutHandle) {
		handle.clear();
	}

	fn cancel_frame(&self, request_id: i32) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(request_id);
		}
	}
}

struct Pending<H> {
	cancelled: bool,
	next_id: u64,
	timeouts: Vec<(u64, H)>,
	frame: Option<i32>,
}

impl<H> Default for Pending<H> {
	fn default() -> Self {
		Self {
			cancelled: false,
			next_id: 0,
			timeouts: Vec::new(),
			frame: None,
		}
	}
}

/// Timeouts and the animation frame request of a mounted component.
///
/// Once cancelled, no guarded callback runs and nothing new is scheduled.
pub struct Timers<B: TimerBackend = BrowserTimers> {
	inner: Arc<Mutex<Pending<B::Handle>>>,
	backend: Arc<B>,
}

impl<B: TimerBackend> Clone for Timers<B> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
			backend: self.backend.clone(),
		}
	}
}

impl<B: TimerBackend + Default + 'static> Default for Timers<B> {
	fn default() -> Self {
		Self::new(B::default())
	}
}

impl<B: TimerBackend + 'static> Timers<B> {
	pub fn new(backend: B) -> Self {
		Self {
			inner: Arc::new(Mutex::new(Pending::default())),
			backend: Arc::new(backend),
		}
	}

	#[cfg(test)]
	pub(crate) fn backend(&self) -> &B {
		&self.backend
	}

	pub fn is_cancelled(&self) -> bool {
		self.inner.lock().cancelled
	}

	/// Runs `f` once after `delay` unless cancelled first.
	pub fn schedule(&self, delay: Duration, f: impl FnOnce() + 'static) {
		let id = {
			let mut pending = self.inner.lock();
			if pending.cancelled {
				return;
			}
			pending.next_id += 1;
			pending.next_id
		};
		let callback = self.guard(id, f);
		if let Some(handle) = self.backend.set_timeout(delay, Box::new(callback)) {
			self.inner.lock().timeouts.push((id, handle));
		}
	}

	/// Wraps `f` so it forgets timer `id` and only runs while live.
	fn guard(&self, id: u64, f: impl FnOnce() + 'static) -> impl FnOnce() + 'static {
		let this = self.clone();
		move || {
			let live = {
				let mut pending = this.inner.lock();
				pending.timeouts.retain(|(pending_id, _)| *pending_id != id);
				!pending.cancelled
			};
			if live {
				f();
			}
		}
	}

	/// Remembers the latest `requestAnimationFrame` id.
	pub fn track_frame(&self, request_id: i32) {
		self.inner.lock().frame = Some(request_id);
	}

	#[cfg(test)]
	fn pending(&self) -> usize {
		self.inner.lock().timeouts.len()
	}

	/// Clears every pending timeout and the frame request.
	pub fn cancel(&self) {
		let (timeouts, frame) = {
			let mut pending = self.inner.lock();
			pending.cancelled = true;
			(std::mem::take(&mut pending.timeouts), pending.frame.take())
		};
		for (_, handle) in timeouts {
			self.backend.clear_timeout(handle);
		}
		if let Some(id) = frame {
			self.backend.cancel_frame(id);
		}
	}
}

/// Owner of a callback that re-requests itself every frame.
///
/// The callback reaches its own slot through [`FrameLoop::handle`], a weak
/// reference, so releasing or dropping the owner frees it.
pub struct FrameLoop<F> {
	slot: Rc<RefCell<Option<F>>>,
}

impl<F> Default for FrameLoop<F> {
	fn default() -> Self {
		Self {
			slot: Rc::new(RefCell::new(None)),
		}
	}
}

impl<F> FrameLoop<F> {
	pub fn handle(&self) -> Weak<RefCell<Option<F>>> {
		Rc::downgrade(&self.slot)
	}

	pub fn install(&self, callback: F) {
		*self.slot.borrow_mut() = Some(callback);
	}

	pub fn with<R>(&self, f: impl FnOnce(&F) -> R) -> Option<R> {
		self.slot.borrow().as_ref().map(f)
	}

	/// Drops the callback. Later frames find an empty slot and stop.
	pub fn release(&self) {
		self.slot.borrow_mut().take();
	}
}

/// Deterministic backend: time only moves when a timeout is fired.
#[cfg(test)]
pub(crate) mod manual {
	use std::cell::{Cell, RefCell};
	use std::time::Duration;

	use super::TimerBackend;

	struct Queued {
		id: u64,
		due: Duration,
		callback: Box<dyn FnOnce()>,
	}

	#[derive(Default)]
	pub struct ManualClock {
		now: Cell<Duration>,
		next_id: Cell<u64>,
		queue: RefCell<Vec<Queued>>,
		cancelled_frames: RefCell<Vec<i32>>,
	}

	impl ManualClock {
		pub fn now(&self) -> Duration {
			self.now.get()
		}

		pub fn pending(&self) -> usize {
			self.queue.borrow().len()
		}

		pub fn cancelled_frames(&self) -> Vec<i32> {
			self.cancelled_frames.borrow().clone()
		}

		/// Removes the earliest timeout without running it, advancing time.
		pub fn take_next(&self) -> Option<Box<dyn FnOnce()>> {
			let mut queue = self.queue.borrow_mut();
			let index = queue
				.iter()
				.enumerate()
				.min_by_key(|(_, t)| (t.due, t.id))
				.map(|(i, _)| i)?;
			let queued = queue.remove(index);
			self.now.set(queued.due);
			Some(queued.callback)
		}

		/// Runs the earliest timeout. False when nothing is queued.
		pub fn fire_next(&self) -> bool {
			match self.take_next() {
				Some(callback) => {
					callback();
					true
				}
				None => false,
			}
		}
	}

	impl TimerBackend for ManualClock {
		type Handle = u64;

		fn set_timeout(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Option<u64> {
			let id = self.next_id.get() + 1;
			self.next_id.set(id);
			self.queue.borrow_mut().push(Queued {
				id,
				due: self.now.get() + delay,
				callback: f,
			});
			Some(id)
		}

		fn clear_timeout(&self, handle: u64) {
			self.queue.borrow_mut().retain(|t| t.id != handle);
		}

		fn cancel_frame(&self, request_id: i32) {
			self.cancelled_frames.borrow_mut().push(request_id);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::manual::ManualClock;
	use super::*;

	fn manual() -> Timers<ManualClock> {
		Timers::new(ManualClock::default())
	}

	/// Re-arms itself every 100 ms, counting firings.
	fn tick_forever(timers: Timers<ManualClock>, count: Rc<Cell<usize>>) {
		let next = timers.clone();
		timers.schedule(Duration::from_millis(100), move || {
			count.set(count.get() + 1);
			tick_forever(next, count);
		});
	}

	#[test]
	fn guarded_callback_runs_while_live() {
		let timers: Timers = Timers::default();
		let ran = Rc::new(Cell::new(false));
		let flag = ran.clone();
		timers.guard(1, move || flag.set(true))();
		assert!(ran.get());
	}

	#[test]
	fn guarded_callback_is_skipped_after_cancel() {
		let timers: Timers = Timers::default();
		let ran = Rc::new(Cell::new(false));
		let flag = ran.clone();
		let callback = timers.guard(1, move || flag.set(true));
		timers.cancel();
		callback();
		assert!(!ran.get());
		assert!(timers.is_cancelled());
	}

	#[test]
	fn cancelled_set_schedules_nothing() {
		let timers: Timers = Timers::default();
		timers.cancel();
		timers.schedule(Duration::from_millis(10), || panic!("must not run"));
		assert_eq!(timers.pending(), 0);
	}

	#[test]
	fn clones_share_cancellation() {
		let timers: Timers = Timers::default();
		let other = timers.clone();
		other.cancel();
		assert!(timers.is_cancelled());
	}

	#[test]
	fn fired_timeouts_are_forgotten() {
		let timers = manual();
		timers.schedule(Duration::from_millis(5), || {});
		assert_eq!(timers.pending(), 1);
		assert!(timers.backend().fire_next());
		assert_eq!(timers.pending(), 0);
		assert_eq!(timers.backend().now(), Duration::from_millis(5));
	}

	#[test]
	fn self_rearming_chain_stops_on_cancel() {
		let timers = manual();
		let count = Rc::new(Cell::new(0));
		tick_forever(timers.clone(), count.clone());

		assert!(timers.backend().fire_next());
		assert!(timers.backend().fire_next());
		assert_eq!(count.get(), 2);
		assert_eq!(timers.backend().pending(), 1);

		timers.cancel();
		assert_eq!(timers.backend().pending(), 0);
		assert!(!timers.backend().fire_next());
		assert_eq!(count.get(), 2);
	}

	#[test]
	fn callback_already_dequeued_does_not_run_after_cancel() {
		let timers = manual();
		let count = Rc::new(Cell::new(0));
		tick_forever(timers.clone(), count.clone());
		assert!(timers.backend().fire_next());

		let in_flight = timers.backend().take_next().unwrap();
		timers.cancel();
		in_flight();
		assert_eq!(count.get(), 1);
		assert_eq!(timers.backend().pending(), 0);
	}

	#[test]
	fn cancel_releases_tracked_frame() {
		let timers = manual();
		timers.track_frame(7);
		timers.track_frame(9);
		timers.cancel();
		timers.cancel();
		assert_eq!(timers.backend().cancelled_frames(), [9]);
	}

	#[test]
	fn released_frame_loop_frees_its_callback() {
		let frame_loop: FrameLoop<Box<dyn FnMut()>> = FrameLoop::default();
		let marker = Rc::new(());
		let handle = frame_loop.handle();
		let held = marker.clone();
		let self_ref = handle.clone();
		frame_loop.install(Box::new(move || {
			let _ = (&held, self_ref.upgrade());
		}));

		assert_eq!(Rc::strong_count(&marker), 2);
		assert_eq!(frame_loop.with(|_| ()), Some(()));

		frame_loop.release();
		assert_eq!(Rc::strong_count(&marker), 1);
		assert_eq!(frame_loop.with(|_| ()), None);
	}

	#[test]
	fn dropped_frame_loop_leaves_no_owner() {
		let frame_loop: FrameLoop<Box<dyn FnMut()>> = FrameLoop::default();
		let handle = frame_loop.handle();
		let self_ref = handle.clone();
		frame_loop.install(Box::new(move || {
			let _ = self_ref.upgrade();
		}));
		drop(frame_loop);
		assert!(handle.upgrade().is_none());
	}
}
