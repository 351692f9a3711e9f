//! Owned browser handles.
//!
//! Each wrapper keeps its JS callback alive for as long as it lives and
//! releases the underlying registration on `Drop`, so dropping the owning
//! stage tears everything down.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::error::{AppError, AppResult};

/// `IntersectionObserver` with a single threshold.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// Create an observer calling `on_sample(target, ratio)` per entry.
    /// When the handler returns `true` the target is unobserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser rejects the observer options.
    pub fn new(
        threshold: f64,
        mut on_sample: impl FnMut(&Element, f64) -> bool + 'static,
    ) -> AppResult<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    if on_sample(&target, entry.intersection_ratio()) {
                        observer.unobserve(&target);
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.clamp(0.0, 1.0)));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| AppError::dom(&err))?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Start watching an element.
    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Repeating `setInterval` timer.
pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Call `callback` every `period_ms` (at least 1 ms).
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or the timer is rejected.
    #[allow(clippy::cast_possible_truncation)]
    pub fn start(period_ms: f64, callback: impl FnMut() + 'static) -> AppResult<Self> {
        let window = web_sys::window().ok_or(AppError::NoWindow)?;
        let callback = Closure::<dyn FnMut()>::new(callback);
        let period = if period_ms.is_finite() {
            period_ms.clamp(1.0, f64::from(i32::MAX)).round() as i32
        } else {
            1
        };
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period,
            )
            .map_err(|err| AppError::dom(&err))?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }

    /// Stop firing. The callback stays alive until drop, so this is safe
    /// to call from inside it.
    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Default)]
struct FrameState {
    pending: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

/// `requestAnimationFrame` loop that runs while its step returns `true`.
pub struct FrameLoop {
    state: Rc<RefCell<FrameState>>,
}

impl FrameLoop {
    /// Create an idle loop around `step`.
    pub fn new(mut step: impl FnMut() -> bool + 'static) -> Self {
        let state = Rc::new(RefCell::new(FrameState::default()));
        let weak = Rc::downgrade(&state);
        let callback = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.borrow_mut().pending = None;
            if step() {
                schedule(&state);
            }
        });
        state.borrow_mut().callback = Some(callback);
        Self { state }
    }

    /// Request a frame unless one is already pending.
    pub fn ensure_running(&self) {
        if self.state.borrow().pending.is_none() {
            schedule(&self.state);
        }
    }
}

fn schedule(state: &Rc<RefCell<FrameState>>) {
    let mut state = state.borrow_mut();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(callback) = state.callback.as_ref() else {
        return;
    };
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(handle) => state.pending = Some(handle),
        Err(err) => tracing::warn!(?err, "requestAnimationFrame rejected"),
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        if let (Some(handle), Some(window)) = (state.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
        state.callback = None;
    }
}

/// Event listener removed on drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `callback` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be added.
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> AppResult<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| AppError::dom(&err))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
