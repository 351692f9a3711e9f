//! Everything one mount owns.
//!
//! A [`Stage`] holds the bound elements, the motion tracker and every
//! browser handle. Callbacks reach it through a `Weak`, so dropping the
//! last `Rc` releases observers, timers, the frame loop and listeners.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement, MouseEvent, Window};

use folio_core::spec::MOTION_ATTRIBUTE;
use folio_core::{motion, AnimationSpec, MotionTracker};

use crate::binding::{Binding, Patch};
use crate::dom;
use crate::error::{AppError, AppResult};
use crate::handles::{FrameLoop, Interval, Listener, ViewportObserver};

/// Attribute carrying a bound element's slot index.
pub const SLOT_ATTRIBUTE: &str = "data-motion-id";

/// Scroll distance after which the header condenses.
pub const CONDENSE_AFTER_PX: f64 = 80.0;

/// Shared handle to a mounted stage.
pub(crate) type StageHandle = Rc<RefCell<Stage>>;

struct Slot {
    element: HtmlElement,
    caret: Option<HtmlElement>,
    binding: Binding,
}

impl Slot {
    fn apply(&self, patches: &[Patch]) {
        for patch in patches {
            dom::apply(&self.element, self.caret.as_ref(), patch);
        }
    }
}

/// Bound elements plus the handles that drive them.
pub(crate) struct Stage {
    slots: Vec<Slot>,
    tracker: MotionTracker,
    progress_bar: Option<HtmlElement>,
    header: Option<HtmlElement>,
    frames: Option<FrameLoop>,
    observers: Vec<ViewportObserver>,
    typing: HashMap<usize, Interval>,
    carets: Vec<Interval>,
    listeners: Vec<Listener>,
}

impl Stage {
    /// Bind every `[data-motion]` element under `selector` and start
    /// listening.
    pub(crate) fn mount(selector: &str) -> AppResult<StageHandle> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let root = document
            .query_selector(selector)
            .map_err(|err| AppError::dom(&err))?
            .ok_or_else(|| AppError::RootNotFound(selector.to_string()))?;

        let now = dom::now();
        let mut slots = Vec::new();
        for element in dom::motion_targets(&root)? {
            let Some(raw) = element.get_attribute(MOTION_ATTRIBUTE) else {
                continue;
            };
            let spec = match AnimationSpec::from_attribute(&raw) {
                Ok(spec) => spec,
                Err(err) => {
                    tracing::warn!(%err, "skipping element with unreadable motion descriptor");
                    continue;
                }
            };
            element
                .set_attribute(SLOT_ATTRIBUTE, &slots.len().to_string())
                .map_err(|err| AppError::dom(&err))?;
            let caret = matches!(spec, AnimationSpec::Typewriter(_))
                .then(|| dom::caret_for(&element))
                .flatten();
            let mut binding = Binding::from_spec(spec);
            binding.start(now);
            slots.push(Slot {
                element,
                caret,
                binding,
            });
        }
        tracing::info!(bound = slots.len(), selector, "motion mounted");

        let stage = Rc::new(RefCell::new(Self {
            slots,
            tracker: MotionTracker::new(),
            progress_bar: dom::find(&document, "[data-scroll-progress]"),
            header: dom::find(&document, "[data-site-header]"),
            frames: None,
            observers: Vec::new(),
            typing: HashMap::new(),
            carets: Vec::new(),
            listeners: Vec::new(),
        }));
        // End-state markup stays untouched unless every handle is in place.
        Self::attach(&stage, &window)?;
        stage.borrow().conceal();
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        stage.borrow_mut().on_scroll(scroll_y);
        Ok(stage)
    }

    fn attach(stage: &StageHandle, window: &Window) -> AppResult<()> {
        let weak = Rc::downgrade(stage);

        let frames = FrameLoop::new({
            let weak = weak.clone();
            move || weak.upgrade().is_some_and(|stage| stage.borrow_mut().on_frame())
        });
        stage.borrow_mut().frames = Some(frames);

        let groups = stage.borrow().watch_groups();
        for (threshold, elements) in groups {
            let observer = ViewportObserver::new(threshold, {
                let weak = weak.clone();
                move |target, ratio| {
                    weak.upgrade()
                        .map_or(true, |stage| stage.borrow_mut().on_intersect(target, ratio))
                }
            })?;
            for element in &elements {
                observer.observe(element);
            }
            stage.borrow_mut().observers.push(observer);
        }

        let typewriters: Vec<(usize, (f64, Option<f64>))> = stage
            .borrow()
            .slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.binding.typing_periods().map(|periods| (id, periods)))
            .collect();
        for (id, (interval_ms, caret_half_ms)) in typewriters {
            let typing = Interval::start(interval_ms, on_stage(&weak, move |stage| stage.on_type(id)))?;
            stage.borrow_mut().typing.insert(id, typing);
            if let Some(half) = caret_half_ms {
                let caret = Interval::start(half, on_stage(&weak, move |stage| stage.on_caret(id)))?;
                stage.borrow_mut().carets.push(caret);
            }
        }

        let target: &EventTarget = window;
        let listeners = vec![
            Listener::attach(target, "scroll", {
                let weak = weak.clone();
                move |_event: Event| {
                    let scroll_y = web_sys::window()
                        .and_then(|window| window.scroll_y().ok())
                        .unwrap_or(0.0);
                    if let Some(stage) = weak.upgrade() {
                        stage.borrow_mut().on_scroll(scroll_y);
                    }
                }
            })?,
            Listener::attach(target, "mousemove", {
                let weak = weak.clone();
                move |event: Event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    if let Some(stage) = weak.upgrade() {
                        stage
                            .borrow_mut()
                            .on_pointer(f64::from(event.client_x()), f64::from(event.client_y()));
                    }
                }
            })?,
            Listener::attach(target, "beforeprint", move |_event: Event| {
                if let Some(stage) = weak.upgrade() {
                    stage.borrow_mut().finish_all();
                }
            })?,
        ];
        stage.borrow_mut().listeners = listeners;
        Ok(())
    }

    /// Hide each slot's end state until it animates.
    fn conceal(&self) {
        for slot in &self.slots {
            slot.apply(&slot.binding.initial());
        }
    }

    /// Viewport-driven elements grouped by threshold, one observer each.
    fn watch_groups(&self) -> Vec<(f64, Vec<Element>)> {
        let mut groups: Vec<(f64, Vec<Element>)> = Vec::new();
        for slot in &self.slots {
            let Some(threshold) = slot.binding.threshold() else {
                continue;
            };
            let element: Element = slot.element.clone().into();
            match groups
                .iter_mut()
                .find(|(existing, _)| (*existing - threshold).abs() < f64::EPSILON)
            {
                Some((_, elements)) => elements.push(element),
                None => groups.push((threshold, vec![element])),
            }
        }
        groups
    }

    /// Number of bound elements.
    pub(crate) fn bound_count(&self) -> usize {
        self.slots.len()
    }

    /// Route an intersection sample. Returns `true` once the element no
    /// longer needs watching.
    fn on_intersect(&mut self, target: &Element, ratio: f64) -> bool {
        let Some(slot) = target
            .get_attribute(SLOT_ATTRIBUTE)
            .and_then(|id| id.parse::<usize>().ok())
            .and_then(|id| self.slots.get_mut(id))
        else {
            return true;
        };
        let patches = slot.binding.observe(ratio, dom::now());
        slot.apply(&patches);
        if slot.binding.needs_frames() {
            if let Some(frames) = &self.frames {
                frames.ensure_running();
            }
        }
        slot.binding.is_latched()
    }

    fn on_frame(&mut self) -> bool {
        let now = dom::now();
        let mut more = false;
        for slot in &mut self.slots {
            if let Some(patch) = slot.binding.frame(now) {
                slot.apply(std::slice::from_ref(&patch));
            }
            more |= slot.binding.needs_frames();
        }
        more
    }

    fn on_type(&mut self, id: usize) {
        let Some(slot) = self.slots.get_mut(id) else {
            return;
        };
        if let Some(patch) = slot.binding.type_next(dom::now()) {
            slot.apply(std::slice::from_ref(&patch));
        }
        if slot.binding.is_settled() {
            if let Some(timer) = self.typing.get(&id) {
                timer.cancel();
            }
        }
    }

    fn on_caret(&self, id: usize) {
        if let Some(slot) = self.slots.get(id) {
            if let Some(patch) = slot.binding.caret(dom::now()) {
                slot.apply(std::slice::from_ref(&patch));
            }
        }
    }

    fn on_scroll(&mut self, scroll_y: f64) {
        self.tracker.on_scroll(scroll_y);
        if let (Some(bar), Ok(window)) = (&self.progress_bar, dom::window()) {
            let (document_height, viewport_height) = dom::page_extent(&window);
            let progress = self.tracker.scroll_progress(document_height, viewport_height);
            dom::set_styles(bar, &[("width", format!("{:.2}%", progress * 100.0))]);
        }
        if let Some(header) = &self.header {
            let condensed = motion::header_condensed(scroll_y, CONDENSE_AFTER_PX);
            let _ = header.class_list().toggle_with_force("condensed", condensed);
        }
        self.follow_motion();
    }

    fn on_pointer(&mut self, x: f64, y: f64) {
        self.tracker.on_pointer(x, y);
        self.follow_motion();
    }

    fn follow_motion(&self) {
        for slot in &self.slots {
            if let Some(patch) = slot.binding.follow(&self.tracker) {
                slot.apply(std::slice::from_ref(&patch));
            }
        }
    }

    /// Jump every binding to its end state and stop typing.
    pub(crate) fn finish_all(&mut self) {
        let now = dom::now();
        for slot in &mut self.slots {
            let patches = slot.binding.finish(now);
            slot.apply(&patches);
        }
        for timer in self.typing.values() {
            timer.cancel();
        }
        tracing::debug!(bound = self.slots.len(), "motion finished");
    }
}

/// Callback that runs `f` against the stage while it is still mounted.
fn on_stage(
    weak: &Weak<RefCell<Stage>>,
    mut f: impl FnMut(&mut Stage) + 'static,
) -> impl FnMut() + 'static {
    let weak = weak.clone();
    move || {
        if let Some(stage) = weak.upgrade() {
            f(&mut stage.borrow_mut());
        }
    }
}
