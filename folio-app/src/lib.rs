//! # Folio WASM Application
//!
//! Browser binding for the résumé page. Mounting scans the composed markup
//! for `data-motion` descriptors, hides each element's rendered end state
//! and replays it with the `folio-core` animation engine:
//!
//! - reveals, counters and meters start when their element scrolls into view
//! - the tagline types out after mount while its caret blinks
//! - the hero backdrop follows scroll and pointer
//! - the reading-progress bar and condensed header follow scroll
//!
//! Printing (`beforeprint`) and unmounting jump everything to its end state.
//!
//! ## Usage
//!
//! Build for WASM:
//! ```bash
//! wasm-pack build --target web folio-app --out-dir ../dist/pkg
//! ```
//!
//! Then import in JavaScript:
//! ```javascript
//! import init, { FolioApp } from './pkg/folio_app.js';
//!
//! await init();
//! const app = new FolioApp();
//! app.mount('main');
//! console.log(app.boundCount());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod binding;
mod dom;
pub mod error;
mod handles;
mod stage;

pub use binding::{Binding, Patch};
pub use error::{AppError, AppResult};
pub use stage::{CONDENSE_AFTER_PX, SLOT_ATTRIBUTE};

use wasm_bindgen::prelude::*;

use stage::{Stage, StageHandle};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_error_panic_hook::set_once();
    tracing::info!(version = folio_core::VERSION, "Folio WASM initialized");
}

/// The page's animation host.
#[wasm_bindgen]
pub struct FolioApp {
    stage: Option<StageHandle>,
}

#[wasm_bindgen]
impl FolioApp {
    /// Create an unmounted app.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> FolioApp {
        Self { stage: None }
    }

    /// Bind every animated element under `selector`.
    ///
    /// Returns the number of bound elements. Elements whose descriptor
    /// cannot be read are skipped and keep their rendered state.
    ///
    /// # Errors
    ///
    /// Returns an error if already mounted, if `selector` matches nothing,
    /// or if the browser rejects an observer, timer or listener.
    pub fn mount(&mut self, selector: &str) -> Result<usize, JsValue> {
        if self.stage.is_some() {
            return Err(AppError::AlreadyMounted.into());
        }
        let stage = Stage::mount(selector)?;
        let count = stage.borrow().bound_count();
        self.stage = Some(stage);
        Ok(count)
    }

    /// Show every element in its end state and release all observers,
    /// timers and listeners. No-op when not mounted.
    pub fn unmount(&mut self) {
        if let Some(stage) = self.stage.take() {
            stage.borrow_mut().finish_all();
            tracing::info!("motion unmounted");
        }
    }

    /// Jump every animation to its end state without unmounting.
    #[wasm_bindgen(js_name = finishAll)]
    pub fn finish_all(&self) {
        if let Some(stage) = &self.stage {
            stage.borrow_mut().finish_all();
        }
    }

    /// Number of bound elements, 0 when not mounted.
    #[wasm_bindgen(js_name = boundCount)]
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.stage
            .as_ref()
            .map_or(0, |stage| stage.borrow().bound_count())
    }

    /// Whether the app is mounted.
    #[wasm_bindgen(js_name = isMounted)]
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.stage.is_some()
    }
}

impl Default for FolioApp {
    fn default() -> Self {
        Self::new()
    }
}
