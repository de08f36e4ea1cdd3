//! Opus Genesis landing page: a static shell over a full-viewport WebGL2
//! shader background, compiled to `wasm32-unknown-unknown` and loaded from
//! `static/index.html`.
//!
//! The render bookkeeping ([`background`]) and the fixed page content
//! ([`content`], [`shader`]) are platform-agnostic so their invariants test
//! natively; everything that talks to the DOM or the GPU lives in [`wasm`]
//! and only compiles for the wasm32 target.

pub mod background;
pub mod content;
pub mod shader;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod render;
    pub mod shell;

    /// Canvas the background draws into, created by `static/index.html`.
    pub const BACKGROUND_CANVAS_ID: &str = "background";
    /// Element the page shell mounts under.
    pub const APP_ROOT_ID: &str = "app";

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let root = document
            .get_element_by_id(APP_ROOT_ID)
            .ok_or("app root not found")?;
        shell::mount(&document, &root)?;

        let canvas = document
            .get_element_by_id(BACKGROUND_CANVAS_ID)
            .ok_or("background canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        // Bring-up failures are logged and disabled inside `start`; the
        // shell above stands on its own either way.
        let _background = render::start(canvas);

        Ok(())
    }
}
