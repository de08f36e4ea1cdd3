#![cfg(target_arch = "wasm32")]

//! Browser integration tests: the shell and the background renderer against
//! a real DOM and (where the test runner provides one) a real WebGL2 context.

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use opus_wasm::background::Phase;
use opus_wasm::content;
use opus_wasm::wasm::{render, shell};

wasm_bindgen_test_configure!(run_in_browser);

/// Fresh canvas appended to the body with a pinned layout size, so the
/// per-frame client-rect read sees exactly these dimensions.
fn mount_canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas
        .set_attribute(
            "style",
            &format!("display:block;width:{width}px;height:{height}px"),
        )
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn unmount(canvas: &HtmlCanvasElement) {
    canvas.remove();
}

/// Resolves after the browser delivers one animation frame.
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn shell_renders_all_static_content() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("main").unwrap();

    shell::mount(&document, &root).unwrap();

    let text = root.text_content().unwrap();
    assert!(text.contains(content::HEADLINE));
    assert!(text.contains(content::CONTRACT_ADDRESS));
    for line in content::CREED_LEFT.iter().chain(content::CREED_RIGHT.iter()) {
        assert!(text.contains(line), "missing creed line: {line}");
    }

    let buttons = root.query_selector_all("button.social-link").unwrap();
    assert_eq!(buttons.length(), content::SOCIAL_LINKS.len() as u32);
}

#[wasm_bindgen_test]
fn mount_without_backend_disables_and_leaves_nothing_to_release() {
    let canvas = mount_canvas(320, 240);
    // Claiming the canvas for 2d first makes every later webgl2 request
    // return null, which is exactly the "backend unavailable" probe result.
    canvas.get_context("2d").unwrap();

    let handle = render::start(canvas.clone());

    assert_eq!(handle.phase(), Phase::Disabled);
    assert!(handle.uniforms().is_none(), "no frame may have drawn");
    assert!(!handle.dispose(), "a disabled mount owns no GL resources");
    unmount(&canvas);
}

#[wasm_bindgen_test]
async fn uniforms_track_the_viewport_and_time_advances() {
    let canvas = mount_canvas(800, 600);
    let handle = render::start(canvas.clone());

    if handle.phase() != Phase::Running {
        // Headless runners without GL still must leave the page intact.
        assert_eq!(handle.phase(), Phase::Disabled);
        unmount(&canvas);
        return;
    }

    next_frame().await;
    let first = handle.uniforms().expect("one frame should have drawn");
    assert_eq!(first.resolution, [800.0, 600.0]);
    assert!(first.time_secs >= 0.0);

    next_frame().await;
    let second = handle.uniforms().unwrap();
    assert_eq!(second.resolution, first.resolution);
    assert!(second.time_secs > first.time_secs);

    assert!(handle.dispose());
    unmount(&canvas);
}

#[wasm_bindgen_test]
async fn zero_area_surface_draws_without_faulting() {
    let canvas = mount_canvas(0, 0);
    let handle = render::start(canvas.clone());

    if handle.phase() == Phase::Running {
        next_frame().await;
        let uniforms = handle.uniforms().expect("frame on empty surface");
        assert_eq!(uniforms.resolution, [0.0, 0.0]);
        assert!(handle.dispose());
    }
    unmount(&canvas);
}

#[wasm_bindgen_test]
async fn dispose_releases_once_and_stops_the_frame_loop() {
    let canvas = mount_canvas(400, 300);
    let handle = render::start(canvas.clone());

    if handle.phase() != Phase::Running {
        unmount(&canvas);
        return;
    }

    next_frame().await;
    assert!(handle.dispose(), "first dispose performs the release");
    assert!(!handle.dispose(), "second dispose is a no-op");
    assert_eq!(handle.phase(), Phase::Disposed);

    // No callback may fire after disposal: the snapshot stays frozen.
    let frozen = handle.uniforms();
    next_frame().await;
    next_frame().await;
    assert_eq!(handle.uniforms(), frozen);
    unmount(&canvas);
}
