//! WebGL2 pipeline and frame loop for the shader background.
//!
//! [`start`] never fails the page: the background is decorative, so every
//! bring-up error ends in [`Phase::Disabled`] with a console diagnostic and
//! the shell renders on without it. A successful mount owns all of its GL
//! state through one `Rc<RefCell<..>>` cell shared with the frame closure;
//! nothing lives at module scope, so independent mounts cannot interfere.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    console, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram,
    WebGlShader, WebGlUniformLocation,
};

use crate::background::{FrameUniforms, Lifecycle, Phase, Viewport};
use crate::shader;

/// Why pipeline bring-up stopped. All variants are cosmetic: the caller logs
/// them and disables the effect for this mount.
#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("WebGL2 is not supported in this browser")]
    ContextUnavailable,

    #[error("failed to create GL {0}")]
    CreateFailed(&'static str),

    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: &'static str, log: String },

    #[error("shader program failed to link: {0}")]
    Link(String),

    #[error("shader is missing the `{0}` location")]
    MissingLocation(&'static str),
}

/// GL objects owned by a running mount, released together on disposal.
struct Pipeline {
    program: WebGlProgram,
    vertex_shader: WebGlShader,
    fragment_shader: WebGlShader,
    quad: WebGlBuffer,
    position_location: u32,
    resolution: WebGlUniformLocation,
    time: WebGlUniformLocation,
}

/// Everything one mount tracks between frames.
struct BackgroundState {
    lifecycle: Lifecycle,
    canvas: HtmlCanvasElement,
    gl: Option<GL>,
    pipeline: Option<Pipeline>,
    /// Clock origin for the time uniform, in milliseconds.
    started_at_ms: f64,
    /// CPU copy of the uniforms bound for the most recent frame.
    last_uniforms: Option<FrameUniforms>,
    /// Callback id of the frame currently scheduled, for cancellation.
    frame_id: Option<i32>,
}

type FrameClosure = Closure<dyn FnMut()>;

/// Owner's view of one background mount.
///
/// Dropping the handle leaves the effect running for the page lifetime
/// (the frame closure keeps itself alive); [`BackgroundHandle::dispose`]
/// tears it down deterministically instead.
pub struct BackgroundHandle {
    state: Rc<RefCell<BackgroundState>>,
    frame: Rc<RefCell<Option<FrameClosure>>>,
}

impl BackgroundHandle {
    /// Current lifecycle phase of this mount.
    pub fn phase(&self) -> Phase {
        self.state.borrow().lifecycle.phase()
    }

    /// Uniform values bound for the most recent frame, once one has drawn.
    pub fn uniforms(&self) -> Option<FrameUniforms> {
        self.state.borrow().last_uniforms
    }

    /// Tears the mount down: cancels the pending frame callback, releases
    /// the program, both shader stages, and the vertex buffer, and drops the
    /// frame closure. Returns whether this call performed the release —
    /// `false` for a disabled mount (nothing was ever created) and for any
    /// call after the first.
    pub fn dispose(&self) -> bool {
        {
            let mut st = self.state.borrow_mut();
            if !st.lifecycle.dispose() {
                return false;
            }
            if let Some(id) = st.frame_id.take() {
                if let Some(window) = web_sys::window() {
                    window.cancel_animation_frame(id).ok();
                }
            }
            let pipeline = st.pipeline.take();
            if let (Some(gl), Some(pipeline)) = (st.gl.as_ref(), pipeline) {
                gl.delete_program(Some(&pipeline.program));
                gl.delete_shader(Some(&pipeline.vertex_shader));
                gl.delete_shader(Some(&pipeline.fragment_shader));
                gl.delete_buffer(Some(&pipeline.quad));
            }
        }
        // Dropping the closure breaks the self-reference cycle the
        // animation-frame pattern otherwise leaks.
        self.frame.borrow_mut().take();
        true
    }
}

/// Probes the backend, builds the pipeline, and starts the frame loop
/// behind the page.
pub fn start(canvas: HtmlCanvasElement) -> BackgroundHandle {
    let state = Rc::new(RefCell::new(BackgroundState {
        lifecycle: Lifecycle::new(),
        canvas,
        gl: None,
        pipeline: None,
        started_at_ms: 0.0,
        last_uniforms: None,
        frame_id: None,
    }));
    let frame: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));

    let outcome = bring_up(&mut state.borrow_mut());
    match outcome {
        Ok(()) => spawn_frame_loop(&state, &frame),
        Err(err) => {
            state.borrow_mut().lifecycle.disable();
            console::error_1(&JsValue::from_str(&format!(
                "shader background disabled: {err}"
            )));
        }
    }

    BackgroundHandle { state, frame }
}

/// Walks Uninitialized → Compiling → Running, or errors out along the way.
fn bring_up(st: &mut BackgroundState) -> Result<(), BackgroundError> {
    let gl = acquire_context(&st.canvas)?;
    st.lifecycle.begin_compiling();

    let pipeline = build_pipeline(&gl)?;

    st.started_at_ms = now_ms();
    st.gl = Some(gl);
    st.pipeline = Some(pipeline);
    st.lifecycle.mark_running();
    Ok(())
}

/// Capability probe and context acquisition in one step: `Err` and `None`
/// from `getContext` both mean the backend is unavailable.
fn acquire_context(canvas: &HtmlCanvasElement) -> Result<GL, BackgroundError> {
    let attrs = web_sys::WebGlContextAttributes::new();
    attrs.set_antialias(false);
    attrs.set_depth(false);

    canvas
        .get_context_with_context_options("webgl2", attrs.as_ref())
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<GL>().ok())
        .ok_or(BackgroundError::ContextUnavailable)
}

fn build_pipeline(gl: &GL) -> Result<Pipeline, BackgroundError> {
    let vertex_shader = compile_shader(gl, GL::VERTEX_SHADER, shader::VERTEX_GLSL, "vertex")?;
    let fragment_shader =
        match compile_shader(gl, GL::FRAGMENT_SHADER, shader::FRAGMENT_GLSL, "fragment") {
            Ok(fragment_shader) => fragment_shader,
            Err(err) => {
                gl.delete_shader(Some(&vertex_shader));
                return Err(err);
            }
        };

    let program = match link_program(gl, &vertex_shader, &fragment_shader) {
        Ok(program) => program,
        Err(err) => {
            gl.delete_shader(Some(&vertex_shader));
            gl.delete_shader(Some(&fragment_shader));
            return Err(err);
        }
    };

    match resolve_bindings(gl, &program) {
        Ok(bindings) => Ok(Pipeline {
            program,
            vertex_shader,
            fragment_shader,
            quad: bindings.quad,
            position_location: bindings.position_location,
            resolution: bindings.resolution,
            time: bindings.time,
        }),
        Err(err) => {
            gl.delete_program(Some(&program));
            gl.delete_shader(Some(&vertex_shader));
            gl.delete_shader(Some(&fragment_shader));
            Err(err)
        }
    }
}

fn compile_shader(
    gl: &GL,
    stage: u32,
    source: &str,
    stage_name: &'static str,
) -> Result<WebGlShader, BackgroundError> {
    let shader = gl
        .create_shader(stage)
        .ok_or(BackgroundError::CreateFailed("shader object"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if !gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        return Err(BackgroundError::Compile {
            stage: stage_name,
            log,
        });
    }
    Ok(shader)
}

fn link_program(
    gl: &GL,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, BackgroundError> {
    let program = gl
        .create_program()
        .ok_or(BackgroundError::CreateFailed("program object"))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if !gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        return Err(BackgroundError::Link(log));
    }
    Ok(program)
}

struct Bindings {
    position_location: u32,
    resolution: WebGlUniformLocation,
    time: WebGlUniformLocation,
    quad: WebGlBuffer,
}

/// Resolves the attribute/uniform locations and uploads the quad. The linked
/// sources declare all three names, so a missing location means the driver
/// handed back something other than what was compiled.
fn resolve_bindings(gl: &GL, program: &WebGlProgram) -> Result<Bindings, BackgroundError> {
    let position = gl.get_attrib_location(program, shader::POSITION_ATTRIBUTE);
    if position < 0 {
        return Err(BackgroundError::MissingLocation(shader::POSITION_ATTRIBUTE));
    }
    let resolution = gl
        .get_uniform_location(program, shader::RESOLUTION_UNIFORM)
        .ok_or(BackgroundError::MissingLocation(shader::RESOLUTION_UNIFORM))?;
    let time = gl
        .get_uniform_location(program, shader::TIME_UNIFORM)
        .ok_or(BackgroundError::MissingLocation(shader::TIME_UNIFORM))?;

    let quad = gl
        .create_buffer()
        .ok_or(BackgroundError::CreateFailed("vertex buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&quad));
    let vertices = js_sys::Float32Array::from(shader::FULLSCREEN_QUAD.as_slice());
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);

    Ok(Bindings {
        position_location: position as u32,
        resolution,
        time,
        quad,
    })
}

/// Installs the self-rescheduling frame closure and requests the first frame.
///
/// The closure holds a clone of its own slot so it can keep calling
/// `request_animation_frame` on itself. Storing it inside an `Option` lets
/// the closure be created first and referenced from within itself, and lets
/// `dispose` drop it to end the chain.
fn spawn_frame_loop(
    state: &Rc<RefCell<BackgroundState>>,
    frame: &Rc<RefCell<Option<FrameClosure>>>,
) {
    let loop_state = state.clone();
    let loop_slot = frame.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut st = loop_state.borrow_mut();
        if !st.lifecycle.should_draw() {
            st.frame_id = None;
            return;
        }
        st.render_frame();
        st.frame_id = request_frame(&loop_slot);
    }) as Box<dyn FnMut()>));

    state.borrow_mut().frame_id = request_frame(frame);
}

fn request_frame(slot: &Rc<RefCell<Option<FrameClosure>>>) -> Option<i32> {
    let window = web_sys::window()?;
    let slot = slot.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl BackgroundState {
    /// One pass of the running loop: size the drawing surface to the current
    /// viewport, clear, bind program and vertex data, set the uniforms, draw.
    /// The viewport is re-read every frame, so resizes need no event wiring
    /// and never rebuild the pipeline.
    fn render_frame(&mut self) {
        let (Some(gl), Some(pipeline)) = (self.gl.as_ref(), self.pipeline.as_ref()) else {
            return;
        };

        let viewport =
            Viewport::from_client(self.canvas.client_width(), self.canvas.client_height());
        if self.canvas.width() != viewport.width || self.canvas.height() != viewport.height {
            self.canvas.set_width(viewport.width);
            self.canvas.set_height(viewport.height);
        }
        gl.viewport(0, 0, viewport.width as i32, viewport.height as i32);

        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        gl.use_program(Some(&pipeline.program));
        gl.enable_vertex_attrib_array(pipeline.position_location);
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&pipeline.quad));
        gl.vertex_attrib_pointer_with_i32(pipeline.position_location, 2, GL::FLOAT, false, 0, 0);

        let uniforms = FrameUniforms::at(viewport, now_ms() - self.started_at_ms);
        gl.uniform2f(
            Some(&pipeline.resolution),
            uniforms.resolution[0],
            uniforms.resolution[1],
        );
        gl.uniform1f(Some(&pipeline.time), uniforms.time_secs);

        gl.draw_arrays(GL::TRIANGLES, 0, shader::QUAD_VERTEX_COUNT);

        self.last_uniforms = Some(uniforms);
    }
}

/// Millisecond clock for the time uniform: `performance.now()` when the
/// host exposes it, wall time otherwise.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}
