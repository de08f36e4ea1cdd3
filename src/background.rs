//! Lifecycle and per-frame bookkeeping for the background renderer.
//!
//! The GL calls live in `wasm::render`; everything that can be reasoned about
//! without a GPU — the mount state machine, surface sizing, and the uniform
//! values bound each frame — lives here so it compiles and tests natively.
//!
//! ```text
//!   Uninitialized ──▶ Compiling ──▶ Running ──▶ Disposed
//!         │               │
//!         └───────────────┴──▶ Disabled   (terminal; effect skipped)
//! ```

/// Where one renderer mount currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, capability probe not yet attempted.
    Uninitialized,
    /// Backend acquired; shader stages are being built.
    Compiling,
    /// Pipeline live, frame loop rescheduling itself.
    Running,
    /// Backend missing or pipeline bring-up failed; terminal, nothing drawn.
    Disabled,
    /// Torn down; GL resources released, no callbacks remain.
    Disposed,
}

/// Mount state machine. Each transition reports whether it applied, so the
/// caller can gate resource work on the edge rather than on the state.
#[derive(Debug)]
pub struct Lifecycle {
    phase: Phase,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            phase: Phase::Uninitialized,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Capability probe succeeded; shader build starts.
    pub fn begin_compiling(&mut self) -> bool {
        self.step(Phase::Uninitialized, Phase::Compiling)
    }

    /// Pipeline built and locations resolved; the frame loop may start.
    pub fn mark_running(&mut self) -> bool {
        self.step(Phase::Compiling, Phase::Running)
    }

    /// Bring-up failed (no backend, compile/link error, missing location).
    /// Only reachable before the loop starts; a running mount is never
    /// retroactively disabled.
    pub fn disable(&mut self) -> bool {
        match self.phase {
            Phase::Uninitialized | Phase::Compiling => {
                self.phase = Phase::Disabled;
                true
            }
            _ => false,
        }
    }

    /// Teardown. Returns `true` exactly once, and only for a mount that
    /// actually owns GL resources — a disabled mount has nothing to release.
    pub fn dispose(&mut self) -> bool {
        self.step(Phase::Running, Phase::Disposed)
    }

    /// The frame closure checks this before drawing or rescheduling.
    pub fn should_draw(&self) -> bool {
        self.phase == Phase::Running
    }

    fn step(&mut self, from: Phase, to: Phase) -> bool {
        if self.phase == from {
            self.phase = to;
            true
        } else {
            false
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Drawing-surface size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Builds a viewport from DOM client dimensions. `clientWidth` /
    /// `clientHeight` are signed in the DOM API; anything below zero is an
    /// empty surface.
    pub fn from_client(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// CPU copy of the uniform values bound for one frame.
///
/// The renderer records this after every draw, mirroring what was written to
/// the GPU, so uniform progression is observable without GL readback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    /// `iResolution`, in physical pixels.
    pub resolution: [f32; 2],
    /// `iTime`, seconds since the renderer started.
    pub time_secs: f32,
}

impl FrameUniforms {
    /// Uniform values for a frame at `elapsed_ms` since renderer start.
    /// The clock is monotonic; a host reporting a negative delta pins the
    /// time uniform at zero rather than feeding the shader a negative time.
    pub fn at(viewport: Viewport, elapsed_ms: f64) -> Self {
        Self {
            resolution: [viewport.width as f32, viewport.height as f32],
            time_secs: (elapsed_ms.max(0.0) / 1000.0) as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_walks_probe_compile_run_dispose() {
        let mut lc = Lifecycle::new();
        assert_eq!(lc.phase(), Phase::Uninitialized);
        assert!(!lc.should_draw());

        assert!(lc.begin_compiling());
        assert_eq!(lc.phase(), Phase::Compiling);

        assert!(lc.mark_running());
        assert!(lc.should_draw());

        assert!(lc.dispose());
        assert_eq!(lc.phase(), Phase::Disposed);
        assert!(!lc.should_draw());
    }

    #[test]
    fn probe_failure_disables_before_any_compile() {
        let mut lc = Lifecycle::new();
        assert!(lc.disable());
        assert_eq!(lc.phase(), Phase::Disabled);
        // Disabled is terminal: no compile, no run, no resource release.
        assert!(!lc.begin_compiling());
        assert!(!lc.mark_running());
        assert!(!lc.dispose());
        assert!(!lc.should_draw());
    }

    #[test]
    fn compile_failure_disables_and_blocks_teardown() {
        let mut lc = Lifecycle::new();
        assert!(lc.begin_compiling());
        assert!(lc.disable());
        // Nothing was ever uploaded, so teardown must refuse to run.
        assert!(!lc.dispose());
        assert_eq!(lc.phase(), Phase::Disabled);
    }

    #[test]
    fn dispose_applies_exactly_once() {
        let mut lc = Lifecycle::new();
        lc.begin_compiling();
        lc.mark_running();
        assert!(lc.dispose());
        assert!(!lc.dispose());
        assert!(!lc.dispose());
    }

    #[test]
    fn running_mounts_cannot_be_disabled() {
        let mut lc = Lifecycle::new();
        lc.begin_compiling();
        lc.mark_running();
        assert!(!lc.disable());
        assert!(lc.should_draw());
    }

    #[test]
    fn client_dimensions_clamp_below_zero() {
        assert_eq!(Viewport::from_client(-3, 10), Viewport::new(0, 10));
        assert_eq!(Viewport::from_client(800, 600), Viewport::new(800, 600));
        assert!(Viewport::from_client(0, 0).is_empty());
        assert!(Viewport::from_client(800, 0).is_empty());
        assert!(!Viewport::new(800, 600).is_empty());
    }

    #[test]
    fn uniforms_report_pixels_and_seconds() {
        let u = FrameUniforms::at(Viewport::new(800, 600), 1500.0);
        assert_eq!(u.resolution, [800.0, 600.0]);
        assert!((u.time_secs - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn time_uniform_never_goes_negative() {
        let u = FrameUniforms::at(Viewport::new(1, 1), -250.0);
        assert_eq!(u.time_secs, 0.0);
    }

    #[test]
    fn zero_area_viewport_produces_zero_resolution() {
        // The shader divides by min(x, y) but that runs on the GPU against
        // whatever was bound; the CPU side must stay finite and well-formed.
        let u = FrameUniforms::at(Viewport::new(0, 0), 16.0);
        assert_eq!(u.resolution, [0.0, 0.0]);
        assert!(u.time_secs >= 0.0);
    }

    #[test]
    fn identical_dimensions_yield_identical_resolution() {
        let a = FrameUniforms::at(Viewport::new(1024, 768), 100.0);
        let b = FrameUniforms::at(Viewport::new(1024, 768), 200.0);
        assert_eq!(a.resolution, b.resolution);
        assert!(b.time_secs > a.time_secs);
    }
}
