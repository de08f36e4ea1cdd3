//! Fixed shader sources and geometry for the background effect.
//!
//! The fragment formula is the published effect and must stay byte-stable;
//! both stages target GLSL ES 3.00 (`#version 300 es`, WebGL2).

/// Pass-through vertex stage: clip-space positions straight from the buffer.
pub const VERTEX_GLSL: &str = "#version 300 es
in vec4 a_position;
void main() {
  gl_Position = a_position;
}
";

/// Iterative distortion effect driven by `iResolution` and `iTime`.
pub const FRAGMENT_GLSL: &str = "#version 300 es
precision highp float;
uniform vec2 iResolution;
uniform float iTime;
out vec4 fragColor;

void mainImage( out vec4 fragColor, in vec2 fragCoord ){
  vec2 uv =  (2.0 * fragCoord - iResolution.xy) / min(iResolution.x, iResolution.y);

  for(float i = 1.0; i < 10.0; i++){
      uv.x += 0.6 / i * cos(i * 2.5* uv.y + iTime * 0.005);
      uv.y += 0.6 / i * cos(i * 1.5 * uv.x + iTime * 0.005);
  }

  fragColor = vec4(vec3(0.1)/abs(sin(iTime-uv.y-uv.x)),1.0);
}

void main() {
  mainImage(fragColor, gl_FragCoord.xy);
}
";

/// Attribute consumed by [`VERTEX_GLSL`].
pub const POSITION_ATTRIBUTE: &str = "a_position";

/// Resolution uniform of [`FRAGMENT_GLSL`], in physical pixels.
pub const RESOLUTION_UNIFORM: &str = "iResolution";

/// Time uniform of [`FRAGMENT_GLSL`], in seconds since renderer start.
pub const TIME_UNIFORM: &str = "iTime";

/// Two triangles covering clip space, interleaved as (x, y) pairs.
#[rustfmt::skip]
pub const FULLSCREEN_QUAD: [f32; 12] = [
    -1.0, -1.0,
     1.0, -1.0,
    -1.0,  1.0,
    -1.0,  1.0,
     1.0, -1.0,
     1.0,  1.0,
];

/// Vertices drawn per frame (the quad is not indexed).
pub const QUAD_VERTEX_COUNT: i32 = (FULLSCREEN_QUAD.len() / 2) as i32;
