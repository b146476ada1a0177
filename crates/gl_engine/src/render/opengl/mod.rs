//! Frame-level OpenGL operations
//!
//! Everything here issues raw GL calls and therefore requires a current
//! OpenGL context on the calling thread; [`crate::render::Window::new`]
//! establishes one.

pub mod mesh;
pub mod shader;

pub use mesh::PositionMesh;
pub use shader::{ShaderKind, ShaderProgram, ShaderStage};

/// Clear color shared by the tutorial programs (teal-gray).
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

/// Viewport rectangle for a framebuffer of the given size.
///
/// The origin is always the lower-left corner (0,0); the size is exactly
/// the framebuffer size.
#[must_use]
pub const fn viewport_rect(width: i32, height: i32) -> [i32; 4] {
    [0, 0, width, height]
}

/// Match the viewport to the framebuffer dimensions.
///
/// Called on every framebuffer-resize event.
pub fn set_viewport(width: i32, height: i32) {
    let [x, y, w, h] = viewport_rect(width, height);
    unsafe {
        gl::Viewport(x, y, w, h);
    }
}

/// Clear the color buffer to the given color.
pub fn clear(color: [f32; 4]) {
    unsafe {
        gl::ClearColor(color[0], color[1], color[2], color[3]);
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clear_color_is_teal_gray() {
        assert_relative_eq!(CLEAR_COLOR[0], 0.2);
        assert_relative_eq!(CLEAR_COLOR[1], 0.3);
        assert_relative_eq!(CLEAR_COLOR[2], 0.3);
        assert_relative_eq!(CLEAR_COLOR[3], 1.0);
    }

    #[test]
    fn test_viewport_origin_is_fixed() {
        let [x, y, w, h] = viewport_rect(800, 600);
        assert_eq!((x, y), (0, 0));
        assert_eq!((w, h), (800, 600));
    }

    #[test]
    fn test_viewport_tracks_resize_exactly() {
        assert_eq!(viewport_rect(1, 1), [0, 0, 1, 1]);
        assert_eq!(viewport_rect(1920, 1080), [0, 0, 1920, 1080]);
        // Minimized windows report a zero-sized framebuffer
        assert_eq!(viewport_rect(0, 0), [0, 0, 0, 0]);
    }
}
