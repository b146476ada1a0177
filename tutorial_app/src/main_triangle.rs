//! Hello-triangle demo
//!
//! Extends the hello-window program with a fixed shader pair and a
//! single hardcoded triangle, drawn once per frame.

use gl_engine::foundation::logging;
use gl_engine::input;
use gl_engine::render::opengl::{self, PositionMesh, ShaderProgram};
use gl_engine::render::Window;
use glfw::WindowEvent;

// Settings
const SCR_WIDTH: u32 = 800;
const SCR_HEIGHT: u32 = 600;

// Passes the position attribute through unchanged
const VERTEX_SHADER_SOURCE: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

// Constant opaque orange
const FRAGMENT_SHADER_SOURCE: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

// Triangle vertices (x, y, z), counter-clockwise
#[rustfmt::skip]
const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
];

fn main() {
    logging::init();

    let mut window = match Window::new(SCR_WIDTH, SCR_HEIGHT, "Hello Triangle") {
        Ok(window) => window,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(-1);
        }
    };

    // Build the shader program and upload the vertex data once; a failed
    // shader build has already been reported and the run continues
    let program = ShaderProgram::from_sources(VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE);
    let mesh = PositionMesh::upload(&TRIANGLE_VERTICES);

    log::info!("scene ready, entering render loop");

    while !window.should_close() {
        // Check key state and react accordingly every frame
        input::process_input(&mut window);

        opengl::clear(opengl::CLEAR_COLOR);

        // One draw call per frame
        program.bind();
        mesh.draw();

        // Present the frame, then pick up whatever the OS has queued
        window.swap_buffers();
        window.poll_events();
        for (_, event) in window.flush_events() {
            if let WindowEvent::FramebufferSize(width, height) = event {
                opengl::set_viewport(width, height);
            }
        }
    }

    // mesh and program drop first, deleting the GL objects; the window
    // drop then tears down the context and the library
    log::info!("window closed, shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_is_exactly_three_points() {
        assert_eq!(TRIANGLE_VERTICES.len(), 9);
        assert_eq!(
            TRIANGLE_VERTICES.len() / PositionMesh::COMPONENTS_PER_VERTEX,
            3
        );
    }

    #[test]
    fn test_triangle_vertex_positions() {
        let points: Vec<&[f32]> = TRIANGLE_VERTICES.chunks(3).collect();
        assert_eq!(points[0], &[-0.5, -0.5, 0.0]);
        assert_eq!(points[1], &[0.5, -0.5, 0.0]);
        assert_eq!(points[2], &[0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_shader_sources_target_gl33_core() {
        assert!(VERTEX_SHADER_SOURCE.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER_SOURCE.starts_with("#version 330 core"));
    }
}
