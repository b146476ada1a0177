//! Hello-window demo
//!
//! Opens a single 800x600 window and clears it to the shared teal-gray
//! every frame until escape is pressed or the window is closed.

use gl_engine::foundation::logging;
use gl_engine::input;
use gl_engine::render::{opengl, Window};
use glfw::WindowEvent;

// Settings
const SCR_WIDTH: u32 = 800;
const SCR_HEIGHT: u32 = 600;

fn main() {
    logging::init();

    let mut window = match Window::new(SCR_WIDTH, SCR_HEIGHT, "LearnOpenGL") {
        Ok(window) => window,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(-1);
        }
    };

    log::info!("window created, entering render loop");

    while !window.should_close() {
        // Check key state and react accordingly every frame
        input::process_input(&mut window);

        opengl::clear(opengl::CLEAR_COLOR);

        // Present the frame, then pick up whatever the OS has queued
        window.swap_buffers();
        window.poll_events();
        for (_, event) in window.flush_events() {
            if let WindowEvent::FramebufferSize(width, height) = event {
                opengl::set_viewport(width, height);
            }
        }
    }

    log::info!("window closed, shutting down");
}
