//! # GL Engine
//!
//! A small support library for GLFW/OpenGL tutorial programs.
//!
//! ## Features
//!
//! - **Window Bootstrap**: GLFW initialization, OpenGL 3.3 core context
//!   creation, and function-pointer loading in one call
//! - **OpenGL Wrappers**: RAII handles for shader programs and static
//!   vertex meshes
//! - **Input Polling**: per-frame escape-key handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::prelude::*;
//!
//! fn main() {
//!     gl_engine::foundation::logging::init();
//!
//!     let mut window = match Window::new(800, 600, "LearnOpenGL") {
//!         Ok(window) => window,
//!         Err(err) => {
//!             log::error!("{err}");
//!             std::process::exit(-1);
//!         }
//!     };
//!
//!     while !window.should_close() {
//!         process_input(&mut window);
//!         opengl::clear(opengl::CLEAR_COLOR);
//!         window.swap_buffers();
//!         window.poll_events();
//!         for (_, event) in window.flush_events() {
//!             if let glfw::WindowEvent::FramebufferSize(width, height) = event {
//!                 opengl::set_viewport(width, height);
//!             }
//!         }
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod input;
pub mod render;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        input::process_input,
        render::{
            opengl::{self, PositionMesh, ShaderProgram, CLEAR_COLOR},
            Window, WindowError, WindowResult,
        },
    };
}
