//! Window management using GLFW
//!
//! Creates the single OpenGL-context window the tutorial programs run in
//! and loads the OpenGL function pointers through GLFW's loader.

use glfw::Context;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW library initialization failed
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// GLFW window creation failed
    #[error("Failed to create GLFW window")]
    CreationFailed,

    /// OpenGL function-pointer loading failed
    #[error("Failed to load OpenGL function pointers")]
    LoaderFailed,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with proper resource management
///
/// Owns the GLFW library handle, the window, and the window's event
/// channel. Dropping the wrapper destroys the window and shuts the
/// library down.
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create the window and make its OpenGL context current.
    ///
    /// Requests an OpenGL 3.3 core-profile context, enables key and
    /// framebuffer-size event polling, and loads the GL function
    /// pointers via [`glfw::Context::get_proc_address`].
    ///
    /// # Errors
    ///
    /// Returns a [`WindowError`] if the library fails to initialize, the
    /// window cannot be created, or the function pointers fail to load.
    pub fn new(width: u32, height: u32, title: &str) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        // Configure for OpenGL 3.3 core profile
        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));

        // Create window
        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        // The context must be current on this thread before any GL call
        window.make_current();

        // Set up event polling
        window.set_key_polling(true);
        window.set_framebuffer_size_polling(true);

        // Load all OpenGL function pointers through GLFW's loader
        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
        if !gl::ClearColor::is_loaded() || !gl::Viewport::is_loaded() {
            return Err(WindowError::LoaderFailed);
        }

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Whether the window has been asked to close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Set the window's should-close flag
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Current state of a keyboard key
    pub fn get_key(&self, key: glfw::Key) -> glfw::Action {
        self.window.get_key(key)
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Poll the OS for pending events
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain the events gathered by the last [`poll_events`](Self::poll_events)
    pub fn flush_events(&self) -> glfw::FlushedMessages<'_, (f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Framebuffer size in pixels
    pub fn get_framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }
}
