//! Static vertex mesh upload and drawing

use gl::types::{GLenum, GLsizei, GLsizeiptr, GLuint};
use std::mem;
use std::ptr;

/// A static, position-only vertex mesh
///
/// Owns a vertex array object and the vertex buffer behind it. The data
/// is uploaded once at construction and never updated; both GL objects
/// are deleted on drop.
pub struct PositionMesh {
    vao: GLuint,
    vbo: GLuint,
    vertex_count: GLsizei,
}

impl PositionMesh {
    /// Floats per vertex: x, y, z
    pub const COMPONENTS_PER_VERTEX: usize = 3;

    /// Primitive topology used by [`draw`](Self::draw)
    pub const TOPOLOGY: GLenum = gl::TRIANGLES;

    /// Upload tightly packed position data to the GPU.
    ///
    /// `vertices` is interpreted as consecutive (x, y, z) triples bound
    /// to attribute location 0. Both the buffer and the vertex array are
    /// unbound again once the attribute pointer is registered.
    pub fn upload(vertices: &[f32]) -> Self {
        debug_assert_eq!(vertices.len() % Self::COMPONENTS_PER_VERTEX, 0);

        let mut vao: GLuint = 0;
        let mut vbo: GLuint = 0;
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        let stride = (Self::COMPONENTS_PER_VERTEX * mem::size_of::<f32>()) as GLsizei;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);

            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, stride, ptr::null());
            gl::EnableVertexAttribArray(0);

            // The attribute pointer has registered the buffer with the
            // vertex array; neither needs to stay bound
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }

        Self {
            vao,
            vbo,
            vertex_count: (vertices.len() / Self::COMPONENTS_PER_VERTEX) as GLsizei,
        }
    }

    /// Issue one non-indexed draw of the whole mesh
    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(Self::TOPOLOGY, 0, self.vertex_count);
        }
    }

    /// Number of vertices uploaded
    pub const fn vertex_count(&self) -> GLsizei {
        self.vertex_count
    }
}

impl Drop for PositionMesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_uses_triangle_topology() {
        assert_eq!(PositionMesh::TOPOLOGY, gl::TRIANGLES);
    }

    #[test]
    fn test_vertices_are_three_component() {
        assert_eq!(PositionMesh::COMPONENTS_PER_VERTEX, 3);
    }
}
