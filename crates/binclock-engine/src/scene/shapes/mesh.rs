use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Solid triangle-list payload in logical pixels.
///
/// `vertices.len()` is expected to be a multiple of 3; a trailing partial
/// triangle is ignored by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshCmd {
    pub vertices: Vec<Vec2>,
    pub color: Color,
}

impl MeshCmd {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl DrawList {
    /// Records a solid triangle list.
    #[inline]
    pub fn push_triangles(&mut self, z: ZIndex, vertices: Vec<Vec2>, color: Color) {
        self.push(z, DrawCmd::Mesh(MeshCmd { vertices, color }));
    }
}
