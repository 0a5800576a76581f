//! Shape renderers.

mod common;

pub mod circle;
pub mod mesh;
pub mod text;

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;
use crate::text::FontSystem;

use circle::CircleRenderer;
use mesh::MeshRenderer;
use text::TextRenderer;

/// Every shape renderer the engine ships, run in a fixed pass order.
///
/// Pass order: circles, then text, then meshes. Z-order is honored within a
/// pass, not across passes.
#[derive(Default)]
pub struct ShapeRenderers {
    pub circle: CircleRenderer,
    pub text: TextRenderer,
    pub mesh: MeshRenderer,
}

impl ShapeRenderers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        self.circle.render(ctx, target, draw_list);
        self.text.render(ctx, target, draw_list, fonts);
        self.mesh.render(ctx, target, draw_list);
    }
}
