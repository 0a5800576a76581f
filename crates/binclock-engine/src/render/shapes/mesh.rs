use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{
    create_shape_pipeline, create_viewport_ubo, ensure_vertex_capacity, viewport_ubo_layout_entry,
    ViewportUniform,
};

/// Renderer for `DrawCmd::Mesh`.
///
/// All meshes of a frame are flattened into one vertex buffer and drawn with
/// a single call. No anti-aliasing; meshes are meant for small solid shapes
/// such as dial hands.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        let vertices = collect_vertices(draw_list);
        if vertices.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.write_viewport_uniform(ctx);
        ensure_vertex_capacity(
            ctx,
            "binclock mesh vbo",
            &mut self.vertex_vbo,
            &mut self.vertex_capacity,
            vertices.len(),
            std::mem::size_of::<MeshVertex>(),
        );

        let Some(vbo) = self.vertex_vbo.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&vertices));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.begin_load_pass("binclock mesh pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..vertices.len() as u32, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("binclock mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("binclock mesh bgl"),
                entries: &[viewport_ubo_layout_entry()],
            });

        let pipeline = create_shape_pipeline(
            ctx,
            "binclock mesh pipeline",
            &shader,
            &bind_group_layout,
            &[MeshVertex::layout()],
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = create_viewport_ubo(ctx, "binclock mesh viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("binclock mesh bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));
    }
}

/// Flattens every mesh command, in paint order, into colored vertices.
fn collect_vertices(draw_list: &mut DrawList) -> Vec<MeshVertex> {
    let mut out = Vec::new();
    for item in draw_list.iter_in_paint_order() {
        let DrawCmd::Mesh(cmd) = &item.cmd else { continue };
        let color = cmd.color.to_array();
        let whole = cmd.triangle_count() * 3;
        out.extend(
            cmd.vertices[..whole]
                .iter()
                .map(|v| MeshVertex { pos: [v.x, v.y], color }),
        );
    }
    out
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Vertex layout (24 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0
///  offset  8  color  [f32; 4]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::ZIndex;

    #[test]
    fn partial_triangles_are_dropped() {
        let mut dl = DrawList::new();
        let v = Vec2::new(1.0, 2.0);
        dl.push_triangles(ZIndex::BASE, vec![v; 5], Color::white());
        assert_eq!(collect_vertices(&mut dl).len(), 3);
    }

    #[test]
    fn meshes_are_flattened_in_paint_order() {
        let mut dl = DrawList::new();
        dl.push_triangles(ZIndex::OVERLAY, vec![Vec2::new(9.0, 9.0); 3], Color::white());
        dl.push_triangles(ZIndex::BASE, vec![Vec2::new(1.0, 1.0); 3], Color::black());

        let verts = collect_vertices(&mut dl);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].pos, [1.0, 1.0]);
        assert_eq!(verts[3].pos, [9.0, 9.0]);
        assert_eq!(verts[3].color, [1.0, 1.0, 1.0, 1.0]);
    }
}
