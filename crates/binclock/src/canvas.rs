//! Retained drawing canvas.
//!
//! Widgets add primitives to square surfaces once and later only touch the
//! few properties that change per frame (label text, hand rotation). Each
//! frame the canvas records itself into an engine `DrawList`: primitives that
//! never change are recorded once into a cached static layer, the animated
//! ones are re-recorded on top of it.

use binclock_engine::coords::{Affine2, Rect, Vec2};
use binclock_engine::paint::Color;
use binclock_engine::scene::{DrawList, ZIndex};
use binclock_engine::text::{FontId, FontSystem};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SurfaceId(usize);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PrimitiveId(usize);

/// Geometry of a primitive in its surface's unit data square (y up).
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Circle outline; `stroke` is in points and centered on `radius`.
    Ring { center: Vec2, radius: f32, stroke: f32 },
    /// Single line of text centered on `anchor`; `size` is in points.
    Label { text: String, anchor: Vec2, size: f32 },
    /// Filled arrow from `tail` along `delta`, head included in the length.
    Arrow {
        tail: Vec2,
        delta: Vec2,
        width: f32,
        head_width: f32,
        head_length: f32,
    },
}

/// Rotation applied in display space, after the data-to-display mapping.
///
/// `pivot` is given in data coordinates; a positive `angle` turns
/// counter-clockwise on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    pub pivot: Vec2,
    pub angle: f32,
}

#[derive(Debug, Clone)]
struct Primitive {
    surface: SurfaceId,
    shape: Shape,
    color: Color,
    z: ZIndex,
    rotation: Option<Rotation>,
    animated: bool,
}

pub struct Canvas {
    surfaces: Vec<Rect>,
    primitives: Vec<Primitive>,
    font: Option<FontId>,

    static_layer: DrawList,
    /// Point scale the static layer was recorded with; `None` when stale.
    static_scale: Option<f32>,
    static_rebuilds: u64,
}

impl Canvas {
    /// Labels are skipped while `font` is `None`.
    pub fn new(font: Option<FontId>) -> Self {
        Self {
            surfaces: Vec::new(),
            primitives: Vec::new(),
            font,
            static_layer: DrawList::new(),
            static_scale: None,
            static_rebuilds: 0,
        }
    }

    // ── Surfaces ──────────────────────────────────────────────────────────

    /// Adds an aspect-locked surface occupying the largest square inside `bounds`.
    pub fn add_surface(&mut self, bounds: Rect) -> SurfaceId {
        self.surfaces.push(bounds.centered_square());
        SurfaceId(self.surfaces.len() - 1)
    }

    pub fn surface_rect(&self, id: SurfaceId) -> Rect {
        self.surfaces[id.0]
    }

    /// Moves a surface; the static layer is re-recorded only if it actually moved.
    pub fn set_surface_bounds(&mut self, id: SurfaceId, bounds: Rect) {
        let rect = bounds.centered_square();
        if self.surfaces[id.0] != rect {
            self.surfaces[id.0] = rect;
            self.invalidate();
        }
    }

    // ── Primitives ────────────────────────────────────────────────────────

    pub fn add(&mut self, surface: SurfaceId, shape: Shape, color: Color, z: ZIndex) -> PrimitiveId {
        self.primitives.push(Primitive {
            surface,
            shape,
            color,
            z,
            rotation: None,
            animated: false,
        });
        self.invalidate();
        PrimitiveId(self.primitives.len() - 1)
    }

    pub fn shape(&self, id: PrimitiveId) -> &Shape {
        &self.primitives[id.0].shape
    }

    /// Current text of a label primitive.
    pub fn text(&self, id: PrimitiveId) -> Option<&str> {
        match &self.primitives[id.0].shape {
            Shape::Label { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn rotation(&self, id: PrimitiveId) -> Option<Rotation> {
        self.primitives[id.0].rotation
    }

    /// Replaces the text of a label primitive. Other shapes are left untouched.
    pub fn set_text(&mut self, id: PrimitiveId, value: impl Into<String>) {
        let prim = &mut self.primitives[id.0];
        let Shape::Label { text, .. } = &mut prim.shape else {
            log::warn!("set_text on non-label primitive {id:?}");
            return;
        };

        let value = value.into();
        if *text != value {
            *text = value;
            if !prim.animated {
                self.static_scale = None;
            }
        }
    }

    pub fn set_rotation(&mut self, id: PrimitiveId, rotation: Option<Rotation>) {
        let prim = &mut self.primitives[id.0];
        if prim.rotation != rotation {
            prim.rotation = rotation;
            if !prim.animated {
                self.static_scale = None;
            }
        }
    }

    // ── Composition ───────────────────────────────────────────────────────

    /// Records the canvas into `out`: the cached static layer first, then every
    /// primitive listed in `animated`, in that order.
    ///
    /// `pt_to_px` converts point sizes (text, strokes) to logical pixels.
    pub fn compose(
        &mut self,
        out: &mut DrawList,
        animated: &[PrimitiveId],
        fonts: &FontSystem,
        pt_to_px: f32,
    ) {
        for (i, prim) in self.primitives.iter_mut().enumerate() {
            let is_animated = animated.contains(&PrimitiveId(i));
            if prim.animated != is_animated {
                prim.animated = is_animated;
                self.static_scale = None;
            }
        }

        if self.static_scale != Some(pt_to_px) {
            self.static_layer.clear();
            for prim in self.primitives.iter().filter(|p| !p.animated) {
                record(&self.surfaces, self.font, prim, fonts, pt_to_px, &mut self.static_layer);
            }
            self.static_scale = Some(pt_to_px);
            self.static_rebuilds += 1;
            log::debug!(
                "canvas: static layer recorded ({} items, rebuild #{})",
                self.static_layer.len(),
                self.static_rebuilds
            );
        }

        out.append(&self.static_layer);

        for id in animated {
            if let Some(prim) = self.primitives.get(id.0) {
                record(&self.surfaces, self.font, prim, fonts, pt_to_px, out);
            }
        }
    }

    /// Number of times the static layer has been recorded.
    pub fn static_rebuilds(&self) -> u64 {
        self.static_rebuilds
    }

    fn invalidate(&mut self) {
        self.static_scale = None;
    }
}

/// Data-to-display transform of a primitive, rotation included.
fn display_transform(rect: Rect, rotation: Option<Rotation>) -> Affine2 {
    let xf = Affine2::unit_to_rect(rect);
    match rotation {
        Some(r) => xf.then(Affine2::rotate_around(xf.apply(r.pivot), r.angle)),
        None => xf,
    }
}

fn record(
    surfaces: &[Rect],
    font: Option<FontId>,
    prim: &Primitive,
    fonts: &FontSystem,
    pt_to_px: f32,
    out: &mut DrawList,
) {
    let rect = surfaces[prim.surface.0];
    let xf = display_transform(rect, prim.rotation);

    match &prim.shape {
        Shape::Ring { center, radius, stroke } => {
            let stroke = stroke * pt_to_px;
            let radius = radius * rect.size.x + stroke * 0.5;
            out.push_ring(prim.z, xf.apply(*center), radius, stroke, prim.color);
        }
        Shape::Label { text, anchor, size } => {
            let Some(font) = font else { return };
            out.push_text_centered(
                prim.z,
                text,
                fonts,
                font,
                size * pt_to_px,
                prim.color,
                xf.apply(*anchor),
            );
        }
        Shape::Arrow { tail, delta, width, head_width, head_length } => {
            let vertices: Vec<Vec2> = arrow_triangles(*tail, *delta, *width, *head_width, *head_length)
                .into_iter()
                .map(|p| xf.apply(p))
                .collect();
            if !vertices.is_empty() {
                out.push_triangles(prim.z, vertices, prim.color);
            }
        }
    }
}

/// Triangle list of a filled arrow: two for the shaft, one for the head.
///
/// The last vertex is the tip.
fn arrow_triangles(tail: Vec2, delta: Vec2, width: f32, head_width: f32, head_length: f32) -> Vec<Vec2> {
    let len = delta.length();
    if len <= 0.0 || !len.is_finite() {
        return Vec::new();
    }

    let dir = delta / len;
    let n = dir.perp();
    let neck = tail + dir * (len - head_length.min(len));
    let tip = tail + delta;

    let shaft = n * (width * 0.5);
    let head = n * (head_width * 0.5);

    vec![
        tail + shaft,
        tail - shaft,
        neck - shaft,
        tail + shaft,
        neck - shaft,
        neck + shaft,
        neck + head,
        neck - head,
        tip,
    ]
}
