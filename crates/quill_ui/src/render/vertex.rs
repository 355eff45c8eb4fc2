//! Vertex types for UI rendering
//!
//! Both quad and glyph geometry share a single layout per vertex: a 2D
//! screen-space position plus a 2D texture coordinate. Background quads
//! carry position only.

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::Rect;

/// Vertex data for textured UI geometry (glyph quads)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct UiVertex {
    /// Position in screen pixels, top-left origin
    pub position: [f32; 2],
    /// Texture coordinates into the glyph atlas
    pub uv: [f32; 2],
}

/// Position-only vertex for solid color quads (no UVs)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    /// Position in screen pixels, top-left origin
    pub position: [f32; 2],
}

/// Expand a rectangle into two triangles (6 vertices)
pub fn quad_vertices(rect: Rect) -> [QuadVertex; 6] {
    let x1 = rect.x;
    let y1 = rect.y;
    let x2 = rect.x + rect.width;
    let y2 = rect.y + rect.height;

    [
        QuadVertex { position: [x1, y1] },
        QuadVertex { position: [x2, y1] },
        QuadVertex { position: [x1, y2] },
        QuadVertex { position: [x1, y2] },
        QuadVertex { position: [x2, y1] },
        QuadVertex { position: [x2, y2] },
    ]
}

/// Expand a rectangle with a UV rectangle into two textured triangles
pub fn textured_quad_vertices(rect: Rect, uv_min: [f32; 2], uv_max: [f32; 2]) -> [UiVertex; 6] {
    let x1 = rect.x;
    let y1 = rect.y;
    let x2 = rect.x + rect.width;
    let y2 = rect.y + rect.height;

    [
        UiVertex {
            position: [x1, y1],
            uv: [uv_min[0], uv_min[1]],
        },
        UiVertex {
            position: [x2, y1],
            uv: [uv_max[0], uv_min[1]],
        },
        UiVertex {
            position: [x1, y2],
            uv: [uv_min[0], uv_max[1]],
        },
        UiVertex {
            position: [x1, y2],
            uv: [uv_min[0], uv_max[1]],
        },
        UiVertex {
            position: [x2, y1],
            uv: [uv_max[0], uv_min[1]],
        },
        UiVertex {
            position: [x2, y2],
            uv: [uv_max[0], uv_max[1]],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_sizes() {
        // Layout must match the shader's expectations for GPU upload
        assert_eq!(std::mem::size_of::<UiVertex>(), std::mem::size_of::<f32>() * 4);
        assert_eq!(std::mem::size_of::<QuadVertex>(), std::mem::size_of::<f32>() * 2);
    }

    #[test]
    fn test_quad_covers_rect() {
        let verts = quad_vertices(Rect::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].position, [10.0, 20.0]);
        assert_eq!(verts[5].position, [40.0, 60.0]);
    }
}
