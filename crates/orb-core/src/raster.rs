//! CPU rasterizer: orthographic rays against the placed sphere.

use glam::Vec3;
use rayon::prelude::*;

use crate::anchor::SphereTransform;
use crate::frame::{FrameBuffer, Rgba8};
use crate::orchestrator::Orchestrator;
use crate::state::OrthoCamera;
use crate::texture::TextureSampler;

/// Entry and exit distances of a ray through a sphere.
///
/// `ray_dir` must be unit length. Returns `None` on a miss or when the sphere
/// is entirely behind the origin; the entry distance is clamped to 0 when the
/// origin is inside.
#[inline]
pub fn ray_sphere(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<(f32, f32)> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let s = disc.sqrt();
    let far = -b + s;
    (far >= 0.0).then_some(((-b - s).max(0.0), far))
}

/// Render one frame into `frame` at its current size.
///
/// Each ray shades the front of the sphere; where the clip plane has cut the
/// front away the inside of the back wall shows instead. Rows are shaded in
/// parallel against the same immutable state.
pub fn render_frame(
    orchestrator: &Orchestrator,
    sampler: &(impl TextureSampler + Sync),
    sphere: &SphereTransform,
    frame: &mut FrameBuffer,
) {
    let (width, height) = (frame.width(), frame.height());
    if width == 0 || height == 0 {
        return;
    }
    let radius = sphere.world_radius();
    if radius <= 0.0 {
        frame.pixels_mut().fill(Rgba8::TRANSPARENT);
        return;
    }

    let camera = OrthoCamera::for_viewport(width, height);
    let inv_view_proj = (camera.projection_matrix() * camera.view_matrix()).inverse();
    let center = sphere.position;

    frame
        .pixels_mut()
        .par_chunks_exact_mut(width as usize)
        .enumerate()
        .for_each(|(py, row)| {
            let ndc_y = 1.0 - (py as f32 + 0.5) / height as f32 * 2.0;
            for (px, out) in row.iter_mut().enumerate() {
                let ndc_x = (px as f32 + 0.5) / width as f32 * 2.0 - 1.0;
                let (origin, dir) = camera.ndc_ray_with(&inv_view_proj, ndc_x, ndc_y);
                let view_dir = -dir;

                *out = ray_sphere(origin, dir, center, radius)
                    .and_then(|(near, far)| {
                        [near, far].into_iter().find_map(|t| {
                            let local = (origin + dir * t - center) / radius;
                            orchestrator.shade_fragment(local, view_dir, sampler)
                        })
                    })
                    .map_or(Rgba8::TRANSPARENT, Rgba8::from_vec4);
            }
        });
}
