use crate::vec3::Vec3;

/// RGB color with channels as [0,1] factors, stored in x/y/z.
pub type Color = Vec3;

/// Convert [0,1] channel factors to byte-range RGB. Channels are clamped
/// first, then scaled by 255.999 and truncated (never rounded), so an exact
/// 1.0 still lands on 255.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        (255.999 * color.x.clamp(0.0, 1.0)) as u8,
        (255.999 * color.y.clamp(0.0, 1.0)) as u8,
        (255.999 * color.z.clamp(0.0, 1.0)) as u8,
    ]
}
