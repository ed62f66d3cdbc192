//! Used to pre-render sprite images so per-frame draws are plain textured
//! quads.

use sfml::graphics::*;

/// Renders the barrel sprite: a solid square at its native size.
pub fn solid_square(size: u32, color: Color) -> sfml::cpp::FBox<Image> {
    let mut render_target = RenderTexture::new(size, size).unwrap();

    render_target.clear(color);
    render_target.display();

    let texture = render_target.texture();
    texture.copy_to_image().unwrap()
}
