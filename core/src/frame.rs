use image::RgbaImage;

/// Copy `count` rows of `src` starting at row `top` into a new image.
pub fn crop_rows(src: &RgbaImage, top: u32, count: u32) -> RgbaImage {
    let width = src.width();
    let stride = width as usize * 4;
    let start = top as usize * stride;
    let end = start + count as usize * stride;
    let data = src.as_raw()[start..end].to_vec();
    RgbaImage::from_raw(width, count, data).unwrap()
}

/// Force every pixel fully opaque in place.
pub fn force_opaque(img: &mut RgbaImage) {
    for px in img.chunks_exact_mut(4) {
        px[3] = 255;
    }
}
