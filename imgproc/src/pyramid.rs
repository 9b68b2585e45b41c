use stitch_core::GrayPlane;

use crate::resize::resize_plane;

/// Halve a plane: 2x2 box average when both dimensions divide cleanly,
/// bilinear sampling otherwise. Dimensions never drop below 1.
pub fn downsample_half(src: &GrayPlane) -> GrayPlane {
    let width = (src.width / 2).max(1);
    let height = (src.height / 2).max(1);

    if width * 2 == src.width && height * 2 == src.height {
        let mut data = vec![0.0f32; width as usize * height as usize];
        for y in 0..height {
            let top = src.row(y * 2);
            let bottom = src.row(y * 2 + 1);
            let out = y as usize * width as usize;
            for x in 0..width as usize {
                let x2 = x * 2;
                data[out + x] = 0.25 * (top[x2] + top[x2 + 1] + bottom[x2] + bottom[x2 + 1]);
            }
        }
        GrayPlane::from_vec(data, width, height)
    } else {
        resize_plane(src, width, height)
    }
}

/// Build a pyramid with exactly `levels` entries; level 0 is the input,
/// each later level is the half-size downsample of the previous one.
pub fn build_pyramid(base: GrayPlane, levels: u32) -> Vec<GrayPlane> {
    let levels = levels.max(1);
    let mut pyramid = Vec::with_capacity(levels as usize);
    pyramid.push(base);

    for _ in 1..levels {
        let next = downsample_half(pyramid.last().unwrap());
        pyramid.push(next);
    }

    pyramid
}
