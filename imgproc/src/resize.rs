use image::RgbaImage;
use stitch_core::GrayPlane;

/// Bilinear resize of an RGBA frame, corner-pinned sampling grid.
pub fn resize_rgba(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if width == 0 || height == 0 {
        return RgbaImage::new(0, 0);
    }
    let mut dst = RgbaImage::new(width, height);
    let (sw, sh) = src.dimensions();
    if sw == 0 || sh == 0 {
        return dst;
    }

    let x_scale = if width > 1 {
        (sw - 1) as f32 / (width - 1) as f32
    } else {
        0.0
    };
    let y_scale = if height > 1 {
        (sh - 1) as f32 / (height - 1) as f32
    } else {
        0.0
    };

    for y in 0..height {
        for x in 0..width {
            let fx = x as f32 * x_scale;
            let fy = y as f32 * y_scale;

            let x0 = fx as u32;
            let y0 = fy as u32;
            let x1 = (x0 + 1).min(sw - 1);
            let y1 = (y0 + 1).min(sh - 1);

            let dx = fx - x0 as f32;
            let dy = fy - y0 as f32;

            let mut result = [0u8; 4];
            for c in 0..4 {
                let v00 = src.get_pixel(x0, y0)[c] as f32;
                let v10 = src.get_pixel(x1, y0)[c] as f32;
                let v01 = src.get_pixel(x0, y1)[c] as f32;
                let v11 = src.get_pixel(x1, y1)[c] as f32;

                let v0 = v00 * (1.0 - dx) + v10 * dx;
                let v1 = v01 * (1.0 - dx) + v11 * dx;
                result[c] = (v0 * (1.0 - dy) + v1 * dy).clamp(0.0, 255.0) as u8;
            }

            dst.put_pixel(x, y, image::Rgba(result));
        }
    }

    dst
}

/// Bilinear resize of a luminance plane; values stay unclamped floats.
pub fn resize_plane(src: &GrayPlane, width: u32, height: u32) -> GrayPlane {
    let mut dst = GrayPlane::new(width, height);
    if src.width == 0 || src.height == 0 || width == 0 || height == 0 {
        return dst;
    }

    let x_scale = if width > 1 {
        (src.width - 1) as f32 / (width - 1) as f32
    } else {
        0.0
    };
    let y_scale = if height > 1 {
        (src.height - 1) as f32 / (height - 1) as f32
    } else {
        0.0
    };

    for y in 0..height {
        for x in 0..width {
            let fx = x as f32 * x_scale;
            let fy = y as f32 * y_scale;

            let x0 = fx as u32;
            let y0 = fy as u32;
            let x1 = (x0 + 1).min(src.width - 1);
            let y1 = (y0 + 1).min(src.height - 1);

            let dx = fx - x0 as f32;
            let dy = fy - y0 as f32;

            let v0 = src.get(x0, y0) * (1.0 - dx) + src.get(x1, y0) * dx;
            let v1 = src.get(x0, y1) * (1.0 - dx) + src.get(x1, y1) * dx;
            dst.data[(y * width + x) as usize] = v0 * (1.0 - dy) + v1 * dy;
        }
    }

    dst
}
