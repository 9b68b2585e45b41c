use image::RgbaImage;
use rayon::prelude::*;
use stitch_core::GrayPlane;

/// Project an RGBA frame onto a Rec. 601 luminance plane.
///
/// Values stay unrounded floats in `[0, 255]`; alpha is ignored.
pub fn luma_plane(src: &RgbaImage) -> GrayPlane {
    let (w, h) = src.dimensions();
    if w == 0 || h == 0 {
        return GrayPlane::from_vec(Vec::new(), w, h);
    }

    let mut data = vec![0.0f32; w as usize * h as usize];
    let raw = src.as_raw();

    data.par_chunks_mut(w as usize)
        .zip(raw.par_chunks(w as usize * 4))
        .for_each(|(dst_row, src_row)| {
            for (dst, px) in dst_row.iter_mut().zip(src_row.chunks_exact(4)) {
                *dst = 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
            }
        });

    GrayPlane::from_vec(data, w, h)
}
