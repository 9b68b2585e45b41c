use image::RgbaImage;

/// Pick the overlap row where panorama and next frame disagree the least.
///
/// Only the central strip of columns is inspected so dynamic edges
/// (scrollbars, floating buttons) cannot drag the seam. `align_top` is the
/// panorama row where the top of `next` aligns; the returned row is
/// relative to the top of the overlap, first minimum wins.
pub fn find_seam_row(
    panorama: &RgbaImage,
    next: &RgbaImage,
    align_top: u32,
    overlap_h: u32,
) -> u32 {
    let width = panorama.width();
    let x0 = (width as f32 * 0.1).round() as u32;
    let x1 = ((width as f32 * 0.9).round() as u32).max(x0 + 1).min(width);

    let mut best_sum = u64::MAX;
    let mut best_row = 0u32;
    for y in 0..overlap_h {
        let mut sum = 0u64;
        for x in x0..x1 {
            let p = panorama.get_pixel(x, align_top + y);
            let n = next.get_pixel(x, y);
            sum += color_diff(p.0, n.0);
        }
        if sum < best_sum {
            best_sum = sum;
            best_row = y;
        }
    }
    best_row
}

fn color_diff(a: [u8; 4], b: [u8; 4]) -> u64 {
    let dr = (a[0] as i32 - b[0] as i32).unsigned_abs();
    let dg = (a[1] as i32 - b[1] as i32).unsigned_abs();
    let db = (a[2] as i32 - b[2] as i32).unsigned_abs();
    (dr + dg + db) as u64
}
