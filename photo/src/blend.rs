/// Linearly blend two RGBA rows; `alpha` weights the `next` row.
///
/// Channels are rounded and clamped independently; the output row is
/// always fully opaque.
pub fn blend_rows(prev_row: &[u8], next_row: &[u8], alpha: f32, out: &mut [u8]) {
    let a = alpha.clamp(0.0, 1.0);
    let ia = 1.0 - a;

    for ((dst, p), n) in out
        .chunks_exact_mut(4)
        .zip(prev_row.chunks_exact(4))
        .zip(next_row.chunks_exact(4))
    {
        for c in 0..3 {
            dst[c] = (p[c] as f32 * ia + n[c] as f32 * a)
                .round()
                .clamp(0.0, 255.0) as u8;
        }
        dst[3] = 255;
    }
}
