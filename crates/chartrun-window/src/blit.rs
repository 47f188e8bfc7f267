// File: crates/chartrun-window/src/blit.rs
// Summary: RGBA frame to 0RGB u32 pixel conversion with nearest-neighbor scaling.

use chartrun_core::RgbaFrame;

/// Fill `dst` (`dst_w * dst_h` pixels, row-major, `0x00RRGGBB`) from `frame`,
/// stretching it to the destination size. Alpha is dropped; frames are opaque.
pub fn blit_scaled(dst: &mut [u32], dst_w: u32, dst_h: u32, frame: &RgbaFrame) {
    if dst_w == 0 || dst_h == 0 || frame.width == 0 || frame.height == 0 {
        return;
    }
    let (sw, sh) = (frame.width as u64, frame.height as u64);
    for y in 0..dst_h as u64 {
        let sy = (y * sh / dst_h as u64).min(sh - 1);
        for x in 0..dst_w as u64 {
            let sx = (x * sw / dst_w as u64).min(sw - 1);
            let i = ((sy * sw + sx) * 4) as usize;
            let Some(px) = frame.pixels.get(i..i + 4) else { continue };
            let d = (y * dst_w as u64 + x) as usize;
            if let Some(slot) = dst.get_mut(d) {
                *slot = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
            }
        }
    }
}
