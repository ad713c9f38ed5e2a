// HSV conversions in the half-degree convention: hue 0..180, saturation and
// value 0..255. The detection bounds and the size->hue mapping are both stated
// in this range, so everything color-related goes through here.

/// Convert an RGB triple to (hue 0..180, saturation 0..255, value 0..255).
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { delta / max * 255.0 } else { 0.0 };

    // Hue in full degrees first, then halved into 0..180.
    let h_deg = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * ((gf - bf) / delta)
    } else if max == gf {
        60.0 * ((bf - rf) / delta) + 120.0
    } else {
        60.0 * ((rf - gf) / delta) + 240.0
    };
    let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };

    ((h_deg / 2.0).round() as u8, s.round() as u8, v.round() as u8)
}

/// Convert (hue 0..180, saturation 0..255, value 0..255) back to RGB.
pub fn hsv_to_rgb(h: u8, s: u8, v: u8) -> (u8, u8, u8) {
    let h_deg = (h as f32) * 2.0;
    let sf = s as f32 / 255.0;
    let vf = v as f32 / 255.0;

    let sector = (h_deg / 60.0).floor();
    let frac = h_deg / 60.0 - sector;
    let p = vf * (1.0 - sf);
    let q = vf * (1.0 - sf * frac);
    let t = vf * (1.0 - sf * (1.0 - frac));

    let (rf, gf, bf) = match sector as i32 % 6 {
        0 => (vf, t, p),
        1 => (q, vf, p),
        2 => (p, vf, t),
        3 => (p, q, vf),
        4 => (t, p, vf),
        _ => (vf, p, q),
    };

    (
        (rf * 255.0).round() as u8,
        (gf * 255.0).round() as u8,
        (bf * 255.0).round() as u8,
    )
}
