#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert `0xRRGGBB` (sRGB) to linear RGB.
pub fn srgb_hex(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]
}

/// CSS form of a hex colour, for DOM styling.
pub fn css_hex(hex: u32) -> String {
    format!("#{:06x}", hex & 0x00ff_ffff)
}

/// HSL (all components in \[0, 1\]) to linear RGB.
pub fn hsl_to_linear(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        let v = srgb_to_linear(l);
        return [v, v, v];
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    };
    [
        srgb_to_linear(channel(h + 1.0 / 3.0)),
        srgb_to_linear(channel(h)),
        srgb_to_linear(channel(h - 1.0 / 3.0)),
    ]
}
