use domoticz::Rgb;

/// Converts a hue (degrees) / saturation / brightness triple, the latter two
/// in `[0, 1]`, to 8-bit RGB. Channels are truncated, not rounded; hue wraps
/// at 360.
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Rgb {
    let channel = |value: f64| (value * 255.0).clamp(0.0, 255.0) as u8;

    if saturation == 0.0 {
        let value = channel(brightness);
        return Rgb::new(value, value, value);
    }

    let h = hue.rem_euclid(360.0) / 60.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as i64 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        5 => (brightness, p, q),
        _ => (0.0, 0.0, 0.0),
    };

    Rgb::new(channel(r), channel(g), channel(b))
}
