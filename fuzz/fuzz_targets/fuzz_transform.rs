#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpbm::rgb::Rgb;
use zenpbm::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 16),
        ..Default::default()
    };
    let Ok(image) = decode_with_limits(data, &limits) else {
        return;
    };

    let rotated = image
        .clone()
        .rotate_90_clockwise()
        .rotate_90_clockwise()
        .rotate_90_clockwise()
        .rotate_90_clockwise();
    assert_eq!(rotated, image, "four rotations must be the identity");

    let mut inverted = image.clone();
    inverted.invert();
    inverted.invert();
    assert_eq!(inverted, image, "invert must be an involution");

    // Drawing with coordinates taken from the input must never panic
    let mut color = image.into_color();
    let coord = |i: usize| {
        let b = data.get(i).copied().unwrap_or(0);
        i32::from(b as i8) * 3
    };
    let p1 = Point::new(coord(0), coord(1));
    let p2 = Point::new(coord(2), coord(3));
    let p3 = Point::new(coord(4), coord(5));
    let ink = Rgb::new(u16::MAX, 0, u16::MAX);
    let mut canvas = color.canvas().expect("converted image is color");
    canvas.draw_line(p1, p2, ink);
    canvas.draw_filled_triangle(p1, p2, p3, ink);
    canvas.draw_filled_circle(p1, coord(6), ink);
    canvas.draw_koch_curve(2, p2, p3, ink);
});
