use zenpbm::rgb::Rgb;
use zenpbm::*;

const INK: Rgb<u16> = Rgb { r: 200, g: 10, b: 10 };

fn blank(w: u32, h: u32) -> Image {
    Image::new_color(w, h, 255, Encoding::Binary).unwrap()
}

fn is_lit(image: &Image, x: u32, y: u32) -> bool {
    image.get(x, y).unwrap() != Pixel::Rgb(Rgb::new(0, 0, 0))
}

fn lit(image: &Image) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for y in 0..image.height() {
        for x in 0..image.width() {
            if is_lit(image, x, y) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn only_color_images_have_a_canvas() {
    let mut gray = Image::new_grayscale(2, 2, 255, Encoding::Ascii).unwrap();
    assert!(matches!(
        gray.canvas(),
        Err(PnmError::VariantMismatch {
            expected: Variant::Color,
            actual: Variant::Grayscale
        })
    ));
    let mut bitmap = Image::new_bitmap(2, 2, Encoding::Ascii).unwrap();
    assert!(bitmap.canvas().is_err());
}

#[test]
fn bresenham_reference_line() {
    let mut image = blank(4, 3);
    image
        .canvas()
        .unwrap()
        .draw_line(Point::new(0, 0), Point::new(3, 2), INK);
    assert_eq!(lit(&image), [(0, 0), (1, 1), (2, 1), (3, 2)]);
}

#[test]
fn line_direction_does_not_change_endpoints() {
    let mut forward = blank(10, 10);
    forward
        .canvas()
        .unwrap()
        .draw_line(Point::new(1, 8), Point::new(7, 2), INK);
    let mut backward = blank(10, 10);
    backward
        .canvas()
        .unwrap()
        .draw_line(Point::new(7, 2), Point::new(1, 8), INK);
    // a pure diagonal is the same either way
    assert_eq!(lit(&forward), lit(&backward));
    assert_eq!(lit(&forward).len(), 7);
}

#[test]
fn set_pixel_clips_and_clamps() {
    let mut image = Image::new_color(2, 2, 100, Encoding::Ascii).unwrap();
    {
        let mut canvas = image.canvas().unwrap();
        canvas.set_pixel(Point::new(-1, 0), INK);
        canvas.set_pixel(Point::new(0, 2), INK);
        canvas.set_pixel(Point::new(i32::MAX, i32::MIN), INK);
        canvas.set_pixel(Point::new(1, 1), Rgb::new(255, 50, 300));
    }
    assert_eq!(lit(&image), [(1, 1)]);
    assert_eq!(image.get(1, 1).unwrap(), Pixel::Rgb(Rgb::new(100, 50, 100)));
}

#[test]
fn extreme_coordinates_do_not_overflow() {
    let mut image = blank(3, 3);
    let mut canvas = image.canvas().unwrap();
    canvas.draw_rectangle(Point::new(i32::MAX - 1, 0), i32::MAX, 1, INK);
    canvas.draw_filled_rectangle(Point::new(i32::MIN, i32::MIN), i32::MAX, i32::MAX, INK);
    canvas.draw_filled_rectangle(Point::new(0, 0), -5, 2, INK);
    assert!(lit(&image).is_empty());
}

#[test]
fn rectangle_outline() {
    let mut image = blank(6, 6);
    image
        .canvas()
        .unwrap()
        .draw_rectangle(Point::new(1, 1), 3, 2, INK);
    let pixels = lit(&image);
    assert_eq!(pixels.len(), 10);
    for corner in [(1, 1), (4, 1), (4, 3), (1, 3)] {
        assert!(pixels.contains(&corner), "{corner:?}");
    }
    assert!(!pixels.contains(&(2, 2)));
}

#[test]
fn filled_rectangle_is_half_open_and_clipped() {
    let mut image = blank(4, 4);
    {
        let mut canvas = image.canvas().unwrap();
        canvas.draw_filled_rectangle(Point::new(-1, -1), 3, 3, INK);
        canvas.draw_filled_rectangle(Point::new(3, 3), 10, 10, INK);
    }
    assert_eq!(lit(&image), [(0, 0), (1, 0), (0, 1), (1, 1), (3, 3)]);
}

#[test]
fn triangle_outline_hits_vertices() {
    let mut image = blank(8, 8);
    image.canvas().unwrap().draw_triangle(
        Point::new(1, 1),
        Point::new(6, 2),
        Point::new(3, 6),
        INK,
    );
    for (x, y) in [(1, 1), (6, 2), (3, 6)] {
        assert!(is_lit(&image, x, y));
    }
    assert!(!is_lit(&image, 3, 3));
}

#[test]
fn polygon_degenerate_inputs() {
    let mut image = blank(3, 3);
    {
        let mut canvas = image.canvas().unwrap();
        canvas.draw_polygon(&[], INK);
        canvas.draw_filled_polygon(&[], INK);
    }
    assert!(lit(&image).is_empty());

    image.canvas().unwrap().draw_polygon(&[Point::new(2, 1)], INK);
    assert_eq!(lit(&image), [(2, 1)]);
}

#[test]
fn polygon_closes_the_outline() {
    let mut image = blank(5, 5);
    let points = [Point::new(0, 0), Point::new(4, 0), Point::new(4, 4)];
    image.canvas().unwrap().draw_polygon(&points, INK);
    // closing edge (4,4) -> (0,0) is the diagonal
    for i in 0..5 {
        assert!(is_lit(&image, i, i));
    }
}

#[test]
fn filled_triangle_covers_interior() {
    let mut image = blank(5, 5);
    image.canvas().unwrap().draw_filled_triangle(
        Point::new(0, 0),
        Point::new(4, 0),
        Point::new(0, 4),
        INK,
    );
    assert!(is_lit(&image, 1, 1));
    assert!(is_lit(&image, 0, 3));
    assert!(!is_lit(&image, 4, 4));
    assert!(!is_lit(&image, 3, 3));
}

#[test]
fn filled_polygon_even_odd() {
    // square ring drawn as one self-overlapping path around a hole
    let mut image = blank(10, 10);
    let outer_then_inner = [
        Point::new(0, 0),
        Point::new(9, 0),
        Point::new(9, 9),
        Point::new(0, 9),
        Point::new(0, 0),
        Point::new(3, 3),
        Point::new(3, 6),
        Point::new(6, 6),
        Point::new(6, 3),
        Point::new(3, 3),
    ];
    image
        .canvas()
        .unwrap()
        .draw_filled_polygon(&outer_then_inner, INK);
    assert!(is_lit(&image, 1, 5));
    assert!(is_lit(&image, 8, 8));
    assert!(!is_lit(&image, 4, 4));
}

#[test]
fn circle_outline_and_disc() {
    let center = Point::new(5, 5);
    let mut ring = blank(11, 11);
    ring.canvas().unwrap().draw_circle(center, 4, INK);
    let mut disc = blank(11, 11);
    disc.canvas().unwrap().draw_filled_circle(center, 4, INK);

    for (x, y) in [(9, 5), (1, 5), (5, 9), (5, 1)] {
        assert!(is_lit(&ring, x, y));
    }
    assert!(!is_lit(&ring, 5, 5));
    for p in lit(&ring) {
        assert!(disc.get(p.0, p.1).unwrap() != Pixel::Rgb(Rgb::new(0, 0, 0)));
    }
    assert!(is_lit(&disc, 5, 5));
    assert!(!is_lit(&disc, 0, 0));
}

#[test]
fn circle_clips_at_edges() {
    let mut image = blank(4, 4);
    image
        .canvas()
        .unwrap()
        .draw_filled_circle(Point::new(0, 0), 2, INK);
    assert!(is_lit(&image, 0, 0));
    assert!(is_lit(&image, 2, 0));
    assert!(!is_lit(&image, 3, 3));
}

#[test]
fn koch_depth_zero_is_a_line() {
    let mut koch = blank(10, 10);
    koch.canvas()
        .unwrap()
        .draw_koch_curve(0, Point::new(0, 2), Point::new(9, 7), INK);
    let mut line = blank(10, 10);
    line.canvas()
        .unwrap()
        .draw_line(Point::new(0, 2), Point::new(9, 7), INK);
    assert_eq!(lit(&koch), lit(&line));
}

#[test]
fn koch_bump_points_up() {
    let mut image = blank(10, 10);
    image
        .canvas()
        .unwrap()
        .draw_koch_curve(1, Point::new(0, 9), Point::new(9, 9), INK);
    assert!(is_lit(&image, 0, 9));
    assert!(is_lit(&image, 9, 9));
    assert!(is_lit(&image, 5, 6));
    assert!(!is_lit(&image, 4, 9));
    assert!(!is_lit(&image, 5, 9));
}

#[test]
fn snowflake_base_triangle_and_outward_bump() {
    let mut triangle = blank(10, 10);
    triangle
        .canvas()
        .unwrap()
        .draw_koch_snowflake(0, Point::new(0, 0), 8, INK);
    // apex below the base at round(8 * sin 60)
    for (x, y) in [(0, 0), (8, 0), (4, 7)] {
        assert!(is_lit(&triangle, x, y), "({x}, {y})");
    }

    let mut flake = blank(14, 14);
    flake
        .canvas()
        .unwrap()
        .draw_koch_snowflake(1, Point::new(2, 4), 9, INK);
    // bump on the top edge rises above the base line
    assert!(is_lit(&flake, 7, 1));
    assert!(!is_lit(&flake, 6, 4));
}

#[test]
fn drawing_survives_encode() {
    let mut image = blank(6, 4);
    image
        .canvas()
        .unwrap()
        .draw_filled_rectangle(Point::new(1, 1), 4, 2, INK);
    image.set_encoding(Encoding::Ascii);
    let decoded = decode(&encode(&image).unwrap()).unwrap();
    assert_eq!(decoded, image);
}
