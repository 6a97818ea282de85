use std::fmt::Write as _;

use super::PpmImage;

/// Emits the canonical textual form: tag line, comments, dimensions, max
/// channel value, then one `red green blue` line per pixel in row-major
/// order. Parsing this output again reproduces the image field-for-field.
pub(super) fn serialize(image: &PpmImage) -> Vec<u8> {
    let mut out = String::with_capacity(image.pixel_count() * 12 + 64);

    out.push_str(super::PPM_TAG);
    out.push('\n');
    for comment in &image.comments {
        let _ = writeln!(out, "#{comment}");
    }
    let _ = writeln!(out, "{} {}", image.width, image.height);
    let _ = writeln!(out, "{}", image.max_value);
    for pixel in &image.pixels {
        let _ = writeln!(out, "{} {} {}", pixel.red, pixel.green, pixel.blue);
    }

    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use crate::ppm::{PpmImage, Rgb};

    #[test]
    fn should_serialize_the_canonical_form() {
        let mut img = PpmImage::from_fn(2, 2, 255, |x, y| Rgb::new((y * 2 + x) as u16, 0, 9));
        img.add_comment(" created for a test");

        let bytes = img.to_bytes();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "P3\n# created for a test\n2 2\n255\n0 0 9\n1 0 9\n2 0 9\n3 0 9\n"
        );
    }

    #[test]
    fn should_round_trip_through_parse() {
        let mut img = PpmImage::from_fn(5, 3, 1023, |x, y| {
            Rgb::new((x * 31) as u16, (y * 101) as u16, (x + y) as u16)
        });
        img.add_comment("one");
        img.add_comment("two");

        let reparsed = PpmImage::parse(&img.to_bytes()).unwrap();

        assert_eq!(reparsed, img);
    }

    #[test]
    fn should_reproduce_canonical_input_byte_for_byte() {
        let data = b"P3\n#best viewed in the dark\n2 1\n255\n11 22 33\n44 55 66\n";
        let img = PpmImage::parse(data).unwrap();

        assert_eq!(img.to_bytes(), data);
    }
}
