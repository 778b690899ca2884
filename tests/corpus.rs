//! Pattern roundtrips across sizes that exercise every padding width.

use enough::Unstoppable;
use zenbmp::*;

fn checkerboard(w: u32, h: u32) -> Bitmap {
    let mut img = Bitmap::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            if (x + y) % 2 == 0 {
                img.set_pixel(x, y, 200, 220, 240);
            } else {
                img.set_pixel(x, y, 10, 40, 70);
            }
        }
    }
    img
}

fn noise(w: u32, h: u32) -> Bitmap {
    let mut img = Bitmap::new(w, h).unwrap();
    let mut state: u32 = 0xDEAD_BEEF;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
    };
    for y in 0..h {
        for x in 0..w {
            img.set_pixel(x, y, next(), next(), next());
        }
    }
    img
}

fn assert_roundtrip(img: &Bitmap) {
    let encoded = encode(img, Unstoppable).unwrap();
    let expected_len =
        54 + row_stride(img.width(), 24) as usize * img.height() as usize;
    assert_eq!(encoded.len(), expected_len);

    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width(), img.width());
    assert_eq!(decoded.height(), img.height());
    assert_eq!(decoded.pixels(), img.pixels());
}

#[test]
fn checkerboard_all_padding_widths() {
    // widths 1..=8 cover pad lengths 1, 2, 3, 0 twice over
    for w in 1..=8 {
        for h in [1, 2, 5] {
            assert_roundtrip(&checkerboard(w, h));
        }
    }
}

#[test]
fn noise_all_padding_widths() {
    for w in 1..=8 {
        assert_roundtrip(&noise(w, 3));
    }
}

#[test]
fn single_pixel() {
    let mut img = Bitmap::new(1, 1).unwrap();
    img.set_pixel(0, 0, 12, 34, 56);
    assert_roundtrip(&img);
    let decoded = decode(&encode(&img, Unstoppable).unwrap(), Unstoppable).unwrap();
    assert_eq!(decoded.get_pixel(0, 0), Some((12, 34, 56)));
}

#[test]
fn tall_and_wide() {
    assert_roundtrip(&noise(1, 64));
    assert_roundtrip(&noise(64, 1));
    assert_roundtrip(&checkerboard(33, 17));
}
