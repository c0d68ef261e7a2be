//! Bitmap text for node labels.

use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};

/// Glyph cell size in pixels at scale 1.
pub const GLYPH_SIZE: i32 = 8;

/// Cut `label` to `max_chars` characters, ending in "..." when shortened.
pub fn truncate(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let kept: String = label.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Width of `text` in pixels at `scale`.
pub fn text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * GLYPH_SIZE * scale
}

/// Draw `text` horizontally centered on `center_x`, top edge at `top`.
pub fn draw_centered(image: &mut RgbImage, text: &str, center_x: i32, top: i32, scale: i32, color: Rgb<u8>) {
    let left = center_x - text_width(text, scale) / 2;
    draw(image, text, left, top, scale, color);
}

/// Draw `text` with its top-left corner at (`left`, `top`). Pixels outside the
/// image are dropped; characters without a glyph render as '?'.
pub fn draw(image: &mut RgbImage, text: &str, left: i32, top: i32, scale: i32, color: Rgb<u8>) {
    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = glyph_for(ch) else { continue };
        let origin_x = left + i as i32 * GLYPH_SIZE * scale;

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..8 {
                if (*bits >> col) & 1 == 0 {
                    continue;
                }
                let x = origin_x + col * scale;
                let y = top + row as i32 * scale;
                fill_cell(image, x, y, scale, color);
            }
        }
    }
}

fn glyph_for(ch: char) -> Option<[u8; 8]> {
    BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch)).or_else(|| BASIC_FONTS.get('?'))
}

fn fill_cell(image: &mut RgbImage, x: i32, y: i32, size: i32, color: Rgb<u8>) {
    let (width, height) = (image.width() as i32, image.height() as i32);
    for py in y..y + size {
        for px in x..x + size {
            if (0..width).contains(&px) && (0..height).contains(&py) {
                image.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 40), "Short");
        assert_eq!(truncate("Attention Is All You Need", 12), "Attention...");
        assert_eq!(truncate("abcdef", 6), "abcdef");
    }

    #[test]
    fn test_draw_marks_pixels() {
        let mut image = RgbImage::from_pixel(64, 16, Rgb([255, 255, 255]));
        draw(&mut image, "A", 0, 0, 1, Rgb([0, 0, 0]));
        assert!(image.pixels().any(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_draw_clips_out_of_bounds() {
        let mut image = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        draw(&mut image, "Wide label", -20, -3, 2, Rgb([0, 0, 0]));
        draw_centered(&mut image, "über", 2, 2, 1, Rgb([0, 0, 0]));
    }
}
