//! Cell grid to bitmap.
//!
//! Each terminal cell maps to an 8×16 pixel box (8×8 glyph rows doubled
//! vertically), scaled by [`SUPERSAMPLE`].

use image::Rgb;
use image::RgbImage;
use ratatui::buffer::Cell;
use ratatui::style::Modifier;

use crate::ExportError;
use crate::ExportRegion;
use crate::Palette;
use crate::glyph;
use crate::glyph::GLYPH_SIZE;
use crate::palette::dim;

/// Fixed scale factor applied to every cell.
pub const SUPERSAMPLE: u32 = 2;

/// Pixel width of one cell before supersampling.
pub const CELL_WIDTH_PX: u32 = 8;

/// Pixel height of one cell before supersampling.
pub const CELL_HEIGHT_PX: u32 = 16;

const PX_W: u32 = SUPERSAMPLE * CELL_WIDTH_PX / GLYPH_SIZE;
const PX_H: u32 = SUPERSAMPLE * CELL_HEIGHT_PX / GLYPH_SIZE;

/// Bitmap dimensions for a region of `width`×`height` cells.
pub fn bitmap_size(width: u16, height: u16) -> (u32, u32) {
    (
        u32::from(width) * CELL_WIDTH_PX * SUPERSAMPLE,
        u32::from(height) * CELL_HEIGHT_PX * SUPERSAMPLE,
    )
}

/// Render every cell of `region` into an opaque RGB bitmap.
///
/// Glyphs missing from the bundled fonts leave their cell showing only its
/// background; they never fail the render.
pub fn rasterize(region: &ExportRegion, palette: Palette) -> Result<RgbImage, ExportError> {
    if region.is_empty() {
        return Err(ExportError::EmptyRegion {
            width: region.width(),
            height: region.height(),
        });
    }
    let (width, height) = bitmap_size(region.width(), region.height());
    let mut image = RgbImage::from_pixel(width, height, palette.background);
    for y in 0..region.height() {
        for x in 0..region.width() {
            paint_cell(&mut image, x, y, region.cell(x, y), palette);
        }
    }
    Ok(image)
}

fn paint_cell(image: &mut RgbImage, col: u16, row: u16, cell: &Cell, palette: Palette) {
    let mut fg = palette.foreground_of(cell.fg);
    let mut bg = palette.background_of(cell.bg);
    if cell.modifier.contains(Modifier::REVERSED) {
        std::mem::swap(&mut fg, &mut bg);
    }
    if cell.modifier.contains(Modifier::DIM) {
        fg = dim(fg, bg);
    }

    let cell_w = CELL_WIDTH_PX * SUPERSAMPLE;
    let cell_h = CELL_HEIGHT_PX * SUPERSAMPLE;
    let x0 = u32::from(col) * cell_w;
    let y0 = u32::from(row) * cell_h;
    fill_rect(image, x0, y0, cell_w, cell_h, bg);

    let bold = cell.modifier.contains(Modifier::BOLD);
    if let Some(rows) = cell.symbol().chars().next().and_then(glyph::lookup) {
        for (gy, bits) in (0u32..).zip(rows) {
            for gx in 0..GLYPH_SIZE {
                if bits & (1 << gx) == 0 {
                    continue;
                }
                // Bold smears each set pixel one font pixel to the right.
                let w = if bold && gx + 1 < GLYPH_SIZE {
                    PX_W * 2
                } else {
                    PX_W
                };
                fill_rect(image, x0 + gx * PX_W, y0 + gy * PX_H, w, PX_H, fg);
            }
        }
    }

    if cell.modifier.contains(Modifier::UNDERLINED) {
        fill_rect(image, x0, y0 + cell_h - SUPERSAMPLE, cell_w, SUPERSAMPLE, fg);
    }
}

fn fill_rect(image: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x_end = (x + w).min(image.width());
    let y_end = (y + h).min(image.height());
    for py in y..y_end {
        for px in x..x_end {
            image.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::style::Style;

    fn region(width: u16, height: u16, text: &str, style: Style) -> ExportRegion {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        buf.set_string(0, 0, text, style);
        ExportRegion::from_buffer(buf)
    }

    #[test]
    fn bitmap_is_cells_times_scale() {
        let image = rasterize(&region(3, 2, "abc", Style::default()), Palette::default()).unwrap();
        assert_eq!(image.dimensions(), (3 * 16, 2 * 32));
    }

    #[test]
    fn unset_background_is_opaque_palette_color() {
        let palette = Palette::default();
        let image = rasterize(&region(2, 1, "", Style::default()), palette).unwrap();
        assert!(image.pixels().all(|p| *p == palette.background));
    }

    #[test]
    fn cell_background_fills_its_box() {
        let style = Style::default().bg(Color::Rgb(0x4f, 0x46, 0xe5));
        let image = rasterize(&region(2, 1, " ", style), Palette::default()).unwrap();
        assert_eq!(*image.get_pixel(0, 0), Rgb([0x4f, 0x46, 0xe5]));
        assert_eq!(*image.get_pixel(15, 31), Rgb([0x4f, 0x46, 0xe5]));
        assert_eq!(*image.get_pixel(16, 0), Palette::default().background);
    }

    #[test]
    fn full_block_paints_foreground() {
        let style = Style::default().fg(Color::Rgb(0x10, 0xb9, 0x81));
        let image = rasterize(&region(1, 1, "█", style), Palette::default()).unwrap();
        assert!(image.pixels().all(|p| *p == Rgb([0x10, 0xb9, 0x81])));
    }

    #[test]
    fn reversed_swaps_colors() {
        let style = Style::default()
            .fg(Color::Rgb(1, 2, 3))
            .bg(Color::Rgb(200, 200, 200))
            .add_modifier(Modifier::REVERSED);
        let image = rasterize(&region(1, 1, " ", style), Palette::default()).unwrap();
        assert_eq!(*image.get_pixel(4, 4), Rgb([1, 2, 3]));
    }

    #[test]
    fn unsupported_glyphs_render_background_only() {
        let palette = Palette::default();
        let image = rasterize(&region(4, 1, "漢🎉", Style::default()), palette).unwrap();
        assert!(image.pixels().all(|p| *p == palette.background));
    }

    #[test]
    fn text_leaves_foreground_pixels() {
        let palette = Palette::default();
        let image = rasterize(&region(6, 1, "Nivå 5", Style::default()), palette).unwrap();
        assert!(image.pixels().any(|p| *p == palette.foreground));
    }

    #[test]
    fn empty_region_is_an_error() {
        let empty = ExportRegion::from_buffer(Buffer::empty(Rect::new(0, 0, 0, 3)));
        let err = rasterize(&empty, Palette::default()).unwrap_err();
        assert!(matches!(err, ExportError::EmptyRegion { width: 0, height: 3 }));
    }
}
