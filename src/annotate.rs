use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use anyhow::Result;
use image::{Rgb, RgbImage};
use imageproc::drawing::{BresenhamLineIter, draw_filled_circle_mut, draw_line_segment_mut, draw_text_mut};

use crate::models::{Contour, DiceReport};

static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Colours, sizes and anchors used when labelling an image
#[derive(Debug, Clone, Copy)]
pub struct AnnotationStyle {
    pub text_color: Rgb<u8>,
    pub die_color: Rgb<u8>,
    pub dot_color: Rgb<u8>,
    /// Outline width in pixels
    pub thickness: u32,
    pub count_scale: f32,
    pub total_scale: f32,
    /// Baseline start of the "Sum N" label
    pub total_origin: (i32, i32),
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            text_color: Rgb([0, 255, 0]),
            die_color: Rgb([0, 255, 0]),
            dot_color: Rgb([0, 0, 255]),
            thickness: 3,
            count_scale: 32.0,
            total_scale: 48.0,
            total_origin: (10, 35),
        }
    }
}

/// Draws dot counts, the total and the classified outlines onto the color image
pub struct Annotator<'f> {
    font: FontRef<'f>,
    pub style: AnnotationStyle,
}

impl Annotator<'static> {
    pub fn new() -> Result<Self> {
        let font = FontRef::try_from_slice(FONT_BYTES)
            .map_err(|e| anyhow::anyhow!("Failed to load embedded font: {}", e))?;
        Ok(Self {
            font,
            style: AnnotationStyle::default(),
        })
    }
}

impl<'f> Annotator<'f> {
    pub fn with_style(mut self, style: AnnotationStyle) -> Self {
        self.style = style;
        self
    }

    /// Label every die with its count, write the total, then outline dice and dots.
    /// Text goes first so the outlines end up on top where they overlap.
    pub fn annotate(&self, canvas: &mut RgbImage, report: &DiceReport) {
        for die in &report.dice {
            let anchor = die.bounds.bottom_right();
            self.draw_label(canvas, anchor, self.style.count_scale, &die.dots.to_string());
        }

        let total = format!("Sum {}", report.total);
        self.draw_label(canvas, self.style.total_origin, self.style.total_scale, &total);

        draw_contours(canvas, report.dice.iter().map(|d| &d.contour), self.style.die_color, self.style.thickness);
        draw_contours(canvas, &report.dots, self.style.dot_color, self.style.thickness);
    }

    /// Draw `text` with its baseline starting at `origin`
    fn draw_label(&self, canvas: &mut RgbImage, origin: (i32, i32), scale: f32, text: &str) {
        let scale = PxScale::from(scale);
        let ascent = self.font.as_scaled(scale).ascent().round() as i32;
        draw_text_mut(canvas, self.style.text_color, origin.0, origin.1 - ascent, scale, &self.font, text);
    }
}

/// Outline each contour as a closed polyline `thickness` pixels wide
pub fn draw_contours<'a>(
    canvas: &mut RgbImage,
    contours: impl IntoIterator<Item = &'a Contour>,
    color: Rgb<u8>,
    thickness: u32,
) {
    let radius = (thickness / 2) as i32;

    for c in contours {
        let n = c.points.len();
        for i in 0..n {
            let p1 = c.points[i];
            let p2 = c.points[(i + 1) % n];
            let (start, end) = ((p1.x as f32, p1.y as f32), (p2.x as f32, p2.y as f32));
            if radius == 0 {
                draw_line_segment_mut(canvas, start, end, color);
            } else {
                for center in BresenhamLineIter::new(start, end) {
                    draw_filled_circle_mut(canvas, center, radius, color);
                }
            }
        }
    }
}
