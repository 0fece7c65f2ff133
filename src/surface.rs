//! In-memory raster frame for one render pass.
//!
//! [`Frame`] is an indexed raster over the panel's three-color palette and
//! implements [`DrawTarget`] so the renderer can use the embedded-graphics
//! text and primitive toolkit. A frame is created blank, painted by exactly
//! one render pass, handed to a [`crate::sink::DisplaySink`], and dropped.

use core::convert::Infallible;

use embedded_graphics::prelude::*;
use embedded_graphics::Pixel;

/// The panel's fixed palette.
///
/// Black carries "normal" content, red carries alerts, white is the
/// background. There is deliberately no fourth state: every visual emphasis
/// decision in the pipeline is a two-way normal/alert classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelColor {
    /// Background
    White,
    /// Normal content
    Black,
    /// Alert content
    Red,
}

impl PanelColor {
    /// RGB triplet used by file-backed sinks.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            PanelColor::White => [255, 255, 255],
            PanelColor::Black => [0, 0, 0],
            PanelColor::Red => [255, 0, 0],
        }
    }
}

impl PixelColor for PanelColor {
    type Raw = ();
}

/// A fixed-size raster of [`PanelColor`] pixels.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<PanelColor>,
}

impl Frame {
    /// Create a blank (all-white) frame.
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![PanelColor::White; (size.width * size.height) as usize],
        }
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at a point, or `None` outside the frame.
    pub fn pixel(&self, point: Point) -> Option<PanelColor> {
        let (x, y) = (
            usize::try_from(point.x).ok()?,
            usize::try_from(point.y).ok()?,
        );
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        Some(self.pixels[y * self.width as usize + x])
    }

    /// Number of pixels painted in the given color.
    pub fn count_of(&self, color: PanelColor) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Frame {
    type Color = PanelColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Out-of-bounds pixels are dropped, per the DrawTarget contract.
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                if x < self.width as usize && y < self.height as usize {
                    self.pixels[y * self.width as usize + x] = color;
                }
            }
        }
        Ok(())
    }
}
