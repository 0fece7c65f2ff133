//! Frame delivery.
//!
//! [`DisplaySink`] is the boundary to the physical panel: it owns the panel
//! geometry and accepts exactly one finished frame per invocation. The
//! crate ships a file-backed sink ([`PpmSink`]) for development and for
//! hosts where a separate process owns the panel bus; a driver for real
//! hardware implements the same trait.

use std::path::{Path, PathBuf};

use embedded_graphics::prelude::*;

use crate::error::Error;
use crate::surface::Frame;
use crate::{PANEL_HEIGHT, PANEL_WIDTH};

/// Destination for a finished frame.
pub trait DisplaySink {
    /// Panel dimensions; the driver sizes the frame from this.
    fn size(&self) -> Size {
        Size::new(PANEL_WIDTH, PANEL_HEIGHT)
    }

    /// Deliver a finished frame.
    ///
    /// This is one of the two failure points of a run: a frame that never
    /// reaches the panel is a user-visible failure and must propagate.
    fn push(&mut self, frame: &Frame) -> Result<(), Error>;
}

/// Sink that writes the frame as a binary PPM (`P6`) file.
#[derive(Debug, Clone)]
pub struct PpmSink {
    path: PathBuf,
}

impl PpmSink {
    /// Create a sink writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplaySink for PpmSink {
    fn push(&mut self, frame: &Frame) -> Result<(), Error> {
        let (w, h) = (frame.width(), frame.height());
        let mut out = Vec::with_capacity(32 + (w * h * 3) as usize);
        out.extend_from_slice(format!("P6\n{} {}\n255\n", w, h).as_bytes());

        for y in 0..h as i32 {
            for x in 0..w as i32 {
                // In-range by construction, white if somehow not.
                let color = frame
                    .pixel(Point::new(x, y))
                    .unwrap_or(crate::surface::PanelColor::White);
                out.extend_from_slice(&color.rgb());
            }
        }

        std::fs::write(&self.path, &out)
            .map_err(|err| Error::Sink(format!("{}: {}", self.path.display(), err)))?;
        tracing::debug!("wrote {}x{} frame to {}", w, h, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_header_and_payload() {
        let path = std::env::temp_dir().join(format!("inkboard-ppm-{}", std::process::id()));
        let mut sink = PpmSink::new(&path);
        let frame = Frame::new(Size::new(4, 3));

        sink.push(&frame).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let header = b"P6\n4 3\n255\n";
        assert!(bytes.starts_with(header));
        assert_eq!(bytes.len(), header.len() + 4 * 3 * 3);
        // Blank frame is all white.
        assert!(bytes[header.len()..].iter().all(|&b| b == 255));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_push_to_bad_path_errors() {
        let mut sink = PpmSink::new("/nonexistent-dir/inkboard/frame.ppm");
        let frame = Frame::new(Size::new(2, 2));
        assert!(sink.push(&frame).is_err());
    }

    #[test]
    fn test_default_size_is_panel() {
        let sink = PpmSink::new("frame.ppm");
        assert_eq!(sink.size(), Size::new(PANEL_WIDTH, PANEL_HEIGHT));
    }
}
