use std::fmt::Write as _;

use tracing::debug;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serializes frames into standalone SVG documents.
///
/// The last rendered document is kept until the next `render` call.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut document = String::new();
        let _ = write!(
            document,
            "<svg xmlns=\"{SVG_NAMESPACE}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        for polygon in &frame.polygons {
            document.push_str(&polygon.to_svg_element());
        }
        document.push_str("</svg>");

        debug!(
            polygons = frame.polygons.len(),
            bytes = document.len(),
            "rendered svg frame"
        );
        self.document = document;
        Ok(())
    }
}
