//! Serialized glyph stream of a document.
//!
//! The dump is what a PDF renderer hands over: for every page its crop box,
//! its rotation flag and the glyphs in drawing order. Coordinates are in
//! content space.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{PageGeometry, Rotation};
use crate::layout::types::GlyphEvent;

/// Glyph stream of a whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphDump {
    pub pages: Vec<PageDump>,
}

/// One page of a [`GlyphDump`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDump {
    /// `(x0, y0, x1, y1)` in content space.
    pub crop_box: [f64; 4],
    /// Page rotation flag in degrees.
    #[serde(default)]
    pub rotation: i64,
    #[serde(default)]
    pub glyphs: Vec<GlyphRecord>,
}

/// One drawn glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphRecord {
    pub text: String,
    /// Baseline start and end, `(x0, y0, x1, y1)`.
    pub base: [f64; 4],
    pub bbox: [f64; 4],
}

impl GlyphDump {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }
}

impl PageDump {
    pub fn new(geometry: &PageGeometry) -> Self {
        let (x0, y0, x1, y1) = geometry.crop_box();
        Self {
            crop_box: [x0, y0, x1, y1],
            rotation: i64::from(geometry.rotation().degrees()),
            glyphs: Vec::new(),
        }
    }

    /// Validated geometry of this page.
    pub fn geometry(&self) -> Result<PageGeometry> {
        let [x0, y0, x1, y1] = self.crop_box;
        PageGeometry::try_new((x0, y0, x1, y1), Rotation::from_degrees(self.rotation)?)
    }
}

impl GlyphRecord {
    pub fn to_event(&self) -> GlyphEvent {
        let [ox, oy, ex, ey] = self.base;
        let [x0, y0, x1, y1] = self.bbox;
        GlyphEvent::new(&self.text, (ox, oy), (ex, ey), (x0, y0, x1, y1))
    }
}

impl From<&GlyphEvent> for GlyphRecord {
    fn from(glyph: &GlyphEvent) -> Self {
        let (ox, oy) = glyph.origin();
        let (ex, ey) = glyph.end();
        let (x0, y0, x1, y1) = glyph.bbox();
        Self {
            text: glyph.text().to_string(),
            base: [ox, oy, ex, ey],
            bbox: [x0, y0, x1, y1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextError;

    #[test]
    fn rotation_defaults_to_zero() {
        let dump = GlyphDump::from_slice(br#"{"pages":[{"crop_box":[0,0,100,200]}]}"#).unwrap();
        let geometry = dump.pages[0].geometry().unwrap();
        assert_eq!(geometry.rotation(), Rotation::Deg0);
        assert!(dump.pages[0].glyphs.is_empty());
    }

    #[test]
    fn odd_rotation_is_rejected() {
        let page = PageDump {
            crop_box: [0.0, 0.0, 10.0, 10.0],
            rotation: 45,
            glyphs: Vec::new(),
        };
        assert!(matches!(page.geometry(), Err(TextError::InvalidRotation(45))));
    }

    #[test]
    fn record_keeps_event_coordinates() {
        let glyph = GlyphEvent::new("A", (1.0, 2.0), (7.0, 2.0), (1.0, 0.0, 7.0, 10.0));
        let record = GlyphRecord::from(&glyph);
        assert_eq!(record.base, [1.0, 2.0, 7.0, 2.0]);
        assert_eq!(record.to_event(), glyph);
    }
}
