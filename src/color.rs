use std::fmt;

use eframe::egui::Color32;
use palette::Srgb;

use crate::error::{ExplorerError, Result};

// ---------------------------------------------------------------------------
// Categorical palette: "C0" … "C9"
// ---------------------------------------------------------------------------

/// The ten-entry categorical color cycle addressed as `C0`…`C9`.
pub const CYCLE: [Srgb<u8>; 10] = [
    Srgb::new(0x1f, 0x77, 0xb4), // blue
    Srgb::new(0xff, 0x7f, 0x0e), // orange
    Srgb::new(0x2c, 0xa0, 0x2c), // green
    Srgb::new(0xd6, 0x27, 0x28), // red
    Srgb::new(0x94, 0x67, 0xbd), // purple
    Srgb::new(0x8c, 0x56, 0x4b), // brown
    Srgb::new(0xe3, 0x77, 0xc2), // pink
    Srgb::new(0x7f, 0x7f, 0x7f), // gray
    Srgb::new(0xbc, 0xbd, 0x22), // olive
    Srgb::new(0x17, 0xbe, 0xcf), // cyan
];

/// A validated palette index, printed as `C{n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaletteKey(u8);

impl PaletteKey {
    /// Color of an uncolored scatter.
    pub const C0: PaletteKey = PaletteKey(0);
    pub const C1: PaletteKey = PaletteKey(1);

    /// Map an integer category label onto the cycle. Labels outside
    /// `0..CYCLE.len()` have no color and are a render error.
    pub fn from_label(label: i64) -> Result<Self> {
        if (0..CYCLE.len() as i64).contains(&label) {
            Ok(PaletteKey(label as u8))
        } else {
            Err(ExplorerError::Render(format!(
                "label {label} has no palette color (valid: C0..C{})",
                CYCLE.len() - 1
            )))
        }
    }

    /// Parse a `C{n}` key.
    pub fn parse(key: &str) -> Result<Self> {
        let idx = key
            .strip_prefix('C')
            .and_then(|n| n.parse::<i64>().ok())
            .ok_or_else(|| ExplorerError::Render(format!("'{key}' is not a palette key")))?;
        Self::from_label(idx)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn srgb(self) -> Srgb<u8> {
        CYCLE[self.index()]
    }

    pub fn color32(self) -> Color32 {
        let c = self.srgb();
        Color32::from_rgb(c.red, c.green, c.blue)
    }
}

impl fmt::Display for PaletteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// Map labels to keys, failing on the first label the cycle cannot hold.
pub fn keys_for_labels(labels: &[i64]) -> Result<Vec<PaletteKey>> {
    labels.iter().map(|&l| PaletteKey::from_label(l)).collect()
}
