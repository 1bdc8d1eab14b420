//! Asset loading: the bold label font and the optional shop logo.
//!
//! Both live in a fixed asset directory next to the binary. The font is
//! required; nothing can render without it. The logo is optional: a missing
//! or undecodable file downgrades to [`Logo::Absent`] with a warning, and
//! every label in the run renders without a logo.

use ab_glyph::FontArc;
use image::RgbaImage;
use std::path::Path;

use crate::error::MesitaError;

/// File name of the bundled bold font, relative to the asset directory.
pub const FONT_FILE: &str = "DejaVuSans-Bold.ttf";
/// File name of the optional logo, relative to the asset directory.
pub const LOGO_FILE: &str = "logo.png";

/// The shop logo, present or not.
///
/// Modeled as a sum type so rendering code matches on it instead of
/// branching on a nullable handle.
#[derive(Debug, Clone)]
pub enum Logo {
    Present(RgbaImage),
    Absent,
}

impl Logo {
    pub fn is_present(&self) -> bool {
        matches!(self, Logo::Present(_))
    }
}

/// Everything the label compositor needs from disk, loaded once per server
/// start.
#[derive(Debug, Clone)]
pub struct LabelAssets {
    /// Bold font used for desk number, shop name, and footer. ab_glyph
    /// fonts are scale-free; a `PxScale` is derived per draw call.
    pub font: FontArc,
    pub logo: Logo,
}

impl LabelAssets {
    /// Load the font and logo from `assets_dir`.
    ///
    /// Font failures are fatal. Logo failures print a warning and yield
    /// [`Logo::Absent`].
    pub fn load(assets_dir: &Path) -> Result<Self, MesitaError> {
        let font = load_font(&assets_dir.join(FONT_FILE))?;
        let logo = load_logo(&assets_dir.join(LOGO_FILE));
        Ok(Self { font, logo })
    }
}

fn load_font(path: &Path) -> Result<FontArc, MesitaError> {
    let bytes = std::fs::read(path)
        .map_err(|e| MesitaError::Asset(format!("failed to read font {:?}: {}", path, e)))?;
    FontArc::try_from_vec(bytes)
        .map_err(|e| MesitaError::Font(format!("failed to parse font {:?}: {}", path, e)))
}

fn load_logo(path: &Path) -> Logo {
    match image::open(path) {
        Ok(img) => Logo::Present(img.to_rgba8()),
        Err(e) => {
            println!(
                "[assets] no usable logo at {:?} ({}), labels will render without one",
                path, e
            );
            Logo::Absent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn assets_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
    }

    #[test]
    fn loads_bundled_font() {
        let assets = LabelAssets::load(&assets_dir()).unwrap();
        // DejaVu Bold has a glyph for a plain digit
        use ab_glyph::Font;
        assert_ne!(assets.font.glyph_id('1').0, 0);
    }

    #[test]
    fn missing_font_is_fatal() {
        let err = LabelAssets::load(Path::new("/nonexistent")).unwrap_err();
        assert!(matches!(err, MesitaError::Asset(_)));
    }

    #[test]
    fn missing_logo_is_absent() {
        // The repo ships no logo.png, so the bundled asset dir exercises
        // the absent path.
        let assets = LabelAssets::load(&assets_dir()).unwrap();
        assert!(!assets.logo.is_present());
    }
}
