pub mod glyphs;

pub use glyphs::Glyphs;

use memgraph_config::{ChartConfig, GlyphStyle};

/// Compiled chart theme derived from [`ChartConfig`].
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub glyphs: Glyphs,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[chart]` section.
    pub fn from_config(cfg: &ChartConfig) -> Self {
        let glyphs = match cfg.style {
            GlyphStyle::Unicode => Glyphs::UNICODE,
            GlyphStyle::Ascii   => Glyphs::ASCII,
        };
        Self { glyphs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_style_uses_seven_bit_glyphs() {
        let theme = Theme::from_config(&ChartConfig { style: GlyphStyle::Ascii });
        let g = theme.glyphs;
        for ch in [g.grid, g.flat, g.vertical, g.fall_top, g.fall_bottom, g.rise_top, g.rise_bottom] {
            assert!(ch.is_ascii(), "{ch:?} is not ascii");
        }
    }

    #[test]
    fn default_theme_is_unicode() {
        assert_eq!(Theme::default().glyphs, Glyphs::UNICODE);
        assert_eq!(Theme::from_config(&ChartConfig::default()).glyphs.grid, '·');
    }
}
