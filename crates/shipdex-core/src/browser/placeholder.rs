//! Baked-in fallback art for ships without a resolved image.

use crate::artifact::ImageMapping;
use anyhow::{Context, Result};
use std::path::Path;

/// Image to show for one ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipImage {
    Remote(String),
    /// Generated art tinted with `hue` (degrees, 0..360).
    Placeholder { hue: u32 },
}

impl ShipImage {
    /// Resolved URL from the mapping, else a placeholder derived from the name.
    pub fn for_ship(mapping: &ImageMapping, name: &str) -> Self {
        match mapping.image_for(name) {
            Some(url) => ShipImage::Remote(url.to_string()),
            None => ShipImage::Placeholder {
                hue: placeholder_hue(name),
            },
        }
    }
}

/// 31-multiplier string hash over UTF-16 code units with i32 wrap-around,
/// so a name always gets the same tint.
fn hash_name(value: &str) -> u32 {
    value
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

pub fn placeholder_hue(name: &str) -> u32 {
    let name = if name.is_empty() { "ship" } else { name };
    hash_name(name) % 360
}

/// Standalone SVG for the placeholder of `name`.
pub fn placeholder_svg(name: &str) -> String {
    let hue = placeholder_hue(name);
    let accent = format!("hsl({hue}, 70%, 65%)");
    let accent_dark = format!("hsl({}, 50%, 30%)", (hue + 24) % 360);
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 640 360">
  <defs>
    <linearGradient id="g" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="{accent_dark}"/>
      <stop offset="100%" stop-color="#0b0c12"/>
    </linearGradient>
    <radialGradient id="glow" cx="0.2" cy="0.1" r="0.8">
      <stop offset="0%" stop-color="{accent}" stop-opacity="0.7"/>
      <stop offset="100%" stop-color="{accent}" stop-opacity="0"/>
    </radialGradient>
  </defs>
  <rect width="640" height="360" rx="24" fill="url(#g)"/>
  <rect width="640" height="360" rx="24" fill="url(#glow)"/>
  <g transform="translate(100 120)" fill="#e6e7f0">
    <path d="M60 30c40-30 160-40 260-10 30 9 60 27 80 46 12 12 20 30 20 44 0 18-10 36-26 46-36 22-96 30-178 22-70-7-134-28-170-48-24-14-34-32-34-47 0-19 16-39 48-53z" opacity="0.92"/>
    <path d="M120 70h100c20 0 40 8 52 18l24 18-32 16H140l-24-14c-8-5-12-12-12-18 0-11 8-20 16-20z" fill="#cfd3e6"/>
    <circle cx="300" cy="96" r="18" fill="{accent}"/>
    <rect x="40" y="96" width="60" height="18" rx="9" fill="{accent}"/>
  </g>
</svg>
"##
    )
}

/// Writes [`placeholder_svg`] for `name` to `path`.
pub fn write_placeholder_svg(path: &Path, name: &str) -> Result<()> {
    std::fs::write(path, placeholder_svg(name))
        .with_context(|| format!("write placeholder: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_known_values() {
        assert_eq!(hash_name(""), 0);
        assert_eq!(hash_name("a"), 97);
        assert_eq!(hash_name("ab"), 97 * 31 + 98);
    }

    #[test]
    fn hue_is_deterministic_and_in_range() {
        for name in ["X-wing", "Death Star", "Millennium Falcon", "", "Ünïcödé"] {
            let h = placeholder_hue(name);
            assert_eq!(h, placeholder_hue(name));
            assert!(h < 360);
        }
        assert_eq!(placeholder_hue(""), placeholder_hue("ship"));
    }

    #[test]
    fn long_names_wrap_without_panicking() {
        let long = "Imperial Super Star Destroyer ".repeat(50);
        assert!(placeholder_hue(&long) < 360);
    }

    #[test]
    fn mapping_hit_is_remote_and_miss_is_placeholder() {
        let mut mapping = ImageMapping::new();
        mapping.insert("X-wing", "https://img/x.png");
        mapping.insert("Y-wing", "");
        assert_eq!(
            ShipImage::for_ship(&mapping, "X-wing"),
            ShipImage::Remote("https://img/x.png".to_string())
        );
        assert_eq!(
            ShipImage::for_ship(&mapping, "Y-wing"),
            ShipImage::Placeholder {
                hue: placeholder_hue("Y-wing")
            }
        );
        assert!(matches!(
            ShipImage::for_ship(&ImageMapping::new(), "X-wing"),
            ShipImage::Placeholder { .. }
        ));
    }

    #[test]
    fn svg_uses_hue() {
        let svg = placeholder_svg("X-wing");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(&format!("hsl({}, 70%, 65%)", placeholder_hue("X-wing"))));
    }

    #[test]
    fn writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("y-wing.svg");
        write_placeholder_svg(&path, "Y-wing").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), placeholder_svg("Y-wing"));
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("ship.svg");
        assert!(write_placeholder_svg(&path, "Y-wing").is_err());
    }
}
