//! Generation of harmonious color collections.
//!
//! All harmonies are computed in HSL space from the base color's hue,
//! saturation, and lightness. Hue arithmetic wraps into `0..360` degrees and
//! lightness arithmetic clamps into unit range, so generation never fails for
//! a valid color. Output ordering and length are deterministic and part of
//! each harmony's contract.

use crate::{Color, Float};

/// A multi-color palette shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Five hues fanned out ±30° around the base.
    Analogous,
    /// Five lightness levels of the base hue, light to dark.
    Monochromatic,
    /// Base and complement, each with a lighter and a darker variant.
    Complementary,
    /// The three triadic hues, each with a lightened variant.
    Triadic,
}

/// A compact color-scheme shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SchemeType {
    /// The base and its 180° complement.
    Complementary,
    /// The base and the two hues 120° and 240° away.
    Triadic,
    /// The base flanked by the hues 30° to either side.
    Analogous,
}

/// A harmony to generate from a base color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Harmony {
    /// A five-or-six color palette.
    Palette(PaletteType),
    /// A two-or-three color scheme.
    Scheme(SchemeType),
    /// A ten-step lightness swatch of the base hue.
    Swatch,
}

// --------------------------------------------------------------------------------------------------------------------

const SWATCH_STEPS: usize = 10;

/// Generate the colors of the given harmony from the base color.
///
/// The base color itself always appears in the output, unmodified.
pub fn generate(base: &Color, harmony: Harmony) -> Vec<Color> {
    let [hue, saturation, lightness] = base.to_hsl();

    let rotate = |delta: Float| Color::from_hsl(hue + delta, saturation, lightness);
    let relit = |delta: Float| Color::from_hsl(hue, saturation, lightness + delta);
    let level = |value: Float| Color::from_hsl(hue, saturation, value);

    match harmony {
        Harmony::Scheme(SchemeType::Complementary) => vec![*base, rotate(180.0)],
        Harmony::Scheme(SchemeType::Triadic) => vec![*base, rotate(120.0), rotate(240.0)],
        Harmony::Scheme(SchemeType::Analogous) => vec![rotate(-30.0), *base, rotate(30.0)],
        Harmony::Palette(PaletteType::Analogous) => vec![
            rotate(-30.0),
            rotate(-15.0),
            *base,
            rotate(15.0),
            rotate(30.0),
        ],
        Harmony::Palette(PaletteType::Monochromatic) => {
            vec![level(0.8), level(0.65), *base, level(0.35), level(0.2)]
        }
        Harmony::Palette(PaletteType::Complementary) => {
            let complement = rotate(180.0);
            let [hue2, saturation2, lightness2] = complement.to_hsl();
            let relit2 =
                |delta: Float| Color::from_hsl(hue2, saturation2, lightness2 + delta);
            vec![
                *base,
                relit(0.2),
                relit(-0.2),
                complement,
                relit2(0.2),
                relit2(-0.2),
            ]
        }
        Harmony::Palette(PaletteType::Triadic) => {
            let lighten = |delta: Float, variant: Float| {
                Color::from_hsl(hue + delta, saturation, lightness + variant)
            };
            vec![
                *base,
                rotate(120.0),
                rotate(240.0),
                lighten(0.0, 0.15),
                lighten(120.0, 0.15),
                lighten(240.0, 0.15),
            ]
        }
        Harmony::Swatch => {
            // Ten evenly spaced lightness levels from 0.95 down to 0.05, with
            // the level nearest the base's lightness replaced by the base.
            let mut nearest = 0;
            let mut distance = Float::INFINITY;
            let levels: Vec<Float> = (0..SWATCH_STEPS)
                .map(|step| 0.95 - 0.1 * step as Float)
                .collect();
            for (index, value) in levels.iter().enumerate() {
                let d = (value - lightness).abs();
                if d < distance {
                    nearest = index;
                    distance = d;
                }
            }
            levels
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    if index == nearest {
                        *base
                    } else {
                        level(*value)
                    }
                })
                .collect()
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{generate, Harmony, PaletteType, SchemeType};
    use crate::Color;

    const ALL: [Harmony; 8] = [
        Harmony::Scheme(SchemeType::Complementary),
        Harmony::Scheme(SchemeType::Triadic),
        Harmony::Scheme(SchemeType::Analogous),
        Harmony::Palette(PaletteType::Analogous),
        Harmony::Palette(PaletteType::Monochromatic),
        Harmony::Palette(PaletteType::Complementary),
        Harmony::Palette(PaletteType::Triadic),
        Harmony::Swatch,
    ];

    #[test]
    fn test_lengths() {
        let base = Color::srgb(0x34, 0x98, 0xdb);
        let expected = [2, 3, 3, 5, 5, 6, 6, 10];
        for (harmony, length) in ALL.into_iter().zip(expected) {
            assert_eq!(generate(&base, harmony).len(), length, "{:?}", harmony);
        }
    }

    #[test]
    fn test_base_preserved() {
        let base = Color::srgb(0x34, 0x98, 0xdb);
        for harmony in ALL {
            assert!(
                generate(&base, harmony).contains(&base),
                "{:?} lost the base",
                harmony
            );
        }
    }

    #[test]
    fn test_determinism() {
        let base = Color::srgb(0xff, 0xca, 0x00);
        for harmony in ALL {
            assert_eq!(generate(&base, harmony), generate(&base, harmony));
        }
    }

    #[test]
    fn test_triadic_scheme() {
        let base = Color::srgb(0x34, 0x98, 0xdb);
        let hexes: Vec<String> = generate(&base, Harmony::Scheme(SchemeType::Triadic))
            .iter()
            .map(Color::hex)
            .collect();
        assert_eq!(hexes, ["#3498db", "#db3498", "#98db34"]);
    }

    #[test]
    fn test_hue_wraps() {
        let base = Color::from_hsl(350.0, 1.0, 0.5);
        let colors = generate(&base, Harmony::Scheme(SchemeType::Analogous));
        let [hue, _, _] = colors[2].to_hsl();
        assert!((hue - 20.0).abs() < 1e-9, "hue {} should wrap to 20", hue);
    }

    #[test]
    fn test_lightness_clamps() {
        let base = Color::from_hsl(200.0, 0.5, 0.95);
        let colors = generate(&base, Harmony::Palette(PaletteType::Complementary));
        let [_, _, lightness] = colors[1].to_hsl();
        assert!(lightness <= 1.0);
    }

    #[test]
    fn test_swatch_descends() {
        let base = Color::srgb(0x34, 0x98, 0xdb);
        let colors = generate(&base, Harmony::Swatch);
        for pair in colors.windows(2) {
            let [_, _, first] = pair[0].to_hsl();
            let [_, _, second] = pair[1].to_hsl();
            assert!(first > second, "lightness should strictly descend");
        }
    }
}
