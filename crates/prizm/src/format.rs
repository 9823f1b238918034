//! Formatting colors as CSS text, CSS custom properties, and Tailwind
//! configuration snippets.

use crate::Color;

/// A CSS output notation.
///
/// [`Rgb`] and [`Hsl`] include the alpha component only for translucent
/// colors; [`Rgba`] and [`Hsla`] always do.
///
/// [`Rgb`]: ColorFormat::Rgb
/// [`Hsl`]: ColorFormat::Hsl
/// [`Rgba`]: ColorFormat::Rgba
/// [`Hsla`]: ColorFormat::Hsla
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorFormat {
    /// Lowercase hex, `#rrggbb` or `#rrggbbaa`.
    #[default]
    Hex,
    /// `rgb()` with 8-bit channels.
    Rgb,
    /// `rgba()` with 8-bit channels and a mandatory alpha.
    Rgba,
    /// `hsl()` with integral degrees and percentages.
    Hsl,
    /// `hsla()` with integral degrees and percentages and a mandatory alpha.
    Hsla,
    /// `oklch()` with lightness and chroma to three decimals and hue to one.
    Oklch,
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsla => "hsla",
            ColorFormat::Oklch => "oklch",
        })
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the color in the given notation, using the legacy comma-separated
/// component syntax for `rgb()` and `hsl()`.
pub fn format(color: &Color, target: ColorFormat) -> String {
    format_with_syntax(color, target, false)
}

/// Format the color in the given notation, with functional notations either
/// in the modern space/slash syntax or the legacy comma syntax.
fn format_with_syntax(color: &Color, target: ColorFormat, modern: bool) -> String {
    match target {
        ColorFormat::Hex => color.hex(),
        ColorFormat::Rgb => format_rgb(color, !color.is_opaque(), modern),
        ColorFormat::Rgba => format_rgb(color, true, modern),
        ColorFormat::Hsl => format_hsl(color, !color.is_opaque(), modern),
        ColorFormat::Hsla => format_hsl(color, true, modern),
        ColorFormat::Oklch => format_oklch(color),
    }
}

fn format_rgb(color: &Color, with_alpha: bool, modern: bool) -> String {
    let [r, g, b] = color.to_24bit();
    let alpha = trim_round(color.alpha(), 3);
    match (with_alpha, modern) {
        (false, false) => format!("rgb({}, {}, {})", r, g, b),
        (false, true) => format!("rgb({} {} {})", r, g, b),
        (true, false) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        (true, true) => format!("rgb({} {} {} / {})", r, g, b, alpha),
    }
}

fn format_hsl(color: &Color, with_alpha: bool, modern: bool) -> String {
    let [hue, saturation, lightness] = color.to_hsl();
    // Hues in [359.5, 360) round up to the wrap point, which prints as 0.
    let h = hue.round().rem_euclid(360.0);
    let s = (saturation * 100.0).round();
    let l = (lightness * 100.0).round();
    let alpha = trim_round(color.alpha(), 3);
    match (with_alpha, modern) {
        (false, false) => format!("hsl({}, {}%, {}%)", h, s, l),
        (false, true) => format!("hsl({} {}% {}%)", h, s, l),
        (true, false) => format!("hsla({}, {}%, {}%, {})", h, s, l, alpha),
        (true, true) => format!("hsl({} {}% {}% / {})", h, s, l, alpha),
    }
}

fn format_oklch(color: &Color) -> String {
    let [lightness, chroma, hue] = color.to_oklch();
    let body = format!(
        "oklch({} {} {})",
        trim_round(lightness, 3),
        trim_round(chroma, 3),
        trim_round(hue, 1),
    );
    if color.is_opaque() {
        body
    } else {
        let mut body = body;
        body.truncate(body.len() - 1);
        body.push_str(" / ");
        body.push_str(&trim_round(color.alpha(), 3));
        body.push(')');
        body
    }
}

/// Round to the given number of decimals and trim trailing zeros, CSS style.
fn trim_round(value: crate::Float, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Options for [`css_variables`].
#[derive(Copy, Clone, Debug, Default)]
pub struct CssVariablesOptions {
    /// The notation for the property values.
    pub format: ColorFormat,
    /// Use the modern space/slash component syntax instead of the legacy
    /// comma syntax.
    pub modern_syntax: bool,
}

/// Render the named colors as CSS custom properties in a `:root` block.
///
/// Names are sanitized into custom-property idents: lowercased, with every
/// run of non-alphanumeric characters replaced by a single dash.
pub fn css_variables(entries: &[(String, Color)], options: &CssVariablesOptions) -> String {
    let mut output = String::from(":root {\n");
    for (name, color) in entries {
        output.push_str("  --");
        output.push_str(&sanitize_name(name));
        output.push_str(": ");
        output.push_str(&format_with_syntax(color, options.format, options.modern_syntax));
        output.push_str(";\n");
    }
    output.push('}');
    output
}

/// Render the named colors as a Tailwind `module.exports` color-token block.
pub fn tailwind_config(entries: &[(String, Color)], format: ColorFormat) -> String {
    let mut output = String::from(
        "module.exports = {\n  theme: {\n    extend: {\n      colors: {\n",
    );
    for (name, color) in entries {
        output.push_str("        '");
        output.push_str(&sanitize_name(name));
        output.push_str("': '");
        output.push_str(&format_with_syntax(color, format, false));
        output.push_str("',\n");
    }
    output.push_str("      },\n    },\n  },\n};");
    output
}

fn sanitize_name(name: &str) -> String {
    let mut ident = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !ident.is_empty() {
                ident.push('-');
            }
            pending_dash = false;
            ident.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if ident.is_empty() {
        ident.push_str("color");
    }
    ident
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{css_variables, format, tailwind_config, ColorFormat, CssVariablesOptions};
    use crate::Color;

    #[test]
    fn test_format() {
        let blue = Color::srgb(0x31, 0x78, 0xea);
        assert_eq!(format(&blue, ColorFormat::Hex), "#3178ea");
        assert_eq!(format(&blue, ColorFormat::Rgb), "rgb(49, 120, 234)");
        assert_eq!(format(&blue, ColorFormat::Rgba), "rgba(49, 120, 234, 1)");
        assert_eq!(format(&blue, ColorFormat::Hsl), "hsl(217, 81%, 55%)");
        assert_eq!(format(&blue, ColorFormat::Hsla), "hsla(217, 81%, 55%, 1)");
        assert_eq!(format(&blue, ColorFormat::Oklch), "oklch(0.591 0.187 259.7)");
    }

    #[test]
    fn test_format_translucent() {
        let blue = Color::srgb(0x31, 0x78, 0xea).with_alpha(0.5);
        assert_eq!(format(&blue, ColorFormat::Hex), "#3178ea80");
        assert_eq!(format(&blue, ColorFormat::Rgb), "rgba(49, 120, 234, 0.5)");
        assert_eq!(format(&blue, ColorFormat::Hsl), "hsla(217, 81%, 55%, 0.5)");
        assert_eq!(
            format(&blue, ColorFormat::Oklch),
            "oklch(0.591 0.187 259.7 / 0.5)"
        );
    }

    #[test]
    fn test_format_hsl_hue_wrap() {
        let nearly_red = Color::from_hsl(359.7, 1.0, 0.5);
        let rendered = format(&nearly_red, ColorFormat::Hsl);
        assert_eq!(rendered, "hsl(0, 100%, 50%)");

        // Rendering is stable under a parse/format round trip.
        let reparsed: Color = rendered.parse().unwrap();
        assert_eq!(format(&reparsed, ColorFormat::Hsl), rendered);
    }

    #[test]
    fn test_css_variables() {
        let entries = vec![
            ("Primary Blue".to_string(), Color::srgb(0x31, 0x78, 0xea)),
            ("Accent!".to_string(), Color::srgb(0xff, 0xca, 0x00)),
        ];
        assert_eq!(
            css_variables(&entries, &CssVariablesOptions::default()),
            ":root {\n  --primary-blue: #3178ea;\n  --accent: #ffca00;\n}"
        );
        assert_eq!(
            css_variables(
                &entries,
                &CssVariablesOptions {
                    format: ColorFormat::Rgb,
                    modern_syntax: true,
                }
            ),
            ":root {\n  --primary-blue: rgb(49 120 234);\n  --accent: rgb(255 202 0);\n}"
        );
    }

    #[test]
    fn test_tailwind_config() {
        let entries = vec![("Primary".to_string(), Color::srgb(0x31, 0x78, 0xea))];
        assert_eq!(
            tailwind_config(&entries, ColorFormat::Hex),
            "module.exports = {\n  theme: {\n    extend: {\n      colors: {\n        \
             'primary': '#3178ea',\n      },\n    },\n  },\n};"
        );
    }
}
