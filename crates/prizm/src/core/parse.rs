//! Parsing of CSS color notations.
//!
//! This module recognizes the hex, `rgb()`, `hsl()`, `hwb()`, `oklch()`,
//! `oklab()`, `lab()`, `lch()`, and `color(srgb …)` notations as well as a
//! fixed vocabulary of named colors. Functional notations accept both the
//! legacy comma-separated and the modern space-separated component syntax,
//! with the alpha channel after a comma or slash respectively. All notations
//! parse into canonical sRGB coordinates plus alpha.

use super::conversion::{
    clip, from_24bit, hsl_to_srgb, hwb_to_srgb, lab_to_srgb, lch_to_srgb, oklab_to_srgb,
    oklch_to_srgb,
};
use super::named::named_color;
use crate::error::ParseError;
use crate::Float;

/// Parse a color string into sRGB coordinates and an alpha value.
///
/// Leading and trailing whitespace is ignored and matching is
/// case-insensitive. Out-of-range channel values are errors, not clamped,
/// with the exception of hue, which is normalized into `0..360` degrees.
/// Coordinates converted from another color space are clipped into the sRGB
/// gamut.
pub(crate) fn parse(s: &str) -> Result<([Float; 3], Float), ParseError> {
    let s = s.trim().to_ascii_lowercase();

    if let Some(digits) = s.strip_prefix('#') {
        return parse_hex(digits);
    }

    if let Some(body) = s.strip_suffix(')') {
        if let Some((name, args)) = body.split_once('(') {
            return parse_function(name.trim(), args);
        }
    }

    named_color(&s)
        .map(|[r, g, b]| (from_24bit(r, g, b), 1.0))
        .ok_or(ParseError::UnrecognizedSyntax)
}

fn parse_function(name: &str, args: &str) -> Result<([Float; 3], Float), ParseError> {
    match name {
        "rgb" | "rgba" => parse_rgb(args),
        "hsl" | "hsla" => parse_hsl(args),
        "hwb" => parse_hwb(args),
        "oklch" => parse_oklch(args),
        "oklab" => parse_oklab(args),
        "lab" => parse_lab(args),
        "lch" => parse_lch(args),
        "color" => parse_color_function(args),
        _ => Err(ParseError::UnrecognizedSyntax),
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn parse_hex(digits: &str) -> Result<([Float; 3], Float), ParseError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::UnrecognizedSyntax);
    }

    // Safe to index byte-wise since every byte is an ASCII hex digit.
    let nibble = |index: usize| u8::from_str_radix(&digits[index..=index], 16).unwrap_or(0);
    let byte = |index: usize| u8::from_str_radix(&digits[index..index + 2], 16).unwrap_or(0);

    let (bytes, alpha) = match digits.len() {
        3 => ([nibble(0) * 17, nibble(1) * 17, nibble(2) * 17], 255),
        4 => (
            [nibble(0) * 17, nibble(1) * 17, nibble(2) * 17],
            nibble(3) * 17,
        ),
        6 => ([byte(0), byte(2), byte(4)], 255),
        8 => ([byte(0), byte(2), byte(4)], byte(6)),
        _ => return Err(ParseError::UnrecognizedSyntax),
    };

    Ok((
        from_24bit(bytes[0], bytes[1], bytes[2]),
        Float::from(alpha) / 255.0,
    ))
}

// --------------------------------------------------------------------------------------------------------------------

/// Split a functional notation's arguments into channel texts and an optional
/// alpha text. A comma anywhere selects the legacy syntax, where the fourth
/// component is the alpha; otherwise components are whitespace-separated with
/// the alpha after a slash.
fn split_components(args: &str) -> Result<(Vec<&str>, Option<&str>), ParseError> {
    if args.contains(',') {
        let mut parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let alpha = if parts.len() >= 4 { parts.pop() } else { None };
        return Ok((parts, alpha));
    }

    let (channels, alpha) = match args.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (args, None),
    };

    Ok((channels.split_whitespace().collect(), alpha))
}

fn check_arity(parts: &[&str]) -> Result<(), ParseError> {
    match parts.len() {
        0..=2 => Err(ParseError::MissingComponent),
        3 => Ok(()),
        _ => Err(ParseError::TooManyComponents),
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn parse_number(text: &str) -> Result<Float, ParseError> {
    let value: Float = text.parse().map_err(|_| ParseError::MalformedNumber)?;
    // Rust's float parser accepts "nan" and "inf"; CSS numbers do not.
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::MalformedNumber)
    }
}

fn in_range(value: Float, min: Float, max: Float, channel: &'static str) -> Result<Float, ParseError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ParseError::OutOfRange { channel })
    }
}

fn non_negative(value: Float, channel: &'static str) -> Result<Float, ParseError> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ParseError::OutOfRange { channel })
    }
}

/// Parse a mandatory percentage into the unit range.
fn parse_percent(text: &str, channel: &'static str) -> Result<Float, ParseError> {
    let text = text.strip_suffix('%').ok_or(ParseError::MalformedNumber)?;
    in_range(parse_number(text)? / 100.0, 0.0, 1.0, channel)
}

/// Parse a hue in degrees, gradians, radians, or turns, normalized into
/// `0..360` degrees. A bare number is taken as degrees.
fn parse_hue(text: &str) -> Result<Float, ParseError> {
    let degrees = if let Some(text) = text.strip_suffix("grad") {
        parse_number(text)? * 0.9
    } else if let Some(text) = text.strip_suffix("rad") {
        parse_number(text)?.to_degrees()
    } else if let Some(text) = text.strip_suffix("deg") {
        parse_number(text)?
    } else if let Some(text) = text.strip_suffix("turn") {
        parse_number(text)? * 360.0
    } else {
        parse_number(text)?
    };

    Ok(degrees.rem_euclid(360.0))
}

/// Parse the optional alpha component, a number or percentage in unit range.
fn parse_alpha(text: Option<&str>) -> Result<Float, ParseError> {
    match text {
        None => Ok(1.0),
        Some(text) if text.ends_with('%') => parse_percent(text, "alpha"),
        Some(text) => in_range(parse_number(text)?, 0.0, 1.0, "alpha"),
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn parse_rgb(args: &str) -> Result<([Float; 3], Float), ParseError> {
    let (parts, alpha) = split_components(args)?;
    check_arity(&parts)?;

    let mut coordinates = [0.0; 3];
    for (index, channel) in ["red", "green", "blue"].into_iter().enumerate() {
        let text = parts[index];
        coordinates[index] = if text.ends_with('%') {
            parse_percent(text, channel)?
        } else {
            in_range(parse_number(text)?, 0.0, 255.0, channel)? / 255.0
        };
    }

    Ok((coordinates, parse_alpha(alpha)?))
}

fn parse_hsl(args: &str) -> Result<([Float; 3], Float), ParseError> {
    let (parts, alpha) = split_components(args)?;
    check_arity(&parts)?;

    let hsl = [
        parse_hue(parts[0])?,
        parse_percent(parts[1], "saturation")?,
        parse_percent(parts[2], "lightness")?,
    ];

    Ok((hsl_to_srgb(&hsl), parse_alpha(alpha)?))
}

fn parse_hwb(args: &str) -> Result<([Float; 3], Float), ParseError> {
    let (parts, alpha) = split_components(args)?;
    check_arity(&parts)?;

    let hwb = [
        parse_hue(parts[0])?,
        parse_percent(parts[1], "whiteness")?,
        parse_percent(parts[2], "blackness")?,
    ];

    Ok((hwb_to_srgb(&hwb), parse_alpha(alpha)?))
}

fn parse_oklch(args: &str) -> Result<([Float; 3], Float), ParseError> {
    let (parts, alpha) = split_components(args)?;
    check_arity(&parts)?;

    let oklch = [
        if parts[0].ends_with('%') {
            parse_percent(parts[0], "lightness")?
        } else {
            in_range(parse_number(parts[0])?, 0.0, 1.0, "lightness")?
        },
        // For chroma, 100% corresponds to 0.4.
        if parts[1].ends_with('%') {
            parse_percent(parts[1], "chroma")? * 0.4
        } else {
            non_negative(parse_number(parts[1])?, "chroma")?
        },
        parse_hue(parts[2])?,
    ];

    Ok((clip(&oklch_to_srgb(&oklch)), parse_alpha(alpha)?))
}

fn parse_oklab(args: &str) -> Result<([Float; 3], Float), ParseError> {
    let (parts, alpha) = split_components(args)?;
    check_arity(&parts)?;

    let oklab = [
        if parts[0].ends_with('%') {
            parse_percent(parts[0], "lightness")?
        } else {
            in_range(parse_number(parts[0])?, 0.0, 1.0, "lightness")?
        },
        // For a and b, 100% corresponds to 0.4.
        parse_signed_axis(parts[1], 0.4)?,
        parse_signed_axis(parts[2], 0.4)?,
    ];

    Ok((clip(&oklab_to_srgb(&oklab)), parse_alpha(alpha)?))
}

fn parse_lab(args: &str) -> Result<([Float; 3], Float), ParseError> {
    let (parts, alpha) = split_components(args)?;
    check_arity(&parts)?;

    let lab = [
        if parts[0].ends_with('%') {
            parse_percent(parts[0], "lightness")? * 100.0
        } else {
            in_range(parse_number(parts[0])?, 0.0, 100.0, "lightness")?
        },
        // For a and b, 100% corresponds to 125.
        parse_signed_axis(parts[1], 125.0)?,
        parse_signed_axis(parts[2], 125.0)?,
    ];

    Ok((clip(&lab_to_srgb(&lab)), parse_alpha(alpha)?))
}

fn parse_lch(args: &str) -> Result<([Float; 3], Float), ParseError> {
    let (parts, alpha) = split_components(args)?;
    check_arity(&parts)?;

    let lch = [
        if parts[0].ends_with('%') {
            parse_percent(parts[0], "lightness")? * 100.0
        } else {
            in_range(parse_number(parts[0])?, 0.0, 100.0, "lightness")?
        },
        // For chroma, 100% corresponds to 150.
        if parts[1].ends_with('%') {
            parse_percent(parts[1], "chroma")? * 150.0
        } else {
            non_negative(parse_number(parts[1])?, "chroma")?
        },
        parse_hue(parts[2])?,
    ];

    Ok((clip(&lch_to_srgb(&lch)), parse_alpha(alpha)?))
}

/// Parse an a or b axis value, a signed number or a percentage of the given
/// reference magnitude.
fn parse_signed_axis(text: &str, reference: Float) -> Result<Float, ParseError> {
    if let Some(text) = text.strip_suffix('%') {
        let value = parse_number(text)?;
        in_range(value, -100.0, 100.0, "axis").map(|value| value / 100.0 * reference)
    } else {
        parse_number(text)
    }
}

fn parse_color_function(args: &str) -> Result<([Float; 3], Float), ParseError> {
    let (mut parts, alpha) = split_components(args)?;
    if parts.first() != Some(&"srgb") {
        return Err(ParseError::UnrecognizedSyntax);
    }
    parts.remove(0);
    check_arity(&parts)?;

    let mut coordinates = [0.0; 3];
    for (index, channel) in ["red", "green", "blue"].into_iter().enumerate() {
        let text = parts[index];
        coordinates[index] = if text.ends_with('%') {
            parse_percent(text, channel)?
        } else {
            in_range(parse_number(text)?, 0.0, 1.0, channel)?
        };
    }

    Ok((coordinates, parse_alpha(alpha)?))
}

// ====================================================================================================================
