use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert sRGB coordinates to their 24-bit representation.
///
/// This function assumes in-gamut coordinates, i.e., unit range. Even if that
/// is not the case, the conversion automatically clamps each channel to
/// `0x00..=0xff`.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = clip(coordinates);
    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}

/// Clamp the coordinates into unit range.
///
/// For gamma-encoded sRGB, unit range is the gamut boundary, so this function
/// doubles as naive gamut clipping for out-of-gamut conversion results.
#[inline]
pub(crate) fn clip(coordinates: &[Float; 3]) -> [Float; 3] {
    let [c1, c2, c3] = *coordinates;
    [c1.clamp(0.0, 1.0), c2.clamp(0.0, 1.0), c3.clamp(0.0, 1.0)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing
/// a new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
pub(crate) fn srgb_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
pub(crate) fn linear_srgb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.00313098 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert coordinates for sRGB to XYZ D65. This is a two-hop conversion.
fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = srgb_to_linear_srgb(value);
    multiply(&LINEAR_SRGB_TO_XYZ, &linear_srgb)
}

/// Convert coordinates for XYZ D65 to sRGB. This is a two-hop conversion.
fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = multiply(&XYZ_TO_LINEAR_SRGB, value);
    linear_srgb_to_srgb(&linear_srgb)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/oklab.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
    [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
    [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: [[Float; 3]; 3] = [
    [  1.2268798758459243, -0.5578149944602171,  0.2813910456659647 ],
    [ -0.0405757452148008,  1.1122868032803170, -0.0717110580655164 ],
    [ -0.0763729366746601, -0.4214933324022432,  1.5869240198367816 ],
];

/// Convert coordinates for XYZ D65 to Oklab. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise exponential.
fn xyz_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

/// Convert coordinates for Oklab to XYZ D65. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise exponential.
fn oklab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_XYZ, &[l.powi(3), m.powi(3), s.powi(3)])
}

// --------------------------------------------------------------------------------------------------------------------

const ACHROMATIC_EPSILON: Float = 0.0002;

/// Convert Cartesian a/b colorness coordinates to polar chroma/hue, for Oklab
/// to Oklch as well as Lab to LCh.
///
/// The canonical color model has no not-a-number hues, so achromatic colors
/// come out with hue zero instead of CSS's "powerless" component.
fn to_polar(value: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *value;

    let a_m = a.abs();
    if a_m < ACHROMATIC_EPSILON && b.abs() < ACHROMATIC_EPSILON {
        return [l, 0.0, 0.0];
    }

    // per herbie 2.1
    let c = if a_m < b { b.hypot(a_m) } else { a_m.hypot(b) };

    let h = b.atan2(a).to_degrees();
    let h = if h.is_sign_negative() { h + 360.0 } else { h };

    [l, c, h]
}

/// Convert polar chroma/hue colorness coordinates to Cartesian a/b, for Oklch
/// to Oklab as well as LCh to Lab.
fn to_cartesian(value: &[Float; 3]) -> [Float; 3] {
    let [l, c, h] = *value;
    let hue_radian = h.to_radians();
    [l, c * hue_radian.cos(), c * hue_radian.sin()]
}

/// Convert coordinates for sRGB to Oklch. This is a multi-hop conversion
/// through XYZ D65 and Oklab.
pub(crate) fn srgb_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    let xyz = srgb_to_xyz(value);
    let oklab = xyz_to_oklab(&xyz);
    to_polar(&oklab)
}

/// Convert coordinates for Oklch to sRGB. This is a multi-hop conversion
/// through Oklab and XYZ D65. The result may be out of gamut.
pub(crate) fn oklch_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let oklab = to_cartesian(value);
    oklab_to_srgb(&oklab)
}

/// Convert coordinates for Oklab to sRGB. The result may be out of gamut.
pub(crate) fn oklab_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let xyz = oklab_to_xyz(value);
    xyz_to_srgb(&xyz)
}

// --------------------------------------------------------------------------------------------------------------------
// CIE Lab, which CSS defines against the D50 standard illuminant. Conversion
// to sRGB chromatically adapts D50 to D65 with the (linear) Bradford method.

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D50_TO_D65: [[Float; 3]; 3] = [
    [  0.955473421488075,    -0.02309845494876471,  0.06325924320057072  ],
    [ -0.0283697093338637,    1.0099953980813041,   0.021041441191917323 ],
    [  0.012314014864481998, -0.020507649298898964, 1.330365926242124    ],
];

#[allow(clippy::excessive_precision)]
const D50_WHITE: [Float; 3] = [0.9642956764295678, 1.0, 0.8251046025104604];

const LAB_EPSILON: Float = 216.0 / 24389.0;
const LAB_KAPPA: Float = 24389.0 / 27.0;

/// Convert coordinates for CIE Lab to XYZ D50. This is a one-hop, direct
/// conversion.
fn lab_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *value;

    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let xr = if fx.powi(3) > LAB_EPSILON {
        fx.powi(3)
    } else {
        (116.0 * fx - 16.0) / LAB_KAPPA
    };
    let yr = if l > LAB_KAPPA * LAB_EPSILON {
        fy.powi(3)
    } else {
        l / LAB_KAPPA
    };
    let zr = if fz.powi(3) > LAB_EPSILON {
        fz.powi(3)
    } else {
        (116.0 * fz - 16.0) / LAB_KAPPA
    };

    [xr * D50_WHITE[0], yr * D50_WHITE[1], zr * D50_WHITE[2]]
}

/// Convert coordinates for CIE Lab to sRGB. The result may be out of gamut.
pub(crate) fn lab_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let xyz_d50 = lab_to_xyz_d50(value);
    let xyz = multiply(&D50_TO_D65, &xyz_d50);
    xyz_to_srgb(&xyz)
}

/// Convert coordinates for CIE LCh to sRGB. The result may be out of gamut.
pub(crate) fn lch_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let lab = to_cartesian(value);
    lab_to_srgb(&lab)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to HSL. This is a one-hop, direct conversion.
///
/// Hue comes out in degrees `0..360`, zero for achromatic colors; saturation
/// and lightness come out in unit range.
pub(crate) fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = clip(value);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return [0.0, 0.0, lightness];
    }

    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
    let hue = if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [(hue * 60.0).rem_euclid(360.0), saturation, lightness]
}

/// Convert coordinates for HSL to sRGB. This is a one-hop, direct conversion.
///
/// Hue may have any magnitude and is reduced into `0..360`; saturation and
/// lightness must be in unit range.
pub(crate) fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    let h = h.rem_euclid(360.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - chroma / 2.0;

    let [r, g, b] = match (h / 60.0) as u32 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    };

    [r + m, g + m, b + m]
}

/// Convert coordinates for HWB to sRGB. This is a one-hop, direct conversion.
///
/// Whiteness and blackness are unit-range fractions. When their sum exceeds
/// one, the color is the gray they proportionally mix, per CSS Color 4.
pub(crate) fn hwb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, w, b] = *value;

    if w + b >= 1.0 {
        let gray = w / (w + b);
        return [gray, gray, gray];
    }

    let [r, g, bl] = hsl_to_srgb(&[h, 1.0, 0.5]);
    let scale = 1.0 - w - b;
    [
        r.mul_add(scale, w),
        g.mul_add(scale, w),
        bl.mul_add(scale, w),
    ]
}

// ====================================================================================================================
