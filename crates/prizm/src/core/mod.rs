mod conversion;
mod equality;
mod named;
mod parse;

// conversion
pub(crate) use conversion::{
    clip, from_24bit, hsl_to_srgb, linear_srgb_to_srgb, oklch_to_srgb, srgb_to_hsl,
    srgb_to_linear_srgb, srgb_to_oklch, to_24bit,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_channels;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_channels;

// parse
pub(crate) use parse::parse;
