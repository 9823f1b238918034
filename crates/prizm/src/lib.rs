//! # Prizm
//!
//! Prizm is a color engine for web tooling. It parses every CSS color
//! notation worth supporting, renders colors back out in any of them, derives
//! palettes, schemes, and swatches from a base color, simulates color-vision
//! deficiencies, and mines arbitrary HTML/CSS text for the colors it uses.
//!
//! Prizm's main abstractions are:
//!
//!   * [`Color`] is the canonical, immutable color value: gamma-encoded sRGB
//!     coordinates plus alpha. Every supported notation parses into it via
//!     [`Color as FromStr`](struct.Color.html#impl-FromStr-for-Color), and
//!     every conversion passes through it.
//!   * The [`format`] module renders colors as strings, individually with
//!     [`format()`](format::format) and in bulk as CSS custom-property or
//!     Tailwind configuration blocks.
//!   * The [`harmony`] module derives related colors from a base color using
//!     hue rotation and lightness stepping in HSL space.
//!   * The [`blindness`] module maps colors through fixed vision-deficiency
//!     transforms behind the narrow [`Simulator`](blindness::Simulator)
//!     interface.
//!   * The [`extract`] module scans raw HTML/CSS text for color literals,
//!     validates them with the parser, and ranks them by occurrence.
//!   * The [`store`] module defines the [`PaletteStore`](store::PaletteStore)
//!     interface through which a UI owns its working color list; the engine
//!     itself never holds UI state.
//!
//! All of the above are pure, synchronous, CPU-only operations. [`Color`]
//! values are immutable and freely copyable, so every function in this crate
//! is safe to call from any thread without synchronization. Network fetching
//! lives in the sibling `prizm-web` crate.

/// The floating point type in use.
pub type Float = f64;

/// [`Float`]'s bits.
pub type Bits = u64;

mod core;
mod object;

pub mod blindness;
pub mod error;
pub mod extract;
pub mod format;
pub mod harmony;
pub mod store;

#[doc(hidden)]
pub use crate::core::to_eq_bits;

pub use object::Color;
