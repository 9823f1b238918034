//! Utility module with prizm's errors.

/// An erroneous color string.
///
/// The first four variants are refinements of the same failure, a string that
/// does not spell a color: either no notation's shape matches at all, or a
/// shape matches but one of its numbers doesn't scan. [`OutOfRange`] is
/// different in kind. The string was a syntactically valid color whose channel
/// value lies outside its legal domain, and this crate rejects such strings
/// rather than clamping them. A malformed color never silently becomes a
/// different valid color.
///
/// Hue is the one exception to the range rule: any finite hue is legal and is
/// normalized into `0..360` degrees.
///
/// [`OutOfRange`]: ParseError::OutOfRange
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A color string that matches no supported notation. For example,
    /// `#XYZ` has the hash but not the hex digits, and `blurple` is not in
    /// the named-color vocabulary.
    UnrecognizedSyntax,

    /// A recognized notation with a component that is not a well-formed
    /// number. For example, `rgb(12, 0..3, 4)` has a malformed second
    /// channel, and `hsl(120, 50, 50)` is missing the mandatory percent
    /// signs.
    MalformedNumber,

    /// A recognized notation with too few components. For example,
    /// `rgb(255, 0)` is missing the blue channel.
    MissingComponent,

    /// A recognized notation with too many components. For example,
    /// `oklch(0.5 0.1 120 0.9 1)` has one component too many.
    TooManyComponents,

    /// A well-formed color with a channel value outside its legal domain.
    /// For example, `rgb(300, 0, 0)` exceeds the 8-bit red channel.
    OutOfRange {
        /// The name of the offending channel.
        channel: &'static str,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ParseError::*;

        match self {
            UnrecognizedSyntax => f.write_str(
                "color should use hex, rgb(), hsl(), oklch(), hwb(), lab(), lch(), \
                 oklab(), color(), or a named-color keyword but does not",
            ),
            MalformedNumber => {
                f.write_str("color component should be a well-formed number but is not")
            }
            MissingComponent => f.write_str("color has too few components"),
            TooManyComponents => f.write_str("color has too many components"),
            OutOfRange { channel } => f.write_fmt(format_args!(
                "{} channel value is outside its legal range",
                channel
            )),
        }
    }
}

impl std::error::Error for ParseError {}

// ====================================================================================================================

/// A failed vision-deficiency simulation.
///
/// Simulation failures are recovered silently by policy: the caller
/// substitutes the original color and logs the failure. See
/// [`simulate_or_original`](crate::blindness::simulate_or_original).
#[derive(Clone, Debug)]
pub struct SimulationError {
    kind: crate::blindness::Deficiency,
}

impl SimulationError {
    /// Create a new simulation error for the given deficiency.
    pub fn new(kind: crate::blindness::Deficiency) -> Self {
        Self { kind }
    }

    /// Access the deficiency whose simulation failed.
    pub fn kind(&self) -> crate::blindness::Deficiency {
        self.kind
    }
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "simulating {} produced a non-finite channel",
            self.kind
        ))
    }
}

impl std::error::Error for SimulationError {}
