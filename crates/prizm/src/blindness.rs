//! Simulation of color-vision deficiencies.
//!
//! The matrix simulator applies the physiologically derived transforms from
//! [Machado, Oliveira, and Fernandes 2009](https://www.inf.ufrgs.br/~oliveira/pubs_files/CVD_Simulation/CVD_Simulation.html)
//! for the three dichromacies at full severity. Achromatopsia reduces to the
//! Rec. 709 luma weights. All transforms operate on linear RGB, with the
//! result clamped back into gamut.

use crate::core::{linear_srgb_to_srgb, srgb_to_linear_srgb};
use crate::error::SimulationError;
use crate::{Color, Float};

/// A color-vision deficiency.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// Missing long-wavelength (red) cones.
    Protanopia,
    /// Missing medium-wavelength (green) cones.
    Deuteranopia,
    /// Missing short-wavelength (blue) cones.
    Tritanopia,
    /// Complete absence of color vision.
    Achromatopsia,
}

impl std::fmt::Display for Deficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
            Deficiency::Achromatopsia => "achromatopsia",
        })
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A vision-deficiency simulator.
///
/// The trait is the narrow interface the rest of the system consumes, so
/// alternative models can be swapped in without touching callers.
pub trait Simulator {
    /// Simulate how a viewer with the given deficiency perceives the color.
    fn simulate(&self, color: &Color, kind: Deficiency) -> Result<Color, SimulationError>;
}

/// Simulate the color, falling back to the original on failure.
///
/// `None` is the normal-vision passthrough. A failed simulation is logged
/// and the original color substituted; the failure never propagates.
pub fn simulate_or_original<S: Simulator>(
    simulator: &S,
    color: &Color,
    kind: Option<Deficiency>,
) -> Color {
    let Some(kind) = kind else {
        return *color;
    };

    match simulator.simulate(color, kind) {
        Ok(simulated) => simulated,
        Err(error) => {
            log::warn!("substituting original color for failed simulation: {}", error);
            *color
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

// Machado et al. 2009, severity 1.0.
#[rustfmt::skip]
const PROTANOPIA: [[Float; 3]; 3] = [
    [ 0.152286,  1.052583, -0.204868],
    [ 0.114503,  0.786281,  0.099216],
    [-0.003882, -0.048116,  1.051998],
];

#[rustfmt::skip]
const DEUTERANOPIA: [[Float; 3]; 3] = [
    [ 0.367322,  0.860646, -0.227968],
    [ 0.280085,  0.672501,  0.047413],
    [-0.011820,  0.042940,  0.968881],
];

#[rustfmt::skip]
const TRITANOPIA: [[Float; 3]; 3] = [
    [ 1.255528, -0.076749, -0.178779],
    [-0.078411,  0.930809,  0.147602],
    [ 0.004733,  0.691367,  0.303900],
];

const LUMINANCE: [Float; 3] = [0.2126, 0.7152, 0.0722];

/// The default simulator, applying fixed transform matrices in linear RGB.
#[derive(Copy, Clone, Debug, Default)]
pub struct MatrixSimulator;

impl Simulator for MatrixSimulator {
    fn simulate(&self, color: &Color, kind: Deficiency) -> Result<Color, SimulationError> {
        let linear = srgb_to_linear_srgb(color.as_ref());

        let simulated = match kind {
            Deficiency::Protanopia => apply(&PROTANOPIA, &linear),
            Deficiency::Deuteranopia => apply(&DEUTERANOPIA, &linear),
            Deficiency::Tritanopia => apply(&TRITANOPIA, &linear),
            Deficiency::Achromatopsia => {
                let luma = LUMINANCE[2].mul_add(
                    linear[2],
                    LUMINANCE[0].mul_add(linear[0], LUMINANCE[1] * linear[1]),
                );
                [luma, luma, luma]
            }
        };

        if simulated.iter().any(|channel| !channel.is_finite()) {
            return Err(SimulationError::new(kind));
        }

        let clamped = simulated.map(|channel| channel.clamp(0.0, 1.0));
        Ok(Color::new(linear_srgb_to_srgb(&clamped)).with_alpha(color.alpha()))
    }
}

fn apply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    matrix.map(|row| {
        row[2].mul_add(vector[2], row[0].mul_add(vector[0], row[1] * vector[1]))
    })
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{simulate_or_original, Deficiency, MatrixSimulator, Simulator};
    use crate::error::SimulationError;
    use crate::Color;

    const KINDS: [Deficiency; 4] = [
        Deficiency::Protanopia,
        Deficiency::Deuteranopia,
        Deficiency::Tritanopia,
        Deficiency::Achromatopsia,
    ];

    #[test]
    fn test_achromatopsia_is_gray() {
        let simulated = MatrixSimulator
            .simulate(&Color::srgb(0x31, 0x78, 0xea), Deficiency::Achromatopsia)
            .unwrap();
        let [r, g, b] = *simulated.as_ref();
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_neutrals_are_stable() {
        // The dichromacy matrices have rows summing to ~1, so white and black
        // map onto themselves modulo 8-bit rounding.
        for neutral in [Color::srgb(0, 0, 0), Color::srgb(255, 255, 255)] {
            for kind in KINDS {
                let simulated = MatrixSimulator.simulate(&neutral, kind).unwrap();
                assert_eq!(simulated.to_24bit(), neutral.to_24bit(), "{}", kind);
            }
        }
    }

    #[test]
    fn test_protanopia_dims_red() {
        let simulated = MatrixSimulator
            .simulate(&Color::srgb(255, 0, 0), Deficiency::Protanopia)
            .unwrap();
        let [r, g, b] = simulated.to_24bit();
        // Pure red loses most of its red-green contrast.
        assert!(r < 160, "red channel {} should dim", r);
        assert!(g > 60, "green channel {} should rise", g);
        assert!(b < 60, "blue channel {} stays low", b);
    }

    #[test]
    fn test_determinism() {
        let color = Color::srgb(0x34, 0x98, 0xdb);
        for kind in KINDS {
            assert_eq!(
                MatrixSimulator.simulate(&color, kind).unwrap(),
                MatrixSimulator.simulate(&color, kind).unwrap(),
            );
        }
    }

    #[test]
    fn test_alpha_preserved() {
        let color = Color::srgb(0x34, 0x98, 0xdb).with_alpha(0.25);
        for kind in KINDS {
            let simulated = MatrixSimulator.simulate(&color, kind).unwrap();
            assert_eq!(simulated.alpha(), 0.25);
        }
    }

    #[test]
    fn test_passthrough_and_fallback() {
        struct Failing;

        impl Simulator for Failing {
            fn simulate(
                &self,
                _: &Color,
                kind: Deficiency,
            ) -> Result<Color, SimulationError> {
                Err(SimulationError::new(kind))
            }
        }

        let color = Color::srgb(0x34, 0x98, 0xdb);
        assert_eq!(simulate_or_original(&MatrixSimulator, &color, None), color);
        assert_eq!(
            simulate_or_original(&Failing, &color, Some(Deficiency::Protanopia)),
            color
        );
    }
}
