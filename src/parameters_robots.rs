//! Hardcoded link lengths for a few arms

use crate::parameters::Parameters;

impl Parameters {
    // All presets have positive finite lengths.
    const fn preset(l1: f64, l2: f64) -> Self {
        Parameters::from_lengths_unchecked(l1, l2)
    }

    /// Reference arm used for drawing letters and circles: two links of 5 units.
    pub fn reference() -> Self {
        Self::preset(5.0, 5.0)
    }

    /// Arm with unequal links, has a dead zone of radius 2 around the base.
    pub fn unequal_5_3() -> Self {
        Self::preset(5.0, 3.0)
    }

    // Pen plotter arm of the BrachioGraph kind, two links of 8 cm.
    pub fn brachiograph() -> Self {
        Self::preset(8.0, 8.0)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in [Parameters::reference(), Parameters::unequal_5_3(), Parameters::brachiograph()] {
            let checked = Parameters::new(preset.l1(), preset.l2()).expect("preset must be valid");
            assert_eq!(checked, preset);
        }
    }

    #[test]
    fn test_default_is_reference() {
        let parameters = Parameters::default();
        assert_eq!(parameters.l1(), 5.0);
        assert_eq!(parameters.l2(), 5.0);
    }
}
