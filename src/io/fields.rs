//! Name -> field mapping of the `l3transform.config` format.
//!
//! The names are a wire format shared with existing configuration files and
//! must not be renamed. One table drives both the reader and the writer so
//! the two can never disagree about a field.

use crate::geometry::{Geometry, INNER_ROW_COUNT, ROW_COUNT};

/// Accessors of a scalar field.
#[derive(Clone, Copy)]
pub(crate) enum Field {
    /// Non-negative integer. `expected` is the value of the reference
    /// detector; a different value is reported but still accepted.
    Count {
        get: fn(&Geometry) -> usize,
        set: fn(&mut Geometry, usize),
        expected: Option<usize>,
    },
    /// Signed integer.
    Signed {
        get: fn(&Geometry) -> i32,
        set: fn(&mut Geometry, i32),
    },
    /// Double written with `digits` fractional digits.
    Float {
        get: fn(&Geometry) -> f64,
        set: fn(&mut Geometry, f64),
        digits: usize,
    },
}

pub(crate) struct ScalarField {
    pub name: &'static str,
    pub field: Field,
}

macro_rules! count {
    ($name:literal, $member:ident) => {
        count!($name, $member, None)
    };
    ($name:literal, $member:ident, $expected:expr) => {
        ScalarField {
            name: $name,
            field: Field::Count {
                get: |g| g.$member,
                set: |g, v| g.$member = v,
                expected: $expected,
            },
        }
    };
}

macro_rules! float {
    ($name:literal, $member:ident) => {
        float!($name, $member, 20)
    };
    ($name:literal, $member:ident, $digits:expr) => {
        ScalarField {
            name: $name,
            field: Field::Float {
                get: |g| g.$member,
                set: |g, v| g.$member = v,
                digits: $digits,
            },
        }
    };
}

/// Array field holding the row radii.
pub(crate) const ROW_RADIUS_FIELD: &str = "fX";
/// Array field holding the pad counts.
pub(crate) const PADS_PER_ROW_FIELD: &str = "fNPads";

/// Scalar fields in the order the writer emits them. Fields before
/// `fNSlice` belong to the sector block, the rest to the slice block.
pub(crate) const SCALAR_FIELDS: &[ScalarField] = &[
    ScalarField {
        name: "fBFieldFactor",
        field: Field::Signed {
            get: |g| g.b_field_factor,
            set: |g, v| g.set_b_field_factor(v),
        },
    },
    count!("fNTimeBins", n_time_bins),
    count!("fNRowLow", inner_row_count, Some(INNER_ROW_COUNT)),
    count!("fNRowUp", outer_row_count),
    count!("fNRowUp1", outer_row_count1),
    count!("fNRowUp2", outer_row_count2),
    count!("fNSectorLow", inner_sector_count),
    count!("fNSectorUp", outer_sector_count),
    count!("fNSector", sector_count),
    float!("fPadPitchWidthLow", pad_pitch_inner),
    float!("fPadPitchWidthUp", pad_pitch_outer),
    float!("fZWidth", z_width),
    float!("fZSigma", z_sigma),
    float!("fZLength", z_length),
    float!("fZOffset", z_offset),
    float!("fDiffT", diffusion_t),
    float!("fDiffL", diffusion_l),
    float!("fInnerPadLength", pad_length_inner),
    float!("fOuter1PadLength", pad_length_outer1),
    float!("fOuter2PadLength", pad_length_outer2),
    float!("fInnerPRFSigma", prf_sigma_inner),
    float!("fOuter1PRFSigma", prf_sigma_outer1),
    float!("fOuter2PRFSigma", prf_sigma_outer2),
    float!("fTimeSigma", time_sigma),
    count!("fNSlice", slice_count),
    count!("fNRow", row_count, Some(ROW_COUNT)),
    float!("fNRotShift", rotation_shift),
    float!("fPi", pi, 15),
];

/// Looks up a scalar field by its configuration name.
pub(crate) fn scalar_field(name: &str) -> Option<&'static ScalarField> {
    SCALAR_FIELDS.iter().find(|f| f.name == name)
}

/// Name of entry `index` of an array field, e.g. `fX[3]`.
pub(crate) fn array_entry_name(field: &str, index: usize) -> String {
    format!("{}[{}]", field, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_field_lookup() {
        assert!(scalar_field("fNRow").is_some());
        assert!(scalar_field("fPi").is_some());
        assert!(scalar_field("fNRows").is_none());
        assert!(scalar_field("fX[0]").is_none());
    }

    #[test]
    fn test_field_names_unique() {
        for (i, a) in SCALAR_FIELDS.iter().enumerate() {
            for b in &SCALAR_FIELDS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
        assert_eq!(SCALAR_FIELDS.len(), 28);
    }

    #[test]
    fn test_setters_reach_geometry() {
        let mut g = Geometry::default();
        match scalar_field("fNSectorUp").map(|f| f.field) {
            Some(Field::Count { set, get, .. }) => {
                set(&mut g, 18);
                assert_eq!(get(&g), 18);
                assert_eq!(g.outer_sector_count, 18);
            }
            _ => panic!("fNSectorUp should be a count field"),
        }
        match scalar_field("fBFieldFactor").map(|f| f.field) {
            Some(Field::Signed { set, .. }) => {
                set(&mut g, 2);
                assert!((g.b_field - 0.4).abs() < 1e-12);
            }
            _ => panic!("fBFieldFactor should be a signed field"),
        }
    }

    #[test]
    fn test_array_entry_name() {
        assert_eq!(array_entry_name(ROW_RADIUS_FIELD, 0), "fX[0]");
        assert_eq!(array_entry_name(PADS_PER_ROW_FIELD, 158), "fNPads[158]");
    }
}
