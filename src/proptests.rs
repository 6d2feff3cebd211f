//! Property tests over randomly generated parameter records.
//!
//! Polynomials are unrestricted. An even one can leave the seed without a
//! non-direct form, in which case the augmented strategies must refuse to
//! run rather than return a different checksum.

use proptest::prelude::*;

use crate::diag;
use crate::error::CrcError;
use crate::generic::{Algorithm, CrcModel, Family};
use crate::params::{mask, CrcParams};
use crate::reflect::reflect;

fn params_with_width(widths: impl Strategy<Value = u8>) -> impl Strategy<Value = CrcParams> {
    (
        widths,
        any::<u64>(),
        any::<u64>(),
        any::<u64>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(width, poly, init, xorout, refin, refout, swap_suffix)| {
            let crc_mask = mask(width);
            CrcParams {
                name: "random",
                width,
                refin,
                refout,
                poly: poly & crc_mask,
                init: init & crc_mask,
                xorout: xorout & crc_mask,
                check: 0,
                swap_suffix,
            }
        })
}

fn any_params() -> impl Strategy<Value = CrcParams> {
    params_with_width(1u8..=64)
}

fn aligned_params() -> impl Strategy<Value = CrcParams> {
    params_with_width((1u8..=8).prop_map(|bytes| bytes * 8))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn strategies_agree(
        params in any_params(),
        data in proptest::collection::vec(any::<u8>(), 0..=512)
    ) {
        let model = CrcModel::new(params).unwrap();
        let fast = model.checksum_with(Algorithm::NaiveFast, &data).unwrap();
        prop_assert_eq!(fast & !mask(params.width), 0);
        if model.init_nodirect().is_some() {
            let report = diag::debug(&model, &data).unwrap();
            prop_assert!(report.agree());
            prop_assert_eq!(report.value(), Some(model.checksum(&data)));
        } else {
            prop_assert_eq!(params.poly & 1, 0);
            prop_assert!(matches!(
                diag::debug(&model, &data),
                Err(CrcError::NoNondirectSeed { .. })
            ), "expected NoNondirectSeed error");
            prop_assert_eq!(model.checksum(&data), fast);
        }
    }

    #[test]
    fn families_agree(
        params in any_params(),
        data in proptest::collection::vec(any::<u8>(), 0..=256)
    ) {
        let fast = CrcModel::new(params).unwrap();
        match CrcModel::new(params).unwrap().with_family(Family::Augmented) {
            Ok(augmented) => prop_assert_eq!(fast.checksum(&data), augmented.checksum(&data)),
            Err(err) => {
                prop_assert!(fast.init_nodirect().is_none());
                prop_assert!(matches!(err, CrcError::NoNondirectSeed { .. }), "expected NoNondirectSeed error");
            }
        }
    }

    #[test]
    fn reflect_involution(x in any::<u64>(), bits in 1u8..=64) {
        let x = x & mask(bits);
        prop_assert_eq!(reflect(reflect(x, bits), bits), x);
    }

    #[test]
    fn append_leaves_xorout(
        params in aligned_params(),
        data in proptest::collection::vec(any::<u8>(), 0..=256)
    ) {
        // Mixed reflection needs the swapped byte order.
        let params = CrcParams { swap_suffix: params.refin != params.refout, ..params };
        let model = CrcModel::new(params).unwrap();
        let mut framed = data.clone();
        model.append(&mut framed).unwrap();
        prop_assert!(model.verify(&framed));
        for algorithm in Algorithm::ALL {
            if algorithm.family() == Family::Augmented && model.init_nodirect().is_none() {
                continue;
            }
            prop_assert_eq!(model.checksum_with(algorithm, &framed), Ok(params.xorout));
        }
    }

    #[test]
    fn table_rebuild_is_noop(params in any_params()) {
        let mut model = CrcModel::new(params).unwrap();
        let before = model.table().to_vec();
        prop_assert!(model.build_table().is_ok());
        prop_assert_eq!(model.table(), &before[..]);
    }
}
