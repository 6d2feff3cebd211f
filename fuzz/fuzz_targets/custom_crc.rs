#![no_main]
use libfuzzer_sys::fuzz_target;
use crcmodel::diag;
use crcmodel::params::mask;
use crcmodel::prelude::*;
use std::convert::TryInto;

fuzz_target!(|data: &[u8]| {
    if data.len() >= 26 {
        let width = data[0] % 64 + 1;
        let crc_mask = mask(width);
        let poly = u64::from_le_bytes(data[1..9].try_into().unwrap()) & crc_mask;
        let init = u64::from_le_bytes(data[9..17].try_into().unwrap()) & crc_mask;
        let xorout = u64::from_le_bytes(data[17..25].try_into().unwrap()) & crc_mask;
        let params = CrcParams {
            name: "fuzz",
            width,
            refin: data[25] & 1 != 0,
            refout: data[25] & 2 != 0,
            poly,
            init,
            xorout,
            check: 0,
            swap_suffix: data[25] & 4 != 0,
        };
        let data = &data[26..];
        let model = CrcModel::new(params).unwrap();
        match model.init_nodirect() {
            Some(_) => {
                // debug fails on any disagreement between the four strategies
                let report = diag::debug(&model, data).unwrap();
                assert_eq!(report.value(), Some(model.checksum(data)));
            }
            None => {
                // only an even poly can lose the non-direct seed
                assert_eq!(poly & 1, 0);
                assert!(matches!(
                    model.checksum_with(Algorithm::Naive, data),
                    Err(CrcError::NoNondirectSeed { .. })
                ));
                assert_eq!(
                    model.checksum_with(Algorithm::NaiveFast, data),
                    Ok(model.checksum(data))
                );
            }
        }
    }
});
