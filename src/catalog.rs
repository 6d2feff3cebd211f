//! Named CRC variants.
//!
//! Check values are the checksums of `123456789` as published in the CRC
//! Catalogue.

use crate::params::CrcParams;

/// The standard check input.
pub const CHECK_INPUT: &[u8] = b"123456789";

impl CrcParams {
    /// CRC-16/ARC, also known as plain "CRC-16" or CRC-16/LHA.
    pub const CRC_16_ARC: Self = Self {
        name: "CRC-16/ARC",
        width: 16,
        refin: true,
        refout: true,
        poly: 0x8005,
        init: 0x0000,
        xorout: 0x0000,
        check: 0xBB3D,
        swap_suffix: false,
    };

    /// CRC-16/MAXIM-DOW - 1-Wire devices.
    pub const CRC_16_MAXIM: Self = Self {
        name: "CRC-16/MAXIM",
        width: 16,
        refin: true,
        refout: true,
        poly: 0x8005,
        init: 0x0000,
        xorout: 0xFFFF,
        check: 0x44C2,
        swap_suffix: false,
    };

    pub const CRC_16_USB: Self = Self {
        name: "CRC-16/USB",
        width: 16,
        refin: true,
        refout: true,
        poly: 0x8005,
        init: 0xFFFF,
        xorout: 0xFFFF,
        check: 0xB4C8,
        swap_suffix: false,
    };

    /// CRC-16/MODBUS - Modbus RTU frames, sent low byte first.
    pub const CRC_16_MODBUS: Self = Self {
        name: "CRC-16/MODBUS",
        width: 16,
        refin: true,
        refout: true,
        poly: 0x8005,
        init: 0xFFFF,
        xorout: 0x0000,
        check: 0x4B37,
        swap_suffix: false,
    };

    /// CRC-16/XMODEM - XMODEM, ZMODEM, Bluetooth HCI.
    pub const CRC_16_CCITT_XMODEM: Self = Self {
        name: "CRC-16/CCITT-XMODEM",
        width: 16,
        refin: false,
        refout: false,
        poly: 0x1021,
        init: 0x0000,
        xorout: 0x0000,
        check: 0x31C3,
        swap_suffix: false,
    };

    /// CRC-16/CCITT-FALSE (IBM-3740).
    pub const CRC_16_CCITT_FFFF: Self = Self {
        name: "CRC-16/CCITT-0xFFFF",
        width: 16,
        refin: false,
        refout: false,
        poly: 0x1021,
        init: 0xFFFF,
        xorout: 0x0000,
        check: 0x29B1,
        swap_suffix: false,
    };

    /// CRC-16/SPI-FUJITSU (AUG-CCITT).
    pub const CRC_16_CCITT_1D0F: Self = Self {
        name: "CRC-16/CCITT-0x1D0F",
        width: 16,
        refin: false,
        refout: false,
        poly: 0x1021,
        init: 0x1D0F,
        xorout: 0x0000,
        check: 0xE5CC,
        swap_suffix: false,
    };

    /// CRC-16/KERMIT.
    ///
    /// Some tools print this check value byte-swapped as `0x8921`; the
    /// catalogue value is `0x2189`.
    pub const CRC_16_KERMIT: Self = Self {
        name: "CRC-16/KERMIT",
        width: 16,
        refin: true,
        refout: true,
        poly: 0x1021,
        init: 0x0000,
        xorout: 0x0000,
        check: 0x2189,
        swap_suffix: false,
    };

    /// CRC-16/DNP - DNP 3.0 link layer.
    ///
    /// Some tools print this check value byte-swapped as `0x82EA`.
    pub const CRC_16_DNP: Self = Self {
        name: "CRC-16/DNP",
        width: 16,
        refin: true,
        refout: true,
        poly: 0x3D65,
        init: 0x0000,
        xorout: 0xFFFF,
        check: 0xEA82,
        swap_suffix: false,
    };

    /// The zero-seeded X.25 variant (complemented Kermit).
    pub const CRC_16_X25: Self = Self {
        name: "CRC-16/X25",
        width: 16,
        refin: true,
        refout: true,
        poly: 0x1021,
        init: 0x0000,
        xorout: 0xFFFF,
        check: 0xDE76,
        swap_suffix: false,
    };

    /// CRC-32 (ISO-HDLC) - Ethernet, gzip, PNG, zip.
    pub const CRC_32: Self = Self {
        name: "CRC-32",
        width: 32,
        refin: true,
        refout: true,
        poly: 0x04C11DB7,
        init: 0xFFFFFFFF,
        xorout: 0xFFFFFFFF,
        check: 0xCBF43926,
        swap_suffix: false,
    };

    /// CRC-5/USB - USB token packets.
    pub const CRC_5_USB: Self = Self {
        name: "CRC-5/USB",
        width: 5,
        refin: true,
        refout: true,
        poly: 0x05,
        init: 0x1F,
        xorout: 0x1F,
        check: 0x19,
        swap_suffix: false,
    };

    /// CRC-8/MAXIM-DOW - 1-Wire ROM codes.
    pub const CRC_8_MAXIM: Self = Self {
        name: "CRC-8/MAXIM",
        width: 8,
        refin: true,
        refout: true,
        poly: 0x31,
        init: 0x00,
        xorout: 0x00,
        check: 0xA1,
        swap_suffix: false,
    };

    /// CRC-64/XZ (ECMA-182 reflected) - XZ, 7-Zip.
    pub const CRC_64_XZ: Self = Self {
        name: "CRC-64/XZ",
        width: 64,
        refin: true,
        refout: true,
        poly: 0x42F0E1EBA9EA3693,
        init: 0xFFFFFFFFFFFFFFFF,
        xorout: 0xFFFFFFFFFFFFFFFF,
        check: 0x995DC9BBDF1939FA,
        swap_suffix: false,
    };
}

/// Every built-in variant.
pub const CATALOG: &[CrcParams] = &[
    CrcParams::CRC_16_ARC,
    CrcParams::CRC_16_MAXIM,
    CrcParams::CRC_16_USB,
    CrcParams::CRC_16_MODBUS,
    CrcParams::CRC_16_CCITT_XMODEM,
    CrcParams::CRC_16_CCITT_FFFF,
    CrcParams::CRC_16_CCITT_1D0F,
    CrcParams::CRC_16_KERMIT,
    CrcParams::CRC_16_DNP,
    CrcParams::CRC_16_X25,
    CrcParams::CRC_32,
    CrcParams::CRC_5_USB,
    CrcParams::CRC_8_MAXIM,
    CrcParams::CRC_64_XZ,
];

/// Looks a variant up by its name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static CrcParams> {
    CATALOG.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
