// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Reference signing vectors
//!
//! Signatures are produced by the key at `m/44'/148'/0'` for [MNEMONIC]
//! over the testnet passphrase, envelopes are the unsigned transaction
//! envelopes (base64 XDR) each signature covers.

use stellar_hw_proto::prelude::*;

/// Mnemonic shared between host and device
pub const MNEMONIC: &str = "all all all all all all all all all all all all";

/// Hardened BIP32 path flag
pub const HARDENED: u32 = 0x8000_0000;

/// Default stellar account path, `m/44'/148'/0'`
pub const ADDRESS_N: [u32; 3] = [44 | HARDENED, 148 | HARDENED, HARDENED];

pub const NETWORK_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Account for [MNEMONIC] at [ADDRESS_N]
pub const SOURCE_ACCOUNT: &str = "GAXSFOOGF4ELO5HT5PTN23T5XE6D5QWL3YBHSVQ2HWOFEJNYYMRJENBV";

/// Public key for [SOURCE_ACCOUNT]
pub const PUBLIC_KEY: &str = "2f22b9c62f08b774f3ebe6dd6e7db93c3ec2cbde0279561a3d9c5225b8c32292";

pub const EXAMPLE_ACCOUNT: &str = "GBOVKZBEM2YYLOCDCUXJ4IMRKHN4LCJAE7WEAEA2KF562XFAGDBOB64V";
pub const EXAMPLE_ISSUER: &str = "GAUYJFQCYIHFQNS7CI6BFWD2DSSFKDIQZUQ3BLQODDKE4PSW7VVBKENC";

pub const EXAMPLE_SIGNER_KEY: &str =
    "72187adb879c414346d77c71af8cce7b6eaa57b528e999fd91feae6b6418628e";

pub const MEMO_HASH: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

pub const TIMEBOUNDS_START: u32 = 461535181;
pub const TIMEBOUNDS_END: u32 = 1575234180;

/// Signing vector, a transaction header with its operations and the expected outputs
#[derive(Clone, Debug)]
pub struct Vector {
    pub name: &'static str,
    pub request: StellarSignTx,
    pub operations: Vec<Message>,
    /// Expected signature (base64)
    pub signature: &'static str,
    /// Unsigned transaction envelope (base64 XDR)
    pub envelope: &'static str,
}

impl Vector {
    fn new(
        name: &'static str,
        request: StellarSignTx,
        operations: Vec<Message>,
        signature: &'static str,
        envelope: &'static str,
    ) -> Self {
        Self {
            name,
            request,
            operations,
            signature,
            envelope,
        }
    }

    /// Single operation vector using [default_request]
    fn op(name: &'static str, op: Message, signature: &'static str, envelope: &'static str) -> Self {
        Self::new(name, default_request(1), vec![op], signature, envelope)
    }
}

/// Transaction header shared by the reference vectors
pub fn default_request(num_operations: u32) -> StellarSignTx {
    StellarSignTx {
        address_n: ADDRESS_N.to_vec(),
        network_passphrase: NETWORK_PASSPHRASE.into(),
        source_account: SOURCE_ACCOUNT.into(),
        fee: 100 * num_operations,
        sequence_number: 1000,
        timebounds_start: Some(TIMEBOUNDS_START),
        timebounds_end: Some(TIMEBOUNDS_END),
        memo_type: StellarMemoType::None,
        num_operations,
        ..Default::default()
    }
}

/// Native payment used where the operation is not under test
pub fn example_operation() -> StellarPaymentOp {
    StellarPaymentOp {
        source_account: None,
        destination_account: EXAMPLE_ACCOUNT.into(),
        asset: StellarAsset::native(),
        amount: 500_111_000,
    }
}

fn asset4() -> StellarAsset {
    StellarAsset::issued("X", EXAMPLE_ISSUER)
}

fn asset12() -> StellarAsset {
    StellarAsset::issued("ABCDEFGHIJKL", EXAMPLE_ISSUER)
}

fn signer_key() -> Vec<u8> {
    hex::decode(EXAMPLE_SIGNER_KEY).expect("valid signer key")
}

fn memo_hash() -> Vec<u8> {
    hex::decode(MEMO_HASH).expect("valid memo hash")
}

/// One vector per operation kind and variant
pub fn operations() -> Vec<Vector> {
    vec![
        Vector::op(
            "bump_sequence",
            StellarBumpSequenceOp {
                source_account: None,
                bump_to: 424242424242,
            }
            .to_message(),
            "2xjJi6k8ZU0JwPIA50nWhMr9t8pPYI+WS+D30mHD027wsEGwNtYKMM3AE4oMP5CDr4B5gs2GN34cTxOYSL+cBQ==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAACwAAAGLG0amyAAAAAAAAAAA=",
        ),
        Vector::op(
            "account_merge",
            StellarAccountMergeOp {
                source_account: None,
                destination_account: EXAMPLE_ACCOUNT.into(),
            }
            .to_message(),
            "cHVT80DSJz1DiAi8ZCXhimyUoMGZMs666lGA4XT2GH4lSL0yod+AgmpSYaeFJtXfiQLEVcMLeS6B6ygMrRNhBg==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAACAAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAAAAAAA",
        ),
        Vector::op(
            "create_account",
            StellarCreateAccountOp {
                source_account: None,
                new_account: EXAMPLE_ACCOUNT.into(),
                starting_balance: 500_111_000,
            }
            .to_message(),
            "sH6l2uqABZm/I9ZCMAux4oilbbbQmN4f46krh/6EpJ5BxnRBMKIdWTxfx9aOhjMV9veASfYztrjeqEux0r4nBA==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAAAAAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAAdzxaYAAAAAAAAAAA=",
        ),
        Vector::op(
            "payment_native",
            example_operation().to_message(),
            "GGmvB49owuJZ+5GA6FCCFoHsj8F+YWojgVEbmFKgqjZobMXcGjyCt8hU1M9nzWFFIVASud/pNKzpzvqwYI2xDQ==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAAAQAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAAAAAAAHc8WmAAAAAAAAAAA",
        ),
        Vector::op(
            "payment_asset4",
            StellarPaymentOp {
                asset: asset4(),
                ..example_operation()
            }
            .to_message(),
            "nPrFo5IQ5vESiX9F4fi+zOuZom/TM8ZzO+qPHSxTmC2JnILqtbh91CV8Teao0jVrovjQmmgxLPzOSjgPNYmJBw==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAAAQAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAFYAAAAAAAAACmElgLCDlg2XxI8Eth6HKRVDRDNIbCuDhjUTj5W/WoVAAAAAB3PFpgAAAAAAAAAAA==",
        ),
        Vector::op(
            "payment_asset12",
            StellarPaymentOp {
                asset: asset12(),
                ..example_operation()
            }
            .to_message(),
            "3dyV+ehncXreLCg6lDZWsYUwUtWoggNOdDDrRCn3YZ/V2rX+6c0ngydfWfgI3HOpM9yfUmrIKzyXNMPW31xzCQ==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAAAQAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAJBQkNERUZHSElKS0wAAAAAKYSWAsIOWDZfEjwS2HocpFUNEM0hsK4OGNROPlb9ahUAAAAAHc8WmAAAAAAAAAAA",
        ),
        Vector::op(
            "allow_trust",
            StellarAllowTrustOp {
                source_account: None,
                trusted_account: EXAMPLE_ACCOUNT.into(),
                asset_type: StellarAssetType::Alphanum4,
                asset_code: Some("X".into()),
                is_authorized: true,
            }
            .to_message(),
            "rWJzOXmMIzbu1U5kbmHN3DAI5oa1NTAAdGDr1fU1seNFRQtixIN14WdB61RkIYFrsCltvpQgFhAopR1rQLtOCQ==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAABwAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAFYAAAAAAAAAQAAAAAAAAAA",
        ),
        Vector::op(
            "allow_trust_revoke",
            StellarAllowTrustOp {
                source_account: None,
                trusted_account: EXAMPLE_ACCOUNT.into(),
                asset_type: StellarAssetType::Alphanum4,
                asset_code: Some("X".into()),
                is_authorized: false,
            }
            .to_message(),
            "JremCHASelebn/FTp6mBoOXW9lEKC8XEjJ5yPp6jfsxnKs1k4k1wUl2B6vZP36IL0cGr8wHQQqH1HSYOl6iBBg==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAABwAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAFYAAAAAAAAAAAAAAAAAAAA",
        ),
        Vector::op(
            "change_trust_add",
            StellarChangeTrustOp {
                source_account: None,
                asset: asset4(),
                limit: 500_000_000,
            }
            .to_message(),
            "GB3HnWD/BnSwzubXv1RV0dGGii6NhN/fSUR6ckbm3vp7FKQa1Sj57p+RpxMHKhh0LItw0+KCchZPF1ZyLzBJDw==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAABgAAAAFYAAAAAAAAACmElgLCDlg2XxI8Eth6HKRVDRDNIbCuDhjUTj5W/WoVAAAAAB3NZQAAAAAAAAAAAA==",
        ),
        Vector::op(
            "change_trust_delete",
            StellarChangeTrustOp {
                source_account: None,
                asset: asset12(),
                limit: 0,
            }
            .to_message(),
            "SE3fsxsnlujJU4OLuJet56br0vEByqZXijWdJ8AVbwPBBe+xm+Ztk/09htlsJ79tcEELwNSp2xDjGFthTNE6DQ==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAABgAAAAJBQkNERUZHSElKS0wAAAAAKYSWAsIOWDZfEjwS2HocpFUNEM0hsK4OGNROPlb9ahUAAAAAAAAAAAAAAAAAAAAA",
        ),
        Vector::op(
            "create_passive_offer",
            passive_offer().to_message(),
            "y9xb8IgPpkjgFa87I9alTD0mVc6EUcJrD7erZVPVGLdDs7rjh7fVtLAJS7iin85Yle0AwnqqEADYAjVzHzz7Bg==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAABAAAAAJBQkNERUZHSElKS0wAAAAAKYSWAsIOWDZfEjwS2HocpFUNEM0hsK4OGNROPlb9ahUAAAABWAAAAAAAAAAphJYCwg5YNl8SPBLYehykVQ0QzSGwrg4Y1E4+Vv1qFQAAAAAdzxaYAAAAAwAAAAQAAAAAAAAAAA==",
        ),
        Vector::op(
            "manage_offer",
            StellarManageOfferOp {
                source_account: None,
                selling_asset: asset12(),
                buying_asset: asset4(),
                amount: 500_111_000,
                price_n: 3,
                price_d: 4,
                offer_id: 1337,
            }
            .to_message(),
            "SB1xWWcwnnGri96c+psQ1tnlpSQNIbvPxEtDlwAd8Pp1a/IXdnv8a3XozgjoRrv3w1uJ09uE+3hoUxiUk5byBg==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAAAwAAAAJBQkNERUZHSElKS0wAAAAAKYSWAsIOWDZfEjwS2HocpFUNEM0hsK4OGNROPlb9ahUAAAABWAAAAAAAAAAphJYCwg5YNl8SPBLYehykVQ0QzSGwrg4Y1E4+Vv1qFQAAAAAdzxaYAAAAAwAAAAQAAAAAAAAFOQAAAAAAAAAA",
        ),
        Vector::op(
            "path_payment",
            StellarPathPaymentOp {
                source_account: None,
                send_asset: asset4(),
                send_max: 500_111_000,
                destination_account: EXAMPLE_ACCOUNT.into(),
                destination_asset: asset12(),
                destination_amount: 123456,
                paths: vec![],
            }
            .to_message(),
            "A/ccrRMTEy3GXaZ7Lo5frX3ME5fy3bDMrmYaZ8oPtpPk+cnRStbcSAgdTKnRq/dPGRLfh2btvPJD9ETMe1ajDA==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAAAgAAAAFYAAAAAAAAACmElgLCDlg2XxI8Eth6HKRVDRDNIbCuDhjUTj5W/WoVAAAAAB3PFpgAAAAAXVVkJGaxhbhDFS6eIZFR28WJICfsQBAaUXvtXKAwwuAAAAACQUJDREVGR0hJSktMAAAAACmElgLCDlg2XxI8Eth6HKRVDRDNIbCuDhjUTj5W/WoVAAAAAAAB4kAAAAAAAAAAAAAAAAA=",
        ),
        Vector::op(
            "manage_data",
            manage_data().to_message(),
            "8itLTzFFEwGXeAeSPeus/GGRu1sC+N1darL8/WERJHUPXKLra7QxBUmcoRvNb1rf0gonWCnZepAhn70R9mVOAw==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAACgAAAARkYXRhAAAAAQAAAANhYmMAAAAAAAAAAAA=",
        ),
        Vector::op(
            "set_options_all",
            StellarSetOptionsOp {
                source_account: None,
                inflation_destination_account: Some(EXAMPLE_ACCOUNT.into()),
                clear_flags: Some(1),
                set_flags: Some(6),
                master_weight: Some(100),
                low_threshold: Some(1),
                medium_threshold: Some(10),
                high_threshold: Some(90),
                home_domain: Some("www.example.com".into()),
                signer_type: Some(StellarSignerType::Account),
                signer_key: Some(signer_key()),
                signer_weight: Some(20),
            }
            .to_message(),
            "Yy/iO5/Hjf67PYvxzvdAcc8r+/izKYg++ra/GrMe6KFmPfiKWJXnD2DMfExMcSGt3bMFwT6BBko+WiEr/4PUAQ==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAABQAAAAEAAAAAXVVkJGaxhbhDFS6eIZFR28WJICfsQBAaUXvtXKAwwuAAAAABAAAAAQAAAAEAAAAGAAAAAQAAAGQAAAABAAAAAQAAAAEAAAAKAAAAAQAAAFoAAAABAAAAD3d3dy5leGFtcGxlLmNvbQAAAAABAAAAAHIYetuHnEFDRtd8ca+Mzntuqle1KOmZ/ZH+rmtkGGKOAAAAFAAAAAAAAAAA",
        ),
        Vector::op(
            "set_options_some",
            StellarSetOptionsOp {
                set_flags: Some(1),
                master_weight: Some(10),
                medium_threshold: Some(50),
                signer_type: Some(StellarSignerType::PreAuth),
                signer_key: Some(signer_key()),
                signer_weight: Some(10),
                ..Default::default()
            }
            .to_message(),
            "fR0Omce7E6ZcK9VMCTRQjGl3+3yOomlO6aGPaH2EcgwTkrw4iWdkJi3Abkyzoqx2TRYsNjDrmMKflhB++F2ICw==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAABQAAAAAAAAAAAAAAAQAAAAEAAAABAAAACgAAAAAAAAABAAAAMgAAAAAAAAAAAAAAAQAAAAFyGHrbh5xBQ0bXfHGvjM57bqpXtSjpmf2R/q5rZBhijgAAAAoAAAAAAAAAAA==",
        ),
        Vector::op(
            "set_options_one",
            StellarSetOptionsOp {
                signer_type: Some(StellarSignerType::Hash),
                signer_key: Some(signer_key()),
                signer_weight: Some(10),
                ..Default::default()
            }
            .to_message(),
            "HgJas9f4I/o1gneU6+t7fhfdFMttSO57a8P/1wgMQ87ySt3WW/RQvFqqTX+evXmLFb/XZ5A9K3tcw1WLBhSdBQ==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAABQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAQAAAAJyGHrbh5xBQ0bXfHGvjM57bqpXtSjpmf2R/q5rZBhijgAAAAoAAAAAAAAAAA==",
        ),
    ]
}

/// Time bound variants, unset bounds are encoded as zero
pub fn time_bounds() -> Vec<Vector> {
    let tb = |name, start, end, signature, envelope| {
        let mut r = default_request(1);
        r.timebounds_start = Some(start);
        r.timebounds_end = Some(end);

        Vector::new(
            name,
            r,
            vec![example_operation().to_message()],
            signature,
            envelope,
        )
    };

    vec![
        tb(
            "time_bounds_none",
            0,
            0,
            "GjUEwL7wGOLPWa3koAdDNq9b1me8elkXeO9um5fT/dv7zjXCSavoMyzWXsCikjkkdYkch6PyBgQUjL0d6RhrDw==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAEAAAAAAAAAAQAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAAAAAAAHc8WmAAAAAAAAAAA",
        ),
        tb(
            "time_bounds_end",
            0,
            TIMEBOUNDS_END,
            "zzAQiWN6F3XUuwxDx+326FsP0zphqGL+R3DRF/hJc/k0072efcgOUBYL2uCwehBdo5qgWdLcAEXiR6IFlaywCw==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAAAAAAAAAAABd5CqEAAAAAAAAAAEAAAAAAAAAAQAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAAAAAAAHc8WmAAAAAAAAAAA",
        ),
        tb(
            "time_bounds_both",
            TIMEBOUNDS_START,
            TIMEBOUNDS_END,
            "GGmvB49owuJZ+5GA6FCCFoHsj8F+YWojgVEbmFKgqjZobMXcGjyCt8hU1M9nzWFFIVASud/pNKzpzvqwYI2xDQ==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAAAAAAAAQAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAAAAAAAHc8WmAAAAAAAAAAA",
        ),
        tb(
            "time_bounds_start",
            TIMEBOUNDS_START,
            0,
            "6WrPy52etTfIDKAYnYz/XsvAvKR+FicNfv8uaLqlZakhrb5iT7dxmOAz15D6at/Mnxx0LEEKqsAzG/1+CjaMDg==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAAAAAAAAAAAAAAAAAAEAAAAAAAAAAQAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAAAAAAAHc8WmAAAAAAAAAAA",
        ),
    ]
}

/// Memo variants
pub fn memos() -> Vec<Vector> {
    let memo = |name, f: &dyn Fn(&mut StellarSignTx), signature, envelope| {
        let mut r = default_request(1);
        f(&mut r);

        Vector::new(
            name,
            r,
            vec![example_operation().to_message()],
            signature,
            envelope,
        )
    };

    vec![
        memo(
            "memo_text",
            &|r| {
                r.memo_type = StellarMemoType::Text;
                r.memo_text = Some("Hello, world!".into());
            },
            "0fMCgbE8/Lf0r1WdjOtYpQThNBmeLrac3a8V2fD80Whzv+1pSY+KgwDbtv2PWX9CCCKGQ51iL7IiMk3zubz1BQ==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAQAAAA1IZWxsbywgd29ybGQhAAAAAAAAAQAAAAAAAAABAAAAAF1VZCRmsYW4QxUuniGRUdvFiSAn7EAQGlF77VygMMLgAAAAAAAAAAAdzxaYAAAAAAAAAAA=",
        ),
        memo(
            "memo_id",
            &|r| {
                r.memo_type = StellarMemoType::Id;
                r.memo_id = Some(12345678901234);
            },
            "Rq7LI+SHrHBeD55Tgoj4YAxeJ8Ldu8Mds22xFD+wbDGmElhkvkE1KUUznE2DoOcGraA/Kcah2KiQ5L/DaTDbDA==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAgAACzpzzi/yAAAAAQAAAAAAAAABAAAAAF1VZCRmsYW4QxUuniGRUdvFiSAn7EAQGlF77VygMMLgAAAAAAAAAAAdzxaYAAAAAAAAAAA=",
        ),
        memo(
            "memo_hash",
            &|r| {
                r.memo_type = StellarMemoType::Hash;
                r.memo_hash = Some(memo_hash());
            },
            "OVjaU2aKOCSSHFDktWGONJ6aOgjEx6HlQQuqmtqs9opLmjQDO0aajALSMeFNv7hWhvzJGsAQfeqpdDHq6BARBg==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAwEjRWeJq83vASNFZ4mrze8BI0VniavN7wEjRWeJq83vAAAAAQAAAAAAAAABAAAAAF1VZCRmsYW4QxUuniGRUdvFiSAn7EAQGlF77VygMMLgAAAAAAAAAAAdzxaYAAAAAAAAAAA=",
        ),
        memo(
            "memo_return",
            &|r| {
                r.memo_type = StellarMemoType::Return;
                r.memo_hash = Some(memo_hash());
            },
            "49G1t+0i3kUZ/fn8BQu4mp11ROSq33Wi0GJEzAY1YJlRYvsV1bunf05b11wF/1OQXf9LK4fUCz00rTYEzbcgAQ==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAABAEjRWeJq83vASNFZ4mrze8BI0VniavN7wEjRWeJq83vAAAAAQAAAAAAAAABAAAAAF1VZCRmsYW4QxUuniGRUdvFiSAn7EAQGlF77VygMMLgAAAAAAAAAAAdzxaYAAAAAAAAAAA=",
        ),
    ]
}

/// Multiple operations and per-operation source accounts
pub fn composite() -> Vec<Vector> {
    let mut multi = default_request(3);
    multi.fee = 300;

    vec![
        Vector::new(
            "multiple_operations",
            multi,
            vec![
                StellarCreateAccountOp {
                    source_account: None,
                    new_account: EXAMPLE_ACCOUNT.into(),
                    starting_balance: 100_000_000,
                }
                .to_message(),
                passive_offer().to_message(),
                manage_data().to_message(),
            ],
            "ZSGKHi6FLjgOzxuyE2hRWw0ArdF4Bie5GprdsBwiBYYBwVp7t2ex6+5bIyBCyCoYEyW+LABO74THFQzsmFoBAw==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAASwAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAMAAAAAAAAAAAAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAAF9eEAAAAAAAAAAAQAAAACQUJDREVGR0hJSktMAAAAACmElgLCDlg2XxI8Eth6HKRVDRDNIbCuDhjUTj5W/WoVAAAAAVgAAAAAAAAAKYSWAsIOWDZfEjwS2HocpFUNEM0hsK4OGNROPlb9ahUAAAAAHc8WmAAAAAMAAAAEAAAAAAAAAAoAAAAEZGF0YQAAAAEAAAADYWJjAAAAAAAAAAAA",
        ),
        Vector::op(
            "source_account",
            StellarPaymentOp {
                source_account: Some(EXAMPLE_ACCOUNT.into()),
                ..example_operation()
            }
            .to_message(),
            "Ps6r6f8yFu3IS19JKJNgAsJ3QwWW7YOckCRj96XK5BP3UGlTyI4K025E/+DRba/tiscMKBL52ERHkdSf3A8wCQ==",
            "AAAAAgAAAAAvIrnGLwi3dPPr5t1ufbk8PsLL3gJ5Vho9nFIluMMikgAAAGQAAAAAAAAD6AAAAAEAAAAAG4J3zQAAAABd5CqEAAAAAAAAAAEAAAABAAAAAF1VZCRmsYW4QxUuniGRUdvFiSAn7EAQGlF77VygMMLgAAAAAQAAAABdVWQkZrGFuEMVLp4hkVHbxYkgJ+xAEBpRe+1coDDC4AAAAAAAAAAAHc8WmAAAAAAAAAAA",
        ),
    ]
}

/// Every reference vector
pub fn all() -> Vec<Vector> {
    let mut v = operations();
    v.extend(time_bounds());
    v.extend(memos());
    v.extend(composite());
    v
}

fn passive_offer() -> StellarCreatePassiveOfferOp {
    StellarCreatePassiveOfferOp {
        source_account: None,
        selling_asset: asset12(),
        buying_asset: asset4(),
        amount: 500_111_000,
        price_n: 3,
        price_d: 4,
    }
}

fn manage_data() -> StellarManageDataOp {
    StellarManageDataOp {
        source_account: None,
        key: "data".into(),
        value: Some(b"abc".to_vec()),
    }
}
