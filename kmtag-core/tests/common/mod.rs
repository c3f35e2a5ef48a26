// Test utilities and generators for kmtag property-based testing

#![allow(dead_code)]

use kmtag_core::*;
use proptest::prelude::*;

/// Generate KeyPurpose values
pub fn arb_key_purpose() -> impl Strategy<Value = KeyPurpose> {
    prop_oneof![
        Just(KeyPurpose::Encrypt),
        Just(KeyPurpose::Decrypt),
        Just(KeyPurpose::Sign),
        Just(KeyPurpose::Verify),
        Just(KeyPurpose::WrapKey),
    ]
}

/// Generate Algorithm values
pub fn arb_algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Rsa),
        Just(Algorithm::Ec),
        Just(Algorithm::Aes),
        Just(Algorithm::TripleDes),
        Just(Algorithm::Hmac),
    ]
}

/// Generate BlockMode values
pub fn arb_block_mode() -> impl Strategy<Value = BlockMode> {
    prop_oneof![
        Just(BlockMode::Ecb),
        Just(BlockMode::Cbc),
        Just(BlockMode::Ctr),
        Just(BlockMode::Gcm),
    ]
}

/// Generate Digest values
pub fn arb_digest() -> impl Strategy<Value = Digest> {
    prop_oneof![
        Just(Digest::None),
        Just(Digest::Md5),
        Just(Digest::Sha1),
        Just(Digest::Sha224),
        Just(Digest::Sha256),
        Just(Digest::Sha384),
        Just(Digest::Sha512),
    ]
}

/// Generate PaddingMode values
pub fn arb_padding_mode() -> impl Strategy<Value = PaddingMode> {
    prop_oneof![
        Just(PaddingMode::None),
        Just(PaddingMode::RsaOaep),
        Just(PaddingMode::RsaPss),
        Just(PaddingMode::RsaPkcs115Encrypt),
        Just(PaddingMode::RsaPkcs115Sign),
        Just(PaddingMode::Pkcs7),
    ]
}

/// Generate EcCurve values
pub fn arb_ec_curve() -> impl Strategy<Value = EcCurve> {
    prop_oneof![
        Just(EcCurve::P224),
        Just(EcCurve::P256),
        Just(EcCurve::P384),
        Just(EcCurve::P521),
    ]
}

pub fn arb_blob_usage() -> impl Strategy<Value = KeyBlobUsageRequirements> {
    prop_oneof![
        Just(KeyBlobUsageRequirements::Standalone),
        Just(KeyBlobUsageRequirements::RequiresFileSystem),
    ]
}

pub fn arb_authenticator_type() -> impl Strategy<Value = HardwareAuthenticatorType> {
    prop_oneof![
        Just(HardwareAuthenticatorType::NONE),
        Just(HardwareAuthenticatorType::PASSWORD),
        Just(HardwareAuthenticatorType::FINGERPRINT),
        Just(HardwareAuthenticatorType::PASSWORD | HardwareAuthenticatorType::FINGERPRINT),
        Just(HardwareAuthenticatorType::ANY),
        any::<u32>().prop_map(HardwareAuthenticatorType::from_bits),
    ]
}

pub fn arb_origin() -> impl Strategy<Value = KeyOrigin> {
    prop_oneof![
        Just(KeyOrigin::Generated),
        Just(KeyOrigin::Derived),
        Just(KeyOrigin::Imported),
        Just(KeyOrigin::Unknown),
        Just(KeyOrigin::SecurelyImported),
    ]
}

pub fn arb_security_level() -> impl Strategy<Value = SecurityLevel> {
    prop_oneof![
        Just(SecurityLevel::Software),
        Just(SecurityLevel::TrustedEnvironment),
        Just(SecurityLevel::Strongbox),
    ]
}

/// Generate reasonable-sized blob payloads
pub fn arb_blob() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

/// Any declared tag identity
pub fn arb_tag() -> impl Strategy<Value = Tag> {
    prop::sample::select(ALL_TAGS.to_vec())
}

pub fn arb_flag_parameter() -> impl Strategy<Value = KeyParameter> {
    prop_oneof![
        Just(flag(TAG_CALLER_NONCE)),
        Just(flag(TAG_INCLUDE_UNIQUE_ID)),
        Just(flag(TAG_BOOTLOADER_ONLY)),
        Just(flag(TAG_NO_AUTH_REQUIRED)),
        Just(flag(TAG_ROLLBACK_RESISTANCE)),
        Just(flag(TAG_RESET_SINCE_ID_ROTATION)),
        Just(flag(TAG_TRUSTED_USER_PRESENCE_REQUIRED)),
    ]
}

pub fn arb_integer_parameter() -> impl Strategy<Value = KeyParameter> {
    prop_oneof![
        any::<u32>().prop_map(|v| authorization(TAG_KEY_SIZE, v)),
        any::<u32>().prop_map(|v| authorization(TAG_MIN_MAC_LENGTH, v)),
        any::<u32>().prop_map(|v| authorization(TAG_MAC_LENGTH, v)),
        any::<u32>().prop_map(|v| authorization(TAG_USER_ID, v)),
        any::<u32>().prop_map(|v| authorization(TAG_AUTH_TIMEOUT, v)),
        any::<u32>().prop_map(|v| authorization(TAG_OS_VERSION, v)),
        any::<u32>().prop_map(|v| authorization(TAG_OS_PATCHLEVEL, v)),
        any::<u32>().prop_map(|v| authorization(TAG_BOOT_PATCHLEVEL, v)),
    ]
}

pub fn arb_long_parameter() -> impl Strategy<Value = KeyParameter> {
    prop_oneof![
        any::<u64>().prop_map(|v| authorization(TAG_RSA_PUBLIC_EXPONENT, v)),
        any::<u64>().prop_map(|v| authorization(TAG_USER_SECURE_ID, v)),
        any::<u64>().prop_map(|v| authorization(TAG_ACTIVE_DATETIME, v)),
        any::<u64>().prop_map(|v| authorization(TAG_CREATION_DATETIME, v)),
        any::<u64>().prop_map(|v| authorization(TAG_USAGE_EXPIRE_DATETIME, v)),
        any::<u64>().prop_map(|v| authorization(TAG_ORIGINATION_EXPIRE_DATETIME, v)),
    ]
}

pub fn arb_blob_parameter() -> impl Strategy<Value = KeyParameter> {
    prop_oneof![
        arb_blob().prop_map(|v| authorization(TAG_APPLICATION_ID, v)),
        arb_blob().prop_map(|v| authorization(TAG_APPLICATION_DATA, v)),
        arb_blob().prop_map(|v| authorization(TAG_NONCE, v)),
        arb_blob().prop_map(|v| authorization(TAG_ROOT_OF_TRUST, v)),
        arb_blob().prop_map(|v| authorization(TAG_ATTESTATION_CHALLENGE, v)),
        arb_blob().prop_map(|v| authorization(TAG_ATTESTATION_ID_SERIAL, v)),
        arb_blob().prop_map(|v| authorization(TAG_CONFIRMATION_TOKEN, v)),
    ]
}

pub fn arb_enum_parameter() -> impl Strategy<Value = KeyParameter> {
    prop_oneof![
        arb_key_purpose().prop_map(|v| authorization(TAG_PURPOSE, v)),
        arb_algorithm().prop_map(|v| authorization(TAG_ALGORITHM, v)),
        arb_block_mode().prop_map(|v| authorization(TAG_BLOCK_MODE, v)),
        arb_digest().prop_map(|v| authorization(TAG_DIGEST, v)),
        arb_padding_mode().prop_map(|v| authorization(TAG_PADDING, v)),
        arb_ec_curve().prop_map(|v| authorization(TAG_EC_CURVE, v)),
        arb_blob_usage().prop_map(|v| authorization(TAG_BLOB_USAGE_REQUIREMENTS, v)),
        arb_authenticator_type().prop_map(|v| authorization(TAG_USER_AUTH_TYPE, v)),
        arb_origin().prop_map(|v| authorization(TAG_ORIGIN, v)),
        arb_security_level().prop_map(|v| authorization(TAG_HARDWARE_TYPE, v)),
    ]
}

/// Generate a key parameter built through the typed API, any category
pub fn arb_key_parameter() -> impl Strategy<Value = KeyParameter> {
    prop_oneof![
        arb_flag_parameter(),
        arb_integer_parameter(),
        arb_long_parameter(),
        arb_blob_parameter(),
        arb_enum_parameter(),
    ]
}

/// Tags under which the safe reader finds a value in `param`
pub fn readable_tags(param: &KeyParameter) -> Vec<Tag> {
    let mut found = Vec::new();

    macro_rules! try_read {
        ($($typed:expr),* $(,)?) => {
            $(
                if authorization_value($typed, param).is_ok() {
                    found.push($typed.tag());
                }
            )*
        };
    }

    try_read!(
        TAG_ACTIVE_DATETIME,
        TAG_ALGORITHM,
        TAG_ALLOW_WHILE_ON_BODY,
        TAG_APPLICATION_DATA,
        TAG_APPLICATION_ID,
        TAG_ASSOCIATED_DATA,
        TAG_ATTESTATION_APPLICATION_ID,
        TAG_ATTESTATION_CHALLENGE,
        TAG_ATTESTATION_ID_BRAND,
        TAG_ATTESTATION_ID_DEVICE,
        TAG_ATTESTATION_ID_IMEI,
        TAG_ATTESTATION_ID_MANUFACTURER,
        TAG_ATTESTATION_ID_MEID,
        TAG_ATTESTATION_ID_MODEL,
        TAG_ATTESTATION_ID_PRODUCT,
        TAG_ATTESTATION_ID_SERIAL,
        TAG_AUTH_TIMEOUT,
        TAG_BLOB_USAGE_REQUIREMENTS,
        TAG_BLOCK_MODE,
        TAG_BOOTLOADER_ONLY,
        TAG_BOOT_PATCHLEVEL,
        TAG_CALLER_NONCE,
        TAG_CONFIRMATION_TOKEN,
        TAG_CREATION_DATETIME,
        TAG_DIGEST,
        TAG_EC_CURVE,
        TAG_HARDWARE_TYPE,
        TAG_INCLUDE_UNIQUE_ID,
        TAG_KEY_SIZE,
        TAG_MAC_LENGTH,
        TAG_MAX_USES_PER_BOOT,
        TAG_MIN_MAC_LENGTH,
        TAG_MIN_SECONDS_BETWEEN_OPS,
        TAG_NONCE,
        TAG_NO_AUTH_REQUIRED,
        TAG_ORIGIN,
        TAG_ORIGINATION_EXPIRE_DATETIME,
        TAG_OS_PATCHLEVEL,
        TAG_OS_VERSION,
        TAG_PADDING,
        TAG_PURPOSE,
        TAG_RESET_SINCE_ID_ROTATION,
        TAG_ROLLBACK_RESISTANCE,
        TAG_ROOT_OF_TRUST,
        TAG_RSA_PUBLIC_EXPONENT,
        TAG_TRUSTED_CONFIRMATION_REQUIRED,
        TAG_TRUSTED_USER_PRESENCE_REQUIRED,
        TAG_UNIQUE_ID,
        TAG_UNLOCKED_DEVICE_REQUIRED,
        TAG_USAGE_EXPIRE_DATETIME,
        TAG_USER_AUTH_TYPE,
        TAG_USER_ID,
        TAG_USER_SECURE_ID,
        TAG_VENDOR_PATCHLEVEL,
    );

    found
}
