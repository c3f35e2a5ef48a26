// Core type definitions for kmtag
//
// These mirror the keymaster 4.0 interface definition: the tag identities
// with their numeric encodings, the closed enumerations carried as payloads
// and the key parameter record itself.

use crate::error::TagError;
use bstr::BString;
use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Payload category of a tag, stored in the top four bits of its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum TagType {
    Invalid = 0,
    /// Enumeration, at most one per key.
    Enum = 1 << 28,
    /// Enumeration, repeatable.
    EnumRep = 2 << 28,
    Uint = 3 << 28,
    UintRep = 4 << 28,
    Ulong = 5 << 28,
    /// Milliseconds since the epoch.
    Date = 6 << 28,
    /// Presence is truth.
    Bool = 7 << 28,
    Bignum = 8 << 28,
    Bytes = 9 << 28,
    UlongRep = 10 << 28,
}

macro_rules! declare_tags {
    ($($variant:ident = $tag_type:ident | $number:literal => $name:literal,)*) => {
        /// Tag identity of a key parameter.
        ///
        /// The discriminant is the on-the-wire number: the category bits of
        /// [`TagType`] or-ed with the tag's own number.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(u32)]
        pub enum Tag {
            $($variant = TagType::$tag_type as u32 | $number,)*
        }

        impl Tag {
            /// Every declared tag identity, in catalog order.
            pub const ALL: &'static [Tag] = &[$(Tag::$variant,)*];

            /// Strict lookup of a tag identity by its number.
            pub const fn from_raw(raw: u32) -> Option<Tag> {
                $(
                    if raw == Tag::$variant as u32 {
                        return Some(Tag::$variant);
                    }
                )*
                None
            }

            /// Interface name, e.g. `PURPOSE`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Tag::$variant => $name,)*
                }
            }
        }
    };
}

declare_tags! {
    Invalid = Invalid | 0 => "INVALID",
    Purpose = EnumRep | 1 => "PURPOSE",
    Algorithm = Enum | 2 => "ALGORITHM",
    KeySize = Uint | 3 => "KEY_SIZE",
    BlockMode = EnumRep | 4 => "BLOCK_MODE",
    Digest = EnumRep | 5 => "DIGEST",
    Padding = EnumRep | 6 => "PADDING",
    CallerNonce = Bool | 7 => "CALLER_NONCE",
    MinMacLength = Uint | 8 => "MIN_MAC_LENGTH",
    EcCurve = Enum | 10 => "EC_CURVE",
    RsaPublicExponent = Ulong | 200 => "RSA_PUBLIC_EXPONENT",
    IncludeUniqueId = Bool | 202 => "INCLUDE_UNIQUE_ID",
    BlobUsageRequirements = Enum | 301 => "BLOB_USAGE_REQUIREMENTS",
    BootloaderOnly = Bool | 302 => "BOOTLOADER_ONLY",
    RollbackResistance = Bool | 303 => "ROLLBACK_RESISTANCE",
    HardwareType = Enum | 304 => "HARDWARE_TYPE",
    ActiveDatetime = Date | 400 => "ACTIVE_DATETIME",
    OriginationExpireDatetime = Date | 401 => "ORIGINATION_EXPIRE_DATETIME",
    UsageExpireDatetime = Date | 402 => "USAGE_EXPIRE_DATETIME",
    MinSecondsBetweenOps = Uint | 403 => "MIN_SECONDS_BETWEEN_OPS",
    MaxUsesPerBoot = Uint | 404 => "MAX_USES_PER_BOOT",
    UserId = Uint | 501 => "USER_ID",
    UserSecureId = UlongRep | 502 => "USER_SECURE_ID",
    NoAuthRequired = Bool | 503 => "NO_AUTH_REQUIRED",
    UserAuthType = Enum | 504 => "USER_AUTH_TYPE",
    AuthTimeout = Uint | 505 => "AUTH_TIMEOUT",
    AllowWhileOnBody = Bool | 506 => "ALLOW_WHILE_ON_BODY",
    TrustedUserPresenceRequired = Bool | 507 => "TRUSTED_USER_PRESENCE_REQUIRED",
    TrustedConfirmationRequired = Bool | 508 => "TRUSTED_CONFIRMATION_REQUIRED",
    UnlockedDeviceRequired = Bool | 509 => "UNLOCKED_DEVICE_REQUIRED",
    ApplicationId = Bytes | 601 => "APPLICATION_ID",
    ApplicationData = Bytes | 700 => "APPLICATION_DATA",
    CreationDatetime = Date | 701 => "CREATION_DATETIME",
    Origin = Enum | 702 => "ORIGIN",
    RootOfTrust = Bytes | 704 => "ROOT_OF_TRUST",
    OsVersion = Uint | 705 => "OS_VERSION",
    OsPatchlevel = Uint | 706 => "OS_PATCHLEVEL",
    UniqueId = Bytes | 707 => "UNIQUE_ID",
    AttestationChallenge = Bytes | 708 => "ATTESTATION_CHALLENGE",
    AttestationApplicationId = Bytes | 709 => "ATTESTATION_APPLICATION_ID",
    AttestationIdBrand = Bytes | 710 => "ATTESTATION_ID_BRAND",
    AttestationIdDevice = Bytes | 711 => "ATTESTATION_ID_DEVICE",
    AttestationIdProduct = Bytes | 712 => "ATTESTATION_ID_PRODUCT",
    AttestationIdSerial = Bytes | 713 => "ATTESTATION_ID_SERIAL",
    AttestationIdImei = Bytes | 714 => "ATTESTATION_ID_IMEI",
    AttestationIdMeid = Bytes | 715 => "ATTESTATION_ID_MEID",
    AttestationIdManufacturer = Bytes | 716 => "ATTESTATION_ID_MANUFACTURER",
    AttestationIdModel = Bytes | 717 => "ATTESTATION_ID_MODEL",
    VendorPatchlevel = Uint | 718 => "VENDOR_PATCHLEVEL",
    BootPatchlevel = Uint | 719 => "BOOT_PATCHLEVEL",
    AssociatedData = Bytes | 1000 => "ASSOCIATED_DATA",
    Nonce = Bytes | 1001 => "NONCE",
    MacLength = Uint | 1003 => "MAC_LENGTH",
    ResetSinceIdRotation = Bool | 1004 => "RESET_SINCE_ID_ROTATION",
    ConfirmationToken = Bytes | 1005 => "CONFIRMATION_TOKEN",
}

impl Default for Tag {
    fn default() -> Self {
        Tag::Invalid
    }
}

// Closed enumerations. Every one of them gets a strict `TryFrom<u32>` so
// numbers coming from outside can be checked before they become payloads.
macro_rules! hal_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[repr(u32)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)*
        }

        impl TryFrom<u32> for $name {
            type Error = TagError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                $(
                    if value == $name::$variant as u32 {
                        return Ok($name::$variant);
                    }
                )*
                Err(TagError::UnknownEnumValue {
                    kind: stringify!($name),
                    value,
                })
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value as u32
            }
        }
    };
}

hal_enum! {
    KeyPurpose {
        #[default]
        Encrypt = 0,
        Decrypt = 1,
        Sign = 2,
        Verify = 3,
        WrapKey = 5,
    }
}

hal_enum! {
    Algorithm {
        #[default]
        Rsa = 1,
        Ec = 3,
        Aes = 32,
        TripleDes = 33,
        Hmac = 128,
    }
}

hal_enum! {
    BlockMode {
        #[default]
        Ecb = 1,
        Cbc = 2,
        Ctr = 3,
        Gcm = 32,
    }
}

hal_enum! {
    Digest {
        #[default]
        None = 0,
        Md5 = 1,
        Sha1 = 2,
        Sha224 = 3,
        Sha256 = 4,
        Sha384 = 5,
        Sha512 = 6,
    }
}

hal_enum! {
    PaddingMode {
        #[default]
        None = 1,
        RsaOaep = 2,
        RsaPss = 3,
        RsaPkcs115Encrypt = 4,
        RsaPkcs115Sign = 5,
        Pkcs7 = 64,
    }
}

hal_enum! {
    EcCurve {
        #[default]
        P224 = 0,
        P256 = 1,
        P384 = 2,
        P521 = 3,
    }
}

hal_enum! {
    KeyBlobUsageRequirements {
        #[default]
        Standalone = 0,
        RequiresFileSystem = 1,
    }
}

/// Authenticators accepted for a key, the payload of `USER_AUTH_TYPE`.
///
/// This is a bit set rather than a closed enumeration: `PASSWORD | FINGERPRINT`
/// is as valid a payload as either one alone, and every `u32` is a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HardwareAuthenticatorType(u32);

impl HardwareAuthenticatorType {
    pub const NONE: Self = HardwareAuthenticatorType(0);
    pub const PASSWORD: Self = HardwareAuthenticatorType(1);
    pub const FINGERPRINT: Self = HardwareAuthenticatorType(1 << 1);
    pub const ANY: Self = HardwareAuthenticatorType(u32::MAX);

    pub const fn from_bits(bits: u32) -> Self {
        HardwareAuthenticatorType(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if every authenticator in `other` is also in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for HardwareAuthenticatorType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        HardwareAuthenticatorType(self.0 | rhs.0)
    }
}

impl BitOrAssign for HardwareAuthenticatorType {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<u32> for HardwareAuthenticatorType {
    fn from(bits: u32) -> Self {
        HardwareAuthenticatorType(bits)
    }
}

impl From<HardwareAuthenticatorType> for u32 {
    fn from(value: HardwareAuthenticatorType) -> u32 {
        value.0
    }
}

hal_enum! {
    KeyOrigin {
        #[default]
        Generated = 0,
        Derived = 1,
        Imported = 2,
        Unknown = 3,
        SecurelyImported = 4,
    }
}

hal_enum! {
    /// Payload of `HARDWARE_TYPE`.
    SecurityLevel {
        #[default]
        Software = 0,
        TrustedEnvironment = 1,
        Strongbox = 2,
    }
}

/// Numeric payload storage of a key parameter.
///
/// Exactly one field is meaningful at a time, selected by the record's tag.
/// The rest keep their defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IntegerParams {
    pub algorithm: Algorithm,
    pub block_mode: BlockMode,
    pub padding_mode: PaddingMode,
    pub digest: Digest,
    pub ec_curve: EcCurve,
    pub origin: KeyOrigin,
    pub key_blob_usage_requirements: KeyBlobUsageRequirements,
    pub purpose: KeyPurpose,
    pub hardware_authenticator_type: HardwareAuthenticatorType,
    pub hardware_type: SecurityLevel,
    pub bool_value: bool,
    pub integer: u32,
    pub long_integer: u64,
    pub date_time: u64,
}

/// A single key authorization: a tag plus the payload it selects.
///
/// Equality is tag-aware and lives in `equality.rs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyParameter {
    pub tag: Tag,
    pub f: IntegerParams,
    /// Payload of `BYTES` and `BIGNUM` tags.
    pub blob: BString,
}
