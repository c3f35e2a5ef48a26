//! Typed tags
//!
//! A [`TypedTag`] is a zero sized token that carries a tag identity and its
//! category in its type. The category is checked against the identity's
//! number when the token is built, so a typed tag whose category disagrees
//! with its tag cannot exist in a program that compiles:
//!
//! ```compile_fail
//! use kmtag_core::{Tag, TagType, TypedTag};
//!
//! // PURPOSE is a repeatable enumeration, not an integer.
//! let bad = TypedTag::<{ TagType::Uint as u32 }, { Tag::Purpose as u32 }>::new();
//! ```
//!
//! The same check guards the field accessors, so naming such a type without
//! building a token is rejected as well:
//!
//! ```compile_fail
//! use kmtag_core::*;
//!
//! let param = authorization(TAG_PURPOSE, KeyPurpose::Sign);
//! let raw = <TypedTag<{ TagType::Uint as u32 }, { Tag::Purpose as u32 }> as TagValue>::access(&param);
//! ```
//!
//! Each typed tag is bound to one payload type through [`TagValue`]. Scalar
//! categories share a binding (every `UINT` tag reads `f.integer`), while
//! each enumeration tag has its own. The declared constants at the bottom of
//! this module are the single table of tag identities usable through the
//! typed API.

use crate::data::{
    Algorithm, BlockMode, Digest, EcCurve, HardwareAuthenticatorType, KeyBlobUsageRequirements,
    KeyOrigin, KeyParameter, KeyPurpose, PaddingMode, SecurityLevel, Tag, TagType,
};
use crate::tag::{category_of, masked_tag, TAG_TYPE_MASK};
use bstr::BString;
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Zero sized binding of a tag identity (`ID`) to its category (`TY`).
///
/// Both parameters are the raw numbers, `TagType::X as u32` and
/// `Tag::Y as u32`. Use the declared `TAG_*` constants rather than naming
/// this type directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypedTag<const TY: u32, const ID: u32> {
    _bound: (),
}

impl<const TY: u32, const ID: u32> TypedTag<TY, ID> {
    const CHECKED: () = {
        assert!(Tag::from_raw(ID).is_some(), "not a declared tag identity");
        assert!(ID & TAG_TYPE_MASK == TY, "mismatch between tag and tag_type");
    };

    /// Fails to compile unless `TY` is the category encoded in `ID`.
    #[allow(clippy::let_unit_value)]
    pub const fn new() -> Self {
        let () = Self::CHECKED;
        TypedTag { _bound: () }
    }
}

impl<const TY: u32, const ID: u32> Default for TypedTag<TY, ID> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile-time facts about a typed tag.
pub trait KeyTag: Copy + sealed::Sealed {
    const TAG: Tag;
    const TAG_TYPE: TagType;

    fn tag(self) -> Tag {
        Self::TAG
    }

    fn tag_type(self) -> TagType {
        Self::TAG_TYPE
    }

    fn masked_tag(self) -> u32 {
        masked_tag(Self::TAG)
    }
}

impl<const TY: u32, const ID: u32> sealed::Sealed for TypedTag<TY, ID> {}

impl<const TY: u32, const ID: u32> KeyTag for TypedTag<TY, ID> {
    const TAG: Tag = match Tag::from_raw(ID) {
        Some(tag) => tag,
        None => panic!("not a declared tag identity"),
    };
    const TAG_TYPE: TagType = TagType::from_bits(TY);
}

impl<const TY: u32, const ID: u32> From<TypedTag<TY, ID>> for Tag {
    fn from(typed: TypedTag<TY, ID>) -> Tag {
        typed.tag()
    }
}

impl<const TY: u32, const ID: u32> PartialEq<Tag> for TypedTag<TY, ID> {
    fn eq(&self, other: &Tag) -> bool {
        <Self as KeyTag>::TAG == *other
    }
}

impl<const TY: u32, const ID: u32> fmt::Debug for TypedTag<TY, ID> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TAG_{}", <Self as KeyTag>::TAG)
    }
}

/// Binding of a typed tag to its payload type and the record field holding it.
///
/// Sealed: the only implementations are the ones in this module.
pub trait TagValue: KeyTag {
    type Value: Clone + PartialEq + fmt::Debug + 'static;

    /// The field this tag's payload lives in. Does not look at `param.tag`.
    ///
    /// Fails to compile for a category that disagrees with the identity,
    /// the same way [`TypedTag::new`] does.
    fn access(param: &KeyParameter) -> &Self::Value;

    fn access_mut(param: &mut KeyParameter) -> &mut Self::Value;
}

/// `BOOL` tags. Built without a value; presence is truth.
pub trait FlagTag: TagValue<Value = bool> {}

/// Every other bound tag. Built from exactly one value.
pub trait ValueTag: TagValue {}

/// Payload type bound to a typed tag.
pub type ValueOf<T> = <T as TagValue>::Value;

macro_rules! category_accessors {
    ($($tag_type:ident => $value:ty, $($field:ident).+;)*) => {
        $(
            impl<const ID: u32> TagValue for TypedTag<{ TagType::$tag_type as u32 }, ID> {
                type Value = $value;

                #[allow(clippy::let_unit_value)]
                fn access(param: &KeyParameter) -> &$value {
                    let () = Self::CHECKED;
                    &param.$($field).+
                }

                #[allow(clippy::let_unit_value)]
                fn access_mut(param: &mut KeyParameter) -> &mut $value {
                    let () = Self::CHECKED;
                    &mut param.$($field).+
                }
            }
        )*
    };
}

category_accessors! {
    Ulong => u64, f.long_integer;
    UlongRep => u64, f.long_integer;
    Date => u64, f.date_time;
    Uint => u32, f.integer;
    UintRep => u32, f.integer;
    Bool => bool, f.bool_value;
    Bytes => BString, blob;
    Bignum => BString, blob;
}

impl<const ID: u32> FlagTag for TypedTag<{ TagType::Bool as u32 }, ID> {}

macro_rules! value_categories {
    ($($tag_type:ident),*) => {
        $(
            impl<const ID: u32> ValueTag for TypedTag<{ TagType::$tag_type as u32 }, ID> {}
        )*
    };
}

value_categories!(Ulong, UlongRep, Date, Uint, UintRep, Bytes, Bignum);

// Enumeration tags share a category but not a payload type, so each one is
// bound on its own.
macro_rules! enum_accessors {
    ($($typed_tag:ty => $value:ty, $field:ident;)*) => {
        $(
            impl TagValue for $typed_tag {
                type Value = $value;

                #[allow(clippy::let_unit_value)]
                fn access(param: &KeyParameter) -> &$value {
                    let () = <$typed_tag>::CHECKED;
                    &param.f.$field
                }

                #[allow(clippy::let_unit_value)]
                fn access_mut(param: &mut KeyParameter) -> &mut $value {
                    let () = <$typed_tag>::CHECKED;
                    &mut param.f.$field
                }
            }

            impl ValueTag for $typed_tag {}
        )*
    };
}

enum_accessors! {
    AlgorithmTag => Algorithm, algorithm;
    BlobUsageRequirementsTag => KeyBlobUsageRequirements, key_blob_usage_requirements;
    BlockModeTag => BlockMode, block_mode;
    DigestTag => Digest, digest;
    EcCurveTag => EcCurve, ec_curve;
    OriginTag => KeyOrigin, origin;
    PaddingTag => PaddingMode, padding_mode;
    PurposeTag => KeyPurpose, purpose;
    UserAuthTypeTag => HardwareAuthenticatorType, hardware_authenticator_type;
    HardwareTypeTag => SecurityLevel, hardware_type;
}

macro_rules! declare_typed_tags {
    ($($name:ident: $alias:ident = $tag:ident;)*) => {
        $(
            #[doc = concat!("Typed tag type of `Tag::", stringify!($tag), "`.")]
            pub type $alias = TypedTag<{ category_of(Tag::$tag) as u32 }, { Tag::$tag as u32 }>;

            #[doc = concat!("Typed tag for `Tag::", stringify!($tag), "`.")]
            pub const $name: $alias = TypedTag::new();
        )*
    };
}

declare_typed_tags! {
    TAG_ACTIVE_DATETIME: ActiveDatetimeTag = ActiveDatetime;
    TAG_ALGORITHM: AlgorithmTag = Algorithm;
    TAG_ALLOW_WHILE_ON_BODY: AllowWhileOnBodyTag = AllowWhileOnBody;
    TAG_APPLICATION_DATA: ApplicationDataTag = ApplicationData;
    TAG_APPLICATION_ID: ApplicationIdTag = ApplicationId;
    TAG_ASSOCIATED_DATA: AssociatedDataTag = AssociatedData;
    TAG_ATTESTATION_APPLICATION_ID: AttestationApplicationIdTag = AttestationApplicationId;
    TAG_ATTESTATION_CHALLENGE: AttestationChallengeTag = AttestationChallenge;
    TAG_ATTESTATION_ID_BRAND: AttestationIdBrandTag = AttestationIdBrand;
    TAG_ATTESTATION_ID_DEVICE: AttestationIdDeviceTag = AttestationIdDevice;
    TAG_ATTESTATION_ID_IMEI: AttestationIdImeiTag = AttestationIdImei;
    TAG_ATTESTATION_ID_MANUFACTURER: AttestationIdManufacturerTag = AttestationIdManufacturer;
    TAG_ATTESTATION_ID_MEID: AttestationIdMeidTag = AttestationIdMeid;
    TAG_ATTESTATION_ID_MODEL: AttestationIdModelTag = AttestationIdModel;
    TAG_ATTESTATION_ID_PRODUCT: AttestationIdProductTag = AttestationIdProduct;
    TAG_ATTESTATION_ID_SERIAL: AttestationIdSerialTag = AttestationIdSerial;
    TAG_AUTH_TIMEOUT: AuthTimeoutTag = AuthTimeout;
    TAG_BLOB_USAGE_REQUIREMENTS: BlobUsageRequirementsTag = BlobUsageRequirements;
    TAG_BLOCK_MODE: BlockModeTag = BlockMode;
    TAG_BOOTLOADER_ONLY: BootloaderOnlyTag = BootloaderOnly;
    TAG_BOOT_PATCHLEVEL: BootPatchlevelTag = BootPatchlevel;
    TAG_CALLER_NONCE: CallerNonceTag = CallerNonce;
    TAG_CONFIRMATION_TOKEN: ConfirmationTokenTag = ConfirmationToken;
    TAG_CREATION_DATETIME: CreationDatetimeTag = CreationDatetime;
    TAG_DIGEST: DigestTag = Digest;
    TAG_EC_CURVE: EcCurveTag = EcCurve;
    TAG_HARDWARE_TYPE: HardwareTypeTag = HardwareType;
    TAG_INCLUDE_UNIQUE_ID: IncludeUniqueIdTag = IncludeUniqueId;
    TAG_INVALID: InvalidTag = Invalid;
    TAG_KEY_SIZE: KeySizeTag = KeySize;
    TAG_MAC_LENGTH: MacLengthTag = MacLength;
    TAG_MAX_USES_PER_BOOT: MaxUsesPerBootTag = MaxUsesPerBoot;
    TAG_MIN_MAC_LENGTH: MinMacLengthTag = MinMacLength;
    TAG_MIN_SECONDS_BETWEEN_OPS: MinSecondsBetweenOpsTag = MinSecondsBetweenOps;
    TAG_NONCE: NonceTag = Nonce;
    TAG_NO_AUTH_REQUIRED: NoAuthRequiredTag = NoAuthRequired;
    TAG_ORIGIN: OriginTag = Origin;
    TAG_ORIGINATION_EXPIRE_DATETIME: OriginationExpireDatetimeTag = OriginationExpireDatetime;
    TAG_OS_PATCHLEVEL: OsPatchlevelTag = OsPatchlevel;
    TAG_OS_VERSION: OsVersionTag = OsVersion;
    TAG_PADDING: PaddingTag = Padding;
    TAG_PURPOSE: PurposeTag = Purpose;
    TAG_RESET_SINCE_ID_ROTATION: ResetSinceIdRotationTag = ResetSinceIdRotation;
    TAG_ROLLBACK_RESISTANCE: RollbackResistanceTag = RollbackResistance;
    TAG_ROOT_OF_TRUST: RootOfTrustTag = RootOfTrust;
    TAG_RSA_PUBLIC_EXPONENT: RsaPublicExponentTag = RsaPublicExponent;
    TAG_TRUSTED_CONFIRMATION_REQUIRED: TrustedConfirmationRequiredTag = TrustedConfirmationRequired;
    TAG_TRUSTED_USER_PRESENCE_REQUIRED: TrustedUserPresenceRequiredTag = TrustedUserPresenceRequired;
    TAG_UNIQUE_ID: UniqueIdTag = UniqueId;
    TAG_UNLOCKED_DEVICE_REQUIRED: UnlockedDeviceRequiredTag = UnlockedDeviceRequired;
    TAG_USAGE_EXPIRE_DATETIME: UsageExpireDatetimeTag = UsageExpireDatetime;
    TAG_USER_AUTH_TYPE: UserAuthTypeTag = UserAuthType;
    TAG_USER_ID: UserIdTag = UserId;
    TAG_USER_SECURE_ID: UserSecureIdTag = UserSecureId;
    TAG_VENDOR_PATCHLEVEL: VendorPatchlevelTag = VendorPatchlevel;
}
