//! Type-safe key parameters
//!
//! A [`KeyParameter`] is a tag plus one payload field per category. Picking
//! the field by hand makes it easy to store an [`Algorithm`] under
//! `PURPOSE`; building and reading parameters through the typed tags in
//! [`typed`] makes that mistake a compile error instead.
//!
//! ```
//! use kmtag_core::*;
//!
//! let sign = authorization(TAG_PURPOSE, KeyPurpose::Sign);
//! assert_eq!(authorization_value(TAG_PURPOSE, &sign).copied().value(), KeyPurpose::Sign);
//! assert!(!authorization_value(TAG_ALGORITHM, &sign).is_ok());
//! assert_eq!(sign, authorization(TAG_PURPOSE, KeyPurpose::Sign));
//! assert_ne!(sign, authorization(TAG_PURPOSE, KeyPurpose::Verify));
//!
//! let no_auth = flag(TAG_NO_AUTH_REQUIRED);
//! assert_eq!(authorization_value(TAG_NO_AUTH_REQUIRED, &no_auth).get(), Some(&&true));
//! ```

pub mod authorization;
pub mod data;
pub mod equality;
pub mod error;
pub mod null_or;
pub mod tag;
pub mod typed;

pub use authorization::{
    access_tag_value, access_tag_value_mut, authorization, authorization_value,
    find_authorization_value, flag,
};
pub use data::{
    Algorithm, BlockMode, Digest, EcCurve, HardwareAuthenticatorType, IntegerParams,
    KeyBlobUsageRequirements, KeyOrigin, KeyParameter, KeyPurpose, PaddingMode, SecurityLevel,
    Tag, TagType,
};
pub use error::TagError;
pub use null_or::{default_or, first_ok, NullOr};
pub use tag::{
    category_of, category_of_raw, masked_tag, normalize_legacy_tag, ALL_TAGS, KM_TAG_DIGEST_OLD,
    KM_TAG_FBE_ICE, KM_TAG_KEY_TYPE, KM_TAG_PADDING_OLD, TAG_NUMBER_MASK, TAG_TYPE_MASK,
};
pub use typed::*;
