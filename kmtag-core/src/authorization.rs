//! Building and reading key parameters through typed tags
//!
//! ```
//! use kmtag_core::*;
//!
//! let param = authorization(TAG_ALGORITHM, Algorithm::Rsa);
//! assert!(!authorization_value(TAG_PURPOSE, &param).is_ok());
//! assert_eq!(authorization_value(TAG_ALGORITHM, &param).get(), Some(&&Algorithm::Rsa));
//! ```
//!
//! Values that do not fit the tag are rejected by the compiler:
//!
//! ```compile_fail
//! use kmtag_core::*;
//!
//! let param = authorization(TAG_PURPOSE, Algorithm::Rsa);
//! ```
//!
//! Boolean tags take no value, and every other tag needs one:
//!
//! ```compile_fail
//! use kmtag_core::*;
//!
//! let param = authorization(TAG_NO_AUTH_REQUIRED, true);
//! ```
//!
//! ```compile_fail
//! use kmtag_core::*;
//!
//! let param = flag(TAG_KEY_SIZE);
//! ```

use crate::data::KeyParameter;
use crate::null_or::{first_ok, NullOr};
use crate::typed::{FlagTag, KeyTag, TagValue, ValueTag};

/// The field `tag`'s payload lives in.
///
/// Trusts the caller that `param` was built with `tag`; use
/// [`authorization_value`] when that is not known.
pub fn access_tag_value<T: TagValue>(_tag: T, param: &KeyParameter) -> &T::Value {
    T::access(param)
}

/// Writable form of [`access_tag_value`].
pub fn access_tag_value_mut<T: TagValue>(_tag: T, param: &mut KeyParameter) -> &mut T::Value {
    T::access_mut(param)
}

// Fresh record with every payload field at its default, so nothing left
// over from another category can be read back.
fn blank_parameter<T: KeyTag>(tag: T) -> KeyParameter {
    KeyParameter {
        tag: tag.tag(),
        ..KeyParameter::default()
    }
}

/// A key parameter carrying `value` under `tag`.
///
/// Integer literals need a suffix (`256u32`) since the value only has to be
/// convertible into the bound type.
pub fn authorization<T, V>(tag: T, value: V) -> KeyParameter
where
    T: ValueTag,
    V: Into<T::Value>,
{
    let mut param = blank_parameter(tag);
    *access_tag_value_mut(tag, &mut param) = value.into();
    param
}

/// A key parameter asserting the boolean `tag`.
pub fn flag<T: FlagTag>(tag: T) -> KeyParameter {
    let mut param = blank_parameter(tag);
    *access_tag_value_mut(tag, &mut param) = true;
    param
}

/// `param`'s payload if it was built with `tag`, otherwise empty.
pub fn authorization_value<T: TagValue>(tag: T, param: &KeyParameter) -> NullOr<&T::Value> {
    if param.tag != tag.tag() {
        return NullOr::null();
    }
    NullOr::new(access_tag_value(tag, param))
}

/// Payload of the first parameter in `params` built with `tag`.
pub fn find_authorization_value<T: TagValue>(
    tag: T,
    params: &[KeyParameter],
) -> NullOr<&T::Value> {
    first_ok(params.iter().map(|param| authorization_value(tag, param)))
}
