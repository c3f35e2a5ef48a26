// Tag catalog - category derivation and raw number handling

use crate::data::{Tag, TagType};
use crate::error::{Result, TagError};
use std::fmt;
use tracing::{debug, trace};

/// Bits of a tag number holding its [`TagType`].
pub const TAG_TYPE_MASK: u32 = 0xF000_0000;

/// Bits of a tag number holding the tag's own number.
pub const TAG_NUMBER_MASK: u32 = 0x0FFF_FFFF;

/// Number `DIGEST` had before it became repeatable. Old keys still carry it.
pub const KM_TAG_DIGEST_OLD: u32 = TagType::Enum as u32 | 5;

/// Number `PADDING` had before it became repeatable. Old keys still carry it.
pub const KM_TAG_PADDING_OLD: u32 = TagType::Enum as u32 | 7;

/// Vendor tag reserved for inline crypto engine keys. Not a catalog identity.
pub const KM_TAG_FBE_ICE: u32 = TagType::Bool as u32 | 16201;

/// Vendor tag reserved for the key type. Not a catalog identity.
pub const KM_TAG_KEY_TYPE: u32 = TagType::Uint as u32 | 16202;

/// Every declared tag identity, in catalog order.
pub const ALL_TAGS: &[Tag] = Tag::ALL;

/// Category of a tag, read off the high bits of its number.
pub const fn category_of(tag: Tag) -> TagType {
    TagType::from_bits(tag as u32)
}

/// Category of an arbitrary number, or `None` if the high bits are not a
/// known category.
pub const fn category_of_raw(raw: u32) -> Option<TagType> {
    TagType::from_raw(raw & TAG_TYPE_MASK)
}

/// The tag's own number with the category bits cleared.
pub const fn masked_tag(tag: Tag) -> u32 {
    tag as u32 & TAG_NUMBER_MASK
}

impl TagType {
    /// Strict lookup of a category by its encoding. Any bit below the mask
    /// makes the lookup fail.
    pub const fn from_raw(raw: u32) -> Option<TagType> {
        if raw & TAG_NUMBER_MASK != 0 {
            return None;
        }
        match raw >> 28 {
            0 => Some(TagType::Invalid),
            1 => Some(TagType::Enum),
            2 => Some(TagType::EnumRep),
            3 => Some(TagType::Uint),
            4 => Some(TagType::UintRep),
            5 => Some(TagType::Ulong),
            6 => Some(TagType::Date),
            7 => Some(TagType::Bool),
            8 => Some(TagType::Bignum),
            9 => Some(TagType::Bytes),
            10 => Some(TagType::UlongRep),
            _ => None,
        }
    }

    /// Category selected by the high bits of `raw`; the low bits are
    /// ignored. High bits outside the known encodings classify as `Invalid`.
    pub const fn from_bits(raw: u32) -> TagType {
        match TagType::from_raw(raw & TAG_TYPE_MASK) {
            Some(tag_type) => tag_type,
            None => TagType::Invalid,
        }
    }

    pub const fn is_repeatable(self) -> bool {
        matches!(
            self,
            TagType::EnumRep | TagType::UintRep | TagType::UlongRep
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            TagType::Invalid => "INVALID",
            TagType::Enum => "ENUM",
            TagType::EnumRep => "ENUM_REP",
            TagType::Uint => "UINT",
            TagType::UintRep => "UINT_REP",
            TagType::Ulong => "ULONG",
            TagType::Date => "DATE",
            TagType::Bool => "BOOL",
            TagType::Bignum => "BIGNUM",
            TagType::Bytes => "BYTES",
            TagType::UlongRep => "ULONG_REP",
        }
    }
}

impl Tag {
    pub const fn raw(self) -> u32 {
        self as u32
    }

    pub const fn tag_type(self) -> TagType {
        category_of(self)
    }

    /// Like [`Tag::from_raw`], but also accepts the numbers `DIGEST` and
    /// `PADDING` had in older interface versions.
    pub fn from_raw_compat(raw: u32) -> Option<Tag> {
        match raw {
            KM_TAG_DIGEST_OLD => {
                debug!(raw, tag = "DIGEST", "mapped legacy tag number");
                Some(Tag::Digest)
            }
            KM_TAG_PADDING_OLD => {
                debug!(raw, tag = "PADDING", "mapped legacy tag number");
                Some(Tag::Padding)
            }
            _ => Tag::from_raw(raw),
        }
    }
}

/// Interpret a tag number read from previously stored data.
pub fn normalize_legacy_tag(raw: u32) -> Result<Tag> {
    Tag::from_raw_compat(raw).ok_or_else(|| {
        trace!(raw, "rejected unknown tag number");
        TagError::UnknownTag(raw)
    })
}

impl TryFrom<u32> for Tag {
    type Error = TagError;

    fn try_from(raw: u32) -> Result<Self> {
        Tag::from_raw(raw).ok_or_else(|| {
            trace!(raw, "rejected unknown tag number");
            TagError::UnknownTag(raw)
        })
    }
}

impl From<Tag> for u32 {
    fn from(tag: Tag) -> u32 {
        tag as u32
    }
}

impl TryFrom<u32> for TagType {
    type Error = TagError;

    fn try_from(raw: u32) -> Result<Self> {
        TagType::from_raw(raw).ok_or(TagError::UnknownTagType(raw))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
