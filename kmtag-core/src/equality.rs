// Tag-aware equality for key parameters
//
// Only the field selected by the tag takes part in the comparison. The match
// below names every tag identity and has no wildcard arm, so a tag added to
// the catalog without a comparison here does not compile.

use crate::data::{KeyParameter, Tag};

impl PartialEq for KeyParameter {
    fn eq(&self, other: &Self) -> bool {
        if self.tag != other.tag {
            return false;
        }

        let (a, b) = (&self.f, &other.f);
        match self.tag {
            // Boolean tags: presence is the only information.
            Tag::Invalid
            | Tag::CallerNonce
            | Tag::IncludeUniqueId
            | Tag::BootloaderOnly
            | Tag::NoAuthRequired
            | Tag::AllowWhileOnBody
            | Tag::UnlockedDeviceRequired
            | Tag::RollbackResistance
            | Tag::ResetSinceIdRotation
            | Tag::TrustedConfirmationRequired
            | Tag::TrustedUserPresenceRequired => true,

            Tag::KeySize
            | Tag::MinMacLength
            | Tag::MinSecondsBetweenOps
            | Tag::MaxUsesPerBoot
            | Tag::OsVersion
            | Tag::OsPatchlevel
            | Tag::MacLength
            | Tag::UserId
            | Tag::AuthTimeout
            | Tag::VendorPatchlevel
            | Tag::BootPatchlevel => a.integer == b.integer,

            Tag::RsaPublicExponent | Tag::UserSecureId => a.long_integer == b.long_integer,

            Tag::ActiveDatetime
            | Tag::OriginationExpireDatetime
            | Tag::UsageExpireDatetime
            | Tag::CreationDatetime => a.date_time == b.date_time,

            Tag::ApplicationId
            | Tag::ApplicationData
            | Tag::RootOfTrust
            | Tag::UniqueId
            | Tag::AttestationChallenge
            | Tag::AttestationApplicationId
            | Tag::AttestationIdBrand
            | Tag::AttestationIdDevice
            | Tag::AttestationIdProduct
            | Tag::AttestationIdSerial
            | Tag::AttestationIdImei
            | Tag::AttestationIdMeid
            | Tag::AttestationIdManufacturer
            | Tag::AttestationIdModel
            | Tag::AssociatedData
            | Tag::ConfirmationToken
            | Tag::Nonce => self.blob == other.blob,

            Tag::Purpose => a.purpose == b.purpose,
            Tag::Algorithm => a.algorithm == b.algorithm,
            Tag::BlockMode => a.block_mode == b.block_mode,
            Tag::Digest => a.digest == b.digest,
            Tag::Padding => a.padding_mode == b.padding_mode,
            Tag::EcCurve => a.ec_curve == b.ec_curve,
            Tag::BlobUsageRequirements => {
                a.key_blob_usage_requirements == b.key_blob_usage_requirements
            }
            Tag::UserAuthType => a.hardware_authenticator_type == b.hardware_authenticator_type,
            Tag::Origin => a.origin == b.origin,
            Tag::HardwareType => a.hardware_type == b.hardware_type,
        }
    }
}

impl Eq for KeyParameter {}
