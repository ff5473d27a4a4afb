//! Authorization metadata and local-list conversion.

use crate::domain::{AuthorisationData, IdTagInfo, UpdateStatus};
use crate::error::{CodecError, CodecResult};
use crate::v16::enums;
use crate::v16::message as wire;

pub(super) fn id_tag_info_to_wire(info: &IdTagInfo) -> wire::IdTagInfo {
    wire::IdTagInfo {
        status: enums::AUTHORIZATION_STATUS.to_wire(info.status).to_string(),
        expiry_date: info.expiry_date,
        parent_id_tag: info.parent_id_tag.clone(),
    }
}

pub(super) fn id_tag_info_from_wire(info: &wire::IdTagInfo) -> CodecResult<IdTagInfo> {
    Ok(IdTagInfo {
        status: enums::AUTHORIZATION_STATUS.from_wire(&info.status)?,
        expiry_date: info.expiry_date,
        parent_id_tag: info.parent_id_tag.clone(),
    })
}

/// Presence of the wire `idTagInfo` sub-record decides between an addition
/// and a removal.
pub(super) fn authorisation_data_to_wire(data: &AuthorisationData) -> wire::AuthorisationData {
    match data {
        AuthorisationData::Add {
            id_tag,
            id_tag_info,
        } => wire::AuthorisationData {
            id_tag: id_tag.clone(),
            id_tag_info: Some(id_tag_info_to_wire(id_tag_info)),
        },
        AuthorisationData::Remove { id_tag } => wire::AuthorisationData {
            id_tag: id_tag.clone(),
            id_tag_info: None,
        },
    }
}

pub(super) fn authorisation_data_from_wire(
    data: &wire::AuthorisationData,
) -> CodecResult<AuthorisationData> {
    Ok(match &data.id_tag_info {
        Some(info) => AuthorisationData::Add {
            id_tag: data.id_tag.clone(),
            id_tag_info: id_tag_info_from_wire(info)?,
        },
        None => AuthorisationData::Remove {
            id_tag: data.id_tag.clone(),
        },
    })
}

/// The 1.6 wire has no field for the accepted-update hash; it is dropped
/// here and never reconstructed.
pub(super) fn update_status_to_wire(status: &UpdateStatus) -> String {
    match status {
        UpdateStatus::Accepted { .. } => "Accepted",
        UpdateStatus::Failed => "Failed",
        UpdateStatus::NotSupported => "NotSupported",
        UpdateStatus::VersionMismatch => "VersionMismatch",
    }
    .to_string()
}

pub(super) fn update_status_from_wire(status: &str) -> CodecResult<UpdateStatus> {
    match status {
        "Accepted" => Ok(UpdateStatus::Accepted { hash: None }),
        "Failed" => Ok(UpdateStatus::Failed),
        "NotSupported" => Ok(UpdateStatus::NotSupported),
        "VersionMismatch" => Ok(UpdateStatus::VersionMismatch),
        other => Err(CodecError::UnrecognizedEnumValue {
            enumeration: "UpdateStatus",
            value: other.to_string(),
        }),
    }
}
