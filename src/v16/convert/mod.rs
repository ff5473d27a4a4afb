//! Message conversion: one rule per operation, per direction.
//!
//! [`to_wire`] and [`from_wire`] dispatch over the closed message sets and
//! compose the enumeration tables and the composite converters. Both are
//! pure; nothing here holds state between calls.

mod auth;
mod charging;
mod meter;
mod status;

use std::fmt;

use chrono::Duration;
use tracing::warn;
use url::Url;

use crate::domain::{
    self, AuthListVersion, ConnectorScope, MessageTrigger, Retries, Scope,
};
use crate::error::{CodecError, CodecResult};
use crate::v16::enums::{self, EnumTable};
use crate::v16::message as wire;

/// Encode a domain message as its OCPP-J 1.6 wire record.
///
/// Fails for domain values that cannot be represented in 1.6 (an occupied
/// status without its kind) and for message variants that have no 1.6
/// encoding at all.
pub fn to_wire(msg: &domain::Message) -> CodecResult<wire::Message> {
    use crate::domain::Message as D;
    use crate::v16::message::Message as W;

    let encoded = match msg {
        // Charge point → central system
        D::AuthorizeReq(req) => W::AuthorizeReq(wire::AuthorizeReq {
            id_tag: req.id_tag.clone(),
        }),
        D::AuthorizeRes(res) => W::AuthorizeRes(wire::AuthorizeRes {
            id_tag_info: auth::id_tag_info_to_wire(&res.id_tag_info),
        }),
        D::BootNotificationReq(req) => W::BootNotificationReq(wire::BootNotificationReq {
            charge_point_vendor: req.charge_point_vendor.clone(),
            charge_point_model: req.charge_point_model.clone(),
            charge_point_serial_number: req.charge_point_serial_number.clone(),
            charge_box_serial_number: req.charge_box_serial_number.clone(),
            firmware_version: req.firmware_version.clone(),
            iccid: req.iccid.clone(),
            imsi: req.imsi.clone(),
            meter_type: req.meter_type.clone(),
            meter_serial_number: req.meter_serial_number.clone(),
        }),
        D::BootNotificationRes(res) => W::BootNotificationRes(wire::BootNotificationRes {
            status: enums::REGISTRATION_STATUS.to_wire(res.status).to_string(),
            current_time: res.current_time,
            interval: seconds_to_wire(res.interval),
        }),
        D::DiagnosticsStatusNotificationReq(req) => {
            W::DiagnosticsStatusNotificationReq(wire::DiagnosticsStatusNotificationReq {
                status: enums::DIAGNOSTICS_STATUS.to_wire(req.status).to_string(),
            })
        }
        D::DiagnosticsStatusNotificationRes => {
            W::DiagnosticsStatusNotificationRes(wire::DiagnosticsStatusNotificationRes {})
        }
        D::FirmwareStatusNotificationReq(req) => {
            W::FirmwareStatusNotificationReq(wire::FirmwareStatusNotificationReq {
                status: enums::FIRMWARE_STATUS.to_wire(req.status).to_string(),
            })
        }
        D::FirmwareStatusNotificationRes => {
            W::FirmwareStatusNotificationRes(wire::FirmwareStatusNotificationRes {})
        }
        D::HeartbeatReq => W::HeartbeatReq(wire::HeartbeatReq {}),
        D::HeartbeatRes(res) => W::HeartbeatRes(wire::HeartbeatRes {
            current_time: res.current_time,
        }),
        D::MeterValuesReq(req) => W::MeterValuesReq(wire::MeterValuesReq {
            connector_id: req.scope.to_ocpp(),
            transaction_id: req.transaction_id,
            meter_value: req.meters.iter().map(meter::to_wire).collect(),
        }),
        D::MeterValuesRes => W::MeterValuesRes(wire::MeterValuesRes {}),
        D::StartTransactionReq(req) => W::StartTransactionReq(wire::StartTransactionReq {
            connector_id: req.connector.to_ocpp(),
            id_tag: req.id_tag.clone(),
            timestamp: req.timestamp,
            meter_start: req.meter_start,
            reservation_id: req.reservation_id,
        }),
        D::StartTransactionRes(res) => W::StartTransactionRes(wire::StartTransactionRes {
            transaction_id: res.transaction_id,
            id_tag_info: auth::id_tag_info_to_wire(&res.id_tag_info),
        }),
        D::StatusNotificationReq(req) => {
            let fields = status::to_wire(&req.status)?;
            W::StatusNotificationReq(wire::StatusNotificationReq {
                connector_id: req.scope.to_ocpp(),
                status: fields.status,
                error_code: fields.error_code,
                info: fields.info,
                timestamp: req.timestamp,
                vendor_id: req.vendor_id.clone(),
                vendor_error_code: fields.vendor_error_code,
            })
        }
        D::StatusNotificationRes => W::StatusNotificationRes(wire::StatusNotificationRes {}),
        D::StopTransactionReq(req) => W::StopTransactionReq(wire::StopTransactionReq {
            transaction_id: req.transaction_id,
            id_tag: req.id_tag.clone(),
            timestamp: req.timestamp,
            meter_stop: req.meter_stop,
            reason: elide(&enums::STOP_REASON, req.reason),
            transaction_data: if req.meters.is_empty() {
                None
            } else {
                Some(req.meters.iter().map(meter::to_wire).collect())
            },
        }),
        D::StopTransactionRes(res) => W::StopTransactionRes(wire::StopTransactionRes {
            id_tag_info: res.id_tag_info.as_ref().map(auth::id_tag_info_to_wire),
        }),
        D::CentralSystemDataTransferReq(_) => {
            return unsupported("CentralSystemDataTransferReq");
        }
        D::CentralSystemDataTransferRes(_) => {
            return unsupported("CentralSystemDataTransferRes");
        }

        // Central system → charge point
        D::CancelReservationReq(req) => W::CancelReservationReq(wire::CancelReservationReq {
            reservation_id: req.reservation_id,
        }),
        D::CancelReservationRes(res) => W::CancelReservationRes(wire::CancelReservationRes {
            status: accepted_to_wire(res.accepted),
        }),
        D::ChangeAvailabilityReq(req) => W::ChangeAvailabilityReq(wire::ChangeAvailabilityReq {
            connector_id: req.scope.to_ocpp(),
            availability_type: enums::AVAILABILITY_TYPE
                .to_wire(req.availability_type)
                .to_string(),
        }),
        D::ChangeAvailabilityRes(res) => W::ChangeAvailabilityRes(wire::ChangeAvailabilityRes {
            status: enums::AVAILABILITY_STATUS.to_wire(res.status).to_string(),
        }),
        D::ChangeConfigurationReq(req) => W::ChangeConfigurationReq(wire::ChangeConfigurationReq {
            key: req.key.clone(),
            value: req.value.clone(),
        }),
        D::ChangeConfigurationRes(res) => W::ChangeConfigurationRes(wire::ChangeConfigurationRes {
            status: enums::CONFIGURATION_STATUS.to_wire(res.status).to_string(),
        }),
        D::ClearCacheReq => W::ClearCacheReq(wire::ClearCacheReq {}),
        D::ClearCacheRes(res) => W::ClearCacheRes(wire::ClearCacheRes {
            status: accepted_to_wire(res.accepted),
        }),
        D::ClearChargingProfileReq(req) => {
            W::ClearChargingProfileReq(wire::ClearChargingProfileReq {
                id: req.id,
                connector_id: req.scope.map(Scope::to_ocpp),
                charging_profile_purpose: req
                    .purpose
                    .map(|p| enums::CHARGING_PROFILE_PURPOSE.to_wire(p).to_string()),
                stack_level: req.stack_level,
            })
        }
        D::ClearChargingProfileRes(res) => {
            W::ClearChargingProfileRes(wire::ClearChargingProfileRes {
                status: enums::CLEAR_CHARGING_PROFILE_STATUS
                    .to_wire(res.status)
                    .to_string(),
            })
        }
        D::DataTransferReq(req) => W::DataTransferReq(wire::DataTransferReq {
            vendor_id: req.vendor_id.clone(),
            message_id: req.message_id.clone(),
            data: req.data.clone(),
        }),
        D::DataTransferRes(res) => W::DataTransferRes(wire::DataTransferRes {
            status: enums::DATA_TRANSFER_STATUS.to_wire(res.status).to_string(),
            data: res.data.clone(),
        }),
        D::GetCompositeScheduleReq(req) => {
            W::GetCompositeScheduleReq(wire::GetCompositeScheduleReq {
                connector_id: req.scope.to_ocpp(),
                duration: seconds_to_wire(req.duration),
                charging_rate_unit: req
                    .charging_rate_unit
                    .map(|u| enums::CHARGING_RATE_UNIT.to_wire(u).to_string()),
            })
        }
        D::GetCompositeScheduleRes(res) => {
            use crate::domain::CompositeScheduleStatus as Status;
            W::GetCompositeScheduleRes(match &res.status {
                Status::Accepted {
                    connector_scope,
                    schedule_start,
                    charging_schedule,
                } => wire::GetCompositeScheduleRes {
                    status: accepted_to_wire(true),
                    connector_id: connector_scope.map(Scope::to_ocpp),
                    schedule_start: *schedule_start,
                    charging_schedule: charging_schedule.as_ref().map(charging::schedule_to_wire),
                },
                Status::Rejected => wire::GetCompositeScheduleRes {
                    status: accepted_to_wire(false),
                    connector_id: None,
                    schedule_start: None,
                    charging_schedule: None,
                },
            })
        }
        D::GetConfigurationReq(req) => W::GetConfigurationReq(wire::GetConfigurationReq {
            key: none_if_empty(&req.keys),
        }),
        D::GetConfigurationRes(res) => W::GetConfigurationRes(wire::GetConfigurationRes {
            configuration_key: if res.values.is_empty() {
                None
            } else {
                Some(res.values.iter().map(key_value_to_wire).collect())
            },
            unknown_key: none_if_empty(&res.unknown_keys),
        }),
        D::GetDiagnosticsReq(req) => {
            let (retries, retry_interval) = retries_to_wire(req.retries);
            W::GetDiagnosticsReq(wire::GetDiagnosticsReq {
                location: req.location.to_string(),
                retries,
                retry_interval,
                start_time: req.start_time,
                stop_time: req.stop_time,
            })
        }
        D::GetDiagnosticsRes(res) => W::GetDiagnosticsRes(wire::GetDiagnosticsRes {
            file_name: res.file_name.clone(),
        }),
        D::GetLocalListVersionReq => W::GetLocalListVersionReq(wire::GetLocalListVersionReq {}),
        D::GetLocalListVersionRes(res) => W::GetLocalListVersionRes(wire::GetLocalListVersionRes {
            list_version: res.version.to_ocpp(),
        }),
        D::RemoteStartTransactionReq(req) => {
            W::RemoteStartTransactionReq(wire::RemoteStartTransactionReq {
                id_tag: req.id_tag.clone(),
                connector_id: req.connector.map(ConnectorScope::to_ocpp),
                charging_profile: req.charging_profile.as_ref().map(charging::profile_to_wire),
            })
        }
        D::RemoteStartTransactionRes(res) => {
            W::RemoteStartTransactionRes(wire::RemoteStartTransactionRes {
                status: accepted_to_wire(res.accepted),
            })
        }
        D::RemoteStopTransactionReq(req) => {
            W::RemoteStopTransactionReq(wire::RemoteStopTransactionReq {
                transaction_id: req.transaction_id,
            })
        }
        D::RemoteStopTransactionRes(res) => {
            W::RemoteStopTransactionRes(wire::RemoteStopTransactionRes {
                status: accepted_to_wire(res.accepted),
            })
        }
        D::ReserveNowReq(req) => W::ReserveNowReq(wire::ReserveNowReq {
            connector_id: req.scope.to_ocpp(),
            expiry_date: req.expiry_date,
            id_tag: req.id_tag.clone(),
            parent_id_tag: req.parent_id_tag.clone(),
            reservation_id: req.reservation_id,
        }),
        D::ReserveNowRes(res) => W::ReserveNowRes(wire::ReserveNowRes {
            status: enums::RESERVATION_STATUS.to_wire(res.status).to_string(),
        }),
        D::ResetReq(req) => W::ResetReq(wire::ResetReq {
            reset_type: enums::RESET_TYPE.to_wire(req.reset_type).to_string(),
        }),
        D::ResetRes(res) => W::ResetRes(wire::ResetRes {
            status: accepted_to_wire(res.accepted),
        }),
        D::SendLocalListReq(req) => W::SendLocalListReq(wire::SendLocalListReq {
            list_version: req.list_version.to_ocpp(),
            local_authorisation_list: if req.local_authorisation_list.is_empty() {
                None
            } else {
                Some(
                    req.local_authorisation_list
                        .iter()
                        .map(auth::authorisation_data_to_wire)
                        .collect(),
                )
            },
            update_type: enums::UPDATE_TYPE.to_wire(req.update_type).to_string(),
        }),
        D::SendLocalListRes(res) => W::SendLocalListRes(wire::SendLocalListRes {
            status: auth::update_status_to_wire(&res.status),
        }),
        D::SetChargingProfileReq(req) => W::SetChargingProfileReq(wire::SetChargingProfileReq {
            connector_id: req.scope.to_ocpp(),
            cs_charging_profiles: charging::profile_to_wire(&req.profile),
        }),
        D::SetChargingProfileRes(res) => W::SetChargingProfileRes(wire::SetChargingProfileRes {
            status: enums::CHARGING_PROFILE_STATUS.to_wire(res.status).to_string(),
        }),
        D::TriggerMessageReq(req) => {
            let (requested_message, connector_id) = trigger_to_wire(req.requested);
            W::TriggerMessageReq(wire::TriggerMessageReq {
                requested_message,
                connector_id,
            })
        }
        D::TriggerMessageRes(res) => W::TriggerMessageRes(wire::TriggerMessageRes {
            status: enums::TRIGGER_MESSAGE_STATUS.to_wire(res.status).to_string(),
        }),
        D::UnlockConnectorReq(req) => W::UnlockConnectorReq(wire::UnlockConnectorReq {
            connector_id: req.connector.to_ocpp(),
        }),
        D::UnlockConnectorRes(res) => W::UnlockConnectorRes(wire::UnlockConnectorRes {
            status: enums::UNLOCK_STATUS.to_wire(res.status).to_string(),
        }),
        D::UpdateFirmwareReq(req) => {
            let (retries, retry_interval) = retries_to_wire(req.retries);
            W::UpdateFirmwareReq(wire::UpdateFirmwareReq {
                retrieve_date: req.retrieve_date,
                location: req.location.to_string(),
                retries,
                retry_interval,
            })
        }
        D::UpdateFirmwareRes => W::UpdateFirmwareRes(wire::UpdateFirmwareRes {}),
    };
    Ok(encoded)
}

/// Decode an OCPP-J 1.6 wire record into the domain message it denotes.
pub fn from_wire(msg: &wire::Message) -> CodecResult<domain::Message> {
    use crate::domain::Message as D;
    use crate::v16::message::Message as W;

    let decoded = match msg {
        // Charge point → central system
        W::AuthorizeReq(req) => D::AuthorizeReq(domain::AuthorizeReq {
            id_tag: req.id_tag.clone(),
        }),
        W::AuthorizeRes(res) => D::AuthorizeRes(domain::AuthorizeRes {
            id_tag_info: auth::id_tag_info_from_wire(&res.id_tag_info)?,
        }),
        W::BootNotificationReq(req) => D::BootNotificationReq(domain::BootNotificationReq {
            charge_point_vendor: req.charge_point_vendor.clone(),
            charge_point_model: req.charge_point_model.clone(),
            charge_point_serial_number: req.charge_point_serial_number.clone(),
            charge_box_serial_number: req.charge_box_serial_number.clone(),
            firmware_version: req.firmware_version.clone(),
            iccid: req.iccid.clone(),
            imsi: req.imsi.clone(),
            meter_type: req.meter_type.clone(),
            meter_serial_number: req.meter_serial_number.clone(),
        }),
        W::BootNotificationRes(res) => D::BootNotificationRes(domain::BootNotificationRes {
            status: enums::REGISTRATION_STATUS.from_wire(&res.status)?,
            current_time: res.current_time,
            interval: Duration::seconds(res.interval as i64),
        }),
        W::DiagnosticsStatusNotificationReq(req) => {
            D::DiagnosticsStatusNotificationReq(domain::DiagnosticsStatusNotificationReq {
                status: enums::DIAGNOSTICS_STATUS.from_wire(&req.status)?,
            })
        }
        W::DiagnosticsStatusNotificationRes(_) => D::DiagnosticsStatusNotificationRes,
        W::FirmwareStatusNotificationReq(req) => {
            D::FirmwareStatusNotificationReq(domain::FirmwareStatusNotificationReq {
                status: enums::FIRMWARE_STATUS.from_wire(&req.status)?,
            })
        }
        W::FirmwareStatusNotificationRes(_) => D::FirmwareStatusNotificationRes,
        W::HeartbeatReq(_) => D::HeartbeatReq,
        W::HeartbeatRes(res) => D::HeartbeatRes(domain::HeartbeatRes {
            current_time: res.current_time,
        }),
        W::MeterValuesReq(req) => D::MeterValuesReq(domain::MeterValuesReq {
            scope: Scope::from_ocpp(req.connector_id),
            transaction_id: req.transaction_id,
            meters: req
                .meter_value
                .iter()
                .map(meter::from_wire)
                .collect::<CodecResult<Vec<_>>>()?,
        }),
        W::MeterValuesRes(_) => D::MeterValuesRes,
        W::StartTransactionReq(req) => D::StartTransactionReq(domain::StartTransactionReq {
            connector: ConnectorScope::from_ocpp(req.connector_id),
            id_tag: req.id_tag.clone(),
            timestamp: req.timestamp,
            meter_start: req.meter_start,
            reservation_id: req.reservation_id,
        }),
        W::StartTransactionRes(res) => D::StartTransactionRes(domain::StartTransactionRes {
            transaction_id: res.transaction_id,
            id_tag_info: auth::id_tag_info_from_wire(&res.id_tag_info)?,
        }),
        W::StatusNotificationReq(req) => D::StatusNotificationReq(domain::StatusNotificationReq {
            scope: Scope::from_ocpp(req.connector_id),
            status: status::from_wire(
                &req.status,
                &req.error_code,
                req.info.clone(),
                req.vendor_error_code.clone(),
            )?,
            timestamp: req.timestamp,
            vendor_id: req.vendor_id.clone(),
        }),
        W::StatusNotificationRes(_) => D::StatusNotificationRes,
        W::StopTransactionReq(req) => D::StopTransactionReq(domain::StopTransactionReq {
            transaction_id: req.transaction_id,
            id_tag: req.id_tag.clone(),
            timestamp: req.timestamp,
            meter_stop: req.meter_stop,
            reason: or_default(&enums::STOP_REASON, req.reason.as_deref())?,
            meters: req
                .transaction_data
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(meter::from_wire)
                .collect::<CodecResult<Vec<_>>>()?,
        }),
        W::StopTransactionRes(res) => D::StopTransactionRes(domain::StopTransactionRes {
            id_tag_info: res
                .id_tag_info
                .as_ref()
                .map(auth::id_tag_info_from_wire)
                .transpose()?,
        }),

        // Central system → charge point
        W::CancelReservationReq(req) => D::CancelReservationReq(domain::CancelReservationReq {
            reservation_id: req.reservation_id,
        }),
        W::CancelReservationRes(res) => D::CancelReservationRes(domain::CancelReservationRes {
            accepted: accepted_from_wire(&res.status)?,
        }),
        W::ChangeAvailabilityReq(req) => D::ChangeAvailabilityReq(domain::ChangeAvailabilityReq {
            scope: Scope::from_ocpp(req.connector_id),
            availability_type: enums::AVAILABILITY_TYPE.from_wire(&req.availability_type)?,
        }),
        W::ChangeAvailabilityRes(res) => D::ChangeAvailabilityRes(domain::ChangeAvailabilityRes {
            status: enums::AVAILABILITY_STATUS.from_wire(&res.status)?,
        }),
        W::ChangeConfigurationReq(req) => {
            D::ChangeConfigurationReq(domain::ChangeConfigurationReq {
                key: req.key.clone(),
                value: req.value.clone(),
            })
        }
        W::ChangeConfigurationRes(res) => {
            D::ChangeConfigurationRes(domain::ChangeConfigurationRes {
                status: enums::CONFIGURATION_STATUS.from_wire(&res.status)?,
            })
        }
        W::ClearCacheReq(_) => D::ClearCacheReq,
        W::ClearCacheRes(res) => D::ClearCacheRes(domain::ClearCacheRes {
            accepted: accepted_from_wire(&res.status)?,
        }),
        W::ClearChargingProfileReq(req) => {
            D::ClearChargingProfileReq(domain::ClearChargingProfileReq {
                id: req.id,
                scope: req.connector_id.map(Scope::from_ocpp),
                purpose: req
                    .charging_profile_purpose
                    .as_deref()
                    .map(|p| enums::CHARGING_PROFILE_PURPOSE.from_wire(p))
                    .transpose()?,
                stack_level: req.stack_level,
            })
        }
        W::ClearChargingProfileRes(res) => {
            D::ClearChargingProfileRes(domain::ClearChargingProfileRes {
                status: enums::CLEAR_CHARGING_PROFILE_STATUS.from_wire(&res.status)?,
            })
        }
        W::DataTransferReq(req) => D::DataTransferReq(domain::DataTransferReq {
            vendor_id: req.vendor_id.clone(),
            message_id: req.message_id.clone(),
            data: req.data.clone(),
        }),
        W::DataTransferRes(res) => D::DataTransferRes(domain::DataTransferRes {
            status: enums::DATA_TRANSFER_STATUS.from_wire(&res.status)?,
            data: res.data.clone(),
        }),
        W::GetCompositeScheduleReq(req) => {
            D::GetCompositeScheduleReq(domain::GetCompositeScheduleReq {
                scope: Scope::from_ocpp(req.connector_id),
                duration: Duration::seconds(req.duration as i64),
                charging_rate_unit: req
                    .charging_rate_unit
                    .as_deref()
                    .map(|u| enums::CHARGING_RATE_UNIT.from_wire(u))
                    .transpose()?,
            })
        }
        W::GetCompositeScheduleRes(res) => {
            use crate::domain::CompositeScheduleStatus as Status;
            let status = if accepted_from_wire(&res.status)? {
                Status::Accepted {
                    connector_scope: res.connector_id.map(Scope::from_ocpp),
                    schedule_start: res.schedule_start,
                    charging_schedule: res
                        .charging_schedule
                        .as_ref()
                        .map(charging::schedule_from_wire)
                        .transpose()?,
                }
            } else {
                Status::Rejected
            };
            D::GetCompositeScheduleRes(domain::GetCompositeScheduleRes { status })
        }
        W::GetConfigurationReq(req) => D::GetConfigurationReq(domain::GetConfigurationReq {
            keys: req.key.clone().unwrap_or_default(),
        }),
        W::GetConfigurationRes(res) => D::GetConfigurationRes(domain::GetConfigurationRes {
            values: res
                .configuration_key
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(key_value_from_wire)
                .collect(),
            unknown_keys: res.unknown_key.clone().unwrap_or_default(),
        }),
        W::GetDiagnosticsReq(req) => D::GetDiagnosticsReq(domain::GetDiagnosticsReq {
            location: uri_from_wire(&req.location)?,
            start_time: req.start_time,
            stop_time: req.stop_time,
            retries: retries_from_wire(req.retries, req.retry_interval),
        }),
        W::GetDiagnosticsRes(res) => D::GetDiagnosticsRes(domain::GetDiagnosticsRes {
            file_name: res.file_name.clone(),
        }),
        W::GetLocalListVersionReq(_) => D::GetLocalListVersionReq,
        W::GetLocalListVersionRes(res) => D::GetLocalListVersionRes(domain::GetLocalListVersionRes {
            version: AuthListVersion::from_ocpp(res.list_version),
        }),
        W::RemoteStartTransactionReq(req) => {
            D::RemoteStartTransactionReq(domain::RemoteStartTransactionReq {
                id_tag: req.id_tag.clone(),
                connector: req.connector_id.map(ConnectorScope::from_ocpp),
                charging_profile: req
                    .charging_profile
                    .as_ref()
                    .map(charging::profile_from_wire)
                    .transpose()?,
            })
        }
        W::RemoteStartTransactionRes(res) => {
            D::RemoteStartTransactionRes(domain::RemoteStartTransactionRes {
                accepted: accepted_from_wire(&res.status)?,
            })
        }
        W::RemoteStopTransactionReq(req) => {
            D::RemoteStopTransactionReq(domain::RemoteStopTransactionReq {
                transaction_id: req.transaction_id,
            })
        }
        W::RemoteStopTransactionRes(res) => {
            D::RemoteStopTransactionRes(domain::RemoteStopTransactionRes {
                accepted: accepted_from_wire(&res.status)?,
            })
        }
        W::ReserveNowReq(req) => D::ReserveNowReq(domain::ReserveNowReq {
            scope: Scope::from_ocpp(req.connector_id),
            expiry_date: req.expiry_date,
            id_tag: req.id_tag.clone(),
            parent_id_tag: req.parent_id_tag.clone(),
            reservation_id: req.reservation_id,
        }),
        W::ReserveNowRes(res) => D::ReserveNowRes(domain::ReserveNowRes {
            status: enums::RESERVATION_STATUS.from_wire(&res.status)?,
        }),
        W::ResetReq(req) => D::ResetReq(domain::ResetReq {
            reset_type: enums::RESET_TYPE.from_wire(&req.reset_type)?,
        }),
        W::ResetRes(res) => D::ResetRes(domain::ResetRes {
            accepted: accepted_from_wire(&res.status)?,
        }),
        W::SendLocalListReq(req) => D::SendLocalListReq(domain::SendLocalListReq {
            update_type: enums::UPDATE_TYPE.from_wire(&req.update_type)?,
            list_version: AuthListVersion::from_ocpp(req.list_version),
            local_authorisation_list: req
                .local_authorisation_list
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(auth::authorisation_data_from_wire)
                .collect::<CodecResult<Vec<_>>>()?,
        }),
        W::SendLocalListRes(res) => D::SendLocalListRes(domain::SendLocalListRes {
            status: auth::update_status_from_wire(&res.status)?,
        }),
        W::SetChargingProfileReq(req) => D::SetChargingProfileReq(domain::SetChargingProfileReq {
            scope: Scope::from_ocpp(req.connector_id),
            profile: charging::profile_from_wire(&req.cs_charging_profiles)?,
        }),
        W::SetChargingProfileRes(res) => D::SetChargingProfileRes(domain::SetChargingProfileRes {
            status: enums::CHARGING_PROFILE_STATUS.from_wire(&res.status)?,
        }),
        W::TriggerMessageReq(req) => D::TriggerMessageReq(domain::TriggerMessageReq {
            requested: trigger_from_wire(&req.requested_message, req.connector_id)?,
        }),
        W::TriggerMessageRes(res) => D::TriggerMessageRes(domain::TriggerMessageRes {
            status: enums::TRIGGER_MESSAGE_STATUS.from_wire(&res.status)?,
        }),
        W::UnlockConnectorReq(req) => D::UnlockConnectorReq(domain::UnlockConnectorReq {
            connector: ConnectorScope::from_ocpp(req.connector_id),
        }),
        W::UnlockConnectorRes(res) => D::UnlockConnectorRes(domain::UnlockConnectorRes {
            status: enums::UNLOCK_STATUS.from_wire(&res.status)?,
        }),
        W::UpdateFirmwareReq(req) => D::UpdateFirmwareReq(domain::UpdateFirmwareReq {
            retrieve_date: req.retrieve_date,
            location: uri_from_wire(&req.location)?,
            retries: retries_from_wire(req.retries, req.retry_interval),
        }),
        W::UpdateFirmwareRes(_) => D::UpdateFirmwareRes,
    };
    Ok(decoded)
}

// ── Shared helpers ─────────────────────────────────────────────

const ACCEPTED: &str = "Accepted";
const REJECTED: &str = "Rejected";

fn accepted_to_wire(accepted: bool) -> String {
    let status = if accepted { ACCEPTED } else { REJECTED };
    status.to_string()
}

fn accepted_from_wire(status: &str) -> CodecResult<bool> {
    match status {
        ACCEPTED => Ok(true),
        REJECTED => Ok(false),
        other => Err(CodecError::InvalidAcceptanceStatus(other.to_string())),
    }
}

fn uri_from_wire(location: &str) -> CodecResult<Url> {
    Url::parse(location).map_err(|_| CodecError::InvalidUri(location.to_string()))
}

fn unsupported(variant: &'static str) -> CodecResult<wire::Message> {
    warn!(variant, "message has no OCPP-J 1.6 encoding");
    Err(CodecError::UnsupportedMessageVariant(variant))
}

fn seconds_to_wire(duration: Duration) -> u32 {
    duration.num_seconds().max(0) as u32
}

/// Wire string for a defaulted enumeration field; elided at the default.
fn elide<T>(table: &EnumTable<T>, value: T) -> Option<String>
where
    T: Copy + PartialEq + Default + fmt::Debug + 'static,
{
    if value == T::default() {
        None
    } else {
        Some(table.to_wire(value).to_string())
    }
}

/// Domain value for a defaulted enumeration field; the default when absent.
fn or_default<T>(table: &EnumTable<T>, value: Option<&str>) -> CodecResult<T>
where
    T: Copy + PartialEq + Default + fmt::Debug + 'static,
{
    match value {
        Some(s) => table.from_wire(s),
        None => Ok(T::default()),
    }
}

fn none_if_empty<T: Clone>(items: &[T]) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items.to_vec())
    }
}

fn key_value_to_wire(kv: &domain::KeyValue) -> wire::KeyValue {
    wire::KeyValue {
        key: kv.key.clone(),
        readonly: kv.readonly,
        value: kv.value.clone(),
    }
}

fn key_value_from_wire(kv: &wire::KeyValue) -> domain::KeyValue {
    domain::KeyValue {
        key: kv.key.clone(),
        readonly: kv.readonly,
        value: kv.value.clone(),
    }
}

fn trigger_to_wire(trigger: MessageTrigger) -> (String, Option<u32>) {
    let (name, connector) = match trigger {
        MessageTrigger::BootNotification => ("BootNotification", None),
        MessageTrigger::DiagnosticsStatusNotification => ("DiagnosticsStatusNotification", None),
        MessageTrigger::FirmwareStatusNotification => ("FirmwareStatusNotification", None),
        MessageTrigger::Heartbeat => ("Heartbeat", None),
        MessageTrigger::MeterValues(scope) => ("MeterValues", scope),
        MessageTrigger::StatusNotification(scope) => ("StatusNotification", scope),
    };
    (name.to_string(), connector.map(ConnectorScope::to_ocpp))
}

fn trigger_from_wire(name: &str, connector_id: Option<u32>) -> CodecResult<MessageTrigger> {
    let scope = connector_id.map(ConnectorScope::from_ocpp);
    Ok(match name {
        "BootNotification" => MessageTrigger::BootNotification,
        "DiagnosticsStatusNotification" => MessageTrigger::DiagnosticsStatusNotification,
        "FirmwareStatusNotification" => MessageTrigger::FirmwareStatusNotification,
        "Heartbeat" => MessageTrigger::Heartbeat,
        "MeterValues" => MessageTrigger::MeterValues(scope),
        "StatusNotification" => MessageTrigger::StatusNotification(scope),
        other => {
            return Err(CodecError::UnrecognizedEnumValue {
                enumeration: "MessageTrigger",
                value: other.to_string(),
            })
        }
    })
}

fn retries_to_wire(retries: Retries) -> (Option<u32>, Option<u32>) {
    (retries.attempts, retries.interval.map(seconds_to_wire))
}

fn retries_from_wire(retries: Option<u32>, retry_interval: Option<u32>) -> Retries {
    Retries {
        attempts: retries,
        interval: retry_interval.map(|s| Duration::seconds(s as i64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::domain::{
        AuthorisationData, AuthorizationStatus, AvailabilityStatus, AvailabilityType,
        ChargePointErrorCode, ChargePointStatus, ChargingProfile, ChargingProfileKind,
        ChargingProfilePurpose, ChargingProfileStatus, ChargingRateUnit, ChargingSchedule,
        ChargingSchedulePeriod, ClearChargingProfileStatus, CompositeScheduleStatus,
        ConfigurationStatus, DataTransferStatus, DiagnosticsStatus, FirmwareStatus, IdTagInfo,
        KeyValue, Measurand, Message as D, MessageTrigger, Meter, MeterValue, RegistrationStatus,
        ReservationStatus, ResetType, StopReason, TriggerMessageStatus, UnitOfMeasure,
        UnlockStatus, UpdateStatus, UpdateType,
    };

    fn ts() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 5, 1, 12, 30, 0).unwrap()
    }

    fn sample_meter() -> Meter {
        Meter {
            timestamp: ts(),
            values: vec![
                MeterValue::new("1234"),
                MeterValue {
                    measurand: Measurand::Temperature,
                    unit: UnitOfMeasure::Celsius,
                    ..MeterValue::new("31")
                },
            ],
        }
    }

    fn sample_profile() -> ChargingProfile {
        ChargingProfile {
            id: 1,
            transaction_id: None,
            stack_level: 0,
            purpose: ChargingProfilePurpose::TxDefaultProfile,
            kind: ChargingProfileKind::Recurring(crate::domain::RecurrencyKind::Daily),
            valid_from: Some(ts()),
            valid_to: None,
            schedule: ChargingSchedule {
                duration: Some(Duration::seconds(600)),
                start_schedule: Some(ts()),
                charging_rate_unit: ChargingRateUnit::Watts,
                periods: vec![ChargingSchedulePeriod {
                    start_offset: Duration::seconds(0),
                    limit: 11000.0,
                    number_phases: None,
                }],
                min_charging_rate: None,
            },
        }
    }

    /// One representative value per encodable operation request/response.
    fn sample_messages() -> Vec<D> {
        vec![
            D::AuthorizeReq(domain::AuthorizeReq {
                id_tag: "TAG1".to_string(),
            }),
            D::AuthorizeRes(domain::AuthorizeRes {
                id_tag_info: IdTagInfo {
                    status: AuthorizationStatus::ConcurrentTx,
                    expiry_date: Some(ts()),
                    parent_id_tag: Some("PARENT".to_string()),
                },
            }),
            D::BootNotificationReq(domain::BootNotificationReq {
                charge_point_vendor: "VendorX".to_string(),
                charge_point_model: "ModelY".to_string(),
                charge_point_serial_number: Some("SN-1".to_string()),
                charge_box_serial_number: None,
                firmware_version: Some("1.2.3".to_string()),
                iccid: None,
                imsi: None,
                meter_type: None,
                meter_serial_number: None,
            }),
            D::BootNotificationRes(domain::BootNotificationRes {
                status: RegistrationStatus::Pending,
                current_time: ts(),
                interval: Duration::seconds(300),
            }),
            D::DiagnosticsStatusNotificationReq(domain::DiagnosticsStatusNotificationReq {
                status: DiagnosticsStatus::Uploading,
            }),
            D::DiagnosticsStatusNotificationRes,
            D::FirmwareStatusNotificationReq(domain::FirmwareStatusNotificationReq {
                status: FirmwareStatus::Installed,
            }),
            D::FirmwareStatusNotificationRes,
            D::HeartbeatReq,
            D::HeartbeatRes(domain::HeartbeatRes { current_time: ts() }),
            D::MeterValuesReq(domain::MeterValuesReq {
                scope: Scope::Connector(ConnectorScope(0)),
                transaction_id: Some(17),
                meters: vec![sample_meter()],
            }),
            D::MeterValuesRes,
            D::StartTransactionReq(domain::StartTransactionReq {
                connector: ConnectorScope(1),
                id_tag: "TAG1".to_string(),
                timestamp: ts(),
                meter_start: 100,
                reservation_id: Some(5),
            }),
            D::StartTransactionRes(domain::StartTransactionRes {
                transaction_id: 17,
                id_tag_info: IdTagInfo::accepted(),
            }),
            D::StatusNotificationReq(domain::StatusNotificationReq {
                scope: Scope::Connector(ConnectorScope(0)),
                status: ChargePointStatus::Faulted {
                    error_code: Some(ChargePointErrorCode::HighTemperature),
                    info: Some("too hot".to_string()),
                    vendor_error_code: Some("V1".to_string()),
                },
                timestamp: Some(ts()),
                vendor_id: Some("vendor".to_string()),
            }),
            D::StatusNotificationRes,
            D::StopTransactionReq(domain::StopTransactionReq {
                transaction_id: 17,
                id_tag: Some("TAG1".to_string()),
                timestamp: ts(),
                meter_stop: 2000,
                reason: StopReason::EvDisconnected,
                meters: vec![sample_meter()],
            }),
            D::StopTransactionRes(domain::StopTransactionRes {
                id_tag_info: Some(IdTagInfo::accepted()),
            }),
            D::CancelReservationReq(domain::CancelReservationReq { reservation_id: 5 }),
            D::CancelReservationRes(domain::CancelReservationRes { accepted: true }),
            D::ChangeAvailabilityReq(domain::ChangeAvailabilityReq {
                scope: Scope::ChargePoint,
                availability_type: AvailabilityType::Inoperative,
            }),
            D::ChangeAvailabilityRes(domain::ChangeAvailabilityRes {
                status: AvailabilityStatus::Scheduled,
            }),
            D::ChangeConfigurationReq(domain::ChangeConfigurationReq {
                key: "HeartbeatInterval".to_string(),
                value: "300".to_string(),
            }),
            D::ChangeConfigurationRes(domain::ChangeConfigurationRes {
                status: ConfigurationStatus::RebootRequired,
            }),
            D::ClearCacheReq,
            D::ClearCacheRes(domain::ClearCacheRes { accepted: false }),
            D::ClearChargingProfileReq(domain::ClearChargingProfileReq {
                id: Some(1),
                scope: Some(Scope::Connector(ConnectorScope(0))),
                purpose: Some(ChargingProfilePurpose::TxProfile),
                stack_level: Some(0),
            }),
            D::ClearChargingProfileRes(domain::ClearChargingProfileRes {
                status: ClearChargingProfileStatus::Unknown,
            }),
            D::DataTransferReq(domain::DataTransferReq {
                vendor_id: "com.example".to_string(),
                message_id: Some("msg".to_string()),
                data: Some("payload".to_string()),
            }),
            D::DataTransferRes(domain::DataTransferRes {
                status: DataTransferStatus::UnknownVendorId,
                data: None,
            }),
            D::GetCompositeScheduleReq(domain::GetCompositeScheduleReq {
                scope: Scope::Connector(ConnectorScope(0)),
                duration: Duration::seconds(3600),
                charging_rate_unit: Some(ChargingRateUnit::Amperes),
            }),
            D::GetCompositeScheduleRes(domain::GetCompositeScheduleRes {
                status: CompositeScheduleStatus::Accepted {
                    connector_scope: Some(Scope::Connector(ConnectorScope(0))),
                    schedule_start: Some(ts()),
                    charging_schedule: Some(sample_profile().schedule),
                },
            }),
            D::GetCompositeScheduleRes(domain::GetCompositeScheduleRes {
                status: CompositeScheduleStatus::Rejected,
            }),
            D::GetConfigurationReq(domain::GetConfigurationReq {
                keys: vec!["HeartbeatInterval".to_string()],
            }),
            D::GetConfigurationRes(domain::GetConfigurationRes {
                values: vec![KeyValue {
                    key: "HeartbeatInterval".to_string(),
                    readonly: false,
                    value: Some("300".to_string()),
                }],
                unknown_keys: vec!["NoSuchKey".to_string()],
            }),
            D::GetDiagnosticsReq(domain::GetDiagnosticsReq {
                location: Url::parse("ftp://diag.example.com/upload").unwrap(),
                start_time: Some(ts()),
                stop_time: None,
                retries: Retries {
                    attempts: Some(3),
                    interval: Some(Duration::seconds(60)),
                },
            }),
            D::GetDiagnosticsRes(domain::GetDiagnosticsRes {
                file_name: Some("diag-2017-05-01.tgz".to_string()),
            }),
            D::GetLocalListVersionReq,
            D::GetLocalListVersionRes(domain::GetLocalListVersionRes {
                version: AuthListVersion::Supported(42),
            }),
            D::RemoteStartTransactionReq(domain::RemoteStartTransactionReq {
                id_tag: "TAG1".to_string(),
                connector: Some(ConnectorScope(1)),
                charging_profile: Some(sample_profile()),
            }),
            D::RemoteStartTransactionRes(domain::RemoteStartTransactionRes { accepted: true }),
            D::RemoteStopTransactionReq(domain::RemoteStopTransactionReq { transaction_id: 17 }),
            D::RemoteStopTransactionRes(domain::RemoteStopTransactionRes { accepted: false }),
            D::ReserveNowReq(domain::ReserveNowReq {
                scope: Scope::ChargePoint,
                expiry_date: ts(),
                id_tag: "TAG1".to_string(),
                parent_id_tag: None,
                reservation_id: 5,
            }),
            D::ReserveNowRes(domain::ReserveNowRes {
                status: ReservationStatus::Occupied,
            }),
            D::ResetReq(domain::ResetReq {
                reset_type: ResetType::Soft,
            }),
            D::ResetRes(domain::ResetRes { accepted: true }),
            D::SendLocalListReq(domain::SendLocalListReq {
                update_type: UpdateType::Differential,
                list_version: AuthListVersion::Supported(3),
                local_authorisation_list: vec![
                    AuthorisationData::Add {
                        id_tag: "TAG1".to_string(),
                        id_tag_info: IdTagInfo::accepted(),
                    },
                    AuthorisationData::Remove {
                        id_tag: "TAG2".to_string(),
                    },
                ],
            }),
            D::SendLocalListRes(domain::SendLocalListRes {
                status: UpdateStatus::VersionMismatch,
            }),
            D::SetChargingProfileReq(domain::SetChargingProfileReq {
                scope: Scope::Connector(ConnectorScope(0)),
                profile: sample_profile(),
            }),
            D::SetChargingProfileRes(domain::SetChargingProfileRes {
                status: ChargingProfileStatus::NotSupported,
            }),
            D::TriggerMessageReq(domain::TriggerMessageReq {
                requested: MessageTrigger::StatusNotification(Some(ConnectorScope(1))),
            }),
            D::TriggerMessageRes(domain::TriggerMessageRes {
                status: TriggerMessageStatus::NotImplemented,
            }),
            D::UnlockConnectorReq(domain::UnlockConnectorReq {
                connector: ConnectorScope(0),
            }),
            D::UnlockConnectorRes(domain::UnlockConnectorRes {
                status: UnlockStatus::UnlockFailed,
            }),
            D::UpdateFirmwareReq(domain::UpdateFirmwareReq {
                retrieve_date: ts(),
                location: Url::parse("https://fw.example.com/fw-1.2.3.bin").unwrap(),
                retries: Retries::default(),
            }),
            D::UpdateFirmwareRes,
        ]
    }

    #[test]
    fn test_every_operation_round_trips() {
        for msg in sample_messages() {
            let encoded = to_wire(&msg).unwrap();
            let decoded = from_wire(&encoded).unwrap();
            assert_eq!(decoded, msg);
        }
    }

    #[test]
    fn test_boot_notification_res_wire_shape() {
        let encoded = to_wire(&D::BootNotificationRes(domain::BootNotificationRes {
            status: RegistrationStatus::Accepted,
            current_time: ts(),
            interval: Duration::seconds(300),
        }))
        .unwrap();
        let wire::Message::BootNotificationRes(res) = encoded else {
            panic!("wrong wire variant");
        };
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({
                "status": "Accepted",
                "currentTime": "2017-05-01T12:30:00Z",
                "interval": 300,
            })
        );
    }

    #[test]
    fn test_status_notification_wire_shape() {
        let encoded = to_wire(&D::StatusNotificationReq(domain::StatusNotificationReq {
            scope: Scope::Connector(ConnectorScope(0)),
            status: ChargePointStatus::Available { info: None },
            timestamp: None,
            vendor_id: None,
        }))
        .unwrap();
        let wire::Message::StatusNotificationReq(req) = encoded else {
            panic!("wrong wire variant");
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "connectorId": 1,
                "status": "Available",
                "errorCode": "NoError",
            })
        );
    }

    #[test]
    fn test_sampled_value_wire_shape_omits_defaults() {
        let encoded = serde_json::to_value(meter::to_wire(&Meter {
            timestamp: ts(),
            values: vec![MeterValue::new("1234")],
        }))
        .unwrap();
        assert_eq!(
            encoded,
            json!({
                "timestamp": "2017-05-01T12:30:00Z",
                "sampledValue": [{ "value": "1234" }],
            })
        );
    }

    #[test]
    fn test_status_notification_unknown_error_code_is_rejected() {
        let err = from_wire(&wire::Message::StatusNotificationReq(
            wire::StatusNotificationReq {
                connector_id: 1,
                status: "Available".to_string(),
                error_code: "NotARealCode".to_string(),
                info: None,
                timestamp: None,
                vendor_id: None,
                vendor_error_code: None,
            },
        ))
        .unwrap_err();
        assert!(matches!(err, CodecError::UnrecognizedEnumValue { .. }));
    }

    #[test]
    fn test_reset_res_acceptance_decoding() {
        let accepted = from_wire(&wire::Message::ResetRes(wire::ResetRes {
            status: "Accepted".to_string(),
        }))
        .unwrap();
        assert_eq!(accepted, D::ResetRes(domain::ResetRes { accepted: true }));

        let err = from_wire(&wire::Message::ResetRes(wire::ResetRes {
            status: "Maybe".to_string(),
        }))
        .unwrap_err();
        assert_eq!(err, CodecError::InvalidAcceptanceStatus("Maybe".to_string()));
    }

    #[test]
    fn test_every_boolean_status_operation_rejects_other_strings() {
        let status = "Scheduled".to_string();
        let malformed = [
            wire::Message::CancelReservationRes(wire::CancelReservationRes {
                status: status.clone(),
            }),
            wire::Message::ClearCacheRes(wire::ClearCacheRes {
                status: status.clone(),
            }),
            wire::Message::RemoteStartTransactionRes(wire::RemoteStartTransactionRes {
                status: status.clone(),
            }),
            wire::Message::RemoteStopTransactionRes(wire::RemoteStopTransactionRes {
                status: status.clone(),
            }),
            wire::Message::ResetRes(wire::ResetRes { status }),
        ];
        for msg in &malformed {
            assert_eq!(
                from_wire(msg).unwrap_err(),
                CodecError::InvalidAcceptanceStatus("Scheduled".to_string()),
            );
        }
    }

    #[test]
    fn test_send_local_list_req_wire_shape() {
        let encoded = to_wire(&D::SendLocalListReq(domain::SendLocalListReq {
            update_type: UpdateType::Full,
            list_version: AuthListVersion::Supported(3),
            local_authorisation_list: vec![AuthorisationData::Add {
                id_tag: "TAG1".to_string(),
                id_tag_info: IdTagInfo::accepted(),
            }],
        }))
        .unwrap();
        let wire::Message::SendLocalListReq(req) = encoded else {
            panic!("wrong wire variant");
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "updateType": "Full",
                "listVersion": 3,
                "localAuthorisationList": [
                    { "idTag": "TAG1", "idTagInfo": { "status": "Accepted" } },
                ],
            })
        );
    }

    #[test]
    fn test_get_local_list_version_not_supported_sentinel() {
        let msg = D::GetLocalListVersionRes(domain::GetLocalListVersionRes {
            version: AuthListVersion::NotSupported,
        });
        let encoded = to_wire(&msg).unwrap();
        let wire::Message::GetLocalListVersionRes(ref res) = encoded else {
            panic!("wrong wire variant");
        };
        assert_eq!(res.list_version, -1);
        assert_eq!(from_wire(&encoded).unwrap(), msg);
    }

    #[test]
    fn test_send_local_list_res_hash_does_not_round_trip() {
        let msg = D::SendLocalListRes(domain::SendLocalListRes {
            status: UpdateStatus::Accepted {
                hash: Some("cafebabe".to_string()),
            },
        });
        let decoded = from_wire(&to_wire(&msg).unwrap()).unwrap();
        assert_eq!(
            decoded,
            D::SendLocalListRes(domain::SendLocalListRes {
                status: UpdateStatus::Accepted { hash: None },
            })
        );
        assert_ne!(decoded, msg);
    }

    #[test]
    fn test_central_system_data_transfer_is_rejected() {
        let err = to_wire(&D::CentralSystemDataTransferReq(
            domain::CentralSystemDataTransferReq {
                vendor_id: "com.example".to_string(),
                message_id: None,
                data: None,
            },
        ))
        .unwrap_err();
        assert_eq!(
            err,
            CodecError::UnsupportedMessageVariant("CentralSystemDataTransferReq")
        );
    }

    #[test]
    fn test_invalid_diagnostics_location_is_rejected() {
        let err = from_wire(&wire::Message::GetDiagnosticsReq(wire::GetDiagnosticsReq {
            location: "not a uri".to_string(),
            retries: None,
            retry_interval: None,
            start_time: None,
            stop_time: None,
        }))
        .unwrap_err();
        assert_eq!(err, CodecError::InvalidUri("not a uri".to_string()));
    }

    #[test]
    fn test_trigger_message_connector_attachment() {
        let encoded = to_wire(&D::TriggerMessageReq(domain::TriggerMessageReq {
            requested: MessageTrigger::MeterValues(Some(ConnectorScope(0))),
        }))
        .unwrap();
        let wire::Message::TriggerMessageReq(ref req) = encoded else {
            panic!("wrong wire variant");
        };
        assert_eq!(req.requested_message, "MeterValues");
        assert_eq!(req.connector_id, Some(1));

        let err = from_wire(&wire::Message::TriggerMessageReq(wire::TriggerMessageReq {
            requested_message: "SignCertificate".to_string(),
            connector_id: None,
        }))
        .unwrap_err();
        assert_eq!(
            err,
            CodecError::UnrecognizedEnumValue {
                enumeration: "MessageTrigger",
                value: "SignCertificate".to_string(),
            }
        );
    }

    #[test]
    fn test_stop_transaction_default_reason_is_elided() {
        let msg = D::StopTransactionReq(domain::StopTransactionReq {
            transaction_id: 17,
            id_tag: None,
            timestamp: ts(),
            meter_stop: 2000,
            reason: StopReason::Local,
            meters: vec![],
        });
        let encoded = to_wire(&msg).unwrap();
        let wire::Message::StopTransactionReq(ref req) = encoded else {
            panic!("wrong wire variant");
        };
        assert_eq!(req.reason, None);
        assert_eq!(req.transaction_data, None);
        assert_eq!(from_wire(&encoded).unwrap(), msg);
    }
}
