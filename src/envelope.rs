#![cfg_attr(not(feature = "kicad-ipc"), allow(dead_code))]

use prost::Message;
use prost_types::Any;

use crate::error::PollerError;
use crate::proto::kiapi::common::{ApiRequest, ApiRequestHeader, ApiResponse, ApiStatusCode};

pub(crate) fn type_url(type_name: &str) -> String {
    format!("type.googleapis.com/{type_name}")
}

pub(crate) fn pack_any<T: Message>(message: &T, type_name: &str) -> Any {
    Any {
        type_url: type_url(type_name),
        value: message.encode_to_vec(),
    }
}

/// Decodes one `Any` payload after checking it carries `expected_type_name`.
pub(crate) fn decode_any<T: Message + Default>(
    payload: &Any,
    expected_type_name: &str,
) -> Result<T, PollerError> {
    let expected_type_url = type_url(expected_type_name);
    if payload.type_url != expected_type_url {
        return Err(PollerError::UnexpectedPayloadType {
            expected_type_url,
            actual_type_url: payload.type_url.clone(),
        });
    }

    T::decode(payload.value.as_slice()).map_err(|err| PollerError::ProtobufDecode(err.to_string()))
}

pub(crate) fn unpack_any<T: Message + Default>(
    response: &ApiResponse,
    expected_type_name: &str,
) -> Result<T, PollerError> {
    let payload = response
        .message
        .as_ref()
        .ok_or_else(|| PollerError::MissingPayload {
            expected_type_url: type_url(expected_type_name),
        })?;

    decode_any(payload, expected_type_name)
}

pub(crate) fn encode_request(token: &str, client_name: &str, command: Any) -> Vec<u8> {
    ApiRequest {
        header: Some(ApiRequestHeader {
            kicad_token: token.to_string(),
            client_name: client_name.to_string(),
        }),
        message: Some(command),
    }
    .encode_to_vec()
}

pub(crate) fn decode_response(bytes: &[u8]) -> Result<ApiResponse, PollerError> {
    ApiResponse::decode(bytes).map_err(|err| PollerError::ProtobufDecode(err.to_string()))
}

pub(crate) fn status_error(response: &ApiResponse) -> Option<PollerError> {
    let status = response.status.as_ref()?;
    let code = ApiStatusCode::try_from(status.status).unwrap_or(ApiStatusCode::AsUnknown);

    if code == ApiStatusCode::AsOk {
        return None;
    }

    Some(PollerError::ApiStatus {
        code: code.as_str_name().to_string(),
        message: status.error_message.clone(),
    })
}
