//! Application payload envelope.
//!
//! # Byte Layout
//! - Bytes 0-31: message type tag, `keccak256(type name)`
//! - Bytes 32..: JSON-encoded body
//!
//! Receivers switch on the tag before decoding the body. A payload shorter
//! than the tag or carrying an unexpected tag is rejected with
//! `InvalidMessageType`.

use cosmwasm_std::{from_json, to_json_vec, Binary, StdResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tiny_keccak::{Hasher, Keccak};

use crate::error::InteractorError;

pub const TAG_LEN: usize = 32;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Type tag for a message type name, e.g. `"CROSS_CHAIN_INCREMENT_MESSAGE"`.
pub fn message_type(name: &str) -> [u8; 32] {
    keccak256(name.as_bytes())
}

pub fn encode_message<T: Serialize>(name: &str, body: &T) -> StdResult<Binary> {
    let body = to_json_vec(body)?;
    let mut data = Vec::with_capacity(TAG_LEN + body.len());
    data.extend_from_slice(&message_type(name));
    data.extend_from_slice(&body);
    Ok(Binary::from(data))
}

/// Read the type tag without decoding the body.
pub fn peek_message_type(message: &Binary) -> Result<[u8; 32], InteractorError> {
    if message.len() < TAG_LEN {
        return Err(InteractorError::InvalidMessageType);
    }
    let mut tag = [0u8; 32];
    tag.copy_from_slice(&message[..TAG_LEN]);
    Ok(tag)
}

pub fn decode_message<T: DeserializeOwned>(
    name: &str,
    message: &Binary,
) -> Result<T, InteractorError> {
    if peek_message_type(message)? != message_type(name) {
        return Err(InteractorError::InvalidMessageType);
    }
    Ok(from_json(&message[TAG_LEN..])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_schema::cw_serde;

    #[cw_serde]
    struct Increment {
        from: String,
    }

    #[test]
    fn test_decode_rejects_other_tag() {
        let msg = encode_message(
            "CROSS_CHAIN_INCREMENT_MESSAGE",
            &Increment {
                from: "terra1user".to_string(),
            },
        )
        .unwrap();

        let err = decode_message::<Increment>("HELLO_WORLD_MESSAGE_TYPE", &msg).unwrap_err();
        assert_eq!(err, InteractorError::InvalidMessageType);

        let decoded: Increment = decode_message("CROSS_CHAIN_INCREMENT_MESSAGE", &msg).unwrap();
        assert_eq!(decoded.from, "terra1user");
    }

    #[test]
    fn test_short_payload_is_invalid_type() {
        let err = peek_message_type(&Binary::from(vec![1u8; 31])).unwrap_err();
        assert_eq!(err, InteractorError::InvalidMessageType);

        let err = decode_message::<Increment>("X", &Binary::default()).unwrap_err();
        assert_eq!(err, InteractorError::InvalidMessageType);
    }

    #[test]
    fn test_tag_is_keccak_of_name() {
        // keccak256("") is the well-known empty-input digest
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(message_type("abc"), keccak256(b"abc"));
    }
}
