use std::string::FromUtf8Error;

use thiserror::Error;

/// The single failure the codec can surface.
///
/// Encode is total and decode of any ciphertext actually produced by
/// [`encode`](crate::codec::encode) with the matching key cannot hit this.
/// Seeing it means the stored bytes and key do not correspond to any prior
/// encode call: wrong key, damaged storage, or bytes from elsewhere.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("corrupt interned payload: decoded bytes are not valid UTF-8 (wrong key or damaged storage)")]
    CorruptPayload(#[from] FromUtf8Error),
}
