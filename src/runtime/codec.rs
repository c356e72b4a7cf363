use super::{GatewayError, Request};
use http::header::{HeaderName, ACCEPT, CONTENT_TYPE};
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Body codec chosen by content negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// `application/json` (also the fallback for unknown media types)
    Json,
}

impl Codec {
    /// Codec for a media type such as `application/json; charset=utf-8`.
    ///
    /// JSON is the only registered codec, so unknown or missing media types
    /// resolve to it as well.
    pub fn for_media_type(_media_type: Option<&str>) -> Codec {
        Codec::Json
    }

    /// Media type written to the `content-type` response header.
    pub fn content_type(&self) -> &'static str {
        match self {
            Codec::Json => "application/json",
        }
    }

    /// Decode a payload into `target`, replacing its contents.
    ///
    /// A blank payload leaves `target` untouched.
    pub fn decode_into<T: DeserializeOwned>(
        &self,
        body: &[u8],
        target: &mut T,
    ) -> Result<(), GatewayError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }
        match self {
            Codec::Json => {
                *target = serde_json::from_slice(body).map_err(|err| {
                    GatewayError::wrap(err, "invalid JSON payload")
                        .with_status(StatusCode::BAD_REQUEST)
                })?;
            }
        }
        Ok(())
    }

    /// Serialize `value` and append it to `out`.
    pub fn encode_into<T: Serialize>(&self, out: &mut Vec<u8>, value: &T) -> Result<(), GatewayError> {
        match self {
            Codec::Json => serde_json::to_writer(out, value)
                .map_err(|err| GatewayError::wrap(err, "JSON encoding failed")),
        }
    }
}

/// Content negotiation: (inbound decoder, outbound encoder) for a request.
///
/// The decoder follows `Content-Type`, the encoder follows `Accept` and falls
/// back to the decoder's codec.
pub fn codec_for_request(req: &Request) -> (Codec, Codec) {
    let header = |name: HeaderName| req.headers().get(name).and_then(|v| v.to_str().ok());
    let inbound = Codec::for_media_type(header(CONTENT_TYPE));
    let outbound = match header(ACCEPT) {
        Some(accept) => Codec::for_media_type(accept.split(',').next()),
        None => inbound,
    };
    (inbound, outbound)
}
