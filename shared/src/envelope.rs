//! Response envelope shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Uniform `{success, data|message|error}` wrapper returned by every endpoint.
///
/// Absent members are omitted from the JSON instead of being written as
/// `null`, so a success body never carries an `error` key and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the request succeeded.
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Payload of a successful read or write.
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Confirmation text of a successful action without payload.
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Reason of a failure.
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Success carrying `data`.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Failure carrying `error`.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Collapse the envelope into its payload.
    ///
    /// A successful envelope without `data` is treated as an error because
    /// every caller of this helper expects a payload.
    pub fn into_data(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("response carried no data".to_string()),
            (false, _) => Err(self
                .error
                .or(self.message)
                .unwrap_or_else(|| "unknown error".to_string())),
        }
    }
}

impl Envelope<()> {
    /// Success carrying only a confirmation message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Envelope;

    #[test]
    fn success_envelope_omits_absent_members() {
        let value = serde_json::to_value(Envelope::data(vec![1, 2])).expect("serialize");
        assert_eq!(value, json!({ "success": true, "data": [1, 2] }));

        let value = serde_json::to_value(Envelope::message("done")).expect("serialize");
        assert_eq!(value, json!({ "success": true, "message": "done" }));
    }

    #[test]
    fn failed_envelope_surfaces_server_error() {
        let envelope: Envelope<Vec<u8>> =
            serde_json::from_value(json!({ "success": false, "error": "boom" }))
                .expect("deserialize");
        assert_eq!(envelope.into_data(), Err("boom".to_string()));

        let envelope: Envelope<Vec<u8>> =
            serde_json::from_value(json!({ "success": false })).expect("deserialize");
        assert_eq!(envelope.into_data(), Err("unknown error".to_string()));
    }
}
