//! Wire types for the score endpoint.

use serde::{Deserialize, Serialize};

/// Inbound `/echo` message: who is scoring and by how much.
///
/// Missing fields decode to zero; a message that is not JSON at all is
/// rejected by the handler instead.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ScoreEnvelope {
    pub user_id: u64,
    pub point: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_envelope_decodes() {
        let envelope: ScoreEnvelope =
            serde_json::from_str(r#"{"user_id": 123, "point": -5}"#).unwrap();
        assert_eq!(envelope.user_id, 123);
        assert_eq!(envelope.point, -5);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let envelope: ScoreEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.user_id, 0);
        assert_eq!(envelope.point, 0);
    }
}
