use serde::{Deserialize, Serialize};

/// Body of a set-faketime request. The on-wire key is `FAKETIME`, matching
/// what libfaketime-style consumers expect to see in the rc file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetFaketimeRequest {
    #[serde(rename = "FAKETIME")]
    pub faketime: String,
}
