use serde::Deserialize;

/// Optional daemon configuration. Absent keys fall back to the fixed
/// defaults (port 5555, /etc/faketimerc).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaketimeConfigToml {
    pub port: Option<u16>,
    pub faketimerc_path: Option<String>,
}
