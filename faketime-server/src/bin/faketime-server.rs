use std::path::PathBuf;

use faketime_config_file::FaketimeConfigToml;
use faketime_server::api::{run_server, ServerConfig};
use log::warn;

const CONFIG_TOML_PATH: &str = "/etc/faketime-server.toml";

#[tokio::main]
async fn main() {
    env_logger::init();

    // The config file is optional, and a broken one must not keep the
    // daemon down. Fall back to the defaults either way.
    let config_toml = match std::fs::read_to_string(CONFIG_TOML_PATH) {
        Ok(s) => match toml::from_str::<FaketimeConfigToml>(&s) {
            Ok(config_toml) => config_toml,
            Err(e) => {
                warn!("ignoring malformed {}: {}", CONFIG_TOML_PATH, e);
                FaketimeConfigToml::default()
            }
        },
        Err(_) => FaketimeConfigToml::default(),
    };

    let config = ServerConfig {
        faketimerc_path: PathBuf::from(
            config_toml
                .faketimerc_path
                .unwrap_or_else(|| "/etc/faketimerc".to_string()),
        ),
        port: config_toml.port.unwrap_or(5555),
    };
    run_server(config).await;
}
