use std::fmt::Display;

use ax_core::Ai4xError;

fn map_error(code: &'static str, error: impl Display) -> Ai4xError {
    Ai4xError::new(code, error.to_string())
}

pub fn map_engine_settings_read(error: std::io::Error) -> Ai4xError {
    map_error("ENGINE_SETTINGS_READ", error)
}

pub fn map_engine_settings_invalid(error: serde_json::Error) -> Ai4xError {
    map_error("ENGINE_SETTINGS_INVALID", error)
}

pub fn map_engine_orders(error: serde_json::Error) -> Ai4xError {
    map_error("ENGINE_ORDERS_INVALID", error)
}

pub fn map_engine_spawn(error: std::io::Error) -> Ai4xError {
    map_error("ENGINE_SPAWN", error)
}

#[cfg(test)]
mod error_map_tests {
    use super::*;

    #[test]
    fn mapping_helpers_keep_error_codes() {
        assert_eq!(
            map_engine_settings_read(std::io::Error::other("read")).code,
            "ENGINE_SETTINGS_READ"
        );
        assert_eq!(
            map_engine_spawn(std::io::Error::other("spawn")).code,
            "ENGINE_SPAWN"
        );

        let invalid = serde_json::from_str::<serde_json::Value>("[").expect_err("invalid json");
        assert_eq!(
            map_engine_settings_invalid(invalid).code,
            "ENGINE_SETTINGS_INVALID"
        );

        let orders = serde_json::from_str::<Vec<ax_core::TurnOrder>>("[{}]")
            .expect_err("order without fields");
        assert_eq!(map_engine_orders(orders).code, "ENGINE_ORDERS_INVALID");
    }
}
