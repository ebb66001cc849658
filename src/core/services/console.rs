use crate::models::Board;

// Browser console on wasm32; native builds (unit tests) go through tracing instead,
// since web_sys imports abort outside the browser.

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(target_arch = "wasm32")]
pub fn error(message: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(message: &str) {
    tracing::info!("{}", message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(message: &str) {
    tracing::warn!("{}", message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(message: &str) {
    tracing::error!("{}", message);
}

// Dump the whole board as JSON after a mutation
pub fn log_board_snapshot(board: &Board) {
    match serde_json::to_string(board) {
        Ok(json) => log(&format!("[Board] {} items: {}", board.total(), json)),
        Err(e) => error(&format!("[Board] Failed to serialize snapshot: {}", e)),
    }
}
