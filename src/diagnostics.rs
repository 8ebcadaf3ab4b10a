#[cfg(target_arch = "wasm32")]
pub fn log_event(scope: &str, details: &str) {
    web_sys::console::log_1(&format!("[{scope}] {details}").into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_event(scope: &str, details: &str) {
    eprintln!("[{scope}] {details}");
}
