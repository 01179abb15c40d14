// Utility helpers shared by the demo shell.

pub fn format_zoom(zoom: f64) -> String {
    format!("{:.0}%", zoom * 100.0)
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::format_zoom;

    #[test]
    fn formats_zoom_as_percent() {
        assert_eq!(format_zoom(1.0), "100%");
        assert_eq!(format_zoom(0.2), "20%");
        assert_eq!(format_zoom(1.455), "146%");
    }
}
