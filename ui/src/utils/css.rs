pub fn drop_zone_class(armed: bool) -> &'static str {
    if armed {
        "drop-zone dragover"
    } else {
        "drop-zone"
    }
}

pub fn error_region_class(has_error: bool) -> &'static str {
    if has_error {
        "error-message visible"
    } else {
        "error-message"
    }
}
