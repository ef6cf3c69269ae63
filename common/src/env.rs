use log::warn;

/// Reads a numeric environment variable. Values that are not a number are ignored with a warning.
pub fn get_env_usize(key: &str) -> Option<usize> {
    let value = std::env::var(key).ok()?;

    match value.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}, expected a whole number", key, value);
            None
        }
    }
}
