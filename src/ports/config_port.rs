//! Configuration access port trait.

/// Read-only access to sectioned key/value settings.
///
/// Typed getters return `Ok(None)` when the key is missing or blank and
/// `Err` with the parser's reason when the value is present but malformed.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>, String>;
    fn get_double(&self, section: &str, key: &str) -> Result<Option<f64>, String>;
}
