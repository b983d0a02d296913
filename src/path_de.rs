use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// Deserialize with field-path context in error messages.
pub fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(|err| {
        let path = err.path().to_string();
        Error::Deserialize { path, source: err.into_inner() }
    })
}
