use std::fs;

use hill_cipher::KeyMatrix;

use crate::CliError;

/// The classical textbook key, `GYBNQKURP` as letters.
pub const DEFAULT_KEY: &str = "[[6,24,1],[13,16,10],[20,17,15]]";

/// Where the key matrix comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    Json(String),
    File(String),
    Keyword(String),
}

impl KeySource {
    /// At most one of the options is set (clap enforces it); none means the default key.
    pub fn from_args(key: Option<String>, key_file: Option<String>, keyword: Option<String>) -> Self {
        match (key, key_file, keyword) {
            (Some(json), _, _) => KeySource::Json(json),
            (_, Some(path), _) => KeySource::File(path),
            (_, _, Some(keyword)) => KeySource::Keyword(keyword),
            _ => KeySource::Json(DEFAULT_KEY.to_string()),
        }
    }

    pub fn load(&self) -> Result<KeyMatrix, CliError> {
        let key = match self {
            KeySource::Json(json) => KeyMatrix::from_json(json)?,
            KeySource::File(path) => {
                let json = fs::read_to_string(path).map_err(|e| CliError::Io(path.clone(), e))?;
                KeyMatrix::from_json(&json)?
            }
            KeySource::Keyword(keyword) => KeyMatrix::from_keyword(keyword)?,
        };
        Ok(key)
    }
}
