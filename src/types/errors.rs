use std::fmt;

// === StorageError ===

/// Errors related to the durable state store.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    DatabaseError(String),
    /// Failed to serialize or deserialize navigation state.
    SerializationError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "State store database error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "State serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === PreferenceError ===

/// Errors related to preference loading and saving.
#[derive(Debug)]
pub enum PreferenceError {
    /// An I/O error occurred while reading or writing the preference file.
    IoError(String),
    /// Failed to serialize or deserialize preferences.
    SerializationError(String),
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::IoError(msg) => write!(f, "Preference I/O error: {}", msg),
            PreferenceError::SerializationError(msg) => {
                write!(f, "Preference serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PreferenceError {}
