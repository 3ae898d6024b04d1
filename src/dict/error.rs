use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
	#[error("word must not be empty")]
	EmptyWord,
	#[error("frequency must not be negative, got {0}")]
	NegativeFrequency(i64),
	#[error("unknown dictionary backend: {0:?}")]
	UnknownBackend(String),
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
