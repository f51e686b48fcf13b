use serde::{Deserialize, Serialize};

/// A file backing one occurrence of a matched value. MIME type may be
/// unknown when type detection has not run or was inconclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub path: String,
    pub mime_type: Option<String>,
}

impl FileRef {
    pub fn new(path: impl Into<String>, mime_type: Option<String>) -> Self {
        Self {
            path: path.into(),
            mime_type,
        }
    }
}

/// One occurrence of a matched value inside some data source. Not every
/// occurrence has a resolvable file reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValueInstance {
    pub file: Option<FileRef>,
}

impl ValueInstance {
    pub fn with_file(file: FileRef) -> Self {
        Self { file: Some(file) }
    }

    pub fn without_file() -> Self {
        Self { file: None }
    }
}

/// A single correlatable value and its occurrences. The value string is
/// the identity key for frequency and removal decisions and is never
/// mutated after construction, so it stays private behind an accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedValue {
    value: String,
    instances: Vec<ValueInstance>,
}

impl MatchedValue {
    pub fn new(value: impl Into<String>, instances: Vec<ValueInstance>) -> Self {
        Self {
            value: value.into(),
            instances,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn instances(&self) -> &[ValueInstance] {
        &self.instances
    }
}
