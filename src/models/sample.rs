use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone, Deserialize, PartialEq, Eq)]
pub struct Sample {
    pub id: u32,
    pub name: String,
}

impl Sample {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

static SAMPLES: Lazy<Vec<Sample>> = Lazy::new(|| {
    vec![
        Sample::new(1, "Sample Item 1"),
        Sample::new(2, "Sample Item 2"),
    ]
});

/// Every sample record, in insertion order. Built on first access and never mutated.
pub fn all() -> &'static [Sample] {
    &SAMPLES
}
