/// Column types the loader's tables are declared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// Auto-incrementing 4-byte integer backed by an implicit sequence.
    Serial,
    Text,
}

impl DataType {
    pub fn postgres_name(&self) -> &'static str {
        match self {
            DataType::Serial => "SERIAL",
            DataType::Text => "TEXT",
        }
    }
}
