use mongodb::bson::oid::ObjectId;

use super::StorageError;

/// Database-assigned todo identifier, exposed as the 24-digit hex form of an ObjectId.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct TodoId(ObjectId);

impl TodoId {
    pub fn new() -> Self {
        Self(ObjectId::new())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl std::str::FromStr for TodoId {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| StorageError::InvalidId(s.to_owned()))
    }
}

impl serde::Serialize for TodoId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for TodoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectId::parse_str(&s)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

impl From<ObjectId> for TodoId {
    fn from(value: ObjectId) -> Self {
        Self(value)
    }
}

impl From<TodoId> for ObjectId {
    fn from(value: TodoId) -> Self {
        value.0
    }
}
