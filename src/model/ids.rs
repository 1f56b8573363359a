use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChampionId(pub String);

impl Display for ChampionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ChampionId {
    fn from(value: String) -> Self {
        ChampionId(value)
    }
}

impl From<&str> for ChampionId {
    fn from(value: &str) -> Self {
        ChampionId(value.to_string())
    }
}
