//! Entry ids and item handles
//!
//! Income and expense ids are independent integer sequences, so an id alone
//! is ambiguous. An `ItemHandle` pairs it with its category and has a short
//! text form (`exp-0`, `inc-3`) that front ends can pass around.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::entry::Category;
use crate::error::TallyError;

/// Id of an entry within its category
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(u32);

impl EntryId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The id that follows this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one rendered entry: its category and id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemHandle {
    pub category: Category,
    pub id: EntryId,
}

impl ItemHandle {
    pub const fn new(category: Category, id: EntryId) -> Self {
        Self { category, id }
    }
}

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category.tag(), self.id)
    }
}

impl FromStr for ItemHandle {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (tag, id) = s
            .split_once('-')
            .ok_or_else(|| TallyError::InvalidHandle(s.to_string()))?;

        let category = match tag {
            "exp" => Category::Expense,
            "inc" => Category::Income,
            _ => return Err(TallyError::InvalidHandle(s.to_string())),
        };
        let id: u32 = id
            .parse()
            .map_err(|_| TallyError::InvalidHandle(s.to_string()))?;

        Ok(Self::new(category, EntryId::new(id)))
    }
}
