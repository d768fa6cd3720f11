//! `position` strings: `<relationship>=<command>`.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relationship {
    Before,
    After,
    BeforeGroupContaining,
    AfterGroupContaining,
    /// Well-formed but unrecognised; every ordering stage ignores it.
    Other(String),
}

impl Relationship {
    /// `before` / `after`: orders items inside a group and pulls groups together.
    pub fn is_item_level(&self) -> bool {
        matches!(self, Self::Before | Self::After)
    }

    /// `beforeGroupContaining` / `afterGroupContaining`: orders whole groups.
    pub fn is_group_level(&self) -> bool {
        matches!(self, Self::BeforeGroupContaining | Self::AfterGroupContaining)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Before => "before",
            Self::After => "after",
            Self::BeforeGroupContaining => "beforeGroupContaining",
            Self::AfterGroupContaining => "afterGroupContaining",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for Relationship {
    fn from(value: &str) -> Self {
        match value {
            "before" => Self::Before,
            "after" => Self::After,
            "beforeGroupContaining" => Self::BeforeGroupContaining,
            "afterGroupContaining" => Self::AfterGroupContaining,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub relationship: Relationship,
    pub command: String,
}

impl Position {
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(relationship), Some(command), None) => Ok(Self {
                relationship: Relationship::from(relationship),
                command: command.to_string(),
            }),
            _ => Err(Error::MalformedPosition {
                position: raw.to_string(),
            }),
        }
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.relationship.as_str(), self.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_relationship() {
        for (raw, relationship) in [
            ("before=core:one", Relationship::Before),
            ("after=core:one", Relationship::After),
            (
                "beforeGroupContaining=core:one",
                Relationship::BeforeGroupContaining,
            ),
            (
                "afterGroupContaining=core:one",
                Relationship::AfterGroupContaining,
            ),
        ] {
            let position = Position::parse(raw).unwrap();
            assert_eq!(position.relationship, relationship);
            assert_eq!(position.command, "core:one");
            assert_eq!(position.to_string(), raw);
        }
    }

    #[test]
    fn unknown_relationships_parse_but_are_inert() {
        let position: Position = "beside=core:one".parse().unwrap();
        assert_eq!(
            position.relationship,
            Relationship::Other("beside".to_string())
        );
        assert!(!position.relationship.is_item_level());
        assert!(!position.relationship.is_group_level());
    }

    #[test]
    fn empty_command_is_well_formed() {
        let position = Position::parse("after=").unwrap();
        assert_eq!(position.relationship, Relationship::After);
        assert_eq!(position.command, "");
    }

    #[test]
    fn rejects_anything_but_two_parts() {
        for raw in ["after", "after=a=b", "", "=="] {
            let err = Position::parse(raw).unwrap_err();
            assert_eq!(err.to_string(), format!("Malformed position argument {raw}"));
        }
    }
}
