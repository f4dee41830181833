use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    coord::{Coord, Point},
    error::ReadError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Flower,
    Other(char),
}

impl From<char> for EntityKind {
    fn from(glyph: char) -> Self {
        match glyph {
            'F' => EntityKind::Flower,
            other => EntityKind::Other(other),
        }
    }
}

impl From<&EntityKind> for char {
    fn from(kind: &EntityKind) -> char {
        match kind {
            EntityKind::Flower => 'F',
            EntityKind::Other(glyph) => *glyph,
        }
    }
}

/// A placed object together with its growth timeline
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Entity {
    pub tag: String,
    pub row: Coord,
    pub col: Coord,
    pub timeline: Vec<f64>,
}

impl Entity {
    /// The entity in its input line form, `tag row col count`
    pub fn describe(&self) -> String {
        format!("{} {} {} {}", self.tag, self.row, self.col, self.timeline.len())
    }

    pub fn position(&self) -> Point {
        (self.row, self.col)
    }

    /// First character of the tag
    pub fn glyph(&self) -> char {
        // Map::place refuses entities with an empty tag
        self.tag.chars().next().unwrap_or('?')
    }

    pub fn kind(&self) -> EntityKind {
        EntityKind::from(self.glyph())
    }
}

/// Entity definition line `tag row col count`, `count` being the number of
/// timeline lines that follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityLine {
    pub tag: String,
    pub row: Coord,
    pub col: Coord,
    pub count: usize,
}

impl EntityLine {
    pub fn with_timeline(self, timeline: Vec<f64>) -> Entity {
        let EntityLine { tag, row, col, .. } = self;
        Entity {
            tag,
            row,
            col,
            timeline,
        }
    }
}

impl FromStr for EntityLine {
    type Err = ReadError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[tag, row, col, count] = tokens.as_slice() else {
            return Err(ReadError::entity(
                line,
                format!("expected 4 tokens, got {}", tokens.len()),
            ));
        };

        let number = |name: &str, token: &str| {
            token.parse::<u64>().map_err(|_| {
                ReadError::entity(
                    line,
                    format!("{} '{}' is not a non-negative integer", name, token),
                )
            })
        };
        let coord = |name: &str, token: &str| {
            let value = number(name, token)?;
            Coord::try_from(value)
                .map_err(|_| ReadError::entity(line, format!("{} {} is too large", name, value)))
        };

        Ok(EntityLine {
            tag: tag.to_string(),
            row: coord("row", row)?,
            col: coord("column", col)?,
            count: usize::try_from(number("timeline length", count)?).map_err(|_| {
                ReadError::entity(line, format!("timeline length {} is too large", count))
            })?,
        })
    }
}

/// Parses one timeline line of the entity tagged `tag`
pub fn parse_timeline_value(tag: &str, line: &str) -> Result<f64, ReadError> {
    let value = line.trim();
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ReadError::InvalidTimelineValue {
            tag: tag.to_string(),
            value: value.to_string(),
        }),
    }
}
