use std::fmt::Display;

use fxhash::FxHashMap;

use crate::{
    coord::{in_bounds, Coord, Point},
    entity::Entity,
    error::ReadError,
};

/// Square grid with single character entity glyphs placed on its cells
#[derive(Debug, Clone)]
pub struct Map {
    size: Coord,
    cells: FxHashMap<Point, char>,
    entities: Vec<Entity>,
}

impl Map {
    pub fn new(size: Coord) -> Self {
        Map {
            size,
            cells: FxHashMap::default(),
            entities: Vec::new(),
        }
    }

    pub fn with_entities<T>(size: Coord, entities: T) -> Result<Self, ReadError>
    where
        T: IntoIterator<Item = Entity>,
    {
        let mut map = Map::new(size);
        for entity in entities {
            map.place(entity)?;
        }
        Ok(map)
    }

    /// Places `entity` on its cell. Fails if the tag is not a single token,
    /// the cell lies outside the map or is already taken; the map is left
    /// unchanged in that case.
    pub fn place(&mut self, entity: Entity) -> Result<(), ReadError> {
        if entity.tag.is_empty() || entity.tag.chars().any(char::is_whitespace) {
            return Err(ReadError::entity(
                &entity.describe(),
                format!("tag '{}' must be a single non-empty token", entity.tag),
            ));
        }
        let (row, col) = entity.position();
        if !in_bounds((row, col), self.size) {
            return Err(ReadError::OutOfBounds {
                tag: entity.tag,
                row,
                col,
                size: self.size,
            });
        }
        if let Some(glyph) = self.cells.get(&(row, col)) {
            return Err(ReadError::CellOccupied {
                tag: entity.tag,
                row,
                col,
                glyph: *glyph,
            });
        }

        self.cells.insert((row, col), entity.glyph());
        self.entities.push(entity);
        Ok(())
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn get_cell(&self, row: Coord, col: Coord) -> Option<char> {
        self.cells.get(&(row, col)).copied()
    }

    /// Entities in placement order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    fn separator(&self) -> String {
        format!("   +{}", "---+".repeat(self.size as usize))
    }
}

/// Renders the bordered grid. Column labels run along the top, row labels
/// down the left side with row 0 at the bottom. There is no trailing newline.
impl Display for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = self.separator();

        f.write_str("   ")?;
        for col in 0..self.size {
            write!(f, " {:03}", col)?;
        }

        for row in (0..self.size).rev() {
            write!(f, "\n{}\n{:03}|", separator, row)?;
            for col in 0..self.size {
                match self.get_cell(row, col) {
                    Some(glyph) => write!(f, " {} |", glyph)?,
                    None => f.write_str("   |")?,
                }
            }
        }

        write!(f, "\n{}", separator)
    }
}
