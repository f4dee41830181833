use std::io::{self, BufRead, BufReader};

use common::debug;

use crate::{
    config::MapConfig,
    entity::{parse_timeline_value, EntityLine},
    error::ReadError,
    map::Map,
};

/// A validated configuration and the map built from it
#[derive(Debug, Clone)]
pub struct Scene {
    pub config: MapConfig,
    pub map: Map,
}

/// Reads a scene from `reader`, ignoring the first `skip` lines
pub fn read_input<R: BufRead>(reader: R, skip: usize) -> Result<Scene, ReadError> {
    read_lines(reader.lines().skip(skip))
}

pub fn read_input_from_file(file_path: &str, skip: usize) -> Result<Scene, ReadError> {
    let file = std::fs::File::open(file_path)?;
    read_input(BufReader::new(file), skip)
}

fn read_lines<I>(mut lines: I) -> Result<Scene, ReadError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let config_line = lines
        .next()
        .transpose()?
        .ok_or_else(|| ReadError::config("", "missing configuration line"))?;
    let config: MapConfig = config_line.parse()?;
    debug!("read configuration {:?}", config);

    let mut map = Map::new(config.size);
    if !config.mode.collects_entities() {
        return Ok(Scene { config, map });
    }

    while let Some(line) = lines.next().transpose()? {
        if line.trim().is_empty() {
            continue;
        }

        let header: EntityLine = line.parse()?;
        // count is untrusted, the vector grows only with values actually read
        let mut timeline = Vec::new();
        while timeline.len() < header.count {
            match lines.next().transpose()? {
                Some(value) => timeline.push(parse_timeline_value(&header.tag, &value)?),
                None => {
                    return Err(ReadError::MissingTimelineValues {
                        tag: header.tag,
                        expected: header.count,
                        got: timeline.len(),
                    })
                }
            }
        }

        let entity = header.with_timeline(timeline);
        debug!(
            "placing {:?} at {:?} with {} timeline values",
            entity.kind(),
            entity.position(),
            entity.timeline.len()
        );
        map.place(entity)?;
    }

    Ok(Scene { config, map })
}
