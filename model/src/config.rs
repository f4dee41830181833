use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    coord::{Coord, MAX_SIZE},
    error::ReadError,
};

/// Selects whether the lines after the configuration line are read as entities
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Sort,
    Full,
    Grid,
}

impl RenderMode {
    pub fn collects_entities(&self) -> bool {
        matches!(self, RenderMode::Sort | RenderMode::Full)
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sort" => Ok(RenderMode::Sort),
            "full" => Ok(RenderMode::Full),
            "grid" => Ok(RenderMode::Grid),
            _ => Err(format!(
                "unknown render mode '{}', expected one of 'sort', 'full', 'grid'",
                s
            )),
        }
    }
}

impl Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RenderMode::Sort => "sort",
            RenderMode::Full => "full",
            RenderMode::Grid => "grid",
        })
    }
}

/// The first input line: `size iterations sort_key mode`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MapConfig {
    pub size: Coord,
    pub iterations: u32,
    pub sort_key: char,
    pub mode: RenderMode,
}

impl MapConfig {
    /// Checks the values of a config that did not come from a text line,
    /// e.g. one deserialized from a scene file.
    pub fn validate(&self) -> Result<(), ReadError> {
        check_size(self.size as i64).map_err(|reason| ReadError::config(&self.to_string(), reason))?;
        Ok(())
    }
}

fn check_size(size: i64) -> Result<Coord, String> {
    if size <= 0 {
        Err(format!("map size must be positive, got {}", size))
    } else if size > MAX_SIZE as i64 {
        Err(format!("map size must not exceed {}, got {}", MAX_SIZE, size))
    } else {
        Ok(size as Coord)
    }
}

fn parse_size(token: &str) -> Result<Coord, String> {
    let size = token
        .parse::<i64>()
        .map_err(|_| format!("map size '{}' is not an integer", token))?;
    check_size(size)
}

fn parse_iterations(token: &str) -> Result<u32, String> {
    let iterations = token
        .parse::<i64>()
        .map_err(|_| format!("iteration count '{}' is not an integer", token))?;
    if iterations < 0 {
        return Err(format!("iteration count must not be negative, got {}", iterations));
    }
    u32::try_from(iterations).map_err(|_| format!("iteration count {} is too large", iterations))
}

fn parse_sort_key(token: &str) -> Result<char, String> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Ok(key),
        _ => Err(format!("sort key '{}' must be a single character", token)),
    }
}

impl FromStr for MapConfig {
    type Err = ReadError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ReadError::config(line, reason);

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[size, iterations, sort_key, mode] = tokens.as_slice() else {
            return Err(invalid(format!("expected 4 tokens, got {}", tokens.len())));
        };

        Ok(MapConfig {
            size: parse_size(size).map_err(invalid)?,
            iterations: parse_iterations(iterations).map_err(invalid)?,
            sort_key: parse_sort_key(sort_key).map_err(invalid)?,
            mode: mode.parse().map_err(invalid)?,
        })
    }
}

impl Display for MapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.size, self.iterations, self.sort_key, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! config_error {
        ($line: expr) => {{
            match $line.parse::<MapConfig>() {
                Err(ReadError::InvalidConfig { reason, .. }) => reason,
                other => panic!("expected a configuration error, got {:?}", other),
            }
        }};
    }

    #[test]
    fn test_parse_valid_line() {
        let config: MapConfig = "10 5 f sort".parse().unwrap();
        assert_eq!(
            MapConfig {
                size: 10,
                iterations: 5,
                sort_key: 'f',
                mode: RenderMode::Sort
            },
            config
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let config: MapConfig = "  3\t0  s   grid \r".parse().unwrap();
        assert_eq!(3, config.size);
        assert_eq!(0, config.iterations);
        assert_eq!(RenderMode::Grid, config.mode);
    }

    #[test]
    fn test_reject_non_positive_size() {
        assert_eq!("map size must be positive, got -10", config_error!("-10 -10 s sort"));
        assert_eq!("map size must be positive, got 0", config_error!("0 0 s sort"));
    }

    #[test]
    fn test_reject_oversized_map() {
        assert_eq!("map size must not exceed 1000, got 1001", config_error!("1001 1 s sort"));
        assert!("1000 1 s grid".parse::<MapConfig>().is_ok());
    }

    #[test]
    fn test_reject_malformed_tokens() {
        assert_eq!("map size 'ten' is not an integer", config_error!("ten 1 s sort"));
        assert_eq!("map size '1.5' is not an integer", config_error!("1.5 1 s sort"));
        assert_eq!("iteration count must not be negative, got -1", config_error!("10 -1 s sort"));
        assert_eq!("iteration count 'x' is not an integer", config_error!("10 x s sort"));
        assert_eq!("sort key 'ab' must be a single character", config_error!("10 1 ab sort"));
        assert!(config_error!("10 1 s shuffle").starts_with("unknown render mode 'shuffle'"));
    }

    #[test]
    fn test_reject_wrong_token_count() {
        assert_eq!("expected 4 tokens, got 0", config_error!(""));
        assert_eq!("expected 4 tokens, got 3", config_error!("10 1 s"));
        assert_eq!("expected 4 tokens, got 5", config_error!("10 1 s sort extra"));
    }

    #[test]
    fn test_display_matches_input_form() {
        let config: MapConfig = "7 2 k full".parse().unwrap();
        assert_eq!("7 2 k full", config.to_string());
    }

    #[test]
    fn test_validate_deserialized_config() {
        let config = MapConfig {
            size: 0,
            iterations: 1,
            sort_key: 's',
            mode: RenderMode::Sort,
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            "ERROR: Invalid configuration line '0 1 s sort': map size must be positive, got 0",
            err.to_string()
        );
    }

    #[test]
    fn test_grid_mode_skips_entities() {
        assert!(RenderMode::Sort.collects_entities());
        assert!(RenderMode::Full.collects_entities());
        assert!(!RenderMode::Grid.collects_entities());
    }
}
