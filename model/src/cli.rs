use serde::{Deserialize, Serialize};

use crate::{config::MapConfig, entity::Entity, error::ReadError, input::Scene, map::Map};

/// Scene export written by `printer --out cli` and read back by `printer --cli`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CliFile {
    pub config: MapConfig,
    pub entities: Vec<Entity>,
}

impl CliFile {
    pub fn new(scene: &Scene) -> Self {
        CliFile {
            config: scene.config.clone(),
            entities: scene.map.entities().to_vec(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ReadError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: &str) -> Result<Self, ReadError> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Validates the config and places every entity, as if the scene had
    /// been read from text input.
    pub fn into_scene(self) -> Result<Scene, ReadError> {
        let CliFile { config, entities } = self;
        config.validate()?;
        let map = Map::with_entities(config.size, entities)?;
        Ok(Scene { config, map })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_input;

    #[test]
    fn test_export_and_reload() {
        let scene = read_input("6 3 f sort\nF 2 2 2\n1.0\n2.0\nq 5 0 0\n".as_bytes(), 0).unwrap();
        let json = CliFile::new(&scene).to_json_string().unwrap();

        let reloaded = CliFile::from_json_str(&json).unwrap().into_scene().unwrap();
        assert_eq!(scene.config, reloaded.config);
        assert_eq!(scene.map.entities(), reloaded.map.entities());
        assert_eq!(scene.map.to_string(), reloaded.map.to_string());
    }

    #[test]
    fn test_json_layout() {
        let json = r#"{"config":{"size":2,"iterations":0,"sort_key":"s","mode":"grid"},"entities":[{"tag":"F","row":1,"col":0,"timeline":[0.5]}]}"#;
        let scene = CliFile::from_json_str(json).unwrap().into_scene().unwrap();
        assert_eq!(Some('F'), scene.map.get_cell(1, 0));
    }

    #[test]
    fn test_reject_invalid_scene_file() {
        let zero = r#"{"config":{"size":0,"iterations":0,"sort_key":"s","mode":"sort"},"entities":[]}"#;
        let err = CliFile::from_json_str(zero).unwrap().into_scene().unwrap_err();
        assert!(err.to_string().starts_with("ERROR: Invalid configuration line"));

        let outside = r#"{"config":{"size":2,"iterations":0,"sort_key":"s","mode":"sort"},"entities":[{"tag":"F","row":2,"col":0,"timeline":[]}]}"#;
        let err = CliFile::from_json_str(outside).unwrap().into_scene().unwrap_err();
        assert!(matches!(err, ReadError::OutOfBounds { .. }));

        let blank = r#"{"config":{"size":2,"iterations":0,"sort_key":"s","mode":"sort"},"entities":[{"tag":"","row":1,"col":1,"timeline":[]}]}"#;
        let err = CliFile::from_json_str(blank).unwrap().into_scene().unwrap_err();
        assert_eq!(
            "ERROR: Invalid entity line '1 1 0': tag '' must be a single non-empty token",
            err.to_string()
        );

        let err = CliFile::from_json_str("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("ERROR: Invalid scene file"));
    }
}
