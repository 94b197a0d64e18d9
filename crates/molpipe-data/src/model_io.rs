use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Serializable bundle of fitted linear-model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelWeights {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Save model weights to a JSON file.
pub fn save_weights(weights: &ModelWeights, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(weights)?;
    fs::write(path.as_ref(), json)?;
    Ok(())
}

/// Load model weights from a JSON file.
pub fn load_weights(path: impl AsRef<Path>) -> Result<ModelWeights, Box<dyn Error>> {
    let json = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_round_trip() {
        let path = std::env::temp_dir().join("molpipe_model_io_test.json");
        let saved = ModelWeights {
            weights: vec![0.5, -1.25],
            bias: 3.0,
        };
        save_weights(&saved, &path).unwrap();
        let loaded = load_weights(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(saved, loaded);
    }
}
