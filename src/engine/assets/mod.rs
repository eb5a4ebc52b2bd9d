// Asset location and errors
//
// Finding files on disk is kept separate from decoding them; the
// renderer's texture manager owns decode and upload, this module owns
// paths.

pub mod loader;

pub use loader::AssetLoader;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound("tiles/ground_a.png".to_string());
        assert_eq!(err.to_string(), "Asset not found: tiles/ground_a.png");
    }
}
