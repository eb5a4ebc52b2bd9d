// Asset path resolution and frame discovery

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::AssetError;

/// Subdirectory holding the tile art
const TILES_DIR: &str = "tiles";
/// Subdirectory holding the player animation folders
const PLAYER_DIR: &str = "player";

/// Resolves asset files under a base directory.
///
/// Animation frames are individual numbered images ("0.png", "1.png",
/// ...) inside one folder per facing/activity pair.
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Full path of a tile texture
    pub fn tile_path(&self, name: &str) -> PathBuf {
        self.base_path.join(TILES_DIR).join(name)
    }

    /// Folder holding one animation's frames
    pub fn clip_dir(&self, facing: &str, activity: &str) -> PathBuf {
        self.base_path.join(PLAYER_DIR).join(facing).join(activity)
    }

    /// Numbered frame files in a clip folder, sorted by frame index.
    /// Files whose stem is not a plain number are ignored.
    pub fn frame_paths(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(AssetError::NotFound(dir.to_string_lossy().into_owned()).into());
        }

        let mut frames: Vec<(usize, PathBuf)> = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(AssetError::Io)? {
            let entry = entry.map_err(AssetError::Io)?;
            let path = entry.path();
            if let Some(index) = frame_index(&path) {
                frames.push((index, path));
            }
        }

        frames.sort_by_key(|(index, _)| *index);
        Ok(frames.into_iter().map(|(_, path)| path).collect())
    }

    /// Base directory all paths resolve under
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

/// Frame number encoded in a file name like "3.png"
fn frame_index(path: &Path) -> Option<usize> {
    if !path.is_file() {
        return None;
    }
    path.file_stem()?.to_str()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_tile_paths_resolve_under_tiles_dir() {
        let loader = AssetLoader::new("assets");
        let path = loader.tile_path("ground_a.png");
        assert_eq!(path, PathBuf::from("assets/tiles/ground_a.png"));
    }

    #[test]
    fn test_clip_dirs_nest_facing_then_activity() {
        let loader = AssetLoader::new("assets");
        let dir = loader.clip_dir("up", "attack_two");
        assert_eq!(dir, PathBuf::from("assets/player/up/attack_two"));
    }

    #[test]
    fn test_missing_clip_dir_is_an_error() {
        let loader = AssetLoader::new("assets");
        let missing = loader.clip_dir("up", "no_such_activity");
        assert!(loader.frame_paths(&missing).is_err());
    }

    #[test]
    fn test_frames_sort_numerically_and_skip_strays() {
        let dir = std::env::temp_dir().join(format!("isoglade_frames_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        for name in ["2.png", "0.png", "10.png", "1.png", "notes.txt"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let loader = AssetLoader::new(&dir);
        let frames = loader.frame_paths(&dir).unwrap();
        let names: Vec<String> = frames
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        fs::remove_dir_all(&dir).unwrap();

        // "10" sorts after "2" numerically, not lexically; "notes" drops out
        assert_eq!(names, vec!["0.png", "1.png", "2.png", "10.png"]);
    }
}
