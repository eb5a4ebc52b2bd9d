// Game action definitions and key bindings

use winit::keyboard::KeyCode;

/// Everything a key press can mean in-game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Player movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Combat
    Attack,

    // World
    RegenerateMap,

    // Camera
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (WASD)
        (KeyCode::KeyW, Action::MoveUp),
        (KeyCode::KeyS, Action::MoveDown),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        // Combat
        (KeyCode::KeyX, Action::Attack),
        // World
        (KeyCode::KeyG, Action::RegenerateMap),
        // Camera
        (KeyCode::KeyQ, Action::ZoomIn),
        (KeyCode::KeyE, Action::ZoomOut),
        (KeyCode::ArrowLeft, Action::PanLeft),
        (KeyCode::ArrowRight, Action::PanRight),
        (KeyCode::ArrowUp, Action::PanUp),
        (KeyCode::ArrowDown, Action::PanDown),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_key_is_bound_twice() {
        let bindings = default_bindings();
        let keys: HashSet<KeyCode> = bindings.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys.len(), bindings.len());
    }

    #[test]
    fn test_core_actions_are_bound() {
        let bindings = default_bindings();
        let actions: HashSet<Action> = bindings.iter().map(|(_, action)| *action).collect();

        assert!(actions.contains(&Action::MoveUp));
        assert!(actions.contains(&Action::MoveDown));
        assert!(actions.contains(&Action::MoveLeft));
        assert!(actions.contains(&Action::MoveRight));
        assert!(actions.contains(&Action::Attack));
        assert!(actions.contains(&Action::RegenerateMap));
    }

    #[test]
    fn test_wasd_maps_to_movement() {
        let bindings = default_bindings();
        let find = |key: KeyCode| {
            bindings
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, action)| *action)
        };

        assert_eq!(find(KeyCode::KeyW), Some(Action::MoveUp));
        assert_eq!(find(KeyCode::KeyS), Some(Action::MoveDown));
        assert_eq!(find(KeyCode::KeyA), Some(Action::MoveLeft));
        assert_eq!(find(KeyCode::KeyD), Some(Action::MoveRight));
    }
}
