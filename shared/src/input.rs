use crate::vec3::{vec3, Vec3};

/// Movement keys interpreted by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    /// Forward (-z)
    W,
    /// Left (-x)
    A,
    /// Back (+z)
    S,
    /// Right (+x)
    D,
}

impl MoveKey {
    pub const ALL: [MoveKey; 4] = [MoveKey::W, MoveKey::A, MoveKey::S, MoveKey::D];

    /// Parse a key identifier, case-insensitive. Returns None for keys the game ignores.
    pub fn from_key(key: &str) -> Option<MoveKey> {
        match key.to_ascii_lowercase().as_str() {
            "w" => Some(MoveKey::W),
            "a" => Some(MoveKey::A),
            "s" => Some(MoveKey::S),
            "d" => Some(MoveKey::D),
            _ => None,
        }
    }

    /// Unit direction on the arena floor.
    pub fn direction(self) -> Vec3 {
        match self {
            MoveKey::W => vec3(0.0, 0.0, -1.0),
            MoveKey::S => vec3(0.0, 0.0, 1.0),
            MoveKey::A => vec3(-1.0, 0.0, 0.0),
            MoveKey::D => vec3(1.0, 0.0, 0.0),
        }
    }
}

/// Currently held movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub w: bool,
    pub a: bool,
    pub s: bool,
    pub d: bool,
}

impl InputState {
    pub fn held(&self, key: MoveKey) -> bool {
        match key {
            MoveKey::W => self.w,
            MoveKey::A => self.a,
            MoveKey::S => self.s,
            MoveKey::D => self.d,
        }
    }

    pub fn set(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::W => self.w = held,
            MoveKey::A => self.a = held,
            MoveKey::S => self.s = held,
            MoveKey::D => self.d = held,
        }
    }

    /// Key-down event. Returns true if the key is a movement key.
    pub fn key_down(&mut self, key: &str) -> bool {
        match MoveKey::from_key(key) {
            Some(k) => {
                self.set(k, true);
                true
            }
            None => false,
        }
    }

    /// Key-up event. Returns true if the key is a movement key.
    pub fn key_up(&mut self, key: &str) -> bool {
        match MoveKey::from_key(key) {
            Some(k) => {
                self.set(k, false);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any_held(&self) -> bool {
        self.w || self.a || self.s || self.d
    }

    /// Sum of `magnitude` along each held key's direction. Opposing keys cancel.
    pub fn movement_force(&self, magnitude: f32) -> Vec3 {
        let mut force = Vec3::ZERO;
        for key in MoveKey::ALL {
            if self.held(key) {
                let dir = key.direction();
                force.x += dir.x * magnitude;
                force.z += dir.z * magnitude;
            }
        }
        force
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::length;

    const FORCE: f32 = 50.0;

    fn held(keys: &[MoveKey]) -> InputState {
        let mut input = InputState::default();
        for k in keys {
            input.set(*k, true);
        }
        input
    }

    mod parsing {
        use super::*;

        #[test]
        fn parses_lowercase_and_uppercase() {
            assert_eq!(MoveKey::from_key("w"), Some(MoveKey::W));
            assert_eq!(MoveKey::from_key("W"), Some(MoveKey::W));
            assert_eq!(MoveKey::from_key("D"), Some(MoveKey::D));
        }

        #[test]
        fn ignores_unknown_keys() {
            assert_eq!(MoveKey::from_key("q"), None);
            assert_eq!(MoveKey::from_key("Enter"), None);
            assert_eq!(MoveKey::from_key(""), None);
        }
    }

    mod events {
        use super::*;

        #[test]
        fn key_down_then_up_toggles_flag() {
            let mut input = InputState::default();
            assert!(input.key_down("A"));
            assert!(input.a);
            assert!(input.key_up("a"));
            assert!(!input.a);
        }

        #[test]
        fn unknown_key_leaves_state_untouched() {
            let mut input = held(&[MoveKey::S]);
            assert!(!input.key_down("x"));
            assert!(!input.key_up("Shift"));
            assert_eq!(input, held(&[MoveKey::S]));
        }

        #[test]
        fn clear_releases_everything() {
            let mut input = held(&MoveKey::ALL);
            input.clear();
            assert!(!input.any_held());
        }
    }

    mod force {
        use super::*;

        #[test]
        fn no_keys_gives_zero_force() {
            assert!(InputState::default().movement_force(FORCE).is_zero());
        }

        #[test]
        fn single_key_gives_full_magnitude_along_axis() {
            assert_eq!(held(&[MoveKey::W]).movement_force(FORCE), vec3(0.0, 0.0, -FORCE));
            assert_eq!(held(&[MoveKey::S]).movement_force(FORCE), vec3(0.0, 0.0, FORCE));
            assert_eq!(held(&[MoveKey::A]).movement_force(FORCE), vec3(-FORCE, 0.0, 0.0));
            assert_eq!(held(&[MoveKey::D]).movement_force(FORCE), vec3(FORCE, 0.0, 0.0));
            for key in MoveKey::ALL {
                assert_eq!(length(held(&[key]).movement_force(FORCE)), FORCE);
            }
        }

        #[test]
        fn opposing_keys_cancel() {
            let ws = held(&[MoveKey::W, MoveKey::S]).movement_force(FORCE);
            assert_eq!(ws.z, 0.0);
            let ad = held(&[MoveKey::A, MoveKey::D]).movement_force(FORCE);
            assert_eq!(ad.x, 0.0);
            assert!(held(&MoveKey::ALL).movement_force(FORCE).is_zero());
        }

        #[test]
        fn opposing_pair_leaves_other_axis_intact() {
            let f = held(&[MoveKey::W, MoveKey::S, MoveKey::D]).movement_force(FORCE);
            assert_eq!(f, vec3(FORCE, 0.0, 0.0));
        }

        #[test]
        fn diagonal_adds_both_axes() {
            let f = held(&[MoveKey::W, MoveKey::A]).movement_force(FORCE);
            assert_eq!(f, vec3(-FORCE, 0.0, -FORCE));
        }

        #[test]
        fn force_never_has_vertical_component() {
            for mask in 0u8..16 {
                let keys: Vec<MoveKey> = MoveKey::ALL
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, k)| *k)
                    .collect();
                assert_eq!(held(&keys).movement_force(FORCE).y, 0.0);
            }
        }
    }
}
