//! Per-level configuration

use serde::{Deserialize, Serialize};

/// One of the three levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// 1-based level number
    pub fn number(self) -> u32 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    /// 0-based index for per-level tables
    #[inline]
    pub fn index(self) -> usize {
        self.number() as usize - 1
    }

    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            3 => Some(Level::Three),
            _ => None,
        }
    }

    /// Display name, e.g. "Level 2"
    pub fn name(self) -> &'static str {
        match self {
            Level::One => "Level 1",
            Level::Two => "Level 2",
            Level::Three => "Level 3",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number().checked_sub(1)?)
    }

    /// Obstacle speed in px per tick
    pub fn obstacle_speed(self) -> i32 {
        match self {
            Level::One => 7,
            Level::Two => 10,
            Level::Three => 13,
        }
    }

    /// Ticks between obstacle spawns (denser on harder levels)
    pub fn obstacle_spawn_interval(self) -> u64 {
        match self {
            Level::One => 80,
            Level::Two => 55,
            Level::Three => 35,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_chain() {
        assert_eq!(Level::One.next(), Some(Level::Two));
        assert_eq!(Level::Two.next(), Some(Level::Three));
        assert_eq!(Level::Three.next(), None);
        assert_eq!(Level::One.previous(), None);
        assert_eq!(Level::Three.previous(), Some(Level::Two));
    }

    #[test]
    fn test_harder_levels_are_faster_and_denser() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[1].obstacle_speed() > pair[0].obstacle_speed());
            assert!(pair[1].obstacle_spawn_interval() < pair[0].obstacle_spawn_interval());
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Level::Two.to_string(), "Level 2");
        assert_eq!(Level::from_number(4), None);
    }
}
