//! Collision detection for lane-bound entities
//!
//! Two layers: a plain rectangle overlap test, and the lane rule on top of
//! it. An entity only affects the player when its rectangle overlaps the
//! player's AND it rests on the player's current lane. A mid-jump player
//! still counts as being in its lane, and an entity in a neighbouring lane
//! that visually overlaps the sprite is ignored entirely.

use crate::Rect;

/// Strict axis-aligned overlap. Rectangles that only share an edge do not collide.
#[inline]
pub fn collides(a: &Rect, b: &Rect) -> bool {
    a.x() < b.right() && b.x() < a.right() && a.y() < b.bottom() && b.y() < a.bottom()
}

/// Lane-exact contact between a moving entity and the player
///
/// `lane_y` is the resting y of the lane the player currently occupies.
#[inline]
pub fn lane_contact(entity: &Rect, player: &Rect, lane_y: i32) -> bool {
    collides(entity, player) && entity.y() == lane_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Lanes;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(collides(&a, &Rect::new(5, 5, 10, 10)));
        assert!(collides(&a, &Rect::new(-5, -5, 10, 10)));
        // Containment counts
        assert!(collides(&Rect::new(0, 0, 100, 100), &Rect::new(10, 10, 5, 5)));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!collides(&a, &Rect::new(10, 0, 10, 10)));
        assert!(!collides(&a, &Rect::new(0, 10, 10, 10)));
        assert!(!collides(&a, &Rect::new(50, 50, 10, 10)));
    }

    #[test]
    fn test_lane_contact_requires_same_lane() {
        let lanes = Lanes::default();
        // Player resting in the middle lane
        let player = Rect::new(100, lanes.y(1), 90, 90);

        // Top-lane obstacle overlaps the player's sprite (315 + 140 > 442) but is in another lane
        let top = Rect::new(120, lanes.y(0), 140, 140);
        assert!(collides(&top, &player));
        assert!(!lane_contact(&top, &player, lanes.y(1)));

        let middle = Rect::new(120, lanes.y(1), 140, 140);
        assert!(lane_contact(&middle, &player, lanes.y(1)));
    }

    #[test]
    fn test_lane_contact_uses_lane_not_jump_height() {
        let lanes = Lanes::default();
        // Player mid-jump, 20px above the middle lane
        let player = Rect::new(100, lanes.y(1) - 20, 90, 90);
        let piece = Rect::new(120, lanes.y(1), 80, 80);
        assert!(lane_contact(&piece, &player, lanes.y(1)));
    }
}
