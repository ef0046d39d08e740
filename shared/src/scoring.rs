use crate::vec3::{distance, Vec3};

/// An AI ball scores when its center is closer than twice the player radius.
pub fn is_scoring_contact(ai: Vec3, player: Vec3, player_radius: f32) -> bool {
    distance(ai, player) < player_radius * 2.0
}

/// Count AI balls currently in contact with the player. Contacts are not
/// deduplicated across frames: a ball that stays in range counts every frame.
pub fn count_contacts<I>(ai_positions: I, player: Vec3, player_radius: f32) -> u32
where
    I: IntoIterator<Item = Vec3>,
{
    ai_positions
        .into_iter()
        .filter(|ai| is_scoring_contact(*ai, player, player_radius))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::vec3;

    #[test]
    fn touching_spheres_score() {
        assert!(is_scoring_contact(vec3(1.9, 1.0, 0.0), vec3(0.0, 1.0, 0.0), 1.0));
    }

    #[test]
    fn exactly_two_radii_does_not_score() {
        assert!(!is_scoring_contact(vec3(2.0, 1.0, 0.0), vec3(0.0, 1.0, 0.0), 1.0));
    }

    #[test]
    fn distance_is_three_dimensional() {
        // Close on the floor but stacked high above.
        assert!(!is_scoring_contact(vec3(0.5, 5.0, 0.0), vec3(0.0, 1.0, 0.0), 1.0));
    }

    #[test]
    fn counts_every_ball_in_range() {
        let player = vec3(0.0, 1.0, 0.0);
        let balls = [
            vec3(1.0, 1.0, 0.0),
            vec3(0.0, 1.0, -1.5),
            vec3(10.0, 1.0, 0.0),
            vec3(-3.0, 1.0, 3.0),
        ];
        assert_eq!(count_contacts(balls, player, 1.0), 2);
    }

    #[test]
    fn no_balls_no_contacts() {
        assert_eq!(count_contacts(Vec::new(), Vec3::ZERO, 1.0), 0);
    }
}
