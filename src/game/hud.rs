//! HUD Strings Module
//!
//! The three user-visible status lines, re-derived every tick. Pure
//! formatting; the session decides which one applies.

use super::plates::PLATE_COUNT;

/// Prompt shown before the game starts.
pub const START_PROMPT: &str = "Press SPACE to Start";

/// Banner shown above the start prompt.
pub const TAGLINE: &str = "Fill 100 plates as fast as you can!";

/// Live score and timer line while the game is in progress.
pub fn progress_line(score: u32, elapsed_seconds: f32) -> String {
    format!(
        "Plates Hit: {}/{} | Time: {:.1}s",
        score, PLATE_COUNT, elapsed_seconds
    )
}

/// Score line before the clock starts.
pub fn score_line(score: u32) -> String {
    format!("Plates Hit: {}/{}", score, PLATE_COUNT)
}

/// Completion message with the frozen run time.
pub fn completion_line(total_seconds: f32) -> String {
    format!("Taco Time: {:.1}s | Press SPACE to restart", total_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line_one_decimal() {
        assert_eq!(progress_line(37, 12.345), "Plates Hit: 37/100 | Time: 12.3s");
    }

    #[test]
    fn test_progress_line_zero() {
        assert_eq!(progress_line(0, 0.0), "Plates Hit: 0/100 | Time: 0.0s");
    }

    #[test]
    fn test_score_line() {
        assert_eq!(score_line(0), "Plates Hit: 0/100");
    }

    #[test]
    fn test_completion_line() {
        assert_eq!(
            completion_line(95.07),
            "Taco Time: 95.1s | Press SPACE to restart"
        );
    }
}
