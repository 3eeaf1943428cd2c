/// Colour class used to render a difficulty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyColor {
    Green,
    Yellow,
    Red,
    /// Neutral colour for labels the API may add later.
    Secondary,
}

/// Maps a difficulty label to its colour class.
///
/// Matching is exact, so `"Easy"` is treated as unrecognised.
pub fn difficulty_color(difficulty: &str) -> DifficultyColor {
    match difficulty {
        "easy" => DifficultyColor::Green,
        "medium" => DifficultyColor::Yellow,
        "hard" => DifficultyColor::Red,
        _ => DifficultyColor::Secondary,
    }
}
