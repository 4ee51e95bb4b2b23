//! High score leaderboard system
//!
//! Tracks the top 10 scores with the pilot's name and ship descriptor,
//! persisted as a JSON file on disk.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Ship hull families a score can be earned with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShipType {
    Custom,
    #[default]
    Default,
    Triangle,
    Diamond,
}

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Pilot's display name
    pub name: String,
    /// Final score
    pub score: u64,
    /// Ship flown for the run
    pub ship: ShipType,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(
        &mut self,
        name: &str,
        score: u64,
        ship: ShipType,
        timestamp: f64,
    ) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            name: name.to_string(),
            score,
            ship,
            timestamp,
        };

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores from a JSON file, starting fresh when absent or corrupt
    pub fn load(path: &Path) -> Self {
        if let Ok(json) = std::fs::read_to_string(path) {
            if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                log::info!("Loaded {} high scores", scores.entries.len());
                return scores;
            }
            log::warn!("Corrupt high score file {}, starting fresh", path.display());
        } else {
            log::info!("No high scores found, starting fresh");
        }
        Self::new()
    }

    /// Save high scores as JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string(self)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        std::fs::write(path, json)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_never_qualifies() {
        let board = HighScores::new();
        assert!(!board.qualifies(0));
        assert!(board.qualifies(1));
    }

    #[test]
    fn test_scores_sorted_descending_with_ranks() {
        let mut board = HighScores::new();
        assert_eq!(board.add_score("ada", 100, ShipType::Triangle, 0.0), Some(1));
        assert_eq!(board.add_score("bob", 300, ShipType::Default, 1.0), Some(1));
        assert_eq!(board.add_score("cyd", 200, ShipType::Diamond, 2.0), Some(2));

        let scores: Vec<u64> = board.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![300, 200, 100]);
        assert_eq!(board.top_score(), Some(300));
    }

    #[test]
    fn test_board_truncates_at_capacity() {
        let mut board = HighScores::new();
        for i in 1..=15u64 {
            board.add_score("p", i * 10, ShipType::Default, i as f64);
        }
        assert_eq!(board.entries.len(), MAX_HIGH_SCORES);
        // Lowest surviving score is 60: 150 down to 60 fills ten slots
        assert_eq!(board.entries.last().unwrap().score, 60);
        assert!(!board.qualifies(50));
        assert_eq!(board.potential_rank(1000), Some(1));
    }
}
