use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpRewards {
    pub lesson_complete: u32,
    pub perfect_score: u32,
    pub streak: u32,
    pub checkpoint: u32,
    pub capstone: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRules {
    pub starting: u32,
    pub max: u32,
    pub lose_on_mistake: u32,
    pub regain_on_success: u32,
    /// Hours until all hearts are restored.
    pub full_regain_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRewards {
    pub daily: u32,
    pub weekly: u32,
    pub monthly: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub xp: u32,
}

/// XP, hearts, streaks and achievements attached to every plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gamification {
    pub xp: XpRewards,
    pub hearts: HeartRules,
    pub streaks: StreakRewards,
    pub achievements: Vec<Achievement>,
}

impl Default for Gamification {
    fn default() -> Self {
        Self {
            xp: XpRewards {
                lesson_complete: 25,
                perfect_score: 50,
                streak: 10,
                checkpoint: 100,
                capstone: 500,
            },
            hearts: HeartRules {
                starting: 5,
                max: 5,
                lose_on_mistake: 1,
                regain_on_success: 1,
                full_regain_hours: 24,
            },
            streaks: StreakRewards {
                daily: 10,
                weekly: 50,
                monthly: 200,
            },
            achievements: vec![
                achievement(
                    "first-lesson",
                    "Getting Started",
                    "Complete your first lesson",
                    "🎯",
                    25,
                ),
                achievement("week-streak", "Week Warrior", "Maintain a 7-day streak", "🔥", 100),
                achievement("perfect-score", "Perfectionist", "Get 100% on 10 lessons", "⭐", 150),
            ],
        }
    }
}

fn achievement(id: &str, title: &str, description: &str, icon: &str, xp: u32) -> Achievement {
    Achievement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        xp,
    }
}

/// Accuracy and pace thresholds that move lesson difficulty up or down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveRules {
    pub accuracy_threshold: f64,
    pub time_threshold: f64,
    pub increase_accuracy: f64,
    pub increase_time: f64,
    pub decrease_accuracy: f64,
    pub decrease_time: f64,
    pub max_adjustment: u8,
}

impl Default for AdaptiveRules {
    fn default() -> Self {
        Self {
            accuracy_threshold: 0.8,
            time_threshold: 0.7,
            increase_accuracy: 0.9,
            increase_time: 0.5,
            decrease_accuracy: 0.6,
            decrease_time: 1.5,
            max_adjustment: 2,
        }
    }
}

/// Pass threshold for one mastery tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    pub tier: String,
    pub threshold: f64,
    pub description: String,
    pub retry: String,
}

/// The four mastery tiers, lowest first.
pub fn assessment_rubrics() -> Vec<Rubric> {
    [
        ("beginner", 0.6, "Basic understanding of concepts", "Review content and try again"),
        ("intermediate", 0.75, "Good grasp of fundamentals", "Practice weak areas and retry"),
        (
            "advanced",
            0.85,
            "Strong understanding and application",
            "Focus on specific problem areas",
        ),
        ("proficient", 0.95, "Mastery level understanding", "Move to next level"),
    ]
    .into_iter()
    .map(|(tier, threshold, description, retry)| Rubric {
        tier: tier.to_string(),
        threshold,
        description: description.to_string(),
        retry: retry.to_string(),
    })
    .collect()
}

/// Filled and empty stars for a 1–5 difficulty, rounded half up.
pub fn difficulty_stars(difficulty: f64) -> String {
    let filled = difficulty.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "⭐".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_round_half_up() {
        assert_eq!(difficulty_stars(3.5), "⭐⭐⭐⭐☆");
        assert_eq!(difficulty_stars(1.0), "⭐☆☆☆☆");
        assert_eq!(difficulty_stars(0.0), "☆☆☆☆☆");
        assert_eq!(difficulty_stars(9.0), "⭐⭐⭐⭐⭐");
    }

    #[test]
    fn rubric_thresholds_increase() {
        let thresholds: Vec<f64> = assessment_rubrics().iter().map(|r| r.threshold).collect();
        assert_eq!(thresholds, vec![0.6, 0.75, 0.85, 0.95]);
    }

    #[test]
    fn hearts_start_full() {
        let g = Gamification::default();
        assert_eq!(g.hearts.starting, g.hearts.max);
        assert_eq!(g.achievements.len(), 3);
    }
}
