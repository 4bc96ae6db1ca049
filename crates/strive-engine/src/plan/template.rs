/// Deterministic curriculum used when no model is available or the model
/// fails.
///
/// The text sticks to the markdown subset the renderer understands and
/// never interleaves lists with paragraphs.
pub fn fallback_curriculum(goal: &str, start_date: &str, end_date: &str) -> String {
    let timeline = match (start_date.trim(), end_date.trim()) {
        ("", "") => "Flexible".to_string(),
        (start, "") => format!("Starting {start}"),
        ("", end) => format!("Until {end}"),
        (start, end) => format!("{start} to {end}"),
    };

    format!(
        "# {goal} Curriculum

**Timeline:** {timeline}

## Overview
This curriculum breaks your goal into three modules with hands-on practice in each one.

## Module 1: Foundations
- Learn the core vocabulary and ideas behind {goal}
- Set up the tools you need to practice every day
- Complete an introductory exercise from start to finish

## Module 2: Core Skills
- Practice the fundamental techniques in short daily sessions
- Work through guided exercises of increasing difficulty
- Summarize what you learned in a weekly journal entry

## Module 3: Applied Project
- Plan a small project that uses your new skills
- Build the project in weekly milestones
- Share your project and gather feedback

## Assessment Points
- Weekly progress reviews
- Module completion checkpoints
- Final project presentation

## Next Steps
1. Review the full curriculum
2. Set up your learning environment
3. Begin with Module 1
4. Track your progress regularly

*This is a sample curriculum. A model-generated curriculum replaces it when one is available.*"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_goal_and_timeline() {
        let text = fallback_curriculum("Learn Piano", "2025-01-01", "2025-03-01");
        assert!(text.starts_with("# Learn Piano Curriculum\n"));
        assert!(text.contains("**Timeline:** 2025-01-01 to 2025-03-01"));
    }

    #[test]
    fn missing_dates_are_flexible() {
        assert!(fallback_curriculum("Chess", "", "").contains("**Timeline:** Flexible"));
        assert!(fallback_curriculum("Chess", "", "2025-05-01").contains("Until 2025-05-01"));
    }
}
