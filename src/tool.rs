//! The four tools offered by the application shell

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    CheckAts,
    RankResume,
    EnhanceResume,
    GenerateCoverLetter,
}

impl Tool {
    /// Menu order
    pub const ALL: [Tool; 4] = [
        Tool::CheckAts,
        Tool::RankResume,
        Tool::EnhanceResume,
        Tool::GenerateCoverLetter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::CheckAts => "ATS Checker",
            Tool::RankResume => "Resume Ranker",
            Tool::EnhanceResume => "Resume Enhancer",
            Tool::GenerateCoverLetter => "Generate Cover Letter",
        }
    }

    /// Accepts a 1-based menu number or a label, case-insensitively
    pub fn from_menu_choice(choice: &str) -> Option<Tool> {
        let choice = choice.trim();
        if let Ok(number) = choice.parse::<usize>() {
            return number.checked_sub(1).and_then(|idx| Self::ALL.get(idx).copied());
        }
        Self::ALL
            .iter()
            .copied()
            .find(|tool| tool.label().eq_ignore_ascii_case(choice))
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_by_number() {
        assert_eq!(Tool::from_menu_choice("1"), Some(Tool::CheckAts));
        assert_eq!(Tool::from_menu_choice(" 4 "), Some(Tool::GenerateCoverLetter));
        assert_eq!(Tool::from_menu_choice("0"), None);
        assert_eq!(Tool::from_menu_choice("5"), None);
    }

    #[test]
    fn test_menu_choice_by_label() {
        assert_eq!(Tool::from_menu_choice("resume ranker"), Some(Tool::RankResume));
        assert_eq!(Tool::from_menu_choice("Resume Enhancer"), Some(Tool::EnhanceResume));
        assert_eq!(Tool::from_menu_choice("quit"), None);
    }
}
