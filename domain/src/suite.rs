//! Batch test fixtures and the answer-matching predicate.
//!
//! A fixed list of word problems with acceptable answer substrings, used
//! by the suite runner to exercise the agent end to end. This is fixture
//! data, not core logic; the questions are deliberately a mix of
//! straightforward arithmetic and trickier multi-constraint problems.

use serde::{Deserialize, Serialize};

/// Difficulty bucket of a fixture case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Easy,
    Tricky,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Easy => "EASY",
            Category::Tricky => "TRICKY",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One fixture case
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    pub question: &'static str,
    /// Acceptable answer substrings; matching any one counts as correct
    pub expected_answer_contains: &'static [&'static str],
    pub description: &'static str,
    pub category: Category,
}

/// True iff any expected substring appears case-insensitively in the
/// answer. An empty expectation set never matches.
pub fn check_answer(answer: &str, expected_contains: &[&str]) -> bool {
    let answer_lower = answer.to_lowercase();
    expected_contains
        .iter()
        .any(|expected| answer_lower.contains(&expected.to_lowercase()))
}

/// The fixed EASY fixture list
pub fn easy_cases() -> &'static [TestCase] {
    EASY_CASES
}

/// The fixed TRICKY fixture list
pub fn tricky_cases() -> &'static [TestCase] {
    TRICKY_CASES
}

/// All fixture cases, easy first, in their fixed order
pub fn all_cases() -> impl Iterator<Item = &'static TestCase> {
    EASY_CASES.iter().chain(TRICKY_CASES.iter())
}

const EASY_CASES: &[TestCase] = &[
    TestCase {
        question: "If a train leaves at 14:30 and arrives at 18:05, how long is the journey?",
        expected_answer_contains: &["3 hours 35 minutes", "3:35", "215 minutes"],
        description: "Basic time difference calculation",
        category: Category::Easy,
    },
    TestCase {
        question: "Alice has 3 red apples and twice as many green apples as red. How many apples does she have in total?",
        expected_answer_contains: &["9", "nine"],
        description: "Simple arithmetic with multiplication",
        category: Category::Easy,
    },
    TestCase {
        question: "What is 25 + 37?",
        expected_answer_contains: &["62"],
        description: "Basic addition",
        category: Category::Easy,
    },
    TestCase {
        question: "If a book costs $15 and I have $50, how many books can I buy?",
        expected_answer_contains: &["3"],
        description: "Division with remainders",
        category: Category::Easy,
    },
    TestCase {
        question: "A rectangle has length 8 and width 5. What is its perimeter?",
        expected_answer_contains: &["26"],
        description: "Geometry - perimeter calculation",
        category: Category::Easy,
    },
    TestCase {
        question: "What is 20% of 80?",
        expected_answer_contains: &["16"],
        description: "Percentage calculation",
        category: Category::Easy,
    },
    TestCase {
        question: "If I start with 100 dollars and spend 35 dollars, how much do I have left?",
        expected_answer_contains: &["65"],
        description: "Basic subtraction",
        category: Category::Easy,
    },
    TestCase {
        question: "A meeting starts at 10:00 and lasts 45 minutes. When does it end?",
        expected_answer_contains: &["10:45"],
        description: "Time addition",
        category: Category::Easy,
    },
];

const TRICKY_CASES: &[TestCase] = &[
    TestCase {
        question: "A meeting needs 60 minutes. There are free slots: 09:00\u{2013}09:30, 09:45\u{2013}10:30, 11:00\u{2013}12:00. Which slots can fit the meeting?",
        expected_answer_contains: &["09:45\u{2013}10:30", "11:00\u{2013}12:00", "09:45", "11:00"],
        description: "Multi-constraint time slot matching",
        category: Category::Tricky,
    },
    TestCase {
        question: "Bob is twice as old as Alice. In 5 years, Bob will be 25. How old is Alice now?",
        expected_answer_contains: &["10"],
        description: "Multi-step age problem requiring working backwards",
        category: Category::Tricky,
    },
    TestCase {
        question: "A basket has apples and oranges. There are 12 fruits total. If there are 3 more apples than oranges, how many oranges are there?",
        expected_answer_contains: &["4.5", "cannot", "impossible"],
        description: "Problem with non-integer solution (edge case)",
        category: Category::Tricky,
    },
    TestCase {
        question: "Train A leaves at 14:00 traveling at 60 km/h. Train B leaves at 14:30 from the same station in the same direction at 80 km/h. How long until Train B catches up?",
        expected_answer_contains: &["1.5 hours", "90 minutes", "1 hour 30"],
        description: "Relative motion problem",
        category: Category::Tricky,
    },
    TestCase {
        question: "A store offers 20% off, then an additional 10% off the reduced price. What is the total discount on a $100 item?",
        expected_answer_contains: &["28", "$28"],
        description: "Compound percentage (not additive)",
        category: Category::Tricky,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_answer_matches_any_substring() {
        assert!(check_answer("The journey takes 3 hours 35 minutes.", &[
            "3 hours 35 minutes",
            "215 minutes"
        ]));
        assert!(check_answer("215 MINUTES total", &["3:35", "215 minutes"]));
    }

    #[test]
    fn test_check_answer_is_case_insensitive() {
        assert!(check_answer("NINE apples", &["nine"]));
        assert!(check_answer("nine apples", &["NINE"]));
    }

    #[test]
    fn test_check_answer_rejects_non_matching() {
        assert!(!check_answer("42", &["62"]));
    }

    #[test]
    fn test_check_answer_empty_expectation_is_false() {
        assert!(!check_answer("anything at all", &[]));
    }

    #[test]
    fn test_fixture_counts() {
        assert_eq!(easy_cases().len(), 8);
        assert_eq!(tricky_cases().len(), 5);
        assert_eq!(all_cases().count(), 13);
    }

    #[test]
    fn test_fixtures_are_well_formed() {
        for case in all_cases() {
            assert!(!case.question.is_empty());
            assert!(!case.expected_answer_contains.is_empty());
            assert!(!case.description.is_empty());
        }
    }

    #[test]
    fn test_easy_cases_come_first() {
        let first = all_cases().next().unwrap();
        assert_eq!(first.category, Category::Easy);
    }
}
