use crate::assessment::domain::{
    Answers, AssessmentInput, AssessmentResult, StudentInfo, QUESTION_COUNT,
};
use crate::assessment::scoring::compute_assessment;
use crate::assessment::FixedClock;
use chrono::NaiveDate;
use std::ops::RangeInclusive;

/// Answer set used by the product's reference scoring run.
pub(crate) const REFERENCE_ANSWERS: [i64; QUESTION_COUNT as usize] = [
    3, 3, 2, 3, 2, // realistic
    4, 5, 4, 5, 4, // investigative
    4, 3, 4, 3, 4, // artistic
    4, 5, 4, 4, 5, // social
    3, 4, 3, 3, 4, // enterprising
    2, 3, 2, 3, 2, // conventional
    4, 5, 4, // openness
    3, 4, 3, // conscientiousness
    4, 3, 4, // extraversion
    4, 5, // agreeableness
    2, 3, 2, // emotional stability
    5, 4, 4, 5, 3, 3, 4, 4, 3, 4, 3, 3, // values
];

pub(crate) fn sample_student() -> StudentInfo {
    StudentInfo {
        name: "测试学生".to_string(),
        grade: "高一".to_string(),
        track: "普高".to_string(),
        target: "美国本科".to_string(),
    }
}

pub(crate) fn reference_input() -> AssessmentInput {
    AnswerSheetBuilder::from_values(REFERENCE_ANSWERS).student_input()
}

pub(crate) fn scored(input: &AssessmentInput) -> AssessmentResult {
    compute_assessment(input).expect("fixture input is valid")
}

pub(crate) fn fixed_clock() -> FixedClock {
    let at = NaiveDate::from_ymd_opt(2025, 9, 24)
        .and_then(|date| date.and_hms_opt(14, 30, 5))
        .expect("valid fixture timestamp");
    FixedClock(at)
}

/// Builds complete answer sheets with targeted overrides.
#[derive(Debug, Clone)]
pub(crate) struct AnswerSheetBuilder {
    answers: Answers,
}

impl AnswerSheetBuilder {
    pub(crate) fn uniform(value: i64) -> Self {
        Self::from_values([value; QUESTION_COUNT as usize])
    }

    pub(crate) fn from_values(values: [i64; QUESTION_COUNT as usize]) -> Self {
        Self {
            answers: (1..=QUESTION_COUNT).zip(values).collect(),
        }
    }

    pub(crate) fn set(mut self, question: u32, value: i64) -> Self {
        self.answers.insert(question, value);
        self
    }

    pub(crate) fn set_range(mut self, questions: RangeInclusive<u32>, value: i64) -> Self {
        for question in questions {
            self.answers.insert(question, value);
        }
        self
    }

    pub(crate) fn remove(mut self, question: u32) -> Self {
        self.answers.remove(question);
        self
    }

    pub(crate) fn answers(self) -> Answers {
        self.answers
    }

    pub(crate) fn student_input(self) -> AssessmentInput {
        AssessmentInput {
            student: sample_student(),
            answers: self.answers,
        }
    }
}
