mod items;
mod ranking;

pub use ranking::top_n;

use super::domain::{
    AssessmentError, AssessmentInput, AssessmentResult, BigFiveScores, InputViolation,
    RiasecScores, StudentInfo, ValueScores, MAX_ANSWER, MIN_ANSWER, QUESTION_COUNT,
};
use items::{Aggregation, BIG_FIVE_ITEMS, RIASEC_ITEMS, VALUE_ITEMS};
use tracing::debug;

/// Answers that passed validation, indexed by question number.
#[derive(Debug, Clone)]
pub(crate) struct ResponseSheet {
    answers: [u8; QUESTION_COUNT as usize],
}

impl ResponseSheet {
    /// Checks the student block and every answer, failing on the first
    /// violation found in question order.
    pub(crate) fn validate(input: &AssessmentInput) -> Result<Self, AssessmentError> {
        validate_student(&input.student)?;

        let mut answers = [0u8; QUESTION_COUNT as usize];
        for question in 1..=QUESTION_COUNT {
            let value = input
                .answers
                .get(question)
                .ok_or(InputViolation::MissingAnswer { question })?;
            if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
                return Err(InputViolation::AnswerOutOfRange { question, value }.into());
            }
            answers[(question - 1) as usize] = value as u8;
        }

        Ok(Self { answers })
    }

    pub(crate) fn answer(&self, question: u32) -> f64 {
        f64::from(self.answers[(question - 1) as usize])
    }
}

fn validate_student(student: &StudentInfo) -> Result<(), InputViolation> {
    match student
        .fields()
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
    {
        Some((field, _)) => Err(InputViolation::BlankStudentField { field }),
        None => Ok(()),
    }
}

/// Scores a validated questionnaire into the three profiles and their
/// top-N rankings.
pub fn compute_assessment(input: &AssessmentInput) -> Result<AssessmentResult, AssessmentError> {
    let sheet = ResponseSheet::validate(input)?;

    let riasec = RiasecScores::from_ordered(evaluate_group(&sheet, RIASEC_ITEMS));
    let big_five = BigFiveScores::from_ordered(evaluate_group(&sheet, BIG_FIVE_ITEMS));
    let values = ValueScores::from_ordered(evaluate_group(&sheet, VALUE_ITEMS));

    let riasec_top3 = top_n(&riasec);
    let values_top2 = top_n(&values);

    debug!(
        student = %input.student.name,
        riasec_lead = riasec_top3[0].key(),
        value_lead = values_top2[0].key(),
        "assessment scored"
    );

    Ok(AssessmentResult {
        student: input.student.clone(),
        riasec,
        big_five,
        values,
        riasec_top3,
        values_top2,
    })
}

fn evaluate_group<const N: usize>(sheet: &ResponseSheet, items: [Aggregation; N]) -> [f64; N] {
    items.map(|aggregation| aggregation.evaluate(sheet))
}
