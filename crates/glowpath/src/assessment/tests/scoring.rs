use super::common::*;
use crate::assessment::domain::{
    AssessmentError, BigFiveDimension, Dimension, InputViolation, RiasecDimension, ScoreProfile,
    ValueDimension,
};
use crate::assessment::scoring::compute_assessment;

#[test]
fn reference_answers_produce_reference_scores() {
    let result = scored(&reference_input());

    assert_eq!(result.riasec.realistic, 2.6);
    assert_eq!(result.riasec.investigative, 4.4);
    assert_eq!(result.riasec.artistic, 3.6);
    assert_eq!(result.riasec.social, 4.4);
    assert_eq!(result.riasec.enterprising, 3.4);
    assert_eq!(result.riasec.conventional, 2.4);

    assert_eq!(result.big_five.openness, 4.33);
    assert_eq!(result.big_five.conscientiousness, 3.25);
    assert_eq!(result.big_five.extraversion, 3.67);
    assert_eq!(result.big_five.agreeableness, 4.5);
    assert_eq!(result.big_five.emotional_stability, 3.67);

    assert_eq!(result.values.achievement, 4.5);
    assert_eq!(result.values.autonomy, 4.5);
    assert_eq!(result.values.recognition, 3.0);
    assert_eq!(result.values.relationships, 4.0);
    assert_eq!(result.values.support, 3.5);
    assert_eq!(result.values.work_conditions, 3.0);
}

#[test]
fn reference_rankings_break_ties_by_declaration_order() {
    let result = scored(&reference_input());

    let riasec: Vec<_> = result.riasec_top3.iter().map(|e| e.dimension).collect();
    assert_eq!(
        riasec,
        vec![
            RiasecDimension::Investigative,
            RiasecDimension::Social,
            RiasecDimension::Artistic
        ]
    );

    let values: Vec<_> = result.values_top2.iter().map(|e| e.dimension).collect();
    assert_eq!(
        values,
        vec![ValueDimension::Achievement, ValueDimension::Autonomy]
    );
    assert_eq!(result.values_top2[0].name, "成就感");
}

#[test]
fn conscientiousness_rounds_each_stage() {
    let input = AnswerSheetBuilder::uniform(3)
        .set(34, 3)
        .set(35, 4)
        .set(36, 3)
        .student_input();
    assert_eq!(scored(&input).big_five.conscientiousness, 3.25);

    // fwd(4,5) = 4.5, rev(2) = 4.0, blended 4.25
    let input = AnswerSheetBuilder::uniform(3)
        .set(34, 4)
        .set(35, 5)
        .set(36, 2)
        .student_input();
    assert_eq!(scored(&input).big_five.conscientiousness, 4.25);
}

#[test]
fn reverse_items_mirror_forward_items_around_midpoint() {
    for a in 1..=5 {
        let input = AnswerSheetBuilder::uniform(3)
            .set_range(31..=33, a)
            .set_range(42..=44, a)
            .student_input();
        let result = scored(&input);
        assert_eq!(result.big_five.openness, a as f64);
        assert_eq!(result.big_five.emotional_stability, (6 - a) as f64);
        assert_eq!(
            result.big_five.openness + result.big_five.emotional_stability,
            6.0,
            "answer {a}"
        );
    }
}

#[test]
fn all_scores_stay_within_likert_bounds() {
    for value in 1..=5 {
        let result = scored(&AnswerSheetBuilder::uniform(value).student_input());
        let scores = result
            .riasec
            .ordered_scores()
            .into_iter()
            .map(|(_, score)| score)
            .chain(result.big_five.ordered_scores().into_iter().map(|(_, s)| s))
            .chain(result.values.ordered_scores().into_iter().map(|(_, s)| s));
        for score in scores {
            assert!((1.0..=5.0).contains(&score), "score {score} out of range");
        }
    }

    let extremes = AnswerSheetBuilder::uniform(1)
        .set_range(36..=36, 5)
        .set_range(42..=44, 5)
        .student_input();
    let result = scored(&extremes);
    assert_eq!(result.big_five.emotional_stability, 1.0);
    assert_eq!(result.big_five.conscientiousness, 1.0);
}

#[test]
fn uniform_answers_rank_first_declared_dimensions() {
    let result = scored(&AnswerSheetBuilder::uniform(3).student_input());
    let keys: Vec<_> = result.riasec_top3.iter().map(|e| e.key()).collect();
    assert_eq!(keys, vec!["realistic", "investigative", "artistic"]);
    let keys: Vec<_> = result.values_top2.iter().map(|e| e.key()).collect();
    assert_eq!(keys, vec!["achievement", "autonomy"]);
}

#[test]
fn scoring_is_deterministic() {
    let input = reference_input();
    let first = compute_assessment(&input).expect("valid");
    let second = compute_assessment(&input).expect("valid");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn missing_answer_is_rejected() {
    let input = AnswerSheetBuilder::uniform(3).remove(17).student_input();
    assert_eq!(
        compute_assessment(&input),
        Err(AssessmentError::InvalidInput(
            InputViolation::MissingAnswer { question: 17 }
        ))
    );
}

#[test]
fn out_of_range_answers_are_rejected() {
    for value in [0, 6, -3] {
        let input = AnswerSheetBuilder::uniform(3)
            .set(42, value)
            .student_input();
        assert_eq!(
            compute_assessment(&input),
            Err(AssessmentError::InvalidInput(
                InputViolation::AnswerOutOfRange {
                    question: 42,
                    value
                }
            ))
        );
    }
}

#[test]
fn blank_student_field_is_rejected() {
    let mut input = reference_input();
    input.student.track = "  ".to_string();
    let err = compute_assessment(&input).expect_err("blank track rejected");
    assert_eq!(
        err,
        AssessmentError::InvalidInput(InputViolation::BlankStudentField { field: "track" })
    );
    assert_eq!(
        err.to_string(),
        "invalid input: student field `track` must not be blank"
    );
}

#[test]
fn questions_outside_the_questionnaire_are_ignored() {
    let answers = AnswerSheetBuilder::from_values(REFERENCE_ANSWERS)
        .set(57, 9)
        .set(0, 1)
        .answers();
    let input = crate::assessment::AssessmentInput {
        student: sample_student(),
        answers,
    };
    assert_eq!(scored(&input), scored(&reference_input()));
}

#[test]
fn ranked_entries_carry_display_names() {
    let result = scored(&reference_input());
    for entry in &result.riasec_top3 {
        assert_eq!(entry.name, entry.dimension.label());
        assert_eq!(entry.score, result.riasec.score(entry.dimension));
    }
    assert_eq!(BigFiveDimension::Agreeableness.label(), "宜人性");
}
