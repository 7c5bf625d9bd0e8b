//! Questionnaire scoring and report synthesis.

pub mod domain;
pub mod report;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    Answers, AssessmentError, AssessmentInput, AssessmentResult, BigFiveDimension, BigFiveScores,
    Dimension, InputViolation, RankedEntry, RiasecDimension, RiasecScores, ScoreProfile,
    StudentInfo, ValueDimension, ValueScores, QUESTION_COUNT,
};
pub use report::{
    build_insights, generate_report, ChartSeries, Clock, FixedClock, ReportGenerator,
    ReportInsights, SystemClock,
};
pub use scoring::{compute_assessment, top_n};
