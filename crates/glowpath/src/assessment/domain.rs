use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Number of questionnaire items; questions are numbered `1..=QUESTION_COUNT`.
pub const QUESTION_COUNT: u32 = 56;
pub const MIN_ANSWER: i64 = 1;
pub const MAX_ANSWER: i64 = 5;

/// Identification block carried through to the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    pub grade: String,
    pub track: String,
    pub target: String,
}

impl StudentInfo {
    pub(crate) fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("grade", self.grade.as_str()),
            ("track", self.track.as_str()),
            ("target", self.target.as_str()),
        ]
    }
}

/// Raw questionnaire answers keyed by question number.
///
/// Serialized as a JSON object with string keys (`{"1": 4, "2": 3}`). Values
/// are kept as wide integers so out-of-range answers reach validation instead
/// of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<u32, i64>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question: u32) -> Option<i64> {
        self.0.get(&question).copied()
    }

    pub fn insert(&mut self, question: u32, value: i64) -> Option<i64> {
        self.0.insert(question, value)
    }

    pub fn remove(&mut self, question: u32) -> Option<i64> {
        self.0.remove(&question)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u32, i64)> for Answers {
    fn from_iter<T: IntoIterator<Item = (u32, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Payload delivered by the input-collection collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub student: StudentInfo,
    pub answers: Answers,
}

/// Reason an [`AssessmentInput`] was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputViolation {
    #[error("question {question} has no answer")]
    MissingAnswer { question: u32 },
    #[error("question {question} answer {value} is outside 1-5")]
    AnswerOutOfRange { question: u32, value: i64 },
    #[error("student field `{field}` must not be blank")]
    BlankStudentField { field: &'static str },
}

/// Errors raised by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputViolation),
}

/// A closed set of scored dimensions with a fixed declaration order.
///
/// The declaration order is the tie-break order for top-N ranking.
pub trait Dimension: Copy + Eq + fmt::Debug + Serialize + 'static {
    const ORDERED: &'static [Self];

    /// Position in [`Dimension::ORDERED`].
    fn index(self) -> usize;
    /// Stable camelCase key used at the JSON boundary.
    fn key(self) -> &'static str;
    /// Display name shown in reports and charts.
    fn label(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiasecDimension {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl Dimension for RiasecDimension {
    const ORDERED: &'static [Self] = &[
        Self::Realistic,
        Self::Investigative,
        Self::Artistic,
        Self::Social,
        Self::Enterprising,
        Self::Conventional,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn key(self) -> &'static str {
        match self {
            Self::Realistic => "realistic",
            Self::Investigative => "investigative",
            Self::Artistic => "artistic",
            Self::Social => "social",
            Self::Enterprising => "enterprising",
            Self::Conventional => "conventional",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Realistic => "实际型(R)",
            Self::Investigative => "研究型(I)",
            Self::Artistic => "艺术型(A)",
            Self::Social => "社会型(S)",
            Self::Enterprising => "企业型(E)",
            Self::Conventional => "常规型(C)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BigFiveDimension {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    EmotionalStability,
}

impl Dimension for BigFiveDimension {
    const ORDERED: &'static [Self] = &[
        Self::Openness,
        Self::Conscientiousness,
        Self::Extraversion,
        Self::Agreeableness,
        Self::EmotionalStability,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn key(self) -> &'static str {
        match self {
            Self::Openness => "openness",
            Self::Conscientiousness => "conscientiousness",
            Self::Extraversion => "extraversion",
            Self::Agreeableness => "agreeableness",
            Self::EmotionalStability => "emotionalStability",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Openness => "开放性",
            Self::Conscientiousness => "尽责性",
            Self::Extraversion => "外向性",
            Self::Agreeableness => "宜人性",
            Self::EmotionalStability => "情绪稳定性",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueDimension {
    Achievement,
    Autonomy,
    Recognition,
    Relationships,
    Support,
    WorkConditions,
}

impl ValueDimension {
    /// Short axis label; the chart has no room for the full display name.
    pub const fn chart_label(self) -> &'static str {
        match self {
            Self::Achievement => "成就感",
            Self::Autonomy => "独立自主",
            Self::Recognition => "认可与声望",
            Self::Relationships => "人际关系",
            Self::Support => "支持体系",
            Self::WorkConditions => "工作条件",
        }
    }
}

impl Dimension for ValueDimension {
    const ORDERED: &'static [Self] = &[
        Self::Achievement,
        Self::Autonomy,
        Self::Recognition,
        Self::Relationships,
        Self::Support,
        Self::WorkConditions,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn key(self) -> &'static str {
        match self {
            Self::Achievement => "achievement",
            Self::Autonomy => "autonomy",
            Self::Recognition => "recognition",
            Self::Relationships => "relationships",
            Self::Support => "support",
            Self::WorkConditions => "workConditions",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Achievement => "成就感",
            Self::Autonomy => "独立自主",
            Self::Recognition => "认可与声望",
            Self::Relationships => "人际关系",
            Self::Support => "支持体系",
            Self::WorkConditions => "工作条件/安全感",
        }
    }
}

/// A score group addressable by its dimension enum.
pub trait ScoreProfile {
    type Dimension: Dimension;

    fn score(&self, dimension: Self::Dimension) -> f64;

    /// Scores in declaration order.
    fn ordered_scores(&self) -> Vec<(Self::Dimension, f64)> {
        Self::Dimension::ORDERED
            .iter()
            .map(|&dimension| (dimension, self.score(dimension)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiasecScores {
    pub realistic: f64,
    pub investigative: f64,
    pub artistic: f64,
    pub social: f64,
    pub enterprising: f64,
    pub conventional: f64,
}

impl RiasecScores {
    pub(crate) fn from_ordered(scores: [f64; 6]) -> Self {
        let [realistic, investigative, artistic, social, enterprising, conventional] = scores;
        Self {
            realistic,
            investigative,
            artistic,
            social,
            enterprising,
            conventional,
        }
    }
}

impl ScoreProfile for RiasecScores {
    type Dimension = RiasecDimension;

    fn score(&self, dimension: RiasecDimension) -> f64 {
        match dimension {
            RiasecDimension::Realistic => self.realistic,
            RiasecDimension::Investigative => self.investigative,
            RiasecDimension::Artistic => self.artistic,
            RiasecDimension::Social => self.social,
            RiasecDimension::Enterprising => self.enterprising,
            RiasecDimension::Conventional => self.conventional,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BigFiveScores {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub emotional_stability: f64,
}

impl BigFiveScores {
    pub(crate) fn from_ordered(scores: [f64; 5]) -> Self {
        let [openness, conscientiousness, extraversion, agreeableness, emotional_stability] =
            scores;
        Self {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            emotional_stability,
        }
    }
}

impl ScoreProfile for BigFiveScores {
    type Dimension = BigFiveDimension;

    fn score(&self, dimension: BigFiveDimension) -> f64 {
        match dimension {
            BigFiveDimension::Openness => self.openness,
            BigFiveDimension::Conscientiousness => self.conscientiousness,
            BigFiveDimension::Extraversion => self.extraversion,
            BigFiveDimension::Agreeableness => self.agreeableness,
            BigFiveDimension::EmotionalStability => self.emotional_stability,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueScores {
    pub achievement: f64,
    pub autonomy: f64,
    pub recognition: f64,
    pub relationships: f64,
    pub support: f64,
    pub work_conditions: f64,
}

impl ValueScores {
    pub(crate) fn from_ordered(scores: [f64; 6]) -> Self {
        let [achievement, autonomy, recognition, relationships, support, work_conditions] = scores;
        Self {
            achievement,
            autonomy,
            recognition,
            relationships,
            support,
            work_conditions,
        }
    }
}

impl ScoreProfile for ValueScores {
    type Dimension = ValueDimension;

    fn score(&self, dimension: ValueDimension) -> f64 {
        match dimension {
            ValueDimension::Achievement => self.achievement,
            ValueDimension::Autonomy => self.autonomy,
            ValueDimension::Recognition => self.recognition,
            ValueDimension::Relationships => self.relationships,
            ValueDimension::Support => self.support,
            ValueDimension::WorkConditions => self.work_conditions,
        }
    }
}

/// One row of a top-N list. Serializes as `{key, name, score}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedEntry<D: Dimension> {
    #[serde(rename = "key")]
    pub dimension: D,
    pub name: &'static str,
    pub score: f64,
}

impl<D: Dimension> RankedEntry<D> {
    pub fn key(&self) -> &'static str {
        self.dimension.key()
    }
}

/// Complete output of scoring, consumed read-only by the report generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub student: StudentInfo,
    pub riasec: RiasecScores,
    pub big_five: BigFiveScores,
    pub values: ValueScores,
    pub riasec_top3: [RankedEntry<RiasecDimension>; 3],
    pub values_top2: [RankedEntry<ValueDimension>; 2],
}
