use crate::assessment::domain::{
    AssessmentResult, BigFiveDimension, Dimension, RiasecDimension, ScoreProfile, ValueDimension,
};
use super::narrative::BehaviorFacet;
use serde::Serialize;

/// Narrated behavior styles, one per Big Five facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BehaviorStyles {
    pub learning: &'static str,
    pub execution: &'static str,
    pub social: &'static str,
    pub stress: &'static str,
}

impl BehaviorStyles {
    pub(crate) fn for_facet(&self, facet: BehaviorFacet) -> &'static str {
        match facet {
            BehaviorFacet::Learning => self.learning,
            BehaviorFacet::Execution => self.execution,
            BehaviorFacet::Social => self.social,
            BehaviorFacet::Stress => self.stress,
        }
    }
}

/// Structured narrative derived from an [`AssessmentResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportInsights {
    pub interest_code: String,
    pub direction_cluster: &'static str,
    pub directions: String,
    pub behavior: BehaviorStyles,
    pub value_interpretation: String,
    pub value_environment: &'static str,
    pub parent_advice: String,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub suggestions: Vec<String>,
}

/// One chart's labels and values, both in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
}

/// Data series handed to the chart-rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub riasec: ChartData,
    pub big_five: ChartData,
    pub values: ChartData,
}

impl ChartSeries {
    pub fn from_result(result: &AssessmentResult) -> Self {
        Self {
            riasec: chart(&result.riasec, RiasecDimension::label),
            big_five: chart(&result.big_five, BigFiveDimension::label),
            values: chart(&result.values, ValueDimension::chart_label),
        }
    }
}

fn chart<P: ScoreProfile>(profile: &P, label: fn(P::Dimension) -> &'static str) -> ChartData {
    let (labels, values) = profile
        .ordered_scores()
        .into_iter()
        .map(|(dimension, score)| (label(dimension), score))
        .unzip();
    ChartData { labels, values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::tests::common::{reference_input, scored};

    #[test]
    fn chart_series_follow_declaration_order() {
        let result = scored(&reference_input());
        let charts = ChartSeries::from_result(&result);

        assert_eq!(charts.riasec.labels.len(), 6);
        assert_eq!(charts.riasec.labels[0], "实际型(R)");
        assert_eq!(charts.riasec.values[0], 2.6);
        assert_eq!(charts.big_five.labels.len(), 5);
        assert_eq!(charts.big_five.labels[4], "情绪稳定性");
        assert_eq!(charts.big_five.values[4], 3.67);
        assert_eq!(charts.values.labels.len(), 6);
        assert_eq!(charts.values.labels[5], "工作条件");
    }
}
