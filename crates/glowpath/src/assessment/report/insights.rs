use super::narrative::{
    direction_cluster, direction_paragraph, facet_text, interest_code, parent_advice,
    value_interpretation, value_narrative, BehaviorFacet,
};
use super::views::{BehaviorStyles, ReportInsights};
use crate::assessment::domain::{AssessmentResult, ValueDimension};

pub(crate) const MAX_STRENGTHS: usize = 3;
pub(crate) const MAX_RISKS: usize = 2;
pub(crate) const MIN_SUGGESTIONS: usize = 2;

/// A summary rule: returns its sentence when the condition holds.
type Rule = fn(&AssessmentResult) -> Option<String>;

const STRENGTH_RULES: &[Rule] = &[interest_profile_strength, self_discipline_strength];

const RISK_RULES: &[Rule] = &[
    perfectionism_risk,
    follow_through_risk,
    stress_sensitivity_risk,
    external_validation_risk,
];

const SUGGESTION_RULES: &[Rule] = &[
    external_structure_suggestion,
    supportive_environment_suggestion,
    inner_standard_suggestion,
];

const FALLBACK_SUGGESTIONS: [&str; 2] = [
    "在探索期不要急于\"确定方向\"，允许自己试错。",
    "每周留出固定时间记录探索中的真实感受，用事实而不是想象来校准方向。",
];

pub(crate) fn generate_insights(result: &AssessmentResult) -> ReportInsights {
    let [first, second, _] = &result.riasec_top3;
    let code = interest_code(&result.riasec_top3);
    let cluster = direction_cluster(first.dimension, second.dimension);
    let directions = direction_paragraph(&code, cluster);

    let primary_value = &result.values_top2[0];

    ReportInsights {
        interest_code: code,
        direction_cluster: cluster,
        directions,
        behavior: BehaviorStyles {
            learning: facet_text(&result.big_five, BehaviorFacet::Learning),
            execution: facet_text(&result.big_five, BehaviorFacet::Execution),
            social: facet_text(&result.big_five, BehaviorFacet::Social),
            stress: facet_text(&result.big_five, BehaviorFacet::Stress),
        },
        value_interpretation: value_interpretation(&result.values_top2),
        value_environment: value_narrative(primary_value.dimension).environment,
        parent_advice: parent_advice(primary_value.name),
        strengths: collect_capped(STRENGTH_RULES, result, MAX_STRENGTHS),
        risks: collect_capped(RISK_RULES, result, MAX_RISKS),
        suggestions: suggestions(result),
    }
}

/// Evaluates every rule in order and keeps the first `cap` matches.
fn collect_capped(rules: &[Rule], result: &AssessmentResult, cap: usize) -> Vec<String> {
    rules
        .iter()
        .filter_map(|rule| rule(result))
        .take(cap)
        .collect()
}

fn suggestions(result: &AssessmentResult) -> Vec<String> {
    let mut suggestions: Vec<String> = SUGGESTION_RULES
        .iter()
        .filter_map(|rule| rule(result))
        .collect();
    for fallback in FALLBACK_SUGGESTIONS {
        if suggestions.len() >= MIN_SUGGESTIONS {
            break;
        }
        suggestions.push(fallback.to_string());
    }
    suggestions
}

fn top_value_is_recognition(result: &AssessmentResult) -> bool {
    result.values_top2[0].dimension == ValueDimension::Recognition
}

// A clear lead and a flat profile are mutually exclusive readings.
fn interest_profile_strength(result: &AssessmentResult) -> Option<String> {
    let [first, _, third] = &result.riasec_top3;
    if first.score > 4.0 {
        Some(format!(
            "**{}倾向明显**：在相关领域有天然的兴趣驱动，这是长期坚持的核心动力。",
            first.name
        ))
    } else if first.score - third.score < 0.5 {
        Some(
            "**兴趣均衡**：不局限于单一领域，适合跨界方向，但要警惕\"什么都行=什么都不精\"。"
                .to_string(),
        )
    } else {
        None
    }
}

fn self_discipline_strength(result: &AssessmentResult) -> Option<String> {
    (result.big_five.conscientiousness > 4.0)
        .then(|| "**高自律**：能系统推进长期目标，这在留学申请和学业完成中是显著优势。".to_string())
}

fn perfectionism_risk(result: &AssessmentResult) -> Option<String> {
    (result.big_five.conscientiousness > 4.0).then(|| {
        "**风险：过度追求完美**。触发条件：遇到开放式问题或快速试错场景。补偿策略：设定\"够用即可\"的标准，用\"80分完成\"替代\"100分完美\"。".to_string()
    })
}

fn follow_through_risk(result: &AssessmentResult) -> Option<String> {
    let big_five = &result.big_five;
    (big_five.openness > 4.0 && big_five.conscientiousness < 3.0).then(|| {
        "**风险：想法多但落地少**。触发条件：缺乏外部监督和deadline。补偿策略：为每个想法设定小型验证实验，强制\"从0到1\"。".to_string()
    })
}

fn stress_sensitivity_risk(result: &AssessmentResult) -> Option<String> {
    (result.big_five.emotional_stability < 3.0).then(|| {
        "**风险：压力敏感**。触发条件：高强度竞争环境或频繁负面反馈。补偿策略：优先选择支持性强的环境，建立\"情绪急救包\"（运动/倾诉对象/暂停机制）。".to_string()
    })
}

fn external_validation_risk(result: &AssessmentResult) -> Option<String> {
    (top_value_is_recognition(result) && result.big_five.emotional_stability < 3.5).then(|| {
        "**风险：过度依赖外部认可**。触发条件：进入\"人人都很优秀\"的环境后产生落差。补偿策略：建立内在评价标准，定期回顾\"我为什么做这件事\"。".to_string()
    })
}

fn external_structure_suggestion(result: &AssessmentResult) -> Option<String> {
    (result.big_five.conscientiousness < 3.0)
        .then(|| "建立外部约束机制（学习小组、定期check-in）来补偿自律性。".to_string())
}

fn supportive_environment_suggestion(result: &AssessmentResult) -> Option<String> {
    (result.big_five.emotional_stability < 3.0)
        .then(|| "优先选择支持性强、反馈友好的环境，避免过度竞争的\"内卷\"场景。".to_string())
}

fn inner_standard_suggestion(result: &AssessmentResult) -> Option<String> {
    top_value_is_recognition(result)
        .then(|| "建立内在评价标准，定期问自己\"我为什么做这件事\"。".to_string())
}
