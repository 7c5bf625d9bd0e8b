use super::templates::{
    ACTIONS_HEADING, BIG_FIVE_HEADING, CLOSING_HEADING, CLOSING_REMARKS, CLUSTER_GUIDANCE,
    EXPLORATION_ACTIONS, LOW_SCORE_NOTE, REPORT_TITLE, RIASEC_HEADING, SUMMARY_HEADING,
    TIMESTAMP_FORMAT, VALUES_HEADING,
};
use super::narrative::FACET_NARRATIVES;
use super::views::ReportInsights;
use crate::assessment::domain::{
    AssessmentResult, Dimension, RankedEntry, ScoreProfile, StudentInfo,
};
use chrono::NaiveDateTime;

const SECTION_BREAK: &str = "\n---\n\n";

/// Assembles the Markdown document in fixed section order.
pub(crate) fn render_markdown(
    result: &AssessmentResult,
    insights: &ReportInsights,
    generated_at: NaiveDateTime,
    tool_name: &str,
) -> String {
    [
        header(&result.student),
        summary(insights),
        riasec_section(result, insights),
        big_five_section(result, insights),
        values_section(result, insights),
        actions_section(),
        closing_section(),
        footer(generated_at, tool_name),
    ]
    .join(SECTION_BREAK)
}

fn numbered<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| format!("{}. {}", position + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn ranked<D: Dimension>(entries: &[RankedEntry<D>]) -> String {
    let lines: Vec<String> = entries
        .iter()
        .map(|entry| format!("**{}**：{} 分", entry.name, entry.score))
        .collect();
    numbered(&lines)
}

fn header(student: &StudentInfo) -> String {
    format!(
        "{REPORT_TITLE}

**学生信息**
- 姓名：{}
- 年级：{}
- 就读类型：{}
- 目标：{}
",
        student.name, student.grade, student.track, student.target
    )
}

fn summary(insights: &ReportInsights) -> String {
    format!(
        "{SUMMARY_HEADING}

### 🎯 三条核心优势
{}

### ⚠️ 两条需要注意的风险
{}

### 💡 两条立即可行的建议
{}
",
        numbered(&insights.strengths),
        numbered(&insights.risks),
        numbered(&insights.suggestions)
    )
}

fn riasec_section(result: &AssessmentResult, insights: &ReportInsights) -> String {
    format!(
        "{RIASEC_HEADING}

### 你的Top3 兴趣代码
{}

### 这意味着什么？
{}

{LOW_SCORE_NOTE}

{CLUSTER_GUIDANCE}
",
        ranked(&result.riasec_top3),
        insights.directions
    )
}

fn big_five_section(result: &AssessmentResult, insights: &ReportInsights) -> String {
    let scores: Vec<String> = result
        .big_five
        .ordered_scores()
        .into_iter()
        .map(|(dimension, score)| format!("- **{}**：{} 分", dimension.label(), score))
        .collect();
    let styles: Vec<String> = FACET_NARRATIVES
        .iter()
        .map(|narrative| {
            format!(
                "**{}**\n{}\n",
                narrative.facet.heading(),
                insights.behavior.for_facet(narrative.facet)
            )
        })
        .collect();

    format!(
        "{BIG_FIVE_HEADING}

### 五个维度的分数
{}

### 在不同场景下，你可能是这样的

{}",
        scores.join("\n"),
        styles.join("\n")
    )
}

fn values_section(result: &AssessmentResult, insights: &ReportInsights) -> String {
    format!(
        "{VALUES_HEADING}

### 你最看重的Top2
{}

### 解读
{}

**环境匹配**
{}

**给家长的一句话**
{}
",
        ranked(&result.values_top2),
        insights.value_interpretation,
        insights.value_environment,
        insights.parent_advice
    )
}

fn actions_section() -> String {
    let horizons: Vec<String> = EXPLORATION_ACTIONS
        .iter()
        .map(|(horizon, actions)| format!("### {horizon}\n{}\n", numbered(actions)))
        .collect();
    format!("{ACTIONS_HEADING}\n\n{}", horizons.join("\n"))
}

fn closing_section() -> String {
    format!("{CLOSING_HEADING}\n\n{CLOSING_REMARKS}\n")
}

fn footer(generated_at: NaiveDateTime, tool_name: &str) -> String {
    format!(
        "*报告生成时间：{}*\n*工具：{tool_name}*\n",
        generated_at.format(TIMESTAMP_FORMAT)
    )
}
