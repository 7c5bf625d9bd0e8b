use crate::assessment::domain::{
    BigFiveDimension, BigFiveScores, Dimension, RankedEntry, RiasecDimension, ScoreProfile,
    ValueDimension,
};

/// Fallback cluster for top-two interest pairs without an authored mapping.
pub(crate) const CROSS_DOMAIN_CLUSTER: &str = "跨领域复合型方向";

/// One branch of a threshold cascade. `above: None` always matches.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tier {
    above: Option<f64>,
    pub(crate) text: &'static str,
}

impl Tier {
    const fn above(threshold: f64, text: &'static str) -> Self {
        Self {
            above: Some(threshold),
            text,
        }
    }

    const fn otherwise(text: &'static str) -> Self {
        Self { above: None, text }
    }

    fn matches(&self, score: f64) -> bool {
        self.above.map_or(true, |threshold| score > threshold)
    }
}

/// Evaluates tiers top to bottom and returns the first match.
pub(crate) fn select_tier(tiers: &[Tier], score: f64) -> &'static str {
    tiers
        .iter()
        .find(|tier| tier.matches(score))
        .map(|tier| tier.text)
        .unwrap_or_default()
}

/// Behavior facets narrated in the Big Five section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BehaviorFacet {
    Learning,
    Execution,
    Social,
    Stress,
}

impl BehaviorFacet {
    pub(crate) const fn heading(self) -> &'static str {
        match self {
            Self::Learning => "学习风格",
            Self::Execution => "执行风格",
            Self::Social => "社交与协作",
            Self::Stress => "压力应对",
        }
    }
}

pub(crate) struct FacetNarrative {
    pub(crate) facet: BehaviorFacet,
    pub(crate) source: BigFiveDimension,
    pub(crate) tiers: [Tier; 3],
}

// Agreeableness is scored but has no narrative facet.
pub(crate) const FACET_NARRATIVES: [FacetNarrative; 4] = [
    FacetNarrative {
        facet: BehaviorFacet::Learning,
        source: BigFiveDimension::Openness,
        tiers: [
            Tier::above(4.2, "你倾向于探索式学习，喜欢新概念和非常规思路，但可能需要注意\"想法太多、落地太少\"的风险。建议：每个新想法都设定一个小验证实验。"),
            Tier::above(3.5, "你对新知识保持好奇，能接受不同观点。适合多元化的学习环境，但要警惕\"什么都想学、什么都不精\"。"),
            Tier::otherwise("你更倾向实用主义，喜欢有明确应用场景的知识。优势是效率高，但可能会错过一些\"现在看似无用、未来有价值\"的积累。"),
        ],
    },
    FacetNarrative {
        facet: BehaviorFacet::Execution,
        source: BigFiveDimension::Conscientiousness,
        tiers: [
            Tier::above(4.2, "你的执行力很强，能系统推进任务。代价是可能过度追求完美，在快速试错场景下会感到不适。适合结构化强的环境。"),
            Tier::above(3.5, "你能按计划完成任务，自律性较好。在确定性强的项目中表现稳定。"),
            Tier::otherwise("你更灵活、适应性强，但在需要长期坚持的任务中可能会中途放弃。补偿策略：用外部约束（deadline/同伴监督）替代意志力。"),
        ],
    },
    FacetNarrative {
        facet: BehaviorFacet::Social,
        source: BigFiveDimension::Extraversion,
        tiers: [
            Tier::above(4.2, "你在群体中充电，擅长调动气氛和推动协作。风险：独立深度工作时可能会感到枯燥。建议：给自己留\"社交缓冲区\"。"),
            Tier::above(3.5, "你能适应团队协作，也能接受独立工作。在大多数场景下都能找到舒适位置。"),
            Tier::otherwise("你倾向于小规模或1对1的深度交流，大型社交场合可能消耗你的能量。优势是专注力强，适合需要持续深度工作的方向。"),
        ],
    },
    FacetNarrative {
        facet: BehaviorFacet::Stress,
        source: BigFiveDimension::EmotionalStability,
        tiers: [
            Tier::above(4.2, "你的情绪波动小，能在压力下保持稳定。但也要警惕\"钝感\"——可能会忽略需要及时调整的信号。"),
            Tier::above(3.5, "你能较好地管理情绪，在多数情况下保持冷静。这是职场和学业中的重要优势。"),
            Tier::otherwise("你对环境和反馈比较敏感，容易受挫折影响。这意味着你需要更友好的支持系统和更及时的正向反馈。不是缺点，而是环境匹配度的问题。"),
        ],
    },
];

pub(crate) fn facet_text(big_five: &BigFiveScores, facet: BehaviorFacet) -> &'static str {
    FACET_NARRATIVES
        .iter()
        .find(|narrative| narrative.facet == facet)
        .map(|narrative| select_tier(&narrative.tiers, big_five.score(narrative.source)))
        .unwrap_or_default()
}

const DIRECTION_CLUSTERS: [(RiasecDimension, RiasecDimension, &str); 8] = [
    (
        RiasecDimension::Realistic,
        RiasecDimension::Investigative,
        "工程技术、数据科学、技术研发",
    ),
    (
        RiasecDimension::Realistic,
        RiasecDimension::Conventional,
        "工程管理、质量控制、技术运维",
    ),
    (
        RiasecDimension::Investigative,
        RiasecDimension::Artistic,
        "用户研究、设计科学、创新咨询",
    ),
    (
        RiasecDimension::Investigative,
        RiasecDimension::Social,
        "教育研究、公共卫生、心理咨询",
    ),
    (
        RiasecDimension::Artistic,
        RiasecDimension::Social,
        "内容创作、文化传播、用户体验设计",
    ),
    (
        RiasecDimension::Artistic,
        RiasecDimension::Enterprising,
        "创意策划、品牌营销、新媒体运营",
    ),
    (
        RiasecDimension::Social,
        RiasecDimension::Enterprising,
        "人力资源、组织发展、教育创业",
    ),
    (
        RiasecDimension::Enterprising,
        RiasecDimension::Conventional,
        "商业分析、金融管理、运营管理",
    ),
];

/// Looks up the cluster for an ordered pair; `(social, artistic)` is not
/// the same pair as `(artistic, social)`.
pub(crate) fn direction_cluster(first: RiasecDimension, second: RiasecDimension) -> &'static str {
    DIRECTION_CLUSTERS
        .iter()
        .find(|(a, b, _)| *a == first && *b == second)
        .map(|(_, _, cluster)| *cluster)
        .unwrap_or(CROSS_DOMAIN_CLUSTER)
}

/// `INVESTIGATIVE-SOCIAL-ARTISTIC` style code built from the ranked keys.
pub(crate) fn interest_code(top: &[RankedEntry<RiasecDimension>]) -> String {
    top.iter()
        .map(|entry| entry.key())
        .collect::<Vec<_>>()
        .join("-")
        .to_uppercase()
}

pub(crate) fn direction_paragraph(code: &str, cluster: &str) -> String {
    format!(
        "你的兴趣代码是 **{code}**，这类学生通常在 **{cluster}** 等领域能找到较好的匹配。这不是职业建议，而是探索方向的参考坐标系。"
    )
}

pub(crate) struct ValueNarrative {
    pub(crate) interpretation: &'static str,
    pub(crate) environment: &'static str,
}

const VALUE_NARRATIVES: [ValueNarrative; 6] = [
    ValueNarrative {
        interpretation: "你看重\"做成事\"的满足感。这类学生通常不满足于按部就班，而是希望看到自己的努力带来可见的成果。",
        environment: "适合有明确目标和反馈机制的环境（如项目制、竞赛导向的学习）。",
    },
    ValueNarrative {
        interpretation: "你重视自主权和决策空间。在被过度管控的环境中会感到压抑，更适合能发挥主动性的场景。",
        environment: "适合开放式探索的环境，避免过度标准化的培养体系。",
    },
    ValueNarrative {
        interpretation: "你在意外部认可和社会评价。这能成为强大的动力，但也要警惕过度依赖他人评价而忽视内在标准。",
        environment: "适合有清晰晋升路径或荣誉体系的环境，但需要注意避免\"唯排名论\"。",
    },
    ValueNarrative {
        interpretation: "你看重团队氛围和人际连接。在有归属感的环境中能发挥最大潜力，但要避免因人际关系问题影响决策。",
        environment: "适合团队协作紧密、文化氛围好的环境。选专业时可以重点考察\"学长学姐氛围\"。",
    },
    ValueNarrative {
        interpretation: "你希望有清晰的指导和资源支持。这不是依赖，而是知道在有支撑的情况下能走得更快。",
        environment: "适合资源丰富、导师制完善的环境。留学时要重点评估\"support system\"。",
    },
    ValueNarrative {
        interpretation: "你看重环境的稳定性和可预测性。在快速变化、高不确定性的场景中可能会感到不安。",
        environment: "适合结构稳定、流程清晰的环境。对于快速迭代的行业要谨慎评估适应成本。",
    },
];

pub(crate) fn value_narrative(value: ValueDimension) -> &'static ValueNarrative {
    &VALUE_NARRATIVES[value.index()]
}

/// Primary interpretation, with the runner-up's sentence appended when present.
pub(crate) fn value_interpretation(top: &[RankedEntry<ValueDimension>]) -> String {
    let Some(primary) = top.first() else {
        return String::new();
    };
    let mut interpretation = value_narrative(primary.dimension)
        .interpretation
        .to_string();
    if let Some(second) = top.get(1) {
        interpretation.push_str(" 同时，");
        interpretation.push_str(
            &value_narrative(second.dimension)
                .interpretation
                .to_lowercase(),
        );
    }
    interpretation
}

pub(crate) fn parent_advice(top_value_name: &str) -> String {
    format!(
        "家长可以这样支持：在保证基本安全感的前提下，优先满足\"{top_value_name}\"这一底线需求。这不是溺爱，而是让学生在舒适区内建立信心，再逐步拓展。"
    )
}
