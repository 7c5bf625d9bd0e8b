//! Score-independent report text.

pub(crate) const REPORT_TITLE: &str = "# GlowPath 学生测评报告";

pub(crate) const SUMMARY_HEADING: &str = "## 0. 一页结论卡";
pub(crate) const RIASEC_HEADING: &str = "## 1. 兴趣画像（RIASEC）";
pub(crate) const BIG_FIVE_HEADING: &str = "## 2. 行为风格（Big Five）";
pub(crate) const VALUES_HEADING: &str = "## 3. 价值观底线";
pub(crate) const ACTIONS_HEADING: &str = "## 4. 近期探索行动";
pub(crate) const CLOSING_HEADING: &str = "## 5. 最后的话";

/// Section headings in render order.
pub const SECTION_HEADINGS: [&str; 7] = [
    REPORT_TITLE,
    SUMMARY_HEADING,
    RIASEC_HEADING,
    BIG_FIVE_HEADING,
    VALUES_HEADING,
    ACTIONS_HEADING,
    CLOSING_HEADING,
];

pub(crate) const LOW_SCORE_NOTE: &str = "**低分项的含义**：
如果某个维度低于2.5分，不代表\"你不行\"，而是\"这类活动不是你的天然兴趣来源\"。不要强迫自己在低分维度上长期投入，除非有明确的工具性目的。";

pub(crate) const CLUSTER_GUIDANCE: &str = "**方向簇建议**：
- 不要直接跳到具体职业（如\"金融分析师\"\"UX设计师\"），而是先锁定2-3个方向簇。
- 在大学前两年用通识课、实习、项目来细化方向。
- 记住：兴趣会变化，但底层倾向相对稳定。";

/// Exploration actions grouped by horizon.
pub(crate) const EXPLORATION_ACTIONS: [(&str, [&str; 2]); 3] = [
    (
        "未来2周",
        [
            "**信息访谈**：找2-3个在目标方向学习的学长学姐，问他们\"一天的时间分配\"\"最喜欢和最不喜欢的部分\"。",
            "**内容沉浸**：关注2-3个相关领域的优质博主/公众号，看30天内容，感受\"这个领域的日常话题是否让你兴奋\"。",
        ],
    ),
    (
        "未来1个月",
        [
            "**小型实践**：参加一个相关的短期项目/线上课程/志愿者活动，获得\"身体记忆\"而不只是想象。",
            "**反向验证**：列出3件\"如果选这个方向，我必须长期做的事\"，问自己能否接受。",
        ],
    ),
    (
        "未来3个月",
        [
            "**环境测试**：如果可能，参加一次相关的夏校/实习/竞赛，在真实场景中测试适配度。",
            "**方向收敛**：基于前两个月的探索，缩小到2-3个具体方向，开始深度准备（竞赛/作品集/先修课）。",
        ],
    ),
];

pub(crate) const CLOSING_REMARKS: &str = "这份报告不是\"算命\"，而是\"坐标系\"。它告诉你：
- 你的倾向是什么（不是你\"应该\"成为什么）
- 在什么环境下你更可能舒适和高效
- 需要警惕哪些\"看起来很好但可能不适合你\"的陷阱

记住：**没有完美的方向，只有更适配的选择。** 允许自己在探索中调整，不要因为\"已经投入了很多\"而强行坚持错误的路径。";

/// Footer timestamp layout, e.g. `2025/3/7 09:05:00`.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";
