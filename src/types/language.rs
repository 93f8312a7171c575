use crate::error::{RecheckError, Result};
use crate::types::assessment::RiskTier;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-hans")]
    SimplifiedChinese,
    #[serde(rename = "zh-hant")]
    TraditionalChinese,
}

impl Language {
    pub const BASE: Language = Language::English;
    pub const ALL: [Language; 3] = [
        Language::English,
        Language::SimplifiedChinese,
        Language::TraditionalChinese,
    ];

    pub fn is_base(self) -> bool {
        self == Self::BASE
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::SimplifiedChinese => "zh-hans",
            Self::TraditionalChinese => "zh-hant",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::SimplifiedChinese => "简体中文",
            Self::TraditionalChinese => "繁體中文",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One value per supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized<T> {
    pub en: T,
    pub zh_hans: T,
    pub zh_hant: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, zh_hans: T, zh_hant: T) -> Self {
        Self {
            en,
            zh_hans,
            zh_hant,
        }
    }

    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::English => &self.en,
            Language::SimplifiedChinese => &self.zh_hans,
            Language::TraditionalChinese => &self.zh_hant,
        }
    }
}

#[derive(Debug)]
pub struct TierText {
    /// Dashboard label, may mix scripts.
    pub risk_label: &'static str,
    /// Label drawn in the document report.
    pub report_risk: &'static str,
    pub headline: &'static str,
    pub advice: &'static str,
    pub action: Option<&'static str>,
    pub recommendation: &'static str,
}

#[derive(Debug)]
pub struct UiText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub module_a: &'static str,
    pub module_b: &'static str,
    pub result_header: &'static str,
    pub score_label: &'static str,
    pub risk_label: &'static str,
    pub health_label: &'static str,
    pub contact: &'static str,
    pub report_title: &'static str,
    pub report_score_label: &'static str,
    pub report_risk_label: &'static str,
    pub recommendations_heading: &'static str,
    pub breakdown_heading: &'static str,
    pub selected_label: &'static str,
    pub points_label: &'static str,
    pub page_label: &'static str,
    pub footer: &'static str,
    pub font_fallback_notice: &'static str,
    pub fallback_rendered: &'static str,
    pub high: TierText,
    pub moderate: TierText,
    pub low: TierText,
}

impl UiText {
    pub fn tier(&self, tier: RiskTier) -> &TierText {
        match tier {
            RiskTier::HighRisk => &self.high,
            RiskTier::Moderate => &self.moderate,
            RiskTier::LowRisk => &self.low,
        }
    }

    /// Strings that end up in the document report.
    fn report_fields(&self) -> Vec<(&'static str, &'static str)> {
        let mut fields = vec![
            ("report_title", self.report_title),
            ("report_score_label", self.report_score_label),
            ("report_risk_label", self.report_risk_label),
            ("recommendations_heading", self.recommendations_heading),
            ("breakdown_heading", self.breakdown_heading),
            ("selected_label", self.selected_label),
            ("points_label", self.points_label),
            ("page_label", self.page_label),
            ("footer", self.footer),
            ("font_fallback_notice", self.font_fallback_notice),
            ("module_a", self.module_a),
            ("module_b", self.module_b),
        ];
        for (name, tier) in [("high", &self.high), ("moderate", &self.moderate), ("low", &self.low)]
        {
            fields.push((name, tier.report_risk));
            fields.push((name, tier.recommendation));
        }
        fields
    }

    fn dashboard_fields(&self) -> Vec<(&'static str, &'static str)> {
        let mut fields = vec![
            ("title", self.title),
            ("subtitle", self.subtitle),
            ("result_header", self.result_header),
            ("score_label", self.score_label),
            ("risk_label", self.risk_label),
            ("health_label", self.health_label),
            ("contact", self.contact),
            ("fallback_rendered", self.fallback_rendered),
        ];
        for (name, tier) in [("high", &self.high), ("moderate", &self.moderate), ("low", &self.low)]
        {
            fields.push((name, tier.risk_label));
            fields.push((name, tier.headline));
            fields.push((name, tier.advice));
        }
        fields
    }
}

static ENGLISH: UiText = UiText {
    title: "Actuarial Governance Re-Check",
    subtitle: "Peak Re / Big4 Style Diagnostic Tool",
    module_a: "Module A: Data Quality & Lineage",
    module_b: "Module B: Reserving & Governance",
    result_header: "Assessment Dashboard",
    score_label: "Governance Score",
    risk_label: "Risk Rating",
    health_label: "Governance Health",
    contact: "Book Expert Review",
    report_title: "Actuarial Governance Re-Check",
    report_score_label: "Total Score",
    report_risk_label: "Risk Level",
    recommendations_heading: "Expert Recommendations:",
    breakdown_heading: "Question Breakdown",
    selected_label: "Selected",
    points_label: "pts",
    page_label: "Page",
    footer: "Powered by Xu Consulting Group Corporation | Confidential",
    font_fallback_notice: "(Font file missing, displaying in English mode)",
    fallback_rendered: "report rendered in English",
    high: TierText {
        risk_label: "HIGH RISK (高风险)",
        report_risk: "HIGH RISK",
        headline: "Critical Attention Required (急需改进)",
        advice: "Your governance structure shows significant gaps. **Process gaps are likely hidden.**",
        action: Some("Immediate independent review recommended before regulatory interaction."),
        recommendation: "- Critical: Immediate independent review required.",
    },
    moderate: TierText {
        risk_label: "MODERATE (中等风险)",
        report_risk: "MODERATE",
        headline: "Operational Efficiency Warning (可以继续提高)",
        advice: "Basic compliance met, but manual processes create operational risks.",
        action: Some("Focus on automating audit trails."),
        recommendation: "- Warning: Focus on automating audit trails.",
    },
    low: TierText {
        risk_label: "LOW RISK (低风险)",
        report_risk: "LOW RISK",
        headline: "Industry Leader (行业领先)",
        advice: "Excellent baseline.",
        action: None,
        recommendation: "- Excellent",
    },
};

static SIMPLIFIED_CHINESE: UiText = UiText {
    title: "再保险精算合规体检系统",
    subtitle: "基于行业最佳实践的治理评估工具",
    module_a: "模块 A: 数据质量与连结",
    module_b: "模块 B: 准备金与管理",
    result_header: "诊断结果仪表盘",
    score_label: "合规治理得分",
    risk_label: "风险评级",
    health_label: "治理健康度",
    contact: "预约专家解读",
    report_title: "再保险精算合规体检报告",
    report_score_label: "总分",
    report_risk_label: "风险评级",
    recommendations_heading: "专家建议:",
    breakdown_heading: "逐题明细",
    selected_label: "已选",
    points_label: "分",
    page_label: "页",
    footer: "Powered by Xu Consulting Group Corporation | Confidential",
    font_fallback_notice: "(字体文件缺失，以英文模式显示)",
    fallback_rendered: "报告已改用英文生成",
    high: TierText {
        risk_label: "高风险 (High Risk)",
        report_risk: "高风险",
        headline: "急需改进 (Critical Attention Required)",
        advice: "您的治理结构显示出重大漏洞。**流程缺陷可能非常隐蔽。**",
        action: Some("强烈建议在监管机构介入前进行紧急的独立深度审查。"),
        recommendation: "- 高风险：建议立即进行独立审查。",
    },
    moderate: TierText {
        risk_label: "中等风险 (Moderate)",
        report_risk: "中等风险",
        headline: "可以继续提高 (Operational Efficiency Warning)",
        advice: "已满足基本合规，但人工流程带来了操作风险。",
        action: Some("重点关注审计追踪的自动化。"),
        recommendation: "- 警告：请重点关注审计追踪自动化。",
    },
    low: TierText {
        risk_label: "低风险 (Low Risk)",
        report_risk: "低风险",
        headline: "行业领先 (Industry Leader)",
        advice: "基础非常扎实。",
        action: None,
        recommendation: "- 优秀",
    },
};

static TRADITIONAL_CHINESE: UiText = UiText {
    title: "再保險精算合規體檢系統",
    subtitle: "基於行業最佳實踐的治理評估工具",
    module_a: "模塊 A: 數據質量與連結",
    module_b: "模塊 B: 準備金與管理",
    result_header: "診斷結果儀表盤",
    score_label: "合規治理得分",
    risk_label: "風險評級",
    health_label: "治理健康度",
    contact: "預約專家解讀",
    report_title: "再保險精算合規體檢報告",
    report_score_label: "總分",
    report_risk_label: "風險評級",
    recommendations_heading: "專家建議:",
    breakdown_heading: "逐題明細",
    selected_label: "已選",
    points_label: "分",
    page_label: "頁",
    footer: "Powered by Xu Consulting Group Corporation | Confidential",
    font_fallback_notice: "(字體文件缺失，以英文模式顯示)",
    fallback_rendered: "報告已改用英文生成",
    high: TierText {
        risk_label: "高風險 (High Risk)",
        report_risk: "高風險",
        headline: "急需改進 (Critical Attention Required)",
        advice: "您的治理結構顯示出重大漏洞。**流程缺陷可能非常隱蔽。**",
        action: Some("強烈建議在監管機構介入前進行緊急的獨立深度審查。"),
        recommendation: "- 高風險：建議立即進行獨立審查。",
    },
    moderate: TierText {
        risk_label: "中等風險 (Moderate)",
        report_risk: "中等風險",
        headline: "可以繼續提高 (Operational Efficiency Warning)",
        advice: "已滿足基本合規，但人工流程帶來了操作風險。",
        action: Some("重點關注審計追蹤的自動化。"),
        recommendation: "- 警告：請重點關注審計追蹤自動化。",
    },
    low: TierText {
        risk_label: "低風險 (Low Risk)",
        report_risk: "低風險",
        headline: "行業領先 (Industry Leader)",
        advice: "基礎非常紮實。",
        action: None,
        recommendation: "- 優秀",
    },
};

pub fn ui_text(language: Language) -> &'static UiText {
    match language {
        Language::English => &ENGLISH,
        Language::SimplifiedChinese => &SIMPLIFIED_CHINESE,
        Language::TraditionalChinese => &TRADITIONAL_CHINESE,
    }
}

/// Startup check over all text tables. Base-language report strings must stay
/// ASCII so the built-in typeface can draw them.
pub fn validate_tables() -> Result<()> {
    for language in Language::ALL {
        let table = ui_text(language);
        let report = table.report_fields();
        let dashboard = table.dashboard_fields();
        if let Some((name, _)) = report
            .iter()
            .chain(dashboard.iter())
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(RecheckError::InvalidTextTable(format!(
                "{language}: empty entry `{name}`"
            )));
        }
        if language.is_base() {
            if let Some((name, _)) = report.iter().find(|(_, value)| !value.is_ascii()) {
                return Err(RecheckError::InvalidTextTable(format!(
                    "{language}: report entry `{name}` is not ascii"
                )));
            }
        }
    }
    Ok(())
}
