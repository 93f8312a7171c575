use crate::types::language::Localized;
use crate::types::question::{Question, QuestionBank};

/// Questions before this index form Module A.
pub const MODULE_SPLIT: usize = 5;

const POINTS: [u32; 3] = [0, 5, 10];

type Labels = [&'static str; 3];

struct QuestionDef {
    id: &'static str,
    text: [&'static str; 3],
    options: [Labels; 3],
}

const QUESTIONS: [QuestionDef; 10] = [
    QuestionDef {
        id: "DQ1",
        text: ["Data Automation Level", "数据自动化程度", "數據自動化程度"],
        options: [
            ["Manual", "Semi-Auto", "Fully Auto"],
            ["手动", "半自动", "全自动"],
            ["手動", "半自動", "全自動"],
        ],
    },
    QuestionDef {
        id: "DQ2",
        text: ["Cedant Data Validation", "分出方数据验证", "分出方數據驗證"],
        options: [
            ["Passive", "Reactive", "Proactive"],
            ["被动", "反应式", "主动式"],
            ["被動", "反應式", "主動式"],
        ],
    },
    QuestionDef {
        id: "DQ3",
        text: ["Data Lineage Map", "数据血缘地图", "數據血緣地圖"],
        options: [
            ["None", "Partial", "Documented"],
            ["无", "部分", "文档齐全"],
            ["無", "部分", "文檔齊全"],
        ],
    },
    QuestionDef {
        id: "DQ4",
        text: ["Reconciliation Frequency", "对账频率", "對賬頻率"],
        options: [
            ["Annual", "Quarterly", "Monthly"],
            ["年度", "季度", "月度"],
            ["年度", "季度", "月度"],
        ],
    },
    QuestionDef {
        id: "DQ5",
        text: ["Manual Adjustment Log", "手动调整日志", "手動調整日誌"],
        options: [
            ["Excel", "Folder", "System Log"],
            ["Excel记录", "文件夹归档", "系统日志"],
            ["Excel記錄", "文件夾歸檔", "系統日誌"],
        ],
    },
    QuestionDef {
        id: "RS1",
        text: ["Independent Review", "独立审查机制", "獨立審查機制"],
        options: [
            ["Internal", "Audit", "External"],
            ["仅内部", "内部审计", "外部独立"],
            ["僅內部", "內部審計", "外部獨立"],
        ],
    },
    QuestionDef {
        id: "RS2",
        text: ["IFRS 17 AoC Insight", "IFRS 17 变动分析深度", "IFRS 17 變動分析深度"],
        options: [
            ["Black Box", "Compliance", "Strategic"],
            ["黑盒", "合规达标", "战略洞察"],
            ["黑盒", "合規達標", "戰略洞察"],
        ],
    },
    QuestionDef {
        id: "RS3",
        text: ["Sensitivity Speed", "敏感性分析速度", "敏感性分析速度"],
        options: [
            ["Weeks", "Days", "Real-time"],
            ["数周", "数天", "实时"],
            ["數周", "數天", "實時"],
        ],
    },
    QuestionDef {
        id: "RS4",
        text: ["Pricing Feedback Loop", "定价反馈闭环", "定價反饋閉環"],
        options: [
            ["None", "Ad-hoc", "Integrated"],
            ["无", "临时", "集成闭环"],
            ["無", "臨時", "集成閉環"],
        ],
    },
    QuestionDef {
        id: "RS5",
        text: ["Methodology Change Doc", "变更文档规范", "變更文檔規範"],
        options: [
            ["Email", "Notes", "Formal Memo"],
            ["邮件", "笔记", "正式备忘"],
            ["郵件", "筆記", "正式備忘"],
        ],
    },
];

fn owned(labels: &Labels) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

impl QuestionDef {
    fn to_question(&self) -> Question {
        let [en, zh_hans, zh_hant] = &self.options;
        Question {
            id: self.id.to_string(),
            text: Localized::new(
                self.text[0].to_string(),
                self.text[1].to_string(),
                self.text[2].to_string(),
            ),
            options: Localized::new(owned(en), owned(zh_hans), owned(zh_hant)),
            points: POINTS.to_vec(),
        }
    }
}

/// The fixed governance question bank.
pub fn reference_bank() -> QuestionBank {
    let questions = QUESTIONS.iter().map(QuestionDef::to_question).collect();
    QuestionBank::new(questions, MODULE_SPLIT)
}
