use super::Dashboard;
use crate::branding::Branding;
use crate::types::language::ui_text;
use crate::types::question::{option_label, Question};

const BAR_CELLS: usize = 20;

fn health_bar(ratio: f32) -> String {
    let filled = (ratio * BAR_CELLS as f32).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_CELLS - filled),
        ratio * 100.0
    )
}

fn push_module(output: &mut String, dashboard: &Dashboard<'_>, heading: &str, questions: &[Question]) {
    output.push_str(&format!("## {heading}\n\n"));
    for question in questions {
        let Some(answer) = dashboard.result.answer(&question.id) else {
            continue;
        };
        output.push_str(&format!(
            "- **{}**: {} ({}/{})\n",
            question.text(dashboard.language),
            option_label(question, answer.index as i64, dashboard.language),
            answer.points,
            answer.max_points
        ));
    }
    output.push('\n');
}

pub fn to_markdown(dashboard: &Dashboard<'_>) -> String {
    let text = ui_text(dashboard.language);
    let result = dashboard.result;
    let tier = result.risk_tier();
    let tier_text = text.tier(tier);

    let mut output = String::new();
    match dashboard.branding {
        Branding::Logo(path) => output.push_str(&format!("![logo]({})\n\n", path.display())),
        Branding::Text(company) => output.push_str(&format!("### {company}\n\n")),
    }
    output.push_str(&format!("# {}\n\n", text.title));
    output.push_str(&format!("{}\n\n", text.subtitle));

    push_module(&mut output, dashboard, text.module_a, dashboard.bank.module_a());
    push_module(&mut output, dashboard, text.module_b, dashboard.bank.module_b());

    output.push_str(&format!("## {}\n\n", text.result_header));
    output.push_str(&format!(
        "- {}: {} / {}\n",
        text.score_label, result.total_score, result.max_score
    ));
    output.push_str(&format!("- {}: {}\n", text.risk_label, tier_text.risk_label));
    output.push_str(&format!(
        "- {}: {}\n\n",
        text.health_label,
        health_bar(result.health_ratio())
    ));

    output.push_str(&format!("### {} {}\n\n", tier.icon(), tier_text.headline));
    output.push_str(&format!("{}\n", tier_text.advice));
    if let Some(action) = tier_text.action {
        output.push_str(&format!("\n- {action}\n"));
    }
    output.push_str(&format!(
        "\n**{}:** {}\n",
        text.contact, dashboard.contact_email
    ));

    if let Some(report) = &dashboard.report {
        output.push('\n');
        if let Some(reason) = &report.fallback {
            output.push_str(&format!("> {reason}; {}\n", text.fallback_rendered));
        }
        output.push_str(&format!(
            "report file: {} ({} page{})\n",
            report.path,
            report.pages,
            if report.pages == 1 { "" } else { "s" }
        ));
    }

    output
}
