use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "recheck",
    version,
    about = "Actuarial governance self-assessment with dashboard and PDF report"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the question bank
    Questions(QuestionsCommand),
    /// Score answers, print the dashboard and write the report
    Assess(AssessCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LanguageArg {
    #[value(name = "en")]
    English,
    #[value(name = "zh-hans")]
    SimplifiedChinese,
    #[value(name = "zh-hant")]
    TraditionalChinese,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DetailArg {
    Summary,
    Detailed,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(short, long, value_enum)]
    pub lang: Option<LanguageArg>,
    /// Directory holding recheck.toml and resources
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

#[derive(Args)]
pub struct AssessCommand {
    #[arg(short, long, value_enum)]
    pub lang: Option<LanguageArg>,

    /// Answer as QUESTION_ID=OPTION_INDEX; may be repeated
    #[arg(short, long = "answer", value_name = "ID=INDEX", value_parser = parse_answer)]
    pub answers: Vec<(String, i64)>,

    /// TOML file with an [answers] table
    #[arg(long)]
    pub answers_file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    #[arg(long, value_enum)]
    pub detail: Option<DetailArg>,

    /// Where Report_<score>.pdf is written
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Skip writing the document report
    #[arg(long)]
    pub no_report: bool,

    /// Directory holding recheck.toml and resources
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

fn parse_answer(raw: &str) -> Result<(String, i64), String> {
    let (id, index) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=INDEX, got `{raw}`"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing question id in `{raw}`"));
    }
    let index = index
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid option index in `{raw}`: {e}"))?;
    Ok((id.to_string(), index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answer_accepts_id_and_index() {
        assert_eq!(parse_answer("DQ1=2"), Ok(("DQ1".to_string(), 2)));
        assert_eq!(parse_answer(" RS3 = -1 "), Ok(("RS3".to_string(), -1)));
    }

    #[test]
    fn parse_answer_rejects_malformed_input() {
        assert!(parse_answer("DQ1").is_err());
        assert!(parse_answer("=2").is_err());
        assert!(parse_answer("DQ1=two").is_err());
    }
}
