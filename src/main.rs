mod answers;
mod bank;
mod branding;
mod cli;
mod config;
mod error;
mod logging;
mod report;
mod scoring;
mod types;

use crate::error::Result;
use crate::report::pdf::fonts::FontResources;
use crate::report::pdf::layout::DetailLevel;
use crate::report::pdf::ReportFile;
use crate::types::config::{DetailSetting, RecheckConfig};
use crate::types::language::{ui_text, Language};
use crate::types::question::{option_label, QuestionBank};
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

impl From<cli::LanguageArg> for Language {
    fn from(arg: cli::LanguageArg) -> Self {
        match arg {
            cli::LanguageArg::English => Language::English,
            cli::LanguageArg::SimplifiedChinese => Language::SimplifiedChinese,
            cli::LanguageArg::TraditionalChinese => Language::TraditionalChinese,
        }
    }
}

fn detail_level(arg: Option<cli::DetailArg>, cfg: &RecheckConfig) -> DetailLevel {
    match arg {
        Some(cli::DetailArg::Summary) => DetailLevel::Summary,
        Some(cli::DetailArg::Detailed) => DetailLevel::Detailed,
        None => match cfg.detail() {
            DetailSetting::Summary => DetailLevel::Summary,
            DetailSetting::Detailed => DetailLevel::Detailed,
        },
    }
}

fn startup_bank() -> Result<QuestionBank> {
    types::language::validate_tables()?;
    let bank = bank::reference_bank();
    bank.validate()?;
    Ok(bank)
}

fn print_questions(bank: &QuestionBank, language: Language) {
    let text = ui_text(language);
    println!("# {} ({})\n", text.title, language.display_name());
    for (heading, questions) in [
        (text.module_a, bank.module_a()),
        (text.module_b, bank.module_b()),
    ] {
        println!("## {heading}");
        for question in questions {
            println!("{}  {}", question.id, question.text(language));
            let options = (0..question.points.len())
                .map(|index| {
                    format!(
                        "{}) {} ({})",
                        index,
                        option_label(question, index as i64, language),
                        question.points_at(index)
                    )
                })
                .collect::<Vec<_>>();
            println!("    {}", options.join("  "));
        }
        println!();
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init_cli_logger(cli.verbose, cli.quiet);
    let bank = startup_bank()?;

    match cli.command {
        cli::Commands::Questions(cmd) => {
            if !cmd.config_dir.exists() {
                return Err(error::RecheckError::PathNotFound(
                    cmd.config_dir.display().to_string(),
                ));
            }
            let loaded = config::load_config(&cmd.config_dir)?.unwrap_or_default();
            let language = cmd.lang.map(Language::from).unwrap_or(loaded.language());
            print_questions(&bank, language);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Assess(cmd) => {
            let root = &cmd.config_dir;
            if !root.exists() {
                return Err(error::RecheckError::PathNotFound(
                    root.display().to_string(),
                ));
            }

            let loaded = config::load_config(root)?;
            if loaded.is_none() {
                tracing::info!(dir = %root.display(), "no recheck.toml found, using defaults");
            }
            let cfg = loaded.unwrap_or_default();
            let language = cmd.lang.map(Language::from).unwrap_or(cfg.language());

            let from_file = cmd
                .answers_file
                .as_deref()
                .map(answers::load_answers)
                .transpose()?;
            let selection = answers::build_selection(from_file, &cmd.answers);
            let result = scoring::score(&bank, &selection);
            tracing::info!(
                score = result.total_score,
                tier = ?result.risk_tier(),
                answered = selection.len(),
                "assessment scored"
            );

            let delivered = if cmd.no_report {
                None
            } else {
                let fonts = FontResources {
                    simplified: cfg.font_sc_path(root),
                    traditional: cfg.font_tc_path(root),
                };
                let file = ReportFile::build(
                    &bank,
                    &result,
                    language,
                    detail_level(cmd.detail, &cfg),
                    &fonts,
                    chrono::Local::now().date_naive(),
                )?;

                let out_dir = cmd.out_dir.clone().unwrap_or_else(|| cfg.output_dir(root));
                std::fs::create_dir_all(&out_dir)?;
                let path = out_dir.join(&file.file_name);
                std::fs::write(&path, &file.bytes)?;
                tracing::info!(
                    path = %path.display(),
                    mime = file.mime,
                    requested = %file.resolution.requested,
                    rendered = %file.resolution.render,
                    "report written"
                );

                Some(report::DeliveredReport {
                    path: path.display().to_string(),
                    pages: file.pages,
                    fallback: file.resolution.fallback.as_ref().map(ToString::to_string),
                })
            };

            let branding = branding::Branding::detect(&cfg.logo_path(root), cfg.company());
            let dashboard = report::Dashboard {
                bank: &bank,
                result: &result,
                language,
                branding: &branding,
                contact_email: cfg.contact_email(),
                report: delivered,
            };
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render(&dashboard, output_format)?);

            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
