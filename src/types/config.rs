use crate::error::RecheckError;
use crate::types::language::Language;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_FONT_SC: &str = "font_sc.ttf";
pub const DEFAULT_FONT_TC: &str = "font_tc.ttf";
pub const DEFAULT_LOGO: &str = "logo.png";
pub const DEFAULT_COMPANY: &str = "Xu Consulting Group";
pub const DEFAULT_CONTACT_EMAIL: &str = "James.Xu@xuconsultinggroup.com";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecheckConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
    #[serde(default)]
    pub branding: BrandingConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailSetting {
    #[default]
    Summary,
    Detailed,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    pub language: Option<Language>,
    pub detail: Option<DetailSetting>,
    pub output_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourcesConfig {
    pub dir: Option<String>,
    pub font_sc: Option<String>,
    pub font_tc: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandingConfig {
    pub company: Option<String>,
    pub contact_email: Option<String>,
}

impl RecheckConfig {
    pub fn language(&self) -> Language {
        self.report.language.unwrap_or_default()
    }

    pub fn detail(&self) -> DetailSetting {
        self.report.detail.unwrap_or_default()
    }

    pub fn output_dir(&self, root: &Path) -> PathBuf {
        match &self.report.output_dir {
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        }
    }

    pub fn resource_dir(&self, root: &Path) -> PathBuf {
        match &self.resources.dir {
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        }
    }

    pub fn font_sc_path(&self, root: &Path) -> PathBuf {
        self.resource_dir(root).join(
            self.resources
                .font_sc
                .as_deref()
                .unwrap_or(DEFAULT_FONT_SC),
        )
    }

    pub fn font_tc_path(&self, root: &Path) -> PathBuf {
        self.resource_dir(root).join(
            self.resources
                .font_tc
                .as_deref()
                .unwrap_or(DEFAULT_FONT_TC),
        )
    }

    pub fn logo_path(&self, root: &Path) -> PathBuf {
        self.resource_dir(root)
            .join(self.resources.logo.as_deref().unwrap_or(DEFAULT_LOGO))
    }

    pub fn company(&self) -> &str {
        self.branding.company.as_deref().unwrap_or(DEFAULT_COMPANY)
    }

    pub fn contact_email(&self) -> &str {
        self.branding
            .contact_email
            .as_deref()
            .unwrap_or(DEFAULT_CONTACT_EMAIL)
    }

    pub fn validate(&self) -> Result<(), RecheckError> {
        let file_names = [
            ("resources.font_sc", self.resources.font_sc.as_deref()),
            ("resources.font_tc", self.resources.font_tc.as_deref()),
            ("resources.logo", self.resources.logo.as_deref()),
        ];
        for (key, value) in file_names {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(RecheckError::ConfigParse(format!(
                        "{key} must not be empty"
                    )));
                }
            }
        }

        if let Some(company) = &self.branding.company {
            if company.trim().is_empty() {
                return Err(RecheckError::ConfigParse(
                    "branding.company must not be empty".to_string(),
                ));
            }
        }
        if let Some(email) = &self.branding.contact_email {
            if !email.contains('@') {
                return Err(RecheckError::ConfigParse(format!(
                    "branding.contact_email is not an email address: {email}"
                )));
            }
        }

        Ok(())
    }
}
