use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branding {
    Logo(PathBuf),
    /// Shown when no logo image is available.
    Text(String),
}

impl Branding {
    pub fn detect(logo: &Path, company: &str) -> Self {
        if logo.is_file() {
            Self::Logo(logo.to_path_buf())
        } else {
            tracing::debug!(path = %logo.display(), "logo not found, using text branding");
            Self::Text(company.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn detect_uses_logo_when_present() {
        let dir = TempDir::new().expect("temp dir should be created");
        let logo = dir.path().join("logo.png");
        fs::write(&logo, b"\x89PNG").expect("logo should write");
        assert_eq!(Branding::detect(&logo, "Co"), Branding::Logo(logo));
    }

    #[test]
    fn detect_falls_back_to_company_text() {
        let dir = TempDir::new().expect("temp dir should be created");
        let branding = Branding::detect(&dir.path().join("logo.png"), "Xu Consulting Group");
        assert_eq!(branding, Branding::Text("Xu Consulting Group".to_string()));
    }
}
