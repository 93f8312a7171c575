use crate::types::language::Language;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the language-specific TrueType files are expected.
#[derive(Debug, Clone)]
pub struct FontResources {
    pub simplified: PathBuf,
    pub traditional: PathBuf,
}

impl FontResources {
    pub fn path_for(&self, language: Language) -> Option<&Path> {
        match language {
            Language::English => None,
            Language::SimplifiedChinese => Some(&self.simplified),
            Language::TraditionalChinese => Some(&self.traditional),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFace {
    /// Helvetica, always available to PDF readers.
    Builtin,
    Embedded { name: String, bytes: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    Missing(PathBuf),
    Corrupt { path: PathBuf, reason: String },
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "font file missing: {}", path.display()),
            Self::Corrupt { path, reason } => {
                write!(f, "font file unreadable: {}: {}", path.display(), reason)
            }
        }
    }
}

/// Outcome of the per-report font decision. `render` gates every string the
/// layout draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontResolution {
    pub requested: Language,
    pub render: Language,
    pub face: ReportFace,
    pub fallback: Option<FallbackReason>,
}

impl FontResolution {
    pub fn base(requested: Language) -> Self {
        Self {
            requested,
            render: Language::BASE,
            face: ReportFace::Builtin,
            fallback: None,
        }
    }

    pub fn fell_back(&self) -> bool {
        self.fallback.is_some()
    }

    fn from_outcome(
        requested: Language,
        outcome: std::result::Result<(String, Vec<u8>), FallbackReason>,
    ) -> Self {
        match outcome {
            Ok((name, bytes)) => Self {
                requested,
                render: requested,
                face: ReportFace::Embedded { name, bytes },
                fallback: None,
            },
            Err(reason) => {
                tracing::warn!(language = %requested, %reason, "falling back to base language");
                Self {
                    fallback: Some(reason),
                    ..Self::base(requested)
                }
            }
        }
    }
}

pub fn resolve(requested: Language, resources: &FontResources) -> FontResolution {
    match resources.path_for(requested) {
        Some(path) => FontResolution::from_outcome(requested, acquire(path)),
        None => FontResolution::base(requested),
    }
}

fn acquire(path: &Path) -> std::result::Result<(String, Vec<u8>), FallbackReason> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(FallbackReason::Missing(path.to_path_buf()));
        }
        Err(err) => {
            return Err(FallbackReason::Corrupt {
                path: path.to_path_buf(),
                reason: err.to_string(),
            });
        }
    };

    let face = ttf_parser::Face::parse(&bytes, 0).map_err(|err| FallbackReason::Corrupt {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let name = family_name(&face).unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Embedded".to_string())
    });
    tracing::debug!(path = %path.display(), font = %name, "loaded report font");
    Ok((name, bytes))
}

fn family_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    face.names()
        .into_iter()
        .filter(|name| name.name_id == ttf_parser::name_id::FAMILY)
        .find_map(|name| name.to_string())
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Smallest sfnt both ttf-parser and printpdf accept: `head`, `hhea` and
    /// `maxp` with a single glyph.
    pub fn minimal_face() -> Vec<u8> {
        let mut head = Vec::new();
        head.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
        head.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // fontRevision
        head.extend_from_slice(&0u32.to_be_bytes()); // checksumAdjustment
        head.extend_from_slice(&0x5F0F_3CF5u32.to_be_bytes()); // magicNumber
        head.extend_from_slice(&0u16.to_be_bytes()); // flags
        head.extend_from_slice(&1000u16.to_be_bytes()); // unitsPerEm
        head.extend_from_slice(&[0; 16]); // created, modified
        for bound in [0i16, -200, 1000, 800] {
            head.extend_from_slice(&bound.to_be_bytes());
        }
        head.extend_from_slice(&[0; 10]); // macStyle .. glyphDataFormat

        let mut hhea = Vec::new();
        hhea.extend_from_slice(&0x0001_0000u32.to_be_bytes());
        for metric in [800i16, -200, 0] {
            hhea.extend_from_slice(&metric.to_be_bytes());
        }
        hhea.extend_from_slice(&[0; 24]);
        hhea.extend_from_slice(&0u16.to_be_bytes()); // numberOfHMetrics

        let mut maxp = Vec::new();
        maxp.extend_from_slice(&0x0000_5000u32.to_be_bytes());
        maxp.extend_from_slice(&1u16.to_be_bytes());

        let tables: [(&[u8; 4], Vec<u8>); 3] = [(b"head", head), (b"hhea", hhea), (b"maxp", maxp)];
        let mut font = Vec::new();
        font.extend_from_slice(&0x0001_0000u32.to_be_bytes());
        for field in [3u16, 32, 1, 16] {
            font.extend_from_slice(&field.to_be_bytes());
        }

        let mut offset = 12 + 16 * tables.len();
        let mut body = Vec::new();
        for (tag, data) in &tables {
            font.extend_from_slice(*tag);
            font.extend_from_slice(&0u32.to_be_bytes());
            font.extend_from_slice(&(offset as u32).to_be_bytes());
            font.extend_from_slice(&(data.len() as u32).to_be_bytes());
            body.extend_from_slice(data);
            while body.len() % 4 != 0 {
                body.push(0);
            }
            offset = 12 + 16 * tables.len() + body.len();
        }
        font.extend_from_slice(&body);
        font
    }
}
