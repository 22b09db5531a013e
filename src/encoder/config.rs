use std::sync::OnceLock;

use crate::error::{EncodeError, Result};
use crate::models::{ECLevel, MaskPattern, Version};

/// Knobs for a single encode call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Error correction level announced in the format information
    pub ec_level: ECLevel,
    /// Smallest version the search may pick
    pub min_version: Version,
    /// Largest version the search may pick
    pub max_version: Version,
    /// Skip the penalty search and use this mask
    pub mask: Option<MaskPattern>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: ECLevel::L,
            min_version: Version::MIN,
            max_version: Version::MAX,
            mask: None,
        }
    }
}

impl EncodeOptions {
    /// Defaults overridden by `QR_EC_LEVEL`, `QR_MIN_VERSION`, `QR_MAX_VERSION` and `QR_MASK`.
    /// The environment is read once per process.
    pub fn from_env() -> Self {
        Self {
            ec_level: env_ec_level(),
            min_version: env_min_version(),
            max_version: env_max_version(),
            mask: env_mask(),
        }
    }

    /// Reject an empty version window
    pub fn validate(&self) -> Result<()> {
        if self.min_version > self.max_version {
            return Err(EncodeError::InvalidArgument(
                "minimum version is larger than maximum version",
            ));
        }
        Ok(())
    }
}

fn parse_ec_level(raw: Option<&str>, default: ECLevel) -> ECLevel {
    raw.and_then(|v| v.parse::<ECLevel>().ok()).unwrap_or(default)
}

fn parse_version(raw: Option<&str>, default: Version) -> Version {
    raw.and_then(|v| v.trim().parse::<u8>().ok())
        .map(|n| n.clamp(Version::MIN.number(), Version::MAX.number()))
        .and_then(Version::new)
        .unwrap_or(default)
}

fn parse_mask(raw: Option<&str>) -> Option<MaskPattern> {
    raw.and_then(|v| v.trim().parse::<u8>().ok())
        .and_then(MaskPattern::from_index)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

static EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

pub(crate) fn env_ec_level() -> ECLevel {
    *EC_LEVEL.get_or_init(|| parse_ec_level(env_var("QR_EC_LEVEL").as_deref(), ECLevel::L))
}

static MIN_VERSION: OnceLock<Version> = OnceLock::new();

pub(crate) fn env_min_version() -> Version {
    *MIN_VERSION
        .get_or_init(|| parse_version(env_var("QR_MIN_VERSION").as_deref(), Version::MIN))
}

static MAX_VERSION: OnceLock<Version> = OnceLock::new();

pub(crate) fn env_max_version() -> Version {
    *MAX_VERSION
        .get_or_init(|| parse_version(env_var("QR_MAX_VERSION").as_deref(), Version::MAX))
}

static MASK: OnceLock<Option<MaskPattern>> = OnceLock::new();

pub(crate) fn env_mask() -> Option<MaskPattern> {
    *MASK.get_or_init(|| parse_mask(env_var("QR_MASK").as_deref()))
}
