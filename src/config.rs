//! Pipeline configuration
//!
//! `StarfieldConfig` carries every knob of the pipeline. Process-wide
//! overrides come from `STARFIELD_*` environment variables, each read once.

use crate::error::{Result, StarfieldError};
use std::str::FromStr;
use std::sync::OnceLock;

/// Default intensity cutoff
pub const DEFAULT_THRESHOLD: u8 = 128;
/// Default number of sampled stars
pub const DEFAULT_NUM_STARS: usize = 500;

fn parse_value<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|v| v.trim().parse::<T>().ok())
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// `STARFIELD_MAX_DIM` value; zero or garbage means no limit
pub fn parse_max_dim(raw: Option<&str>) -> Option<u32> {
    parse_value::<u32>(raw).filter(|&v| v > 0)
}

/// `STARFIELD_SEED` value; garbage means no seed
pub fn parse_seed(raw: Option<&str>) -> Option<u64> {
    parse_value(raw)
}

static MAX_DIM: OnceLock<Option<u32>> = OnceLock::new();

/// Longest side allowed at load time; larger inputs are downscaled.
/// `STARFIELD_MAX_DIM=0` or unset disables downscaling.
pub fn max_dim_from_env() -> Option<u32> {
    *MAX_DIM.get_or_init(|| parse_max_dim(env_value("STARFIELD_MAX_DIM").as_deref()))
}

static SEED: OnceLock<Option<u64>> = OnceLock::new();

/// Default RNG seed from `STARFIELD_SEED`
pub fn seed_from_env() -> Option<u64> {
    *SEED.get_or_init(|| parse_seed(env_value("STARFIELD_SEED").as_deref()))
}

/// How the intensity cutoff is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdSetting {
    /// Fixed cutoff in 0..=255
    Fixed(u8),
    /// Cutoff chosen per image with Otsu's method
    Otsu,
}

impl Default for ThresholdSetting {
    fn default() -> Self {
        ThresholdSetting::Fixed(DEFAULT_THRESHOLD)
    }
}

/// Which side of the cutoff becomes foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Darker than the cutoff is foreground (dark shape on light ground)
    #[default]
    Inverse,
    /// Brighter than the cutoff is foreground
    Direct,
}

/// Canvas and marker settings for the scatter plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotStyle {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Marker radius in pixels
    pub point_size: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            point_size: 1,
        }
    }
}

/// Full pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarfieldConfig {
    /// Intensity cutoff
    pub threshold: ThresholdSetting,
    /// Foreground side of the cutoff
    pub polarity: Polarity,
    /// Stars to sample
    pub num_stars: usize,
    /// RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Plot appearance
    pub style: PlotStyle,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            threshold: ThresholdSetting::default(),
            polarity: Polarity::default(),
            num_stars: DEFAULT_NUM_STARS,
            seed: seed_from_env(),
            style: PlotStyle::default(),
        }
    }
}

impl StarfieldConfig {
    /// Config with a fixed cutoff and star count, everything else default
    pub fn new(threshold: u8, num_stars: usize) -> Self {
        Self {
            threshold: ThresholdSetting::Fixed(threshold),
            num_stars,
            ..Self::default()
        }
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.num_stars == 0 {
            return Err(StarfieldError::InvalidStarCount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StarfieldConfig::default();
        assert_eq!(config.threshold, ThresholdSetting::Fixed(128));
        assert_eq!(config.polarity, Polarity::Inverse);
        assert_eq!(config.num_stars, 500);
        assert_eq!(config.style, PlotStyle::default());
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(Some("42")), Some(42));
        assert_eq!(parse_seed(Some(" 7\n")), Some(7));
        assert_eq!(parse_seed(Some("-1")), None);
        assert_eq!(parse_seed(Some("abc")), None);
        assert_eq!(parse_seed(None), None);
    }

    #[test]
    fn test_parse_max_dim() {
        assert_eq!(parse_max_dim(Some("800")), Some(800));
        assert_eq!(parse_max_dim(Some("0")), None);
        assert_eq!(parse_max_dim(Some("big")), None);
        assert_eq!(parse_max_dim(None), None);
    }

    #[test]
    fn test_default_seed_follows_env() {
        let expected = parse_seed(std::env::var("STARFIELD_SEED").ok().as_deref());
        assert_eq!(seed_from_env(), expected);
        assert_eq!(StarfieldConfig::default().seed, expected);
    }

    #[test]
    fn test_zero_stars_rejected() {
        let config = StarfieldConfig::new(128, 0);
        assert!(matches!(
            config.validate(),
            Err(StarfieldError::InvalidStarCount)
        ));
        assert!(StarfieldConfig::new(128, 1).validate().is_ok());
    }
}
