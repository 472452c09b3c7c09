// Copyright @yucwang 2026

use crate::core::rng::DEFAULT_SEED;
use crate::core::sampler::Sampler;
use crate::samplers::random::RandomSampler;
use crate::samplers::stratified::{TentSampler, SUB_PIXEL_NUM};

use std::fmt;
use std::str::FromStr;

pub const WIDTH: usize = 1024;
pub const HEIGHT: usize = 768;
pub const DEFAULT_TOTAL_SAMPLES: u32 = 40;
pub const DEFAULT_OUTPUT: &str = "image.bmp";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SamplerKind {
    Stratified,
    Random,
}

impl SamplerKind {
    pub fn name(&self) -> &'static str {
        match self {
            SamplerKind::Stratified => "stratified",
            SamplerKind::Random => "random",
        }
    }
}

impl FromStr for SamplerKind {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stratified" | "tent" => Ok(SamplerKind::Stratified),
            "random" => Ok(SamplerKind::Random),
            other => Err(SettingsError::UnknownSampler(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    InvalidSampleCount(String),
    InvalidSeed(String),
    UnknownSampler(String),
    MissingValue(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidSampleCount(v) => write!(f, "invalid sample count '{}'", v),
            SettingsError::InvalidSeed(v) => write!(f, "invalid seed '{}'", v),
            SettingsError::UnknownSampler(v) => write!(f, "unknown sampler '{}'", v),
            SettingsError::MissingValue(flag) => write!(f, "missing value for {}", flag),
        }
    }
}

impl std::error::Error for SettingsError {}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub total_samples: u32,
    pub seed: u64,
    pub sampler: SamplerKind,
    pub output: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            total_samples: DEFAULT_TOTAL_SAMPLES,
            seed: DEFAULT_SEED,
            sampler: SamplerKind::Stratified,
            output: String::from(DEFAULT_OUTPUT),
        }
    }
}

pub fn parse_total_samples(value: &str) -> Result<u32, SettingsError> {
    match value.parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(SettingsError::InvalidSampleCount(value.to_string())),
    }
}

pub fn parse_seed(value: &str) -> Result<u64, SettingsError> {
    value.parse::<u64>().map_err(|_| SettingsError::InvalidSeed(value.to_string()))
}

fn warn_default<T: fmt::Debug>(err: &SettingsError, default: &T) {
    log::warn!("{}; using default {:?}", err, default);
}

impl RenderSettings {
    /// Parses `[TOTAL_SAMPLES] [--seed N] [--sampler NAME] [--output PATH]`
    /// (program name excluded). Bad values fall back to their defaults.
    pub fn from_args<I, S>(args: I) -> Self
        where I: IntoIterator<Item = S>, S: AsRef<str> {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        let mut settings = RenderSettings::default();
        let mut positional_seen = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    match args.get(i).ok_or(SettingsError::MissingValue("--seed")).and_then(|v| parse_seed(v)) {
                        Ok(seed) => settings.seed = seed,
                        Err(err) => warn_default(&err, &DEFAULT_SEED),
                    }
                }
                "--sampler" => {
                    i += 1;
                    match args.get(i).ok_or(SettingsError::MissingValue("--sampler")).and_then(|v| v.parse::<SamplerKind>()) {
                        Ok(kind) => settings.sampler = kind,
                        Err(err) => warn_default(&err, &SamplerKind::Stratified.name()),
                    }
                }
                "--output" => {
                    i += 1;
                    match args.get(i) {
                        Some(path) => settings.output = path.clone(),
                        None => warn_default(&SettingsError::MissingValue("--output"), &DEFAULT_OUTPUT),
                    }
                }
                value if !positional_seen => {
                    positional_seen = true;
                    match parse_total_samples(value) {
                        Ok(total) => settings.total_samples = total,
                        Err(err) => warn_default(&err, &DEFAULT_TOTAL_SAMPLES),
                    }
                }
                other => log::warn!("ignoring unexpected argument '{}'", other),
            }
            i += 1;
        }

        settings
    }

    /// Count handed to the sampler constructor. The stratified sampler
    /// multiplies it by its four strata, so the budget is divided first.
    pub fn requested_samples(&self) -> u32 {
        match self.sampler {
            SamplerKind::Stratified => (self.total_samples / SUB_PIXEL_NUM).max(1),
            SamplerKind::Random => self.total_samples.max(1),
        }
    }

    pub fn build_sampler(&self) -> Box<dyn Sampler> {
        let requested = self.requested_samples();
        match self.sampler {
            SamplerKind::Stratified => Box::new(TentSampler::new(requested, self.seed)),
            SamplerKind::Random => Box::new(RandomSampler::new(requested, self.seed)),
        }
    }
}
