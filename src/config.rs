//! Site-wide tunables.
//!
//! Defaults reproduce the production page. A page can override any subset
//! by embedding `<script type="application/json" id="site-config">`.
//! Engine overrides are merged field by field onto the matching preset.

use serde::Deserialize;

use crate::carousel::CarouselConfig;
use crate::effects::EffectsConfig;
use crate::engine::EngineConfig;
use crate::error::Result;
use crate::typewriter::{default_phrases, TypewriterTiming};

/// Id of the inline JSON block read at startup.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    #[serde(deserialize_with = "preset::hero")]
    pub hero: EngineConfig,
    #[serde(deserialize_with = "preset::services")]
    pub services: EngineConfig,
    #[serde(deserialize_with = "preset::cta")]
    pub cta: EngineConfig,
    pub phrases: Vec<String>,
    pub typewriter: TypewriterTiming,
    pub effects: EffectsConfig,
    pub carousel: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero: EngineConfig::hero(),
            services: EngineConfig::services(),
            cta: EngineConfig::cta(),
            phrases: default_phrases(),
            typewriter: TypewriterTiming::default(),
            effects: EffectsConfig::default(),
            carousel: CarouselConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse an optional inline block, falling back to defaults when it is
    /// absent, blank or invalid.
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self::default(),
            Some(raw) => Self::from_json(raw).unwrap_or_else(|err| {
                log::warn!("{err}; using default site config");
                Self::default()
            }),
        }
    }
}

mod preset {
    use serde::de::{Deserialize, DeserializeOwned, Deserializer, Error};
    use serde::Serialize;
    use serde_json::Value;

    use crate::engine::EngineConfig;

    pub fn hero<'de, D: Deserializer<'de>>(de: D) -> Result<EngineConfig, D::Error> {
        merged(EngineConfig::hero(), de)
    }

    pub fn services<'de, D: Deserializer<'de>>(de: D) -> Result<EngineConfig, D::Error> {
        merged(EngineConfig::services(), de)
    }

    pub fn cta<'de, D: Deserializer<'de>>(de: D) -> Result<EngineConfig, D::Error> {
        merged(EngineConfig::cta(), de)
    }

    fn merged<'de, T, D>(base: T, de: D) -> Result<T, D::Error>
    where
        T: Serialize + DeserializeOwned,
        D: Deserializer<'de>,
    {
        let patch = Value::deserialize(de)?;
        let mut value = serde_json::to_value(base).map_err(D::Error::custom)?;
        merge(&mut value, patch);
        serde_json::from_value(value).map_err(D::Error::custom)
    }

    /// Objects merge key by key; anything else replaces the base value.
    fn merge(base: &mut Value, patch: Value) {
        match (base, patch) {
            (Value::Object(base), Value::Object(patch)) => {
                for (key, value) in patch {
                    merge(base.entry(key).or_insert(Value::Null), value);
                }
            }
            (base, patch) => *base = patch,
        }
    }
}
