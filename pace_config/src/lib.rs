#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Preference schema and parsing for the pace keeper.
//!
//! Preferences mirror the host's persistent key-value store: two
//! string-encoded floating-point values (minimum pace, best pace) and
//! one boolean active flag. Numeric values round-trip as decimal text,
//! and malformed text is tolerated: the consumer keeps its previous
//! in-memory value.

use serde::Deserialize;

/// Stable preference keys, matching the host's key-value store layout.
pub const KEY_ACTIVE: &str = "active";
pub const KEY_MIN_STEP_FREQ: &str = "min_step_freq";
pub const KEY_BEST_PACE: &str = "best_pace";

/// Preference snapshot as stored by the host.
///
/// Expected TOML:
///
/// ```toml
/// active = true
/// min_step_freq = "2.0"
/// best_pace = "3.4"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Prefs {
    /// Whether pace monitoring is enabled.
    pub active: bool,
    /// Minimum acceptable pace in steps/second, decimal text.
    pub min_step_freq: String,
    /// Best pace ever observed in steps/second, decimal text.
    pub best_pace: String,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            active: false,
            min_step_freq: "0.0".to_string(),
            best_pace: "0.0".to_string(),
        }
    }
}

/// A single preference change event delivered by the host.
///
/// Numeric values stay in their stored string encoding; the tolerant
/// parse happens at the consumer so a bad write never clobbers a good
/// in-memory value.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefChange {
    Active(bool),
    MinStepFreq(String),
    BestPace(String),
}

impl Prefs {
    /// Check the snapshot for values that would later be silently ignored.
    /// Never panics; malformed text is reported, not rejected at load.
    pub fn validate(&self) -> eyre::Result<()> {
        if parse_pace(&self.min_step_freq).is_none() {
            eyre::bail!(
                "min_step_freq is not a finite decimal number: {:?}",
                self.min_step_freq
            );
        }
        if parse_pace(&self.best_pace).is_none() {
            eyre::bail!(
                "best_pace is not a finite decimal number: {:?}",
                self.best_pace
            );
        }
        Ok(())
    }

    /// Startup seeding order: active flag, minimum pace, then best pace.
    ///
    /// Best pace is seeded from the best-pace key. (An earlier seeding
    /// path read the min-step-frequency key twice; that was a defect.)
    pub fn seed_changes(&self) -> [PrefChange; 3] {
        [
            PrefChange::Active(self.active),
            PrefChange::MinStepFreq(self.min_step_freq.clone()),
            PrefChange::BestPace(self.best_pace.clone()),
        ]
    }
}

/// Parse a stored pace value (decimal text) into steps/second.
///
/// Returns `None` for anything that is not a finite number; callers
/// keep their previous value in that case.
pub fn parse_pace(s: &str) -> Option<f32> {
    let v: f32 = s.trim().parse().ok()?;
    v.is_finite().then_some(v)
}

/// Encode a pace value back into its stored decimal-text form.
pub fn format_pace(pace: f32) -> String {
    pace.to_string()
}

pub fn load_toml(s: &str) -> Result<Prefs, toml::de::Error> {
    toml::from_str::<Prefs>(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pace_accepts_decimal_text() {
        assert_eq!(parse_pace("2.0"), Some(2.0));
        assert_eq!(parse_pace(" 3.25 "), Some(3.25));
        assert_eq!(parse_pace("0"), Some(0.0));
    }

    #[test]
    fn parse_pace_rejects_junk_and_non_finite() {
        assert_eq!(parse_pace(""), None);
        assert_eq!(parse_pace("fast"), None);
        assert_eq!(parse_pace("NaN"), None);
        assert_eq!(parse_pace("inf"), None);
    }

    #[test]
    fn pace_round_trips_as_decimal_text() {
        let s = format_pace(2.5);
        assert_eq!(parse_pace(&s), Some(2.5));
    }

    #[test]
    fn defaults_are_inactive_zeroes() {
        let p = Prefs::default();
        assert!(!p.active);
        assert_eq!(parse_pace(&p.min_step_freq), Some(0.0));
        assert_eq!(parse_pace(&p.best_pace), Some(0.0));
    }

    #[test]
    fn seed_changes_reads_best_pace_from_best_pace_key() {
        let p = Prefs {
            active: true,
            min_step_freq: "2.0".into(),
            best_pace: "3.5".into(),
        };
        let [a, m, b] = p.seed_changes();
        assert_eq!(a, PrefChange::Active(true));
        assert_eq!(m, PrefChange::MinStepFreq("2.0".into()));
        assert_eq!(b, PrefChange::BestPace("3.5".into()));
    }
}
