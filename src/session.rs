// src/session.rs - Explicit experiment session owning the mixture and log

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants::{
    CANONICAL_WHITE_HEX, DEFAULT_TEMPERATURE_C, FLASK_HEIGHT_PX, FLASK_WIDTH_PX,
    MIN_ADDITION_VOLUME_ML,
};
use crate::error::{LabError, LabResult};
use crate::flask;
use crate::mixture::{Addition, Mixture};
use crate::reaction;
use crate::substance::SubstanceId;

/// Everything one "start reaction" produces. Recomputed in full on every
/// trigger, never updated incrementally.
#[derive(Debug, Clone)]
pub struct ReactionResult {
    pub color: Rgb,
    pub color_hex: String,
    pub classification: String,
    pub image: RgbaImage,
}

/// One experiment: the ordered mixture, the aggregate color of the last
/// reaction, an informational temperature, and the experiment log.
///
/// A session is a plain value with no hidden globals. Hosts that run
/// several experiments at once give each its own session; every call runs
/// to completion before the next event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixtureSession {
    pub mixture: Mixture,
    pub aggregate_color_hex: String,
    pub temperature_c: i32,
    pub last_reaction: Option<String>,
    pub log: Vec<String>,
}

impl Default for MixtureSession {
    fn default() -> Self {
        MixtureSession {
            mixture: Mixture::new(),
            aggregate_color_hex: CANONICAL_WHITE_HEX.to_string(),
            temperature_c: DEFAULT_TEMPERATURE_C,
            last_reaction: None,
            log: Vec::new(),
        }
    }
}

impl MixtureSession {
    pub fn new() -> Self {
        MixtureSession::default()
    }

    /// Pour `volume_ml` of a substance into the mixture. The substance's
    /// color and category are copied from the reference table at add time.
    pub fn add_substance(&mut self, id: SubstanceId, volume_ml: u32) -> LabResult<()> {
        if volume_ml < MIN_ADDITION_VOLUME_ML {
            return Err(LabError::InvalidVolume { volume_ml });
        }
        let profile = id.profile();
        let color = Rgb::from_hex(profile.color_hex)?;
        self.mixture.push(Addition {
            substance: id,
            color,
            volume_ml,
            category: profile.category.to_string(),
        });
        self.log
            .push(format!("Menambahkan {} mL {}", volume_ml, id.as_str()));
        Ok(())
    }

    pub fn total_volume_ml(&self) -> u32 {
        self.mixture.total_volume_ml()
    }

    /// Informational only; does not influence any reaction outcome.
    pub fn set_temperature(&mut self, celsius: i32) {
        self.temperature_c = celsius;
    }

    /// Empty the mixture and restore defaults. The log keeps growing.
    pub fn reset(&mut self) {
        self.mixture.clear();
        self.aggregate_color_hex = CANONICAL_WHITE_HEX.to_string();
        self.temperature_c = DEFAULT_TEMPERATURE_C;
        self.last_reaction = None;
        self.log.push("Reset semua campuran".to_string());
    }

    /// Run the classifier, the color fold, and the renderer over the
    /// current mixture, in that order, and store the text and color on the
    /// session. An empty mixture is not an error: it yields white, the
    /// no-substances text, and an empty flask.
    pub fn start_reaction(&mut self, width: u32, height: u32) -> ReactionResult {
        let classification = reaction::classify(&self.mixture);
        let color = self.mixture.color();
        let image = flask::render_flask(color, self.mixture.total_volume_ml(), width, height);

        self.aggregate_color_hex = color.to_hex();
        self.last_reaction = Some(classification.clone());
        self.log
            .push(format!("Memulai reaksi pada {}°C", self.temperature_c));

        ReactionResult {
            color,
            color_hex: color.to_hex(),
            classification,
            image,
        }
    }

    /// [`MixtureSession::start_reaction`] at the default 200x300 render size.
    pub fn start_reaction_default(&mut self) -> ReactionResult {
        self.start_reaction(FLASK_WIDTH_PX, FLASK_HEIGHT_PX)
    }

    /// The most recent `n` log lines, newest first.
    pub fn recent_log(&self, n: usize) -> Vec<&str> {
        self.log.iter().rev().take(n).map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_volume_addition_is_rejected() {
        let mut session = MixtureSession::new();
        let err = session.add_substance(SubstanceId::Water, 0).unwrap_err();
        assert!(matches!(err, LabError::InvalidVolume { volume_ml: 0 }));
        assert!(session.mixture.is_empty());
        assert!(session.log.is_empty());
    }

    #[test]
    fn additions_are_logged_and_totalled() {
        let mut session = MixtureSession::new();
        session.add_substance(SubstanceId::Water, 40).unwrap();
        session.add_substance(SubstanceId::Ethanol, 25).unwrap();

        assert_eq!(session.total_volume_ml(), 65);
        assert_eq!(
            session.recent_log(2),
            vec!["Menambahkan 25 mL Etanol (C₂H₅OH)", "Menambahkan 40 mL Air (H₂O)"]
        );
    }

    #[test]
    fn reset_restores_defaults_but_keeps_log() {
        let mut session = MixtureSession::new();
        session.add_substance(SubstanceId::Water, 40).unwrap();
        session.set_temperature(80);
        session.start_reaction_default();
        session.reset();

        assert!(session.mixture.is_empty());
        assert_eq!(session.aggregate_color_hex, CANONICAL_WHITE_HEX);
        assert_eq!(session.temperature_c, DEFAULT_TEMPERATURE_C);
        assert_eq!(session.last_reaction, None);
        assert_eq!(session.recent_log(1), vec!["Reset semua campuran"]);
        assert_eq!(session.log.len(), 3);
    }

    #[test]
    fn empty_reaction_is_defined_not_an_error() {
        let mut session = MixtureSession::new();
        let result = session.start_reaction_default();

        assert_eq!(result.color_hex, CANONICAL_WHITE_HEX);
        assert_eq!(result.classification, "Belum ada senyawa yang ditambahkan.");
        assert_eq!(result.image.dimensions(), (200, 300));
    }

    #[test]
    fn session_state_round_trips_through_json() {
        let mut session = MixtureSession::new();
        session.add_substance(SubstanceId::CopperSulfate, 35).unwrap();
        session.start_reaction_default();

        let json = serde_json::to_string(&session).unwrap();
        let restored: MixtureSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, restored);
    }
}
