// src/reaction.rs - Rule-based reaction classification

use crate::mixture::Mixture;
use crate::substance::SubstanceId;

/// One classification rule: a reaction fires when every required
/// substance is present in the mixture, in any order and any amount.
#[derive(Debug, Clone, Copy)]
pub struct ReactionRule {
    pub name: &'static str,
    pub required: &'static [SubstanceId],
    pub headline: &'static str,
}

/// Ordered rule table; the first match wins. Pure data so that new
/// reactions are added here without touching the classifier.
pub const REACTION_RULES: &[ReactionRule] = &[
    ReactionRule {
        name: "netralisasi-hcl-naoh",
        required: &[SubstanceId::HydrochloricAcid, SubstanceId::SodiumHydroxide],
        headline: "Reaksi netralisasi: HCl + NaOH → NaCl + H₂O",
    },
    ReactionRule {
        name: "netralisasi-h2so4-koh",
        required: &[SubstanceId::SulfuricAcid, SubstanceId::PotassiumHydroxide],
        headline: "Reaksi netralisasi: H₂SO₄ + 2KOH → K₂SO₄ + 2H₂O",
    },
    ReactionRule {
        name: "penggantian-cuso4-fe",
        required: &[SubstanceId::CopperSulfate, SubstanceId::Iron],
        headline: "Reaksi penggantian: CuSO₄ + Fe → FeSO₄ + Cu",
    },
    ReactionRule {
        name: "oksidasi-kmno4-h2so4",
        required: &[SubstanceId::PotassiumPermanganate, SubstanceId::SulfuricAcid],
        headline: "Reaksi oksidasi: KMnO₄ bertindak sebagai oksidator kuat",
    },
];

/// Classify a mixture against [`REACTION_RULES`].
///
/// Matching is presence-only: duplicates and addition order are
/// irrelevant. When no rule matches, the fallback lists every distinct
/// substance in first-seen order with the total volume.
pub fn classify(mixture: &Mixture) -> String {
    if mixture.is_empty() {
        return "Belum ada senyawa yang ditambahkan.".to_string();
    }

    let present = mixture.distinct_substances();
    let total_volume = mixture.total_volume_ml();

    for rule in REACTION_RULES {
        if rule.required.iter().all(|id| present.contains(id)) {
            return format!("{}\nVolume total: {} mL", rule.headline, total_volume);
        }
    }

    let names: Vec<&str> = present.iter().map(|id| id.as_str()).collect();
    format!(
        "Campuran {}. Volume total: {} mL",
        names.join(", "),
        total_volume
    )
}
