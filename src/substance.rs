// src/substance.rs - Substance reference table with display colors and physical properties

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Closed set of substances known to the simulator.
///
/// The display identifier returned by [`SubstanceId::as_str`] is the stable
/// key used in classification output, logs, and persistence; variants exist
/// so the compiler can enforce that every substance has a profile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubstanceId {
    // metals
    Sodium,
    Potassium,
    Calcium,
    Magnesium,
    Aluminium,
    Iron,
    Copper,
    // acids
    HydrochloricAcid,
    SulfuricAcid,
    NitricAcid,
    AceticAcid,
    // bases
    SodiumHydroxide,
    PotassiumHydroxide,
    AmmoniumHydroxide,
    // salts
    SodiumChloride,
    PotassiumNitrate,
    CalciumCarbonate,
    // solvents
    Water,
    Ethanol,
    Acetone,
    // organics
    Glucose,
    Sucrose,
    Methane,
    // oxidizers and special compounds
    PotassiumPermanganate,
    PotassiumDichromate,
    CopperSulfate,
}

impl SubstanceId {
    /// Every substance, in reference-table order.
    pub const ALL: [SubstanceId; 26] = [
        SubstanceId::Sodium,
        SubstanceId::Potassium,
        SubstanceId::Calcium,
        SubstanceId::Magnesium,
        SubstanceId::Aluminium,
        SubstanceId::Iron,
        SubstanceId::Copper,
        SubstanceId::HydrochloricAcid,
        SubstanceId::SulfuricAcid,
        SubstanceId::NitricAcid,
        SubstanceId::AceticAcid,
        SubstanceId::SodiumHydroxide,
        SubstanceId::PotassiumHydroxide,
        SubstanceId::AmmoniumHydroxide,
        SubstanceId::SodiumChloride,
        SubstanceId::PotassiumNitrate,
        SubstanceId::CalciumCarbonate,
        SubstanceId::Water,
        SubstanceId::Ethanol,
        SubstanceId::Acetone,
        SubstanceId::Glucose,
        SubstanceId::Sucrose,
        SubstanceId::Methane,
        SubstanceId::PotassiumPermanganate,
        SubstanceId::PotassiumDichromate,
        SubstanceId::CopperSulfate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubstanceId::Sodium => "Natrium (Na)",
            SubstanceId::Potassium => "Kalium (K)",
            SubstanceId::Calcium => "Kalsium (Ca)",
            SubstanceId::Magnesium => "Magnesium (Mg)",
            SubstanceId::Aluminium => "Aluminium (Al)",
            SubstanceId::Iron => "Besi (Fe)",
            SubstanceId::Copper => "Tembaga (Cu)",
            SubstanceId::HydrochloricAcid => "Asam Klorida (HCl)",
            SubstanceId::SulfuricAcid => "Asam Sulfat (H₂SO₄)",
            SubstanceId::NitricAcid => "Asam Nitrat (HNO₃)",
            SubstanceId::AceticAcid => "Asam Asetat (CH₃COOH)",
            SubstanceId::SodiumHydroxide => "Natrium Hidroksida (NaOH)",
            SubstanceId::PotassiumHydroxide => "Kalium Hidroksida (KOH)",
            SubstanceId::AmmoniumHydroxide => "Amonium Hidroksida (NH₄OH)",
            SubstanceId::SodiumChloride => "Natrium Klorida (NaCl)",
            SubstanceId::PotassiumNitrate => "Kalium Nitrat (KNO₃)",
            SubstanceId::CalciumCarbonate => "Kalsium Karbonat (CaCO₃)",
            SubstanceId::Water => "Air (H₂O)",
            SubstanceId::Ethanol => "Etanol (C₂H₅OH)",
            SubstanceId::Acetone => "Aseton (C₃H₆O)",
            SubstanceId::Glucose => "Glikosa (C₆H₁₂O₆)",
            SubstanceId::Sucrose => "Sukrosa (C₁₂H₂₂O₁₁)",
            SubstanceId::Methane => "Metana (CH₄)",
            SubstanceId::PotassiumPermanganate => "Permanganat Kalium (KMnO₄)",
            SubstanceId::PotassiumDichromate => "Dikromat Kalium (K₂Cr₂O₇)",
            SubstanceId::CopperSulfate => "Tembaga Sulfat (CuSO₄)",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        SubstanceId::ALL.iter().copied().find(|id| id.as_str() == s)
    }

    /// The reference profile for this substance.
    pub fn profile(&self) -> &'static SubstanceProfile {
        get_profile(*self).expect("profile table covers every SubstanceId")
    }
}

/// Reference data for one substance. Density and reactivity are
/// informational only; the core algorithms consume just the color.
#[derive(Debug, Clone)]
pub struct SubstanceProfile {
    pub kind: SubstanceId,
    pub color_hex: &'static str,
    pub category: &'static str,
    pub density: f64,
    pub reactivity: u8,
}

macro_rules! profile_row {
    ($map:ident, $kind:ident, $color:literal, $category:literal, $density:literal, $reactivity:literal) => {
        $map.insert(
            SubstanceId::$kind,
            SubstanceProfile {
                kind: SubstanceId::$kind,
                color_hex: $color,
                category: $category,
                density: $density,
                reactivity: $reactivity,
            },
        );
    };
}

pub static SUBSTANCE_PROFILES: Lazy<HashMap<SubstanceId, SubstanceProfile>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // metals
    profile_row!(m, Sodium, "#C0C0C0", "logam alkali", 0.97, 9);
    profile_row!(m, Potassium, "#8F8FFF", "logam alkali", 0.86, 9);
    profile_row!(m, Calcium, "#E2E2E2", "logam alkali tanah", 1.54, 7);
    profile_row!(m, Magnesium, "#D3D3D3", "logam alkali tanah", 1.74, 6);
    profile_row!(m, Aluminium, "#A8A8A8", "logam", 2.70, 5);
    profile_row!(m, Iron, "#B5651D", "logam transisi", 7.87, 6);
    profile_row!(m, Copper, "#B87333", "logam transisi", 8.96, 4);

    // acids
    profile_row!(m, HydrochloricAcid, "#F0F8FF", "asam kuat", 1.18, 8);
    profile_row!(m, SulfuricAcid, "#F5F5F5", "asam kuat", 1.84, 9);
    profile_row!(m, NitricAcid, "#FFF0F5", "asam kuat", 1.51, 8);
    profile_row!(m, AceticAcid, "#F8F8FF", "asam lemah", 1.05, 5);

    // bases
    profile_row!(m, SodiumHydroxide, "#F5F5DC", "basa kuat", 2.13, 8);
    profile_row!(m, PotassiumHydroxide, "#FFFFF0", "basa kuat", 2.04, 8);
    profile_row!(m, AmmoniumHydroxide, "#F0FFFF", "basa lemah", 0.91, 6);

    // salts
    profile_row!(m, SodiumChloride, "#FFFFFF", "garam", 2.16, 1);
    profile_row!(m, PotassiumNitrate, "#F5F5F5", "garam", 2.11, 3);
    profile_row!(m, CalciumCarbonate, "#FAFAD2", "garam", 2.71, 2);

    // solvents
    profile_row!(m, Water, "#ADD8E6", "pelarut", 1.00, 1);
    profile_row!(m, Ethanol, "#F0FFF0", "pelarut", 0.79, 3);
    profile_row!(m, Acetone, "#FFFACD", "pelarut", 0.79, 4);

    // organics
    profile_row!(m, Glucose, "#FFFFFF", "organik", 1.54, 2);
    profile_row!(m, Sucrose, "#FFFFF0", "organik", 1.59, 1);
    profile_row!(m, Methane, "#E0FFFF", "hidrokarbon", 0.00066, 5);

    // oxidizers and special compounds
    profile_row!(m, PotassiumPermanganate, "#800080", "oksidator", 2.70, 7);
    profile_row!(m, PotassiumDichromate, "#FF4500", "oksidator", 2.68, 7);
    profile_row!(m, CopperSulfate, "#00BFFF", "garam", 3.60, 4);

    m
});

pub fn get_profile(kind: SubstanceId) -> Option<&'static SubstanceProfile> {
    SUBSTANCE_PROFILES.get(&kind)
}
