//! Presentation mapping for domain enums.
//!
//! The core exposes only domain tags; everything a renderer needs (labels,
//! accent colors, symbols, clamping) lives here so no display concern
//! leaks into the library.

use lunaria_core::model::{FlowIntensity, SymptomKind};
use lunaria_core::status::CycleStatus;

pub fn status_label(status: CycleStatus) -> &'static str {
    match status {
        CycleStatus::Period => "period",
        CycleStatus::Ovulation => "ovulation",
        CycleStatus::Normal => "normal",
    }
}

/// Accent color for calendar rendering.
pub fn status_color(status: CycleStatus) -> &'static str {
    match status {
        CycleStatus::Period => "#ef4444",
        CycleStatus::Ovulation => "#3b82f6",
        CycleStatus::Normal => "#9ca3af",
    }
}

pub fn flow_label(flow: FlowIntensity) -> &'static str {
    match flow {
        FlowIntensity::Light => "light",
        FlowIntensity::Medium => "medium",
        FlowIntensity::Heavy => "heavy",
    }
}

pub fn symptom_label(kind: SymptomKind) -> &'static str {
    match kind {
        SymptomKind::Cramps => "cramps",
        SymptomKind::Headache => "headache",
        SymptomKind::MoodSwings => "mood swings",
        SymptomKind::Bloating => "bloating",
        SymptomKind::Fatigue => "fatigue",
        SymptomKind::Acne => "acne",
        SymptomKind::BreastTenderness => "breast tenderness",
    }
}

/// Clamp a progress fraction to [0, 1] for bar rendering. The predictor
/// deliberately returns unclamped values.
pub fn clamp_fraction(fraction: f64) -> f64 {
    fraction.clamp(0.0, 1.0)
}
