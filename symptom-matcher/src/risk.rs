use serde::{Deserialize, Serialize};

/// Display color attached to a risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskColor {
    Red,
    Yellow,
    LightBlue,
    Green,
}

impl RiskColor {
    /// Material palette hex code used by the mobile client
    pub fn hex(&self) -> &'static str {
        match self {
            RiskColor::Red => "#F44336",
            RiskColor::Yellow => "#FFEB3B",
            RiskColor::LightBlue => "#03A9F4",
            RiskColor::Green => "#4CAF50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Moderate,
    LowUncertain,
    Low,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk - Strong match, consult doctor",
            RiskLevel::Moderate => "Moderate Risk - Possible match, needs evaluation",
            RiskLevel::LowUncertain | RiskLevel::Low => "Low Risk - Uncertain, monitor symptoms",
        }
    }

    pub fn color(&self) -> RiskColor {
        match self {
            RiskLevel::High => RiskColor::Red,
            RiskLevel::Moderate => RiskColor::Yellow,
            RiskLevel::LowUncertain => RiskColor::LightBlue,
            RiskLevel::Low => RiskColor::Green,
        }
    }
}

/// Inclusive lower confidence bounds, highest first
pub const RISK_TABLE: [(f64, RiskLevel); 3] = [
    (80.0, RiskLevel::High),
    (60.0, RiskLevel::Moderate),
    (50.0, RiskLevel::LowUncertain),
];

/// Map a confidence percentage to its risk level
pub fn classify_risk(confidence: f64) -> RiskLevel {
    RISK_TABLE
        .iter()
        .find(|(lower_bound, _)| confidence >= *lower_bound)
        .map_or(RiskLevel::Low, |(_, level)| *level)
}
