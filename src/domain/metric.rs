// KPI metric domain models
use crate::domain::error::DashboardError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    Integer,
    Percentage,
}

/// A displayed integer plus how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricValue {
    pub magnitude: u64,
    pub format: DisplayFormat,
}

impl MetricValue {
    pub fn new(magnitude: u64, format: DisplayFormat) -> Self {
        Self { magnitude, format }
    }

    /// Integers are grouped with `,` ("1,247"); percentages are not ("69%").
    pub fn render(&self) -> String {
        match self.format {
            DisplayFormat::Integer => group_thousands(self.magnitude),
            DisplayFormat::Percentage => format!("{}%", self.magnitude),
        }
    }
}

#[cfg(test)]
impl MetricValue {
    pub fn integer(magnitude: u64) -> Self {
        Self::new(magnitude, DisplayFormat::Integer)
    }

    pub fn percentage(magnitude: u64) -> Self {
        Self::new(magnitude, DisplayFormat::Percentage)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Extract the magnitude from displayed text by dropping every non-digit.
/// Returns `None` when no digits are left.
pub fn parse_displayed(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The four dashboard KPIs, keyed by their display element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KpiId {
    #[serde(rename = "totalPatents")]
    TotalPatents,
    #[serde(rename = "pendingApplications")]
    PendingApplications,
    #[serde(rename = "grantedPatents")]
    GrantedPatents,
    #[serde(rename = "successRate")]
    SuccessRate,
}

impl KpiId {
    pub const ALL: [KpiId; 4] = [
        KpiId::TotalPatents,
        KpiId::PendingApplications,
        KpiId::GrantedPatents,
        KpiId::SuccessRate,
    ];

    /// KPIs touched by background updates and manual refresh.
    pub const PRIMARY: [KpiId; 3] = [
        KpiId::TotalPatents,
        KpiId::PendingApplications,
        KpiId::GrantedPatents,
    ];

    pub fn element_key(&self) -> &'static str {
        match self {
            KpiId::TotalPatents => "totalPatents",
            KpiId::PendingApplications => "pendingApplications",
            KpiId::GrantedPatents => "grantedPatents",
            KpiId::SuccessRate => "successRate",
        }
    }

    pub fn format(&self) -> DisplayFormat {
        match self {
            KpiId::SuccessRate => DisplayFormat::Percentage,
            _ => DisplayFormat::Integer,
        }
    }

    /// Lowercase words split at the camel-case humps: "total patents".
    pub fn label(&self) -> String {
        let mut out = String::new();
        for ch in self.element_key().chars() {
            if ch.is_ascii_uppercase() {
                out.push(' ');
            }
            out.push(ch.to_ascii_lowercase());
        }
        out
    }

    pub fn title(&self) -> &'static str {
        match self {
            KpiId::TotalPatents => "Total Patents",
            KpiId::PendingApplications => "Pending Applications",
            KpiId::GrantedPatents => "Granted Patents",
            KpiId::SuccessRate => "Success Rate",
        }
    }
}

impl FromStr for KpiId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KpiId::ALL
            .into_iter()
            .find(|kpi| kpi.element_key() == s)
            .ok_or_else(|| DashboardError::UnknownKpi(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_displayed_strips_non_digits() {
        assert_eq!(parse_displayed("1,247"), Some(1247));
        assert_eq!(parse_displayed("69%"), Some(69));
        assert_eq!(parse_displayed(" 89 "), Some(89));
        assert_eq!(parse_displayed("n/a"), None);
        assert_eq!(parse_displayed(""), None);
    }

    #[test]
    fn test_render() {
        assert_eq!(MetricValue::integer(1247).render(), "1,247");
        assert_eq!(MetricValue::integer(247).render(), "247");
        assert_eq!(MetricValue::integer(0).render(), "0");
        assert_eq!(MetricValue::integer(1_000_000).render(), "1,000,000");
        assert_eq!(MetricValue::percentage(69).render(), "69%");
        assert_eq!(MetricValue::percentage(1200).render(), "1200%");
    }

    #[test]
    fn test_kpi_labels() {
        assert_eq!(KpiId::TotalPatents.label(), "total patents");
        assert_eq!(KpiId::PendingApplications.label(), "pending applications");
        assert_eq!(KpiId::SuccessRate.label(), "success rate");
    }

    #[test]
    fn test_kpi_from_str() {
        assert_eq!("grantedPatents".parse::<KpiId>().unwrap(), KpiId::GrantedPatents);
        assert!(matches!(
            "granted".parse::<KpiId>(),
            Err(DashboardError::UnknownKpi(token)) if token == "granted"
        ));
    }
}
