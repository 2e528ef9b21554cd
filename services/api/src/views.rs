use fleet_compliance::violations::{Basic, Confidence, ResolutionTier, ResolvedCode};
use serde::Serialize;

/// Flattened view of a code resolution for API and CLI consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ResolutionView {
    pub(crate) code: String,
    pub(crate) normalized_code: String,
    pub(crate) tier: ResolutionTier,
    pub(crate) tier_label: &'static str,
    pub(crate) confidence: Confidence,
    pub(crate) unknown: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) matched_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sub_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    pub(crate) basic: Basic,
    pub(crate) basic_label: &'static str,
    pub(crate) severity: u8,
    pub(crate) cfr_reference: Option<String>,
    pub(crate) oos_eligible: bool,
    pub(crate) is_moving: bool,
}

impl ResolutionView {
    pub(crate) fn new(code: &str, resolved: &ResolvedCode<'_>) -> Self {
        let resolution = &resolved.resolution;
        let entry = resolution.entry();
        let basic = resolution.basic();

        Self {
            code: code.to_string(),
            normalized_code: resolved.normalized.clone(),
            tier: resolution.tier(),
            tier_label: resolution.tier().label(),
            confidence: resolution.confidence(),
            unknown: resolution.is_unknown(),
            matched_code: entry.map(|entry| entry.code.clone()),
            sub_code: resolution.sub_code().map(str::to_string),
            description: entry.map(|entry| entry.description.clone()),
            basic,
            basic_label: basic.label(),
            severity: resolution.severity(),
            cfr_reference: resolution.cfr_reference(),
            oos_eligible: resolution.oos_eligible(),
            is_moving: resolution.is_moving(),
        }
    }
}
