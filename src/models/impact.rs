use serde::Serialize;

/// Display metrics for the landing page. Fixed values, not derived from
/// stored feedback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactStats {
    pub food_saved: &'static str,
    pub servings_donated: &'static str,
    pub quality_score: &'static str,
    pub wastage_reduced: &'static str,
}

pub const IMPACT_STATS: ImpactStats = ImpactStats {
    food_saved: "2,450 kg",
    servings_donated: "1,234",
    quality_score: "4.5/5",
    wastage_reduced: "30%",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(IMPACT_STATS).unwrap();
        assert_eq!(value["foodSaved"], "2,450 kg");
        assert_eq!(value["servingsDonated"], "1,234");
        assert_eq!(value["qualityScore"], "4.5/5");
        assert_eq!(value["wastageReduced"], "30%");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }
}
