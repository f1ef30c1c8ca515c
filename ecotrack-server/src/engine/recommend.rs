//! Recommendation generation
//!
//! A fixed, declarative rule table maps audit fields to recommendation
//! drafts. Each rule is evaluated independently against the audit, so
//! several can fire for a single audit. Drafts come out in table order;
//! callers that want urgency order sort by priority.

use ecotrack_common::db::models::Audit;
use ecotrack_common::db::recommendations::RecommendationDraft;

/// One row of the recommendation rule table
struct Rule {
    applies: fn(&Audit) -> bool,
    title: &'static str,
    description: &'static str,
    /// Fraction of the monthly bill saved
    savings_fraction: f64,
    /// Multiplier from monthly bill dollars to kWh saved
    kwh_multiplier: f64,
    /// Estimated cost to implement, dollars
    implementation_cost: i64,
    /// 1-5 priority level, lower is more urgent
    priority: i64,
}

fn needs_insulation(audit: &Audit) -> bool {
    audit.insulation_type.as_deref() == Some("poor")
}

fn needs_heating_upgrade(audit: &Audit) -> bool {
    matches!(
        audit.heating_system.as_deref(),
        Some("oil") | Some("electric_resistance")
    )
}

fn always(_audit: &Audit) -> bool {
    true
}

fn lacks_energy_star_appliances(audit: &Audit) -> bool {
    audit
        .appliance_data
        .as_ref()
        .map(|data| !data.energy_star_appliances)
        .unwrap_or(false)
}

const RULES: [Rule; 5] = [
    Rule {
        applies: needs_insulation,
        title: "Upgrade Insulation",
        description: "Install high-efficiency insulation to reduce heating and cooling costs.",
        savings_fraction: 0.15,
        kwh_multiplier: 10.0,
        implementation_cost: 1500,
        priority: 1,
    },
    Rule {
        applies: needs_heating_upgrade,
        title: "Upgrade Heating System",
        description: "Install a high-efficiency heat pump system to reduce heating costs.",
        savings_fraction: 0.25,
        kwh_multiplier: 15.0,
        implementation_cost: 3000,
        priority: 2,
    },
    Rule {
        applies: always,
        title: "Switch to LED Lighting",
        description: "Replace all incandescent and CFL bulbs with LED lighting.",
        savings_fraction: 0.08,
        kwh_multiplier: 5.0,
        implementation_cost: 200,
        priority: 3,
    },
    Rule {
        applies: always,
        title: "Install Smart Thermostat",
        description: "Install a programmable smart thermostat to optimize heating and cooling.",
        savings_fraction: 0.12,
        kwh_multiplier: 8.0,
        implementation_cost: 250,
        priority: 2,
    },
    Rule {
        applies: lacks_energy_star_appliances,
        title: "Upgrade to ENERGY STAR Appliances",
        description: "Replace older appliances with ENERGY STAR certified models.",
        savings_fraction: 0.10,
        kwh_multiplier: 7.0,
        implementation_cost: 1200,
        priority: 4,
    },
];

/// Generate recommendation drafts for an audit
///
/// Savings figures derive from the monthly energy bill (treated as zero when
/// absent). A zero savings projection leaves the payback period unset rather
/// than dividing by zero.
pub fn generate_recommendations(audit: &Audit) -> Vec<RecommendationDraft> {
    let bill = audit.current_energy_bill.unwrap_or(0);

    RULES
        .iter()
        .filter(|rule| (rule.applies)(audit))
        .map(|rule| {
            let potential_savings_dollars = (bill as f64 * rule.savings_fraction).round() as i64;
            let potential_savings_kwh = (bill as f64 * rule.kwh_multiplier).round() as i64;
            let payback_period = if potential_savings_dollars > 0 {
                Some(
                    (rule.implementation_cost as f64 / potential_savings_dollars as f64).round()
                        as i64,
                )
            } else {
                None
            };

            RecommendationDraft {
                title: rule.title.to_string(),
                description: rule.description.to_string(),
                potential_savings_dollars,
                potential_savings_kwh,
                implementation_cost: rule.implementation_cost,
                payback_period,
                priority: rule.priority,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ecotrack_common::db::models::ApplianceData;
    use sqlx::types::Json;

    fn audit(
        insulation: Option<&str>,
        heating: Option<&str>,
        bill: Option<i64>,
        appliances: Option<ApplianceData>,
    ) -> Audit {
        let now = Utc::now();
        Audit {
            id: 1,
            user_id: "user-1".to_string(),
            housing_type: "single_family".to_string(),
            house_size: 2400,
            insulation_type: insulation.map(String::from),
            heating_system: heating.map(String::from),
            cooling_system: None,
            appliance_data: appliances.map(Json),
            current_energy_bill: bill,
            energy_score: 35,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_all_rules_fire_for_worst_case_audit() {
        let audit = audit(
            Some("poor"),
            Some("oil"),
            Some(200),
            Some(ApplianceData {
                energy_star_appliances: false,
                ..Default::default()
            }),
        );

        let drafts = generate_recommendations(&audit);
        assert_eq!(drafts.len(), 5);

        let titles: Vec<&str> = drafts.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Upgrade Insulation",
                "Upgrade Heating System",
                "Switch to LED Lighting",
                "Install Smart Thermostat",
                "Upgrade to ENERGY STAR Appliances",
            ]
        );

        let dollars: Vec<i64> = drafts.iter().map(|d| d.potential_savings_dollars).collect();
        assert_eq!(dollars, [30, 50, 16, 24, 20]);

        let kwh: Vec<i64> = drafts.iter().map(|d| d.potential_savings_kwh).collect();
        assert_eq!(kwh, [2000, 3000, 1000, 1600, 1400]);
    }

    #[test]
    fn test_baseline_audit_gets_universal_rules_only() {
        let audit = audit(Some("standard"), Some("heat_pump"), Some(100), None);

        let drafts = generate_recommendations(&audit);
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "Switch to LED Lighting");
        assert_eq!(drafts[1].title, "Install Smart Thermostat");
    }

    #[test]
    fn test_electric_resistance_heating_fires_rule() {
        let audit = audit(None, Some("electric_resistance"), Some(100), None);

        let drafts = generate_recommendations(&audit);
        assert!(drafts.iter().any(|d| d.title == "Upgrade Heating System"));
    }

    #[test]
    fn test_energy_star_appliances_suppress_appliance_rule() {
        let audit = audit(
            None,
            None,
            Some(100),
            Some(ApplianceData {
                energy_star_appliances: true,
                ..Default::default()
            }),
        );

        let drafts = generate_recommendations(&audit);
        assert!(!drafts
            .iter()
            .any(|d| d.title == "Upgrade to ENERGY STAR Appliances"));
    }

    #[test]
    fn test_absent_appliance_data_suppresses_appliance_rule() {
        let audit = audit(None, None, Some(100), None);

        let drafts = generate_recommendations(&audit);
        assert!(!drafts
            .iter()
            .any(|d| d.title == "Upgrade to ENERGY STAR Appliances"));
    }

    #[test]
    fn test_zero_bill_leaves_payback_unset() {
        let audit = audit(Some("poor"), Some("oil"), Some(0), None);

        let drafts = generate_recommendations(&audit);
        assert!(!drafts.is_empty());
        for draft in &drafts {
            assert_eq!(draft.potential_savings_dollars, 0);
            assert_eq!(draft.potential_savings_kwh, 0);
            assert_eq!(draft.payback_period, None);
        }
    }

    #[test]
    fn test_absent_bill_treated_as_zero() {
        let audit = audit(None, None, None, None);

        let drafts = generate_recommendations(&audit);
        for draft in &drafts {
            assert_eq!(draft.potential_savings_dollars, 0);
            assert_eq!(draft.payback_period, None);
        }
    }

    #[test]
    fn test_payback_period_rounds_to_months() {
        let audit = audit(None, None, Some(200), None);

        let drafts = generate_recommendations(&audit);
        // LED: 200 cost / 16 dollars = 12.5 -> 13 months
        let led = drafts.iter().find(|d| d.title == "Switch to LED Lighting").unwrap();
        assert_eq!(led.payback_period, Some(13));
        // Thermostat: 250 cost / 24 dollars = 10.4 -> 10 months
        let thermostat = drafts
            .iter()
            .find(|d| d.title == "Install Smart Thermostat")
            .unwrap();
        assert_eq!(thermostat.payback_period, Some(10));
    }
}
