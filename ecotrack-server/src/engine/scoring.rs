//! Energy score calculation
//!
//! Pure function: audit inputs to an integer score in [0, 100]. Adjustments
//! are additive from a base of 50; unknown or absent enum values contribute
//! nothing. The size buckets are exclusive and evaluated in order.

/// Base score before any adjustment
const BASE_SCORE: i64 = 50;

/// Compute the energy efficiency score for an audit
///
/// # Algorithm
/// 1. Start at 50.
/// 2. Housing type: apartment +10, townhouse +5, single_family -5, else 0.
/// 3. Size: under 1000 sq ft +15; under 2000 +5; over 3000 -10; else 0.
/// 4. Insulation: high_efficiency +10, standard 0, poor -10, else 0.
/// 5. Clamp to [0, 100].
pub fn compute_energy_score(
    housing_type: &str,
    house_size: i64,
    insulation_type: Option<&str>,
) -> i64 {
    let mut score = BASE_SCORE;

    // Adjust score based on housing type
    score += match housing_type {
        "apartment" => 10,
        "townhouse" => 5,
        "single_family" => -5,
        _ => 0,
    };

    // Adjust for house size (smaller is better); first matching bucket wins
    score += if house_size < 1000 {
        15
    } else if house_size < 2000 {
        5
    } else if house_size > 3000 {
        -10
    } else {
        0
    };

    // Adjust for insulation
    score += match insulation_type {
        Some("high_efficiency") => 10,
        Some("poor") => -10,
        _ => 0,
    };

    score.clamp(0, 100)
}
