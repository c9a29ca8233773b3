// [tests/mirror/libs/domain/trending/velocity_scoring.test.rs]

use radar_domain_trending::engine::{trending_score, velocity_between_windows};

#[test]
fn certify_velocity_equals_current_when_prior_window_empty() {
    println!("\n⚖️  [PROVING_GROUNDS]: Auditing velocity algebra...");

    assert_eq!(velocity_between_windows(4, 0), 4.0);
    assert_eq!(velocity_between_windows(1, 0), 1.0);
    assert_eq!(velocity_between_windows(0, 0), 0.0);

    println!("   ✅ Empty prior window certified.");
}

#[test]
fn certify_velocity_is_zero_on_flat_growth() {
    assert_eq!(velocity_between_windows(5, 5), 0.0);
    assert_eq!(velocity_between_windows(1, 1), 0.0);
}

#[test]
fn certify_negative_velocity_permitted() {
    // La desaceleración es válida y deprime el score.
    assert_eq!(velocity_between_windows(2, 4), -0.5);
    assert_eq!(velocity_between_windows(0, 4), -1.0);
}

#[test]
fn certify_relative_growth_ratio() {
    assert_eq!(velocity_between_windows(6, 2), 2.0);
    assert_eq!(velocity_between_windows(3, 2), 0.5);
}

#[test]
fn certify_score_formula_is_2m_3u_5v() {
    // Escenario canónico A: 3 menciones, 2 conversaciones, velocidad 3.0.
    assert_eq!(trending_score(3, 2, 3.0), 27.0);
    // Escenario canónico E: 4 menciones, 2 conversaciones, velocidad 4.0.
    assert_eq!(trending_score(4, 2, 4.0), 34.0);
    // La velocidad negativa resta.
    assert_eq!(trending_score(4, 2, -1.0), 9.0);
}
