// [tests/mirror/libs/infra/telegram/reconnect_policy.test.rs]

use radar_infra_telegram::ReconnectPolicy;
use std::time::Duration;

#[test]
fn certify_exponential_progression_with_ceiling() {
    println!("\n⚖️  [PROVING_GROUNDS]: Auditing reconnect backoff progression...");

    let policy = ReconnectPolicy {
        max_retries: 5,
        initial_backoff: Duration::from_secs(1),
        backoff_ceiling: Duration::from_secs(8),
    };

    assert_eq!(policy.delay_for(1), Duration::from_secs(1));
    assert_eq!(policy.delay_for(2), Duration::from_secs(2));
    assert_eq!(policy.delay_for(3), Duration::from_secs(4));
    assert_eq!(policy.delay_for(4), Duration::from_secs(8));
    // Saturación en el techo, sin overflow.
    assert_eq!(policy.delay_for(5), Duration::from_secs(8));
    assert_eq!(policy.delay_for(60), Duration::from_secs(8));

    println!("   ✅ Backoff progression certified.");
}

#[test]
fn certify_default_policy_shape() {
    let policy = ReconnectPolicy::default();
    assert_eq!(policy.max_retries, 5);
    assert_eq!(policy.delay_for(1), Duration::from_secs(2));
    assert!(policy.delay_for(30) <= policy.backoff_ceiling);
}
