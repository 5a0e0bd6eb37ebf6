//! Invariantes de la fórmula de payout verificados con proptest.

use param_core::{compute_payout, OptionType, TickSpec};
use proptest::prelude::*;

fn option_type() -> impl Strategy<Value = OptionType> {
    prop_oneof![Just(OptionType::Call), Just(OptionType::Put)]
}

proptest! {
    #[test]
    fn payout_is_within_zero_and_limit(index in -1.0e4f64..1.0e4,
                                       strike in -1.0e3f64..1.0e3,
                                       tick in 0.0f64..100.0,
                                       limit in 0.0f64..1.0e6,
                                       opt in option_type()) {
        let p = compute_payout(index, strike, TickSpec::Tick(tick), limit, opt).unwrap();
        prop_assert!(p >= 0.0);
        prop_assert!(p <= limit);
    }

    #[test]
    fn payout_is_monotonic_in_index(a in -1.0e4f64..1.0e4,
                                    b in -1.0e4f64..1.0e4,
                                    strike in -1.0e3f64..1.0e3,
                                    tick in 0.0f64..100.0,
                                    limit in 0.0f64..1.0e6) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let call_lo = compute_payout(lo, strike, TickSpec::Tick(tick), limit, OptionType::Call).unwrap();
        let call_hi = compute_payout(hi, strike, TickSpec::Tick(tick), limit, OptionType::Call).unwrap();
        prop_assert!(call_lo <= call_hi);
        let put_lo = compute_payout(lo, strike, TickSpec::Tick(tick), limit, OptionType::Put).unwrap();
        let put_hi = compute_payout(hi, strike, TickSpec::Tick(tick), limit, OptionType::Put).unwrap();
        prop_assert!(put_lo >= put_hi);
    }

    #[test]
    fn exhaust_matches_precomputed_tick(index in -1.0e4f64..1.0e4,
                                        strike in -1.0e3f64..1.0e3,
                                        offset in 1.0f64..500.0,
                                        limit in 0.0f64..1.0e6,
                                        opt in option_type()) {
        let exhaust = strike + offset;
        let tick = (limit / (strike - exhaust)).abs();
        let via_exhaust = compute_payout(index, strike, TickSpec::Exhaust(exhaust), limit, opt).unwrap();
        let via_tick = compute_payout(index, strike, TickSpec::Tick(tick), limit, opt).unwrap();
        prop_assert_eq!(via_exhaust, via_tick);
    }
}

#[test]
fn documented_examples() {
    let call: OptionType = "CALL".parse().unwrap();
    assert_eq!(compute_payout(120.0, 100.0, TickSpec::Tick(2.0), 50.0, call).unwrap(), 40.0);
    assert_eq!(compute_payout(80.0, 100.0, TickSpec::Tick(2.0), 50.0, call).unwrap(), 0.0);
}
