// Direct checks on the net-worth color scale: bucket ordering over a
// rising sequence, full ramp coverage, and index clamping.

use worthviz_core::{WorthRange, NET_WORTH_COLORS, worth_bucket, worth_color};

#[test]
fn buckets_never_decrease_as_net_worth_grows() {
    let range = WorthRange {
        min: 3_200.0,
        max: 219_000_000_000.0,
    };
    let span = range.max - range.min;
    let mut previous = 0;
    for step in 0..=1_000 {
        let worth = range.min + span * step as f64 / 1_000.0;
        let bucket = worth_bucket(worth, range);
        assert!(
            bucket >= previous,
            "bucket fell from {previous} to {bucket} at net worth {worth}"
        );
        previous = bucket;
    }
    assert_eq!(
        previous,
        NET_WORTH_COLORS.len() - 1,
        "the sweep should end on the last bucket"
    );
}

#[test]
fn a_linear_spread_hits_every_bucket_in_order() {
    let last = NET_WORTH_COLORS.len() - 1;
    let range = WorthRange {
        min: 0.0,
        max: last as f64 * 1_000_000.0,
    };
    let buckets: Vec<usize> = (0..=last)
        .map(|i| worth_bucket(i as f64 * 1_000_000.0, range))
        .collect();
    let expected: Vec<usize> = (0..=last).collect();
    assert_eq!(buckets, expected);
}

#[test]
fn out_of_range_inputs_stay_on_the_ramp() {
    let range = WorthRange {
        min: 100.0,
        max: 200.0,
    };
    assert_eq!(worth_bucket(-5.0, range), 0);
    assert_eq!(worth_bucket(1e12, range), NET_WORTH_COLORS.len() - 1);

    let flat = WorthRange { min: 7.0, max: 7.0 };
    assert_eq!(worth_bucket(7.0, flat), 0);

    assert_eq!(
        worth_color(NET_WORTH_COLORS.len() + 7),
        worth_color(NET_WORTH_COLORS.len() - 1)
    );
}
