use std::cmp::Ordering;
use ww_semver::Version;

fn p(input: &str) -> Version<'_> {
    Version::parse(input).unwrap()
}

macro_rules! assert_cmp {
    ($a:literal, $b:literal, $expected:literal) => {
        assert_eq!(p($a).cmp(&p($b)) as i8, $expected, "{} vs {}", $a, $b);
    };
}

#[test]
fn numeric_components() {
    assert_cmp!("0.0.0", "0.0.0", 0);
    assert_cmp!("0.0.0", "0.0.1", -1);
    assert_cmp!("0.0.3", "0.0.2", 1);

    assert_cmp!("0.4.0", "0.4.0", 0);
    assert_cmp!("0.4.0", "0.5.0", -1);
    assert_cmp!("0.7.0", "0.6.0", 1);

    assert_cmp!("7.0.0", "7.0.0", 0);
    assert_cmp!("7.0.0", "8.0.0", -1);
    assert_cmp!("9.0.0", "8.0.0", 1);

    assert_cmp!("1.0.0", "1.0.4", -1);
    assert_cmp!("1.0.0", "1.7.0", -1);
    assert_cmp!("1.0.0", "1.2.9", -1);
    assert_cmp!("4294967295.0.0", "0.0.0", 1);
}

#[test]
fn tagged_sorts_before_release() {
    assert_cmp!("1.0.0", "1.0.0-beta-1", 1);
    assert_cmp!("1.0.1", "1.0.1-beta-1", 1);
    assert_cmp!("1.1.1", "1.1.1-beta-1", 1);
    assert_cmp!("1.1.1-beta-1", "1.1.1", -1);
}

#[test]
fn tags_break_ties() {
    assert_cmp!("1.0.0-beta-2", "1.0.0-beta-1", 1);
    assert_cmp!("1.0.1-beta-3", "1.0.1-beta-4", -1);
    assert_cmp!("1.1.1-beta-1", "1.1.1-beta-1", 0);
    assert_cmp!("1.0.0-", "1.0.0", 0);
}

#[test]
fn total_order() {
    let inputs = [
        "0.0.0",
        "0.0.1-a",
        "0.0.1",
        "0.1",
        "1",
        "1.0.0-alpha",
        "1.0.0-beta-1",
        "1.0.0-beta-2",
        "1.0.0-Beta",
        "v1.0.0",
        "1.0.1-beta-3",
        "1.0.1-beta-4",
        "2.0.0-rc",
    ];
    let versions: Vec<Version> = inputs.iter().map(|input| p(input)).collect();
    for a in &versions {
        for b in &versions {
            assert_eq!(a.cmp(b), b.cmp(a).reverse(), "{a} vs {b}");
            assert_eq!(a.cmp(b) == Ordering::Equal, a == b, "{a} vs {b}");
            for c in &versions {
                if a <= b && b <= c {
                    assert!(a <= c, "{a} <= {b} <= {c}");
                }
            }
        }
    }

    let mut sorted = versions.clone();
    sorted.sort();
    let sorted: Vec<String> = sorted.iter().map(|v| v.to_string()).collect();
    assert_eq!(
        sorted,
        [
            "0.0.0",
            "0.0.1-a",
            "0.0.1",
            "0.1.0",
            "1.0.0-Beta",
            "1.0.0-alpha",
            "1.0.0-beta-1",
            "1.0.0-beta-2",
            "1.0.0",
            "1.0.0",
            "1.0.1-beta-3",
            "1.0.1-beta-4",
            "2.0.0-rc",
        ]
    );
}
