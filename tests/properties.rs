//! End-to-end checks of the public API against the documented properties.

use gauss_gradient::gaussian::PEAK_WEIGHT;
use gauss_gradient::{
    build_color_gradient, build_mask_gradient, decode_color, mix, normalize, sample_weights,
    scaled_weights, GaussGradient, GradientConfig, GradientError, GradientShape,
};

const COLORS: [&str; 6] = ["#000000", "#ffffff", "#a05151", "#14151A", "#7F00fe", "#010203"];

#[test]
fn mix_with_itself_is_identity() {
    for c in COLORS {
        let expected = c.to_ascii_lowercase();
        for w in [-250.0, -1.0, 0.0, 12.5, 50.0, 99.9, 100.0, 400.0] {
            assert_eq!(mix(c, c, w).unwrap(), expected, "color {} weight {}", c, w);
        }
    }
}

#[test]
fn mix_endpoints_reconstruct_inputs() {
    for a in COLORS {
        for b in COLORS {
            assert_eq!(decode_color(&mix(a, b, 100.0).unwrap()), decode_color(a));
            assert_eq!(decode_color(&mix(a, b, 0.0).unwrap()), decode_color(b));
        }
    }
}

#[test]
fn mix_black_white_midpoint() {
    assert_eq!(mix("#000000", "#ffffff", 50.0).unwrap(), "#7f7f7f");
}

#[test]
fn mix_rejects_malformed_color() {
    assert_eq!(
        mix("notacolor", "#ffffff", 50.0),
        Err(GradientError::InvalidColor("notacolor".to_string()))
    );
}

#[test]
fn sample_length_matches_stop_count() {
    for n in 1..=200 {
        assert_eq!(sample_weights(n, 0.3, 0.25).unwrap().len(), n);
    }
}

#[test]
fn zero_stops_is_rejected() {
    assert!(matches!(
        sample_weights(0, 0.0, 1.0),
        Err(GradientError::InvalidParameter { .. })
    ));
}

#[test]
fn scaled_peak_is_100() {
    for (n, mean, sd) in [(50, 0.0, 0.2), (7, 0.5, 0.05), (120, -1.5, 0.9), (33, 3.0, 1.2)] {
        let w = sample_weights(n, mean, sd).unwrap();
        let scale = normalize(&w).unwrap();
        let peak = w.iter().copied().fold(f64::MIN, f64::max);
        assert!((peak * scale - PEAK_WEIGHT).abs() < 1e-9);
    }
}

#[test]
fn descriptor_framing() {
    for shape in GradientShape::ALL {
        let g = build_color_gradient("#a05151", "#14151A", 50, 0.0, 0.2, shape).unwrap();
        let prefix = format!("{}(", shape);
        assert!(g.descriptor.starts_with(&prefix));
        assert!(g.descriptor.ends_with(')'));
        let first = g.descriptor[prefix.len()..].split(", ").next().unwrap();
        assert!(first.ends_with(" 0%"), "{}", first);
    }
}

#[test]
fn three_stop_percentages() {
    let g = build_color_gradient("#a05151", "#14151A", 3, 0.0, 1.0, GradientShape::Radial).unwrap();
    let body = g
        .descriptor
        .strip_prefix("radial-gradient(")
        .and_then(|s| s.strip_suffix(')'))
        .unwrap();
    let percents: Vec<&str> = body
        .split(", ")
        .map(|stop| stop.split(' ').nth(1).unwrap())
        .collect();
    assert_eq!(percents, vec!["0%", "33.33%", "66.67%"]);
}

#[test]
fn percentages_strictly_increase() {
    let g = build_color_gradient("#a05151", "#14151A", 200, 0.5, 0.1, GradientShape::Linear).unwrap();
    assert!(g.stops.windows(2).all(|p| p[1].percent > p[0].percent));
    assert!(g.stops.iter().all(|s| (0.0..=100.0).contains(&s.percent)));
}

#[test]
fn mask_tokens_are_white_with_alpha() {
    let g = build_mask_gradient(20, 0.0, 0.2, GradientShape::Radial).unwrap();
    let body = g
        .descriptor
        .strip_prefix("radial-gradient(")
        .and_then(|s| s.strip_suffix(')'))
        .unwrap();
    for stop in body.split(", ") {
        let token = stop.split(' ').next().unwrap();
        assert_eq!(token.len(), 9, "{}", token);
        assert!(token.starts_with("#ffffff"));
        assert!(token[7..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}

#[test]
fn off_domain_mean_stays_valid() {
    // Peak sits before the first stop, so the curve only falls off.
    let g = build_color_gradient("#ffffff", "#000000", 10, -0.5, 0.4, GradientShape::Radial).unwrap();
    assert_eq!(g.stops[0].value, "#ffffff");
    assert!(g.stops.iter().all(|s| s.value.len() == 7));
}

#[test]
fn reversed_config_swaps_ends() {
    let config = GradientConfig {
        start_color: "#ffffff".to_string(),
        end_color: "#000000".to_string(),
        stop_count: 5,
        ..GradientConfig::default()
    };
    let forward = config.build_color_gradient().unwrap();
    let backward = config.reversed().build_color_gradient().unwrap();
    assert_eq!(forward.stops[0].value, "#ffffff");
    assert_eq!(backward.stops[0].value, "#000000");
    assert_eq!(forward.weights, backward.weights);
}

fn is_color_token(v: &str) -> bool {
    v.len() == 7
        && v.starts_with('#')
        && v[1..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

fn is_mask_token(v: &str) -> bool {
    v.len() == 9
        && v.starts_with("#ffffff")
        && v[7..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

fn check_build(result: Result<GaussGradient, GradientError>, token_ok: fn(&str) -> bool, case: &str) {
    match result {
        Ok(g) => {
            for stop in &g.stops {
                assert!(token_ok(&stop.value), "{}: bad token {:?}", case, stop.value);
            }
        }
        Err(GradientError::InvalidParameter { name: "weights", .. }) => {}
        Err(e) => panic!("{}: unexpected error {}", case, e),
    }
}

#[test]
fn slider_range_sweep_emits_well_formed_tokens() {
    // Dark start / light end is the direction where an overshooting peak
    // weight would floor below the start channel.
    let pairs = [("#000000", "#ffffff"), ("#ffffff", "#000000"), ("#14151A", "#a05151")];
    for n in [1, 2, 3, 5, 7, 10, 20, 33, 50, 100, 150, 200] {
        for mi in 0..=48 {
            let mean = -2.0 + mi as f64 * 0.25;
            for si in 1..=20 {
                let sd = si as f64 * 0.05;
                let case = format!("n={} mean={} sd={}", n, mean, sd);
                for (start, end) in pairs {
                    check_build(
                        build_color_gradient(start, end, n, mean, sd, GradientShape::Radial),
                        is_color_token,
                        &case,
                    );
                }
                check_build(
                    build_mask_gradient(n, mean, sd, GradientShape::Radial),
                    is_mask_token,
                    &case,
                );
            }
        }
    }
}

#[test]
fn dark_start_peak_reproduces_start_color() {
    let g = build_color_gradient("#000000", "#ffffff", 20, -2.0, 0.8, GradientShape::Radial).unwrap();
    assert_eq!(g.stops[0].value, "#000000");
    assert!(g.stops.iter().all(|s| is_color_token(&s.value)));
    let scaled = scaled_weights(&g.weights).unwrap();
    assert_eq!(scaled[0], PEAK_WEIGHT);
}

#[test]
fn subnormal_peak_fails_on_both_builders() {
    for result in [
        build_mask_gradient(1, 7.6, 0.2, GradientShape::Radial),
        build_color_gradient("#000000", "#ffffff", 1, 7.6, 0.2, GradientShape::Radial),
    ] {
        assert!(matches!(
            result,
            Err(GradientError::InvalidParameter { name: "weights", .. })
        ));
    }
}
