use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use secrecy::SecretString;
use widget_kernel::{Point, StrengthLevel, ZoomPan, evaluate, generate_with_rng, visible_pages};

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

// Strategy for generating password-like text with various edge cases
fn password_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Empty
        Just(String::new()),
        // Short alphanumeric
        "[a-zA-Z0-9]{0,8}",
        // Full printable ASCII
        "[ -~]{0,40}",
        // Blocklist-adjacent content
        "(123|abc|qwe|password|admin|Password|ADMIN)[a-zA-Z0-9!@#]{0,20}",
        // Repeated runs
        "(a{3,6}|Z{3,6}|9{3,6})[a-zA-Z0-9!]{0,10}",
        // Unicode
        "[\u{00A0}-\u{00FF}\u{4E00}-\u{9FFF}]{0,20}",
    ]
}

// Strategy for generating zoom/pan operations
#[derive(Debug, Clone)]
enum ZoomOp {
    Wheel(f32),
    In,
    Out,
    Reset,
    PanStart(f32, f32),
    PanMove(f32, f32),
    PanEnd,
}

fn zoom_op_strategy() -> impl Strategy<Value = ZoomOp> {
    prop_oneof![
        (-100.0f32..100.0).prop_map(ZoomOp::Wheel),
        Just(ZoomOp::In),
        Just(ZoomOp::Out),
        Just(ZoomOp::Reset),
        (-500.0f32..500.0, -500.0f32..500.0).prop_map(|(x, y)| ZoomOp::PanStart(x, y)),
        (-500.0f32..500.0, -500.0f32..500.0).prop_map(|(x, y)| ZoomOp::PanMove(x, y)),
        Just(ZoomOp::PanEnd),
    ]
}

proptest! {
    #[test]
    fn evaluate_percentage_stays_in_bounds(password in password_strategy()) {
        let report = evaluate(&secret(&password));

        prop_assert!(report.percentage <= 100);
        prop_assert!(report.score <= 7);
        prop_assert!(!report.feedback.is_empty());
    }

    #[test]
    fn evaluate_level_is_monotonic_in_percentage(
        a in password_strategy(),
        b in password_strategy(),
    ) {
        let ra = evaluate(&secret(&a));
        let rb = evaluate(&secret(&b));

        if ra.percentage < rb.percentage {
            prop_assert!(ra.level <= rb.level);
        }
    }

    #[test]
    fn visible_pages_invariants(
        current in 0usize..200,
        total in 1usize..100,
        window in 1usize..20,
    ) {
        let pages = visible_pages(current, total, window);

        // expected length
        prop_assert_eq!(pages.len(), window.min(total));

        // contiguous and within [1, total]
        prop_assert!(pages.first().is_some_and(|&p| p >= 1));
        prop_assert!(pages.last().is_some_and(|&p| p <= total));
        for pair in pages.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1);
        }

        // the (clamped) current page is visible when the window fits
        if total >= window {
            let clamped = current.clamp(1, total);
            prop_assert!(pages.contains(&clamped));
        }
    }

    #[test]
    fn zoom_scale_never_escapes_bounds(ops in prop::collection::vec(zoom_op_strategy(), 0..60)) {
        let mut zoom = ZoomPan::new();

        for op in ops {
            match op {
                ZoomOp::Wheel(d) => zoom.on_wheel(d),
                ZoomOp::In => zoom.zoom_in(),
                ZoomOp::Out => zoom.zoom_out(),
                ZoomOp::Reset => zoom.reset(),
                ZoomOp::PanStart(x, y) => zoom.on_pan_start(Point::new(x, y)),
                ZoomOp::PanMove(x, y) => zoom.on_pan_move(Point::new(x, y)),
                ZoomOp::PanEnd => zoom.on_pan_end(),
            }

            prop_assert!(zoom.scale() >= widget_kernel::zoom::MIN_SCALE);
            prop_assert!(zoom.scale() <= widget_kernel::zoom::MAX_SCALE);
        }
    }

    #[test]
    fn pan_without_zoom_never_moves_the_image(
        moves in prop::collection::vec((-500.0f32..500.0, -500.0f32..500.0), 1..20),
    ) {
        let mut zoom = ZoomPan::new();

        zoom.on_pan_start(Point::new(0.0, 0.0));
        for (x, y) in moves {
            zoom.on_pan_move(Point::new(x, y));
        }
        zoom.on_pan_end();

        prop_assert_eq!(zoom.offset(), Point::ORIGIN);
    }
}

#[test]
fn generated_passwords_evaluate_strong_across_seeds() {
    for seed in 0..100u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let password = generate_with_rng(&mut rng);
        let report = evaluate(&password);
        assert_eq!(
            report.level,
            StrengthLevel::Strong,
            "seed {seed} produced a non-strong password ({}%)",
            report.percentage
        );
    }
}
