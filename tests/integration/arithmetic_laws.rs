use vectors::{Vec2, Vec3};

const SAMPLES: [f64; 7] = [0.0, 1.0, -2.5, 3.75, 1e-3, -1e6, 42.0];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn close2(a: Vec2, b: Vec2) -> bool {
    a.to_sequence().iter().zip(b.to_sequence()).all(|(p, q)| close(*p, q))
}

fn close3(a: Vec3, b: Vec3) -> bool {
    a.to_sequence().iter().zip(b.to_sequence()).all(|(p, q)| close(*p, q))
}

fn pairs() -> impl Iterator<Item = (f64, f64)> {
    SAMPLES.into_iter().flat_map(|a| SAMPLES.into_iter().map(move |b| (a, b)))
}

#[test]
fn test_elementwise_add_and_sub() {
    for (a, b) in pairs() {
        let (c, d) = (b * 0.5, a - 1.0);
        assert_eq!(Vec2::new(a, b) + Vec2::new(c, d), Vec2::new(a + c, b + d));
        assert_eq!(Vec2::new(a, b) - Vec2::new(c, d), Vec2::new(a - c, b - d));
        assert_eq!(
            Vec3::new(a, b, c) + Vec3::new(d, a, b),
            Vec3::new(a + d, b + a, c + b)
        );
        assert_eq!(
            Vec3::new(a, b, c) - Vec3::new(d, a, b),
            Vec3::new(a - d, b - a, c - b)
        );
    }
}

#[test]
fn test_add_is_commutative_and_associative() {
    for (a, b) in pairs() {
        let u = Vec2::new(a, b);
        let v = Vec2::new(b, 7.0);
        let w = Vec2::new(-a, 0.25);
        assert_eq!(u + v, v + u);
        assert!(close2((u + v) + w, u + (v + w)));

        let p = Vec3::new(a, b, 1.0);
        let q = Vec3::new(b, -a, 2.0);
        let r = Vec3::new(0.5, a, b);
        assert_eq!(p + q, q + p);
        assert!(close3((p + q) + r, p + (q + r)));
    }
}

#[test]
fn test_sub_inverts_add() {
    for (a, b) in pairs() {
        let v = Vec2::new(a, b);
        let w = Vec2::new(b, -a);
        assert!(close2((v + w) - w, v));

        let p = Vec3::new(a, b, a * b);
        let q = Vec3::new(-b, a, 3.0);
        assert!(close3((p + q) - q, p));
    }
}

#[test]
fn test_scalar_mul_then_div_returns_original() {
    for (a, b) in pairs() {
        for s in SAMPLES.into_iter().filter(|s| *s != 0.0) {
            let v = Vec2::new(a, b);
            assert!(close2((v * s) / s, v));

            let p = Vec3::new(a, b, s);
            assert!(close3((p * s) / s, p));
        }
    }
}

#[test]
fn test_division_by_zero_is_not_masked() {
    let v: Vec3 = Vec3::new(1.0, -1.0, 0.0) / 0.0;
    assert_eq!(v.x, f64::INFINITY);
    assert_eq!(v.y, f64::NEG_INFINITY);
    assert!(v.z.is_nan());

    let w: Vec2 = Vec2::new(2.0, 2.0).try_div(Vec2::new(0.0, 1.0)).unwrap();
    assert!(w.x.is_infinite());
    assert_eq!(w.y, 2.0);
}
