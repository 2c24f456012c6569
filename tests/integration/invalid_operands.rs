use std::io;
use std::sync::{Arc, Mutex};

use vectors::{Operand, Vec2, Vec3, VectorError};

#[test]
fn test_other_vector_kind_is_invalid_operand() {
    let v2: Vec2 = Vec2::new(1.0, 2.0);
    let v3: Vec3 = Vec3::new(1.0, 2.0, 3.0);

    for result in [
        v2.try_add(v3),
        v2.try_sub(v3),
        v2.try_mul(v3),
        v2.try_div(v3),
    ] {
        match result {
            Err(VectorError::InvalidOperand { expected, found }) => {
                assert_eq!(expected, "scalar or Vec2");
                assert_eq!(found, "Vec3");
            }
            Ok(v) => panic!("expected InvalidOperand, got {v}"),
        }
    }

    for result in [
        v3.try_add(v2),
        v3.try_sub(v2),
        v3.try_mul(v2),
        v3.try_div(v2),
    ] {
        assert!(matches!(result, Err(VectorError::InvalidOperand { .. })));
    }
}

#[test]
fn test_matching_operands_accepted() {
    let v2: Vec2 = Vec2::new(1.0, 2.0);
    assert_eq!(v2.try_add(Operand::Scalar(1.0)).unwrap(), Vec2::new(2.0, 3.0));
    assert_eq!(v2.try_mul(v2).unwrap(), Vec2::new(1.0, 4.0));

    let v3: Vec3 = Vec3::new(2.0, 4.0, 8.0);
    assert_eq!(v3.try_div(v3).unwrap(), Vec3::one());
    assert_eq!(v3.try_sub(Operand::Vector3([2.0, 4.0, 8.0])).unwrap(), Vec3::zero());
}

#[test]
fn test_bare_lists_are_invalid_operands() {
    let v2: Vec2 = Vec2::new(1.0, 2.0);
    match v2.try_add(vec![1.0, 2.0]) {
        Err(VectorError::InvalidOperand { expected, found }) => {
            assert_eq!(expected, "scalar or Vec2");
            assert_eq!(found, "sequence of 2 components");
        }
        Ok(v) => panic!("expected InvalidOperand, got {v}"),
    }
    assert!(v2.try_sub([1.0, 2.0]).is_err());

    let v3: Vec3 = Vec3::new(1.0, 2.0, 3.0);
    assert!(v3.try_mul([2.0, 2.0, 2.0]).is_err());
    assert!(v3.try_div(Operand::from(&[1.0, 1.0, 1.0][..])).is_err());
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_rejection_is_logged() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let result = Vec2::new(1.0, 1.0).try_add(vec![1.0, 2.0, 3.0, 4.0]);
        assert!(result.is_err());
    });

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("rejected vector operand"));
    assert!(output.contains("4 components"));
}

#[test]
fn test_slice_conversion_rejection_is_logged() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert!(Vec3::<f64>::try_from(&[1.0, 2.0][..]).is_err());
    });

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("rejected vector operand"));
    assert!(output.contains("try_from"));
    assert!(output.contains("2 components"));
}
