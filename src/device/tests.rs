use super::*;
use approx::assert_relative_eq;

#[test]
fn test_detect_returns_a_labeled_backend() {
    let device = Device::detect();
    assert!(matches!(device.label(), "cpu" | "cpu:parallel"));

    if let Device::Parallel { threads } = device {
        assert!(threads > 1);
    }
}

#[test]
fn test_serial_matmul_known_product() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);

    let c = Device::Serial.matmul(&a, &b);

    assert_eq!(c.rows(), 2);
    assert_eq!(c.cols(), 2);
    assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
}

#[test]
fn test_identity_is_a_fixed_point() {
    let a = Matrix::random(16, 16);
    let id = Matrix::identity(16);

    for device in [Device::Serial, Device::Parallel { threads: 4 }] {
        let product = device.matmul(&a, &id);
        for (got, want) in product.as_slice().iter().zip(a.as_slice()) {
            assert_relative_eq!(*got, *want, max_relative = 1e-6);
        }
    }
}

#[test]
fn test_parallel_kernel_matches_serial() {
    let a = Matrix::random(33, 17);
    let b = Matrix::random(17, 29);

    let serial = Device::Serial.matmul(&a, &b);
    let parallel = Device::Parallel { threads: 4 }.matmul(&a, &b);

    // Per-row accumulation order is identical, so the results are too.
    assert_eq!(serial.as_slice(), parallel.as_slice());
}

#[test]
fn test_random_values_are_unit_interval() {
    let m = Matrix::random(8, 8);
    assert!(m.as_slice().iter().all(|v| (0.0..1.0).contains(v)));
}

#[test]
#[should_panic(expected = "inner dimensions")]
fn test_dimension_mismatch_panics() {
    let a = Matrix::random(4, 5);
    let b = Matrix::random(4, 5);
    Device::Serial.matmul(&a, &b);
}
