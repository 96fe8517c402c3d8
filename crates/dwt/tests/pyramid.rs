//! Pyramid depth and graceful-termination integration tests.

use mallat_dwt::{
    DwtError, FilterBankCatalog, Level1d, Matrix, Pyramid1d, wavedec, wavedec2, waverec, waverec2,
};

#[test]
fn short_signal_stops_after_one_level() {
    // Three samples: one Haar level leaves a single approximation
    // coefficient, too short for another step. Not an error.
    let catalog = FilterBankCatalog::new().unwrap();
    let bank = catalog.lookup("haar").unwrap();
    let pyramid = wavedec(&[4.0, 6.0, 10.0], bank, 5);
    assert_eq!(pyramid.n_levels(), 1);
    assert_eq!(pyramid.level(0).unwrap().approx().len(), 1);
}

#[test]
fn long_filter_stops_earlier_than_short_one() {
    let catalog = FilterBankCatalog::new().unwrap();
    let signal: Vec<f64> = (0..64).map(|i| (i as f64).sqrt()).collect();

    let haar = catalog.lookup("haar").unwrap();
    let db8 = catalog.lookup("db8").unwrap();
    let deep = wavedec(&signal, haar, 10);
    let shallow = wavedec(&signal, db8, 10);

    assert_eq!(deep.n_levels(), 6); // 64 -> ... -> 1
    assert_eq!(shallow.n_levels(), 3); // stops once approx < 16 samples
    assert!(shallow.n_levels() < deep.n_levels());
}

#[test]
fn zero_requested_levels_is_empty() {
    let catalog = FilterBankCatalog::new().unwrap();
    let bank = catalog.lookup("haar").unwrap();
    let pyramid = wavedec(&[1.0; 16], bank, 0);
    assert!(pyramid.is_empty());
    assert_eq!(waverec(&pyramid, bank).unwrap(), Vec::<f64>::new());
}

#[test]
fn empty_signal_is_empty_pyramid() {
    let catalog = FilterBankCatalog::new().unwrap();
    let bank = catalog.lookup("haar").unwrap();
    let pyramid = wavedec(&[], bank, 3);
    assert!(pyramid.is_empty());
}

#[test]
fn rectangular_image_limited_by_short_axis() {
    let catalog = FilterBankCatalog::new().unwrap();
    let bank = catalog.lookup("haar").unwrap();
    let image = Matrix::from_vec(32, 4, (0..128).map(|i| i as f64).collect()).unwrap();
    let pyramid = wavedec2(&image, bank, 10);
    // 32x4 -> 16x2 -> 8x1, then the short axis blocks a third step.
    assert_eq!(pyramid.n_levels(), 2);
    assert_eq!(pyramid.coarsest().unwrap().shape(), (8, 1));

    let restored = waverec2(&pyramid, bank).unwrap();
    assert_eq!(restored.shape(), (32, 4));
}

#[test]
fn waverec_surfaces_inconsistent_levels() {
    let catalog = FilterBankCatalog::new().unwrap();
    let bank = catalog.lookup("haar").unwrap();
    let signal: Vec<f64> = (0..32).map(|i| i as f64).collect();
    let pyramid = wavedec(&signal, bank, 3);

    let mut levels: Vec<Level1d> = pyramid.levels().cloned().collect();
    levels[1] = Level1d::new(2, vec![0.0; 8], vec![0.0; 7]);
    let err = waverec(&Pyramid1d::from_levels(levels), bank).unwrap_err();
    assert!(matches!(err, DwtError::ShapeMismatch { .. }));
}

#[test]
fn deep_pyramid_detail_lengths_halve() {
    let catalog = FilterBankCatalog::new().unwrap();
    let bank = catalog.lookup("db4").unwrap();
    let signal: Vec<f64> = (0..512).map(|i| ((i as f64) * 0.02).sin()).collect();
    let pyramid = wavedec(&signal, bank, 5);
    assert_eq!(pyramid.n_levels(), 5);
    let mut expected = 256;
    for level in pyramid.levels() {
        assert_eq!(level.detail().len(), expected);
        assert_eq!(level.approx().len(), expected);
        expected /= 2;
    }
}
