//! Energy accounting and denoising integration tests.

use mallat_dwt::{
    FilterBankCatalog, Matrix, ThresholdMode, energy_by_level, energy_by_level2,
    energy_per_subband, energy_per_subband2, estimate_noise_sigma, mse, psnr, threshold_pyramid,
    universal_threshold, wavedec, wavedec2, waverec,
};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn noisy_sine(n: usize, sigma: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, sigma).unwrap();
    let clean: Vec<f64> = (0..n).map(|i| ((i as f64) * 0.04).sin() * 8.0).collect();
    let noisy = clean.iter().map(|&x| x + normal.sample(&mut rng)).collect();
    (clean, noisy)
}

#[test]
fn smooth_signal_energy_concentrates() {
    let catalog = FilterBankCatalog::new().unwrap();
    let bank = catalog.lookup("sym4").unwrap();
    let signal: Vec<f64> = (0..512).map(|i| ((i as f64) * 0.01).cos() * 4.0).collect();
    let pyramid = wavedec(&signal, bank, 4);

    let map = energy_per_subband(&pyramid);
    let total = map["approx"] + map["detail"];
    assert!(map["approx"] / total > 0.99, "approx share {}", map["approx"] / total);
}

#[test]
fn white_noise_spreads_across_levels() {
    // Half of white-noise energy lands in the finest detail band.
    let catalog = FilterBankCatalog::new().unwrap();
    let bank = catalog.lookup("haar").unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(29);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let signal: Vec<f64> = (0..4096).map(|_| normal.sample(&mut rng)).collect();
    let pyramid = wavedec(&signal, bank, 3);

    let map = energy_by_level(&pyramid);
    let total: f64 = signal.iter().map(|x| x * x).sum();
    let share = map["detail1"] / total;
    assert!((share - 0.5).abs() < 0.05, "finest share {share}");
}

#[test]
fn energy_maps_agree_2d() {
    let catalog = FilterBankCatalog::new().unwrap();
    let bank = catalog.lookup("haar").unwrap();
    let data: Vec<f64> = (0..1024).map(|i| ((i * 31) % 17) as f64).collect();
    let image = Matrix::from_vec(32, 32, data).unwrap();
    let pyramid = wavedec2(&image, bank, 3);

    let per_subband = energy_per_subband2(&pyramid);
    let by_level = energy_by_level2(&pyramid);

    let lh_total: f64 = (1..=3).map(|i| by_level[&format!("LH{i}")]).sum();
    assert!((lh_total - per_subband["LH"]).abs() < 1e-9);
    assert_eq!(by_level["LL"], per_subband["LL"]);

    let input: f64 = image.as_slice().iter().map(|x| x * x).sum();
    let total: f64 = per_subband.values().sum();
    assert!((total - input).abs() / input < 1e-9);
}

#[test]
fn sigma_estimate_tracks_injected_noise() {
    let catalog = FilterBankCatalog::new().unwrap();
    let bank = catalog.lookup("db8").unwrap();
    let (_, noisy) = noisy_sine(4096, 1.0, 31);
    let pyramid = wavedec(&noisy, bank, 1);
    let sigma = estimate_noise_sigma(&pyramid).unwrap();
    assert!((sigma - 1.0).abs() < 0.1, "estimated sigma {sigma}");
}

#[test]
fn universal_soft_thresholding_improves_mse() {
    let catalog = FilterBankCatalog::new().unwrap();
    let bank = catalog.lookup("db4").unwrap();
    let (clean, noisy) = noisy_sine(1024, 0.5, 37);

    let pyramid = wavedec(&noisy, bank, 5);
    let sigma = estimate_noise_sigma(&pyramid).unwrap();
    let t = universal_threshold(sigma, noisy.len());
    let shrunk = threshold_pyramid(&pyramid, t, ThresholdMode::Soft);
    let restored = waverec(&shrunk, bank).unwrap();

    let before = mse(&clean, &noisy);
    let after = mse(&clean, &restored);
    assert!(after < before, "mse before {before}, after {after}");
    assert!(psnr(&clean, &restored, 8.0) > psnr(&clean, &noisy, 8.0));
}
