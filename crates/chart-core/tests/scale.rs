// File: crates/chart-core/tests/scale.rs
// Purpose: Linear/band scale mappings, tick generation and tick label formatting.

use chart_core::grid::ticks;
use chart_core::{BandScale, LinearScale, TickFormat};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn linear_maps_domain_endpoints_to_range() {
    let x = LinearScale::new((2010.0, 2016.0), (0.0, 700.0));
    assert_eq!(x.map(2010.0), 0.0);
    assert_eq!(x.map(2016.0), 700.0);
    assert!(close(x.map(2013.0), 350.0));
}

#[test]
fn linear_inverted_range_grows_downward() {
    let y = LinearScale::new((0.0, 10.0), (290.0, 0.0));
    assert_eq!(y.map(0.0), 290.0);
    assert_eq!(y.map(10.0), 0.0);
    assert!(y.map(7.0) < y.map(3.0));
}

#[test]
fn linear_degenerate_domain_maps_to_midpoint() {
    let x = LinearScale::new((2015.0, 2015.0), (0.0, 700.0));
    assert_eq!(x.map(2015.0), 350.0);
    assert_eq!(x.map(1999.0), 350.0);
}

#[test]
fn nice_ticks() {
    assert_eq!(ticks(0.0, 10.0, 10), (0..=10).map(|i| i as f64).collect::<Vec<_>>());
    assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    let gross = ticks(0.0, 4.2e9, 10);
    assert_eq!(gross.first(), Some(&0.0));
    assert_eq!(gross.last(), Some(&4.0e9));
    assert_eq!(gross.len(), 9);
    assert_eq!(ticks(10.0, 0.0, 10).first(), Some(&10.0));
    assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
    assert!(ticks(f64::NAN, 1.0, 10).is_empty());
}

#[test]
fn band_scale_six_directors() {
    let names: Vec<String> = (0..6).map(|i| format!("d{i}")).collect();
    let band = BandScale::new(names, (0.0, 700.0)).padding(0.1);
    let step = 700.0 / 6.1;
    assert!(close(band.step(), step));
    assert!(close(band.bandwidth(), step * 0.9));
    assert!(close(band.position("d0").unwrap(), step * 0.1));
    assert!(close(band.position("d5").unwrap(), step * 0.1 + step * 5.0));
    // Last band ends one outer padding before the range end.
    assert!(close(band.position("d5").unwrap() + band.bandwidth(), 700.0 - step * 0.1));
    assert!(close(band.center("d0").unwrap(), step * 0.1 + step * 0.45));
    assert_eq!(band.position("missing"), None);
}

#[test]
fn band_scale_without_padding_tiles_range() {
    let band = BandScale::new(vec!["a".into(), "b".into()], (0.0, 100.0));
    assert_eq!(band.bandwidth(), 50.0);
    assert_eq!(band.position("b"), Some(50.0));
}

#[test]
fn tick_formats() {
    assert_eq!(TickFormat::Integer.format(2015.0), "2015");
    assert_eq!(TickFormat::Billions.format(1.5e9), "1.5B");
    assert_eq!(TickFormat::Billions.format(5e8), "0.5B");
    assert_eq!(TickFormat::Billions.format(0.0), "0B");
    assert_eq!(TickFormat::Auto.format(8.5), "8.5");
    assert_eq!(TickFormat::Auto.format(10.0), "10");
}
