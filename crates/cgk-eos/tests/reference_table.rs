//! Inversion against the embedded reference table.
//!
//! These tests go through the public surface only and pin the behaviour the
//! hydro solver depends on: node exactness, asymptotic branches, continuity
//! where the branches meet, and rejection of non-physical states.

use cgk_core::{Tolerances, nearly_equal};
use cgk_eos::{
    EosError, IONIZED_LIMIT_K, IonizedGasEos, LogGrid, LookupTable, NEUTRAL_LIMIT_K,
    PhysicalConstants, Regime,
};

fn wide_constants() -> PhysicalConstants {
    PhysicalConstants::new(0.5, 2.0, 1.0).unwrap()
}

/// Constants wide enough that every positive T1 takes the table branch.
fn table_only_constants() -> PhysicalConstants {
    PhysicalConstants::new(1.0e-12, 1.0e6, 1.0).unwrap()
}

#[test]
fn reference_table_is_strictly_increasing() {
    let table = LookupTable::reference();
    for pair in table.nodes().windows(2) {
        assert!(pair[0].t1 < pair[1].t1);
        assert!(pair[0].temperature < pair[1].temperature);
    }
    assert_eq!(*table.grid(), LogGrid::REFERENCE);
}

#[test]
fn first_node_returns_first_temperature() {
    let table = LookupTable::reference();
    assert_eq!(table.interpolate(10.0), 12.95);

    let eos = IonizedGasEos::new(table_only_constants());
    assert_eq!(eos.regime(10.0), Regime::Tabulated);
    assert_eq!(eos.temperature_from_t1(10.0).unwrap(), 12.95);
}

#[test]
fn interior_nodes_are_exact() {
    let table = LookupTable::reference();
    let eos = IonizedGasEos::new(table_only_constants());
    for (i, node) in table.nodes()[..table.len() - 1].iter().enumerate() {
        assert_eq!(
            eos.temperature_from_t1(node.t1).unwrap(),
            node.temperature,
            "node {i}"
        );
    }
}

#[test]
fn last_node_within_rounding() {
    let table = LookupTable::reference();
    let last = table.nodes()[table.len() - 1];
    let tol = Tolerances {
        abs: 0.0,
        rel: 1e-12,
    };
    assert!(nearly_equal(table.interpolate(last.t1), last.temperature, tol));
}

#[test]
fn neutral_branch_skips_table() {
    let eos = IonizedGasEos::new(wide_constants());
    assert_eq!(eos.regime(2000.0), Regime::Neutral);
    assert_eq!(eos.temperature_from_t1(2000.0).unwrap(), 4000.0);
}

#[test]
fn ionized_branch_skips_table() {
    let eos = IonizedGasEos::new(wide_constants());
    assert_eq!(eos.regime(3.0e7), Regime::Ionized);
    assert_eq!(eos.temperature_from_t1(3.0e7).unwrap(), 1.5e7);
}

#[test]
fn continuous_at_neutral_limit() {
    let c = PhysicalConstants::reference();
    let eos = IonizedGasEos::new(c);
    let t1_edge = NEUTRAL_LIMIT_K / c.mumax;

    let below = eos.temperature_from_t1(t1_edge * (1.0 - 1e-9)).unwrap();
    let above = eos.temperature_from_t1(t1_edge * (1.0 + 1e-9)).unwrap();
    assert_eq!(eos.regime(t1_edge * (1.0 - 1e-9)), Regime::Neutral);
    assert_eq!(eos.regime(t1_edge * (1.0 + 1e-9)), Regime::Tabulated);
    assert!((below - above).abs() / NEUTRAL_LIMIT_K < 1e-4, "{below} vs {above}");
}

#[test]
fn continuous_at_ionized_limit() {
    let c = PhysicalConstants::reference();
    let eos = IonizedGasEos::new(c);
    let t1_edge = IONIZED_LIMIT_K / c.mumin;

    let below = eos.temperature_from_t1(t1_edge * (1.0 - 1e-9)).unwrap();
    let above = eos.temperature_from_t1(t1_edge * (1.0 + 1e-9)).unwrap();
    assert_eq!(eos.regime(t1_edge * (1.0 + 1e-9)), Regime::Ionized);
    assert!(below <= above);
    assert!((below - above).abs() / IONIZED_LIMIT_K < 1e-4, "{below} vs {above}");
}

#[test]
fn pressure_density_below_table_uses_first_segment() {
    // T1 = 1 / 2 * 1 = 0.5, below the first node
    let table = LookupTable::reference();
    assert_eq!(table.locate(0.5), 0);

    let n0 = table.nodes()[0];
    let n1 = table.nodes()[1];
    let expected = n0.temperature + (n1.temperature - n0.temperature) * (0.5 - n0.t1) / (n1.t1 - n0.t1);

    let eos = IonizedGasEos::new(table_only_constants());
    let t = eos.temperature_from_pressure_density(1.0, 2.0).unwrap();
    assert_eq!(t, expected);
    assert!(t > 0.0 && t < n0.temperature);
}

#[test]
fn pressure_density_below_table_with_reference_constants() {
    let eos = IonizedGasEos::default();
    let t = eos.temperature_from_pressure_density(1.0, 2.0).unwrap();
    assert_eq!(t, 1.295 * 0.5);
}

#[test]
fn hydrogen_ionization_lowers_mu() {
    let eos = IonizedGasEos::default();
    // mean molecular weight T / T1 drops from the neutral to the ionized value
    let mu = |t1: f64| eos.temperature_from_t1(t1).unwrap() / t1;
    assert!((mu(1.0e3) - 1.295).abs() < 1e-6);
    assert!(mu(1.0e4) < 1.295);
    assert!(mu(3.0e4) < mu(1.0e4));
    assert!((mu(1.0e7) - 0.6182).abs() < 1e-6);
}

#[test]
fn non_physical_state_is_rejected() {
    let eos = IonizedGasEos::default();
    assert!(matches!(
        eos.temperature_from_pressure_density(0.0, 1.0),
        Err(EosError::NonPhysical {
            what: "pressure",
            ..
        })
    ));
    assert!(matches!(
        eos.temperature_from_pressure_density(1.0, -1.0),
        Err(EosError::NonPhysical { what: "density", .. })
    ));
    assert!(matches!(
        eos.temperature_from_t1(-3.0),
        Err(EosError::NonPhysical { what: "T1", .. })
    ));
}

#[test]
fn concurrent_readers_agree() {
    let eos = IonizedGasEos::default();
    let handles: Vec<_> = (0..4)
        .map(|k| {
            std::thread::spawn(move || {
                (0..200)
                    .map(|i| {
                        let t1 = 10f64.powf(1.0 + (i + k * 200) as f64 * 0.01);
                        eos.temperature_from_t1(t1).unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all = Vec::new();
    for h in handles {
        all.extend(h.join().unwrap());
    }
    for (i, t) in all.iter().enumerate() {
        let t1 = 10f64.powf(1.0 + i as f64 * 0.01);
        assert_eq!(*t, eos.temperature_from_t1(t1).unwrap());
    }
}
