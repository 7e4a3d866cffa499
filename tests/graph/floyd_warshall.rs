//! Integration tests for Floyd–Warshall
//!
//! The main fixture is part of the Finnish passenger railway network, with
//! distances in kilometres between neighbouring junction stations.

use ylikuutio_graph::{DistanceMatrix, GraphError, floyd_warshall};

const INF: f32 = f32::INFINITY;

const HPK: usize = 0;
const ILM: usize = 1;
const JNS: usize = 2;
const KV: usize = 5;
const LH: usize = 6;
const OL: usize = 8;
const RI: usize = 9;
const PSL: usize = 10;
const PM: usize = 11;
const SK: usize = 12;
const TPE: usize = 13;
const TL: usize = 14;
const TKU: usize = 15;
const YV: usize = 16;

#[rustfmt::skip]
fn railway() -> DistanceMatrix<f32> {
    DistanceMatrix::from_rows(vec![
        //     Hpk    Ilm    Jns    Jy     Ke     Kv     Lh     Ov     Ol     Ri     Psl    Pm     Sk     Tpe    Tl     Tku    Yv
        vec![  0.0,   INF,   INF,  78.0,   INF,   INF,   INF,  72.0,   INF,   INF,   INF,   INF, 118.0,   INF,   INF,   INF,   INF], // Hpk
        vec![  INF,   0.0,   INF,   INF,   INF,   INF,   INF,   INF, 275.0,   INF,   INF, 174.0,   INF,   INF,   INF,   INF, 154.0], // Ilm
        vec![  INF,   INF,   0.0,   INF,   INF, 316.0,   INF,   INF,   INF,   INF,   INF, 183.0,   INF,   INF,   INF,   INF,   INF], // Jns
        vec![ 78.0,   INF,   INF,   0.0,   INF,   INF,   INF, 113.0,   INF,   INF,   INF,  80.0,   INF,   INF,   INF,   INF,   INF], // Jy
        vec![  INF,   INF,   INF,   INF,   0.0,   INF,  75.0,   INF,   INF,  42.0,  26.0,   INF,   INF,   INF,   INF,   INF,   INF], // Ke
        vec![  INF,   INF, 316.0,   INF,   INF,   0.0,  62.0,   INF,   INF,   INF,   INF, 184.0,   INF,   INF,   INF,   INF,   INF], // Kv
        vec![  INF,   INF,   INF,   INF,  75.0,  62.0,   0.0,   INF,   INF,  59.0,   INF,   INF,   INF,   INF,   INF,   INF,   INF], // Lh
        vec![ 72.0,   INF,   INF, 113.0,   INF,   INF,   INF,   0.0,   INF,   INF,   INF,   INF,   INF,  42.0,   INF,   INF,   INF], // Ov
        vec![  INF, 275.0,   INF,   INF,   INF,   INF,   INF,   INF,   0.0,   INF,   INF,   INF,   INF,   INF,   INF,   INF, 122.0], // Ol
        vec![  INF,   INF,   INF,   INF,  42.0,   INF,  59.0,   INF,   INF,   0.0,   INF,   INF,   INF,   INF,  76.0,   INF,   INF], // Ri
        vec![  INF,   INF,   INF,   INF,  26.0,   INF,   INF,   INF,   INF,   INF,   0.0,   INF,   INF,   INF,   INF, 191.0,   INF], // Psl
        vec![  INF, 174.0, 183.0,  80.0,   INF, 184.0,   INF,   INF,   INF,   INF,   INF,   0.0,   INF,   INF,   INF,   INF,   INF], // Pm
        vec![118.0,   INF,   INF,   INF,   INF,   INF,   INF,   INF,   INF,   INF,   INF,   INF,   0.0, 160.0,   INF,   INF, 211.0], // Sk
        vec![  INF,   INF,   INF,   INF,   INF,   INF,   INF,  42.0,   INF,   INF,   INF,   INF, 160.0,   0.0,  40.0,   INF,   INF], // Tpe
        vec![  INF,   INF,   INF,   INF,   INF,   INF,   INF,   INF,   INF,  76.0,   INF,   INF,   INF,  40.0,   0.0, 128.0,   INF], // Tl
        vec![  INF,   INF,   INF,   INF,   INF,   INF,   INF,   INF,   INF,   INF, 191.0,   INF,   INF,   INF, 128.0,   0.0,   INF], // Tku
        vec![  INF, 154.0,   INF,   INF,   INF,   INF,   INF,   INF, 122.0,   INF,   INF,   INF, 211.0,   INF,   INF,   INF,   0.0], // Yv
    ])
    .unwrap()
}

fn assert_symmetric_distance(distances: &DistanceMatrix<f32>, a: usize, b: usize, expected: f32) {
    assert_eq!(distances.get(a, b).unwrap(), expected, "{a} -> {b}");
    assert_eq!(distances.get(b, a).unwrap(), expected, "{b} -> {a}");
}

// =============================================================================
// Railway Network
// =============================================================================

#[test]
fn diagonal_stays_zero() {
    let distances = floyd_warshall(&railway()).unwrap();
    for station in 0..distances.size() {
        assert_eq!(distances.get(station, station).unwrap(), 0.0);
    }
}

#[test]
fn direct_neighbours_keep_their_edge() {
    let distances = floyd_warshall(&railway()).unwrap();
    assert_symmetric_distance(&distances, TKU, PSL, 191.0);
    assert_symmetric_distance(&distances, OL, YV, 122.0);
    assert_symmetric_distance(&distances, TPE, TL, 40.0);
    assert_symmetric_distance(&distances, KV, LH, 62.0);
}

#[test]
fn shortest_paths_through_junctions() {
    let distances = floyd_warshall(&railway()).unwrap();
    assert_symmetric_distance(&distances, OL, SK, 333.0);
    assert_symmetric_distance(&distances, OL, TPE, 493.0);
    assert_symmetric_distance(&distances, OL, PSL, 677.0);
    assert_symmetric_distance(&distances, YV, TPE, 371.0);
    assert_symmetric_distance(&distances, TPE, RI, 116.0);
    assert_symmetric_distance(&distances, JNS, TPE, 418.0);
    assert_symmetric_distance(&distances, JNS, TKU, 586.0);
    assert_symmetric_distance(&distances, TPE, HPK, 114.0);
    assert_symmetric_distance(&distances, OL, KV, 633.0);
    assert_symmetric_distance(&distances, ILM, PM, 174.0);
    assert_symmetric_distance(&distances, JNS, LH, 378.0);
    assert_symmetric_distance(&distances, JNS, PSL, 479.0);
    assert_symmetric_distance(&distances, OL, JNS, 632.0);
    assert_symmetric_distance(&distances, ILM, TKU, 577.0);
    assert_symmetric_distance(&distances, JNS, RI, 437.0);
}

#[test]
fn network_is_connected() {
    let distances = floyd_warshall(&railway()).unwrap();
    assert!(distances.rows().flatten().all(|d| d.is_finite()));
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn disconnected_vertices_stay_unreachable() {
    let mut edges = DistanceMatrix::<u32>::new(3);
    edges.set_undirected(0, 1, 5).unwrap();
    let distances = floyd_warshall(&edges).unwrap();

    assert_eq!(distances.get(0, 1).unwrap(), 5);
    assert_eq!(distances.get(0, 2).unwrap(), u32::MAX);
    assert_eq!(distances.get(2, 1).unwrap(), u32::MAX);
}

#[test]
fn non_square_rows_are_refused() {
    let err = DistanceMatrix::from_rows(vec![vec![0.0_f64, 1.0], vec![1.0]]).unwrap_err();
    assert!(matches!(
        err,
        GraphError::NotSquare {
            row: 1,
            length: 1,
            expected: 2
        }
    ));
}

#[test]
fn negative_cycle_is_reported() {
    let mut edges = DistanceMatrix::<i64>::new(3);
    edges.set(0, 1, 1).unwrap();
    edges.set(1, 2, -3).unwrap();
    edges.set(2, 0, 1).unwrap();
    assert!(matches!(
        floyd_warshall(&edges),
        Err(GraphError::NegativeCycle(_))
    ));
}

#[test]
fn out_of_range_vertex_is_refused() {
    let edges = DistanceMatrix::<f32>::new(2);
    assert!(matches!(
        edges.get(0, 2),
        Err(GraphError::OutOfRange { vertex: 2, size: 2 })
    ));
}
