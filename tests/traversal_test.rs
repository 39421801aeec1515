//! Tests for the traversal engine on fixtures and synthetic networks

use rstest::rstest;

use wasteland::application::GraphLoader;
use wasteland::domain::{lcm_all, Graph, NamePattern, NoProgress, Traversal};
use wasteland::util::testing::{init_test_setup, network_fixture, network_text};

fn load_fixture(name: &str) -> Graph {
    GraphLoader::new().load_path(&network_fixture(name)).unwrap()
}

fn pattern(s: &str) -> NamePattern {
    NamePattern::new(s).unwrap()
}

/// One ghost per cycle length. Ghost `i` runs `start -> m1 .. m(k-1) -> Z -> m1`,
/// so its first hit equals its period and there is no tail.
fn ring_network(cycles: &[usize]) -> String {
    let mut edges: Vec<(String, String, String)> = Vec::new();
    for (ring, &k) in cycles.iter().enumerate() {
        let prefix = (b'B' + ring as u8) as char;
        let start = format!("{prefix}SA");
        let target = format!("{prefix}ZZ");
        let middle: Vec<String> = (1..k)
            .map(|i| format!("{prefix}{}M", (b'A' + i as u8) as char))
            .collect();

        let first = middle.first().cloned().unwrap_or_else(|| target.clone());
        edges.push((start, first.clone(), first.clone()));
        for (i, name) in middle.iter().enumerate() {
            let next = middle.get(i + 1).cloned().unwrap_or_else(|| target.clone());
            edges.push((name.clone(), next.clone(), next));
        }
        edges.push((target, first.clone(), first));
    }
    let borrowed: Vec<(&str, &str, &str)> = edges
        .iter()
        .map(|(a, b, c)| (a.as_str(), b.as_str(), c.as_str()))
        .collect();
    network_text("LRL", &borrowed)
}

#[rstest]
#[case("example1.txt", 2)]
#[case("example2.txt", 6)]
fn given_worked_example_when_walking_aaa_to_zzz_then_counts_jumps(
    #[case] fixture: &str,
    #[case] expected: u64,
) {
    // Arrange
    init_test_setup();
    let graph = load_fixture(fixture);

    // Act
    let jumps = Traversal::new(&graph)
        .single_target_walk("AAA", &pattern("^ZZZ$"))
        .unwrap();

    // Assert
    assert_eq!(jumps, expected);
}

#[test]
fn given_self_loop_when_target_is_start_then_one_jump() {
    // Arrange
    let graph = GraphLoader::new().load_str("L\n\nAAA = (AAA, AAA)\n").unwrap();

    // Act
    let jumps = Traversal::new(&graph)
        .single_target_walk("AAA", &pattern("AAA"))
        .unwrap();

    // Assert
    assert_eq!(jumps, 1);
}

#[test]
fn given_ghost_network_when_solving_then_lcm_matches_brute_force() {
    // Arrange
    let graph = load_fixture("ghosts.txt");
    let traversal = Traversal::new(&graph);
    let (start, target) = (pattern(".*A$"), pattern(".*Z$"));

    // Act
    let lcm = traversal.multi_walker_lcm(&start, &target).unwrap();
    let brute = traversal
        .multi_walker_brute_force(&start, &target, &mut NoProgress)
        .unwrap();

    // Assert
    assert_eq!(lcm, 6);
    assert_eq!(brute, lcm);
}

#[rstest]
#[case(&[3, 4, 5], 60)]
#[case(&[2, 4, 6], 12)]
#[case(&[1, 3], 3)]
#[case(&[7], 7)]
#[case(&[5, 5, 5], 5)]
#[case(&[2, 3, 5, 7], 210)]
fn given_tailless_rings_when_solving_then_lcm_is_least_common_period(
    #[case] cycles: &[usize],
    #[case] expected: u64,
) {
    // Arrange
    let graph = GraphLoader::new().load_str(&ring_network(cycles)).unwrap();
    let traversal = Traversal::new(&graph);
    let (start, target) = (pattern(".*A$"), pattern(".*Z$"));

    // Act
    let lcm = traversal.multi_walker_lcm(&start, &target).unwrap();
    let brute = traversal
        .multi_walker_brute_force(&start, &target, &mut NoProgress)
        .unwrap();

    // Assert
    assert_eq!(lcm, expected);
    assert_eq!(brute, expected, "brute force is the reference answer");
}

#[test]
fn given_ghost_walkers_when_measuring_cycles_then_each_equals_single_walk() {
    // Arrange
    let graph = GraphLoader::new().load_str(&ring_network(&[3, 4, 6])).unwrap();
    let traversal = Traversal::new(&graph);
    let target = pattern(".*Z$");

    // Act
    let cycles = traversal
        .walker_cycle_lengths(&pattern(".*A$"), &target)
        .unwrap();
    let lcm = traversal.multi_walker_lcm(&pattern(".*A$"), &target).unwrap();

    // Assert
    assert_eq!(cycles.len(), 3);
    for (name, jumps) in &cycles {
        let single = traversal.single_target_walk(name, &target).unwrap();
        assert_eq!(single, *jumps, "walker {name}");
        assert_eq!(lcm % jumps, 0, "lcm must be a multiple of {jumps}");
    }
    assert_eq!(lcm, lcm_all(cycles.iter().map(|(_, n)| *n)).unwrap());
    assert_eq!(lcm, 12);
}

#[test]
fn given_walker_with_tail_when_solving_then_lcm_shortcut_disagrees_with_brute_force() {
    // Arrange: AAA hits at 1, 4, 7, ... (tail before the period of 3),
    // EEA hits at 2, 4, 6, ...; they first coincide at 4, not lcm(1, 2) = 2
    let content = network_text(
        "L",
        &[
            ("AAA", "BBZ", "BBZ"),
            ("BBZ", "CCB", "CCB"),
            ("CCB", "DDB", "DDB"),
            ("DDB", "BBZ", "BBZ"),
            ("EEA", "GGB", "GGB"),
            ("GGB", "FFZ", "FFZ"),
            ("FFZ", "GGB", "GGB"),
        ],
    );
    let graph = GraphLoader::new().load_str(&content).unwrap();
    let traversal = Traversal::new(&graph);
    let (start, target) = (pattern(".*A$"), pattern(".*Z$"));

    // Act
    let lcm = traversal.multi_walker_lcm(&start, &target).unwrap();
    let brute = traversal
        .multi_walker_brute_force(&start, &target, &mut NoProgress)
        .unwrap();

    // Assert
    assert_eq!(lcm, 2);
    assert_eq!(brute, 4);
}

#[test]
fn given_unreachable_ghost_target_when_limit_set_then_brute_force_stops() {
    // Arrange
    let graph = load_fixture("ghosts.txt");
    let traversal = Traversal::new(&graph).with_max_jumps(Some(1_000));

    // Act
    let result =
        traversal.multi_walker_brute_force(&pattern(".*A$"), &pattern("QQQ"), &mut NoProgress);

    // Assert
    assert!(result.is_err());
}
