mod common;

use common::{course, synthetic_catalog};
use sugang::algorithm::ConflictGraph;

#[test]
fn test_edge_iff_shared_slot() {
    let courses = synthetic_catalog(80, 7);
    let g = ConflictGraph::build(&courses);
    for (i, a) in courses.iter().enumerate() {
        for b in &courses[i + 1..] {
            let shared = a
                .class_time_processed
                .iter()
                .any(|s| b.class_time_processed.contains(s));
            assert_eq!(
                g.are_adjacent(&a.subject_id, &b.subject_id),
                shared,
                "{} / {}",
                a.subject_id,
                b.subject_id
            );
        }
    }
}

#[test]
fn test_build_is_idempotent() {
    let courses = synthetic_catalog(60, 42);
    let g1 = ConflictGraph::build(&courses);
    let g2 = ConflictGraph::build(&courses);
    assert_eq!(g1.node_count(), g2.node_count());
    assert_eq!(g1.edges(), g2.edges());

    // el orden de entrada no cambia el resultado
    let mut reversed = courses.clone();
    reversed.reverse();
    let g3 = ConflictGraph::build(&reversed);
    assert_eq!(g1.edges(), g3.edges());
}

#[test]
fn test_course_without_time_never_conflicts() {
    let courses = vec![
        course("A", "온라인강좌", 3, ""),
        course("B", "자료구조", 3, "Mon 9(a)"),
        course("C", "운영체제", 3, "Mon 9(b)"),
    ];
    let g = ConflictGraph::build(&courses);
    assert!(g.neighbors("A").is_empty());
    assert_eq!(g.edges(), vec![("B".to_string(), "C".to_string())]);
}

#[test]
fn test_no_self_edges_and_nodes_keep_record() {
    let courses = vec![course("A", "자료구조", 3, "Mon 9(a) Mon 9(b)")];
    let g = ConflictGraph::build(&courses);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.course("A"), Some(&courses[0]));
}
