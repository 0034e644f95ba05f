use ecomap::layout::masonry::{Breakpoints, distribute};
use ecomap::layout::radial::{NodeKind, RadialConfig, radial_map};
use ecomap::model::{Category, Project};

#[test]
fn breakpoint_columns() {
    let bp = Breakpoints::default();
    assert_eq!(bp.columns_for_width(1920), 5);
    assert_eq!(bp.columns_for_width(1400), 4);
    assert_eq!(bp.columns_for_width(1200), 4);
    assert_eq!(bp.columns_for_width(1000), 3);
    assert_eq!(bp.columns_for_width(600), 2);
    assert_eq!(bp.columns_for_width(320), 1);
}

#[test]
fn zero_columns_is_never_returned() {
    let bp = Breakpoints {
        default_columns: 0,
        by_max_width: Default::default(),
    };
    assert_eq!(bp.columns_for_width(800), 1);
    assert_eq!(distribute(&[1, 2, 3], 0), vec![vec![1, 2, 3]]);
}

#[test]
fn items_are_dealt_round_robin() {
    let cols = distribute(&["a", "b", "c", "d", "e"], 3);
    assert_eq!(cols, vec![vec!["a", "d"], vec!["b", "e"], vec!["c"]]);
}

fn category(title: &str, names: &[&str]) -> Category {
    let mut c = Category::new(title, false);
    for n in names {
        c.push_unique(Project {
            name: n.to_string(),
            image: String::new(),
            tagline: String::new(),
        });
    }
    c
}

#[test]
fn radial_nodes_circle_their_category() {
    let a = category("A", &["a1", "a2", "a3", "a4"]);
    let b = category("B", &["b1"]);
    let cfg = RadialConfig::default();
    let nodes = radial_map(&[("a", &a), ("b", &b)], &cfg);
    assert_eq!(nodes.len(), 2 + 5);

    assert_eq!(nodes[0].kind, NodeKind::Category { key: "a".into() });
    assert_eq!(nodes[0].position, [15.0, 0.0, 0.0]);
    assert_eq!(nodes[0].scale, 2.0);

    for node in &nodes[1..5] {
        assert_eq!(node.kind, NodeKind::Project);
        let dx = node.position[0] - nodes[0].position[0];
        let dz = node.position[2] - nodes[0].position[2];
        assert!(((dx * dx + dz * dz).sqrt() - cfg.project_radius).abs() < 1e-9);
        assert_eq!(node.position[1], 0.0);
    }

    let b_node = &nodes[5];
    assert_eq!(b_node.label, "B");
    assert!((b_node.position[0] + 15.0).abs() < 1e-9);
    assert!(b_node.position[2].abs() < 1e-9);
}

#[test]
fn radial_map_serializes_kind_tag() {
    let a = category("A", &["a1"]);
    let nodes = radial_map(&[("a", &a)], &RadialConfig::default());
    let json = serde_json::to_string(&nodes).unwrap();
    assert!(json.contains("\"kind\":\"category\""));
    assert!(json.contains("\"kind\":\"project\""));
}
