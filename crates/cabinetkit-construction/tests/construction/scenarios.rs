use cabinetkit_construction::{
    generate_cabinet, generate_design, CabinetDesign, ComponentKind, Configuration, HoleKind,
    PanelEdge,
};
use cabinetkit_core::{CabinetArchetype, Material};

fn design(archetype: CabinetArchetype, width: f64, height: f64) -> CabinetDesign {
    generate_design(
        archetype,
        width,
        height,
        Material::plywood_3_4(),
        Configuration::default(),
    )
    .unwrap()
}

fn hinges_per_leaf(design: &CabinetDesign) -> Vec<usize> {
    design
        .doors()
        .iter()
        .map(|door| door.holes_of(HoleKind::Hinge).count())
        .collect()
}

#[test]
fn test_base_24_single_door() {
    let dims = generate_cabinet(CabinetArchetype::Base, 24.0, 12.0).unwrap();
    assert_eq!(dims.depth, 24.0);
    assert_eq!(dims.toe_kick_height, Some(4.5));
    assert_eq!(dims.toe_kick_depth, Some(21.0));
    assert_eq!(dims.total_height, 34.5);

    let design = design(CabinetArchetype::Base, 24.0, 12.0);
    let doors = design.doors();
    assert_eq!(doors.len(), 1);
    assert_eq!(doors[0].width(), 25.5);
    assert_eq!(doors[0].length(), 31.5);
    assert_eq!(hinges_per_leaf(&design), vec![2]);
}

#[test]
fn test_wall_30x30_split_without_mid_hinge() {
    let design = design(CabinetArchetype::Wall, 30.0, 30.0);
    assert!(design.has_two_doors());

    let doors = design.doors();
    assert_eq!(doors.len(), 2);
    assert_eq!(doors[0].name(), "Left Door");
    assert_eq!(doors[1].name(), "Right Door");
    for door in &doors {
        assert_eq!(door.width(), 15.75);
        assert_eq!(door.length(), 31.5);
        assert_eq!(door.quantity(), 1);
    }
    assert_eq!(hinges_per_leaf(&design), vec![2, 2]);
}

#[test]
fn test_wall_30x33_three_hinges_per_leaf() {
    let design = design(CabinetArchetype::Wall, 30.0, 33.0);
    assert!(design.has_two_doors());
    assert_eq!(hinges_per_leaf(&design), vec![3, 3]);
    assert_eq!(design.hinge_count(), 6);
}

#[test]
fn test_tall_24x85_5() {
    let design = design(CabinetArchetype::Tall, 24.0, 85.5);
    assert_eq!(design.dimensions.total_height, 85.5);
    assert!(!design.has_two_doors());
    assert_eq!(hinges_per_leaf(&design), vec![5]);
    assert!(design.component(ComponentKind::ToeKickFront).is_some());
    assert!(design.component(ComponentKind::ToeKickSide).is_some());
    assert!(design.component(ComponentKind::ToeKickBack).is_some());
}

#[test]
fn test_leaves_hinge_on_outer_edges() {
    let design = design(CabinetArchetype::Wall, 36.0, 36.0);
    let doors = design.doors();
    assert!(doors[0]
        .holes_of(HoleKind::Hinge)
        .all(|h| h.edge == PanelEdge::Left));
    assert!(doors[1]
        .holes_of(HoleKind::Hinge)
        .all(|h| h.edge == PanelEdge::Right));
}

#[test]
fn test_off_ladder_rejected_before_build() {
    for (archetype, width, height) in [
        (CabinetArchetype::Base, 25.0, 30.0),
        (CabinetArchetype::Wall, 24.0, 31.0),
        (CabinetArchetype::Tall, 9.0, 85.5),
        (CabinetArchetype::Tall, 24.0, 90.0),
    ] {
        let err = generate_design(
            archetype,
            width,
            height,
            Material::plywood_3_4(),
            Configuration::default(),
        )
        .unwrap_err();
        assert!(err.is_invalid_dimension(), "{archetype} {width}x{height}");
    }
}

#[test]
fn test_design_serializes_holes_and_grooves() {
    let design = design(CabinetArchetype::Wall, 18.0, 30.0);
    let json = serde_json::to_value(&design).unwrap();
    let components = json["components"].as_array().unwrap();
    assert!(components
        .iter()
        .all(|c| c["holes"].is_array() && c["grooves"].is_array()));
    assert_eq!(components[0]["kind"], "side_panel");
}
