use cabinetkit_construction::{
    available_heights, available_widths, generate_design, CabinetDesign, ComponentKind,
    Configuration, GrooveKind, HoleKind, PanelEdge,
};
use cabinetkit_core::{CabinetArchetype, Material};
use proptest::prelude::*;

fn ladder_case() -> impl Strategy<Value = (CabinetArchetype, f64, f64)> {
    prop::sample::select(CabinetArchetype::ALL.to_vec()).prop_flat_map(|archetype| {
        (
            Just(archetype),
            prop::sample::select(available_widths(archetype)),
            prop::sample::select(available_heights(archetype)),
        )
    })
}

fn build(archetype: CabinetArchetype, width: f64, height: f64) -> CabinetDesign {
    generate_design(
        archetype,
        width,
        height,
        Material::plywood_3_4(),
        Configuration::default(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn every_ladder_size_builds(case in ladder_case()) {
        let (archetype, width, height) = case;
        let design = build(archetype, width, height);

        let side = design.component(ComponentKind::SidePanel).unwrap();
        prop_assert_eq!(side.quantity(), 2);
        prop_assert!(design.components.iter().all(|c| c.width() > 0.0 && c.length() > 0.0));
    }

    #[test]
    fn total_height_includes_toe_kick(case in ladder_case()) {
        let (archetype, width, height) = case;
        let dims = build(archetype, width, height).dimensions;
        let expected = dims.height + dims.toe_kick_height.unwrap_or(0.0);
        prop_assert!((dims.total_height - expected).abs() < 1e-9);
    }

    #[test]
    fn shelf_pins_are_mirrored(case in ladder_case()) {
        let (archetype, width, height) = case;
        let design = build(archetype, width, height);
        let side = design.component(ComponentKind::SidePanel).unwrap();

        let front: Vec<_> = side
            .holes_of(HoleKind::ShelfPin)
            .filter(|h| h.edge == PanelEdge::Front)
            .map(|h| h.y_from_reference)
            .collect();
        let back: Vec<_> = side
            .holes_of(HoleKind::ShelfPin)
            .filter(|h| h.edge == PanelEdge::Back)
            .map(|h| h.y_from_reference)
            .collect();
        prop_assert!(!front.is_empty());
        prop_assert_eq!(front, back);
    }

    #[test]
    fn hinges_are_symmetric(case in ladder_case()) {
        let (archetype, width, height) = case;
        let design = build(archetype, width, height);
        for door in design.doors() {
            let ys: Vec<f64> = door.holes_of(HoleKind::Hinge).map(|h| h.y_from_reference).collect();
            let first = ys.first().copied().unwrap();
            let last = ys.last().copied().unwrap();
            prop_assert!((first - 3.5).abs() < 1e-9);
            prop_assert!((door.length() - last - 3.5).abs() < 1e-9);
        }
    }

    #[test]
    fn dados_match_material(case in ladder_case()) {
        let (archetype, width, height) = case;
        let design = build(archetype, width, height);
        let t = design.thickness();
        for component in &design.components {
            for dado in component.grooves_of(GrooveKind::Dado) {
                prop_assert_eq!(dado.width, t);
                prop_assert_eq!(dado.depth, 0.25);
            }
        }
    }

    #[test]
    fn wall_leaves_sum_to_overlaid_width(case in ladder_case()) {
        let (archetype, width, height) = case;
        let design = build(archetype, width, height);
        let doors = design.doors();
        if archetype == CabinetArchetype::Wall && width > 21.0 {
            prop_assert_eq!(doors.len(), 2);
            let sum: f64 = doors.iter().map(|d| d.width()).sum();
            prop_assert!((sum - (width + 1.5)).abs() < 1e-9);
        } else {
            prop_assert_eq!(doors.len(), 1);
        }
    }
}

#[test]
fn test_hardware_summary() {
    for archetype in CabinetArchetype::ALL {
        let design = build(archetype, 24.0, available_heights(archetype)[0]);
        let side = design.component(ComponentKind::SidePanel).unwrap();
        let per_panel = side.holes_of(HoleKind::ShelfPin).count();
        assert_eq!(design.shelf_pin_count(), per_panel * 2);
        assert!(design.hinge_count() >= 2);
    }
}
