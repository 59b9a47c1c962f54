use cabinetkit_construction::{
    available_heights, available_widths, generate_design, CabinetDesign, Configuration,
};
use cabinetkit_core::{CabinetArchetype, Material};
use cabinetkit_drafting::{basic, detailed, ScreenTransform, SemanticColor, ViewMode};
use proptest::prelude::*;

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

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Every basic line has a detailed line with the same meaning at the same screen position
fn tiers_agree(design: &CabinetDesign, view: ViewMode) -> bool {
    let transform = ScreenTransform::new(7.5, 40.0, 500.0);
    let basic_lines = basic::render(design, view, &transform);
    let detailed = detailed::generate(design, view);

    basic_lines.iter().all(|b| {
        detailed.lines.iter().any(|d| {
            let s = transform.to_screen(view, d.start);
            let e = transform.to_screen(view, d.end);
            d.color == b.color
                && d.style == b.style
                && close(s.x, b.start.x)
                && close(s.y, b.start.y)
                && close(e.x, b.end.x)
                && close(e.y, b.end.y)
        })
    })
}

#[test]
fn test_tiers_agree_for_every_archetype_and_view() {
    for archetype in CabinetArchetype::ALL {
        let width = available_widths(archetype)[3];
        let height = available_heights(archetype)[0];
        let d = design(archetype, width, height);
        for view in ViewMode::ALL {
            assert!(tiers_agree(&d, view), "{archetype} {view}");
        }
    }
}

#[test]
fn test_door_split_consistent_across_tiers() {
    for (archetype, width, height, leaves) in [
        (CabinetArchetype::Wall, 30.0, 30.0, 2),
        (CabinetArchetype::Wall, 21.0, 30.0, 1),
        (CabinetArchetype::Base, 36.0, 30.0, 1),
        (CabinetArchetype::Tall, 36.0, 91.5, 1),
    ] {
        let d = design(archetype, width, height);
        let basic_doors = basic::render(&d, ViewMode::Elevation, &ScreenTransform::default())
            .iter()
            .filter(|l| l.color == SemanticColor::OverlayDoor)
            .count();
        assert_eq!(basic_doors, 4 * leaves, "{archetype} {width}");
        assert_eq!(d.doors().len(), leaves);
    }
}

#[test]
fn test_detailed_is_world_units() {
    let d = design(CabinetArchetype::Wall, 24.0, 30.0);
    let geometry = detailed::generate(&d, ViewMode::Elevation);
    let bounds = geometry.bounds();
    // Drawing spans the cabinet plus callouts and dimension offsets, in inches
    assert!(bounds.width() > 24.0 && bounds.width() < 60.0);
    assert!(bounds.height() > 30.0 && bounds.height() < 60.0);
}

#[test]
fn test_every_colour_used_in_isometric() {
    let d = design(CabinetArchetype::Base, 24.0, 30.0);
    let geometry = detailed::generate(&d, ViewMode::Isometric);
    for color in [
        SemanticColor::Structure,
        SemanticColor::OverlayDoor,
        SemanticColor::Hidden,
        SemanticColor::EdgeBand,
        SemanticColor::Shelf,
        SemanticColor::Hardware,
        SemanticColor::Dimension,
    ] {
        assert!(geometry.lines_of(color).next().is_some(), "{color}");
    }
}

fn ladder_case() -> impl Strategy<Value = (CabinetArchetype, f64, f64)> {
    prop::sample::select(CabinetArchetype::ALL.to_vec()).prop_flat_map(|archetype| {
        (
            Just(archetype),
            prop::sample::select(available_widths(archetype)),
            prop::sample::select(available_heights(archetype)),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn tiers_agree_across_ladder(
        case in ladder_case(),
        view in prop::sample::select(ViewMode::ALL.to_vec()),
    ) {
        let (archetype, width, height) = case;
        prop_assert!(tiers_agree(&design(archetype, width, height), view));
    }
}
