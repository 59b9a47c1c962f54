use cabinetkit_construction::{generate_design, ComponentKind, Configuration, CutList};
use cabinetkit_core::{CabinetArchetype, Material};

fn cut_list(archetype: CabinetArchetype, width: f64, height: f64, config: Configuration) -> CutList {
    let design =
        generate_design(archetype, width, height, Material::plywood_3_4(), config).unwrap();
    CutList::from_design(&design)
}

#[test]
fn test_plywood34_round_trip() {
    for archetype in CabinetArchetype::ALL {
        let height = cabinetkit_construction::available_heights(archetype)[0];
        let list = cut_list(archetype, 24.0, height, Configuration::default());

        let mut sqft = 0.0;
        for row in &list.rows {
            if row.thickness == 0.75 || row.thickness == 0.875 {
                sqft += row.width * row.length * f64::from(row.quantity) / 144.0;
            }
        }
        assert_eq!(list.totals.plywood34, (sqft * 1.10).ceil() as u32, "{archetype}");
    }
}

#[test]
fn test_doubling_shelves_adds_one_shelf_area() {
    let one = cut_list(
        CabinetArchetype::Wall,
        24.0,
        30.0,
        Configuration {
            shelf_count: 1,
            ..Configuration::default()
        },
    );
    let two = cut_list(
        CabinetArchetype::Wall,
        24.0,
        30.0,
        Configuration {
            shelf_count: 2,
            ..Configuration::default()
        },
    );

    let shelf = one.rows_of(ComponentKind::Shelf).next().unwrap();
    let shelf_sqft = shelf.width * shelf.length / 144.0;
    let delta = (two.raw.sheet_34_sqft - one.raw.sheet_34_sqft) * 1.10;
    assert!((delta - shelf_sqft * 1.10).abs() < 1e-9);
    assert!(two.totals.plywood34 >= one.totals.plywood34);
}

#[test]
fn test_no_shelf_rows_when_disabled() {
    let list = cut_list(
        CabinetArchetype::Base,
        18.0,
        30.0,
        Configuration {
            has_adjustable_shelf: false,
            ..Configuration::default()
        },
    );
    assert_eq!(list.rows_of(ComponentKind::Shelf).count(), 0);
}

#[test]
fn test_cut_list_serializes() {
    let list = cut_list(CabinetArchetype::Tall, 24.0, 79.5, Configuration::default());
    let json = serde_json::to_value(&list).unwrap();
    assert!(json["rows"].as_array().unwrap().len() >= 8);
    assert!(json["totals"]["plywood34"].as_u64().unwrap() > 0);
    assert!(json["totals"]["edge_banding"].as_u64().unwrap() > 0);
}
