use cabinetkit_construction::{generate_design, CabinetDesign, Configuration, DoorStyle};
use cabinetkit_core::{CabinetArchetype, Material};
use cabinetkit_drafting::{
    detailed, draw_commands, drawing_svg, render_svg, DrawCommand, DrawingTier, SvgOptions,
    ViewMode,
};

fn design() -> CabinetDesign {
    generate_design(
        CabinetArchetype::Wall,
        30.0,
        36.0,
        Material::plywood_3_4(),
        Configuration {
            door_style: DoorStyle::Shaker,
            shelf_count: 2,
            ..Configuration::default()
        },
    )
    .unwrap()
}

#[test]
fn test_svg_coordinates_match_draw_commands() {
    let options = SvgOptions::default();
    let geometry = detailed::generate(&design(), ViewMode::Isometric);
    let commands = draw_commands(&geometry, &options.fit(&geometry));
    let svg = render_svg(&geometry, &options);

    let mut checked = 0;
    for command in &commands {
        if let DrawCommand::Line { x1, y1, x2, y2 } = command {
            let attrs = format!(
                r#"x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}""#,
                x1, y1, x2, y2
            );
            assert!(svg.contains(&attrs), "missing {attrs}");
            checked += 1;
        }
    }
    assert_eq!(svg.matches("<line ").count(), checked);
}

#[test]
fn test_svg_is_deterministic() {
    let options = SvgOptions::default();
    for view in ViewMode::ALL {
        for tier in [DrawingTier::Basic, DrawingTier::Detailed] {
            let a = drawing_svg(&design(), view, tier, &options);
            let b = drawing_svg(&design(), view, tier, &options);
            assert_eq!(a, b, "{view} {tier}");
        }
    }
}

#[test]
fn test_drawing_fits_canvas() {
    let options = SvgOptions::default();
    let geometry = detailed::generate(&design(), ViewMode::Elevation);
    let commands = draw_commands(&geometry, &options.fit(&geometry));
    let eps = 1e-6;
    for command in &commands {
        if let DrawCommand::Line { x1, y1, x2, y2 } = command {
            for x in [x1, x2] {
                assert!(*x >= options.padding - eps && *x <= options.width - options.padding + eps);
            }
            for y in [y1, y2] {
                assert!(*y >= options.padding - eps && *y <= options.height - options.padding + eps);
            }
        }
    }
}

#[test]
fn test_basic_svg_has_no_text() {
    let svg = drawing_svg(
        &design(),
        ViewMode::Elevation,
        DrawingTier::Basic,
        &SvgOptions::default(),
    );
    assert!(svg.contains("<line "));
    assert!(!svg.contains("<text"));
}

#[test]
fn test_detailed_svg_labels_escaped() {
    let svg = drawing_svg(
        &design(),
        ViewMode::Elevation,
        DrawingTier::Detailed,
        &SvgOptions::default(),
    );
    assert!(svg.contains("DADO 3/4&quot; x 1/4&quot; DP"));
    assert!(!svg.contains("3/4\" x"));
}
