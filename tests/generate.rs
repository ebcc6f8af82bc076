use foam_bc::prelude::*;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn write_square_stl(path: &Path, side: f64) {
    let mut file = fs::File::create(path).unwrap();
    writeln!(file, "solid square").unwrap();
    for [a, b, c] in [
        [(0.0, 0.0), (side, 0.0), (side, side)],
        [(0.0, 0.0), (side, side), (0.0, side)],
    ] {
        writeln!(file, "facet normal 0 0 1\nouter loop").unwrap();
        for (x, y) in [a, b, c] {
            writeln!(file, "vertex {x} {y} 0").unwrap();
        }
        writeln!(file, "endloop\nendfacet").unwrap();
    }
    writeln!(file, "endsolid square").unwrap();
}

fn case_with_surfaces(names: &[&str]) -> tempfile::TempDir {
    let case = tempdir().unwrap();
    let stl_dir = case.path().join(DEFAULT_STL_DIRECTORY);
    fs::create_dir_all(&stl_dir).unwrap();
    for name in names {
        write_square_stl(&stl_dir.join(name), 5.0);
    }
    case
}

#[test]
fn empty_directory_keeps_domain_patches() {
    let case = case_with_surfaces(&[]);
    let output = BoundaryGenerator::new(BoundaryConfig::for_case(case.path()))
        .generate()
        .unwrap();

    let text = fs::read_to_string(output).unwrap();
    assert!(text.contains("    inlet\n"));
    assert!(text.contains("    \"(outlet|front|back|top)\"\n"));
    assert!(text.contains("    floor\n"));
    assert!(!text.contains("fixedGradient"));
    assert_eq!(text.matches("type ").count(), 3);
}

#[test]
fn every_surface_appears_once_in_name_order() {
    let case = case_with_surfaces(&["Teto.stl", "Ar_Condicionado_Sala.STL", "Parede_Sul.stl"]);
    let config = BoundaryConfig::for_case(case.path()).with_weather_temperature(301.0);
    let output = BoundaryGenerator::new(config).generate().unwrap();
    let text = fs::read_to_string(&output).unwrap();

    assert_eq!(output, case.path().join("0").join("T"));
    for name in ["Ar_Condicionado_Sala", "Parede_Sul", "Teto"] {
        assert_eq!(text.matches(&format!("    {name}\n")).count(), 1, "{name}");
    }
    let ac = text.find("Ar_Condicionado_Sala").unwrap();
    let wall = text.find("Parede_Sul").unwrap();
    let roof = text.find("Teto").unwrap();
    assert!(ac < wall && wall < roof);

    assert!(text.contains("        value           uniform 301.0;\n"));
    assert!(text.contains("        gradient        uniform 122.76;\n"));
    assert_eq!(text.matches("uniform 292.15;").count(), 2);
}

#[test]
fn per_surface_area_from_geometry() {
    let case = case_with_surfaces(&["Ar_Condicionado.stl"]);
    let config = BoundaryConfig::for_case(case.path())
        .with_power(3069.0)
        .with_patch_area(PatchAreaSource::PerSurface);
    let text = BoundaryGenerator::new(config).render().unwrap();

    // 5 m x 5 m square gives the same 25 m² as the default fixed area
    assert!(text.contains("        gradient        uniform 122.76;\n"));
}

#[test]
fn zero_patch_area_aborts_before_writing() {
    let case = case_with_surfaces(&["Ar_Condicionado.stl"]);
    let config = BoundaryConfig::for_case(case.path()).with_patch_area(PatchAreaSource::Fixed(0.0));
    let output = config.output_path.clone();

    let result = BoundaryGenerator::new(config).generate();
    assert!(matches!(result, Err(BoundaryError::InvalidArea { .. })));
    assert!(!output.exists());
}

#[test]
fn zero_patch_area_without_flux_surfaces_is_fine() {
    let case = case_with_surfaces(&["Parede.stl"]);
    let config = BoundaryConfig::for_case(case.path()).with_patch_area(PatchAreaSource::Fixed(0.0));
    assert!(BoundaryGenerator::new(config).generate().is_ok());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let case = case_with_surfaces(&["b.stl", "Ar_Condicionado.stl", "a.stl"]);
    let generator = BoundaryGenerator::new(BoundaryConfig::for_case(case.path()));

    let output = generator.generate().unwrap();
    let first = fs::read(&output).unwrap();
    generator.generate().unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn json_configuration_drives_generation() {
    let case = case_with_surfaces(&["Ar_Condicionado.stl"]);
    let stl_dir = case.path().join(DEFAULT_STL_DIRECTORY);
    let output = case.path().join("out").join("T");
    let config_path = case.path().join("boundary.json");
    let json = serde_json_config(&stl_dir, &output);
    fs::write(&config_path, json).unwrap();

    let config = BoundaryConfig::from_json_file(&config_path).unwrap();
    BoundaryGenerator::new(config).generate().unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("        gradient        uniform 0.01;\n"));
    assert!(text.contains("    floor\n    {\n        type            fixedValue;\n        value           uniform 285.5;\n"));
}

fn serde_json_config(stl_dir: &Path, output: &Path) -> String {
    format!(
        r#"{{
    "stl_directory": {stl:?},
    "output_path": {out:?},
    "power_w": 0.2,
    "patch_area": {{ "fixed": 1000.0 }},
    "constants": {{ "floor_temperature": 285.5 }}
}}"#,
        stl = stl_dir.display().to_string(),
        out = output.display().to_string(),
    )
}
