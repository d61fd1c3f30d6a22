use std::fs;
use std::path::Path;
use std::process::Command;

use gridbench::harness::{collect_reports, compare_reports, run_producers, CommandProducer, Producer};
use gridbench::grid::codec::read_grid_file;
use gridbench::{ResultReport, RunMetadata};

const SCENARIO: &str = "2,0,0\n1,1,0\n0,0,3\n";

fn write_grid(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("map.csv");
    fs::write(&path, text).unwrap();
    path
}

fn run(bin: &str, args: &[&str]) -> Option<i32> {
    Command::new(bin).args(args).status().unwrap().code()
}

#[test]
fn test_astar_binary() {
    let dir = tempfile::tempdir().unwrap();
    let grid = write_grid(dir.path(), SCENARIO);
    let out = dir.path().join("result_AStar_Rust.json");

    let code = run(env!("CARGO_BIN_EXE_astar"), &[grid.to_str().unwrap(), out.to_str().unwrap(), "Manhattan"]);
    assert_eq!(code, Some(0));

    let report = ResultReport::read_from(&out).unwrap();
    assert_eq!(report.status_code, 200);
    assert_eq!(report.path_length, 4);
    assert_eq!(report.algorithm_map, vec![vec![0, 1, 2], vec![-1, -1, 3], vec![-1, -1, 4]]);
    assert_eq!(report.algorithm, "AStar");
    assert_eq!(report.language, "Rust");
}

#[test]
fn test_astar_binary_rejects_heuristic() {
    let dir = tempfile::tempdir().unwrap();
    let grid = write_grid(dir.path(), SCENARIO);
    let out = dir.path().join("out.json");

    for extra in [&["chebyshev"][..], &[][..]] {
        let mut args = vec![grid.to_str().unwrap(), out.to_str().unwrap()];
        args.extend_from_slice(extra);
        assert_eq!(run(env!("CARGO_BIN_EXE_astar"), &args), Some(401 % 256));
        assert_eq!(ResultReport::read_from(&out).unwrap().status_code, 401);
    }
}

#[test]
fn test_wavefront_binary_status_codes() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");
    let bin = env!("CARGO_BIN_EXE_wavefront");

    let cases = [
        ("2,1,3\n", 404),
        ("0,0,3\n", 402),
        ("2,0,0\n", 403),
        ("2,2,3\n", 422),
        ("2,3,3\n", 433),
        ("2,x,3\n", 500),
    ];
    for (text, status) in cases {
        let grid = write_grid(dir.path(), text);
        let code = run(bin, &[grid.to_str().unwrap(), out.to_str().unwrap()]);
        assert_eq!(code, Some(status % 256), "{text:?}");
        assert_eq!(ResultReport::read_from(&out).unwrap().status_code, status, "{text:?}");
    }

    let missing = dir.path().join("absent.csv");
    assert_eq!(run(bin, &[missing.to_str().unwrap(), out.to_str().unwrap()]), Some(500 % 256));
}

#[test]
fn test_brushfire_binary_sources() {
    let dir = tempfile::tempdir().unwrap();
    let grid = write_grid(dir.path(), SCENARIO);
    let out = dir.path().join("out.json");
    let bin = env!("CARGO_BIN_EXE_brushfire");

    assert_eq!(run(bin, &[grid.to_str().unwrap(), out.to_str().unwrap()]), Some(0));
    let clearance = ResultReport::read_from(&out).unwrap();
    assert_eq!(clearance.algorithm_map[1], vec![0, 0, 1]);
    assert_eq!(clearance.path_length, -1);

    let args = [grid.to_str().unwrap(), out.to_str().unwrap(), "--source", "start", "--language", "RustStart"];
    assert_eq!(run(bin, &args), Some(0));
    let flood = ResultReport::read_from(&out).unwrap();
    assert_eq!(flood.algorithm_map[2], vec![6, 5, 4]);
    assert_eq!(flood.language, "RustStart");
}

#[test]
fn test_gridgen_binary() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("random.csv");
    let args = [out.to_str().unwrap(), "--rows", "6", "--cols", "9", "--seed", "7", "--frame"];
    assert_eq!(run(env!("CARGO_BIN_EXE_gridgen"), &args), Some(0));

    let grid = read_grid_file(&out).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (6, 9));
    assert!(grid.start().is_ok());
    assert!(grid.goal().is_ok());

    // same seed, same map
    let again = dir.path().join("again.csv");
    let args = [again.to_str().unwrap(), "--rows", "6", "--cols", "9", "--seed", "7", "--frame"];
    assert_eq!(run(env!("CARGO_BIN_EXE_gridgen"), &args), Some(0));
    assert_eq!(fs::read_to_string(&out).unwrap(), fs::read_to_string(&again).unwrap());
}

#[test]
fn test_gridgen_binary_rejects_bad_parameters() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("random.csv");
    let bin = env!("CARGO_BIN_EXE_gridgen");

    let nan = [out.to_str().unwrap(), "--rows", "3", "--cols", "3", "--density", "nan"];
    assert_eq!(run(bin, &nan), Some(1));

    let thin = [out.to_str().unwrap(), "--rows", "2", "--cols", "5", "--frame"];
    assert_eq!(run(bin, &thin), Some(1));
    assert!(!out.exists());
}

#[test]
fn test_harness_over_binaries() {
    let dir = tempfile::tempdir().unwrap();
    let grid = write_grid(dir.path(), "2,0,0,0\n0,1,1,0\n0,0,0,3\n");

    // the same search under two language tags should agree on everything but timing
    let producers: Vec<Box<dyn Producer>> = vec![
        Box::new(CommandProducer::new(env!("CARGO_BIN_EXE_astar"), RunMetadata::new("AStar", "Rust"))),
        Box::new(
            CommandProducer::new(env!("CARGO_BIN_EXE_wavefront"), RunMetadata::new("Wavefront", "Rust")),
        ),
        Box::new(
            CommandProducer::new(env!("CARGO_BIN_EXE_wavefront"), RunMetadata::new("Wavefront", "Tagged"))
                .with_args(["--language", "Tagged"]),
        ),
    ];
    let outcomes = run_producers(&producers, &grid, dir.path(), None);
    // astar gets no heuristic: a 401 report, not a harness error
    assert_eq!(outcomes[0].1.as_ref().unwrap().status_code, 401);
    assert_eq!(outcomes[1].1.as_ref().unwrap().path_length, 5);

    let groups = collect_reports(dir.path()).unwrap();
    assert_eq!(groups["Wavefront"].len(), 2);
    assert!(compare_reports(&groups).is_empty());
}
