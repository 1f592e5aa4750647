//! Parsing, edge classification, and full grid assembly on the sample tile set

use std::error::Error;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tilestitch::SolveError;
use tilestitch::algorithm::assembly::GridSolver;
use tilestitch::algorithm::edges::EdgeIndex;
use tilestitch::algorithm::pipeline;
use tilestitch::algorithm::stitch::stitch;
use tilestitch::io::parser::parse_tiles;
use tilestitch::spatial::tile::Tile;
use tilestitch::spatial::transform;

const SAMPLE: &str = include_str!("data/sample.txt");

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn test_parse_sample_preserves_input_order() -> TestResult {
    let tiles = parse_tiles(SAMPLE)?;

    assert_eq!(tiles.len(), 9);
    assert_eq!(tiles.first().map(Tile::id), Some(2311));
    assert_eq!(tiles.last().map(Tile::id), Some(3079));
    assert!(tiles.iter().all(|tile| tile.side() == 10));
    Ok(())
}

#[test]
fn test_parse_reads_pixels_exactly() -> TestResult {
    let tiles = parse_tiles(SAMPLE)?;
    let tile = tiles
        .iter()
        .find(|tile| tile.id() == 1951)
        .ok_or("tile 1951 missing")?;

    assert_eq!(tile.pixels().get((0, 0)), Some(&true));
    assert_eq!(tile.pixels().get((0, 1)), Some(&false));
    assert_eq!(tile.pixels().get((9, 0)), Some(&true));
    assert_eq!(tile.pixels().get((9, 9)), Some(&false));
    assert_eq!(tile.pixels().iter().filter(|&&set| set).count(), 52);
    Ok(())
}

#[test]
fn test_parse_tolerates_crlf_and_trailing_blank_lines() -> TestResult {
    let crlf = SAMPLE.replace('\n', "\r\n") + "\r\n\r\n";
    assert_eq!(parse_tiles(&crlf)?, parse_tiles(SAMPLE)?);
    Ok(())
}

#[test]
fn test_parse_rejects_malformed_blocks() {
    let cases = [
        ("", "empty input"),
        ("Tile five:\n##\n##", "unparsable header"),
        ("Tile 5\n##\n##", "header without colon"),
        ("Tile 5:\n###\n##\n###", "short row"),
        ("Tile 5:\n###\n###", "non-square grid"),
        ("Tile 5:\n#x#\n...\n###", "invalid character"),
        ("Tile 5:\n##\n##\n\nTile 6:\n###\n#.#\n###", "mixed sizes"),
    ];

    for (input, label) in cases {
        let result = parse_tiles(input);
        assert!(
            matches!(result, Err(SolveError::MalformedInput { .. })),
            "expected MalformedInput for {label}, got {result:?}"
        );
    }
}

#[test]
fn test_solver_rejects_non_square_tile_counts() -> TestResult {
    let mut tiles = parse_tiles(SAMPLE)?;
    tiles.truncate(8);

    assert!(matches!(
        GridSolver::new(tiles),
        Err(SolveError::MalformedInput { .. })
    ));
    Ok(())
}

#[test]
fn test_edge_index_classifies_corners_edges_and_center() -> TestResult {
    let tiles = parse_tiles(SAMPLE)?;
    let index = EdgeIndex::build(&tiles);

    let mut by_boundary_sides = [0_usize; 5];
    for tile in &tiles {
        let boundary_sides = tile
            .edges()
            .iter()
            .filter(|edge| index.is_boundary(edge))
            .count();
        if let Some(slot) = by_boundary_sides.get_mut(boundary_sides) {
            *slot += 1;
        }
    }

    // 3x3 arrangement: four corners, four edge tiles, one interior tile
    assert_eq!(by_boundary_sides, [1, 4, 4, 0, 0]);

    let corner_ids: Vec<u64> = tiles
        .iter()
        .filter(|tile| {
            tile.edges()
                .iter()
                .filter(|edge| index.is_boundary(edge))
                .count()
                == 2
        })
        .map(Tile::id)
        .collect();
    assert_eq!(corner_ids.iter().product::<u64>(), 20_899_048_083_289);
    Ok(())
}

#[test]
fn test_solve_fills_every_position_with_distinct_tiles() -> TestResult {
    let tiles = parse_tiles(SAMPLE)?;
    let mut expected_ids: Vec<u64> = tiles.iter().map(Tile::id).collect();
    expected_ids.sort_unstable();

    let grid = GridSolver::new(tiles)?.solve()?;
    assert_eq!(grid.size(), 3);
    assert!(grid.is_full());

    let mut placed_ids: Vec<u64> = Vec::with_capacity(9);
    for y in 0..3 {
        for x in 0..3 {
            placed_ids.push(grid.placed_id(x, y).ok_or("unfilled position")?);
        }
    }
    placed_ids.sort_unstable();
    assert_eq!(placed_ids, expected_ids);
    Ok(())
}

#[test]
fn test_corner_product_matches_known_solution() -> TestResult {
    assert_eq!(pipeline::corner_product_for(SAMPLE)?, 20_899_048_083_289);
    Ok(())
}

#[test]
fn test_solve_is_deterministic() -> TestResult {
    let first = GridSolver::new(parse_tiles(SAMPLE)?)?.solve()?;
    let second = GridSolver::new(parse_tiles(SAMPLE)?)?.solve()?;

    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(first.placed_id(x, y), second.placed_id(x, y));
        }
    }
    assert_eq!(stitch(&first)?, stitch(&second)?);
    Ok(())
}

#[test]
fn test_stitched_image_side_drops_tile_borders() -> TestResult {
    let grid = GridSolver::new(parse_tiles(SAMPLE)?)?.solve()?;
    let image = stitch(&grid)?;

    // size * (N - 2) per axis: 3 * (10 - 2)
    assert_eq!(image.dim(), (24, 24));
    Ok(())
}

#[test]
fn test_duplicated_tiles_are_unsatisfiable_not_wrong() -> TestResult {
    let tiles = parse_tiles(SAMPLE)?;
    let template = tiles.first().ok_or("sample is empty")?;
    let duplicates: Vec<Tile> = (0..4).map(|_| template.clone()).collect();

    // Every edge now appears four times, so no boundary-class edge exists
    let result = GridSolver::new(duplicates)?.solve();
    assert!(matches!(
        result,
        Err(SolveError::UnsatisfiableConstraint { x: 0, y: 0, .. })
    ));
    Ok(())
}

#[test]
fn test_scrambled_input_reassembles_modulo_orientation() -> TestResult {
    let reference = stitch(&GridSolver::new(parse_tiles(SAMPLE)?)?.solve()?)?;

    let mut rng = StdRng::seed_from_u64(20);
    let mut scrambled: Vec<Tile> = parse_tiles(SAMPLE)?
        .iter()
        .map(|tile| {
            let orbit = tile.orbit();
            let pick = rng.random_range(0..orbit.len());
            orbit.into_iter().nth(pick).unwrap_or_else(|| tile.clone())
        })
        .collect();
    scrambled.shuffle(&mut rng);

    let reassembled = stitch(&GridSolver::new(scrambled)?.solve()?)?;
    assert!(
        transform::orientations(&reference).contains(&reassembled),
        "reassembled image is not an orientation of the reference"
    );
    Ok(())
}
