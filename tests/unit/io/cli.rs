//! Tests for argument parsing and the paint and components commands

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use gridbrush::GridError;
    use gridbrush::brush::BrushKind;
    use gridbrush::geometry::Point;
    use gridbrush::io::cli::{
        Cli, Command, FileProcessor, PaintArgs, output_path, paint_file, parse_color,
    };
    use gridbrush::io::image::{load_tile_grid, save_png};
    use image::{Rgba, RgbaImage};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const GRAY: [u8; 4] = [128, 128, 128, 255];
    const RED: [u8; 4] = [255, 0, 0, 255];

    /// 5x3 white map split by a gray column at x = 2
    fn write_walled_map(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let img = RgbaImage::from_fn(5, 3, |x, _| Rgba(if x == 2 { GRAY } else { WHITE }));
        save_png(&img, &path).expect("Failed to save image");
        path
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("Failed to parse arguments")
    }

    fn paint_args(input: PathBuf, brush: BrushKind, path: Vec<Point>) -> PaintArgs {
        PaintArgs {
            input,
            brush,
            path,
            color: RED,
            output: None,
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("ff8000"), Ok([255, 128, 0, 255]));
        assert_eq!(parse_color("#FF800040"), Ok([255, 128, 0, 64]));
        for bad in ["", "fff", "ff80001", "gg0000", "+f0000", "#ff80"] {
            assert!(parse_color(bad).is_err(), "'{bad}' should not parse");
        }
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("maps/level.png"), "_components"),
            PathBuf::from("maps/level_components.png")
        );
        assert_eq!(
            output_path(Path::new("level.png"), "_painted"),
            PathBuf::from("level_painted.png")
        );
    }

    #[test]
    fn test_parse_paint_command() {
        let cli = parse(&[
            "gridbrush", "paint", "map.png", "--brush", "rect-filled", "--path", "0,0", "2,3",
            "--color", "00ff00",
        ]);
        assert!(!cli.quiet);

        let Command::Paint(args) = cli.command else {
            panic!("expected paint command");
        };
        assert_eq!(args.input, PathBuf::from("map.png"));
        assert_eq!(args.brush, BrushKind::RectFilled);
        assert_eq!(args.path, vec![Point::new(0, 0), Point::new(2, 3)]);
        assert_eq!(args.color, [0, 255, 0, 255]);
        assert_eq!(args.output, None);
    }

    #[test]
    fn test_parse_components_command() {
        let cli = parse(&[
            "gridbrush", "components", "maps", "--at", "3,1", "-x", "808080", "-x", "000000",
            "--seed", "9", "-q",
        ]);
        assert!(cli.quiet);

        let Command::Components(args) = cli.command else {
            panic!("expected components command");
        };
        assert_eq!(args.target, PathBuf::from("maps"));
        assert_eq!(args.at, Some(Point::new(3, 1)));
        assert_eq!(args.obstacle, vec![GRAY, [0, 0, 0, 255]]);
        assert_eq!(args.seed, 9);
        assert!(!args.no_skip);
    }

    // Tests malformed gestures are rejected at parse time
    // Verified by defaulting unparsable positions to the origin
    #[test]
    fn test_rejects_bad_arguments() {
        for args in [
            vec!["gridbrush", "paint", "map.png", "--brush", "line", "--path", "1;2"],
            vec!["gridbrush", "paint", "map.png", "--brush", "spray", "--path", "1,2"],
            vec!["gridbrush", "paint", "map.png", "--brush", "line"],
            vec!["gridbrush", "components", "maps", "--obstacle", "red"],
        ] {
            assert!(Cli::try_parse_from(&args).is_err(), "{args:?} should not parse");
        }
    }

    #[test]
    fn test_paint_filled_rectangle() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_walled_map(temp_dir.path(), "map.png");

        let args = paint_args(input, BrushKind::RectFilled, vec![Point::new(0, 0), Point::new(1, 1)]);
        let (output, painted) = paint_file(&args).expect("Failed to paint file");

        assert_eq!(output, temp_dir.path().join("map_painted.png"));
        assert_eq!(painted, 4);

        let grid = load_tile_grid(&output).expect("Failed to load grid");
        assert_eq!(grid.color(Point::new(1, 1)), Some(RED));
        assert_eq!(grid.color(Point::new(0, 2)), Some(WHITE));
    }

    // Tests the fill brush stops at tiles of another type
    // Verified by painting with an always-true traversal rule
    #[test]
    fn test_paint_fill_respects_tile_types() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_walled_map(temp_dir.path(), "map.png");
        let output = temp_dir.path().join("out").join("filled.png");

        let mut args = paint_args(input, BrushKind::Fill, vec![Point::new(4, 2)]);
        args.output = Some(output.clone());
        let (written, painted) = paint_file(&args).expect("Failed to paint file");

        assert_eq!(written, output);
        assert_eq!(painted, 6);
        let grid = load_tile_grid(&output).expect("Failed to load grid");
        assert_eq!(grid.color(Point::new(3, 0)), Some(RED));
        assert_eq!(grid.color(Point::new(2, 0)), Some(GRAY));
        assert_eq!(grid.color(Point::new(0, 0)), Some(WHITE));
    }

    #[test]
    fn test_paint_clips_gesture_to_image() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_walled_map(temp_dir.path(), "map.png");

        let args = paint_args(input, BrushKind::Line, vec![Point::new(-2, 0), Point::new(6, 0)]);
        let (_, painted) = paint_file(&args).expect("Failed to paint file");
        assert_eq!(painted, 5);
    }

    #[test]
    fn test_components_command_writes_labels() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        write_walled_map(temp_dir.path(), "a.png");
        write_walled_map(temp_dir.path(), "b.png");
        let target = temp_dir.path().to_string_lossy().to_string();

        let cli = parse(&["gridbrush", "components", &target, "-q"]);
        FileProcessor::new(cli).process().expect("Failed to process target");

        for name in ["a_components.png", "b_components.png"] {
            let labels = load_tile_grid(&temp_dir.path().join(name)).expect("Failed to load grid");
            // Left, wall and right regions
            assert_eq!(labels.palette().len(), 3, "{name}");
            assert_eq!(labels.tile(Point::new(0, 0)), labels.tile(Point::new(1, 2)));
            assert_ne!(labels.tile(Point::new(0, 0)), labels.tile(Point::new(3, 0)));
        }

        // Outputs are neither relabeled nor treated as inputs on a rerun
        let rerun = parse(&["gridbrush", "components", &target, "-q", "--no-skip"]);
        FileProcessor::new(rerun).process().expect("Failed to process target");
        assert!(!temp_dir.path().join("a_components_components.png").exists());
    }

    #[test]
    fn test_components_obstacles_and_single_source() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_walled_map(temp_dir.path(), "map.png");
        let target = input.to_string_lossy().to_string();

        let cli = parse(&["gridbrush", "-q", "components", &target, "--at", "4,0", "-x", "808080"]);
        FileProcessor::new(cli).process().expect("Failed to process target");

        let img = image::open(temp_dir.path().join("map_components.png"))
            .expect("Failed to open image")
            .to_rgba8();
        assert_eq!(img.get_pixel(3, 2).0[3], u8::MAX);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(2, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_components_position_outside_image() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_walled_map(temp_dir.path(), "map.png");
        let target = input.to_string_lossy().to_string();

        let cli = parse(&["gridbrush", "-q", "components", &target, "--at", "9,9"]);
        let result = FileProcessor::new(cli).process();
        assert!(matches!(
            result,
            Err(GridError::InvalidParameter { parameter: "at", .. })
        ));
    }

    #[test]
    fn test_components_rejects_non_png_target() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let text = temp_dir.path().join("notes.txt");
        std::fs::write(&text, "not an image").expect("Failed to write file");
        let target = text.to_string_lossy().to_string();

        let cli = parse(&["gridbrush", "-q", "components", &target]);
        assert!(FileProcessor::new(cli).process().is_err());
    }
}
