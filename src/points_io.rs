use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use euclid_tsp::Point;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read points from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: expected two coordinates `x y`", .path.display())]
    Parse { path: PathBuf, line: usize },

    #[error("{} does not contain any points", .path.display())]
    Empty { path: PathBuf },
}

/// Reads one `x y` pair per line. Blank lines are skipped.
pub fn load_points(filename: &Path) -> Result<Vec<Point>, InputError> {
    let io_error = |source| InputError::Io {
        path: filename.to_path_buf(),
        source,
    };
    let file = File::open(filename).map_err(io_error)?;
    let reader = BufReader::new(file);

    let mut points = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(io_error)?;
        if line.trim().is_empty() {
            continue;
        }
        let point = parse_point(&line).ok_or_else(|| InputError::Parse {
            path: filename.to_path_buf(),
            line: i + 1,
        })?;
        points.push(point);
    }

    if points.is_empty() {
        return Err(InputError::Empty {
            path: filename.to_path_buf(),
        });
    }
    log::info!("Read {} points from {:?}", points.len(), filename);
    Ok(points)
}

fn parse_point(line: &str) -> Option<Point> {
    let mut coords = line.split_whitespace().map(|s| s.parse::<f64>());
    match (coords.next(), coords.next(), coords.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Some(Point::new(x, y)),
        _ => None,
    }
}

pub fn write_points(filename: &Path, points: &[Point]) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    for p in points {
        writeln!(writer, "{} {}", p.x, p.y)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod test_points_io {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tsp-points-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_round_trip() {
        let path = scratch("round_trip.txt");
        let points = vec![Point::new(0.5, 1.25), Point::new(-3.0, 4.0)];

        write_points(&path, &points).unwrap();
        let read = load_points(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read, points);
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let path = scratch("blank.txt");
        std::fs::write(&path, "  1 2\n\n3\t4  \n").unwrap();

        let read = load_points(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_parse_error() {
        let path = scratch("bad.txt");
        std::fs::write(&path, "1 2\n3 x\n").unwrap();

        let err = load_points(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, InputError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_empty_file() {
        let path = scratch("empty.txt");
        std::fs::write(&path, "\n").unwrap();

        let err = load_points(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, InputError::Empty { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_points(&scratch("does-not-exist.txt")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1e2 -0.5"), Some(Point::new(100.0, -0.5)));
        assert_eq!(parse_point("1 2 3"), None);
        assert_eq!(parse_point("1"), None);
    }
}
