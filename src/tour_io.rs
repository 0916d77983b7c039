use std::{
    error::Error,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use euclid_tsp::{DistanceMatrix, Node, Tour};

/// Reads a tour written by [`export_tour`] and recomputes its length.
pub fn import_tour(filename: &Path, dist: &DistanceMatrix) -> Result<Tour, Box<dyn Error>> {
    let file = File::open(filename)?;
    let reader = BufReader::new(file);

    let mut ids: Vec<Node> = vec![];
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            ids.push(Node::new(line.trim().parse::<usize>()?));
        }
    }
    if !is_closed_permutation(&ids, dist.n()) {
        return Err(format!("{:?} is not a tour over {} points", filename, dist.n()).into());
    }
    Ok(Tour::with_cost_from(ids, dist))
}

fn is_closed_permutation(ids: &[Node], n: usize) -> bool {
    if n == 1 {
        return ids == [Node::new(0)];
    }
    if ids.len() != n + 1 || ids.first() != ids.last() {
        return false;
    }
    let mut open: Vec<usize> = ids[..n].iter().map(|node| node.id()).collect();
    open.sort_unstable();
    open.into_iter().eq(0..n)
}

pub fn export_tour(filename: &Path, tour: &Tour) -> Result<(), Box<dyn Error>> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    for node in tour {
        writeln!(writer, "{}", node.id())?;
    }
    writer.flush()?;

    Ok(())
}

/// `0 -> 3 -> 2 -> 1 -> 0`
pub fn format_tour(tour: &Tour) -> String {
    tour.nodes()
        .iter()
        .map(|n| n.id().to_string())
        .collect::<Vec<String>>()
        .join(" -> ")
}

#[cfg(test)]
mod test_tour_io {
    use super::*;
    use euclid_tsp::{compute_approximate_tour, Point};

    #[test]
    fn test_export_import() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let dist = DistanceMatrix::new(&points).unwrap();
        let tour = compute_approximate_tour(&points).unwrap();
        let path = std::env::temp_dir().join(format!("tsp-tour-{}.txt", std::process::id()));

        export_tour(&path, &tour).unwrap();
        let read = import_tour(&path, &dist).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read, tour);
        assert_eq!(format_tour(&tour), "0 -> 3 -> 2 -> 1 -> 0");
    }

    #[test]
    fn test_is_closed_permutation() {
        let nodes = |ids: &[usize]| ids.iter().map(|&n| Node::new(n)).collect::<Vec<Node>>();
        assert!(is_closed_permutation(&nodes(&[1, 0, 2, 1]), 3));
        assert!(!is_closed_permutation(&nodes(&[0, 1, 1, 0]), 3));
        assert!(!is_closed_permutation(&nodes(&[0, 1, 2]), 3));
        assert!(!is_closed_permutation(&nodes(&[0, 1, 3, 0]), 3));
        assert!(is_closed_permutation(&nodes(&[0]), 1));
    }
}
