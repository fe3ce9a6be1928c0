//! Centroid of listing coordinates for the search-page map pane.

/// Arithmetic center of a set of (lat, long) pairs. `None` when the set is
/// empty; the caller falls back to the default map center.
pub fn center_of(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lat_sum, long_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, long), p| (lat + p.0, long + p.1));
    Some((lat_sum / n, long_sum / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_center() {
        assert_eq!(center_of(&[]), None);
    }

    #[test]
    fn single_point_is_its_own_center() {
        assert_eq!(center_of(&[(30.7, 76.8)]), Some((30.7, 76.8)));
    }

    #[test]
    fn center_averages_coordinates() {
        let points = [(30.0, 76.0), (31.0, 77.0)];
        let (lat, long) = center_of(&points).unwrap();
        assert!((lat - 30.5).abs() < 1e-9);
        assert!((long - 76.5).abs() < 1e-9);
    }
}
