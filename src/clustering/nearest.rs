use crate::Energy;
use crate::Point;

/// Index of and distance to the center closest to `x`.
///
/// Scans left to right keeping strictly smaller distances, so ties go to
/// the lowest index. Returns `None` only when `centers` is empty. NaN
/// distances never win, so callers reject non-finite points beforehand.
pub fn nearest<P: Point>(x: &P, centers: &[P]) -> Option<(usize, Energy)> {
    if centers.is_empty() {
        return None;
    }
    Some(
        centers
            .iter()
            .enumerate()
            .map(|(j, c)| (j, x.distance(c)))
            .fold((0, Energy::INFINITY), |(i, best), (j, d)| match d < best {
                true => (j, d),
                false => (i, best),
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;

    #[test]
    fn picks_the_closest_center() {
        let centers = vec![
            Vector::from([0., 0.]),
            Vector::from([10., 0.]),
            Vector::from([0., 10.]),
        ];
        let (j, d) = nearest(&Vector::from([1., 9.]), &centers).expect("centers");
        assert_eq!(j, 2);
        assert!((d - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn ties_go_to_the_lowest_index() {
        let centers = vec![
            Vector::from([0., 1.]),
            Vector::from([1., 0.]),
            Vector::from([0., 1.]),
        ];
        assert_eq!(nearest(&Vector::from([0., 0.]), &centers), Some((0, 1.)));
        assert_eq!(nearest(&Vector::from([0., 2.]), &centers), Some((0, 1.)));
    }

    #[test]
    fn nothing_is_nearest_to_no_centers() {
        assert_eq!(nearest(&Vector::from([0.]), &Vec::new()), None);
    }
}
