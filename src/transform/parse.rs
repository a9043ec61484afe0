//! Reading a computed `transform` value back into a matrix

use crate::primitives::Matrix4;

/// Parse `none`, `matrix(...)` or `matrix3d(...)`.
///
/// Returns `None` for anything else, including a function with the wrong
/// number of arguments or a non-finite component.
pub fn parse_transform(css: &str) -> Option<Matrix4> {
    let css = css.trim();
    if css.is_empty() || css.eq_ignore_ascii_case("none") {
        return Some(Matrix4::IDENTITY);
    }

    let (name, rest) = css.split_once('(')?;
    let body = rest.trim_end().strip_suffix(')')?;
    let values = body
        .split(',')
        .map(|v| v.trim().parse::<f64>().ok().filter(|n| n.is_finite()))
        .collect::<Option<Vec<_>>>()?;

    match (name.trim().to_ascii_lowercase().as_str(), values.as_slice()) {
        ("matrix3d", components) => {
            let components: [f64; 16] = components.try_into().ok()?;
            Some(Matrix4::from_column_major(components))
        }
        ("matrix", &[a, b, c, d, e, f]) => Some(Matrix4::from_rows([
            [a, c, 0.0, e],
            [b, d, 0.0, f],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Vector3;

    #[test]
    fn none_is_identity() {
        assert_eq!(parse_transform("none"), Some(Matrix4::IDENTITY));
        assert_eq!(parse_transform("  "), Some(Matrix4::IDENTITY));
    }

    #[test]
    fn matrix3d_is_column_major() {
        let m = parse_transform("matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 42, 69, 99, 1)").unwrap();
        assert_eq!(m, Matrix4::translation(Vector3::new(42.0, 69.0, 99.0)));
    }

    #[test]
    fn matrix_2d_is_embedded() {
        let m = parse_transform("matrix(0.5, 0, 0, 2, 25, -50)").unwrap();
        assert_eq!(
            m.to_css(),
            "matrix3d(0.5, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 25, -50, 0, 1)"
        );
    }

    #[test]
    fn malformed_is_none() {
        assert_eq!(parse_transform("matrix3d(1, 2, 3)"), None);
        assert_eq!(parse_transform("matrix(1, 0, 0, 1, 0)"), None);
        assert_eq!(parse_transform("rotate(45deg)"), None);
        assert_eq!(parse_transform("matrix(1, 0, 0, 1, 0, x)"), None);
        assert_eq!(parse_transform("matrix(1, 0, 0, 1, 0, 0"), None);
    }

    #[test]
    fn serialized_output_parses_back() {
        let css = "matrix3d(0.928781, 0.019905, 0.370094, 0, -0.089556, 0.98102, 0.171987, 0, \
                   -0.359646, -0.192883, 0.912935, 0, 3.5, -2, 0, 1)";
        assert_eq!(parse_transform(css).unwrap().to_css(), css);
    }
}
