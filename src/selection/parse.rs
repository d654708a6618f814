use crate::error::InputError;
use crate::math::Point2;

/// Parses a point written as `X,Y` (whitespace around either number is allowed).
///
/// # Errors
///
/// Returns `InputError::MalformedPoint` if the text is not two comma-separated numbers.
pub fn parse_point(text: &str) -> Result<Point2, InputError> {
    let malformed = || InputError::MalformedPoint(text.to_owned());
    let (x, y) = text.split_once(',').ok_or_else(malformed)?;
    let x: f64 = x.trim().parse().map_err(|_| malformed())?;
    let y: f64 = y.trim().parse().map_err(|_| malformed())?;
    Ok(Point2::new(x, y))
}
