use thiserror::Error;

/// A single point on an offer or bid curve.
///
/// The meaning of `quantity` depends on the curve's [`CurveMode`]: either the
/// cumulative MW available at or below this price, or the MW size of this
/// block directly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// Marginal price of this segment ($/MWh)
    pub price: f64,
    /// Quantity coordinate (MW), interpreted per the curve mode
    pub quantity: f64,
}

/// How the quantity coordinate of a curve is to be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CurveMode {
    /// Quantities are cumulative: point q gives the total MW available at or
    /// below its price. Block sizes are recovered by differencing.
    Cumulative,
    /// Quantities are block sizes directly, no differencing required.
    Block,
}

/// An ordered offer or bid curve for a single entity and period.
///
/// Construction validates only that the points exist and are finite. It does
/// *not* check that cumulative quantities are non-decreasing, nor that prices
/// follow merit order: those are trust boundaries on the upstream dataset.
/// A violated quantity ordering surfaces later as a negative derived block
/// limit; a violated price ordering yields a feasible but economically
/// meaningless dispatch.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CurveDto", into = "CurveDto")
)]
pub struct OfferCurve {
    mode: CurveMode,
    points: Vec<CurvePoint>,
}

impl OfferCurve {
    /// Creates a new curve from a sequence of points.
    ///
    /// Returns a [`CurveError`] if no points are provided or any coordinate
    /// is NaN or infinite.
    pub fn new(mode: CurveMode, points: Vec<CurvePoint>) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::Empty);
        }

        for point in &points {
            if point.price.is_nan() || point.quantity.is_nan() {
                return Err(CurveError::Nan);
            } else if point.price.is_infinite() || point.quantity.is_infinite() {
                return Err(CurveError::Infinite);
            }
        }

        Ok(Self { mode, points })
    }

    /// The quantity interpretation for this curve
    pub fn mode(&self) -> CurveMode {
        self.mode
    }

    /// The curve's points, in their supplied order
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// The number of blocks this curve will produce
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no points (never true for a validated curve)
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The ways in which a supplied curve can be rejected outright
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurveError {
    /// No points were provided
    #[error("no points provided")]
    Empty,
    /// A coordinate value was NaN
    #[error("NaN value encountered")]
    Nan,
    /// A coordinate value was infinite
    #[error("infinite value encountered")]
    Infinite,
}

/// DTO for offer curves, so deserialization funnels through validation
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveDto {
    mode: CurveMode,
    points: Vec<CurvePoint>,
}

impl TryFrom<CurveDto> for OfferCurve {
    type Error = CurveError;

    fn try_from(value: CurveDto) -> Result<Self, Self::Error> {
        OfferCurve::new(value.mode, value.points)
    }
}

impl From<OfferCurve> for CurveDto {
    fn from(value: OfferCurve) -> Self {
        Self {
            mode: value.mode,
            points: value.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert_eq!(
            OfferCurve::new(CurveMode::Cumulative, vec![]).unwrap_err(),
            CurveError::Empty
        );
    }

    #[test]
    fn rejects_nan() {
        let points = vec![CurvePoint {
            price: f64::NAN,
            quantity: 1.0,
        }];
        assert_eq!(
            OfferCurve::new(CurveMode::Block, points).unwrap_err(),
            CurveError::Nan
        );
    }

    #[test]
    fn rejects_infinite() {
        let points = vec![CurvePoint {
            price: 600.0,
            quantity: f64::INFINITY,
        }];
        assert_eq!(
            OfferCurve::new(CurveMode::Cumulative, points).unwrap_err(),
            CurveError::Infinite
        );
    }

    #[test]
    fn accepts_unordered_prices() {
        // Merit order is a trust boundary, not a validation rule
        let points = vec![
            CurvePoint {
                price: 800.0,
                quantity: 0.5,
            },
            CurvePoint {
                price: 600.0,
                quantity: 1.0,
            },
        ];
        assert!(OfferCurve::new(CurveMode::Cumulative, points).is_ok());
    }

    #[test]
    fn serde_round_trip() {
        let curve = OfferCurve::new(
            CurveMode::Cumulative,
            vec![
                CurvePoint {
                    price: 600.0,
                    quantity: 0.5,
                },
                CurvePoint {
                    price: 800.0,
                    quantity: 1.0,
                },
            ],
        )
        .unwrap();

        let json = serde_json::to_string(&curve).unwrap();
        let back: OfferCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(curve, back);
    }
}
