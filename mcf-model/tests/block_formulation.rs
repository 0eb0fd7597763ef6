use approx::assert_relative_eq;
use mcf_core::models::{BidCategory, COMMITMENT_GROUP, CurveMode, CurvePoint, Map, OfferCurve};
use mcf_model::{
    FormulationError, Model, Relation, Variable, add_block_variables, block_properties,
};
use rstest::*;

type Curves = Map<(&'static str, usize), OfferCurve>;

fn curve(mode: CurveMode, points: &[(f64, f64)]) -> OfferCurve {
    OfferCurve::new(
        mode,
        points
            .iter()
            .map(|&(price, quantity)| CurvePoint { price, quantity })
            .collect(),
    )
    .unwrap()
}

/// The two-generator, two-period offer curves used throughout the suite
#[fixture]
fn offer_curves() -> Curves {
    let g1 = [(600.0, 0.5), (800.0, 1.0), (825.0, 5.0)];
    let g2 = [(400.0, 0.5), (600.0, 1.0), (625.0, 5.0)];

    let mut curves = Curves::default();
    for period in 0..2 {
        curves.insert(("g1", period), curve(CurveMode::Cumulative, &g1));
        curves.insert(("g2", period), curve(CurveMode::Cumulative, &g2));
    }
    curves
}

/// A model with the aggregate generation variables already in place
#[fixture]
fn model() -> Model<&'static str> {
    let mut model = Model::new(2);
    for entity in ["g1", "g2"] {
        for period in 0..2 {
            model.add_scalar_variable("generation", entity, period, Variable::non_negative());
        }
    }
    model
}

#[rstest]
fn backward_difference_fixture(offer_curves: Curves) {
    let properties = block_properties(&offer_curves).unwrap();
    let set = &properties[&("g1", 0)];

    assert_eq!(set.prices, vec![600.0, 800.0, 825.0]);
    assert_eq!(set.limits, vec![0.5, 0.5, 4.0]);
}

#[rstest]
fn block_limits_round_trip(offer_curves: Curves) {
    let properties = block_properties(&offer_curves).unwrap();

    // The limits of each block set must sum back to the curve's maximum
    // cumulative quantity.
    for ((entity, period), curve) in &offer_curves {
        let maximum = curve.points().last().unwrap().quantity;
        let total: f64 = properties[&(*entity, *period)].limits.iter().sum();
        assert_relative_eq!(total, maximum);
    }
}

#[rstest]
fn single_block_curve_needs_no_differencing() {
    let mut curves = Curves::default();
    curves.insert(("g1", 0), curve(CurveMode::Cumulative, &[(600.0, 2.0)]));

    let properties = block_properties(&curves).unwrap();
    assert_eq!(properties[&("g1", 0)].limits, vec![2.0]);
}

#[rstest]
fn block_mode_uses_quantities_directly() {
    let mut curves = Curves::default();
    curves.insert(
        ("g1", 0),
        curve(CurveMode::Block, &[(600.0, 0.5), (800.0, 0.5), (825.0, 4.0)]),
    );

    let properties = block_properties(&curves).unwrap();
    assert_eq!(properties[&("g1", 0)].limits, vec![0.5, 0.5, 4.0]);
}

#[rstest]
fn decreasing_cumulative_quantities_fail_fast() {
    let mut curves = Curves::default();
    curves.insert(
        ("g1", 0),
        curve(CurveMode::Cumulative, &[(600.0, 1.0), (800.0, 0.5)]),
    );

    let err = block_properties(&curves).unwrap_err();
    assert!(matches!(err, FormulationError::Configuration(_)));
}

#[rstest]
fn missing_aggregate_variable_fails(offer_curves: Curves) {
    let properties = block_properties(&offer_curves).unwrap();
    let mut empty: Model<&'static str> = Model::new(2);

    let err = add_block_variables(
        &mut empty,
        BidCategory::Generation,
        &["g1", "g2"],
        &properties,
    )
    .unwrap_err();

    match err {
        FormulationError::MissingVariable { group, entity, period } => {
            assert_eq!(group, "generation");
            assert_eq!(entity, "g1");
            assert_eq!(period, 0);
        }
        other => panic!("expected MissingVariable, got {other:?}"),
    }
}

#[rstest]
fn linking_ties_aggregate_to_block_sum(offer_curves: Curves, mut model: Model<&'static str>) {
    let properties = block_properties(&offer_curves).unwrap();
    add_block_variables(
        &mut model,
        BidCategory::Generation,
        &["g1", "g2"],
        &properties,
    )
    .unwrap();

    for entity in ["g1", "g2"] {
        for period in 0..2 {
            let aggregate = model.scalar_variable("generation", &entity, period).unwrap();
            let aux = model
                .block_variables("generation_blocks", &entity, period)
                .unwrap()
                .to_vec();
            assert_eq!(aux.len(), 3);

            let link = model
                .scalar_constraint("generation_block_link", &entity, period)
                .unwrap();
            let row = model.constraint(link);

            assert_eq!(row.relation, Relation::Equal);
            assert_eq!(row.rhs, 0.0);
            assert_eq!(row.expr.coefficient(aggregate), 1.0);
            for var in aux {
                assert_eq!(row.expr.coefficient(var), -1.0);
            }
        }
    }
}

#[rstest]
fn static_bounds_without_commitment(offer_curves: Curves, mut model: Model<&'static str>) {
    let properties = block_properties(&offer_curves).unwrap();
    add_block_variables(
        &mut model,
        BidCategory::Generation,
        &["g1", "g2"],
        &properties,
    )
    .unwrap();

    let aux = model
        .block_variables("generation_blocks", &"g1", 0)
        .unwrap()
        .to_vec();
    let rows = model
        .block_constraints("generation_block_limit", &"g1", 0)
        .unwrap()
        .to_vec();
    let limits = &properties[&("g1", 0)].limits;

    for ((var, row), &limit) in aux.iter().zip(&rows).zip(limits) {
        let row = model.constraint(*row);
        // p_aux <= L, no scaling factor
        assert_eq!(row.relation, Relation::LessEqual);
        assert_eq!(row.expr.coefficient(*var), 1.0);
        assert_eq!(row.expr.len(), 1);
        assert_eq!(row.rhs, limit);
    }
}

#[rstest]
fn scaled_bounds_with_commitment(offer_curves: Curves, mut model: Model<&'static str>) {
    for entity in ["g1", "g2"] {
        for period in 0..2 {
            model.add_scalar_variable(COMMITMENT_GROUP, entity, period, Variable::binary());
        }
    }

    let properties = block_properties(&offer_curves).unwrap();
    add_block_variables(
        &mut model,
        BidCategory::Generation,
        &["g1", "g2"],
        &properties,
    )
    .unwrap();

    let status = model.scalar_variable(COMMITMENT_GROUP, &"g2", 1).unwrap();
    let aux = model
        .block_variables("generation_blocks", &"g2", 1)
        .unwrap()
        .to_vec();
    let rows = model
        .block_constraints("generation_block_limit", &"g2", 1)
        .unwrap()
        .to_vec();
    let limits = &properties[&("g2", 1)].limits;

    for ((var, row), &limit) in aux.iter().zip(&rows).zip(limits) {
        let row = model.constraint(*row);
        // p_aux - L*u <= 0
        assert_eq!(row.relation, Relation::LessEqual);
        assert_eq!(row.expr.coefficient(*var), 1.0);
        assert_eq!(row.expr.coefficient(status), -limit);
        assert_eq!(row.rhs, 0.0);
    }
}

#[rstest]
fn commitment_never_scales_virtual_bids(mut model: Model<&'static str>) {
    // A commitment variable exists, but increments are not commitment-scaled
    model.add_scalar_variable(COMMITMENT_GROUP, "g1", 0, Variable::binary());
    model.add_scalar_variable("increment", "g1", 0, Variable::non_negative());

    let mut curves = Curves::default();
    curves.insert(("g1", 0), curve(CurveMode::Block, &[(30.0, 10.0)]));
    let properties = block_properties(&curves).unwrap();

    add_block_variables(&mut model, BidCategory::Increment, &["g1"], &properties).unwrap();

    let rows = model
        .block_constraints("increment_block_limit", &"g1", 0)
        .unwrap();
    let row = model.constraint(rows[0]);
    assert_eq!(row.expr.len(), 1);
    assert_eq!(row.rhs, 10.0);
}

#[rstest]
fn ragged_periods_are_skipped(mut model: Model<&'static str>) {
    // g1 offers only in period 0
    let mut curves = Curves::default();
    curves.insert(("g1", 0), curve(CurveMode::Cumulative, &[(600.0, 1.0)]));
    let properties = block_properties(&curves).unwrap();

    add_block_variables(&mut model, BidCategory::Generation, &["g1"], &properties).unwrap();

    assert!(model.block_variables("generation_blocks", &"g1", 0).is_some());
    assert!(model.block_variables("generation_blocks", &"g1", 1).is_none());
    assert!(
        model
            .scalar_constraint("generation_block_link", &"g1", 1)
            .is_none()
    );
}
