//! Tests for the regularized loss and accuracy computation.

use alpaca_nn::loss::{accuracy, is_one_hot, l2_regularization, weighted_cross_entropy};
use alpaca_nn::{
    define_optimization_vars, Matrix, OptimizationConfig, Parameter, ParameterStore,
    ShapeMismatchError,
};
use approx::assert_relative_eq;

fn m(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::from_data(rows).expect("rectangular test matrix")
}

fn scenario() -> (Matrix, Matrix) {
    let prediction = m(vec![vec![0.7, 0.2, 0.1], vec![0.1, 0.1, 0.8]]);
    let target = m(vec![vec![1.0, 0.0, 0.0], vec![0.0, 0.0, 1.0]]);
    (prediction, target)
}

fn store_with_bias_and_weight() -> ParameterStore {
    let mut store = ParameterStore::new();
    // l2 = (1 + 4 + 9 + 16) / 2 = 15
    store.insert(Parameter::weight("layer/W", m(vec![vec![1.0, 2.0], vec![3.0, 4.0]])));
    store.insert(Parameter::bias("layer/bias", Matrix::row_vector(vec![100.0, 100.0])));
    store
}

// ============================================================================
// Regularization
// ============================================================================

mod regularization_tests {
    use super::*;

    #[test]
    fn test_bias_parameters_are_excluded() {
        let store = store_with_bias_and_weight();
        assert_relative_eq!(l2_regularization(&store, 0.02), 0.02 * 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_store_gives_zero() {
        assert_eq!(l2_regularization(&ParameterStore::new(), 0.02), 0.0);
    }

    #[test]
    fn test_role_tag_not_name_decides() {
        let mut store = ParameterStore::new();
        // Named like a bias but tagged as a weight: it must be regularized.
        store.insert(Parameter::weight("bias_like/W", Matrix::row_vector(vec![2.0])));
        assert_relative_eq!(l2_regularization(&store, 1.0), 2.0, epsilon = 1e-12);
    }
}

// ============================================================================
// Loss
// ============================================================================

mod loss_tests {
    use super::*;

    #[test]
    fn test_scenario_loss_and_accuracy() {
        let (prediction, target) = scenario();
        let store = store_with_bias_and_weight();
        let config = OptimizationConfig::default();

        let result = define_optimization_vars(&target, &prediction, None, &store, &config).unwrap();

        let reg = 0.02 * 15.0;
        let expected = reg - (0.700001_f64.ln() + 0.800001_f64.ln());
        assert_relative_eq!(result.regularization, reg, epsilon = 1e-12);
        assert_relative_eq!(result.loss, expected, epsilon = 1e-12);
        assert_eq!(result.accuracy, 1.0);
        assert_eq!(result.example_losses.len(), 2);
        assert_relative_eq!(result.example_losses[0], -0.700001_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_all_ones_weights_match_unweighted() {
        let (prediction, target) = scenario();
        let store = ParameterStore::new();
        let config = OptimizationConfig::default();

        let plain = define_optimization_vars(&target, &prediction, None, &store, &config).unwrap();
        let ones = [1.0, 1.0, 1.0];
        let weighted = define_optimization_vars(&target, &prediction, Some(&ones[..]), &store, &config).unwrap();

        assert_relative_eq!(plain.loss, weighted.loss, epsilon = 1e-12);
        assert_eq!(plain.accuracy, weighted.accuracy);
    }

    #[test]
    fn test_class_weights_scale_true_class_term() {
        let (prediction, target) = scenario();
        let weights = [2.0, 1.0, 5.0];
        let losses = weighted_cross_entropy(&prediction, &target, Some(&weights[..]), 1e-6).unwrap();

        assert_relative_eq!(losses[0], -2.0 * 0.700001_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(losses[1], -5.0 * 0.800001_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_probability_stays_finite() {
        let prediction = m(vec![vec![0.0, 1.0]]);
        let target = m(vec![vec![1.0, 0.0]]);
        let result = define_optimization_vars(
            &target,
            &prediction,
            None,
            &ParameterStore::new(),
            &OptimizationConfig::default(),
        )
        .unwrap();

        assert!(result.loss.is_finite());
        assert_relative_eq!(result.loss, -(1e-6_f64).ln(), epsilon = 1e-9);
        assert_eq!(result.accuracy, 0.0);
    }

    #[test]
    fn test_custom_config_is_used() {
        let (prediction, target) = scenario();
        let store = store_with_bias_and_weight();
        let config = OptimizationConfig { l2_coefficient: 0.0, epsilon: 0.0 };

        let result = define_optimization_vars(&target, &prediction, None, &store, &config).unwrap();
        assert_relative_eq!(result.loss, -(0.7_f64.ln() + 0.8_f64.ln()), epsilon = 1e-12);
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let (prediction, target) = scenario();
        let store = store_with_bias_and_weight();
        let config = OptimizationConfig::default();
        let weights = [1.0, 3.0, 0.5];

        let a = define_optimization_vars(&target, &prediction, Some(&weights[..]), &store, &config).unwrap();
        let b = define_optimization_vars(&target, &prediction, Some(&weights[..]), &store, &config).unwrap();

        assert_eq!(a.loss.to_bits(), b.loss.to_bits());
        assert_eq!(a.accuracy.to_bits(), b.accuracy.to_bits());
    }

    #[test]
    fn test_one_hot_detection() {
        let (prediction, target) = scenario();
        assert!(is_one_hot(&target));
        assert!(!is_one_hot(&prediction));
        assert!(!is_one_hot(&m(vec![vec![1.0, 1.0]])));
    }
}

// ============================================================================
// Accuracy
// ============================================================================

mod accuracy_tests {
    use super::*;

    #[test]
    fn test_half_correct() {
        let prediction = m(vec![vec![0.9, 0.1], vec![0.9, 0.1]]);
        let target = m(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert_eq!(accuracy(&prediction, &target).unwrap(), 0.5);
    }

    #[test]
    fn test_ties_pick_first_index() {
        // argmax of a tied row is 0, so only the first target matches.
        let prediction = m(vec![vec![0.5, 0.5], vec![0.5, 0.5]]);
        let target = m(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert_eq!(accuracy(&prediction, &target).unwrap(), 0.5);
    }

    #[test]
    fn test_accuracy_in_unit_interval() {
        let prediction = m(vec![
            vec![0.2, 0.3, 0.5],
            vec![0.6, 0.3, 0.1],
            vec![0.1, 0.8, 0.1],
        ]);
        let target = m(vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
        ]);
        let acc = accuracy(&prediction, &target).unwrap();
        assert!((0.0..=1.0).contains(&acc));
        assert_relative_eq!(acc, 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_batch_is_zero() {
        let empty = Matrix::default();
        assert_eq!(accuracy(&empty, &empty).unwrap(), 0.0);
    }
}

// ============================================================================
// Shape errors
// ============================================================================

mod shape_error_tests {
    use super::*;

    #[test]
    fn test_batch_size_mismatch() {
        let prediction = m(vec![vec![0.5, 0.5], vec![0.5, 0.5]]);
        let target = m(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0]]);
        let err = define_optimization_vars(
            &target,
            &prediction,
            None,
            &ParameterStore::new(),
            &OptimizationConfig::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ShapeMismatchError::Operands { op: "prediction/target", left: (2, 2), right: (3, 2) }
        );
    }

    #[test]
    fn test_weight_length_mismatch() {
        let (prediction, target) = scenario();
        let weights = [1.0, 2.0];
        let err = define_optimization_vars(
            &target,
            &prediction,
            Some(&weights[..]),
            &ParameterStore::new(),
            &OptimizationConfig::default(),
        )
        .unwrap_err();

        assert_eq!(err, ShapeMismatchError::WeightLength { expected: 3, found: 2 });
        assert!(err.to_string().contains("length 2"));
    }
}
