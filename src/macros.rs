#![macro_use]

// The inherent method is named with a qualified path so that
// the by-value impls cannot resolve back to the operator itself.
macro_rules! impl_matrix_operator {
    ($type: ty, $op: ident, $fn: ident, $method: ident) => {
        impl std::ops::$op<&$type> for &$type {
            type Output = $type;
            fn $fn(self, rhs: &$type) -> Self::Output {
                <$type>::$method(self, rhs)
            }
        }

        impl std::ops::$op for $type {
            type Output = $type;
            fn $fn(self, rhs: $type) -> Self::Output {
                <$type>::$method(&self, &rhs)
            }
        }

        impl std::ops::$op<&$type> for $type {
            type Output = $type;
            fn $fn(self, rhs: &$type) -> Self::Output {
                <$type>::$method(&self, rhs)
            }
        }
    };
}
