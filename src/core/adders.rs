use crate::domain::ports::Adder;

fn sum(a: i64, b: i64) -> i64 {
    a + b
}

/// Addition through an ordinary named function item.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedFn;

impl Adder for NamedFn {
    fn name(&self) -> &'static str {
        "named-fn"
    }

    fn add(&self, a: i64, b: i64) -> i64 {
        sum(a, b)
    }
}

/// Addition through a plain function pointer held as data. The pointer comes
/// from an anonymous closure coerced to `fn(i64, i64) -> i64`.
#[derive(Debug, Clone, Copy)]
pub struct PointerFn {
    ptr: fn(i64, i64) -> i64,
}

impl PointerFn {
    pub fn new() -> Self {
        Self { ptr: |a, b| a + b }
    }
}

impl Default for PointerFn {
    fn default() -> Self {
        Self::new()
    }
}

impl Adder for PointerFn {
    fn name(&self) -> &'static str {
        "fn-pointer"
    }

    fn add(&self, a: i64, b: i64) -> i64 {
        (self.ptr)(a, b)
    }
}

/// Addition through a boxed closure whose body is a block.
pub struct BlockClosure {
    f: Box<dyn Fn(i64, i64) -> i64 + Send + Sync>,
}

impl BlockClosure {
    pub fn new() -> Self {
        Self {
            f: Box::new(|a, b| {
                a + b
            }),
        }
    }
}

impl Default for BlockClosure {
    fn default() -> Self {
        Self::new()
    }
}

impl Adder for BlockClosure {
    fn name(&self) -> &'static str {
        "block-closure"
    }

    fn add(&self, a: i64, b: i64) -> i64 {
        (self.f)(a, b)
    }
}

/// Addition through a boxed closure whose body is a bare expression.
pub struct ExprClosure {
    f: Box<dyn Fn(i64, i64) -> i64 + Send + Sync>,
}

impl ExprClosure {
    pub fn new() -> Self {
        Self {
            f: Box::new(|a, b| a + b),
        }
    }
}

impl Default for ExprClosure {
    fn default() -> Self {
        Self::new()
    }
}

impl Adder for ExprClosure {
    fn name(&self) -> &'static str {
        "expr-closure"
    }

    fn add(&self, a: i64, b: i64) -> i64 {
        (self.f)(a, b)
    }
}

/// The four callable forms in definition order. The order is part of the
/// report contract.
pub fn default_adders() -> Vec<Box<dyn Adder>> {
    vec![
        Box::new(NamedFn),
        Box::new(PointerFn::new()),
        Box::new(BlockClosure::new()),
        Box::new(ExprClosure::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_adder_returns_96_for_fixed_operands() {
        for adder in default_adders() {
            assert_eq!(adder.add(32, 64), 96, "adder {} disagrees", adder.name());
        }
    }

    #[test]
    fn test_adders_match_native_addition() {
        let pairs = [
            (0, 0),
            (1, 2),
            (32, 64),
            (64, 32),
            (-5, 5),
            (-10, -20),
            (i64::MAX - 1, 1),
        ];

        for adder in default_adders() {
            for (a, b) in pairs {
                assert_eq!(adder.add(a, b), a + b, "adder {} at ({}, {})", adder.name(), a, b);
            }
        }
    }

    #[test]
    fn test_adders_are_commutative() {
        for adder in default_adders() {
            assert_eq!(adder.add(7, 13), adder.add(13, 7));
        }
    }

    #[test]
    fn test_all_adders_are_equivalent() {
        let pairs = [(32, 64), (0, -1), (100, 200)];

        for (a, b) in pairs {
            let results: Vec<i64> = default_adders().iter().map(|ad| ad.add(a, b)).collect();
            assert!(
                results.windows(2).all(|w| w[0] == w[1]),
                "adders disagree at ({}, {}): {:?}",
                a,
                b,
                results
            );
        }
    }

    #[test]
    fn test_default_adders_order_is_stable() {
        let names: Vec<&str> = default_adders().iter().map(|ad| ad.name()).collect();
        assert_eq!(names, ["named-fn", "fn-pointer", "block-closure", "expr-closure"]);
    }
}
