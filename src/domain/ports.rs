/// A single addition callable. Implementations must be pure: same output for
/// same inputs, no side effects, no shared mutable state. Any implementation
/// may be substituted for another without changing observable behavior.
pub trait Adder {
    /// Short label identifying the callable form, used in logs only.
    fn name(&self) -> &'static str;

    fn add(&self, a: i64, b: i64) -> i64;
}
