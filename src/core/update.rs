//! # State Updates / 状态更新
//!
//! Literal-or-functional state updates.
//!
//! 字面值或函数式的状态更新。

/// Either the next value itself or a function of the current value.
pub enum Update<T> {
    Set(T),
    Apply(Box<dyn FnOnce(T) -> T>),
}

impl<T> Update<T> {
    /// Wraps a function of the current value.
    pub fn with(f: impl FnOnce(T) -> T + 'static) -> Self {
        Update::Apply(Box::new(f))
    }
}

impl<T> From<T> for Update<T> {
    fn from(value: T) -> Self {
        Update::Set(value)
    }
}

/// Resolves `update` against `current` in one step.
pub fn apply_update<T>(current: T, update: Update<T>) -> T {
    match update {
        Update::Set(next) => next,
        Update::Apply(f) => f(current),
    }
}
