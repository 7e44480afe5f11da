//! Transform trait.

pub trait Transform<T> {
    /// Takes ownership of the item and returns it.
    fn transform_own(&self, item: T) -> T;
}
