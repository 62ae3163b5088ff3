/// Types that can render a human-readable description of themselves.
pub trait Describer {
    /// Human-readable description of `self`.
    fn describe(&self) -> String;
}

/// Describe every item, keeping input order.
pub fn describe_all(items: &[&dyn Describer]) -> Vec<String> {
    items.iter().map(|item| item.describe()).collect()
}
