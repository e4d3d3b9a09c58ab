/// Identity of the item collection a list is showing.
///
/// Anything comparable works: a generation counter, a query string, a document id. When it
/// changes, cached measurements no longer describe the items at their indices.
pub trait DataKey: PartialEq {}
impl<T: PartialEq> DataKey for T {}
