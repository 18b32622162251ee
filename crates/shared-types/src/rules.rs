//! Ordered rule tables
//!
//! Exemption categories, zoning codes and land-use keywords are all
//! ordered tables of data records. They share one evaluation discipline:
//! the first record whose predicate holds wins, and table order is the
//! precedence.

/// A record in an ordered rule table
pub trait Rule<I: ?Sized> {
    fn matches(&self, input: &I) -> bool;
}

/// Return the first rule in table order that matches `input`
pub fn first_match<'a, I: ?Sized, R: Rule<I>>(table: &'a [R], input: &I) -> Option<&'a R> {
    table.iter().find(|rule| rule.matches(input))
}
