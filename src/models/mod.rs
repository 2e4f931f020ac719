pub mod business;
pub mod location;
pub mod meetup;
pub mod movie;
pub mod trail;
pub mod weather;

/// The part of a provider response that holds the result collection.
pub trait Envelope {
    type Item;

    fn into_items(self) -> Vec<Self::Item>;
}
