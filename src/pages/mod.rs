//! One module per screen the router can land on.

pub mod about;
pub mod article;
pub mod contact;
pub mod mindful_drinking;
pub mod privacy;
pub mod quiz;
pub mod resources;
pub mod search;
pub mod support;
pub mod terms;
