//! The resource types exposed by parcelhub and their table layouts.

mod order;
mod product;

pub use order::{NewOrder, Order};
pub use product::{NewProduct, Product};
