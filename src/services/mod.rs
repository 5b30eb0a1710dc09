pub mod nursery;
