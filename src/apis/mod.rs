pub mod easy_repulsion;
