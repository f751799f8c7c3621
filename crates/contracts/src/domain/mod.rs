pub mod a001_order;
