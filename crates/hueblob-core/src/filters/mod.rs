pub mod pyramid;
