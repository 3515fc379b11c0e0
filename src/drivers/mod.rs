pub mod xpt2046;
