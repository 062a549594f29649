pub mod des;
pub mod des_tables;
pub mod f_function;
pub mod key_schedule;
pub mod permutation;
