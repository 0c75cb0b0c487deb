pub mod cg;
pub mod run;
pub mod survival;
pub mod tabulate;
pub mod version;
