use std::error::Error;

use clap::Args;
use hadron_cg::ClebschGordanCache;
use serde_json::json;

#[derive(Args, Debug)]
pub struct CgArgs {
    /// Doubled spins and projections: j1 j2 j3 m1 m2 m3.
    #[arg(num_args = 6, allow_negative_numbers = true, required = true)]
    pub spins: Vec<i32>,
    /// Emit JSON instead of the bare value.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &CgArgs) -> Result<(), Box<dyn Error>> {
    let [j1, j2, j3, m1, m2, m3] = <[i32; 6]>::try_from(args.spins.as_slice())
        .map_err(|_| "expected six doubled spins: j1 j2 j3 m1 m2 m3")?;
    let cache = ClebschGordanCache::warmed();
    let value = cache.coefficient(j1, j2, j3, m1, m2, m3)?;
    if args.json {
        let report = json!({
            "spins": [j1, j2, j3, m1, m2, m3],
            "coefficient": value,
            "squared": value * value,
        });
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{value}");
    }
    Ok(())
}
