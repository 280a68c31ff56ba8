use log::{error, info};
use std::env;
use std::process;

use zenith::parse::parse_bitboard;
use zenith::{bit_scan_forward, initialize_popcount_table, popcount, Bitboard, Result};

fn main() {
    env_logger::init();
    log_panics::init();

    initialize_popcount_table();
    info!("Population count table ready");

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("usage: zenith <bitboard>...  (hex with 0x prefix, or decimal)");
        process::exit(2);
    }

    for arg in args {
        if let Err(e) = describe(&arg) {
            error!("{}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn describe(arg: &str) -> Result<()> {
    let bb: Bitboard = parse_bitboard(arg)?;

    println!("{:#x}", bb);
    println!("popcount: {}", popcount(bb.bits()));
    match bit_scan_forward(bb.bits()) {
        Ok(index) => println!("lowest: {} ({})", index, bb.bitscan_forward()?),
        Err(e) => println!("lowest: none ({})", e),
    }
    print!("{}", bb);

    Ok(())
}
