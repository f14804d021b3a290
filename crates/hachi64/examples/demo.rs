//! Small Hachi64 walkthrough.
//!
//! Run:  cargo run --example demo -p hachi64

use hachi64::{decode, encode, encoded_len, Hachi64Error};

fn main() -> Result<(), Hachi64Error> {
    let samples = ["Hello, World!", "Hachi64", "你好"];

    for text in samples {
        let padded = encode(text.as_bytes(), true);
        let unpadded = encode(text.as_bytes(), false);
        println!("{:?}", text);
        println!("  padded:   {}", padded);
        println!("  unpadded: {}", unpadded);

        let round_trip = decode(&padded, true)?;
        assert_eq!(round_trip, text.as_bytes());
    }

    let blob: Vec<u8> = (0..16).collect();
    println!("{:?}", blob);
    println!("  encoded:  {}", encode(&blob, true));
    println!("  length:   {} characters", encoded_len(blob.len(), true));

    Ok(())
}
